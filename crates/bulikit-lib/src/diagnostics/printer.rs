//! Builder-pattern printer for rendering parser errors.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::ParserError;

/// Renders [`ParserError`]s, with source excerpts when a source is given.
pub struct DiagnosticsPrinter<'a> {
    errors: &'a [ParserError],
    source: Option<&'a str>,
    path: Option<&'a str>,
    colored: bool,
}

impl<'a> DiagnosticsPrinter<'a> {
    pub fn new(errors: &'a [ParserError]) -> Self {
        Self {
            errors,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    /// Render `row:column: message` lines only.
    pub fn without_source(mut self) -> Self {
        self.source = None;
        self
    }

    pub fn path(mut self, path: &'a str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, error) in self.errors.iter().enumerate() {
            let expected = error.expected();
            let annotation = AnnotationKind::Primary.span(adjust_range(error.range.clone(), source));
            let annotation = match &expected {
                Some(label) => annotation.label(label),
                None => annotation,
            };
            let mut snippet = Snippet::source(source).line_start(1).annotation(annotation);
            if let Some(path) = self.path {
                snippet = snippet.path(path);
            }

            let report: Vec<Group> = vec![Level::ERROR.primary_title(&error.message).element(snippet)];

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&report))?;
        }
        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            if let Some(path) = self.path {
                write!(w, "{path}:")?;
            }
            write!(w, "{error}")?;
        }
        Ok(())
    }
}

/// Widen an empty range to the character it sits on.
pub(super) fn adjust_range(range: Range<usize>, source: &str) -> Range<usize> {
    let start = range.start.min(source.len());
    let end = range.end.min(source.len());
    if start < end {
        return start..end;
    }
    let width = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    start..start + width
}
