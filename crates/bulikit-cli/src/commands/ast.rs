//! Print the syntax tree of a source.

use bulikit_lib::{AstView, ParseResult, ParserError};
use serde::Serialize;

use super::source::{LoadedSource, SourceArgs};
use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstFormat {
    Tree,
    Sexpr,
    Json,
}

pub struct AstArgs {
    pub source: SourceArgs,
    pub format: AstFormat,
    pub color: bool,
}

#[derive(Serialize)]
struct AstOutput<'a> {
    valid: bool,
    tree: AstView<'a>,
    errors: &'a [ParserError],
}

pub fn run(args: AstArgs) -> Result<(), CliError> {
    let source = args.source.load()?;
    let mut parser = source.lang.parser()?;
    let result = parser.parse(&source.text)?;

    print!("{}", render(&result, args.format)?);
    if !result.is_valid() {
        eprint!("{}", render_diagnostics(&result, &source, args.color));
        return Err(CliError::InvalidSource);
    }
    Ok(())
}

pub fn render(result: &ParseResult, format: AstFormat) -> Result<String, CliError> {
    Ok(match format {
        AstFormat::Tree => result.dump(),
        AstFormat::Sexpr => format!("{}\n", result.sexpr()),
        AstFormat::Json => {
            let output = AstOutput {
                valid: result.is_valid(),
                tree: result.view(),
                errors: result.errors(),
            };
            format!("{}\n", serde_json::to_string_pretty(&output)?)
        }
    })
}

/// Rendered diagnostics, ending with a newline.
pub fn render_diagnostics(result: &ParseResult, source: &LoadedSource, color: bool) -> String {
    let printer = result.diagnostics().colored(color);
    let printer = match &source.path {
        Some(path) => printer.path(path),
        None => printer,
    };
    let mut out = printer.render();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
