use std::ops::Range;

use bulikit_core::Position;
use serde::Serialize;

use super::ast::AstItem;
use crate::TokenId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParserErrorKind {
    /// An element of the first rule did not match.
    InvalidSyntax,
    /// Tokens are left after the first rule matched.
    UnknownSyntax,
    /// The text stopped in the middle of a construct.
    UnexpectedEnd,
}

impl ParserErrorKind {
    pub fn default_message(self) -> &'static str {
        match self {
            ParserErrorKind::InvalidSyntax => "invalid syntax",
            ParserErrorKind::UnknownSyntax => "unknown syntax",
            ParserErrorKind::UnexpectedEnd => "unexpected end of text",
        }
    }
}

/// A syntax error found while parsing. Returned as data next to the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParserError {
    pub kind: ParserErrorKind,
    pub message: String,
    /// Offending token; `None` when the error is at the end of the text.
    pub token: Option<TokenId>,
    pub position: Position,
    /// Byte range in the source; empty at the end of the text.
    pub range: Range<usize>,
    /// Grammar node that was expected, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// What was matched of the failing element.
    #[serde(skip)]
    pub partial: Option<AstItem>,
}

impl ParserError {
    pub(crate) fn new(
        kind: ParserErrorKind,
        token: Option<TokenId>,
        position: Position,
        range: Range<usize>,
    ) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
            token,
            position,
            range,
            context: None,
            partial: None,
        }
    }

    pub(crate) fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub(crate) fn partial(mut self, partial: AstItem) -> Self {
        self.partial = Some(partial);
        self
    }

    /// `expected <context>`, when the expected grammar node is known.
    pub fn expected(&self) -> Option<String> {
        self.context.as_ref().map(|context| format!("expected {context}"))
    }
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.message)?;
        if let Some(context) = &self.context {
            write!(f, " (expected {context})")?;
        }
        Ok(())
    }
}
