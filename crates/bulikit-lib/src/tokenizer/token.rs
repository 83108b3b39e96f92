use std::ops::Range;

use bulikit_core::{Position, Span};
use serde::Serialize;

use super::TokenType;

/// Index of a token inside its [`Tokens`](super::Tokens) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TokenId(pub(crate) usize);

impl TokenId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A positioned piece of source text.
///
/// `text` has its leading whitespace removed (counted in `indent`);
/// `length`, `column` and the byte range describe the raw match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub(crate) text: String,
    pub(crate) token_type: TokenType,
    #[serde(skip)]
    pub(crate) rule: Option<usize>,
    #[serde(skip)]
    pub(crate) case_insensitive: bool,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) length: usize,
    pub(crate) row: usize,
    pub(crate) column: usize,
    pub(crate) indent: usize,
    #[serde(skip)]
    pub(crate) prev: Option<TokenId>,
    #[serde(skip)]
    pub(crate) next: Option<TokenId>,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type == token_type
    }

    /// Index of the producing rule in the tokenizer, `None` for synthesized
    /// indentation tokens.
    pub fn rule_index(&self) -> Option<usize> {
        self.rule
    }

    /// Byte offset of the raw match start.
    pub fn position_start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the raw match end.
    pub fn position_end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Raw match length, in characters.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Column one past the last character.
    pub fn column_end(&self) -> usize {
        self.column + self.length
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }

    pub fn span(&self) -> Span {
        Span::new(self.position(), Position::new(self.row, self.column_end()))
    }

    pub fn prev(&self) -> Option<TokenId> {
        self.prev
    }

    pub fn next(&self) -> Option<TokenId> {
        self.next
    }

    /// Compare text with `value`, ignoring case when the rule does.
    pub fn text_equals(&self, value: &str) -> bool {
        if self.case_insensitive {
            self.text.to_lowercase() == value.to_lowercase()
        } else {
            self.text == value
        }
    }

    /// `true` if `values` is empty or any of them equals the text.
    pub fn text_equals_any<S: AsRef<str>>(&self, values: &[S]) -> bool {
        values.is_empty() || values.iter().any(|v| self.text_equals(v.as_ref()))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = if self.is(TokenType::NEWLINE) { "" } else { &self.text };
        write!(
            f,
            "{}:{} {} {:?}",
            self.row, self.column, self.token_type, text
        )
    }
}
