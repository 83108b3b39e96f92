use serde::Serialize;

use crate::{Token, TokenType};

/// Operator class, disambiguated by position during re-association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum OperatorArity {
    /// Prefix operator, read where an operand is expected.
    Unary,
    /// Infix operator between two operands.
    Binary,
    /// Postfix operator applied to the preceding operand (e.g. `[i]`).
    Index,
}

/// What a precedence entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrecedenceSubject {
    Token,
    /// A rule item, matched by rule id.
    Item,
}

/// A child of an operator sequence, as seen by the precedence table.
#[derive(Debug, Clone, Copy)]
pub enum OperatorCandidate<'a> {
    Token(&'a Token),
    Item(Option<&'a str>),
}

/// One row of the precedence table.
///
/// Higher `priority` binds tighter. An empty `values` list matches every
/// token (or every item) of the subject kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrecedenceEntry {
    pub priority: i32,
    pub subject: PrecedenceSubject,
    pub arity: OperatorArity,
    pub token_type: Option<TokenType>,
    pub values: Vec<String>,
}

impl PrecedenceEntry {
    pub fn token(priority: i32, arity: OperatorArity) -> Self {
        Self {
            priority,
            subject: PrecedenceSubject::Token,
            arity,
            token_type: None,
            values: Vec::new(),
        }
    }

    pub fn item(priority: i32, arity: OperatorArity) -> Self {
        Self {
            priority,
            subject: PrecedenceSubject::Item,
            arity,
            token_type: None,
            values: Vec::new(),
        }
    }

    /// Restrict a token entry to one token type.
    pub fn of_type(mut self, token_type: TokenType) -> Self {
        self.token_type = Some(token_type);
        self
    }

    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn applies_to(&self, candidate: OperatorCandidate<'_>) -> bool {
        match (self.subject, candidate) {
            (PrecedenceSubject::Token, OperatorCandidate::Token(token)) => {
                self.token_type.is_none_or(|t| token.is(t)) && token.text_equals_any(&self.values)
            }
            (PrecedenceSubject::Item, OperatorCandidate::Item(id)) => {
                self.values.is_empty() || id.is_some_and(|id| self.values.iter().any(|v| v == id))
            }
            _ => false,
        }
    }
}
