use bulikit_core::{Cursor, Position};

use super::{Token, TokenId};

/// A tokenized text: the source plus its tokens in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    text: String,
    tokens: Vec<Token>,
}

impl Tokens {
    pub(crate) fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    pub fn empty(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0)
    }

    /// Token for an id handed out by this sequence.
    ///
    /// # Panics
    /// If `id` belongs to another sequence.
    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.0]
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token)> {
        self.tokens.iter().enumerate().map(|(i, t)| (TokenId(i), t))
    }

    pub fn ids(&self) -> impl Iterator<Item = TokenId> {
        (0..self.tokens.len()).map(TokenId)
    }

    pub fn cursor(&self) -> Cursor<'_, Token> {
        Cursor::new(&self.tokens)
    }

    pub fn first(&self) -> Option<TokenId> {
        (!self.tokens.is_empty()).then_some(TokenId(0))
    }

    pub fn last(&self) -> Option<TokenId> {
        self.tokens.len().checked_sub(1).map(TokenId)
    }

    /// Token covering 1-based `column` on 1-based `row`.
    pub fn token_at(&self, column: usize, row: usize) -> Option<TokenId> {
        let mut current = self.first();
        while let Some(id) = current {
            let token = self.token(id);
            if token.row() >= row {
                break;
            }
            current = token.next();
        }

        while let Some(id) = current {
            let token = self.token(id);
            if token.row() != row || token.column() > column {
                return None;
            }
            if column < token.column_end() {
                return Some(id);
            }
            current = token.next();
        }
        None
    }

    /// Source line of `token` with the token underlined by carets.
    ///
    /// Without a token, points just past the last token.
    pub fn excerpt(&self, token: Option<TokenId>) -> String {
        match token.and_then(|id| self.get(id)) {
            Some(t) => self.excerpt_at(t.position(), t.length()),
            None => match self.last().map(|id| self.token(id)) {
                Some(t) => self.render_excerpt(t.row(), t.column_end(), 1, '^'),
                None => String::new(),
            },
        }
    }

    /// Source line at `position` with `length` characters underlined.
    pub fn excerpt_at(&self, position: Position, length: usize) -> String {
        self.render_excerpt(position.row, position.column, length.max(1), '>')
    }

    fn render_excerpt(&self, row: usize, column: usize, length: usize, past_end: char) -> String {
        let Some(line) = row.checked_sub(1).and_then(|r| self.text.split('\n').nth(r)) else {
            return format!("position {row}:{column} is outside text");
        };
        let width = line.chars().count();
        let marker = match column.checked_sub(1) {
            None => "<--".to_string(),
            Some(col) if col < width => format!("{}{}", ".".repeat(col), "^".repeat(length)),
            Some(_) => format!("{}{past_end}", "-".repeat(width)),
        };
        format!("{line}\n{marker}")
    }
}

impl std::ops::Index<TokenId> for Tokens {
    type Output = Token;

    fn index(&self, id: TokenId) -> &Token {
        self.token(id)
    }
}
