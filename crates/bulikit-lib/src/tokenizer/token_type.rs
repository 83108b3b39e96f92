use serde::Serialize;

/// Category of a token.
///
/// Languages declare their own categories as constants:
///
/// ```
/// use bulikit_lib::TokenType;
/// const NUMBER: TokenType = TokenType::new("Number", "A number");
/// assert_eq!(NUMBER.id(), "Number");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TokenType {
    id: &'static str,
    description: &'static str,
}

impl TokenType {
    pub const UNKNOWN: TokenType = TokenType::new("Unknown", "Unknown token");
    pub const NEWLINE: TokenType = TokenType::new("NewLine", "A line feed");
    pub const SPACE: TokenType = TokenType::new("Space", "A space");
    pub const INDENT: TokenType = TokenType::new("Indent", "Indentation increased");
    pub const DEDENT: TokenType = TokenType::new("Dedent", "Indentation decreased");
    pub const WRONG_INDENT: TokenType =
        TokenType::new("WrongIndent", "Indentation is not a multiple of the indent width");
    pub const WRONG_DEDENT: TokenType =
        TokenType::new("WrongDedent", "Dedentation is not a multiple of the indent width");
    pub const COMMENT: TokenType = TokenType::new("Comment", "A comment");

    pub const fn new(id: &'static str, description: &'static str) -> Self {
        Self { id, description }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// SPACE or NEWLINE.
    pub fn is_whitespace(&self) -> bool {
        *self == TokenType::SPACE || *self == TokenType::NEWLINE
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id)
    }
}
