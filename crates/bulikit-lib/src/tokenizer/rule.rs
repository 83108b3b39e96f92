//! Tokenizer rules: a pattern bound to a token type, plus completion hints.

use regex_automata::meta::Regex;
use serde::Serialize;

use super::TokenType;
use crate::ConfigError;

/// Separates the matchable part of a completion value from a snippet tail.
pub(crate) const COMPLETION_MARKER: char = '\x01';

/// An autocomplete entry carried by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub value: String,
    pub description: Option<String>,
}

impl Completion {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Part of the value that is compared against typed text.
    pub fn match_text(&self) -> &str {
        match self.value.split_once(COMPLETION_MARKER) {
            Some((head, _)) if !head.is_empty() => head,
            _ => &self.value,
        }
    }
}

/// A pattern that produces tokens of one type.
///
/// Patterns are case-insensitive unless built with
/// [`RuleBuilder::case_sensitive`]. A rule that fails to compile is either
/// rejected ([`TokenizerRule::new`], [`RuleBuilder::build`]) or kept as an
/// invalid rule ([`RuleBuilder::build_lenient`]) that tokenizers set aside.
#[derive(Debug, Clone)]
pub struct TokenizerRule {
    token_type: TokenType,
    pattern: String,
    case_insensitive: bool,
    description: Option<String>,
    completions: Vec<Completion>,
    completion_char: Option<char>,
    ignore_indent: bool,
    anchored: Option<Regex>,
    errors: Vec<String>,
}

impl TokenizerRule {
    pub fn new(token_type: TokenType, pattern: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(token_type, pattern).build()
    }

    pub fn builder(token_type: TokenType, pattern: impl Into<String>) -> RuleBuilder {
        RuleBuilder {
            token_type,
            pattern: pattern.into(),
            case_insensitive: true,
            description: None,
            completions: Vec::new(),
            completion_char: None,
            ignore_indent: false,
        }
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    pub fn completion_char(&self) -> Option<char> {
        self.completion_char
    }

    /// Tokens of this rule never produce indentation tokens.
    pub fn ignores_indent(&self) -> bool {
        self.ignore_indent
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.anchored.is_some()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether the pattern matches `text` as a whole.
    pub fn matches(&self, text: &str) -> bool {
        self.anchored.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Pattern fragment for the tokenizer's combined alternation.
    pub(crate) fn alternation_branch(&self) -> String {
        if self.case_insensitive {
            format!("(?i:{})", self.pattern)
        } else {
            format!("(?:{})", self.pattern)
        }
    }

    /// Completions whose match text satisfies `prefix`.
    pub(crate) fn matching_completions<'r>(
        &'r self,
        prefix: &'r Regex,
    ) -> impl Iterator<Item = &'r Completion> + 'r {
        self.completions
            .iter()
            .filter(move |c| prefix.is_match(c.match_text()))
    }
}

/// Builder for [`TokenizerRule`].
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    token_type: TokenType,
    pattern: String,
    case_insensitive: bool,
    description: Option<String>,
    completions: Vec<Completion>,
    completion_char: Option<char>,
    ignore_indent: bool,
}

impl RuleBuilder {
    pub fn case_sensitive(mut self) -> Self {
        self.case_insensitive = false;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completion(mut self, completion: Completion) -> Self {
        self.completions.push(completion);
        self
    }

    pub fn completions(mut self, completions: impl IntoIterator<Item = Completion>) -> Self {
        self.completions.extend(completions);
        self
    }

    pub fn completion_char(mut self, c: char) -> Self {
        self.completion_char = Some(c);
        self
    }

    pub fn ignore_indent(mut self) -> Self {
        self.ignore_indent = true;
        self
    }

    pub fn build(self) -> Result<TokenizerRule, ConfigError> {
        let anchored = compile_anchored(&self.pattern, self.case_insensitive).map_err(|message| {
            ConfigError::InvalidPattern {
                token_type: self.token_type.id(),
                pattern: self.pattern.clone(),
                message,
            }
        })?;
        Ok(self.finish(Some(anchored), Vec::new()))
    }

    /// Like [`RuleBuilder::build`], but keeps an uncompilable rule around,
    /// marked invalid, instead of failing.
    pub fn build_lenient(self) -> TokenizerRule {
        match compile_anchored(&self.pattern, self.case_insensitive) {
            Ok(anchored) => self.finish(Some(anchored), Vec::new()),
            Err(message) => self.finish(None, vec![message]),
        }
    }

    fn finish(self, anchored: Option<Regex>, errors: Vec<String>) -> TokenizerRule {
        TokenizerRule {
            token_type: self.token_type,
            pattern: self.pattern,
            case_insensitive: self.case_insensitive,
            description: self.description,
            completions: self.completions,
            completion_char: self.completion_char,
            ignore_indent: self.ignore_indent,
            anchored,
            errors,
        }
    }
}

fn compile_anchored(pattern: &str, case_insensitive: bool) -> Result<Regex, String> {
    if pattern.is_empty() {
        return Err("pattern is empty".to_string());
    }
    // Validate the bare pattern first: wrapping could otherwise rebalance
    // stray parentheses into something that compiles.
    regex_syntax::Parser::new()
        .parse(pattern)
        .map_err(|e| e.to_string())?;

    let flags = if case_insensitive { "(?i)" } else { "" };
    Regex::new(&format!("{flags}^(?:{pattern})$")).map_err(|e| e.to_string())
}
