//! bulikit: regex-driven tokenizer and grammar-combinator parser.
//!
//! A language is described by an ordered list of [`TokenizerRule`]s and a
//! [`GrammarRules`] pool. The [`Parser`] tokenizes input, matches it against
//! the pool starting at the first rule, and rewrites flat operator sequences
//! into precedence-correct trees.
//!
//! # Example
//!
//! ```
//! use bulikit_lib::grammar::{GrammarNode as G, GrammarRules, RuleOptions};
//! use bulikit_lib::{Parser, TokenType, Tokenizer, TokenizerRule};
//!
//! const NUMBER: TokenType = TokenType::new("Number", "A number");
//!
//! let mut tokenizer = Tokenizer::default();
//! tokenizer.add_rule(TokenizerRule::new(NUMBER, r"\d+").unwrap(), Default::default());
//! tokenizer.add_rule(TokenizerRule::new(TokenType::SPACE, r"\s+").unwrap(), Default::default());
//!
//! let mut grammar = GrammarRules::new();
//! grammar
//!     .define("Numbers", RuleOptions::new().first(), vec![G::one_or_more(vec![G::token(NUMBER)])])
//!     .unwrap();
//!
//! let mut parser = Parser::new(tokenizer, grammar);
//! parser.set_ignored([TokenType::SPACE]);
//! let result = parser.parse("1 2 3").unwrap();
//! assert!(result.is_valid());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::collections::BTreeSet;

pub mod config;
pub mod diagnostics;
pub mod grammar;
pub mod parser;
pub mod tokenizer;

#[cfg(test)]
mod test_utils;

pub use config::{CacheLimits, IndentMode, ParserConfig, TokenizerConfig};
pub use diagnostics::DiagnosticsPrinter;
pub use grammar::{GrammarNode, GrammarRule, GrammarRules, OperatorArity, PrecedenceEntry, RuleOptions};
pub use parser::{
    AstItem, AstKind, AstNode, AstStatus, AstView, ParseResult, Parser, ParserError, ParserErrorKind,
};
pub use tokenizer::{
    AddPolicy, Completion, Proposal, RemovePolicy, Token, TokenId, TokenType, Tokenizer,
    TokenizerRule, Tokens,
};

/// Errors that stop a tokenize or parse call from starting or finishing.
///
/// Syntax errors in the input are not represented here: they are returned as
/// [`ParserError`] data alongside a best-effort tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many matcher steps).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (rule references nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("grammar has no rules")]
    EmptyGrammar,

    #[error(
        "grammar references undefined rules: {}",
        .0.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    )]
    UnresolvedRules(BTreeSet<String>),

    #[error("grammar has no first rule")]
    NoFirstRule,

    /// The combined tokenizer pattern could not be compiled.
    #[error("failed to build tokenizer pattern: {0}")]
    TokenizerPattern(String),
}

/// Construction-time failures of rules and grammars.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid pattern `{pattern}` for token type `{token_type}`: {message}")]
    InvalidPattern {
        token_type: &'static str,
        pattern: String,
        message: String,
    },

    #[error("rule id cannot be empty")]
    EmptyRuleId,

    #[error("rule `{0}` is already defined")]
    DuplicateRule(String),

    #[error("rule `{0}` has no elements")]
    EmptyRule(String),

    #[error("rule `{rule}`: {container} has no alternatives")]
    EmptyAlternatives {
        rule: String,
        container: &'static str,
    },

    #[error("rule `{0}` is not defined")]
    UnknownRule(String),
}

pub type Result<T> = std::result::Result<T, Error>;
