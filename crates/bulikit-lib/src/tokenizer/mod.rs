//! Regex-driven tokenizer.
//!
//! Rules are tried as one alternation; the first rule in declaration order
//! whose pattern matches a captured text as a whole decides the token type.
//! Results are cached per input text.

mod cache;
mod completion;
mod lexer;
mod rule;
mod token;
mod token_type;
mod tokens;

pub use cache::CacheStats;
pub use completion::Proposal;
pub use lexer::{AddPolicy, RemovePolicy, Tokenizer};
pub use rule::{Completion, RuleBuilder, TokenizerRule};
pub use token::{Token, TokenId};
pub use token_type::TokenType;
pub use tokens::Tokens;

#[cfg(test)]
mod cache_tests;
