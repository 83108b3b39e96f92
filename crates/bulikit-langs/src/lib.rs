//! Language definitions: tokenizer rules, grammar and ignored token types
//! bundled under a name.

use std::rc::Rc;
use std::sync::Arc;

use bulikit_lib::grammar::GrammarRules;
use bulikit_lib::{
    ConfigError, Parser, Proposal, TokenType, Tokenizer, TokenizerConfig, TokenizerRule, Tokens,
};

pub mod builtin;
#[cfg(feature = "lang-calc")]
pub mod calc;
#[cfg(all(test, feature = "lang-calc"))]
mod calc_tests;
#[cfg(feature = "lang-xml")]
pub mod xml;
#[cfg(all(test, feature = "lang-xml"))]
mod xml_tests;

pub use builtin::*;


/// User-facing language handle.
pub type Lang = Arc<dyn LangImpl>;

#[derive(Debug, thiserror::Error)]
pub enum LangError {
    #[error("language `{0}` has no grammar")]
    NoGrammar(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] bulikit_lib::Error),
}

/// What a language offers to tools.
///
/// Engines hold per-text caches and are not shared across threads, so every
/// call to [`LangImpl::tokenizer`] or [`LangImpl::parser`] builds a fresh one.
/// Keep it around to benefit from caching.
pub trait LangImpl: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn extensions(&self) -> &[&'static str];

    fn tokenizer(&self) -> Tokenizer;
    /// `None` for tokenizer-only languages.
    fn grammar(&self) -> Option<Result<GrammarRules, ConfigError>>;
    /// Token types the parser skips between grammar tokens.
    fn ignored(&self) -> &[TokenType];

    fn has_grammar(&self) -> bool {
        self.grammar().is_some()
    }

    fn parser(&self) -> Result<Parser, LangError> {
        let grammar = self
            .grammar()
            .ok_or_else(|| LangError::NoGrammar(self.name().to_string()))??;
        let mut parser = Parser::new(self.tokenizer(), grammar);
        parser.set_ignored(self.ignored().iter().copied());
        Ok(parser)
    }

    fn tokenize(&self, text: &str) -> Result<Rc<Tokens>, LangError> {
        Ok(self.tokenizer().tokenize(text)?)
    }

    fn text_proposals(&self, text: &str) -> Vec<Proposal> {
        self.tokenizer().text_proposals(text)
    }
}

/// Table-driven [`LangImpl`].
#[derive(Debug, Clone)]
pub struct LanguageDef {
    name: &'static str,
    description: &'static str,
    extensions: &'static [&'static str],
    config: TokenizerConfig,
    rules: fn() -> Vec<TokenizerRule>,
    grammar: Option<fn() -> Result<GrammarRules, ConfigError>>,
    ignored: &'static [TokenType],
}

impl LanguageDef {
    pub fn new(name: &'static str, extensions: &'static [&'static str]) -> Self {
        Self {
            name,
            description: "",
            extensions,
            config: TokenizerConfig::default(),
            rules: Vec::new,
            grammar: None,
            ignored: &[],
        }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn with_config(mut self, config: TokenizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_rules(mut self, rules: fn() -> Vec<TokenizerRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_grammar(mut self, grammar: fn() -> Result<GrammarRules, ConfigError>) -> Self {
        self.grammar = Some(grammar);
        self
    }

    pub fn with_ignored(mut self, ignored: &'static [TokenType]) -> Self {
        self.ignored = ignored;
        self
    }
}

impl LangImpl for LanguageDef {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn extensions(&self) -> &[&'static str] {
        self.extensions
    }

    fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.config).with_rules((self.rules)())
    }

    fn grammar(&self) -> Option<Result<GrammarRules, ConfigError>> {
        self.grammar.map(|build| build())
    }

    fn ignored(&self) -> &[TokenType] {
        self.ignored
    }

    fn has_grammar(&self) -> bool {
        self.grammar.is_some()
    }
}
