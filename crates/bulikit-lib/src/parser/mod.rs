//! Grammar-driven parser.
//!
//! # Architecture
//!
//! Parsing runs in three stages:
//!
//! 1. The [`Tokenizer`] splits the text (served from its cache when possible).
//! 2. The matcher walks the grammar from the first rule, building
//!    [`AstItem`]s. Each grammar node reports an [`AstStatus`]; containers
//!    backtrack on `NoMatch` using the cursor's saved-position stack.
//! 3. Items of rules flagged for operator precedence are rewritten into
//!    operator trees as soon as they match.
//!
//! Syntax errors never fail a parse: they are returned as [`ParserError`]s
//! next to a best-effort tree. Only grammar integrity problems and fuel
//! exhaustion surface as [`Error`].

mod ast;
mod dump;
mod error;
mod invariants;
mod matcher;
mod operators;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use std::rc::Rc;

use bulikit_core::{ContentKey, Position};

pub use ast::{AstItem, AstKind, AstNode, AstStatus};
pub use dump::{AstView, NodeView};
pub use error::{ParserError, ParserErrorKind};

use crate::config::ParserConfig;
use crate::diagnostics::DiagnosticsPrinter;
use crate::{Error, GrammarRules, Result, TokenType, Tokenizer, Tokens};
use matcher::Matcher;

/// Outcome of [`Parser::parse`].
#[derive(Debug)]
pub struct ParseResult {
    tokens: Rc<Tokens>,
    root: AstItem,
    errors: Vec<ParserError>,
}

impl ParseResult {
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    pub fn text(&self) -> &str {
        self.tokens.text()
    }

    pub fn root(&self) -> &AstItem {
        &self.root
    }

    pub fn status(&self) -> AstStatus {
        self.root.status()
    }

    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.root.status() == AstStatus::Match
    }

    /// Position of the first error.
    pub fn error_position(&self) -> Option<Position> {
        self.errors.first().map(|e| e.position)
    }

    pub fn dump(&self) -> String {
        dump::dump(&self.root, &self.tokens)
    }

    pub fn sexpr(&self) -> String {
        dump::sexpr(&self.root, &self.tokens)
    }

    /// Tree view with token texts, for serialization.
    pub fn view(&self) -> AstView<'_> {
        AstView::new(&self.root, &self.tokens)
    }

    pub fn diagnostics(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(&self.errors).source(self.tokens.text())
    }
}

/// Key of the single-slot parse memo.
#[derive(Debug)]
struct Memo {
    key: ContentKey,
    grammar_revision: u64,
    tokenizer_revision: u64,
    ignored: BTreeSet<TokenType>,
    result: Rc<ParseResult>,
}

/// Tokenizer and grammar pool bound together.
///
/// Parsing the same text twice without touching the tokenizer, the grammar
/// or the ignored set returns the same shared result.
#[derive(Debug)]
pub struct Parser {
    tokenizer: Tokenizer,
    grammar: GrammarRules,
    config: ParserConfig,
    ignored: BTreeSet<TokenType>,
    memo: Option<Memo>,
}

impl Parser {
    pub fn new(tokenizer: Tokenizer, grammar: GrammarRules) -> Self {
        Self {
            tokenizer,
            grammar,
            config: ParserConfig::default(),
            ignored: BTreeSet::new(),
            memo: None,
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self.memo = None;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.config.recursion_limit = limit;
        self.memo = None;
        self
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.config.exec_fuel = limit;
        self.memo = None;
        self
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Token types skipped between grammar tokens (replaces the previous set).
    pub fn set_ignored(&mut self, types: impl IntoIterator<Item = TokenType>) {
        self.ignored = types.into_iter().collect();
    }

    pub fn ignored(&self) -> &BTreeSet<TokenType> {
        &self.ignored
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Drops the parse memo: the tokenizer may be replaced wholesale.
    pub fn tokenizer_mut(&mut self) -> &mut Tokenizer {
        self.memo = None;
        &mut self.tokenizer
    }

    pub fn grammar(&self) -> &GrammarRules {
        &self.grammar
    }

    /// Drops the parse memo, like [`Parser::tokenizer_mut`].
    pub fn grammar_mut(&mut self) -> &mut GrammarRules {
        self.memo = None;
        &mut self.grammar
    }

    /// Check the grammar pool can drive a parse.
    pub fn validate(&self) -> Result<()> {
        if self.grammar.is_empty() {
            return Err(Error::EmptyGrammar);
        }
        let unresolved = self.grammar.check();
        if !unresolved.is_empty() {
            return Err(Error::UnresolvedRules(unresolved));
        }
        if self.grammar.first().is_none() {
            return Err(Error::NoFirstRule);
        }
        Ok(())
    }

    pub fn parse(&mut self, text: &str) -> Result<Rc<ParseResult>> {
        self.validate()?;

        let key = ContentKey::of(text);
        if let Some(memo) = &self.memo
            && memo.key == key
            && memo.grammar_revision == self.grammar.revision()
            && memo.tokenizer_revision == self.tokenizer.revision()
            && memo.ignored == self.ignored
            && memo.result.text() == text
        {
            tracing::trace!("parse memo hit");
            return Ok(Rc::clone(&memo.result));
        }

        let tokens = self.tokenizer.tokenize(text)?;
        let first = self.grammar.first().ok_or(Error::NoFirstRule)?;

        let _span = tracing::debug_span!("parse", first = first.id(), tokens = tokens.len()).entered();
        let matcher = Matcher::new(&self.grammar, &tokens, &self.ignored, self.config);
        let (root, errors) = matcher.run(first)?;
        tracing::debug!(status = ?root.status(), errors = errors.len(), "parsed");

        let result = Rc::new(ParseResult {
            tokens,
            root,
            errors,
        });
        self.memo = Some(Memo {
            key,
            grammar_revision: self.grammar.revision(),
            tokenizer_revision: self.tokenizer.revision(),
            ignored: self.ignored.clone(),
            result: Rc::clone(&result),
        });
        Ok(result)
    }
}
