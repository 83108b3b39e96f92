//! The tokenizer: rule list, combined pattern, scan loop and cache.

use std::rc::Rc;
use std::time::Instant;

use bulikit_core::ContentKey;
use bulikit_core::utils::{collapse_whitespace, split_indent};
use regex_automata::meta::Regex;

use super::cache::{CacheStats, TokenCache};
use super::completion::{self, Proposal};
use super::{Token, TokenId, TokenType, TokenizerRule, Tokens};
use crate::config::{CacheLimits, IndentMode, TokenizerConfig};
use crate::{Error, Result};

/// Where [`Tokenizer::add_rule`] inserts a rule.
///
/// "Group" below is a contiguous run of rules sharing the new rule's token
/// type. Without such a group every policy appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddPolicy {
    #[default]
    Last,
    BeforeFirstOfType,
    AfterFirstOfType,
    BeforeLastOfType,
    AfterLastOfType,
}

/// Which rules [`Tokenizer::remove_rules`] drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovePolicy {
    #[default]
    Last,
    First,
    All,
}

#[derive(Debug)]
pub struct Tokenizer {
    rules: Vec<TokenizerRule>,
    invalid_rules: Vec<TokenizerRule>,
    config: TokenizerConfig,
    pattern: Option<Regex>,
    stale: bool,
    revision: u64,
    cache: TokenCache,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            rules: Vec::new(),
            invalid_rules: Vec::new(),
            config,
            pattern: None,
            stale: true,
            revision: 0,
            cache: TokenCache::new(config.cache),
        }
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = TokenizerRule>) -> Self {
        self.add_rules(rules, AddPolicy::Last);
        self
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn set_indent(&mut self, indent: IndentMode) {
        if self.config.indent != indent {
            self.config.indent = indent;
            self.invalidate();
        }
    }

    pub fn set_simplify_spaces(&mut self, value: bool) {
        if self.config.simplify_spaces != value {
            self.config.simplify_spaces = value;
            self.invalidate();
        }
    }

    pub fn set_cache_limits(&mut self, limits: CacheLimits) {
        self.config.cache = limits;
        self.cache.set_limits(limits);
        self.cache.evict(Instant::now());
    }

    /// Bumped on every change that can alter tokenize results.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn rules(&self) -> &[TokenizerRule] {
        &self.rules
    }

    pub fn rule(&self, index: usize) -> Option<&TokenizerRule> {
        self.rules.get(index)
    }

    /// Rules set aside because their pattern did not compile.
    pub fn invalid_rules(&self) -> &[TokenizerRule] {
        &self.invalid_rules
    }

    /// Replace all rules.
    pub fn set_rules(&mut self, rules: impl IntoIterator<Item = TokenizerRule>) {
        self.rules.clear();
        self.invalid_rules.clear();
        self.add_rules(rules, AddPolicy::Last);
        self.invalidate();
    }

    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = TokenizerRule>, policy: AddPolicy) {
        for rule in rules {
            self.add_rule(rule, policy);
        }
    }

    pub fn add_rule(&mut self, rule: TokenizerRule, policy: AddPolicy) {
        if !rule.is_valid() {
            tracing::warn!(
                token_type = rule.token_type().id(),
                pattern = rule.pattern(),
                "ignoring invalid tokenizer rule"
            );
            self.invalid_rules.push(rule);
            return;
        }
        let index = self.insert_index(policy, rule.token_type());
        self.rules.insert(index, rule);
        self.invalidate();
    }

    /// Remove rules of `token_type`. Returns how many were removed.
    pub fn remove_rules(&mut self, token_type: TokenType, policy: RemovePolicy) -> usize {
        let before = self.rules.len();
        match policy {
            RemovePolicy::All => self.rules.retain(|r| r.token_type() != token_type),
            RemovePolicy::First | RemovePolicy::Last => {
                let mut matching = self
                    .rules
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| r.token_type() == token_type)
                    .map(|(i, _)| i);
                let found = if policy == RemovePolicy::First {
                    matching.next()
                } else {
                    matching.last()
                };
                if let Some(index) = found {
                    self.rules.remove(index);
                }
            }
        }
        let removed = before - self.rules.len();
        if removed > 0 {
            self.invalidate();
        }
        removed
    }

    fn insert_index(&self, policy: AddPolicy, token_type: TokenType) -> usize {
        let mut groups: Vec<(usize, usize)> = Vec::new();
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.token_type() != token_type {
                continue;
            }
            match groups.last_mut() {
                Some((_, end)) if *end == i => *end = i + 1,
                _ => groups.push((i, i + 1)),
            }
        }

        let found = match policy {
            AddPolicy::Last => None,
            AddPolicy::BeforeFirstOfType => groups.first().map(|g| g.0),
            AddPolicy::AfterFirstOfType => groups.first().map(|g| g.1),
            AddPolicy::BeforeLastOfType => groups.last().map(|g| g.0),
            AddPolicy::AfterLastOfType => groups.last().map(|g| g.1),
        };
        found.unwrap_or(self.rules.len())
    }

    fn invalidate(&mut self) {
        self.stale = true;
        self.revision += 1;
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn is_cached(&self, text: &str) -> bool {
        self.cache.contains(text)
    }

    /// Completions offered by the rules for `text`.
    pub fn text_proposals(&self, text: &str) -> Vec<Proposal> {
        completion::proposals(&self.rules, text)
    }

    /// Split `text` into tokens.
    ///
    /// Identical text is served from the cache while the rules and options
    /// are unchanged; the returned sequence is then shared.
    pub fn tokenize(&mut self, text: &str) -> Result<Rc<Tokens>> {
        if text.is_empty() || self.rules.is_empty() {
            return Ok(Rc::new(Tokens::empty(text)));
        }
        let pattern = self.pattern()?;

        let key = ContentKey::of(text);
        let now = Instant::now();
        if let Some(tokens) = self.cache.get(key, text, now) {
            tracing::trace!(len = text.len(), "token cache hit");
            return Ok(tokens);
        }

        let _span = tracing::debug_span!("tokenize", len = text.len()).entered();
        let tokens = Rc::new(Tokens::new(text, self.scan(&pattern, text)));
        tracing::debug!(tokens = tokens.len(), "tokenized");
        self.cache.insert(key, Rc::clone(&tokens), now);
        Ok(tokens)
    }

    fn pattern(&mut self) -> Result<Regex> {
        if let Some(pattern) = &self.pattern
            && !self.stale
        {
            return Ok(pattern.clone());
        }

        let branches: Vec<String> = self.rules.iter().map(|r| r.alternation_branch()).collect();
        let pattern = Regex::new(&format!("(?m){}", branches.join("|")))
            .map_err(|e| Error::TokenizerPattern(e.to_string()))?;
        tracing::debug!(
            rules = self.rules.len(),
            revision = self.revision,
            "rebuilt tokenizer pattern"
        );
        self.pattern = Some(pattern.clone());
        self.stale = false;
        Ok(pattern)
    }

    fn scan(&self, pattern: &Regex, text: &str) -> Vec<Token> {
        let mut scan = ScanCursor::new(self.config);
        let mut tokens = Vec::new();

        for found in pattern.find_iter(text) {
            if found.is_empty() {
                continue;
            }
            let raw = &text[found.range()];
            let Some((index, rule)) = self.rules.iter().enumerate().find(|(_, r)| r.matches(raw))
            else {
                tracing::trace!(raw, "match not claimed by any rule");
                continue;
            };

            let token = scan.token(text, found.start(), found.end(), index, rule);
            if scan.tracks_indent(rule, raw, &token) {
                for synthetic in scan.indentation(raw, &token) {
                    push_linked(&mut tokens, synthetic);
                }
            }
            push_linked(&mut tokens, token);
        }
        tokens
    }
}

fn push_linked(tokens: &mut Vec<Token>, mut token: Token) {
    let id = TokenId(tokens.len());
    token.prev = id.0.checked_sub(1).map(TokenId);
    if let Some(last) = tokens.last_mut() {
        last.next = Some(id);
    }
    tokens.push(token);
}

/// Line and indentation bookkeeping for one scan.
struct ScanCursor {
    row: usize,
    line_start: usize,
    simplify_spaces: bool,
    indent: IndentMode,
    indent_width: usize,
    previous_indent: usize,
}

impl ScanCursor {
    fn new(config: TokenizerConfig) -> Self {
        Self {
            row: 1,
            line_start: 0,
            simplify_spaces: config.simplify_spaces,
            indent: config.indent,
            indent_width: match config.indent {
                IndentMode::Width(width) => width,
                IndentMode::Off | IndentMode::Auto => 0,
            },
            previous_indent: 0,
        }
    }

    fn token(
        &mut self,
        text: &str,
        start: usize,
        end: usize,
        rule_index: usize,
        rule: &TokenizerRule,
    ) -> Token {
        let raw = &text[start..end];
        let token_type = rule.token_type();
        let (indent, stripped) = split_indent(raw);
        let column = text[self.line_start..start].chars().count() + 1;
        let row = self.row;

        let is_newline = token_type == TokenType::NEWLINE;
        if is_newline {
            self.row += raw.matches('\n').count();
            self.line_start = end;
        }

        let text = if self.simplify_spaces && token_type != TokenType::COMMENT {
            collapse_whitespace(stripped)
        } else {
            stripped.to_string()
        };

        Token {
            text,
            token_type,
            rule: Some(rule_index),
            case_insensitive: rule.is_case_insensitive(),
            start,
            end,
            length: raw.chars().count(),
            row,
            column,
            indent: if is_newline { 0 } else { indent },
            prev: None,
            next: None,
        }
    }

    fn tracks_indent(&mut self, rule: &TokenizerRule, raw: &str, token: &Token) -> bool {
        if !self.indent.is_enabled()
            || rule.ignores_indent()
            || raw.trim().is_empty()
            || token.column != 1
        {
            return false;
        }
        if self.indent == IndentMode::Auto && self.indent_width == 0 && token.indent > 0 {
            self.indent_width = token.indent;
        }
        self.indent_width > 0
    }

    /// INDENT/DEDENT tokens (plus a WRONG_* remainder) for the change from
    /// the previous indented line to `token`.
    ///
    /// Indent tokens cover the indentation characters; dedent tokens are
    /// zero-width, placed where the token text starts.
    fn indentation(&mut self, raw: &str, token: &Token) -> Vec<Token> {
        let width = self.indent_width;
        let current = token.indent;
        let previous = std::mem::replace(&mut self.previous_indent, current);

        let mut out = Vec::new();
        if current > previous {
            let (steps, rest) = ((current - previous) / width, (current - previous) % width);
            for step in 0..steps {
                let offset = previous + width * step;
                out.push(self.synthetic(raw, token, TokenType::INDENT, offset, width));
            }
            if rest > 0 {
                let offset = previous + width * steps;
                out.push(self.synthetic(raw, token, TokenType::WRONG_INDENT, offset, rest));
            }
        } else if current < previous {
            let (steps, rest) = ((previous - current) / width, (previous - current) % width);
            for _ in 0..steps {
                out.push(self.synthetic(raw, token, TokenType::DEDENT, current, 0));
            }
            if rest > 0 {
                out.push(self.synthetic(raw, token, TokenType::WRONG_DEDENT, current, 0));
            }
        }
        out
    }

    fn synthetic(
        &self,
        raw: &str,
        token: &Token,
        token_type: TokenType,
        offset: usize,
        length: usize,
    ) -> Token {
        let start = token.start + byte_index(raw, offset);
        let end = token.start + byte_index(raw, offset + length);
        Token {
            text: String::new(),
            token_type,
            rule: None,
            case_insensitive: false,
            start,
            end,
            length,
            row: token.row,
            column: token.column + offset,
            indent: length,
            prev: None,
            next: None,
        }
    }
}

fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(i, _)| i)
}
