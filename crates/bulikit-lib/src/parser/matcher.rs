//! Grammar matcher: walks grammar nodes over a token cursor.

use std::collections::BTreeSet;

use bulikit_core::{Cursor, Position};

use super::ast::{AstItem, AstKind, AstStatus};
use super::error::{ParserError, ParserErrorKind};
use super::operators;
use crate::config::ParserConfig;
use crate::grammar::{GrammarNode, GrammarRule, GrammarRules, RuleOptions, TokenMatch};
use crate::{Error, Token, TokenId, TokenType, Tokens};

pub(super) struct Matcher<'p> {
    grammar: &'p GrammarRules,
    tokens: &'p Tokens,
    ignored: &'p BTreeSet<TokenType>,
    pub(super) cursor: Cursor<'p, Token>,
    depth: u32,
    recursion_limit: Option<u32>,
    exec_fuel: Option<u32>,
    fatal_error: Option<Error>,
    /// Start of the latest repetition attempt that ran out of tokens after
    /// consuming some.
    truncated_at: Option<isize>,
}

impl<'p> Matcher<'p> {
    pub fn new(
        grammar: &'p GrammarRules,
        tokens: &'p Tokens,
        ignored: &'p BTreeSet<TokenType>,
        config: ParserConfig,
    ) -> Self {
        Self {
            grammar,
            tokens,
            ignored,
            cursor: tokens.cursor(),
            depth: 0,
            recursion_limit: config.recursion_limit,
            exec_fuel: config.exec_fuel,
            fatal_error: None,
            truncated_at: None,
        }
    }

    /// Match `first` against the whole token sequence.
    pub fn run(mut self, first: &GrammarRule) -> Result<(AstItem, Vec<ParserError>), Error> {
        let mut root = AstItem::for_rule(AstKind::Root, first).with_status(AstStatus::Match);
        let mut errors = Vec::new();
        self.cursor.first();

        for element in first.elements() {
            let start = self.cursor.index();
            let checked = self.check(element, first.options());
            if let Some(err) = self.fatal_error.take() {
                return Err(err);
            }

            match checked.status {
                AstStatus::Match => root.absorb(checked),
                AstStatus::End => {
                    let consumed = !checked.tokens.is_empty();
                    if consumed {
                        root.status = AstStatus::Invalid;
                        errors.push(
                            self.error_here(ParserErrorKind::UnexpectedEnd, None)
                                .context(element.to_string())
                                .partial(checked.clone()),
                        );
                    }
                    root.absorb(checked);
                    break;
                }
                AstStatus::NoMatch | AstStatus::Invalid => {
                    self.cursor.restore(start);
                    self.skip_ignored();
                    root.status = AstStatus::Invalid;
                    errors.push(
                        self.error_here(ParserErrorKind::InvalidSyntax, self.current_id())
                            .context(element.to_string())
                            .partial(checked),
                    );
                    break;
                }
            }
        }

        if root.status != AstStatus::Invalid {
            self.skip_ignored();
            if let Some(id) = self.current_id() {
                root.status = AstStatus::Invalid;
                errors.push(if self.truncated_here() {
                    self.error_here(ParserErrorKind::UnexpectedEnd, None)
                } else {
                    self.error_here(ParserErrorKind::UnknownSyntax, Some(id))
                });
            }
        }

        self.ensure_balanced();
        operators::reassociate(&mut root, self.grammar, self.tokens);
        Ok((root, errors))
    }

    pub(super) fn check(&mut self, node: &GrammarNode, options: RuleOptions) -> AstItem {
        if !self.consume_fuel() {
            return AstItem::new(AstKind::Group);
        }
        match node {
            GrammarNode::Token(m) => self.check_token(m, options),
            GrammarNode::Rule(id) => self.check_rule(id),
            GrammarNode::OneOf(alternatives) => self.check_one_of(alternatives, options),
            GrammarNode::Optional(alternatives) => {
                self.check_repeat(alternatives, options, 0, Some(1))
            }
            GrammarNode::ZeroOrMore(alternatives) => {
                self.check_repeat(alternatives, options, 0, None)
            }
            GrammarNode::OneOrMore(alternatives) => {
                self.check_repeat(alternatives, options, 1, None)
            }
        }
    }

    fn check_token(&mut self, m: &TokenMatch, options: RuleOptions) -> AstItem {
        let mut item = AstItem::new(AstKind::Group);
        self.cursor.push_index();
        self.skip_ignored();

        let Some(id) = self.current_id() else {
            self.cursor.pop_index();
            return item.with_status(AstStatus::End);
        };
        let token = self.tokens.token(id);
        let accepted = token.is(m.token_type)
            && token.text_equals_any(&m.values)
            && !(options.is_not_preceded_by_space() && self.preceded_by_space(token));
        if !accepted {
            self.cursor.pop_index();
            return item;
        }

        self.cursor.discard_index();
        item.push_token(self.tokens, id, m.in_ast);
        self.cursor.next();
        self.skip_ignored();
        item.with_status(AstStatus::Match)
    }

    fn check_rule(&mut self, id: &str) -> AstItem {
        let Some(rule) = self.grammar.get(id) else {
            tracing::warn!(rule = id, "reference to undefined rule");
            return AstItem::new(AstKind::Rule);
        };
        if !self.enter_recursion() {
            return AstItem::new(AstKind::Rule);
        }

        let mut item = AstItem::for_rule(AstKind::Rule, rule).with_status(AstStatus::Match);
        for element in rule.elements() {
            let checked = self.check(element, rule.options());
            let status = checked.status;
            item.absorb(checked);
            if status != AstStatus::Match {
                item.status = status;
                break;
            }
        }
        self.exit_recursion();

        if item.status == AstStatus::Match {
            operators::reassociate(&mut item, self.grammar, self.tokens);
        }
        item
    }

    /// First alternative that matches or runs out of tokens wins.
    fn check_one_of(&mut self, alternatives: &[GrammarNode], options: RuleOptions) -> AstItem {
        for alternative in alternatives {
            self.cursor.push_index();
            let checked = self.check(alternative, options);
            match checked.status {
                AstStatus::Match | AstStatus::End => {
                    self.cursor.discard_index();
                    let status = checked.status;
                    let mut item = AstItem::new(AstKind::Group);
                    item.absorb(checked);
                    return item.with_status(status);
                }
                AstStatus::NoMatch | AstStatus::Invalid => {
                    self.cursor.pop_index();
                }
            }
        }
        AstItem::new(AstKind::Group)
    }

    /// Repeat while an alternative matches, at most `max` times.
    ///
    /// Each repetition re-selects among all alternatives. A failed attempt,
    /// including one that ran out of tokens, is rewound and ends the loop.
    fn check_repeat(
        &mut self,
        alternatives: &[GrammarNode],
        options: RuleOptions,
        min: usize,
        max: Option<usize>,
    ) -> AstItem {
        let mut item = AstItem::new(AstKind::Group);
        let start = self.cursor.index();
        let mut count = 0;
        let mut ended = false;

        while max.is_none_or(|max| count < max) {
            let before = self.cursor.index();
            let mut matched = None;
            for alternative in alternatives {
                self.cursor.push_index();
                let checked = self.check(alternative, options);
                match checked.status {
                    AstStatus::Match => {
                        self.cursor.discard_index();
                        matched = Some(checked);
                        break;
                    }
                    AstStatus::End => {
                        if !checked.tokens.is_empty() {
                            self.truncated_at = Some(before);
                        }
                        ended = true;
                        self.cursor.pop_index();
                    }
                    AstStatus::NoMatch | AstStatus::Invalid => {
                        self.cursor.pop_index();
                    }
                }
            }

            let Some(checked) = matched else {
                break;
            };
            item.absorb(checked);
            count += 1;
            if self.cursor.index() == before || self.fatal_error.is_some() {
                break;
            }
        }

        if count < min {
            self.cursor.restore(start);
            let status = if ended || self.at_end() {
                AstStatus::End
            } else {
                AstStatus::NoMatch
            };
            return AstItem::new(AstKind::Group).with_status(status);
        }
        item.with_status(AstStatus::Match)
    }

    fn skip_ignored(&mut self) {
        while let Some(token) = self.cursor.value() {
            if !self.ignored.contains(&token.token_type()) {
                break;
            }
            self.cursor.next();
        }
    }

    fn current_id(&self) -> Option<TokenId> {
        self.cursor.value()?;
        usize::try_from(self.cursor.index()).ok().map(TokenId)
    }

    /// No significant token left.
    fn at_end(&self) -> bool {
        self.significant_from(self.cursor.index()) >= self.cursor.len() as isize
    }

    fn significant_from(&self, index: isize) -> isize {
        let mut index = index.max(0);
        while let Some(token) = usize::try_from(index).ok().and_then(|i| self.tokens.as_slice().get(i)) {
            if !self.ignored.contains(&token.token_type()) {
                break;
            }
            index += 1;
        }
        index
    }

    /// Whether the leftover at the cursor is where a repetition ran out of
    /// tokens.
    fn truncated_here(&self) -> bool {
        self.truncated_at
            .is_some_and(|start| self.significant_from(start) == self.cursor.index())
    }

    fn preceded_by_space(&self, token: &Token) -> bool {
        token
            .prev()
            .is_some_and(|prev| self.tokens.token(prev).token_type().is_whitespace())
    }

    /// Error at `token`, or just past the last significant token.
    fn error_here(&self, kind: ParserErrorKind, token: Option<TokenId>) -> ParserError {
        if let Some(id) = token {
            let token = self.tokens.token(id);
            return ParserError::new(kind, Some(id), token.position(), token.range());
        }
        let last = self
            .tokens
            .as_slice()
            .iter()
            .rev()
            .find(|t| !self.ignored.contains(&t.token_type()))
            .or_else(|| self.tokens.as_slice().last());
        match last {
            Some(t) => ParserError::new(
                kind,
                None,
                Position::new(t.row(), t.column_end()),
                t.position_end()..t.position_end(),
            ),
            None => ParserError::new(kind, None, Position::new(1, 1), 0..0),
        }
    }

    fn consume_fuel(&mut self) -> bool {
        if self.fatal_error.is_some() {
            return false;
        }
        if let Some(remaining) = &mut self.exec_fuel {
            if *remaining == 0 {
                self.fatal_error = Some(Error::ExecFuelExhausted);
                return false;
            }
            *remaining -= 1;
        }
        true
    }

    fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                tracing::debug!(depth = self.depth, "recursion limit reached");
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
