//! AST items built while matching a grammar.

use bulikit_core::Span;
use serde::Serialize;

use crate::grammar::{GrammarRule, RuleOptions};
use crate::{TokenId, Tokens};

/// Outcome of checking a grammar node at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AstStatus {
    /// Did not apply here; the caller backtracks.
    NoMatch,
    /// Applied; the cursor moved past the consumed tokens.
    Match,
    /// Reached but violated the grammar. Only set on the root.
    Invalid,
    /// Ran out of tokens while more were expected.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AstKind {
    Root,
    /// Match of a grammar rule; the id is in [`AstItem::rule`].
    Rule,
    /// Match of a container node. Always spliced into its parent.
    Group,
    BinaryOperator,
    UnaryOperator,
    IndexOperator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AstNode {
    Item(AstItem),
    Token(TokenId),
}

impl AstNode {
    pub fn as_item(&self) -> Option<&AstItem> {
        match self {
            AstNode::Item(item) => Some(item),
            AstNode::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<TokenId> {
        match self {
            AstNode::Token(id) => Some(*id),
            AstNode::Item(_) => None,
        }
    }
}

/// A node of the syntax tree.
///
/// `children` holds the structure; `tokens` lists every token matched in
/// the subtree, in source order, including tokens hidden from `children`.
///
/// Operator items have fixed layouts:
/// - binary: `[operator, left, right]`
/// - unary: `[operator, operand]`
/// - index: `[index, base]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AstItem {
    pub(crate) kind: AstKind,
    pub(crate) rule: Option<String>,
    #[serde(skip)]
    pub(crate) options: RuleOptions,
    pub(crate) children: Vec<AstNode>,
    pub(crate) tokens: Vec<TokenId>,
    pub(crate) status: AstStatus,
    pub(crate) span: Option<Span>,
    #[serde(skip)]
    pub(crate) rewritten: bool,
}

impl AstItem {
    pub(crate) fn new(kind: AstKind) -> Self {
        Self {
            kind,
            rule: None,
            options: RuleOptions::default(),
            children: Vec::new(),
            tokens: Vec::new(),
            status: AstStatus::NoMatch,
            span: None,
            rewritten: false,
        }
    }

    pub(crate) fn for_rule(kind: AstKind, rule: &GrammarRule) -> Self {
        Self {
            rule: Some(rule.id().to_string()),
            options: rule.options(),
            ..Self::new(kind)
        }
    }

    pub(crate) fn with_status(mut self, status: AstStatus) -> Self {
        self.status = status;
        self
    }

    pub fn kind(&self) -> AstKind {
        self.kind
    }

    /// Id of the rule this item was built from. The root carries the first
    /// rule's id.
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    pub fn status(&self) -> AstStatus {
        self.status
    }

    pub fn children(&self) -> &[AstNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&AstNode> {
        self.children.get(index)
    }

    pub fn tokens(&self) -> &[TokenId] {
        &self.tokens
    }

    /// Source span, `None` while nothing with a width was added.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn is_rewritten(&self) -> bool {
        self.rewritten
    }

    /// Whether the item stays a node of its parent instead of being spliced.
    pub(crate) fn is_kept(&self) -> bool {
        match self.kind {
            AstKind::Rule => self.options.is_ast(),
            AstKind::Group => false,
            AstKind::Root
            | AstKind::BinaryOperator
            | AstKind::UnaryOperator
            | AstKind::IndexOperator => true,
        }
    }

    pub(crate) fn push_token(&mut self, tokens: &Tokens, id: TokenId, in_ast: bool) {
        self.tokens.push(id);
        if in_ast {
            self.children.push(AstNode::Token(id));
        }
        let token = tokens.token(id);
        // zero-width dedent markers do not extend a span
        if token.length() > 0 {
            self.cover(token.span());
        }
    }

    /// Add `child` as a node, whatever its kind.
    pub(crate) fn push_item(&mut self, child: AstItem) {
        self.tokens.extend_from_slice(&child.tokens);
        if let Some(span) = child.span {
            self.cover(span);
        }
        self.children.push(AstNode::Item(child));
    }

    pub(crate) fn push_node(&mut self, tokens: &Tokens, node: AstNode) {
        match node {
            AstNode::Token(id) => self.push_token(tokens, id, true),
            AstNode::Item(item) => self.push_item(item),
        }
    }

    /// Add the result of a nested check: kept items become a node, others
    /// have their children spliced in.
    pub(crate) fn absorb(&mut self, child: AstItem) {
        if child.is_kept() {
            self.push_item(child);
            return;
        }
        self.tokens.extend(child.tokens);
        if let Some(span) = child.span {
            self.cover(span);
        }
        self.children.extend(child.children);
    }

    fn cover(&mut self, span: Span) {
        self.span = Some(match self.span {
            Some(current) => current.cover(span),
            None => span,
        });
    }
}
