//! Operator-precedence re-association.
//!
//! A rule flagged with [`RuleOptions::operator_precedence`] matches a flat
//! list such as `[-, 2, +, 3, *, a, Index]`. This pass turns it into one
//! operator tree:
//!
//! ```text
//! (+ (unary- 2) (* 3 (index a ...)))
//! ```
//!
//! Operand position: prefix operators (unary) recurse into the following
//! operand, then postfix operators (index) wrap the result left to right.
//! Operator position: binary operators are combined by precedence climbing;
//! a higher priority binds tighter and equal priorities associate left.
//!
//! [`RuleOptions::operator_precedence`]: crate::grammar::RuleOptions::operator_precedence

use std::iter::Peekable;
use std::vec::IntoIter;

use super::ast::{AstItem, AstKind, AstNode, AstStatus};
use crate::Tokens;
use crate::grammar::{GrammarRules, OperatorArity, OperatorCandidate};

/// Rewrite `item`'s children into a single operator tree. Runs at most once
/// per item, and only for rules that request it.
pub(crate) fn reassociate(item: &mut AstItem, grammar: &GrammarRules, tokens: &Tokens) {
    if item.rewritten || !item.options.has_operator_precedence() {
        return;
    }
    item.rewritten = true;
    if item.children.len() < 2 {
        return;
    }

    let children = std::mem::take(&mut item.children);
    let mut climber = Climber {
        table: Table { grammar, tokens },
        nodes: children.into_iter().peekable(),
    };
    if let Some(root) = climber.expression(None) {
        item.children.push(root);
    }
    // Unreachable for well-formed sequences; keep anything unconsumed.
    item.children.extend(climber.nodes);
    tracing::trace!(rule = item.rule.as_deref(), "operators re-associated");
}

struct Climber<'a> {
    table: Table<'a>,
    nodes: Peekable<IntoIter<AstNode>>,
}

/// Operator lookups for the nodes of one item.
#[derive(Clone, Copy)]
struct Table<'a> {
    grammar: &'a GrammarRules,
    tokens: &'a Tokens,
}

impl<'a> Table<'a> {
    fn candidate<'n>(&self, node: &'n AstNode) -> OperatorCandidate<'n>
    where
        'a: 'n,
    {
        match node {
            AstNode::Token(id) => OperatorCandidate::Token(self.tokens.token(*id)),
            AstNode::Item(item) => OperatorCandidate::Item(item.rule.as_deref()),
        }
    }

    fn is_operator(&self, node: &AstNode, arity: OperatorArity) -> bool {
        // prefix operators are always tokens
        if arity == OperatorArity::Unary && matches!(node, AstNode::Item(_)) {
            return false;
        }
        self.grammar.is_operator(self.candidate(node), arity)
    }

    fn priority(&self, node: &AstNode) -> i32 {
        self.grammar
            .operator_precedence(self.candidate(node), OperatorArity::Binary)
    }
}

impl Climber<'_> {
    /// Operand, with its prefix and postfix operators applied.
    fn operand(&mut self) -> Option<AstNode> {
        let node = self.nodes.next()?;
        let tokens = self.table.tokens;

        if self.table.is_operator(&node, OperatorArity::Unary) {
            let mut unary = AstItem::new(AstKind::UnaryOperator);
            unary.push_node(tokens, node);
            if let Some(inner) = self.operand() {
                unary.push_node(tokens, inner);
            }
            return Some(AstNode::Item(unary.with_status(AstStatus::Match)));
        }

        let mut operand = node;
        while let Some(index) = self
            .nodes
            .next_if(|next| self.table.is_operator(next, OperatorArity::Index))
        {
            let mut wrapped = AstItem::new(AstKind::IndexOperator);
            wrapped.push_node(tokens, index);
            wrapped.push_node(tokens, operand);
            operand = AstNode::Item(wrapped.with_status(AstStatus::Match));
        }
        Some(operand)
    }

    /// Precedence climbing. Only binary operators with a priority strictly
    /// above `floor` are consumed at this level.
    fn expression(&mut self, floor: Option<i32>) -> Option<AstNode> {
        let mut left = self.operand()?;
        let tokens = self.table.tokens;

        while let Some(next) = self.nodes.peek() {
            let priority = self.table.priority(next);
            if floor.is_some_and(|floor| priority <= floor) {
                break;
            }
            let Some(operator) = self.nodes.next() else {
                break;
            };
            let right = self.expression(Some(priority));

            let mut binary = AstItem::new(AstKind::BinaryOperator);
            binary.push_node(tokens, operator);
            binary.push_node(tokens, left);
            if let Some(right) = right {
                binary.push_node(tokens, right);
            }
            left = AstNode::Item(binary.with_status(AstStatus::Match));
        }
        Some(left)
    }
}
