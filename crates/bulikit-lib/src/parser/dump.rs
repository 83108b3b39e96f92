//! Text and JSON renderings of a parse tree.

use std::fmt::Write;

use bulikit_core::{Position, Span};
use serde::Serialize;

use super::ast::{AstItem, AstKind, AstNode, AstStatus};
use crate::Tokens;

/// Indented tree, one node per line:
///
/// ```text
/// Root
///   Expression
///     BinaryOperator
///       Operator "+"
///       Number "2"
///       Number "3"
/// ```
pub(crate) fn dump(item: &AstItem, tokens: &Tokens) -> String {
    let mut out = String::new();
    dump_item(&mut out, item, tokens, 0);
    out
}

fn dump_item(out: &mut String, item: &AstItem, tokens: &Tokens, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}{}", label(item));
    if item.status != AstStatus::Match {
        let _ = write!(out, " ({:?})", item.status);
    }
    out.push('\n');

    for child in &item.children {
        match child {
            AstNode::Item(child) => dump_item(out, child, tokens, depth + 1),
            AstNode::Token(id) => {
                let token = tokens.token(*id);
                let _ = writeln!(out, "{indent}  {} {:?}", token.token_type(), token.text());
            }
        }
    }
}

fn label(item: &AstItem) -> &str {
    match item.kind {
        AstKind::Root => "Root",
        AstKind::Rule => item.rule.as_deref().unwrap_or("Rule"),
        AstKind::Group => "Group",
        AstKind::BinaryOperator => "BinaryOperator",
        AstKind::UnaryOperator => "UnaryOperator",
        AstKind::IndexOperator => "IndexOperator",
    }
}

/// Compact s-expression: `(+ 2 (* 3 4))`, `(unary- 2)`, `(index a 0)`.
///
/// Rule items with a single child print as that child.
pub(crate) fn sexpr(item: &AstItem, tokens: &Tokens) -> String {
    let mut out = String::new();
    if item.kind == AstKind::Root {
        join(&mut out, &item.children, tokens);
    } else {
        sexpr_item(&mut out, item, tokens);
    }
    out
}

fn join(out: &mut String, nodes: &[AstNode], tokens: &Tokens) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        sexpr_node(out, node, tokens);
    }
}

fn sexpr_node(out: &mut String, node: &AstNode, tokens: &Tokens) {
    match node {
        AstNode::Token(id) => out.push_str(tokens.token(*id).text()),
        AstNode::Item(item) => sexpr_item(out, item, tokens),
    }
}

fn sexpr_item(out: &mut String, item: &AstItem, tokens: &Tokens) {
    let children = item.children.as_slice();
    match item.kind {
        AstKind::BinaryOperator | AstKind::UnaryOperator | AstKind::IndexOperator => {
            let Some((operator, operands)) = children.split_first() else {
                out.push_str("()");
                return;
            };
            out.push('(');
            match item.kind {
                AstKind::IndexOperator => out.push_str("index"),
                AstKind::UnaryOperator => {
                    out.push_str("unary");
                    let text = operator_text(operator, tokens);
                    if text.starts_with(|c: char| c.is_alphanumeric()) {
                        out.push(' ');
                    }
                    out.push_str(text);
                }
                _ => out.push_str(operator_text(operator, tokens)),
            }
            if item.kind == AstKind::IndexOperator {
                // [index, base] reads as (index base index)
                for node in operands.iter().chain(std::iter::once(operator)) {
                    out.push(' ');
                    sexpr_node(out, node, tokens);
                }
            } else {
                for node in operands {
                    out.push(' ');
                    sexpr_node(out, node, tokens);
                }
            }
            out.push(')');
        }
        _ if children.len() == 1 => sexpr_node(out, &children[0], tokens),
        _ => {
            out.push('(');
            out.push_str(label(item));
            for node in children {
                out.push(' ');
                sexpr_node(out, node, tokens);
            }
            out.push(')');
        }
    }
}

fn operator_text<'t>(node: &AstNode, tokens: &'t Tokens) -> &'t str {
    match node {
        AstNode::Token(id) => tokens.token(*id).text(),
        AstNode::Item(_) => "?",
    }
}

/// Serializable view of a tree with token texts resolved.
#[derive(Debug, Serialize)]
pub struct AstView<'a> {
    pub kind: AstKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'a str>,
    pub status: AstStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    pub children: Vec<NodeView<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum NodeView<'a> {
    Item(AstView<'a>),
    Token {
        token_type: &'static str,
        text: &'a str,
        position: Position,
    },
}

impl<'a> AstView<'a> {
    pub fn new(item: &'a AstItem, tokens: &'a Tokens) -> Self {
        Self {
            kind: item.kind,
            rule: item.rule.as_deref(),
            status: item.status,
            span: item.span,
            children: item
                .children
                .iter()
                .map(|child| match child {
                    AstNode::Item(child) => NodeView::Item(AstView::new(child, tokens)),
                    AstNode::Token(id) => {
                        let token = tokens.token(*id);
                        NodeView::Token {
                            token_type: token.token_type().id(),
                            text: token.text(),
                            position: token.position(),
                        }
                    }
                })
                .collect(),
        }
    }
}
