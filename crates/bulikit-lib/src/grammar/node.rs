use std::fmt;

use crate::TokenType;

/// Terminal: one token of a given type, optionally restricted to values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch {
    pub token_type: TokenType,
    /// Accepted texts; empty accepts any text.
    pub values: Vec<String>,
    /// Whether the matched token becomes a child node (it is always recorded
    /// in the item's token list).
    pub in_ast: bool,
}

/// A grammar combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarNode {
    Token(TokenMatch),
    /// Reference to a rule of the same pool, by id.
    Rule(String),
    /// First matching alternative.
    OneOf(Vec<GrammarNode>),
    /// Zero or one of the alternatives.
    Optional(Vec<GrammarNode>),
    /// Repeat while any alternative matches.
    ZeroOrMore(Vec<GrammarNode>),
    /// Like `ZeroOrMore`, but at least one repetition is required.
    OneOrMore(Vec<GrammarNode>),
}

impl GrammarNode {
    pub fn token(token_type: TokenType) -> Self {
        GrammarNode::Token(TokenMatch {
            token_type,
            values: Vec::new(),
            in_ast: true,
        })
    }

    pub fn token_values<I, S>(token_type: TokenType, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GrammarNode::Token(TokenMatch {
            token_type,
            values: values.into_iter().map(Into::into).collect(),
            in_ast: true,
        })
    }

    pub fn rule(id: impl Into<String>) -> Self {
        GrammarNode::Rule(id.into())
    }

    pub fn one_of(alternatives: Vec<GrammarNode>) -> Self {
        GrammarNode::OneOf(alternatives)
    }

    pub fn optional(alternatives: Vec<GrammarNode>) -> Self {
        GrammarNode::Optional(alternatives)
    }

    pub fn zero_or_more(alternatives: Vec<GrammarNode>) -> Self {
        GrammarNode::ZeroOrMore(alternatives)
    }

    pub fn one_or_more(alternatives: Vec<GrammarNode>) -> Self {
        GrammarNode::OneOrMore(alternatives)
    }

    /// Keep a matched token out of the child nodes. No-op for non-terminals.
    pub fn hidden(mut self) -> Self {
        if let GrammarNode::Token(m) = &mut self {
            m.in_ast = false;
        }
        self
    }

    pub fn alternatives(&self) -> &[GrammarNode] {
        match self {
            GrammarNode::Token(_) | GrammarNode::Rule(_) => &[],
            GrammarNode::OneOf(alts)
            | GrammarNode::Optional(alts)
            | GrammarNode::ZeroOrMore(alts)
            | GrammarNode::OneOrMore(alts) => alts,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            GrammarNode::Token(_) => "token",
            GrammarNode::Rule(_) => "rule",
            GrammarNode::OneOf(_) => "one-of",
            GrammarNode::Optional(_) => "optional",
            GrammarNode::ZeroOrMore(_) => "zero-or-more",
            GrammarNode::OneOrMore(_) => "one-or-more",
        }
    }

    /// Rule ids referenced anywhere below this node.
    pub(crate) fn collect_refs<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            GrammarNode::Token(_) => {}
            GrammarNode::Rule(id) => out.push(id),
            _ => {
                for alt in self.alternatives() {
                    alt.collect_refs(out);
                }
            }
        }
    }

    /// Kind name of the first container without alternatives.
    pub(crate) fn find_empty_container(&self) -> Option<&'static str> {
        match self {
            GrammarNode::Token(_) | GrammarNode::Rule(_) => None,
            _ if self.alternatives().is_empty() => Some(self.kind_name()),
            _ => self
                .alternatives()
                .iter()
                .find_map(GrammarNode::find_empty_container),
        }
    }
}

/// EBNF-like rendering, used in error context.
impl fmt::Display for GrammarNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (alts, suffix) = match self {
            GrammarNode::Token(m) => {
                f.write_str(m.token_type.id())?;
                if !m.values.is_empty() {
                    let quoted: Vec<String> = m.values.iter().map(|v| format!("{v:?}")).collect();
                    write!(f, "({})", quoted.join("|"))?;
                }
                return Ok(());
            }
            GrammarNode::Rule(id) => return write!(f, "<{id}>"),
            GrammarNode::OneOf(alts) => (alts, ""),
            GrammarNode::Optional(alts) => (alts, "?"),
            GrammarNode::ZeroOrMore(alts) => (alts, "*"),
            GrammarNode::OneOrMore(alts) => (alts, "+"),
        };

        if alts.len() == 1 && !suffix.is_empty() {
            return write!(f, "{}{suffix}", alts[0]);
        }
        f.write_str("(")?;
        for (i, alt) in alts.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{alt}")?;
        }
        write!(f, "){suffix}")
    }
}
