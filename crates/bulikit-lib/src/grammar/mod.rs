//! Grammar model: rule pool, combinator nodes and operator precedence table.
//!
//! ```text
//! GrammarRules
//!   ├─ rules: id → GrammarRule { elements: [GrammarNode], options }
//!   ├─ first rule id
//!   └─ precedence: [PrecedenceEntry]
//! ```
//!
//! A rule's elements form a sequence. Container nodes (`OneOf`, `Optional`,
//! `ZeroOrMore`, `OneOrMore`) hold *alternatives*, tried in order.

mod node;
mod precedence;
mod rule;
mod rules;

pub use node::{GrammarNode, TokenMatch};
pub use precedence::{OperatorArity, OperatorCandidate, PrecedenceEntry, PrecedenceSubject};
pub use rule::{GrammarRule, RuleOptions};
pub use rules::GrammarRules;

#[cfg(test)]
mod node_tests;
