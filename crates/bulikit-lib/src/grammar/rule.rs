use super::GrammarNode;
use crate::ConfigError;

/// Per-rule behavior flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleOptions {
    pub(crate) first: bool,
    pub(crate) ast: bool,
    pub(crate) operator_precedence: bool,
    pub(crate) not_preceded_by_space: bool,
}

impl RuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rule as the pool's entry point.
    pub fn first(mut self) -> Self {
        self.first = true;
        self
    }

    /// Keep matches of the rule as their own node instead of splicing their
    /// children into the parent.
    pub fn ast(mut self) -> Self {
        self.ast = true;
        self
    }

    /// Rewrite the rule's flat operand/operator children into an operator tree.
    pub fn operator_precedence(mut self) -> Self {
        self.operator_precedence = true;
        self
    }

    /// Tokens matched directly by the rule must not follow a space or newline.
    pub fn not_preceded_by_space(mut self) -> Self {
        self.not_preceded_by_space = true;
        self
    }

    pub fn is_first(&self) -> bool {
        self.first
    }

    pub fn is_ast(&self) -> bool {
        self.ast
    }

    pub fn has_operator_precedence(&self) -> bool {
        self.operator_precedence
    }

    pub fn is_not_preceded_by_space(&self) -> bool {
        self.not_preceded_by_space
    }
}

/// A named sequence of grammar nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarRule {
    id: String,
    elements: Vec<GrammarNode>,
    options: RuleOptions,
}

impl GrammarRule {
    pub fn new(
        id: impl Into<String>,
        options: RuleOptions,
        elements: Vec<GrammarNode>,
    ) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyRuleId);
        }
        if elements.is_empty() {
            return Err(ConfigError::EmptyRule(id));
        }
        if let Some(container) = elements.iter().find_map(GrammarNode::find_empty_container) {
            return Err(ConfigError::EmptyAlternatives {
                rule: id,
                container,
            });
        }
        Ok(Self {
            id,
            elements,
            options,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn elements(&self) -> &[GrammarNode] {
        &self.elements
    }

    pub fn options(&self) -> RuleOptions {
        self.options
    }
}

impl std::fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} =", self.id)?;
        for element in &self.elements {
            write!(f, " {element}")?;
        }
        Ok(())
    }
}
