use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::{GrammarNode, GrammarRule, OperatorArity, OperatorCandidate, PrecedenceEntry, RuleOptions};
use crate::ConfigError;

/// A pool of named grammar rules.
///
/// Pools are plain values: build one, then hand it to a
/// [`Parser`](crate::Parser). Every mutation bumps [`GrammarRules::revision`].
#[derive(Debug, Clone, Default)]
pub struct GrammarRules {
    rules: IndexMap<String, GrammarRule>,
    first: Option<String>,
    precedence: Vec<PrecedenceEntry>,
    revision: u64,
}

impl GrammarRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and register a rule.
    pub fn define(
        &mut self,
        id: impl Into<String>,
        options: RuleOptions,
        elements: Vec<GrammarNode>,
    ) -> Result<(), ConfigError> {
        self.set(GrammarRule::new(id, options, elements)?)
    }

    /// Register `rule`. Ids are unique within a pool.
    pub fn set(&mut self, rule: GrammarRule) -> Result<(), ConfigError> {
        if self.rules.contains_key(rule.id()) {
            return Err(ConfigError::DuplicateRule(rule.id().to_string()));
        }
        if rule.options().is_first() {
            self.first = Some(rule.id().to_string());
        }
        self.rules.insert(rule.id().to_string(), rule);
        self.revision += 1;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&GrammarRule> {
        self.rules.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    /// Remove a rule. Removing the first rule unsets it.
    pub fn remove(&mut self, id: &str) -> Option<GrammarRule> {
        let removed = self.rules.shift_remove(id)?;
        if self.first.as_deref() == Some(id) {
            self.first = None;
        }
        self.revision += 1;
        Some(removed)
    }

    /// Remove every rule and the first-rule designation. The precedence
    /// table is kept.
    pub fn clear(&mut self) {
        self.rules.clear();
        self.first = None;
        self.revision += 1;
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GrammarRule> {
        self.rules.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Ids referenced by some rule but not defined in the pool.
    pub fn check(&self) -> BTreeSet<String> {
        let mut refs = Vec::new();
        for rule in self.rules.values() {
            for element in rule.elements() {
                element.collect_refs(&mut refs);
            }
        }
        refs.into_iter()
            .filter(|id| !self.rules.contains_key(*id))
            .map(str::to_string)
            .collect()
    }

    pub fn set_first(&mut self, id: &str) -> Result<(), ConfigError> {
        if !self.rules.contains_key(id) {
            return Err(ConfigError::UnknownRule(id.to_string()));
        }
        self.first = Some(id.to_string());
        self.revision += 1;
        Ok(())
    }

    pub fn first_id(&self) -> Option<&str> {
        self.first.as_deref()
    }

    pub fn first(&self) -> Option<&GrammarRule> {
        self.first.as_deref().and_then(|id| self.rules.get(id))
    }

    /// Replace the precedence table.
    pub fn set_operator_precedence(&mut self, entries: impl IntoIterator<Item = PrecedenceEntry>) {
        self.precedence = entries.into_iter().collect();
        self.revision += 1;
    }

    pub fn precedence_table(&self) -> &[PrecedenceEntry] {
        &self.precedence
    }

    /// Priority of `candidate` as an operator of `arity`; 0 when no entry
    /// applies. The first applicable entry wins.
    pub fn operator_precedence(&self, candidate: OperatorCandidate<'_>, arity: OperatorArity) -> i32 {
        self.precedence
            .iter()
            .find(|e| e.arity == arity && e.applies_to(candidate))
            .map_or(0, |e| e.priority)
    }

    /// Every arity under which `candidate` is registered.
    pub fn operator_arities(&self, candidate: OperatorCandidate<'_>) -> Vec<OperatorArity> {
        let mut arities: Vec<OperatorArity> = self
            .precedence
            .iter()
            .filter(|e| e.applies_to(candidate))
            .map(|e| e.arity)
            .collect();
        arities.sort();
        arities.dedup();
        arities
    }

    pub fn is_operator(&self, candidate: OperatorCandidate<'_>, arity: OperatorArity) -> bool {
        self.precedence
            .iter()
            .any(|e| e.arity == arity && e.applies_to(candidate))
    }
}
