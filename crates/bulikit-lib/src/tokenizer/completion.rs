//! Autocomplete query over tokenizer rules.

use regex_automata::meta::Regex;
use serde::Serialize;

use super::{TokenType, TokenizerRule};

/// A completion offered for typed text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Proposal {
    /// Text to insert (completion value up to the snippet marker).
    pub value: String,
    /// Full completion value, including any snippet tail.
    pub raw: String,
    pub description: Option<String>,
    pub token_type: TokenType,
    /// Index of the owning rule in the tokenizer.
    pub rule: usize,
}

/// Build a start-anchored prefix matcher for `text`.
///
/// Whitespace runs in `text` match any whitespace run, so `"else  i"`
/// matches `"else if"`.
pub(crate) fn prefix_matcher(text: &str, case_insensitive: bool) -> Option<Regex> {
    let mut pattern = String::from(if case_insensitive { "(?i)^" } else { "^" });
    let mut pending_space = false;
    let mut word = String::new();
    for c in text.chars() {
        if c.is_whitespace() {
            if !word.is_empty() {
                pattern.push_str(&regex_syntax::escape(&word));
                word.clear();
            }
            pending_space = true;
        } else {
            if pending_space {
                pattern.push_str(r"\s+");
                pending_space = false;
            }
            word.push(c);
        }
    }
    pattern.push_str(&regex_syntax::escape(&word));
    if pending_space {
        pattern.push_str(r"\s+");
    }
    pattern.push_str(".*");

    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::debug!(%err, pattern, "invalid completion prefix");
            None
        }
    }
}

/// Completions of every rule matching `text`, deduplicated in rule order.
pub(crate) fn proposals(rules: &[TokenizerRule], text: &str) -> Vec<Proposal> {
    let sensitive = prefix_matcher(text, false);
    let insensitive = prefix_matcher(text, true);

    let mut found: Vec<Proposal> = Vec::new();
    for (index, rule) in rules.iter().enumerate() {
        let matcher = if rule.is_case_insensitive() {
            insensitive.as_ref()
        } else {
            sensitive.as_ref()
        };
        let Some(matcher) = matcher else {
            continue;
        };

        for completion in rule.matching_completions(matcher) {
            let value = completion.match_text().to_string();
            if found
                .iter()
                .any(|p| p.value == value && p.raw == completion.value)
            {
                continue;
            }
            found.push(Proposal {
                value,
                raw: completion.value.clone(),
                description: completion.description.clone(),
                token_type: rule.token_type(),
                rule: index,
            });
        }
    }
    found
}
