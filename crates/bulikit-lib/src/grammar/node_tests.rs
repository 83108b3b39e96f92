use super::{GrammarNode as G, GrammarRule, RuleOptions};
use crate::ConfigError;
use crate::test_utils::{IDENT, NUMBER, OPERATOR, arith_grammar};

#[test]
fn display_terminals() {
    insta::assert_snapshot!(G::token(NUMBER).to_string(), @"Number");
    insta::assert_snapshot!(G::token_values(OPERATOR, ["+", "-"]).to_string(), @r#"Operator("+"|"-")"#);
    insta::assert_snapshot!(G::rule("Expression").to_string(), @"<Expression>");
}

#[test]
fn display_containers() {
    insta::assert_snapshot!(G::zero_or_more(vec![G::rule("BinaryOp")]).to_string(), @"<BinaryOp>*");
    insta::assert_snapshot!(G::one_or_more(vec![G::token(NUMBER)]).to_string(), @"Number+");
    insta::assert_snapshot!(
        G::optional(vec![G::token(NUMBER), G::token(IDENT)]).to_string(),
        @"(Number | Ident)?"
    );
    insta::assert_snapshot!(
        G::one_of(vec![G::token(NUMBER), G::one_of(vec![G::token(IDENT)])]).to_string(),
        @"(Number | (Ident))"
    );
}

#[test]
fn display_rule() {
    let grammar = arith_grammar();
    insta::assert_snapshot!(grammar.get("Operand").unwrap().to_string(), @r#"Operand = Operator("-")* (Number | Ident | <Group>) <Index>*"#);
}

#[test]
fn hidden_only_affects_tokens() {
    let G::Token(m) = G::token(NUMBER).hidden() else {
        panic!("expected a token node");
    };
    assert!(!m.in_ast);
    assert_eq!(G::rule("A").hidden(), G::rule("A"));
}

#[test]
fn collect_refs_walks_containers() {
    let node = G::one_of(vec![
        G::rule("A"),
        G::zero_or_more(vec![G::token(NUMBER), G::rule("B")]),
    ]);
    let mut refs = Vec::new();
    node.collect_refs(&mut refs);
    assert_eq!(refs, ["A", "B"]);
}

#[test]
fn rule_rejects_empty_id() {
    let err = GrammarRule::new("", RuleOptions::new(), vec![G::token(NUMBER)]).unwrap_err();
    assert_eq!(err, ConfigError::EmptyRuleId);
}

#[test]
fn rule_rejects_empty_elements() {
    let err = GrammarRule::new("Empty", RuleOptions::new(), vec![]).unwrap_err();
    assert_eq!(err, ConfigError::EmptyRule("Empty".to_string()));
}

#[test]
fn rule_rejects_nested_empty_container() {
    let err = GrammarRule::new(
        "Broken",
        RuleOptions::new(),
        vec![G::token(NUMBER), G::optional(vec![G::zero_or_more(vec![])])],
    )
    .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"rule `Broken`: zero-or-more has no alternatives");
}

#[test]
fn rule_options_flags() {
    let options = RuleOptions::new().ast().not_preceded_by_space();
    assert!(options.is_ast());
    assert!(options.is_not_preceded_by_space());
    assert!(!options.is_first());
    assert!(!options.has_operator_precedence());
}
