use std::rc::Rc;

use crate::grammar::{OperatorArity, PrecedenceEntry};
use crate::test_utils::{OPERATOR, arith_grammar, arith_parser, arith_rules, rule};
use crate::{AddPolicy, TokenType, Tokenizer, TokenizerConfig, TokenizerRule};

#[test]
fn identical_text_returns_shared_result() {
    let mut parser = arith_parser();
    let first = parser.parse("1 + 2").unwrap();
    let second = parser.parse("1 + 2").unwrap();

    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn different_text_is_reparsed() {
    let mut parser = arith_parser();
    let first = parser.parse("1 + 2").unwrap();
    let second = parser.parse("1 + 3").unwrap();

    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(second.sexpr(), "(+ 1 3)");
}

#[test]
fn reparse_after_other_text_has_same_shape() {
    let mut parser = arith_parser();
    let first = parser.parse("4 * 5 - 1").unwrap();
    parser.parse("7").unwrap();
    let again = parser.parse("4 * 5 - 1").unwrap();

    assert!(!Rc::ptr_eq(&first, &again));
    assert_eq!(first.dump(), again.dump());
    assert_eq!(first.root(), again.root());
}

#[test]
fn grammar_change_invalidates_memo() {
    let mut parser = arith_parser();
    let before = parser.parse("2 + 3 * 4").unwrap();
    assert_eq!(before.sexpr(), "(+ 2 (* 3 4))");

    // same priority everywhere: plain left-to-right
    parser.grammar_mut().set_operator_precedence(vec![
        PrecedenceEntry::token(90, OperatorArity::Unary)
            .of_type(OPERATOR)
            .values(["-"]),
        PrecedenceEntry::item(80, OperatorArity::Index).values(["Index"]),
        PrecedenceEntry::token(10, OperatorArity::Binary).of_type(OPERATOR),
    ]);
    let after = parser.parse("2 + 3 * 4").unwrap();

    assert!(!Rc::ptr_eq(&before, &after));
    assert_eq!(after.sexpr(), "(* (+ 2 3) 4)");
}

#[test]
fn replaced_grammar_invalidates_memo() {
    let mut parser = arith_parser();
    let before = parser.parse("2 + 3 * 4").unwrap();
    assert_eq!(before.sexpr(), "(+ 2 (* 3 4))");

    // built the same way as the current pool, so revisions coincide
    let mut flat = arith_grammar();
    flat.set_operator_precedence(vec![
        PrecedenceEntry::token(90, OperatorArity::Unary)
            .of_type(OPERATOR)
            .values(["-"]),
        PrecedenceEntry::item(80, OperatorArity::Index).values(["Index"]),
        PrecedenceEntry::token(10, OperatorArity::Binary).of_type(OPERATOR),
    ]);
    *parser.grammar_mut() = flat;
    let after = parser.parse("2 + 3 * 4").unwrap();

    assert!(!Rc::ptr_eq(&before, &after));
    assert_eq!(after.sexpr(), "(* (+ 2 3) 4)");
}

#[test]
fn replaced_tokenizer_invalidates_memo() {
    let mut parser = arith_parser();
    let before = parser.parse("2 * 3").unwrap();
    assert!(before.is_valid());

    // same rule count, but `*` is no longer an operator
    let rules = arith_rules()
        .into_iter()
        .map(|r| {
            if r.token_type() == OPERATOR {
                rule(OPERATOR, r"//|[-+/%]")
            } else {
                r
            }
        })
        .collect::<Vec<_>>();
    *parser.tokenizer_mut() = Tokenizer::new(TokenizerConfig::default()).with_rules(rules);
    let after = parser.parse("2 * 3").unwrap();

    assert!(!Rc::ptr_eq(&before, &after));
    assert!(!after.is_valid());
}

#[test]
fn tokenizer_change_invalidates_memo() {
    let mut parser = arith_parser();
    let before = parser.parse("1").unwrap();

    let rule = TokenizerRule::new(TokenType::COMMENT, "#.*").unwrap();
    parser.tokenizer_mut().add_rule(rule, AddPolicy::Last);
    let after = parser.parse("1").unwrap();

    assert!(!Rc::ptr_eq(&before, &after));
}

#[test]
fn ignored_set_is_part_of_the_memo_key() {
    let mut parser = arith_parser();
    let spaced = parser.parse("1 + 2").unwrap();
    assert!(spaced.is_valid());

    parser.set_ignored([]);
    let strict = parser.parse("1 + 2").unwrap();

    assert!(!Rc::ptr_eq(&spaced, &strict));
    assert!(!strict.is_valid());
}
