use indoc::indoc;

use bulikit_lib::{ParserErrorKind, TokenType};

use crate::LangImpl;

fn sexpr(source: &str) -> String {
    let mut parser = crate::calc().parser().unwrap();
    let result = parser.parse(source).unwrap();
    assert!(result.is_valid(), "{source:?}: {:?}", result.errors());
    result.sexpr()
}

fn first_error(source: &str) -> String {
    let mut parser = crate::calc().parser().unwrap();
    let result = parser.parse(source).unwrap();
    assert!(!result.is_valid(), "{source:?} should be invalid");
    result.errors()[0].to_string()
}

#[test]
fn assignment_with_precedence() {
    insta::assert_snapshot!(sexpr("set x = 1 + 2 * 3"), @"(Assignment x (+ 1 (* 2 3)))");
}

#[test]
fn keywords_are_case_insensitive() {
    insta::assert_snapshot!(sexpr("SET total = 2"), @"(Assignment total 2)");
}

#[test]
fn identifier_starting_with_keyword() {
    insta::assert_snapshot!(sexpr("print settle"), @"settle");
}

#[test]
fn statements_on_separate_lines() {
    let source = indoc! {"
        # prices
        set a = 1

        print a[0] * -2
    "};
    insta::assert_snapshot!(sexpr(source), @"(Assignment a 1) (* (index a 0) (unary- 2))");
}

#[test]
fn logical_operators_bind_loosest() {
    insta::assert_snapshot!(
        sexpr("print a < 1 or not b and c >= 2"),
        @"(or (< a 1) (and (unary not b) (>= c 2)))"
    );
}

#[test]
fn floor_division_and_groups() {
    insta::assert_snapshot!(sexpr("print (a + 1) // 2 % 3"), @"(% (// (+ a 1) 2) 3)");
}

#[test]
fn string_operand() {
    insta::assert_snapshot!(sexpr(r#"print "a \"b\"" + s"#), @r#"(+ "a \"b\"" s)"#);
}

#[test]
fn empty_script_is_valid() {
    insta::assert_snapshot!(sexpr(""), @"");
    insta::assert_snapshot!(sexpr("\n\n# nothing\n"), @"");
}

#[test]
fn dump_print_statement() {
    let mut parser = crate::calc().parser().unwrap();
    let result = parser.parse("print 1 + 2").unwrap();

    insta::assert_snapshot!(result.dump(), @r#"
    Root
      Print
        Expression
          BinaryOperator
            Operator "+"
            Number "1"
            Number "2"
    "#);
}

#[test]
fn missing_value_is_unexpected_end() {
    insta::assert_snapshot!(first_error("set x = "), @"1:8: unexpected end of text");
}

#[test]
fn trailing_operand_is_unknown_syntax() {
    insta::assert_snapshot!(first_error("print 1 2"), @"1:9: unknown syntax");
}

#[test]
fn index_must_touch_its_operand() {
    let mut parser = crate::calc().parser().unwrap();
    let result = parser.parse("print a [1]").unwrap();

    let error = &result.errors()[0];
    assert_eq!(error.kind, ParserErrorKind::UnknownSyntax);
    assert_eq!(result.tokens().token(error.token.unwrap()).text(), "[");
}

#[test]
fn statement_without_keyword_is_left_over() {
    let mut parser = crate::calc().parser().unwrap();
    let result = parser.parse("x = 1").unwrap();

    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].kind, ParserErrorKind::UnknownSyntax);
    assert_eq!(result.errors()[0].position.to_string(), "1:1");
}

#[test]
fn comments_and_spaces_are_ignored() {
    let tokens = crate::calc().tokenize("set a = 1 # one").unwrap();
    let types: Vec<_> = tokens.as_slice().iter().map(|t| t.token_type()).collect();

    assert_eq!(types.last(), Some(&TokenType::COMMENT));
    assert_eq!(crate::calc().ignored(), [TokenType::SPACE, TokenType::COMMENT]);
}

#[test]
fn keyword_proposals() {
    let proposals = crate::calc().text_proposals("pr");

    assert_eq!(proposals.len(), 1);
    assert_eq!(proposals[0].value, "print");
    assert_eq!(proposals[0].description.as_deref(), Some("Print a value"));
    assert_eq!(proposals[0].token_type, crate::calc::KEYWORD);
}

#[test]
fn proposals_ignore_case() {
    let values: Vec<_> = crate::calc()
        .text_proposals("N")
        .into_iter()
        .map(|p| p.value)
        .collect();
    assert_eq!(values, ["not"]);
}
