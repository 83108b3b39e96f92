use crate::test_utils::arith_parser;

fn sexpr(input: &str) -> String {
    let mut parser = arith_parser();
    let result = parser.parse(input).unwrap();
    assert!(result.is_valid(), "{input:?}: {:?}", result.errors());
    result.sexpr()
}

#[test]
fn multiplication_binds_tighter() {
    insta::assert_snapshot!(sexpr("2 + 3 * 4"), @"(+ 2 (* 3 4))");
}

#[test]
fn two_products_summed() {
    insta::assert_snapshot!(sexpr("2 * 3 + 4 * 5"), @"(+ (* 2 3) (* 4 5))");
}

#[test]
fn subtraction_is_left_associative() {
    insta::assert_snapshot!(sexpr("10 - 3 - 2"), @"(- (- 10 3) 2)");
}

#[test]
fn same_priority_mixed_operators() {
    insta::assert_snapshot!(sexpr("8 / 4 * 2 % 3"), @"(% (* (/ 8 4) 2) 3)");
}

#[test]
fn unary_minus() {
    insta::assert_snapshot!(sexpr("-2 + 3"), @"(+ (unary- 2) 3)");
}

#[test]
fn binary_then_unary_minus() {
    insta::assert_snapshot!(sexpr("2 - -3"), @"(- 2 (unary- 3))");
}

#[test]
fn index_is_left_to_right() {
    insta::assert_snapshot!(sexpr("a[0][1]"), @"(index (index a 0) 1)");
}

#[test]
fn index_binds_tighter_than_unary() {
    insta::assert_snapshot!(sexpr("-a[1]"), @"(unary- (index a 1))");
}

#[test]
fn index_holds_an_expression() {
    insta::assert_snapshot!(sexpr("a[i + 1] * 2"), @"(* (index a (+ i 1)) 2)");
}

#[test]
fn parentheses_group() {
    insta::assert_snapshot!(sexpr("(2 + 3) * 4"), @"(* (+ 2 3) 4)");
}

#[test]
fn lower_priority_after_nested_climb() {
    insta::assert_snapshot!(sexpr("1 + 2 * 3 - 4"), @"(- (+ 1 (* 2 3)) 4)");
}

#[test]
fn single_operand() {
    insta::assert_snapshot!(sexpr("42"), @"42");
}

#[test]
fn dump_operator_tree() {
    let mut parser = arith_parser();
    let result = parser.parse("2 + 3 * 4").unwrap();

    insta::assert_snapshot!(result.dump(), @r#"
    Root
      Expression
        BinaryOperator
          Operator "+"
          Number "2"
          BinaryOperator
            Operator "*"
            Number "3"
            Number "4"
    "#);
}

#[test]
fn dump_index_operator() {
    let mut parser = arith_parser();
    let result = parser.parse("a[0]").unwrap();

    insta::assert_snapshot!(result.dump(), @r#"
    Root
      Expression
        IndexOperator
          Index
            Expression
              Number "0"
          Ident "a"
    "#);
}
