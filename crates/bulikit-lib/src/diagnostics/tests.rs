use bulikit_core::Position;

use super::*;
use crate::{ParserError, ParserErrorKind, TokenId};

fn unknown_at(column: usize, range: std::ops::Range<usize>) -> ParserError {
    ParserError::new(
        ParserErrorKind::UnknownSyntax,
        Some(TokenId(0)),
        Position::new(1, column),
        range,
    )
}

#[test]
fn printer_with_expected_label() {
    let errors = vec![
        ParserError::new(
            ParserErrorKind::InvalidSyntax,
            Some(TokenId(0)),
            Position::new(1, 1),
            0..1,
        )
        .context("<Expression>"),
    ];

    let result = DiagnosticsPrinter::new(&errors).source("* 2").render();
    insta::assert_snapshot!(result, @r"
    error: invalid syntax
      |
    1 | * 2
      | ^ expected <Expression>
    ");
}

#[test]
fn printer_with_path() {
    let errors = vec![unknown_at(1, 0..5)];

    let result = DiagnosticsPrinter::new(&errors)
        .source("hello world")
        .path("test.txt")
        .render();
    insta::assert_snapshot!(result, @r"
    error: unknown syntax
     --> test.txt:1:1
      |
    1 | hello world
      | ^^^^^
    ");
}

#[test]
fn printer_zero_width_span() {
    let errors = vec![unknown_at(3, 2..2)];

    let result = DiagnosticsPrinter::new(&errors).source("hello").render();
    insta::assert_snapshot!(result, @r"
    error: unknown syntax
      |
    1 | hello
      |   ^
    ");
}

#[test]
fn printer_multiple_errors() {
    let errors = vec![unknown_at(1, 0..5), unknown_at(7, 6..11)];

    let result = DiagnosticsPrinter::new(&errors).source("hello world").render();
    insta::assert_snapshot!(result, @r"
    error: unknown syntax
      |
    1 | hello world
      | ^^^^^

    error: unknown syntax
      |
    1 | hello world
      |       ^^^^^
    ");
}

#[test]
fn plain_format_lists_positions() {
    let errors = vec![
        unknown_at(2, 1..2),
        ParserError::new(ParserErrorKind::UnexpectedEnd, None, Position::new(1, 5), 4..4)
            .context("<Operand>"),
    ];

    let result = DiagnosticsPrinter::new(&errors).render();
    insta::assert_snapshot!(result, @r"
    1:2: unknown syntax
    1:5: unexpected end of text (expected <Operand>)
    ");
}

#[test]
fn without_source_drops_excerpt() {
    let errors = vec![unknown_at(1, 0..1)];

    let result = DiagnosticsPrinter::new(&errors)
        .source("x")
        .without_source()
        .path("a.calc")
        .render();
    insta::assert_snapshot!(result, @"a.calc:1:1: unknown syntax");
}

#[test]
fn no_errors_render_nothing() {
    let result = DiagnosticsPrinter::new(&[]).source("1 + 2").render();
    assert!(result.is_empty());
}

#[test]
fn adjust_range_widens_to_next_char() {
    assert_eq!(super::printer::adjust_range(0..0, "é!"), 0..2);
    assert_eq!(super::printer::adjust_range(3..3, "abc"), 3..3);
    assert_eq!(super::printer::adjust_range(1..9, "abc"), 1..3);
}
