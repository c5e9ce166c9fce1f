//! Error reporting and recovery.

#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use monkey_ir::Statement;
use pretty_assertions::assert_eq;

use crate::{parse_source, ParseErrorKind};

fn messages(source: &str) -> Vec<String> {
    parse_source(source)
        .errors
        .iter()
        .map(|e| e.message())
        .collect()
}

#[test]
fn let_without_identifier() {
    assert_eq!(
        messages("let = 10;"),
        vec!["expected next token to be IDENT, got = instead"]
    );
}

#[test]
fn let_without_assign() {
    assert_eq!(
        messages("let x 5;"),
        vec!["expected next token to be =, got INT instead"]
    );
}

#[test]
fn one_error_per_bad_statement() {
    assert_eq!(
        messages("let x 5; let = 10; let 838383;"),
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "expected next token to be IDENT, got INT instead",
        ]
    );
}

#[test]
fn no_prefix_parse_function() {
    assert_eq!(
        messages("+ 5;"),
        vec!["no prefix parse function for + found"]
    );
    assert_eq!(messages(")"), vec!["no prefix parse function for ) found"]);
}

#[test]
fn integer_overflow_is_reported() {
    let result = parse_source("92233720368547758070");
    assert_eq!(
        result.errors[0].kind,
        ParseErrorKind::InvalidInteger {
            text: "92233720368547758070".to_string()
        }
    );
}

#[test]
fn illegal_character() {
    assert_eq!(messages("1 @ 2"), vec!["illegal character: @"]);
}

#[test]
fn unclosed_call_at_eof() {
    assert_eq!(
        messages("add(1, 2"),
        vec!["expected next token to be ), got EOF instead"]
    );
}

#[test]
fn if_requires_parentheses() {
    assert_eq!(
        messages("if x { 1 }"),
        vec!["expected next token to be (, got IDENT instead"]
    );
}

#[test]
fn recovery_keeps_later_statements() {
    let result = parse_source("let = 1; let y = 2; y");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.program.statements.len(), 2);
    assert!(matches!(result.program.statements[0], Statement::Let { .. }));
    assert_eq!(result.program.to_string(), "let y = 2;y");
}

#[test]
fn error_location_renders_line_and_column() {
    let source = "let a = 1;\nlet = 2;";
    let result = parse_source(source);
    assert_eq!(
        result.errors[0].render(source),
        "2:5: expected next token to be IDENT, got = instead"
    );
}

#[test]
fn empty_source_is_an_empty_program() {
    let result = parse_source("");
    assert!(!result.has_errors());
    assert!(result.program.statements.is_empty());
}
