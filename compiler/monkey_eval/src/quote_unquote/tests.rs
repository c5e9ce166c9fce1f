#![allow(clippy::panic, reason = "tests panic on unexpected value shapes")]

use std::rc::Rc;

use monkey_ir::{Expression, Identifier, InfixOp};
use pretty_assertions::assert_eq;

use super::value_to_expression;
use crate::tests::{error_message, run};
use crate::{Value, NULL};

/// Rendering of the node inside a `Quote` result.
fn quoted(source: &str) -> String {
    match run(source) {
        Value::Quote(node) => node.to_string(),
        other => panic!("expected QUOTE for {source:?}, got {other} ({})", other.type_name()),
    }
}

#[test]
fn quote_without_unquote_is_verbatim() {
    let cases = [
        ("quote(5)", "5"),
        ("quote(5 + 8)", "(5 + 8)"),
        ("quote(foobar)", "foobar"),
        ("quote(foobar + barfoo)", "(foobar + barfoo)"),
        ("let foobar = 8; quote(foobar)", "foobar"),
    ];
    for (source, expected) in cases {
        assert_eq!(quoted(source), expected, "{source}");
    }
}

#[test]
fn unquote_splices_evaluated_values() {
    let cases = [
        ("quote(unquote(4))", "4"),
        ("quote(unquote(4 + 4))", "8"),
        ("quote(8 + unquote(4 + 4))", "(8 + 8)"),
        ("quote(unquote(4 + 4) + 8)", "(8 + 8)"),
        ("quote(unquote(4 - 2) + 5)", "(2 + 5)"),
        ("let foobar = 8; quote(unquote(foobar))", "8"),
        ("quote(unquote(true))", "true"),
        ("quote(unquote(true == false))", "false"),
        ("quote(unquote(quote(4 + 4)))", "(4 + 4)"),
        (
            "let quotedInfixExpression = quote(4 + 4);
             quote(unquote(4 + 4) + unquote(quotedInfixExpression))",
            "(8 + (4 + 4))",
        ),
        ("quote(unquote(\"a\" + \"bc\"))", "abc"),
        ("quote(unquote([1, 2 * 2]))", "[1, 4]"),
        ("quote(unquote(fn(x) { x }))", "fn(x) x"),
    ];
    for (source, expected) in cases {
        assert_eq!(quoted(source), expected, "{source}");
    }
}

#[test]
fn unquote_reaches_every_child_position() {
    let cases = [
        ("quote(fn(x) { unquote(1 + 1) })", "fn(x) 2"),
        (
            "quote(if (unquote(1 < 2)) { unquote(3) } else { unquote(4) })",
            "iftrue 3else 4",
        ),
        ("quote([unquote(1 + 1), x][unquote(0)])", "([2, x][0])"),
        ("quote({unquote(\"k\"): unquote(2)})", "{k:2}"),
        ("quote(f(unquote(1), -unquote(2)))", "f(1, (-2))"),
        ("quote(quote(unquote(3)))", "quote(3)"),
    ];
    for (source, expected) in cases {
        assert_eq!(quoted(source), expected, "{source}");
    }
}

#[test]
fn unquote_sees_the_quote_call_environment() {
    let source = "
        let make = fn(n) { quote(unquote(n) * 2) };
        make(21);
    ";
    assert_eq!(quoted(source), "(21 * 2)");
}

#[test]
fn return_inside_unquote_is_its_value() {
    assert_eq!(quoted("quote(unquote(if (true) { return 7; }))"), "7");
}

#[test]
fn quote_and_unquote_errors() {
    let cases = [
        ("quote(unquote(1 + true))", "type mismatch: INTEGER + BOOLEAN"),
        ("quote(unquote(puts))", "unquote result has no literal form: BUILTIN"),
        ("quote(unquote(if (false) { 1 }))", "unquote result has no literal form: NULL"),
        ("quote(1, 2)", "wrong number of arguments: want=1, got=2"),
        ("quote()", "wrong number of arguments: want=1, got=0"),
    ];
    for (source, expected) in cases {
        assert_eq!(error_message(&run(source)), expected, "{source}");
    }
}

#[test]
fn unquote_outside_quote_is_unbound() {
    assert_eq!(
        error_message(&run("unquote(1)")),
        "identifier not found: unquote"
    );
}

#[test]
fn value_conversion() {
    assert_eq!(
        value_to_expression(&Value::Integer(-3)),
        Ok(Expression::IntegerLiteral(-3))
    );
    assert_eq!(
        value_to_expression(&Value::string("hi")),
        Ok(Expression::string("hi"))
    );
    let node = Expression::infix(Expression::ident("a"), InfixOp::Add, Expression::ident("b"));
    assert_eq!(
        value_to_expression(&Value::Quote(Rc::new(node.clone()))),
        Ok(node)
    );
    assert!(value_to_expression(&NULL).is_err());

    let Ok(Expression::FunctionLiteral { parameters, .. }) =
        value_to_expression(&run("fn(a, b) { a }"))
    else {
        panic!("expected a function literal");
    };
    assert_eq!(parameters, vec![Identifier::new("a"), Identifier::new("b")]);
}
