#![allow(clippy::panic, reason = "tests panic on unexpected value shapes")]

use pretty_assertions::assert_eq;

use crate::tests::{error_message, run};
use crate::{Environment, Interpreter, Value, FALSE, NULL, TRUE};

fn assert_integers(cases: &[(&str, i64)]) {
    for (source, expected) in cases {
        assert_eq!(run(source), Value::Integer(*expected), "{source}");
    }
}

fn assert_errors(cases: &[(&str, &str)]) {
    for (source, expected) in cases {
        assert_eq!(error_message(&run(source)), *expected, "{source}");
    }
}

#[test]
fn integer_expressions() {
    assert_integers(&[
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ]);
}

#[test]
fn boolean_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 > 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("false != true", true),
        ("(1 < 2) == true", true),
        ("(1 < 2) == false", false),
        ("(1 > 2) == true", false),
        ("(1 > 2) == false", true),
        ("1 == true", false),
        ("1 != true", true),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Value::from_bool(expected), "{source}");
    }
}

#[test]
fn bang_operator() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
        ("!0", false),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Value::from_bool(expected), "{source}");
    }
}

#[test]
fn if_else_expressions() {
    let cases = [
        ("if (true) { 10 }", Value::Integer(10)),
        ("if (false) { 10 }", NULL),
        ("if (1) { 10 }", Value::Integer(10)),
        ("if (0) { 10 }", Value::Integer(10)),
        ("if (1 < 2) { 10 }", Value::Integer(10)),
        ("if (1 > 2) { 10 }", NULL),
        ("if (1 > 2) { 10 } else { 20 }", Value::Integer(20)),
        ("if (1 < 2) { 10 } else { 20 }", Value::Integer(10)),
        ("if (if (false) { 1 }) { 10 }", NULL),
        ("if (true) { }", NULL),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), expected, "{source}");
    }
}

#[test]
fn return_statements() {
    assert_integers(&[
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        ("9; return 8; 2 * 2;", 8),
        ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
        ("let f = fn(x) { return x; x + 10; }; f(10);", 10),
        (
            "let f = fn(x) { let result = x + 10; return result; return 10; }; f(10);",
            20,
        ),
    ]);
}

#[test]
fn error_handling() {
    assert_errors(&[
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        ("\"Hello\" - \"World\"", "unknown operator: STRING - STRING"),
        ("\"a\" == \"a\"", "unknown operator: STRING == STRING"),
        (
            "{\"name\": \"Monkey\"}[fn(x) { x }];",
            "unusable as hash key: FUNCTION",
        ),
        ("{[1]: 2}", "unusable as hash key: ARRAY"),
        ("1[0]", "index operator not supported: INTEGER"),
        ("[1][\"a\"]", "index operator not supported: ARRAY"),
        ("5(1)", "not a function: INTEGER"),
        ("let add = fn(a, b) { a + b }; add(1)", "wrong number of arguments: want=2, got=1"),
        ("fn() { 1 }(2)", "wrong number of arguments: want=0, got=1"),
        ("1 / 0", "division by zero"),
        ("null - 1", "identifier not found: null"),
        ("if (true) { 1 } - true", "type mismatch: INTEGER - BOOLEAN"),
        ("let m = macro(x) { x }; m(1)", "not a function: MACRO"),
    ]);
}

#[test]
fn let_statements() {
    assert_integers(&[
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
    ]);
}

#[test]
fn let_and_empty_programs_yield_null() {
    assert_eq!(run("let x = 5;"), NULL);
    assert_eq!(run(""), NULL);
}

#[test]
fn let_error_does_not_bind() {
    let env = Environment::new();
    let program = crate::tests::parse("let x = 1 + true;");
    let value = Interpreter::new().eval_program(&program, &env);
    assert!(value.is_error());
    assert_eq!(env.get("x"), None);
}

#[test]
fn global_environment_persists_across_programs() {
    let env = Environment::new();
    let interpreter = Interpreter::new();
    interpreter.eval_program(&crate::tests::parse("let a = 2;"), &env);
    interpreter.eval_program(&crate::tests::parse("let double = fn(x) { x * a };"), &env);
    let value = interpreter.eval_program(&crate::tests::parse("double(21)"), &env);
    assert_eq!(value, Value::Integer(42));
}

#[test]
fn function_object() {
    match run("fn(x) { x + 2; };") {
        Value::Function(func) => {
            let params: Vec<&str> = func.parameters.iter().map(|p| p.as_str()).collect();
            assert_eq!(params, vec!["x"]);
            assert_eq!(func.body.to_string(), "(x + 2)");
        }
        other => panic!("expected function, got {other}"),
    }
}

#[test]
fn function_application() {
    assert_integers(&[
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ]);
}

#[test]
fn strings() {
    assert_eq!(run("\"Hello World!\""), Value::string("Hello World!"));
    assert_eq!(
        run("\"Hello\" + \" \" + \"World!\""),
        Value::string("Hello World!")
    );
}

#[test]
fn builtins_resolve_after_environment() {
    assert_eq!(run("len(\"four\")"), Value::Integer(4));
    assert_eq!(run("let len = fn(x) { 42 }; len(\"abc\")"), Value::Integer(42));
    assert_eq!(run("puts(\"hello\", \"world!\")"), NULL);
    assert_eq!(run("len == len"), TRUE);
    assert_eq!(run("len == first"), FALSE);
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(
        run("[1, 2 * 2, 3 + 3]"),
        Value::array(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)])
    );
    assert_integers(&[
        ("[1, 2, 3][0]", 1),
        ("[1, 2, 3][1]", 2),
        ("[1, 2, 3][2]", 3),
        ("let i = 0; [1][i];", 1),
        ("[1, 2, 3][1 + 1];", 3),
        ("let myArray = [1, 2, 3]; myArray[2];", 3),
        ("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6),
        ("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", 2),
    ]);
    assert_eq!(run("[1, 2, 3][3]"), NULL);
    assert_eq!(run("[1, 2, 3][-1]"), NULL);
    assert_eq!(run("[][0]"), NULL);
}

#[test]
fn hash_literals() {
    let source = r#"
        let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }
    "#;
    let Value::Hash(hash) = run(source) else {
        panic!("expected a hash");
    };
    let expected = [
        (Value::string("one"), 1),
        (Value::string("two"), 2),
        (Value::string("three"), 3),
        (Value::Integer(4), 4),
        (TRUE, 5),
        (FALSE, 6),
    ];
    assert_eq!(hash.pairs.len(), expected.len());
    for (key, value) in expected {
        let pair = &hash.pairs[&key.hash_key().unwrap_or_else(|| panic!("{key}"))];
        assert_eq!(pair.key, key);
        assert_eq!(pair.value, Value::Integer(value));
    }
}

#[test]
fn duplicate_hash_keys_keep_the_last_value() {
    assert_eq!(run("{1: \"a\", 1: \"b\"}[1]"), Value::string("b"));
}

#[test]
fn hash_indexing() {
    let cases = [
        ("{\"foo\": 5}[\"foo\"]", Value::Integer(5)),
        ("{\"foo\": 5}[\"bar\"]", NULL),
        ("let key = \"foo\"; {\"foo\": 5}[key]", Value::Integer(5)),
        ("{}[\"foo\"]", NULL),
        ("{5: 5}[5]", Value::Integer(5)),
        ("{true: 5}[true]", Value::Integer(5)),
        ("{false: 5}[false]", Value::Integer(5)),
        ("{1: 5}[true]", NULL),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), expected, "{source}");
    }
}

#[test]
fn identity_equality_on_heap_values() {
    assert_eq!(run("[1] == [1]"), FALSE);
    assert_eq!(run("let a = [1]; a == a"), TRUE);
    assert_eq!(run("let f = fn() { 1 }; f == f"), TRUE);
    assert_eq!(run("if (false) { 1 } == if (false) { 2 }"), TRUE);
}
