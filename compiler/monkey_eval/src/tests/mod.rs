//! Whole-program evaluation tests.
//!
//! Helpers here parse real source so tests read as Monkey programs.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "test helpers fail loudly on malformed fixtures"
)]


use monkey_ir::Program;

use crate::print_handler::{buffer_handler, silent_handler};
use crate::{define_macros, Environment, Interpreter, Value};

/// Parse `source`, panicking on parse errors.
pub(crate) fn parse(source: &str) -> Program {
    let result = monkey_parse::parse_source(source);
    assert!(
        !result.has_errors(),
        "parse errors in {source:?}: {:?}",
        result.errors
    );
    result.program
}

/// Evaluate `source` in a fresh global environment, discarding output.
pub(crate) fn run(source: &str) -> Value {
    let interpreter = Interpreter::builder()
        .print_handler(silent_handler())
        .build();
    interpreter.eval_program(&parse(source), &Environment::new())
}

/// Evaluate `source` and return the result with everything it printed.
pub(crate) fn run_with_output(source: &str) -> (Value, String) {
    let out = buffer_handler();
    let interpreter = Interpreter::builder().print_handler(out.clone()).build();
    let value = interpreter.eval_program(&parse(source), &Environment::new());
    (value, out.get_output())
}

/// Define and expand macros, then evaluate, as a front end would.
pub(crate) fn run_expanded(source: &str) -> (Value, String) {
    let out = buffer_handler();
    let interpreter = Interpreter::builder().print_handler(out.clone()).build();
    let env = Environment::new();
    let macro_env = Environment::new();

    let mut program = parse(source);
    define_macros(&mut program, &macro_env);
    let program = interpreter.expand_macros(program, &macro_env).unwrap();
    let value = interpreter.eval_program(&program, &env);
    (value, out.get_output())
}

/// The message of an error result.
pub(crate) fn error_message(value: &Value) -> String {
    match value {
        Value::Error(error) => error.message(),
        other => panic!("expected an error, got {other} ({})", other.type_name()),
    }
}
