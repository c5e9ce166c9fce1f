//! Evaluation session.

use monkey_eval::{define_macros, Environment, Interpreter, Value};
use monkey_parse::{parse_source, ParseError, ParseResult};

/// Global and macro environments that persist across inputs.
///
/// Each call to `eval_source` sees the bindings and macros left behind by
/// earlier calls, which is what the REPL relies on.
pub struct Session {
    env: Environment,
    macro_env: Environment,
    interpreter: Interpreter,
}

/// Result of evaluating one chunk of source.
#[derive(Debug, PartialEq)]
pub enum SessionOutcome {
    /// The source did not parse; nothing was evaluated.
    ParseErrors(Vec<ParseError>),
    Value(Value),
    /// Empty input, or input ending in a `let`.
    NoValue,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    /// A session printing to stdout.
    pub fn new() -> Self {
        Session::with_interpreter(Interpreter::new())
    }

    pub fn with_interpreter(interpreter: Interpreter) -> Self {
        Session {
            env: Environment::new(),
            macro_env: Environment::new(),
            interpreter,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Parse, expand macros, and evaluate `source` in this session.
    pub fn eval_source(&self, source: &str) -> SessionOutcome {
        let ParseResult {
            mut program,
            errors,
        } = parse_source(source);
        if !errors.is_empty() {
            return SessionOutcome::ParseErrors(errors);
        }

        define_macros(&mut program, &self.macro_env);
        let program = match self.interpreter.expand_macros(program, &self.macro_env) {
            Ok(program) => program,
            Err(error) => return SessionOutcome::Value(Value::Error(error)),
        };

        let value = self.interpreter.eval_program(&program, &self.env);
        if value.is_error() || program.ends_with_value() {
            SessionOutcome::Value(value)
        } else {
            SessionOutcome::NoValue
        }
    }
}

#[cfg(test)]
mod tests {
    use monkey_eval::silent_handler;
    use pretty_assertions::assert_eq;

    use super::*;

    fn session() -> Session {
        Session::with_interpreter(Interpreter::builder().print_handler(silent_handler()).build())
    }

    #[test]
    fn bindings_persist_between_inputs() {
        let session = session();
        assert_eq!(session.eval_source("let a = 5;"), SessionOutcome::NoValue);
        assert_eq!(
            session.eval_source("a * 2"),
            SessionOutcome::Value(Value::Integer(10))
        );
        assert_eq!(session.env().get("a"), Some(Value::Integer(5)));
    }

    #[test]
    fn macros_persist_between_inputs() {
        let session = session();
        assert_eq!(
            session.eval_source("let double = macro(e) { quote(unquote(e) * 2) };"),
            SessionOutcome::NoValue
        );
        assert_eq!(
            session.eval_source("double(21)"),
            SessionOutcome::Value(Value::Integer(42))
        );
        // Macro definitions never reach the runtime environment.
        assert_eq!(session.env().get("double"), None);
    }

    #[test]
    fn parse_errors_skip_evaluation() {
        let session = session();
        let SessionOutcome::ParseErrors(errors) = session.eval_source("let x = 1; let = 2;") else {
            panic!("expected parse errors");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(session.env().get("x"), None);
    }

    #[test]
    fn errors_are_values_even_after_let() {
        let session = session();
        let SessionOutcome::Value(Value::Error(error)) = session.eval_source("let x = 1 + true;")
        else {
            panic!("expected an error value");
        };
        assert_eq!(error.message(), "type mismatch: INTEGER + BOOLEAN");
    }

    #[test]
    fn expansion_errors_become_values() {
        let session = session();
        let outcome = session.eval_source("let m = macro() { 1 }; m()");
        assert!(matches!(outcome, SessionOutcome::Value(Value::Error(_))));
    }

    #[test]
    fn empty_input_has_no_value() {
        assert_eq!(session().eval_source("   \n"), SessionOutcome::NoValue);
    }
}
