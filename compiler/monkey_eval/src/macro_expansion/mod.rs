//! Macro definition and expansion.
//!
//! Runs between parsing and evaluation:
//! 1. `define_macros` pulls top-level `let name = macro(...) { ... };`
//!    statements out of the program and binds them in a macro environment.
//! 2. `expand_macros` folds the remaining program bottom-up, replacing every
//!    call to a bound macro with the syntax the macro returns.
//!
//! Macro arguments are passed unevaluated, as `Quote` values. The body must
//! produce a `Quote`; its node is spliced in place of the call.

use std::rc::Rc;

use monkey_ir::fold::walk_expression;
use monkey_ir::{Expression, Folder, Program, Statement};

use crate::errors::{macro_result_not_quote, EvalError};
use crate::interpreter::Interpreter;
use crate::value::{FunctionValue, Value};
use crate::Environment;

/// Move top-level macro definitions from `program` into `env`.
pub fn define_macros(program: &mut Program, env: &Environment) {
    program.statements.retain(|statement| {
        let Statement::Let {
            name,
            value: Expression::MacroLiteral { parameters, body },
        } = statement
        else {
            return true;
        };
        tracing::debug!(name = name.as_str(), "defining macro");
        env.set(
            name.as_str(),
            Value::Macro(Rc::new(FunctionValue {
                parameters: parameters.clone(),
                body: Rc::clone(body),
                env: env.clone(),
            })),
        );
        false
    });
}

/// Expand macro calls in `program` with a default interpreter.
pub fn expand_macros(program: Program, env: &Environment) -> Result<Program, EvalError> {
    Interpreter::new().expand_macros(program, env)
}

impl Interpreter {
    /// Expand every call to a macro bound in `env`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(statements = program.statements.len())
    )]
    pub fn expand_macros(
        &self,
        program: Program,
        env: &Environment,
    ) -> Result<Program, EvalError> {
        let mut expander = MacroExpander {
            interpreter: self,
            env,
        };
        expander.fold_program(program)
    }
}

struct MacroExpander<'a> {
    interpreter: &'a Interpreter,
    env: &'a Environment,
}

impl MacroExpander<'_> {
    /// The macro a call expression targets, if any.
    fn macro_for(&self, expr: &Expression) -> Option<Rc<FunctionValue>> {
        let Expression::Call { function, .. } = expr else {
            return None;
        };
        let Expression::Identifier(id) = function.as_ref() else {
            return None;
        };
        match self.env.get(id.as_str()) {
            Some(Value::Macro(mac)) => Some(mac),
            _ => None,
        }
    }
}

impl Folder for MacroExpander<'_> {
    type Error = EvalError;

    fn fold_expression(&mut self, expr: Expression) -> Result<Expression, EvalError> {
        let expr = walk_expression(self, expr)?;
        let Some(mac) = self.macro_for(&expr) else {
            return Ok(expr);
        };
        let arguments = match expr {
            Expression::Call { arguments, .. } => arguments,
            other => return Ok(other),
        };

        let args: Vec<Value> = arguments
            .into_iter()
            .map(|arg| Value::Quote(Rc::new(arg)))
            .collect();
        tracing::trace!(args = args.len(), "expanding macro call");

        match self.interpreter.call_closure(&mac, &args)? {
            Value::Quote(node) => {
                Ok(Rc::try_unwrap(node).unwrap_or_else(|shared| (*shared).clone()))
            }
            other => Err(macro_result_not_quote(other.type_name())),
        }
    }
}
