//! `quote` / `unquote`.
//!
//! `quote(expr)` is intercepted before its argument is evaluated. The
//! argument tree is folded bottom-up; every `unquote(inner)` call inside it
//! is evaluated in the environment of the `quote` call and replaced by the
//! literal syntax for the resulting value.

use std::rc::Rc;

use monkey_ir::fold::walk_expression;
use monkey_ir::{Expression, Folder};

use crate::errors::{unquote_unrepresentable, wrong_argument_count, EvalError};
use crate::interpreter::{ControlFlow, EvalResult, Interpreter};
use crate::value::Value;
use crate::Environment;

impl Interpreter {
    /// Evaluate `quote(<arguments>)`.
    pub(crate) fn eval_quote(&self, arguments: &[Expression], env: &Environment) -> EvalResult {
        let [node] = arguments else {
            return Err(wrong_argument_count(1, arguments.len()).into());
        };
        let mut unquoter = Unquoter {
            interpreter: self,
            env,
        };
        let node = unquoter.fold_expression(node.clone())?;
        Ok(Value::Quote(Rc::new(node)))
    }
}

struct Unquoter<'a> {
    interpreter: &'a Interpreter,
    env: &'a Environment,
}

impl Folder for Unquoter<'_> {
    type Error = EvalError;

    fn fold_expression(&mut self, expr: Expression) -> Result<Expression, EvalError> {
        let expr = walk_expression(self, expr)?;
        if let Some([inner]) = expr.as_call_to("unquote") {
            let value = match self.interpreter.eval_expression(inner, self.env) {
                Ok(value) | Err(ControlFlow::Return(value)) => value,
                Err(ControlFlow::Error(error)) => return Err(error),
            };
            return value_to_expression(&value);
        }
        Ok(expr)
    }
}

/// Literal syntax that evaluates back to `value`.
///
/// Null, builtins, macros and errors have no literal form.
pub fn value_to_expression(value: &Value) -> Result<Expression, EvalError> {
    match value {
        Value::Integer(n) => Ok(Expression::IntegerLiteral(*n)),
        Value::Boolean(b) => Ok(Expression::BooleanLiteral(*b)),
        Value::String(s) => Ok(Expression::string(s.to_string())),
        Value::Quote(node) => Ok(node.as_ref().clone()),
        Value::Array(elements) => elements
            .iter()
            .map(value_to_expression)
            .collect::<Result<Vec<_>, _>>()
            .map(Expression::ArrayLiteral),
        Value::Hash(hash) => hash
            .pairs
            .values()
            .map(|pair| -> Result<_, EvalError> {
                Ok((
                    value_to_expression(&pair.key)?,
                    value_to_expression(&pair.value)?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Expression::HashLiteral),
        Value::Function(func) => Ok(Expression::FunctionLiteral {
            parameters: func.parameters.clone(),
            body: Rc::clone(&func.body),
        }),
        Value::Null | Value::Builtin(_) | Value::Macro(_) | Value::Error(_) => {
            Err(unquote_unrepresentable(value.type_name()))
        }
    }
}

#[cfg(test)]
mod tests;
