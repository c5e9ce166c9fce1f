//! Tree-walking interpreter.
//!
//! Evaluation returns `Result<Value, ControlFlow>`: `Ok` for a plain value,
//! `Err` for anything that must unwind enclosing statements (a `return` or
//! an error). `?` gives the short-circuit at every step. Function calls stop
//! a `Return`; `eval_program` turns whatever reaches the top into a `Value`.
//!
//! Subexpressions are evaluated strictly left to right.

mod builder;
mod function_call;

use std::rc::Rc;

use monkey_ir::{BlockStatement, Expression, Program, Statement};

use crate::builtins::lookup_builtin;
use crate::errors::{identifier_not_found, index_not_supported, unusable_as_hash_key, EvalError};
use crate::operators::evaluate_infix;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::unary_operators::evaluate_prefix;
use crate::value::{FunctionValue, HashPair, HashValue, Value, NULL};
use crate::Environment;

pub use builder::InterpreterBuilder;

/// Non-local exit from the statement being evaluated.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlFlow {
    /// `return <value>` unwinding to the nearest function call.
    Return(Value),
    /// An error unwinding to the top of the program.
    Error(EvalError),
}

impl From<EvalError> for ControlFlow {
    fn from(error: EvalError) -> Self {
        ControlFlow::Error(error)
    }
}

pub type EvalResult = Result<Value, ControlFlow>;

/// Evaluator state: where `puts`/`print` write.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter {
            print_handler: stdout_handler(),
        }
    }
}

impl Interpreter {
    /// An interpreter writing to stdout.
    pub fn new() -> Self {
        Interpreter::default()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate a whole program in `env`.
    ///
    /// A top-level `return` yields its value; an error yields `Value::Error`.
    /// Programs that are empty or end in `let` yield `NULL`.
    pub fn eval_program(&self, program: &Program, env: &Environment) -> Value {
        let mut result = NULL;
        for statement in &program.statements {
            match self.eval_statement(statement, env) {
                Ok(value) => result = value,
                Err(ControlFlow::Return(value)) => return value,
                Err(ControlFlow::Error(error)) => {
                    tracing::debug!(%error, "evaluation stopped");
                    return Value::Error(error);
                }
            }
        }
        result
    }

    /// Evaluate statements in order; the last one's value is the block's value.
    ///
    /// Blocks share the enclosing scope.
    pub(crate) fn eval_block(&self, block: &BlockStatement, env: &Environment) -> EvalResult {
        let mut result = NULL;
        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
        }
        Ok(result)
    }

    fn eval_statement(&self, statement: &Statement, env: &Environment) -> EvalResult {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.set(name.as_str(), value);
                Ok(NULL)
            }
            Statement::Return(value) => {
                let value = self.eval_expression(value, env)?;
                Err(ControlFlow::Return(value))
            }
            Statement::Expression(expr) => self.eval_expression(expr, env),
        }
    }

    pub(crate) fn eval_expression(&self, expr: &Expression, env: &Environment) -> EvalResult {
        match expr {
            Expression::Identifier(id) => env
                .get(id.as_str())
                .or_else(|| lookup_builtin(id.as_str()).map(Value::Builtin))
                .ok_or_else(|| identifier_not_found(id.as_str()).into()),
            Expression::IntegerLiteral(n) => Ok(Value::Integer(*n)),
            Expression::BooleanLiteral(b) => Ok(Value::from_bool(*b)),
            Expression::StringLiteral(s) => Ok(Value::string(s.as_str())),
            Expression::ArrayLiteral(elements) => {
                let elements = self.eval_expressions(elements, env)?;
                Ok(Value::array(elements))
            }
            Expression::HashLiteral(pairs) => self.eval_hash_literal(pairs, env),
            Expression::Prefix { op, right } => {
                let right = self.eval_expression(right, env)?;
                Ok(evaluate_prefix(*op, &right)?)
            }
            Expression::Infix { op, left, right } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Ok(evaluate_infix(*op, &left, &right)?)
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expression(condition, env)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(NULL)
                }
            }
            Expression::FunctionLiteral { parameters, body } => {
                Ok(Value::Function(Rc::new(FunctionValue {
                    parameters: parameters.clone(),
                    body: Rc::clone(body),
                    env: env.clone(),
                })))
            }
            Expression::MacroLiteral { parameters, body } => {
                Ok(Value::Macro(Rc::new(FunctionValue {
                    parameters: parameters.clone(),
                    body: Rc::clone(body),
                    env: env.clone(),
                })))
            }
            Expression::Call {
                function,
                arguments,
            } => {
                if let Some(quoted) = expr.as_call_to("quote") {
                    return self.eval_quote(quoted, env);
                }
                let callee = self.eval_expression(function, env)?;
                let args = self.eval_expressions(arguments, env)?;
                Ok(self.apply_function(&callee, &args)?)
            }
            Expression::Index { left, index } => {
                let left = self.eval_expression(left, env)?;
                let index = self.eval_expression(index, env)?;
                Ok(evaluate_index(&left, &index)?)
            }
        }
    }

    fn eval_expressions(
        &self,
        exprs: &[Expression],
        env: &Environment,
    ) -> Result<Vec<Value>, ControlFlow> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env))
            .collect()
    }

    /// Keys are checked for hashability before their value is evaluated.
    fn eval_hash_literal(
        &self,
        pairs: &[(Expression, Expression)],
        env: &Environment,
    ) -> EvalResult {
        let mut hash = HashValue::default();
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr, env)?;
            let hash_key = key
                .hash_key()
                .ok_or_else(|| unusable_as_hash_key(key.type_name()))?;
            let value = self.eval_expression(value_expr, env)?;
            hash.pairs.insert(hash_key, HashPair { key, value });
        }
        Ok(Value::Hash(Rc::new(hash)))
    }
}

/// `left[index]`. Missing elements and keys are `NULL`, not errors.
fn evaluate_index(left: &Value, index: &Value) -> Result<Value, EvalError> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(NULL)),
        (Value::Hash(hash), key) => {
            let hash_key = key
                .hash_key()
                .ok_or_else(|| unusable_as_hash_key(key.type_name()))?;
            Ok(hash
                .pairs
                .get(&hash_key)
                .map_or(NULL, |pair| pair.value.clone()))
        }
        _ => Err(index_not_supported(left.type_name())),
    }
}

/// Evaluate `program` in `env` with a default (stdout) interpreter.
pub fn evaluate(program: &Program, env: &Environment) -> Value {
    Interpreter::new().eval_program(program, env)
}

#[cfg(test)]
mod tests;
