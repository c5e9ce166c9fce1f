//! Monkey evaluator.
//!
//! A recursive tree-walking interpreter over `monkey_ir` syntax trees:
//! - `value`: the runtime value model and hash keys
//! - `environment`: chained lexical scopes shared by closures
//! - `builtins`: host functions reachable by name
//! - `interpreter`: statement/expression evaluation and function application
//! - `quote_unquote`: the `quote`/`unquote` staging pair
//! - `macro_expansion`: `macro` definitions expanded before evaluation
//!
//! Language-level failures never panic: they become `Value::Error` at the
//! program boundary.

pub mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod macro_expansion;
mod operators;
pub mod print_handler;
mod quote_unquote;
mod unary_operators;
mod value;

pub use builtins::{lookup_builtin, Builtin, BuiltinFn};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{evaluate, ControlFlow, EvalResult, Interpreter, InterpreterBuilder};
pub use macro_expansion::{define_macros, expand_macros};
pub use operators::evaluate_infix;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use quote_unquote::value_to_expression;
pub use unary_operators::evaluate_prefix;
pub use value::{FunctionValue, HashKey, HashKind, HashPair, HashValue, Value, FALSE, NULL, TRUE};

#[cfg(test)]
mod tests;
