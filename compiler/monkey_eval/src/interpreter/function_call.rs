//! Function application.

use super::{ControlFlow, Interpreter};
use crate::errors::{not_a_function, wrong_argument_count, EvalError};
use crate::value::{FunctionValue, Value};
use crate::Environment;

impl Interpreter {
    /// Call an evaluated callee with evaluated arguments.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callee = callee.type_name(), args = args.len())
    )]
    pub(crate) fn apply_function(
        &self,
        callee: &Value,
        args: &[Value],
    ) -> Result<Value, EvalError> {
        match callee {
            Value::Function(func) => self.call_closure(func, args),
            Value::Builtin(builtin) => builtin.call(args, &self.print_handler),
            other => Err(not_a_function(other.type_name())),
        }
    }

    /// Run a function or macro body in a fresh scope enclosed by the
    /// captured one. A `return` stops here.
    pub(crate) fn call_closure(
        &self,
        func: &FunctionValue,
        args: &[Value],
    ) -> Result<Value, EvalError> {
        if func.parameters.len() != args.len() {
            return Err(wrong_argument_count(func.parameters.len(), args.len()));
        }

        let call_env = Environment::new_enclosed(&func.env);
        for (param, arg) in func.parameters.iter().zip(args) {
            call_env.set(param.as_str(), arg.clone());
        }

        match self.eval_block(&func.body, &call_env) {
            Ok(value) | Err(ControlFlow::Return(value)) => Ok(value),
            Err(ControlFlow::Error(error)) => Err(error),
        }
    }
}
