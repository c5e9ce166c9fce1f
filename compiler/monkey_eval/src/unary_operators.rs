//! Prefix operator implementations.

use monkey_ir::PrefixOp;

use crate::errors::{unknown_prefix_operator, EvalError};
use crate::value::Value;

/// Evaluate `<op>operand`.
///
/// `!` applies the truthiness rule to any value; `-` only accepts integers.
pub fn evaluate_prefix(op: PrefixOp, operand: &Value) -> Result<Value, EvalError> {
    match (op, operand) {
        (PrefixOp::Not, value) => Ok(Value::from_bool(!value.is_truthy())),
        (PrefixOp::Neg, Value::Integer(n)) => Ok(Value::Integer(n.wrapping_neg())),
        (PrefixOp::Neg, other) => Err(unknown_prefix_operator(op, other.type_name())),
    }
}
