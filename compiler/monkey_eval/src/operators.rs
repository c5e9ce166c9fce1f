//! Infix operator implementations.
//!
//! Direct enum dispatch on the operand pair. Integers and strings have
//! their own operator tables; every other pair only supports `==`/`!=`
//! by identity.

use monkey_ir::InfixOp;

use crate::errors::{division_by_zero, type_mismatch, unknown_infix_operator, EvalError};
use crate::value::Value;

/// Evaluate `left <op> right` on already-evaluated operands.
pub fn evaluate_infix(op: InfixOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer_infix(op, *a, *b),
        (Value::String(a), Value::String(b)) => eval_string_infix(op, a, b),
        _ => match op {
            InfixOp::Eq => Ok(Value::from_bool(left.identical(right))),
            InfixOp::NotEq => Ok(Value::from_bool(!left.identical(right))),
            _ if left.type_name() != right.type_name() => {
                Err(type_mismatch(left.type_name(), op, right.type_name()))
            }
            _ => Err(unknown_infix_operator(
                left.type_name(),
                op,
                right.type_name(),
            )),
        },
    }
}

/// Two's-complement wrapping arithmetic; division truncates toward zero.
fn eval_integer_infix(op: InfixOp, a: i64, b: i64) -> Result<Value, EvalError> {
    Ok(match op {
        InfixOp::Add => Value::Integer(a.wrapping_add(b)),
        InfixOp::Sub => Value::Integer(a.wrapping_sub(b)),
        InfixOp::Mul => Value::Integer(a.wrapping_mul(b)),
        InfixOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Value::Integer(a.wrapping_div(b))
        }
        InfixOp::Lt => Value::from_bool(a < b),
        InfixOp::Gt => Value::from_bool(a > b),
        InfixOp::Eq => Value::from_bool(a == b),
        InfixOp::NotEq => Value::from_bool(a != b),
    })
}

fn eval_string_infix(op: InfixOp, a: &str, b: &str) -> Result<Value, EvalError> {
    match op {
        InfixOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        _ => Err(unknown_infix_operator("STRING", op, "STRING")),
    }
}
