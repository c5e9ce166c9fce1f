//! Runtime values.
//!
//! `Value` is a closed sum type; every operator and builtin matches on it
//! exhaustively. Heap payloads sit behind `Rc` so cloning a value is cheap
//! and aliasing (for identity comparison) is observable.

mod hash_key;

use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, Expression, Identifier};
use rustc_hash::FxHashMap;

use crate::builtins::Builtin;
use crate::errors::EvalError;
use crate::Environment;

pub use hash_key::{HashKey, HashKind};

pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);
pub const NULL: Value = Value::Null;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    String(Rc<str>),
    Array(Rc<Vec<Value>>),
    Hash(Rc<HashValue>),
    Function(Rc<FunctionValue>),
    Builtin(Builtin),
    Error(EvalError),
    /// Unevaluated syntax produced by `quote`.
    Quote(Rc<Expression>),
    Macro(Rc<FunctionValue>),
}

/// Parameters, body and captured scope of a function or macro.
///
/// The environment is shared with the definition site. A function bound in
/// the scope it captures forms an `Rc` cycle that lives as long as the
/// session.
#[derive(Debug)]
pub struct FunctionValue {
    pub parameters: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
    pub env: Environment,
}

/// Hash contents keyed by `HashKey`; the original key is kept for display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HashValue {
    pub pairs: FxHashMap<HashKey, HashPair>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

impl Value {
    #[inline]
    pub fn from_bool(b: bool) -> Value {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    pub fn string(s: impl Into<Rc<str>>) -> Value {
        Value::String(s.into())
    }

    pub fn array(elements: Vec<Value>) -> Value {
        Value::Array(Rc::new(elements))
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::String(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Error(_) => "ERROR",
            Value::Quote(_) => "QUOTE",
            Value::Macro(_) => "MACRO",
        }
    }

    /// `false` and `null` are falsy; everything else, including `0`, is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Identity comparison used by `==` on anything but integers and strings.
    ///
    /// Booleans and null behave as canonical singletons, so they compare by
    /// value. Heap values compare by allocation.
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) | (Value::Macro(a), Value::Macro(b)) => {
                Rc::ptr_eq(a, b)
            }
            (Value::Quote(a), Value::Quote(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => false,
        }
    }
}

/// Structural equality for tests and host code. Functions and macros compare
/// by allocation since their captured scopes cannot be compared.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            (Value::Function(a), Value::Function(b)) | (Value::Macro(a), Value::Macro(b)) => {
                Rc::ptr_eq(a, b)
            }
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Quote(a), Value::Quote(b)) => a == b,
            _ => false,
        }
    }
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        Value::Error(error)
    }
}

fn write_parameters(f: &mut fmt::Formatter<'_>, parameters: &[Identifier]) -> fmt::Result {
    for (i, param) in parameters.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{param}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::String(s) => f.write_str(s),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Hash(hash) => {
                f.write_str("{")?;
                for (i, pair) in hash.pairs.values().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                f.write_str("}")
            }
            Value::Function(func) => {
                f.write_str("fn(")?;
                write_parameters(f, &func.parameters)?;
                write!(f, ") {{\n{}\n}}", func.body)
            }
            Value::Macro(mac) => {
                f.write_str("macro(")?;
                write_parameters(f, &mac.parameters)?;
                write!(f, ") {{\n{}\n}}", mac.body)
            }
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Error(error) => write!(f, "ERROR: {error}"),
            Value::Quote(node) => write!(f, "QUOTE({node})"),
        }
    }
}
