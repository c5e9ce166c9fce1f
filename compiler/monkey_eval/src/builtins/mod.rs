//! Host functions callable by name.
//!
//! Builtins are resolved after the environment chain, so a user binding with
//! the same name shadows them.

use std::fmt;

use crate::errors::{unsupported_argument, wrong_argument_count, wrong_argument_type, EvalError};
use crate::print_handler::PrintHandlerImpl;
use crate::value::{Value, NULL};

/// Signature shared by all builtins.
pub type BuiltinFn = fn(&[Value], &PrintHandlerImpl) -> Result<Value, EvalError>;

#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl Builtin {
    #[inline]
    pub fn call(&self, args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalError> {
        (self.func)(args, out)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

static BUILTINS: &[Builtin] = &[
    Builtin { name: "len", func: len },
    Builtin { name: "first", func: first },
    Builtin { name: "last", func: last },
    Builtin { name: "rest", func: rest },
    Builtin { name: "push", func: push },
    Builtin { name: "puts", func: puts },
    Builtin { name: "print", func: print },
];

pub fn lookup_builtin(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|b| b.name == name).copied()
}

fn expect_arity(args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_argument_count(expected, args.len()))
    }
}

fn expect_array<'a>(name: &'static str, value: &'a Value) -> Result<&'a [Value], EvalError> {
    match value {
        Value::Array(elements) => Ok(elements.as_slice()),
        other => Err(wrong_argument_type(name, "ARRAY", other.type_name())),
    }
}

fn count(n: usize) -> Value {
    Value::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

fn len(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    expect_arity(args, 1)?;
    match &args[0] {
        Value::String(s) => Ok(count(s.len())),
        Value::Array(elements) => Ok(count(elements.len())),
        other => Err(unsupported_argument("len", other.type_name())),
    }
}

fn first(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    expect_arity(args, 1)?;
    let elements = expect_array("first", &args[0])?;
    Ok(elements.first().cloned().unwrap_or(NULL))
}

fn last(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    expect_arity(args, 1)?;
    let elements = expect_array("last", &args[0])?;
    Ok(elements.last().cloned().unwrap_or(NULL))
}

fn rest(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    expect_arity(args, 1)?;
    let elements = expect_array("rest", &args[0])?;
    match elements.split_first() {
        Some((_, tail)) => Ok(Value::array(tail.to_vec())),
        None => Ok(NULL),
    }
}

fn push(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    expect_arity(args, 2)?;
    let elements = expect_array("push", &args[0])?;
    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend_from_slice(elements);
    pushed.push(args[1].clone());
    Ok(Value::array(pushed))
}

fn puts(args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalError> {
    for arg in args {
        out.println(&arg.to_string());
    }
    Ok(NULL)
}

fn print(args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalError> {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    out.print(&line);
    Ok(NULL)
}
