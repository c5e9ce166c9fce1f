//! Evaluation errors.
//!
//! Every language-level failure is an `EvalError`. Factories below are the
//! only place messages are spelled out; call sites pick the factory and pass
//! the operand type names.

use monkey_ir::{InfixOp, PrefixOp};
use thiserror::Error;

/// What went wrong during evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator { op: PrefixOp, operand: &'static str },
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },
    #[error("unusable as hash key: {type_name}")]
    UnusableAsHashKey { type_name: &'static str },
    #[error("index operator not supported: {type_name}")]
    IndexNotSupported { type_name: &'static str },
    #[error("not a function: {type_name}")]
    NotAFunction { type_name: &'static str },
    #[error("wrong number of arguments: want={expected}, got={got}")]
    WrongArgumentCount { expected: usize, got: usize },
    #[error("argument to `{builtin}` not supported, got {type_name}")]
    UnsupportedArgument {
        builtin: &'static str,
        type_name: &'static str,
    },
    #[error("argument to `{builtin}` must be {expected}, got {type_name}")]
    WrongArgumentType {
        builtin: &'static str,
        expected: &'static str,
        type_name: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("unquote result has no literal form: {type_name}")]
    UnquoteUnrepresentable { type_name: &'static str },
    #[error("macro must return a quoted AST node, got {type_name}")]
    MacroResultNotQuote { type_name: &'static str },
}

/// A language-level evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

// Operator Errors

/// Operands of different types on an operator that needs matching types.
#[cold]
pub fn type_mismatch(left: &'static str, op: InfixOp, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { left, op, right })
}

#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, operand: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOperator { op, operand })
}

#[cold]
pub fn unknown_infix_operator(left: &'static str, op: InfixOp, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownInfixOperator { left, op, right })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

// Name and Index Errors

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    })
}

#[cold]
pub fn unusable_as_hash_key(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnusableAsHashKey { type_name })
}

#[cold]
pub fn index_not_supported(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexNotSupported { type_name })
}

// Call Errors

#[cold]
pub fn not_a_function(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction { type_name })
}

#[cold]
pub fn wrong_argument_count(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgumentCount { expected, got })
}

/// A builtin received a value it has no behavior for.
#[cold]
pub fn unsupported_argument(builtin: &'static str, type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedArgument { builtin, type_name })
}

/// A builtin requires a specific argument type.
#[cold]
pub fn wrong_argument_type(
    builtin: &'static str,
    expected: &'static str,
    type_name: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgumentType {
        builtin,
        expected,
        type_name,
    })
}

// Staging Errors

#[cold]
pub fn unquote_unrepresentable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnquoteUnrepresentable { type_name })
}

#[cold]
pub fn macro_result_not_quote(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MacroResultNotQuote { type_name })
}
