//! AST nodes for Monkey programs.
//!
//! The tree is the evaluator's input contract: a `Program` of statements,
//! where every node already carries its children in source order.
//!
//! # Node taxonomy
//!
//! - Statements: `let`, `return`, expression statements, blocks
//! - Literals: integer, boolean, string, array, hash, function, macro
//! - Operators: prefix, infix, index, call
//! - Control flow: `if` / `else`
//!
//! Canonical rendering lives in `display.rs`; quoted code is compared
//! through that rendering.

mod display;
mod operators;

use std::rc::Rc;

pub use operators::{InfixOp, PrefixOp};

/// Root of a parsed source file or REPL line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    /// Whether evaluating this program leaves a value worth showing.
    ///
    /// Empty programs and programs ending in a `let` produce no value.
    pub fn ends_with_value(&self) -> bool {
        !matches!(self.statements.last(), None | Some(Statement::Let { .. }))
    }
}

/// A `{ ... }` sequence of statements.
///
/// Blocks do not introduce a scope of their own; only function application does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        BlockStatement { statements }
    }
}

/// An identifier as written in the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let { name: Identifier, value: Expression },
    /// `return <value>;`
    Return(Expression),
    /// A bare expression, optionally followed by `;`.
    Expression(Expression),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i64),
    BooleanLiteral(bool),
    StringLiteral(String),
    ArrayLiteral(Vec<Expression>),
    /// Key/value pairs in declaration order.
    HashLiteral(Vec<(Expression, Expression)>),
    Prefix {
        op: PrefixOp,
        right: Box<Expression>,
    },
    Infix {
        op: InfixOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    FunctionLiteral {
        parameters: Vec<Identifier>,
        body: Rc<BlockStatement>,
    },
    MacroLiteral {
        parameters: Vec<Identifier>,
        body: Rc<BlockStatement>,
    },
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },
}

impl Expression {
    /// Shorthand for an identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral(value.into())
    }

    pub fn prefix(op: PrefixOp, right: Expression) -> Self {
        Expression::Prefix {
            op,
            right: Box::new(right),
        }
    }

    pub fn infix(left: Expression, op: InfixOp, right: Expression) -> Self {
        Expression::Infix {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(function: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            function: Box::new(function),
            arguments,
        }
    }

    pub fn index(left: Expression, index: Expression) -> Self {
        Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        }
    }

    /// If this is a call whose callee is the bare identifier `name`, its arguments.
    pub fn as_call_to(&self, name: &str) -> Option<&[Expression]> {
        match self {
            Expression::Call {
                function,
                arguments,
            } if matches!(function.as_ref(), Expression::Identifier(id) if id.name == name) => {
                Some(arguments)
            }
            _ => None,
        }
    }
}
