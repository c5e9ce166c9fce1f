//! AST folding.
//!
//! A `Folder` consumes a tree and rebuilds it, giving each hook a chance to
//! replace a node. Default implementations call the `walk_*` functions, which
//! fold every child position and reassemble the parent unchanged.
//!
//! Folding is fallible: the first error aborts the walk and is returned to
//! the caller.
//!
//! # Example
//!
//! ```text
//! struct DoubleInts;
//!
//! impl Folder for DoubleInts {
//!     type Error = std::convert::Infallible;
//!
//!     fn fold_expression(&mut self, expr: Expression) -> Result<Expression, Self::Error> {
//!         match walk_expression(self, expr)? {
//!             Expression::IntegerLiteral(n) => Ok(Expression::IntegerLiteral(n * 2)),
//!             other => Ok(other),
//!         }
//!     }
//! }
//! ```

use std::rc::Rc;

use crate::ast::{BlockStatement, Expression, Program, Statement};

/// Tree transformer. Override a `fold_*` hook to rewrite that node kind.
pub trait Folder {
    type Error;

    fn fold_program(&mut self, program: Program) -> Result<Program, Self::Error> {
        walk_program(self, program)
    }

    fn fold_statement(&mut self, statement: Statement) -> Result<Statement, Self::Error> {
        walk_statement(self, statement)
    }

    fn fold_block(&mut self, block: BlockStatement) -> Result<BlockStatement, Self::Error> {
        walk_block(self, block)
    }

    fn fold_expression(&mut self, expr: Expression) -> Result<Expression, Self::Error> {
        walk_expression(self, expr)
    }
}

pub fn walk_program<F: Folder + ?Sized>(
    folder: &mut F,
    program: Program,
) -> Result<Program, F::Error> {
    let statements = program
        .statements
        .into_iter()
        .map(|s| folder.fold_statement(s))
        .collect::<Result<_, _>>()?;
    Ok(Program { statements })
}

pub fn walk_block<F: Folder + ?Sized>(
    folder: &mut F,
    block: BlockStatement,
) -> Result<BlockStatement, F::Error> {
    let statements = block
        .statements
        .into_iter()
        .map(|s| folder.fold_statement(s))
        .collect::<Result<_, _>>()?;
    Ok(BlockStatement { statements })
}

pub fn walk_statement<F: Folder + ?Sized>(
    folder: &mut F,
    statement: Statement,
) -> Result<Statement, F::Error> {
    Ok(match statement {
        Statement::Let { name, value } => Statement::Let {
            name,
            value: folder.fold_expression(value)?,
        },
        Statement::Return(value) => Statement::Return(folder.fold_expression(value)?),
        Statement::Expression(expr) => Statement::Expression(folder.fold_expression(expr)?),
    })
}

/// Fold a shared body. The body is cloned only if another holder still references it.
fn fold_shared_block<F: Folder + ?Sized>(
    folder: &mut F,
    body: Rc<BlockStatement>,
) -> Result<Rc<BlockStatement>, F::Error> {
    let body = Rc::try_unwrap(body).unwrap_or_else(|shared| (*shared).clone());
    Ok(Rc::new(folder.fold_block(body)?))
}

fn fold_boxed<F: Folder + ?Sized>(
    folder: &mut F,
    expr: Box<Expression>,
) -> Result<Box<Expression>, F::Error> {
    Ok(Box::new(folder.fold_expression(*expr)?))
}

fn fold_all<F: Folder + ?Sized>(
    folder: &mut F,
    exprs: Vec<Expression>,
) -> Result<Vec<Expression>, F::Error> {
    exprs
        .into_iter()
        .map(|e| folder.fold_expression(e))
        .collect()
}

pub fn walk_expression<F: Folder + ?Sized>(
    folder: &mut F,
    expr: Expression,
) -> Result<Expression, F::Error> {
    Ok(match expr {
        Expression::Identifier(_)
        | Expression::IntegerLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::StringLiteral(_) => expr,
        Expression::ArrayLiteral(elements) => Expression::ArrayLiteral(fold_all(folder, elements)?),
        Expression::HashLiteral(pairs) => {
            let pairs = pairs
                .into_iter()
                .map(|(key, value)| -> Result<_, F::Error> {
                    Ok((folder.fold_expression(key)?, folder.fold_expression(value)?))
                })
                .collect::<Result<_, _>>()?;
            Expression::HashLiteral(pairs)
        }
        Expression::Prefix { op, right } => Expression::Prefix {
            op,
            right: fold_boxed(folder, right)?,
        },
        Expression::Infix { op, left, right } => Expression::Infix {
            op,
            left: fold_boxed(folder, left)?,
            right: fold_boxed(folder, right)?,
        },
        Expression::If {
            condition,
            consequence,
            alternative,
        } => Expression::If {
            condition: fold_boxed(folder, condition)?,
            consequence: folder.fold_block(consequence)?,
            alternative: alternative.map(|alt| folder.fold_block(alt)).transpose()?,
        },
        Expression::FunctionLiteral { parameters, body } => Expression::FunctionLiteral {
            parameters,
            body: fold_shared_block(folder, body)?,
        },
        Expression::MacroLiteral { parameters, body } => Expression::MacroLiteral {
            parameters,
            body: fold_shared_block(folder, body)?,
        },
        Expression::Call {
            function,
            arguments,
        } => Expression::Call {
            function: fold_boxed(folder, function)?,
            arguments: fold_all(folder, arguments)?,
        },
        Expression::Index { left, index } => Expression::Index {
            left: fold_boxed(folder, left)?,
            index: fold_boxed(folder, index)?,
        },
    })
}
