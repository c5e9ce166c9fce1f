//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expression`) and the binary precedence chain
//! - `operators.rs`: Operator matching helpers
//! - `primary.rs`: Literals, identifiers, grouping, `if`, `fn`, `macro`
//! - `postfix.rs`: Call and index
//!
//! Precedence, lowest to highest: `==`/`!=`, `<`/`>`, `+`/`-`, `*`/`/`,
//! prefix `!`/`-`, then call and index. All binary levels are
//! left-associative.

mod operators;
mod postfix;
mod primary;

use monkey_ir::Expression;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_equality()
    }

    /// Parse `==` and `!=`.
    fn parse_equality(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_comparison()?;

        while let Some(op) = self.match_equality_op() {
            self.cursor.advance();
            let right = self.parse_comparison()?;
            left = Expression::infix(left, op, right);
        }

        Ok(left)
    }

    /// Parse `<` and `>`.
    fn parse_comparison(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_comparison_op() {
            self.cursor.advance();
            let right = self.parse_additive()?;
            left = Expression::infix(left, op, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            left = Expression::infix(left, op, right);
        }

        Ok(left)
    }

    /// Parse `*` and `/`.
    fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.advance();
            let right = self.parse_unary()?;
            left = Expression::infix(left, op, right);
        }

        Ok(left)
    }

    /// Parse prefix `!` and `-`. They bind looser than call and index,
    /// so `-a[0]` is `-(a[0])`.
    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        if let Some(op) = self.match_unary_op() {
            self.cursor.advance();
            let operand = self.parse_unary()?;
            return Ok(Expression::prefix(op, operand));
        }

        self.parse_postfix()
    }
}
