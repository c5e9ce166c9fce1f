//! Postfix expressions: call and index.

use monkey_ir::{Expression, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a primary expression followed by any number of `(args)` / `[index]`.
    pub(crate) fn parse_postfix(&mut self) -> Result<Expression, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            if self.cursor.eat(&TokenKind::LParen) {
                let arguments = self.parse_expression_list(&TokenKind::RParen)?;
                expr = Expression::call(expr, arguments);
            } else if self.cursor.eat(&TokenKind::LBracket) {
                let index = self.parse_expression()?;
                self.cursor.expect(&TokenKind::RBracket)?;
                expr = Expression::index(expr, index);
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Comma-separated expressions up to and including `close`.
    ///
    /// The opening delimiter has already been consumed.
    pub(crate) fn parse_expression_list(
        &mut self,
        close: &TokenKind,
    ) -> Result<Vec<Expression>, ParseError> {
        let mut items = Vec::new();
        if self.cursor.eat(close) {
            return Ok(items);
        }

        items.push(self.parse_expression()?);
        while self.cursor.eat(&TokenKind::Comma) {
            items.push(self.parse_expression()?);
        }
        self.cursor.expect(close)?;

        Ok(items)
    }
}
