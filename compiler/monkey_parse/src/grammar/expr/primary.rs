//! Primary expressions.

use std::rc::Rc;

use monkey_ir::{Expression, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        let span = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(Expression::ident(name.clone()))
            }
            TokenKind::Int(text) => {
                let value = text.parse::<i64>().map_err(|_| {
                    ParseError::new(ParseErrorKind::InvalidInteger { text: text.clone() }, span)
                })?;
                self.cursor.advance();
                Ok(Expression::IntegerLiteral(value))
            }
            TokenKind::Str(value) => {
                self.cursor.advance();
                Ok(Expression::string(value.clone()))
            }
            TokenKind::True => {
                self.cursor.advance();
                Ok(Expression::BooleanLiteral(true))
            }
            TokenKind::False => {
                self.cursor.advance();
                Ok(Expression::BooleanLiteral(false))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expression()?;
                self.cursor.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                let elements = self.parse_expression_list(&TokenKind::RBracket)?;
                Ok(Expression::ArrayLiteral(elements))
            }
            TokenKind::LBrace => self.parse_hash_literal(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => {
                self.cursor.advance();
                let parameters = self.parse_parameters()?;
                let body = Rc::new(self.parse_block()?);
                Ok(Expression::FunctionLiteral { parameters, body })
            }
            TokenKind::Macro => {
                self.cursor.advance();
                let parameters = self.parse_parameters()?;
                let body = Rc::new(self.parse_block()?);
                Ok(Expression::MacroLiteral { parameters, body })
            }
            TokenKind::Illegal(text) => Err(ParseError::new(
                ParseErrorKind::IllegalToken { text: text.clone() },
                span,
            )),
            other => Err(ParseError::new(
                ParseErrorKind::NoPrefixParse {
                    found: other.display_name().to_string(),
                },
                span,
            )),
        }
    }

    /// `if (<cond>) { ... } [else { ... }]`
    fn parse_if(&mut self) -> Result<Expression, ParseError> {
        self.cursor.expect(&TokenKind::If)?;
        self.cursor.expect(&TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.cursor.expect(&TokenKind::RParen)?;
        let consequence = self.parse_block()?;

        let alternative = if self.cursor.eat(&TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// `{ <key>: <value>, ... }`
    fn parse_hash_literal(&mut self) -> Result<Expression, ParseError> {
        self.cursor.expect(&TokenKind::LBrace)?;
        let mut pairs = Vec::new();

        while !self.cursor.check(&TokenKind::RBrace) {
            let key = self.parse_expression()?;
            self.cursor.expect(&TokenKind::Colon)?;
            let value = self.parse_expression()?;
            pairs.push((key, value));

            if !self.cursor.check(&TokenKind::RBrace) {
                self.cursor.expect(&TokenKind::Comma)?;
            }
        }
        self.cursor.expect(&TokenKind::RBrace)?;

        Ok(Expression::HashLiteral(pairs))
    }
}
