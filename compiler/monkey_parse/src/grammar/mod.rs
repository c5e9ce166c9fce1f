//! Grammar productions.
//!
//! - `mod.rs`: statements and blocks
//! - `expr/`: expressions

mod expr;

use monkey_ir::{BlockStatement, Identifier, Statement, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr>[;]`
    fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
        self.cursor.expect(&TokenKind::Let)?;
        let name = self.parse_identifier()?;
        self.cursor.expect(&TokenKind::Assign)?;
        let value = self.parse_expression()?;
        self.cursor.eat(&TokenKind::Semicolon);
        Ok(Statement::Let { name, value })
    }

    /// `return <expr>[;]`
    fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
        self.cursor.expect(&TokenKind::Return)?;
        let value = self.parse_expression()?;
        self.cursor.eat(&TokenKind::Semicolon);
        Ok(Statement::Return(value))
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expr = self.parse_expression()?;
        self.cursor.eat(&TokenKind::Semicolon);
        Ok(Statement::Expression(expr))
    }

    /// `{ <statement>* }`
    pub(crate) fn parse_block(&mut self) -> Result<BlockStatement, ParseError> {
        self.cursor.expect(&TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        self.cursor.expect(&TokenKind::RBrace)?;
        Ok(BlockStatement::new(statements))
    }

    pub(crate) fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(Identifier::new(name.clone()))
            }
            _ => Err(self.cursor.unexpected("IDENT")),
        }
    }

    /// `( <ident>, ... )` for function and macro literals.
    pub(crate) fn parse_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        self.cursor.expect(&TokenKind::LParen)?;
        let mut parameters = Vec::new();
        if self.cursor.eat(&TokenKind::RParen) {
            return Ok(parameters);
        }
        parameters.push(self.parse_identifier()?);
        while self.cursor.eat(&TokenKind::Comma) {
            parameters.push(self.parse_identifier()?);
        }
        self.cursor.expect(&TokenKind::RParen)?;
        Ok(parameters)
    }
}
