//! Recursive descent parser for Monkey.
//!
//! Statements are parsed one at a time; binary expressions use a
//! precedence-climbing chain (one method per precedence level). Errors do
//! not stop the parse: each failing top-level statement is recorded and the
//! parser resynchronizes at the next `;`.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use monkey_ir::{Program, Token, TokenKind};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a token stream ending in `Eof`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse every statement up to `Eof`.
    pub fn parse_program(mut self) -> ParseResult {
        let mut statements = Vec::new();
        let mut errors = Vec::new();

        while !self.cursor.is_at_end() {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    tracing::debug!(%error, span = %error.span, "recovering from parse error");
                    errors.push(error);
                    self.synchronize();
                }
            }
        }

        ParseResult {
            program: Program::new(statements),
            errors,
        }
    }

    /// Skip past the next `;` (or to `Eof`) after a failed statement.
    fn synchronize(&mut self) {
        while !self.cursor.is_at_end() {
            if self.cursor.advance().kind == TokenKind::Semicolon {
                break;
            }
        }
    }
}

/// Parsed program plus any errors reported along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseResult {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse tokens into a program.
pub fn parse(tokens: &[Token]) -> ParseResult {
    Parser::new(tokens).parse_program()
}

/// Lex and parse `source` in one step.
pub fn parse_source(source: &str) -> ParseResult {
    let tokens = monkey_lexer::lex(source);
    parse(&tokens)
}

#[cfg(test)]
mod tests;
