//! Token cursor for navigating the token stream.

use monkey_ir::{Span, Token, TokenKind};

use crate::error::{ParseError, ParseErrorKind};

/// Position within a token slice that always ends in `Eof`.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Get the current token.
    ///
    /// Past the end of the slice (or for an empty slice) this is `Eof`.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF_TOKEN)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token is the same kind as `kind` (payloads ignored).
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Consume the current token and return it. `Eof` is never consumed.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or report what was found instead.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    /// Error for the current token when `expected` was required.
    pub fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found: self.current_kind().display_name().to_string(),
            },
            self.current_span(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_eof() {
        let tokens = monkey_lexer::lex("x");
        let mut cursor = Cursor::new(&tokens);
        assert!(matches!(cursor.advance().kind, TokenKind::Ident(_)));
        assert!(cursor.is_at_end());
        assert!(matches!(cursor.advance().kind, TokenKind::Eof));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn empty_slice_reads_as_eof() {
        let cursor = Cursor::new(&[]);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn expect_reports_found_token() {
        let tokens = monkey_lexer::lex("]");
        let mut cursor = Cursor::new(&tokens);
        let err = cursor.expect(&TokenKind::RParen);
        assert_eq!(
            err.map_err(|e| e.message()),
            Err("expected next token to be ), got ] instead".to_string())
        );
    }
}
