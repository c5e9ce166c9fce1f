//! Lexer for Monkey using logos.
//!
//! Produces a `Vec<Token>` that always ends with a single `Eof` token.
//! Characters that do not start any token become `Illegal` tokens rather
//! than errors; the parser reports them.

mod raw_token;

use logos::Logos;
use monkey_ir::{lookup_keyword, Span, Token, TokenKind};

use raw_token::RawToken;

/// Tokenize `source`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let kind = match raw {
            Ok(raw) => convert(raw, lexer.slice()),
            Err(()) => TokenKind::Illegal(lexer.slice().to_string()),
        };
        tokens.push(Token::new(kind, span));
    }

    tokens.push(Token::new(
        TokenKind::Eof,
        Span::from_range(source.len()..source.len()),
    ));
    tokens
}

/// Convert a raw token and its source slice into a `TokenKind`.
fn convert(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Word => {
            lookup_keyword(slice).unwrap_or_else(|| TokenKind::Ident(slice.to_string()))
        }
        RawToken::Int => TokenKind::Int(slice.to_string()),
        RawToken::Str => {
            // The regex guarantees a leading and trailing quote.
            let inner = slice
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(slice);
            TokenKind::Str(inner.to_string())
        }
    }
}
