//! Raw token definition.
//!
//! The `RawToken` enum is the logos-derived tokenizer output before payloads
//! are attached and keywords are resolved.

use logos::Logos;

/// Raw token from logos (before conversion to `TokenKind`).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    // Operators
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Delimiters
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    /// Identifier or keyword; keywords are resolved after matching.
    #[regex("[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    #[regex("[0-9]+")]
    Int,

    /// Double-quoted string without escape sequences.
    #[regex(r#""[^"]*""#)]
    Str,
}
