//! Parse error types.

use monkey_ir::Span;
use thiserror::Error;

/// What went wrong while parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: String, found: String },
    #[error("no prefix parse function for {found} found")]
    NoPrefixParse { found: String },
    #[error("could not parse {text} as integer")]
    InvalidInteger { text: String },
    #[error("illegal character: {text}")]
    IllegalToken { text: String },
}

/// A parse error and the location it was reported at.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Human-readable message without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Render as `line:col: message` against the source the tokens came from.
    pub fn render(&self, source: &str) -> String {
        let (line, col) = self.span.line_col(source);
        format!("{line}:{col}: {}", self.kind)
    }
}
