//! Monkey IR - tokens, spans and syntax trees.
//!
//! This crate contains the data structures shared by the lexer, the parser
//! and the evaluator:
//! - `Span` for source locations
//! - `Token` / `TokenKind` for lexer output
//! - AST nodes (`Program`, `Statement`, `Expression`, ...)
//! - `Folder` for rebuilding a tree bottom-up (quote/unquote, macro expansion)
//!
//! # Design
//!
//! AST nodes are plain owned trees. Once parsing completes they are treated as
//! immutable data: function and macro bodies sit behind `Rc` so that closures
//! and quoted values can hold on to a subtree for as long as they live.

pub mod ast;
pub mod fold;
mod span;
mod token;

pub use ast::{
    BlockStatement, Expression, Identifier, InfixOp, PrefixOp, Program, Statement,
};
pub use fold::Folder;
pub use span::{Span, SpanError};
pub use token::{lookup_keyword, Token, TokenKind};
