//! Operator matching helpers.

use monkey_ir::{InfixOp, PrefixOp, TokenKind};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_equality_op(&self) -> Option<InfixOp> {
        match self.cursor.current_kind() {
            TokenKind::EqEq => Some(InfixOp::Eq),
            TokenKind::NotEq => Some(InfixOp::NotEq),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<InfixOp> {
        match self.cursor.current_kind() {
            TokenKind::Lt => Some(InfixOp::Lt),
            TokenKind::Gt => Some(InfixOp::Gt),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<InfixOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(InfixOp::Add),
            TokenKind::Minus => Some(InfixOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<InfixOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(InfixOp::Mul),
            TokenKind::Slash => Some(InfixOp::Div),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<PrefixOp> {
        match self.cursor.current_kind() {
            TokenKind::Bang => Some(PrefixOp::Not),
            TokenKind::Minus => Some(PrefixOp::Neg),
            _ => None,
        }
    }
}
