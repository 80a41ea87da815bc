//! Operations applied by the postfix evaluator.
//!
//! Each operator or function token maps to a [`UnaryOp`] or a [`BinaryOp`],
//! which knows how to combine the values popped from the value stack.

use crate::Real;
use crate::context::{DivisionPolicy, EvalContext};
use crate::error::ExprError;
use crate::types::{Function, TokenKind};

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    Negate,
    Function(Function),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl UnaryOp {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::UnaryMinus => Some(UnaryOp::Negate),
            TokenKind::Function(function) => Some(UnaryOp::Function(function)),
            _ => None,
        }
    }

    /// Apply a unary operation to a value
    pub fn apply(self, operand: Real) -> Real {
        match self {
            UnaryOp::Negate => -operand,
            UnaryOp::Function(function) => function.apply(operand),
        }
    }
}

impl BinaryOp {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Subtract),
            TokenKind::Multiply => Some(BinaryOp::Multiply),
            TokenKind::Divide => Some(BinaryOp::Divide),
            TokenKind::Exponent => Some(BinaryOp::Power),
            _ => None,
        }
    }

    /// Apply a binary operation to two values, `left op right`.
    pub fn apply(self, left: Real, right: Real, ctx: &EvalContext) -> Result<Real, ExprError> {
        let value = match self {
            BinaryOp::Add => left + right,
            BinaryOp::Subtract => left - right,
            BinaryOp::Multiply => left * right,
            BinaryOp::Divide => {
                if right == 0.0 && ctx.division == DivisionPolicy::Error {
                    return Err(ExprError::DivideByZero);
                }
                left / right
            }
            BinaryOp::Power => crate::functions::pow(left, right),
        };
        Ok(value)
    }
}
