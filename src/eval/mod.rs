//! Postfix program evaluation.
//!
//! The evaluator scans a [`Postfix`] program left to right with a single value
//! stack: operands are pushed, operators and functions pop their arguments and
//! push the result. A well formed program leaves exactly one value behind.

pub mod stack_ops;
pub mod value_stack;

use alloc::format;

use crate::Real;
use crate::context::EvalContext;
use crate::error::ExprError;
use crate::types::{Postfix, Token, TokenKind};

pub use stack_ops::{BinaryOp, UnaryOp};
pub use value_stack::ValueStack;

/// Evaluates a postfix program with the default context.
///
/// ```
/// use rpn_rs::eval::eval_postfix;
/// use rpn_rs::types::Postfix;
///
/// let program: Postfix = "2 3 2 ^ ^".parse().unwrap();
/// assert_eq!(eval_postfix(&program).unwrap(), 512.0);
/// ```
pub fn eval_postfix(postfix: &Postfix) -> Result<Real, ExprError> {
    eval_postfix_with_context(postfix, &EvalContext::default())
}

/// Evaluates a postfix program.
///
/// Fails when an operator finds too few values on the stack, when the program
/// does not leave exactly one value, or on a token that has no meaning in
/// postfix notation (parentheses and unrecognized tokens).
pub fn eval_postfix_with_context(postfix: &Postfix, ctx: &EvalContext) -> Result<Real, ExprError> {
    let mut stack = ValueStack::new();
    for token in postfix {
        eval_token(token, &mut stack, ctx)?;
    }
    let result = stack.into_result()?;
    log::debug!("'{}' evaluated to {}", postfix, result);
    Ok(result)
}

fn eval_token(token: &Token, stack: &mut ValueStack, ctx: &EvalContext) -> Result<(), ExprError> {
    log::trace!(
        "evaluating {:?} '{}' (value stack depth {})",
        token.kind,
        token.text,
        stack.len()
    );
    match token.kind {
        TokenKind::Number => stack.push(token.text.parse::<Real>()?),
        TokenKind::Constant(constant) => stack.push(constant.value()),
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Multiply
        | TokenKind::Divide
        | TokenKind::Exponent => {
            let op = binary_op(token)?;
            let [left, right] = stack.pop_operands::<2>(token)?;
            stack.push(op.apply(left, right, ctx)?)
        }
        TokenKind::UnaryMinus | TokenKind::Function(_) => {
            let op = unary_op(token)?;
            let [operand] = stack.pop_operands::<1>(token)?;
            stack.push(op.apply(operand))
        }
        TokenKind::LeftParen | TokenKind::RightParen | TokenKind::None => {
            Err(ExprError::Syntax(format!(
                "unexpected token '{}' at position {} in postfix program",
                token.text, token.position
            )))
        }
    }
}

fn binary_op(token: &Token) -> Result<BinaryOp, ExprError> {
    BinaryOp::from_kind(token.kind)
        .ok_or_else(|| ExprError::Syntax(format!("'{}' is not a binary operator", token.text)))
}

fn unary_op(token: &Token) -> Result<UnaryOp, ExprError> {
    UnaryOp::from_kind(token.kind)
        .ok_or_else(|| ExprError::Syntax(format!("'{}' is not a unary operator", token.text)))
}
