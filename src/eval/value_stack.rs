//! Bounded value stack used while evaluating a postfix program.

use heapless::Vec as StackVec;

use crate::Real;
use crate::error::{EvaluationError, ExprError};
use crate::types::{EXP_RPN_MAX_STACK_DEPTH, Token};

#[derive(Debug, Default)]
pub struct ValueStack {
    values: StackVec<Real, EXP_RPN_MAX_STACK_DEPTH>,
}

impl ValueStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push(&mut self, value: Real) -> Result<(), ExprError> {
        self.values
            .push(value)
            .map_err(|_| ExprError::CapacityExceeded("value stack"))
    }

    /// Pops the `N` operands of `token`, returned in push order.
    ///
    /// For a binary operator this is `[left, right]`: the right operand is the
    /// most recently pushed value.
    pub fn pop_operands<const N: usize>(&mut self, token: &Token) -> Result<[Real; N], ExprError> {
        let found = self.values.len();
        if found < N {
            return Err(EvaluationError::InsufficientOperands {
                operator: token.text.clone(),
                position: token.position,
                needed: N,
                found,
            }
            .into());
        }
        let mut operands = [0.0; N];
        for slot in operands.iter_mut().rev() {
            if let Some(value) = self.values.pop() {
                *slot = value;
            }
        }
        Ok(operands)
    }

    /// The single value left after the last token.
    pub fn into_result(mut self) -> Result<Real, ExprError> {
        match self.values.len() {
            0 => Err(EvaluationError::NoResult.into()),
            1 => self
                .values
                .pop()
                .ok_or_else(|| EvaluationError::NoResult.into()),
            remaining => Err(EvaluationError::TooManyOperands { remaining }.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenKind;

    #[test]
    fn test_pop_operands_order() {
        let mut stack = ValueStack::new();
        stack.push(1.0).unwrap();
        stack.push(2.0).unwrap();
        stack.push(3.0).unwrap();
        let minus = Token::new(TokenKind::Minus, "-", 0);
        assert_eq!(stack.pop_operands::<2>(&minus).unwrap(), [2.0, 3.0]);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_pop_operands_underflow_leaves_stack_alone() {
        let mut stack = ValueStack::new();
        stack.push(1.0).unwrap();
        let plus = Token::new(TokenKind::Plus, "+", 7);
        assert_eq!(
            stack.pop_operands::<2>(&plus),
            Err(ExprError::Evaluation(EvaluationError::InsufficientOperands {
                operator: "+".to_string(),
                position: 7,
                needed: 2,
                found: 1,
            }))
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(
            ValueStack::new().into_result(),
            Err(ExprError::Evaluation(EvaluationError::NoResult))
        );

        let mut stack = ValueStack::new();
        stack.push(4.0).unwrap();
        assert_eq!(stack.into_result(), Ok(4.0));

        let mut stack = ValueStack::new();
        stack.push(4.0).unwrap();
        stack.push(5.0).unwrap();
        assert_eq!(
            stack.into_result(),
            Err(ExprError::Evaluation(EvaluationError::TooManyOperands { remaining: 2 }))
        );
    }

    #[test]
    fn test_capacity() {
        let mut stack = ValueStack::new();
        for i in 0..EXP_RPN_MAX_STACK_DEPTH {
            stack.push(i as Real).unwrap();
        }
        assert_eq!(stack.push(0.0), Err(ExprError::CapacityExceeded("value stack")));
    }
}
