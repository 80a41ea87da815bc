//! Error types and handling for the rpn-rs crate.
//!
//! Every failure in the lexer, the shunting-yard converter, or the postfix evaluator
//! is reported as an [`ExprError`]. Errors abort the whole parse/evaluate call; there
//! are no partial results.

use alloc::string::String;
use core::fmt;
use core::num::ParseFloatError;

/// Result type used throughout the crate.
///
/// This is a convenience type alias that uses the `ExprError` type for the error variant.
pub type Result<T> = core::result::Result<T, ExprError>;

/// Error type for expression conversion and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// A closing parenthesis without a matching opening one, or an opening
    /// parenthesis that is still open at the end of the input.
    ///
    /// `position` is the byte offset of the offending parenthesis in the
    /// lowercased input and `found` is its text.
    UnbalancedParenthesis { position: usize, found: String },

    /// The postfix program could not be reduced to exactly one value.
    Evaluation(EvaluationError),

    /// A token that is neither a number, an operator, a parenthesis, a constant
    /// nor a function.
    ///
    /// Only raised when [`crate::context::UnrecognizedTokenPolicy::Reject`] is in effect.
    UnrecognizedToken { position: usize, text: String },

    /// Error when parsing a floating point number.
    ///
    /// The lexer only produces well formed literals, so this shows up for
    /// hand-built postfix programs.
    Parse(ParseFloatError),

    /// Error when division by zero is attempted.
    ///
    /// Only raised when [`crate::context::DivisionPolicy::Error`] is in effect;
    /// otherwise division follows IEEE-754 and yields an infinity or NaN.
    DivideByZero,

    /// A token that cannot appear in a postfix program, such as a parenthesis.
    Syntax(String),

    /// Error when capacity is exceeded for a heapless container.
    ///
    /// The string indicates which stack overflowed.
    CapacityExceeded(&'static str),
}

/// Detail for [`ExprError::Evaluation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// An operator or function found fewer values on the stack than it consumes.
    InsufficientOperands {
        /// Text of the operator or function token
        operator: String,
        /// Byte offset of the token in the lowercased input
        position: usize,
        /// Number of values the token consumes
        needed: usize,
        /// Number of values that were on the stack
        found: usize,
    },

    /// The program left nothing on the stack, e.g. an empty expression.
    NoResult,

    /// More than one value was left on the stack after the last token.
    TooManyOperands { remaining: usize },
}

impl ExprError {
    /// Stable numeric code for the error kind, used as the status of the C API.
    pub fn error_code(&self) -> i32 {
        match self {
            ExprError::UnbalancedParenthesis { .. } => 1,
            ExprError::Evaluation(_) => 2,
            ExprError::UnrecognizedToken { .. } => 3,
            ExprError::Parse(_) => 4,
            ExprError::DivideByZero => 5,
            ExprError::Syntax(_) => 6,
            ExprError::CapacityExceeded(_) => 7,
        }
    }

    /// Byte offset of the offending token, when the error refers to one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ExprError::UnbalancedParenthesis { position, .. }
            | ExprError::UnrecognizedToken { position, .. } => Some(*position),
            ExprError::Evaluation(EvaluationError::InsufficientOperands { position, .. }) => {
                Some(*position)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::UnbalancedParenthesis { position, found } => {
                write!(
                    f,
                    "Unbalanced parenthesis at position {}: found '{}'",
                    position, found
                )
            }
            ExprError::Evaluation(err) => write!(f, "Evaluation error: {}", err),
            ExprError::UnrecognizedToken { position, text } => {
                write!(f, "Unrecognized token at position {}: '{}'", position, text)
            }
            ExprError::Parse(err) => write!(f, "Parse error: {}", err),
            ExprError::DivideByZero => write!(f, "Division by zero"),
            ExprError::Syntax(err) => write!(f, "Syntax error: {}", err),
            ExprError::CapacityExceeded(container_type) => {
                write!(f, "Capacity exceeded for {}", container_type)
            }
        }
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::InsufficientOperands {
                operator,
                position,
                needed,
                found,
            } => write!(
                f,
                "insufficient operands for '{}' at position {}: expected {}, found {}",
                operator, position, needed, found
            ),
            EvaluationError::NoResult => write!(f, "too few operands: no value left on the stack"),
            EvaluationError::TooManyOperands { remaining } => write!(
                f,
                "too many operands: {} values left on the stack",
                remaining
            ),
        }
    }
}

impl From<EvaluationError> for ExprError {
    fn from(err: EvaluationError) -> ExprError {
        ExprError::Evaluation(err)
    }
}

impl From<ParseFloatError> for ExprError {
    fn from(err: ParseFloatError) -> ExprError {
        ExprError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            ExprError::UnbalancedParenthesis {
                position: 0,
                found: "(".to_string(),
            },
            ExprError::Evaluation(EvaluationError::NoResult),
            ExprError::UnrecognizedToken {
                position: 0,
                text: "$".to_string(),
            },
            ExprError::Parse("x".parse::<f64>().unwrap_err()),
            ExprError::DivideByZero,
            ExprError::Syntax("bad".to_string()),
            ExprError::CapacityExceeded("value stack"),
        ];
        let mut codes: Vec<i32> = errors.iter().map(|e| e.error_code()).collect();
        assert!(codes.iter().all(|&c| c > 0));
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_error_display_and_position() {
        let err = ExprError::UnbalancedParenthesis {
            position: 3,
            found: ")".to_string(),
        };
        assert_eq!(err.to_string(), "Unbalanced parenthesis at position 3: found ')'");
        assert_eq!(err.position(), Some(3));

        let err: ExprError = EvaluationError::InsufficientOperands {
            operator: "+".to_string(),
            position: 2,
            needed: 2,
            found: 1,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Evaluation error: insufficient operands for '+' at position 2: expected 2, found 1"
        );
        assert_eq!(err.position(), Some(2));

        let err = ExprError::Evaluation(EvaluationError::TooManyOperands { remaining: 2 });
        assert_eq!(err.position(), None);
        assert!(err.to_string().contains("too many operands"));
    }
}
