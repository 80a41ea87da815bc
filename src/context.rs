//! Runtime configuration shared by the converter and the evaluator.
//!
//! An [`EvalContext`] holds no per-expression state, so one context can be
//! reused for any number of conversions and evaluations.

use serde::{Deserialize, Serialize};

/// What the converter does with a token it cannot classify, such as `$` or `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnrecognizedTokenPolicy {
    /// Fail with [`crate::error::ExprError::UnrecognizedToken`].
    #[default]
    Reject,
    /// Drop the token and keep converting.
    Ignore,
}

/// How the evaluator handles a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DivisionPolicy {
    /// IEEE-754 semantics: `x/0` is an infinity, `0/0` is NaN.
    #[default]
    Ieee,
    /// Fail with [`crate::error::ExprError::DivideByZero`].
    Error,
}

/// Settings for parsing and evaluating expressions.
///
/// ```
/// use rpn_rs::context::{DivisionPolicy, EvalContext, UnrecognizedTokenPolicy};
///
/// let ctx = EvalContext::new()
///     .with_division(DivisionPolicy::Error)
///     .with_unrecognized_tokens(UnrecognizedTokenPolicy::Ignore);
/// assert_eq!(ctx.division, DivisionPolicy::Error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalContext {
    pub unrecognized_tokens: UnrecognizedTokenPolicy,
    pub division: DivisionPolicy,
}

impl EvalContext {
    /// Strict defaults: unknown tokens are rejected, division follows IEEE-754.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient settings that silently drop unknown tokens.
    pub fn lenient() -> Self {
        Self {
            unrecognized_tokens: UnrecognizedTokenPolicy::Ignore,
            division: DivisionPolicy::Ieee,
        }
    }

    pub fn with_unrecognized_tokens(mut self, policy: UnrecognizedTokenPolicy) -> Self {
        self.unrecognized_tokens = policy;
        self
    }

    pub fn with_division(mut self, policy: DivisionPolicy) -> Self {
        self.division = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_is_strict_about_tokens() {
        let ctx = EvalContext::new();
        assert_eq!(ctx.unrecognized_tokens, UnrecognizedTokenPolicy::Reject);
        assert_eq!(ctx.division, DivisionPolicy::Ieee);
        assert_eq!(
            EvalContext::lenient().unrecognized_tokens,
            UnrecognizedTokenPolicy::Ignore
        );
    }

    #[test]
    fn test_context_serde_round_trip() {
        let ctx = EvalContext::new().with_division(DivisionPolicy::Error);
        let json = serde_json::to_string(&ctx).unwrap();
        assert_eq!(json, r#"{"unrecognized_tokens":"Reject","division":"Error"}"#);
        let back: EvalContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx);

        // Missing fields fall back to the defaults
        let partial: EvalContext = serde_json::from_str(r#"{"division":"Error"}"#).unwrap();
        assert_eq!(partial.unrecognized_tokens, UnrecognizedTokenPolicy::Reject);
        assert_eq!(partial.division, DivisionPolicy::Error);
    }
}
