#![cfg_attr(all(not(test), target_arch = "arm"), no_std)]
#![doc = r#"
# rpn-rs

A small, no_std-friendly converter from infix math expressions to postfix
(Reverse Polish) notation, plus a stack evaluator for the postfix program.

## Overview

rpn-rs implements the classic shunting-yard algorithm over a deliberately small
grammar:

- Numbers written as `digits(.digits)?`
- Binary operators `+ - * / ^` and unary minus
- Parentheses
- The constants `pi` and `e`
- The functions `sin`, `cos` and `tan` (radians)

Keywords are case-insensitive and whitespace is ignored. Conversion and
evaluation are separate steps: [`engine::parse`] returns a [`types::Postfix`]
program, and [`eval::eval_postfix`] reduces that program to a single value.

## Quick Start

```rust
use rpn_rs::engine::{interp, parse};
use rpn_rs::eval::eval_postfix;

// Convert to postfix and look at the rendering
let postfix = parse("3+4*2/(1-5)^2^3").unwrap();
assert_eq!(postfix.to_string(), "3 4 2 * 1 5 - 2 3 ^ ^ / +");

// Evaluate the program
let result = eval_postfix(&postfix).unwrap();
assert!((result - 3.0001220703125).abs() < 1e-6);

// Or do both at once
assert_eq!(interp("2^3^2", None).unwrap(), 512.0);
```

## Unary Minus

A `-` is a binary minus only when the token immediately to its left is a number,
`pi` or `e`. Everywhere else it is unary minus, rendered as `~` in postfix output.

```rust
use rpn_rs::engine::to_postfix;

assert_eq!(to_postfix("-2^2").unwrap(), "2 2 ^ ~");
assert_eq!(to_postfix("3*-2").unwrap(), "3 2 ~ *");
```

A minus after a closing parenthesis or a function call is also treated as unary,
so `(1)-2` does not evaluate. Write `(1)+-2` or `1-2` instead.

## Limits

The operator stack and the value stack each hold at most
[`types::EXP_RPN_MAX_STACK_DEPTH`] (256) entries. Input that nests deeper, such
as a run of 300 leading `-` or a chain of 300 `2^`, fails with
[`error::ExprError::CapacityExceeded`] instead of converting.

```rust
use rpn_rs::engine::parse;
use rpn_rs::error::ExprError;

let deep = format!("{}1", "-".repeat(300));
assert_eq!(parse(&deep), Err(ExprError::CapacityExceeded("operator stack")));
```

## Configuration

Runtime behavior is controlled by [`context::EvalContext`]:

```rust
use rpn_rs::context::{DivisionPolicy, EvalContext, UnrecognizedTokenPolicy};
use rpn_rs::engine::interp;
use rpn_rs::error::ExprError;

// Division by zero follows IEEE-754 by default
assert!(interp("3/0", None).unwrap().is_infinite());

let strict = EvalContext::new().with_division(DivisionPolicy::Error);
assert_eq!(interp("3/0", Some(&strict)), Err(ExprError::DivideByZero));

// Unknown tokens are rejected by default, or can be dropped silently
assert!(interp("2 + $3", None).is_err());
let lenient = EvalContext::new().with_unrecognized_tokens(UnrecognizedTokenPolicy::Ignore);
assert_eq!(interp("2 + $3", Some(&lenient)).unwrap(), 5.0);
```

## Feature Flags

- `libm` (default): use `libm` for `sin`, `cos`, `tan` and `pow`. Required on no_std targets.
- `f32`: use 32-bit floating point instead of the default 64-bit.
"#]

extern crate alloc;

pub mod context;
pub mod engine;
pub mod error;
pub mod eval;
pub mod ffi;
pub mod functions;
pub mod lexer;
pub mod types;

pub use context::*;
pub use engine::*;
pub use error::{EvaluationError, ExprError, Result};
pub use eval::*;
pub use types::*;

pub use ffi::*;

/// Define the floating-point type based on feature flags
#[cfg(feature = "f32")]
pub type Real = f32;

#[cfg(not(feature = "f32"))]
pub type Real = f64;

pub mod constants {
    use super::Real;

    #[cfg(feature = "f32")]
    pub const PI: Real = core::f32::consts::PI;
    #[cfg(feature = "f32")]
    pub const E: Real = core::f32::consts::E;
    #[cfg(feature = "f32")]
    pub const TEST_PRECISION: Real = 1e-6;

    #[cfg(not(feature = "f32"))]
    pub const PI: Real = core::f64::consts::PI;
    #[cfg(not(feature = "f32"))]
    pub const E: Real = core::f64::consts::E;
    #[cfg(not(feature = "f32"))]
    pub const TEST_PRECISION: Real = 1e-10;
}

/// Utility macro to check if two floating point values are approximately equal
/// within a specified epsilon. Supports optional format arguments like assert_eq!.
#[macro_export]
macro_rules! assert_approx_eq {
    // Case 1: assert_approx_eq!(left, right) -> use default epsilon
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::constants::TEST_PRECISION)
    };
    // Case 2: assert_approx_eq!(left, right, epsilon) -> use specified epsilon
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let left_val = $left;
        let right_val = $right;
        let eps = $epsilon;

        let message = format!(
            "assertion failed: `(left ≈ right)` \
             (left: `{}`, right: `{}`, epsilon: `{}`)",
            left_val, right_val, eps
        );

        if left_val.is_nan() && right_val.is_nan() {
            // NaN == NaN for our purposes
        } else if left_val.is_infinite()
            && right_val.is_infinite()
            && left_val.signum() == right_val.signum()
        {
            // Same-signed infinities are equal
        } else {
            assert!((left_val - right_val).abs() < eps, "{}", message);
        }
    }};
    // Case 3: assert_approx_eq!(left, right, epsilon, "format message") -> use specified epsilon and message
    ($left:expr, $right:expr, $epsilon:expr, $msg:literal $(,)?) => {{
        let left_val = $left;
        let right_val = $right;
        let eps = $epsilon;

        if left_val.is_nan() && right_val.is_nan() {
            // NaN == NaN for our purposes
        } else if left_val.is_infinite()
            && right_val.is_infinite()
            && left_val.signum() == right_val.signum()
        {
            // Same-signed infinities are equal
        } else {
            assert!((left_val - right_val).abs() < eps, $msg);
        }
    }};
    // Case 4: assert_approx_eq!(left, right, epsilon, "format message with args", args...)
    ($left:expr, $right:expr, $epsilon:expr, $fmt:expr, $($arg:tt)+) => {{
        let left_val = $left;
        let right_val = $right;
        let eps = $epsilon;

        if left_val.is_nan() && right_val.is_nan() {
            // NaN == NaN for our purposes
        } else if left_val.is_infinite()
            && right_val.is_infinite()
            && left_val.signum() == right_val.signum()
        {
            // Same-signed infinities are equal
        } else {
            assert!((left_val - right_val).abs() < eps, $fmt, $($arg)+);
        }
    }};
}
