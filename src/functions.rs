//! Math primitives used by the postfix evaluator.
//!
//! With the default `libm` feature every function is backed by the `libm` crate,
//! which keeps the evaluator usable on no_std targets. Depending on the selected
//! floating-point precision (f32 or f64, controlled by the "f32" feature),
//! different versions of the math functions are used. Without `libm` the
//! standard library methods are used, which needs `std`.

#[cfg(all(feature = "libm", feature = "f32"))]
use libm::{cosf as libm_cos, powf as libm_pow, sinf as libm_sin, tanf as libm_tan};

#[cfg(all(feature = "libm", not(feature = "f32")))]
use libm::{cos as libm_cos, pow as libm_pow, sin as libm_sin, tan as libm_tan};

#[cfg(all(not(feature = "libm"), target_arch = "arm", not(test)))]
compile_error!("rpn-rs needs the 'libm' feature on no_std targets");

use crate::Real;

/// Sine of `x` in radians.
#[cfg(feature = "libm")]
pub fn sin(x: Real) -> Real {
    libm_sin(x)
}

/// Sine of `x` in radians.
#[cfg(not(feature = "libm"))]
pub fn sin(x: Real) -> Real {
    x.sin()
}

/// Cosine of `x` in radians.
#[cfg(feature = "libm")]
pub fn cos(x: Real) -> Real {
    libm_cos(x)
}

/// Cosine of `x` in radians.
#[cfg(not(feature = "libm"))]
pub fn cos(x: Real) -> Real {
    x.cos()
}

/// Tangent of `x` in radians.
///
/// Near odd multiples of π/2 the result is very large rather than infinite,
/// since π/2 is not exactly representable.
#[cfg(feature = "libm")]
pub fn tan(x: Real) -> Real {
    libm_tan(x)
}

/// Tangent of `x` in radians.
#[cfg(not(feature = "libm"))]
pub fn tan(x: Real) -> Real {
    x.tan()
}

/// Raises `base` to the power `exp`.
///
/// Negative bases with integral exponents are fine (`pow(-4, 8) == 65536`);
/// negative bases with fractional exponents give NaN.
#[cfg(feature = "libm")]
pub fn pow(base: Real, exp: Real) -> Real {
    libm_pow(base, exp)
}

/// Raises `base` to the power `exp`.
#[cfg(not(feature = "libm"))]
pub fn pow(base: Real, exp: Real) -> Real {
    base.powf(exp)
}
