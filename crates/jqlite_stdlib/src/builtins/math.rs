//! Math functions backed by `libm`.
//!
//! Every function takes a number, promotes integers to `f64`, and yields a
//! float. `gamma` is registered separately since its meaning depends on
//! [`LibraryConfig::legacy_gamma`](crate::LibraryConfig::legacy_gamma).

use jqlite_foundation::{Error, Result, Value};

/// Unary `f64 -> f64` functions, by name.
pub const UNARY: &[(&str, fn(f64) -> f64)] = &[
    ("sin", libm::sin),
    ("cos", libm::cos),
    ("tan", libm::tan),
    ("asin", libm::asin),
    ("acos", libm::acos),
    ("atan", libm::atan),
    ("sinh", libm::sinh),
    ("cosh", libm::cosh),
    ("tanh", libm::tanh),
    ("asinh", libm::asinh),
    ("acosh", libm::acosh),
    ("atanh", libm::atanh),
    ("floor", libm::floor),
    ("round", libm::round),
    ("ceil", libm::ceil),
    ("trunc", libm::trunc),
    ("fabs", libm::fabs),
    ("sqrt", libm::sqrt),
    ("cbrt", libm::cbrt),
    ("exp", libm::exp),
    ("exp10", libm::exp10),
    ("exp2", libm::exp2),
    ("expm1", libm::expm1),
    ("log", libm::log),
    ("log10", libm::log10),
    ("log1p", libm::log1p),
    ("log2", libm::log2),
    ("logb", logb),
    ("lgamma", libm::lgamma),
    ("tgamma", libm::tgamma),
    ("significand", significand),
    ("rint", libm::rint),
    ("nearbyint", libm::rint),
    ("erf", libm::erf),
    ("erfc", libm::erfc),
    ("j0", libm::j0),
    ("j1", libm::j1),
    ("y0", libm::y0),
    ("y1", libm::y1),
];

/// Applies a unary function to a numeric input.
///
/// # Errors
///
/// Returns a type error, tagged with `name`, for non-numeric input.
pub fn apply(name: &str, f: fn(f64) -> f64, v: &Value) -> Result<Value> {
    v.as_f64()
        .map(|x| Value::Float(f(x)))
        .ok_or_else(|| Error::function_type(name, v.clone()))
}

/// `lgamma_r`: `[lgamma(x), sign of gamma(x)]`.
///
/// # Errors
///
/// Returns a type error for non-numeric input.
pub fn lgamma_r(v: &Value) -> Result<Value> {
    let x = v
        .as_f64()
        .ok_or_else(|| Error::function_type("lgamma_r", v.clone()))?;
    let (value, sign) = libm::lgamma_r(x);
    Ok(Value::array([Value::Float(value), Value::Float(f64::from(sign))]))
}

/// The unbiased binary exponent of `x`.
fn logb(x: f64) -> f64 {
    if x == 0.0 {
        f64::NEG_INFINITY
    } else if x.is_infinite() {
        f64::INFINITY
    } else if x.is_nan() {
        x
    } else {
        f64::from(libm::ilogb(x))
    }
}

/// `x` scaled into `[1, 2)`, keeping its sign.
fn significand(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let (mantissa, _) = libm::frexp(x);
    mantissa * 2.0
}
