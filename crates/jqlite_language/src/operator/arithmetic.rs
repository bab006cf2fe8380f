//! Arithmetic operators over values.
//!
//! Integer results stay integral while they fit in an `i64`; on overflow the
//! operation is redone in floating point. Division keeps integer operands
//! integral only when the quotient is exact.

use jqlite_foundation::{Error, JqMap, Result, Value};

use super::dispatch::{Pair, classify};

/// The longest string, in bytes, that string repetition will build.
pub const MAX_REPEAT_BYTES: usize = (1 << 31) - 1;

/// `lhs + rhs`.
///
/// Null on either side yields the other operand unchanged. Numbers add,
/// strings and arrays concatenate, and objects merge with the right-hand
/// entries winning.
///
/// # Errors
///
/// Returns a type error for any other operand pair.
#[allow(clippy::cast_precision_loss)]
pub fn add(lhs: Value, rhs: Value) -> Result<Value> {
    if lhs.is_null() {
        return Ok(rhs);
    }
    if rhs.is_null() {
        return Ok(lhs);
    }
    match classify(&lhs, &rhs) {
        Pair::Ints(a, b) => Ok(a
            .checked_add(b)
            .map_or_else(|| Value::Float(a as f64 + b as f64), Value::Int)),
        Pair::Floats(a, b) => Ok(Value::Float(a + b)),
        Pair::Strings(a, b) => {
            let mut s = String::with_capacity(a.len() + b.len());
            s.push_str(a);
            s.push_str(b);
            Ok(Value::from(s))
        }
        Pair::Arrays(a, b) => Ok(Value::Array(a.concat(b))),
        Pair::Objects(a, b) => Ok(Value::Object(a.union(b))),
        Pair::Mixed => Err(Error::binary_type("add", lhs, rhs)),
    }
}

/// `lhs - rhs`.
///
/// Numbers subtract. Arrays keep the left-hand elements that are not equal
/// to any right-hand element, in their original order.
///
/// # Errors
///
/// Returns a type error for any other operand pair.
#[allow(clippy::cast_precision_loss)]
pub fn subtract(lhs: Value, rhs: Value) -> Result<Value> {
    match classify(&lhs, &rhs) {
        Pair::Ints(a, b) => Ok(a
            .checked_sub(b)
            .map_or_else(|| Value::Float(a as f64 - b as f64), Value::Int)),
        Pair::Floats(a, b) => Ok(Value::Float(a - b)),
        Pair::Arrays(a, b) => Ok(Value::Array(a.retain(|x| !b.iter().any(|y| x == y)))),
        _ => Err(Error::binary_type("subtract", lhs, rhs)),
    }
}

/// `lhs * rhs`.
///
/// Numbers multiply, objects merge recursively (see [`deep_merge`]), and a
/// string paired with a number in either order is repeated.
///
/// # Errors
///
/// Returns a type error for any other operand pair, or an error if a
/// repeated string would exceed [`MAX_REPEAT_BYTES`] or cannot be allocated.
#[allow(clippy::cast_precision_loss)]
pub fn multiply(lhs: Value, rhs: Value) -> Result<Value> {
    match classify(&lhs, &rhs) {
        Pair::Ints(a, b) => Ok(a
            .checked_mul(b)
            .map_or_else(|| Value::Float(a as f64 * b as f64), Value::Int)),
        Pair::Floats(a, b) => Ok(Value::Float(a * b)),
        Pair::Objects(a, b) => Ok(Value::Object(deep_merge(a, b))),
        Pair::Mixed => match (&lhs, &rhs) {
            (Value::String(s), n) | (n, Value::String(s)) if n.is_number() => {
                repeat_string(s, n.as_f64().unwrap_or_default())
            }
            _ => Err(Error::binary_type("multiply", lhs, rhs)),
        },
        _ => Err(Error::binary_type("multiply", lhs, rhs)),
    }
}

/// `lhs / rhs`.
///
/// Numbers divide; integer operands give an integer only when the division
/// is exact. Strings split on the right-hand separator.
///
/// # Errors
///
/// Returns a division error for a zero divisor and a type error for any
/// other operand pair.
#[allow(clippy::cast_precision_loss)]
pub fn divide(lhs: Value, rhs: Value) -> Result<Value> {
    match classify(&lhs, &rhs) {
        Pair::Ints(_, 0) => Err(Error::division_by_zero(lhs, rhs)),
        Pair::Ints(a, b) => Ok(match a.checked_rem(b) {
            Some(0) => a
                .checked_div(b)
                .map_or_else(|| Value::Float(a as f64 / b as f64), Value::Int),
            _ => Value::Float(a as f64 / b as f64),
        }),
        Pair::Floats(_, b) if b == 0.0 => Err(Error::division_by_zero(lhs, rhs)),
        Pair::Floats(a, b) => Ok(Value::Float(a / b)),
        Pair::Strings(a, b) => Ok(split(a, b)),
        _ => Err(Error::binary_type("divide", lhs, rhs)),
    }
}

/// `lhs % rhs`.
///
/// Float operands are truncated toward zero to integers first, while integer
/// operands are used as they are; the result takes the sign of the dividend
/// and is always integral.
///
/// # Errors
///
/// Returns a modulo error when the truncated divisor is zero and a type
/// error for non-numeric operands.
pub fn modulo(lhs: Value, rhs: Value) -> Result<Value> {
    let (Some(a), Some(b)) = (truncate(&lhs), truncate(&rhs)) else {
        return Err(Error::binary_type("modulo", lhs, rhs));
    };
    if b == 0 {
        return Err(Error::modulo_by_zero(lhs, rhs));
    }
    Ok(Value::Int(a.wrapping_rem(b)))
}

/// Merges two objects, recursing where both sides hold an object under the
/// same key. Otherwise the right-hand value wins.
#[must_use]
pub fn deep_merge(lhs: &JqMap<Value>, rhs: &JqMap<Value>) -> JqMap<Value> {
    lhs.union_with(rhs, |l, r| {
        if let (Value::Object(a), Value::Object(b)) = (&l, &r) {
            return Value::Object(deep_merge(a, b));
        }
        r
    })
}

/// A number as an integer, truncated toward zero. Integers are kept exact.
#[allow(clippy::cast_possible_truncation)]
fn truncate(v: &Value) -> Option<i64> {
    match v {
        Value::Int(n) => Some(*n),
        Value::Float(f) => Some(*f as i64),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn repeat_string(s: &str, count: f64) -> Result<Value> {
    if count.is_nan() || count < 0.0 {
        return Ok(Value::Null);
    }
    if count < 1.0 || s.is_empty() {
        return Ok(Value::from(s));
    }
    let times = count as usize;
    let too_long = || Error::repeat_too_long(s.len(), count);
    let len = s
        .len()
        .checked_mul(times)
        .filter(|len| *len <= MAX_REPEAT_BYTES)
        .ok_or_else(too_long)?;
    let mut out = String::new();
    out.try_reserve_exact(len).map_err(|_| too_long())?;
    for _ in 0..times {
        out.push_str(s);
    }
    Ok(Value::from(out))
}

fn split(s: &str, sep: &str) -> Value {
    if s.is_empty() {
        return Value::array(Vec::<Value>::new());
    }
    if sep.is_empty() {
        return s.chars().map(|c| Value::from(c.to_string())).collect();
    }
    s.split(sep).map(Value::from).collect()
}
