//! The total order over values.
//!
//! `null < false < true < numbers < strings < arrays < objects`. Within a
//! kind, numbers compare by mathematical value regardless of representation,
//! strings by code point, arrays element-wise, and objects by their sorted key
//! sequences and then by the values under those keys.

use std::cmp::Ordering;

use crate::collections::{JqMap, JqVec};
use crate::value::Value;

/// 2^63, the first float above every `i64`.
pub(crate) const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Compares two values under the language's total order.
///
/// Every equality and relational operator is derived from the sign of this
/// result. NaN equals NaN and sorts below every other number.
#[must_use]
pub fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => compare_floats(*x, *y),
        (Value::Int(x), Value::Float(y)) => compare_int_float(*x, *y),
        (Value::Float(x), Value::Int(y)) => compare_int_float(*y, *x).reverse(),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => compare_arrays(x, y),
        (Value::Object(x), Value::Object(y)) => compare_objects(x, y),
        _ => a.kind().cmp(&b.kind()),
    }
}

fn compare_floats(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer against a float, without rounding the
/// integer through f64.
#[allow(clippy::cast_possible_truncation)]
fn compare_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        return Ordering::Greater;
    }
    if f >= I64_BOUND {
        return Ordering::Less;
    }
    if f < -I64_BOUND {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)).unwrap_or(Ordering::Equal),
        ord => ord,
    }
}

fn compare_arrays(x: &JqVec<Value>, y: &JqVec<Value>) -> Ordering {
    for (a, b) in x.iter().zip(y.iter()) {
        match compare(a, b) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    x.len().cmp(&y.len())
}

fn compare_objects(x: &JqMap<Value>, y: &JqMap<Value>) -> Ordering {
    match x.keys().cmp(y.keys()) {
        Ordering::Equal => x
            .values()
            .zip(y.values())
            .map(|(a, b)| compare(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal),
        ord => ord,
    }
}
