//! Operand-pair classification shared by the arithmetic operators.
//!
//! Every binary operator first asks [`classify`] which bucket its operands
//! fall into, then handles the buckets it supports and reports a type error
//! for the rest. Mixed integer and float operands are promoted here so the
//! operators only ever see two integers or two floats.

use jqlite_foundation::{JqMap, JqVec, Value};

/// The kind of an operand pair, with the operands unwrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pair<'a> {
    /// Both operands are integral numbers.
    Ints(i64, i64),
    /// Both operands are numbers and at least one is a float.
    Floats(f64, f64),
    /// Both operands are strings.
    Strings(&'a str, &'a str),
    /// Both operands are arrays.
    Arrays(&'a JqVec<Value>, &'a JqVec<Value>),
    /// Both operands are objects.
    Objects(&'a JqMap<Value>, &'a JqMap<Value>),
    /// Any other combination, including null, booleans, and differing kinds.
    Mixed,
}

/// Classifies an operand pair.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn classify<'a>(lhs: &'a Value, rhs: &'a Value) -> Pair<'a> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Pair::Ints(*a, *b),
        (Value::Int(a), Value::Float(b)) => Pair::Floats(*a as f64, *b),
        (Value::Float(a), Value::Int(b)) => Pair::Floats(*a, *b as f64),
        (Value::Float(a), Value::Float(b)) => Pair::Floats(*a, *b),
        (Value::String(a), Value::String(b)) => Pair::Strings(a, b),
        (Value::Array(a), Value::Array(b)) => Pair::Arrays(a, b),
        (Value::Object(a), Value::Object(b)) => Pair::Objects(a, b),
        _ => Pair::Mixed,
    }
}
