//! Collection functions: `length`, `keys`, `has`.

use jqlite_foundation::{Error, Result, Value};
use jqlite_language::{FilterEvaluator, ValueStream, map_each_result, single_result, single_value};

/// `length`: element or key count for containers, code points for strings,
/// absolute value for numbers, and zero for null.
///
/// # Errors
///
/// Returns a type error for booleans.
#[allow(clippy::cast_precision_loss)]
pub fn length(v: &Value) -> Result<Value> {
    match v {
        Value::Null => Ok(Value::Int(0)),
        Value::Int(n) => Ok(n
            .checked_abs()
            .map_or_else(|| Value::Float((*n as f64).abs()), Value::Int)),
        Value::Float(f) => Ok(Value::Float(f.abs())),
        Value::String(s) => Ok(Value::from(s.chars().count())),
        Value::Array(items) => Ok(Value::from(items.len())),
        Value::Object(map) => Ok(Value::from(map.len())),
        Value::Bool(_) => Err(Error::function_type("length", v.clone())),
    }
}

/// `keys`: indices of an array, or the sorted keys of an object.
///
/// # Errors
///
/// Returns a type error for anything but an array or object.
pub fn keys(v: &Value) -> Result<Value> {
    match v {
        Value::Array(items) => Ok((0..items.len()).map(Value::from).collect()),
        Value::Object(map) => Ok(map.keys().map(|k| Value::String(k.clone())).collect()),
        _ => Err(Error::function_type("keys", v.clone())),
    }
}

/// `has(key)`: whether the input contains each key the argument yields.
pub fn has<'a, E: FilterEvaluator>(
    evaluator: &'a E,
    args: &'a [E::Filter],
    input: Value,
) -> ValueStream<'a> {
    let [key] = args else {
        return single_result(Err(Error::function_not_found("has", args.len())));
    };
    let container = input.clone();
    map_each_result(evaluator.evaluate(key, single_value(input)), move |key| {
        has_key(&container, key)
    })
}

/// Checks one key against a container.
///
/// Arrays take numeric indices (floats are truncated); objects take string
/// keys.
///
/// # Errors
///
/// Returns a key type error when the key does not suit the container.
#[allow(clippy::cast_possible_truncation)]
pub fn has_key(container: &Value, key: Value) -> Result<Value> {
    let found = match (container, &key) {
        (Value::Array(items), Value::Int(i)) => index_in(*i, items.len()),
        (Value::Array(items), Value::Float(f)) => index_in(*f as i64, items.len()),
        (Value::Object(map), Value::String(k)) => map.contains_key(k),
        _ => return Err(Error::has_key_type(container.clone(), key)),
    };
    Ok(Value::Bool(found))
}

fn index_in(index: i64, len: usize) -> bool {
    usize::try_from(index).is_ok_and(|i| i < len)
}
