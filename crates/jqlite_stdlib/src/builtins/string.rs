//! String functions: `utf8bytelength`, `explode`, `implode`, `join`.

use jqlite_foundation::json::format_number;
use jqlite_foundation::{Error, JqVec, Result, Value};
use jqlite_language::{FilterEvaluator, ValueStream, map_each_result, single_result, single_value};

/// `utf8bytelength`: the number of bytes in the string's UTF-8 encoding.
///
/// # Errors
///
/// Returns a type error for non-strings.
pub fn utf8bytelength(v: &Value) -> Result<Value> {
    match v {
        Value::String(s) => Ok(Value::from(s.len())),
        _ => Err(Error::function_type("utf8bytelength", v.clone())),
    }
}

/// `explode`: the string's code points as numbers.
///
/// # Errors
///
/// Returns a type error for non-strings.
pub fn explode(v: &Value) -> Result<Value> {
    match v {
        Value::String(s) => Ok(s.chars().map(|c| Value::Int(i64::from(u32::from(c)))).collect()),
        _ => Err(Error::function_type("explode", v.clone())),
    }
}

/// `implode`: builds a string from an array of code points.
///
/// Floats are truncated. Numbers that are not Unicode scalar values become
/// U+FFFD.
///
/// # Errors
///
/// Returns a type error if the input is not an array or holds a non-number.
pub fn implode(v: &Value) -> Result<Value> {
    let Value::Array(items) = v else {
        return Err(Error::function_type("implode", v.clone()));
    };
    items
        .iter()
        .map(|item| code_point(item).ok_or_else(|| Error::function_type("implode", v.clone())))
        .collect::<Result<String>>()
        .map(Value::from)
}

#[allow(clippy::cast_possible_truncation)]
fn code_point(v: &Value) -> Option<char> {
    let n = match v {
        Value::Int(n) => *n,
        Value::Float(f) => *f as i64,
        _ => return None,
    };
    Some(
        u32::try_from(n)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER),
    )
}

/// `join(sep)`: the input array's elements as text, separated by each
/// separator the argument yields.
pub fn join<'a, E: FilterEvaluator>(
    evaluator: &'a E,
    args: &'a [E::Filter],
    input: Value,
) -> ValueStream<'a> {
    let [separator] = args else {
        return single_result(Err(Error::function_not_found("join", args.len())));
    };
    let items = input.clone();
    map_each_result(evaluator.evaluate(separator, single_value(input)), move |sep| {
        match (&items, &sep) {
            (Value::Array(items), Value::String(sep)) => join_with(items, sep).map(Value::from),
            (Value::Array(_), _) => Err(Error::function_type("join", sep.clone())),
            _ => Err(Error::function_type("join", items.clone())),
        }
    })
}

/// Joins array elements with a separator.
///
/// `null` renders as nothing, numbers in JSON number form (so NaN, which
/// normalizes to null, encodes as `null`), booleans and strings as their
/// text.
///
/// # Errors
///
/// Returns a type error for array or object elements.
pub fn join_with(items: &JqVec<Value>, sep: &str) -> Result<String> {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        match item {
            Value::Null => {}
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Int(n) => out.push_str(&n.to_string()),
            Value::Float(f) => match Value::Float(*f).normalized() {
                Value::Float(f) => out.push_str(&format_number(f)),
                _ => out.push_str("null"),
            },
            Value::String(s) => out.push_str(s),
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::function_type("join", item.clone()));
            }
        }
    }
    Ok(out)
}
