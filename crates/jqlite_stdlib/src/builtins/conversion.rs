//! Conversion functions: `tonumber`, `tojson`, `fromjson`.

use jqlite_foundation::json::{from_json, parse_number, to_json};
use jqlite_foundation::{Error, Result, Value};
use tracing::debug;

/// `tonumber`: numbers pass through, strings are parsed as JSON numbers.
///
/// # Errors
///
/// Returns a decode error for unparsable text and a type error for other
/// inputs.
pub fn tonumber(v: &Value) -> Result<Value> {
    match v {
        Value::Int(_) | Value::Float(_) => Ok(v.clone()),
        Value::String(s) => parse_number(s),
        _ => Err(Error::function_type("tonumber", v.clone())),
    }
}

/// `tojson`: the input as compact JSON text.
///
/// NaN and infinite numbers cannot be encoded; when the strict encoding
/// fails the input is normalized and encoded once more.
///
/// # Errors
///
/// Returns the encode error if the normalized value also fails.
pub fn tojson(v: &Value) -> Result<Value> {
    let text = match to_json(v) {
        Ok(text) => text,
        Err(err) => {
            debug!(error = %err, "tojson retrying with normalized value");
            to_json(&v.normalized())?
        }
    };
    Ok(Value::from(text))
}

/// `fromjson`: parses the input string as a JSON document.
///
/// # Errors
///
/// Returns a decode error for invalid JSON and a type error for non-strings.
pub fn fromjson(v: &Value) -> Result<Value> {
    match v {
        Value::String(s) => from_json(s),
        _ => Err(Error::function_type("fromjson", v.clone())),
    }
}
