//! JSON encoding and decoding for values.
//!
//! [`Value`] implements `serde`'s `Serialize` and `Deserialize`, and the
//! functions here drive them through `serde_json`. Encoding is strict: a NaN or
//! infinite number is an error rather than silently becoming `null`. Callers
//! that want lossy output normalize first (see [`Value::normalized`]).

use std::fmt;
use std::sync::Arc;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::collections::{JqMap, JqVec};
use crate::error::Error;
use crate::value::{INTEGRAL_FLOAT_LIMIT, Value};
use crate::Result;

/// Encodes a value as compact JSON text.
///
/// # Errors
///
/// Returns an encode error if the value contains a NaN or infinite number.
pub fn to_json(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::encode(e.to_string()))
}

/// Decodes JSON text into a value.
///
/// Integer literals that fit in an `i64` become integral numbers; every other
/// number becomes a float.
///
/// # Errors
///
/// Returns a decode error if the text is not a single valid JSON document.
pub fn from_json(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| Error::decode(e.to_string(), text))
}

/// Parses JSON number text into a numeric value.
///
/// Surrounding whitespace is allowed, as in any JSON document; anything else
/// that is not a JSON number (`"0x10"`, `"nan"`, `"1."`) is rejected.
///
/// # Errors
///
/// Returns a decode error if the text is not a JSON number.
pub fn parse_number(text: &str) -> Result<Value> {
    let number: serde_json::Number =
        serde_json::from_str(text).map_err(|e| Error::decode(e.to_string(), text))?;
    match (number.as_i64(), number.as_f64()) {
        (Some(n), _) => Ok(Value::Int(n)),
        (None, Some(f)) => Ok(Value::Float(f)),
        (None, None) => Err(Error::decode("number out of range", text)),
    }
}

/// Formats a float the way the encoder writes it.
///
/// Integral values below `1e17` in magnitude print without a fraction
/// (`1.0` becomes `1`); everything else uses the shortest text that reads
/// back to the same float. Non-finite input prints as `null`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_number(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    if is_integral(f) {
        return (f as i64).to_string();
    }
    serde_json::to_string(&f).unwrap_or_else(|_| f.to_string())
}

fn is_integral(f: f64) -> bool {
    f.fract() == 0.0 && f.abs() < INTEGRAL_FLOAT_LIMIT
}

impl Serialize for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(f) if !f.is_finite() => Err(ser::Error::custom(format_args!(
                "unsupported value: {}",
                NonFinite(*f)
            ))),
            Self::Float(f) if is_integral(*f) => serializer.serialize_i64(*f as i64),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    out.serialize_entry(&**k, v)?;
                }
                out.end()
            }
        }
    }
}

/// Renders NaN and the infinities the way error messages name them.
struct NonFinite(f64);

impl fmt::Display for NonFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("NaN")
        } else if self.0 > 0.0 {
            f.write_str("+Inf")
        } else {
            f.write_str("-Inf")
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Value, D::Error> {
        Value::deserialize(d)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> std::result::Result<Value, E> {
        Ok(Value::Int(n))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, n: u64) -> std::result::Result<Value, E> {
        Ok(i64::try_from(n).map_or(Value::Float(n as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> std::result::Result<Value, E> {
        Ok(Value::Float(f))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> std::result::Result<Value, E> {
        Ok(Value::from(s))
    }

    fn visit_string<E: de::Error>(self, s: String) -> std::result::Result<Value, E> {
        Ok(Value::from(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::Array(items.into_iter().collect::<JqVec<_>>()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Value, A::Error> {
        let mut entries: Vec<(Arc<str>, Value)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((k, v)) = map.next_entry::<String, Value>()? {
            entries.push((k.into(), v));
        }
        Ok(Value::Object(entries.into_iter().collect::<JqMap<_>>()))
    }
}
