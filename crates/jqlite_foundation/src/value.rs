//! Core value type for all jqlite data.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::{JqMap, JqVec};
use crate::order::{I64_BOUND, compare};
use crate::types::Kind;

/// The dynamically-typed value every filter consumes and produces.
///
/// Values are immutable and cheaply cloneable (O(1) for every variant).
/// Arrays and objects use persistent data structures with structural sharing.
///
/// Equality, ordering, and hashing all follow [`compare`], so `Int(2)` and
/// `Float(2.0)` are the same value to every consumer.
#[derive(Clone)]
pub enum Value {
    /// `null`.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integral number.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// UTF-8 string.
    String(Arc<str>),
    /// Ordered array.
    Array(JqVec<Value>),
    /// Object with unique string keys, kept in sorted key order.
    Object(JqMap<Value>),
}

/// Largest magnitude (exclusive) at which an integral float is still treated
/// as an integer in JSON output.
pub(crate) const INTEGRAL_FLOAT_LIMIT: f64 = 1e17;

/// Maximum bytes of JSON text kept by [`Value::preview`].
const PREVIEW_BYTES: usize = 11;

impl Value {
    /// Creates an array value from anything convertible to values.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Creates an object value from key-value pairs. Later duplicates win.
    pub fn object<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<Arc<str>>,
        T: Into<Value>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    /// Returns the language-level kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Boolean,
            Self::Int(_) | Self::Float(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
        }
    }

    /// Returns the canonical type name (`"null"`, `"boolean"`, `"number"`, ...).
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns true if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for either number representation.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Returns true if this value is truthy.
    ///
    /// Only `null` and `false` are falsy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integral value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a floating value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a number as f64 (promotes integers).
    ///
    /// Note: Converting large i64 values to f64 may lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an array reference.
    #[must_use]
    pub const fn as_array(&self) -> Option<&JqVec<Value>> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract an object reference.
    #[must_use]
    pub const fn as_object(&self) -> Option<&JqMap<Value>> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Returns a copy with every non-finite number replaced by a finite stand-in.
    ///
    /// NaN becomes `null`, positive infinity becomes `f64::MAX`, and negative
    /// infinity becomes `-f64::MAX`. Arrays and objects are rebuilt recursively.
    #[must_use]
    pub fn normalized(&self) -> Self {
        match self {
            Self::Float(f) if f.is_nan() => Self::Null,
            Self::Float(f) if f.is_infinite() => Self::Float(f64::MAX.copysign(*f)),
            Self::Array(items) => Self::Array(items.iter().map(Self::normalized).collect()),
            Self::Object(map) => {
                Self::Object(map.iter().map(|(k, v)| (k.clone(), v.normalized())).collect())
            }
            other => other.clone(),
        }
    }

    /// Returns true if any number inside this value is NaN or infinite.
    #[must_use]
    pub fn has_non_finite(&self) -> bool {
        match self {
            Self::Float(f) => !f.is_finite(),
            Self::Array(items) => items.iter().any(Self::has_non_finite),
            Self::Object(map) => map.values().any(Self::has_non_finite),
            _ => false,
        }
    }

    /// Returns a short JSON rendering for error messages.
    ///
    /// Text longer than a few bytes is cut on a character boundary and
    /// suffixed with `...`.
    #[must_use]
    pub fn preview(&self) -> String {
        let text = self.to_string();
        if text.len() <= PREVIEW_BYTES + 3 {
            return text;
        }
        let mut end = PREVIEW_BYTES;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }

    /// Describes the value as `type (preview)`, e.g. `number (1)`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} ({})", self.type_name(), self.preview())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl Hash for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            // Integral floats hash like the equal Int; all NaNs hash alike.
            Self::Float(f) if f.is_nan() => f64::NAN.to_bits().hash(state),
            Self::Float(f) if f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(f) => {
                (*f as i64).hash(state);
            }
            Self::Float(f) => f.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::Array(items) => items.hash(state),
            Self::Object(map) => map.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(v) => write!(f, "{v:?}"),
            Self::Object(m) => write!(f, "{m:?}"),
        }
    }
}

/// Compact JSON text. Non-finite numbers are normalized first, so this
/// never fails.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.has_non_finite() {
            crate::json::to_json(&self.normalized())
        } else {
            crate::json::to_json(self)
        };
        f.write_str(&text.map_err(|_| fmt::Error)?)
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Self::Float(n as f64), Self::Int)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<JqVec<Value>> for Value {
    fn from(v: JqVec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<JqMap<Value>> for Value {
    fn from(m: JqMap<Value>) -> Self {
        Self::Object(m)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::array(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}
