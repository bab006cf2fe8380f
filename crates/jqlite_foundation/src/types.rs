//! Language-level type names.

use std::fmt;

/// The type of a value as the query language sees it.
///
/// Integral and floating numbers are both [`Kind::Number`]; the representation
/// split exists only inside [`crate::Value`].
///
/// Variants are declared in ascending sort order, so the derived `Ord` is the
/// cross-type ordering used by [`crate::compare`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// Integral or floating number.
    Number,
    /// UTF-8 text.
    String,
    /// Ordered sequence of values.
    Array,
    /// String-keyed mapping.
    Object,
}

impl Kind {
    /// Every kind, in sort order.
    pub const ALL: [Kind; 6] = [
        Kind::Null,
        Kind::Boolean,
        Kind::Number,
        Kind::String,
        Kind::Array,
        Kind::Object,
    ];

    /// Returns the canonical type name reported by `type`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
