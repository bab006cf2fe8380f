//! Error types for jqlite.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Errors are never raised: operators and builtins return them as the error
//! side of [`crate::Result`], alongside ordinary values in a result stream.

use thiserror::Error;

use crate::value::Value;

/// The main error type for jqlite operations.
///
/// The kind is boxed so `Result<Value>` stays small; most results on a hot
/// path are successes.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct Error {
    kind: Box<ErrorKind>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind: Box::new(kind),
        }
    }

    /// Returns the kind of error that occurred.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consumes the error and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> ErrorKind {
        *self.kind
    }

    /// Creates an operator type error.
    #[must_use]
    pub fn binary_type(op: &'static str, lhs: Value, rhs: Value) -> Self {
        Self::new(ErrorKind::BinaryType { op, lhs, rhs })
    }

    /// Creates a function input type error.
    #[must_use]
    pub fn function_type(name: impl Into<String>, value: Value) -> Self {
        Self::new(ErrorKind::FunctionType {
            name: name.into(),
            value,
        })
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(lhs: Value, rhs: Value) -> Self {
        Self::new(ErrorKind::DivisionByZero { lhs, rhs })
    }

    /// Creates a modulo by zero error.
    #[must_use]
    pub fn modulo_by_zero(lhs: Value, rhs: Value) -> Self {
        Self::new(ErrorKind::ModuloByZero { lhs, rhs })
    }

    /// Creates a containment key type error.
    #[must_use]
    pub fn has_key_type(container: Value, key: Value) -> Self {
        Self::new(ErrorKind::HasKeyType { container, key })
    }

    /// Creates an error for a string repetition whose result cannot be allocated.
    #[must_use]
    pub fn repeat_too_long(length: usize, count: f64) -> Self {
        Self::new(ErrorKind::RepeatTooLong { length, count })
    }

    /// Creates a function not found error.
    #[must_use]
    pub fn function_not_found(name: impl Into<String>, arity: usize) -> Self {
        Self::new(ErrorKind::FunctionNotFound {
            name: name.into(),
            arity,
        })
    }

    /// Creates a decode error for malformed text.
    #[must_use]
    pub fn decode(message: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode {
            message: message.into(),
            input: input.into(),
        })
    }

    /// Creates an encode error.
    #[must_use]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Encode(message.into()))
    }

    /// Creates an unknown operator error.
    #[must_use]
    pub fn unknown_operator(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownOperator(token.into()))
    }

    /// Returns true for operator and function type errors, including errors
    /// raised through `_type_error`.
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        matches!(
            *self.kind,
            ErrorKind::BinaryType { .. } | ErrorKind::FunctionType { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// A binary operator received an unsupported pair of operands.
    #[error("cannot {op}: {} and {}", .lhs.describe(), .rhs.describe())]
    BinaryType {
        /// Operation name (`add`, `subtract`, ...).
        op: &'static str,
        /// Left operand.
        lhs: Value,
        /// Right operand.
        rhs: Value,
    },

    /// A function received an input or argument it cannot handle.
    #[error("{name} cannot be applied to: {}", .value.describe())]
    FunctionType {
        /// Function name, or the tag passed to `_type_error`.
        name: String,
        /// The offending value.
        value: Value,
    },

    /// Division by zero.
    #[error("cannot divide {} by: {}", .lhs.describe(), .rhs.describe())]
    DivisionByZero {
        /// Dividend.
        lhs: Value,
        /// Zero divisor.
        rhs: Value,
    },

    /// Modulo by zero.
    #[error("cannot modulo {} by: {}", .lhs.describe(), .rhs.describe())]
    ModuloByZero {
        /// Dividend.
        lhs: Value,
        /// Divisor that is zero after truncation.
        rhs: Value,
    },

    /// `has` key kind does not match the container kind.
    #[error("cannot check whether {} has a key: {}", .container.type_name(), .key.describe())]
    HasKeyType {
        /// The container being queried.
        container: Value,
        /// The key or index that was asked for.
        key: Value,
    },

    /// String repetition would exceed the addressable size.
    #[error("repeat string result too long: {length} bytes repeated {count} times")]
    RepeatTooLong {
        /// Byte length of the repeated string.
        length: usize,
        /// Requested repeat count.
        count: f64,
    },

    /// No builtin with this name and arity.
    #[error("function not defined: {name}/{arity}")]
    FunctionNotFound {
        /// Function name.
        name: String,
        /// Number of arguments at the call site.
        arity: usize,
    },

    /// Malformed text given to `tonumber` or `fromjson`.
    #[error("{message} (while parsing {input:?})")]
    Decode {
        /// Parser message.
        message: String,
        /// The text that failed to parse.
        input: String,
    },

    /// JSON encoding failed.
    #[error("{0}")]
    Encode(String),

    /// Operator token not recognized.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
}
