//! Core value model, ordering, errors, and JSON codec for jqlite.
//!
//! This crate provides:
//! - [`Value`] - The dynamically-typed value every filter consumes and produces
//! - [`Kind`] - The six language-level type names
//! - [`compare`] - The total order behind equality, sorting, and key order
//! - [`Error`] - Domain errors returned as ordinary results
//! - Persistent collections ([`JqVec`], [`JqMap`])
//! - JSON encoding and decoding ([`json`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod json;
pub mod order;
pub mod types;
pub mod value;

pub use collections::{JqMap, JqVec};
pub use error::{Error, ErrorKind};
pub use order::compare;
pub use types::Kind;
pub use value::Value;

/// Result type alias using the jqlite error type.
pub type Result<T> = std::result::Result<T, Error>;
