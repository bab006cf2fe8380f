//! jqlite - Value algebra for a jq-compatible query language
//!
//! This crate re-exports all layers of the jqlite system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: jqlite_stdlib      — Builtin function table, library config
//! Layer 1: jqlite_language    — Operators, result streams, evaluator interface
//! Layer 0: jqlite_foundation  — Core types (Value, Error, ordering, JSON)
//! ```

pub use jqlite_foundation as foundation;
pub use jqlite_language as language;
pub use jqlite_stdlib as stdlib;
