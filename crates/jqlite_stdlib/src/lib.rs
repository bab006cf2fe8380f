//! Builtin function library for jqlite.
//!
//! This crate provides the builtins, organized by category:
//! - General functions (constants, `empty`, `type`, `_type_error`)
//! - Collection functions (`length`, `keys`, `has`)
//! - String functions (`utf8bytelength`, `explode`, `implode`, `join`)
//! - Conversion functions (`tonumber`, `tojson`, `fromjson`)
//! - Math functions (the `libm` table)
//!
//! Everything is reached through the [`Builtins`] table, which is built once
//! from a [`LibraryConfig`] and looked up by name and argument count.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtins;
pub mod config;

pub use builtins::{Builtin, Builtins, FilterFn, ValueFn};
pub use config::LibraryConfig;
