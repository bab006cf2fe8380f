//! Operator engine and filter-evaluation interface for jqlite.
//!
//! This crate provides:
//! - [`Operator`] - Binary operator tokens and their evaluation
//! - [`arithmetic`] - The per-operator rules (`+ - * / %`) and deep merge
//! - [`dispatch`] - The operand-pair classifier behind `+ - * /`
//! - [`stream`] - The lazy result streams shared with the surrounding evaluator

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod operator;
pub mod stream;

pub use operator::{Operator, arithmetic, dispatch};
pub use stream::{FilterEvaluator, ValueStream, empty, map_each_result, single_result, single_value};
