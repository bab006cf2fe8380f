//! Lazy result streams and the filter-evaluation seam.
//!
//! A filter maps one input to zero or more results, and every result is
//! either a value or an error. Errors travel inside the stream next to
//! values; a stream never stops because one item failed.

use std::iter;

use jqlite_foundation::{Result, Value};

/// A lazily evaluated sequence of results.
pub type ValueStream<'a> = Box<dyn Iterator<Item = Result<Value>> + 'a>;

/// Evaluates unevaluated filter arguments.
///
/// Builtins that take arguments (`has`, `join`, `_type_error`) receive them
/// as filters and run them through the surrounding evaluator against their
/// own input.
pub trait FilterEvaluator {
    /// The evaluator's filter representation.
    type Filter;

    /// Runs `filter` once per input and concatenates the results.
    fn evaluate<'a>(&'a self, filter: &'a Self::Filter, inputs: ValueStream<'a>) -> ValueStream<'a>;
}

/// A stream of exactly one value.
#[must_use]
pub fn single_value<'a>(value: Value) -> ValueStream<'a> {
    Box::new(iter::once(Ok(value)))
}

/// A stream of exactly one result.
#[must_use]
pub fn single_result<'a>(result: Result<Value>) -> ValueStream<'a> {
    Box::new(iter::once(result))
}

/// A stream with no results.
#[must_use]
pub fn empty<'a>() -> ValueStream<'a> {
    Box::new(iter::empty())
}

/// Applies `f` to every value in the stream. Errors already in the stream
/// pass through untouched.
pub fn map_each_result<'a, F>(stream: ValueStream<'a>, mut f: F) -> ValueStream<'a>
where
    F: FnMut(Value) -> Result<Value> + 'a,
{
    Box::new(stream.map(move |item| item.and_then(&mut f)))
}
