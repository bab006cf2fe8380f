//! A minimal evaluator for driving builtins with filter arguments.

use jqlite_foundation::{Result, Value};
use jqlite_language::{FilterEvaluator, ValueStream};
use jqlite_stdlib::Builtins;

/// Argument filters: constants, the identity, comma sequences, and builtin
/// calls.
pub enum Filter {
    Identity,
    Const(Value),
    Comma(Vec<Filter>),
    Call(&'static str, Vec<Filter>),
}

pub struct TestEvaluator {
    pub builtins: Builtins<TestEvaluator>,
}

impl TestEvaluator {
    pub fn new() -> Self {
        Self {
            builtins: Builtins::new(),
        }
    }

    /// Calls a builtin with the given argument filters and collects every result.
    pub fn call(&self, name: &str, args: &[Filter], input: Value) -> Vec<Result<Value>> {
        self.builtins.call(name, args, input, self).collect()
    }

    /// Calls a zero-argument builtin and returns its single result.
    pub fn call0(&self, name: &str, input: Value) -> Result<Value> {
        let mut out = self.call(name, &[], input);
        assert_eq!(out.len(), 1, "{name} should yield one result");
        out.remove(0)
    }

    fn run<'a>(&'a self, filter: &'a Filter, input: Value) -> ValueStream<'a> {
        match filter {
            Filter::Identity => Box::new(std::iter::once(Ok(input))),
            Filter::Const(v) => Box::new(std::iter::once(Ok(v.clone()))),
            Filter::Comma(parts) => {
                Box::new(parts.iter().flat_map(move |part| self.run(part, input.clone())))
            }
            Filter::Call(name, args) => self.builtins.call(name, args, input, self),
        }
    }
}

impl FilterEvaluator for TestEvaluator {
    type Filter = Filter;

    fn evaluate<'a>(&'a self, filter: &'a Filter, inputs: ValueStream<'a>) -> ValueStream<'a> {
        Box::new(inputs.flat_map(move |input| -> ValueStream<'a> {
            match input {
                Ok(v) => self.run(filter, v),
                Err(e) => Box::new(std::iter::once(Err(e))),
            }
        }))
    }
}

pub fn constant(v: impl Into<Value>) -> Filter {
    Filter::Const(v.into())
}
