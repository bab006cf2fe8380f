//! Integration tests for result streams
//!
//! Tests the stream helpers and a custom evaluator built on the trait.

use jqlite_foundation::{Error, Result, Value};
use jqlite_language::{
    FilterEvaluator, Operator, ValueStream, empty, map_each_result, single_result, single_value,
};

/// A filter language with just enough shape to exercise the trait.
enum Filter {
    Identity,
    Const(Value),
    Comma(Vec<Filter>),
    Binary(Operator, Box<Filter>, Box<Filter>),
}

struct Evaluator;

impl Evaluator {
    fn run(&self, filter: &Filter, input: Value) -> Vec<Result<Value>> {
        match filter {
            Filter::Identity => vec![Ok(input)],
            Filter::Const(v) => vec![Ok(v.clone())],
            Filter::Comma(parts) => parts
                .iter()
                .flat_map(|part| self.run(part, input.clone()))
                .collect(),
            Filter::Binary(op, lhs, rhs) => {
                let mut out = Vec::new();
                for r in self.run(rhs, input.clone()) {
                    for l in self.run(lhs, input.clone()) {
                        out.push(match (l, r.clone()) {
                            (Ok(l), Ok(r)) => op.eval(l, r),
                            (Err(e), _) | (_, Err(e)) => Err(e),
                        });
                    }
                }
                out
            }
        }
    }
}

impl FilterEvaluator for Evaluator {
    type Filter = Filter;

    fn evaluate<'a>(&'a self, filter: &'a Filter, inputs: ValueStream<'a>) -> ValueStream<'a> {
        Box::new(inputs.flat_map(move |input| match input {
            Ok(v) => self.run(filter, v),
            Err(e) => vec![Err(e)],
        }))
    }
}

#[test]
fn evaluator_runs_operators() {
    let filter = Filter::Binary(
        Operator::Add,
        Box::new(Filter::Identity),
        Box::new(Filter::Comma(vec![
            Filter::Const(Value::Int(1)),
            Filter::Const(Value::from("x")),
        ])),
    );
    let out: Vec<_> = Evaluator.evaluate(&filter, single_value(Value::Int(10))).collect();
    assert_eq!(out[0], Ok(Value::Int(11)));
    assert!(out[1].as_ref().unwrap_err().is_type_error());
}

#[test]
fn errors_flow_through_evaluation() {
    let inputs: ValueStream<'_> = Box::new(
        vec![Ok(Value::Int(1)), Err(Error::encode("upstream")), Ok(Value::Int(2))].into_iter(),
    );
    let out: Vec<_> = Evaluator.evaluate(&Filter::Identity, inputs).collect();
    assert_eq!(out.len(), 3);
    assert_eq!(out[1], Err(Error::encode("upstream")));
}

#[test]
fn map_each_result_chains() {
    let doubled = map_each_result(single_value(Value::Int(4)), |v| {
        Operator::Multiply.eval(v, Value::Int(2))
    });
    let out: Vec<_> = map_each_result(doubled, |v| Operator::Divide.eval(v, Value::Int(0))).collect();
    assert_eq!(out.len(), 1);
    assert!(out[0].is_err());
}

#[test]
fn helper_streams() {
    assert_eq!(empty().count(), 0);
    assert_eq!(single_result(Err(Error::encode("e"))).count(), 1);
}
