//! Constants, `type`, and `_type_error`.

use jqlite_foundation::{Error, Result, Value};
use jqlite_language::{FilterEvaluator, ValueStream, map_each_result, single_result, single_value};

/// `null`
pub fn null(_: &Value) -> Result<Value> {
    Ok(Value::Null)
}

/// `true`
pub fn always_true(_: &Value) -> Result<Value> {
    Ok(Value::Bool(true))
}

/// `false`
pub fn always_false(_: &Value) -> Result<Value> {
    Ok(Value::Bool(false))
}

/// `type`: the input's type name.
pub fn type_name(v: &Value) -> Result<Value> {
    Ok(Value::from(v.type_name()))
}

/// `_type_error(tag)`: a type error naming `tag` and carrying the input, once
/// per value the argument yields.
pub fn type_error<'a, E: FilterEvaluator>(
    evaluator: &'a E,
    args: &'a [E::Filter],
    input: Value,
) -> ValueStream<'a> {
    let [tag] = args else {
        return single_result(Err(Error::function_not_found("_type_error", args.len())));
    };
    let raised = input.clone();
    map_each_result(evaluator.evaluate(tag, single_value(input)), move |tag| {
        Err(match tag {
            Value::String(name) => Error::function_type(&*name, raised.clone()),
            other => Error::function_type("_type_error", other),
        })
    })
}
