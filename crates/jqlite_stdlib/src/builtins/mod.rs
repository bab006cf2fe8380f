//! The builtin function table.
//!
//! [`Builtins`] maps a function name to its implementation and declared
//! argument count. Zero-argument functions are plain value transforms;
//! functions with arguments receive their argument filters unevaluated and
//! drive the [`FilterEvaluator`] themselves.

pub mod collection;
pub mod conversion;
pub mod general;
pub mod math;
pub mod string;

use std::collections::BTreeMap;
use std::fmt;

use jqlite_foundation::{Error, Result, Value};
use jqlite_language::{FilterEvaluator, ValueStream, empty, single_result};
use tracing::{debug, trace};

use crate::config::LibraryConfig;

/// A zero-argument builtin: one input, one result.
pub type ValueFn = fn(&Value) -> Result<Value>;

/// A builtin that takes filter arguments and yields a stream of results.
pub type FilterFn<E> = for<'a> fn(
    &'a E,
    &'a [<E as FilterEvaluator>::Filter],
    Value,
) -> ValueStream<'a>;

enum Implementation<E: FilterEvaluator> {
    Value(ValueFn),
    Math(fn(f64) -> f64),
    Empty,
    Filter(FilterFn<E>),
}

impl<E: FilterEvaluator> Clone for Implementation<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: FilterEvaluator> Copy for Implementation<E> {}

/// One registered builtin.
pub struct Builtin<E: FilterEvaluator> {
    name: &'static str,
    arity: usize,
    implementation: Implementation<E>,
}

impl<E: FilterEvaluator> Builtin<E> {
    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared number of filter arguments.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Runs the builtin against one input.
    ///
    /// Zero-argument builtins yield exactly one result (`empty` yields none).
    /// Builtins with arguments yield one result per value their argument
    /// produces, lazily.
    pub fn invoke<'a>(&self, evaluator: &'a E, args: &'a [E::Filter], input: Value) -> ValueStream<'a> {
        if args.len() != self.arity {
            return single_result(Err(Error::function_not_found(self.name, args.len())));
        }
        match self.implementation {
            Implementation::Value(f) => single_result(f(&input)),
            Implementation::Math(f) => single_result(math::apply(self.name, f, &input)),
            Implementation::Empty => empty(),
            Implementation::Filter(f) => f(evaluator, args, input),
        }
    }
}

impl<E: FilterEvaluator> fmt::Debug for Builtin<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

/// Registry of builtin functions, keyed by name.
pub struct Builtins<E: FilterEvaluator> {
    functions: BTreeMap<&'static str, Builtin<E>>,
}

impl<E: FilterEvaluator> Default for Builtins<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: FilterEvaluator> Builtins<E> {
    /// Creates a table with every builtin under the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&LibraryConfig::default())
    }

    /// Creates a table for the given configuration.
    #[must_use]
    pub fn with_config(config: &LibraryConfig) -> Self {
        let mut table = Self {
            functions: BTreeMap::new(),
        };

        table.register_general_functions();
        table.register_collection_functions();
        table.register_string_functions();
        table.register_conversion_functions();
        if config.math_functions {
            table.register_math_functions(config.legacy_gamma);
        }
        if config.internal_functions {
            table.register_internal_functions();
        }

        debug!(functions = table.len(), ?config, "built builtin table");
        table
    }

    /// Finds the builtin called with `arity` arguments.
    ///
    /// # Errors
    ///
    /// Returns a function-not-found error if no builtin has this name, or if
    /// it declares a different number of arguments.
    pub fn lookup(&self, name: &str, arity: usize) -> Result<&Builtin<E>> {
        match self.functions.get(name) {
            Some(builtin) if builtin.arity == arity => Ok(builtin),
            _ => {
                trace!(name, arity, "builtin not found");
                Err(Error::function_not_found(name, arity))
            }
        }
    }

    /// Calls a builtin by name against one input.
    ///
    /// A failed lookup yields a stream holding the function-not-found error.
    pub fn call<'a>(
        &self,
        name: &str,
        args: &'a [E::Filter],
        input: Value,
        evaluator: &'a E,
    ) -> ValueStream<'a> {
        match self.lookup(name, args.len()) {
            Ok(builtin) => builtin.invoke(evaluator, args, input),
            Err(err) => single_result(Err(err)),
        }
    }

    /// Returns true if a builtin with this name exists, at any arity.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Returns all function names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.functions.keys().copied().collect()
    }

    /// Returns the number of registered builtins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true if no builtins are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    fn insert(&mut self, name: &'static str, arity: usize, implementation: Implementation<E>) {
        self.functions.insert(
            name,
            Builtin {
                name,
                arity,
                implementation,
            },
        );
    }

    fn register(&mut self, name: &'static str, f: ValueFn) {
        self.insert(name, 0, Implementation::Value(f));
    }

    fn register_filter(&mut self, name: &'static str, arity: usize, f: FilterFn<E>) {
        self.insert(name, arity, Implementation::Filter(f));
    }

    // Registration methods for each category

    fn register_general_functions(&mut self) {
        self.register("null", general::null);
        self.register("true", general::always_true);
        self.register("false", general::always_false);
        self.insert("empty", 0, Implementation::Empty);
        self.register("type", general::type_name);
    }

    fn register_collection_functions(&mut self) {
        self.register("length", collection::length);
        self.register("keys", collection::keys);
        self.register_filter("has", 1, collection::has::<E>);
    }

    fn register_string_functions(&mut self) {
        self.register("utf8bytelength", string::utf8bytelength);
        self.register("explode", string::explode);
        self.register("implode", string::implode);
        self.register_filter("join", 1, string::join::<E>);
    }

    fn register_conversion_functions(&mut self) {
        self.register("tonumber", conversion::tonumber);
        self.register("tojson", conversion::tojson);
        self.register("fromjson", conversion::fromjson);
    }

    fn register_math_functions(&mut self, legacy_gamma: bool) {
        for &(name, f) in math::UNARY {
            self.insert(name, 0, Implementation::Math(f));
        }
        let gamma: fn(f64) -> f64 = if legacy_gamma { libm::tgamma } else { libm::lgamma };
        self.insert("gamma", 0, Implementation::Math(gamma));
        self.register("lgamma_r", math::lgamma_r);
    }

    fn register_internal_functions(&mut self) {
        self.register_filter("_type_error", 1, general::type_error::<E>);
    }
}

impl<E: FilterEvaluator> fmt::Debug for Builtins<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.functions.values()).finish()
    }
}
