//! Integration tests for Value types
//!
//! Tests construction, the total order, hashing, display, and normalization.

use jqlite_foundation::{Kind, Value, compare};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

// =============================================================================
// Classification
// =============================================================================

#[test]
fn every_kind_has_one_name() {
    let samples = [
        Value::Null,
        Value::Bool(true),
        Value::Int(1),
        Value::Float(1.5),
        Value::from("s"),
        Value::array([1]),
        Value::object([("k", 1)]),
    ];
    let names: Vec<_> = samples.iter().map(Value::type_name).collect();
    assert_eq!(
        names,
        ["null", "boolean", "number", "number", "string", "array", "object"]
    );
    for kind in Kind::ALL {
        assert_eq!(kind.to_string(), kind.name());
    }
}

#[test]
fn truthiness() {
    assert!(!Value::Null.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Int(0).is_truthy());
    assert!(Value::from("").is_truthy());
    assert!(Value::array(Vec::<Value>::new()).is_truthy());
}

// =============================================================================
// Total Order
// =============================================================================

#[test]
fn cross_kind_order() {
    let ascending = [
        Value::Null,
        Value::Bool(false),
        Value::Bool(true),
        Value::Float(f64::NAN),
        Value::Int(-3),
        Value::Float(0.5),
        Value::Int(2),
        Value::from(""),
        Value::from("a"),
        Value::from("b"),
        Value::array(Vec::<Value>::new()),
        Value::array([1]),
        Value::array([1, 2]),
        Value::object(Vec::<(&str, Value)>::new()),
        Value::object([("a", 2)]),
        Value::object([("b", 1)]),
    ];
    for pair in ascending.windows(2) {
        assert_eq!(compare(&pair[0], &pair[1]), Ordering::Less, "{} < {}", pair[0], pair[1]);
        assert_eq!(compare(&pair[1], &pair[0]), Ordering::Greater);
    }
}

#[test]
fn objects_compare_keys_before_values() {
    let a = Value::object([("a", 9), ("b", 9)]);
    let b = Value::object([("a", 1), ("c", 1)]);
    assert!(a < b);
    let c = Value::object([("a", 1), ("b", 2)]);
    let d = Value::object([("a", 1), ("b", 3)]);
    assert!(c < d);
}

#[test]
fn numbers_compare_by_value() {
    assert_eq!(Value::Int(3), Value::Float(3.0));
    assert!(Value::Int(i64::MAX) < Value::Float(9.3e18));
    assert!(Value::Float(-9.3e18) < Value::Int(i64::MIN));
    assert!(Value::Int(9_007_199_254_740_993) > Value::Float(9_007_199_254_740_992.0));
}

#[test]
fn sorting_uses_total_order() {
    let mut values = vec![
        Value::from("z"),
        Value::Int(2),
        Value::Null,
        Value::array([0]),
        Value::Float(1.5),
        Value::Bool(true),
    ];
    values.sort();
    assert_eq!(
        values,
        vec![
            Value::Null,
            Value::Bool(true),
            Value::Float(1.5),
            Value::Int(2),
            Value::from("z"),
            Value::array([0]),
        ]
    );
}

// =============================================================================
// Hashing
// =============================================================================

#[test]
fn equal_numbers_dedupe_in_sets() {
    let set: HashSet<Value> = [Value::Int(1), Value::Float(1.0), Value::Float(1.5)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);

    let tree: BTreeSet<Value> = [Value::Float(f64::NAN), Value::Float(f64::NAN)]
        .into_iter()
        .collect();
    assert_eq!(tree.len(), 1);
}

// =============================================================================
// Display and Normalization
// =============================================================================

#[test]
fn display_is_compact_json() {
    let v = Value::object([
        ("b", Value::array([Value::Float(1.0), Value::Null])),
        ("a", Value::from("q\"")),
    ]);
    assert_eq!(v.to_string(), r#"{"a":"q\"","b":[1,null]}"#);
}

#[test]
fn display_normalizes_non_finite() {
    let v = Value::array([Value::Float(f64::NAN), Value::Float(f64::INFINITY)]);
    assert_eq!(v.to_string(), "[null,1.7976931348623157e308]");
}

#[test]
fn normalized_rebuilds_containers() {
    let v = Value::object([(
        "xs",
        Value::array([Value::Float(f64::NEG_INFINITY), Value::Int(1)]),
    )]);
    assert!(v.has_non_finite());
    let n = v.normalized();
    assert!(!n.has_non_finite());
    assert_eq!(
        n,
        Value::object([("xs", Value::array([Value::Float(-f64::MAX), Value::Int(1)]))])
    );
    assert!(v.has_non_finite());
}

#[test]
fn preview_truncates_on_char_boundary() {
    assert_eq!(Value::from("short").preview(), r#""short""#);
    let long = Value::from("ééééééééé");
    let preview = long.preview();
    assert!(preview.ends_with("..."));
    assert!(preview.len() <= 14);
    assert_eq!(Value::Int(12).describe(), "number (12)");
}
