//! Property tests for the operator algebra.

use jqlite_foundation::{JqMap, Value};
use jqlite_language::arithmetic::{add, deep_merge, multiply, subtract};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        (-1e6f64..1e6).prop_map(Value::Float),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::array),
            prop::collection::btree_map("[a-c]", inner, 0..4).prop_map(Value::object),
        ]
    })
}

fn object() -> impl Strategy<Value = JqMap<Value>> {
    prop::collection::btree_map("[a-e]", value(), 0..5)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn null_is_identity(x in value()) {
        prop_assert_eq!(add(Value::Null, x.clone()).unwrap(), x.clone());
        prop_assert_eq!(add(x.clone(), Value::Null).unwrap(), x);
    }

    #[test]
    fn int_float_equal_sum(a in any::<i32>(), b in any::<i32>()) {
        let ints = add(Value::from(a), Value::from(b)).unwrap();
        let floats = add(Value::Float(f64::from(a)), Value::from(b)).unwrap();
        prop_assert_eq!(ints, floats);
    }

    #[test]
    fn subtracting_disjoint_arrays(
        xs in prop::collection::vec("[a-m]{1,3}", 0..8),
        ys in prop::collection::vec("[n-z]{1,3}", 0..8),
    ) {
        let a = Value::array(xs);
        prop_assert_eq!(subtract(a.clone(), Value::array(ys)).unwrap(), a);
    }

    #[test]
    fn subtracting_self_is_empty(xs in prop::collection::vec(value(), 0..6)) {
        let a = Value::array(xs);
        prop_assert_eq!(subtract(a.clone(), a).unwrap(), Value::array(Vec::<Value>::new()));
    }

    #[test]
    fn merge_is_right_biased(l in object(), r in object()) {
        let Value::Object(merged) = add(Value::Object(l.clone()), Value::Object(r.clone())).unwrap() else {
            panic!("object + object must be an object");
        };
        for (k, v) in r.iter() {
            prop_assert_eq!(merged.get(k), Some(v));
        }
        for (k, v) in l.iter() {
            if !r.contains_key(k) {
                prop_assert_eq!(merged.get(k), Some(v));
            }
        }
    }

    #[test]
    fn merge_is_associative(a in object(), b in object(), c in object()) {
        let (a, b, c) = (Value::Object(a), Value::Object(b), Value::Object(c));
        let left = add(add(a.clone(), b.clone()).unwrap(), c.clone()).unwrap();
        let right = add(a, add(b, c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn deep_merge_with_self_is_identity(a in object()) {
        prop_assert_eq!(deep_merge(&a, &a), a.clone());
        prop_assert_eq!(
            multiply(Value::Object(a.clone()), Value::Object(JqMap::new())).unwrap(),
            Value::Object(a)
        );
    }

    #[test]
    fn repetition_length(s in "[a-z]{1,5}", n in 1i64..20) {
        let out = multiply(Value::from(s.as_str()), Value::Int(n)).unwrap();
        let Value::String(text) = out else {
            panic!("repetition must yield a string");
        };
        prop_assert_eq!(text.len(), s.len() * usize::try_from(n).unwrap());
    }
}
