//! Property-based tests for the predicate layer

use attest::{
    is_array, is_empty_array, is_number, is_number_or_string, is_object_with, is_property_key,
    is_property_key_array, is_string, is_string_array, is_symbol, assert_variable, Key, Symbol,
    Value,
};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = Key> {
    "[a-z_]{1,8}".prop_map(Key::from)
}

/// Arbitrary values of every runtime type, nested up to a few levels deep.
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::Number),
        ".{0,12}".prop_map(Value::from),
        Just(Value::from(Symbol::new())),
        Just(Value::function(|_| Value::Null)),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(key_strategy(), inner, 0..6).prop_map(Value::Object),
        ]
    })
}

proptest! {
    #[test]
    fn prop_number_or_string_decomposes(v in value_strategy(), flag in any::<bool>()) {
        prop_assert_eq!(
            is_number_or_string(&v, flag),
            is_string(&v, flag) || is_number(&v, flag)
        );
    }

    #[test]
    fn prop_predicates_are_idempotent(v in value_strategy(), flag in any::<bool>()) {
        prop_assert_eq!(is_string(&v, flag), is_string(&v, flag));
        prop_assert_eq!(is_number(&v, flag), is_number(&v, flag));
        prop_assert_eq!(is_array(&v, flag), is_array(&v, flag));
        prop_assert_eq!(is_property_key(&v), is_property_key(&v));
    }

    #[test]
    fn prop_empty_and_non_empty_arrays_exclusive(v in value_strategy()) {
        prop_assert!(!(is_empty_array(&v) && is_array(&v, true)));
        // An array is exactly one of the two.
        if is_array(&v, false) {
            prop_assert!(is_empty_array(&v) ^ is_array(&v, true));
        }
    }

    #[test]
    fn prop_empty_array_matches_length_zero(v in value_strategy()) {
        let by_length = matches!(&v, Value::Array(items) if items.is_empty());
        prop_assert_eq!(is_empty_array(&v), by_length);
        prop_assert_eq!(is_array(&v, false) && by_length, is_empty_array(&v));
    }

    #[test]
    fn prop_string_array_implies_array(
        v in value_strategy(),
        non_empty in any::<bool>(),
        item_non_empty in any::<bool>()
    ) {
        if is_string_array(&v, non_empty, item_non_empty) {
            prop_assert!(is_array(&v, non_empty));
        }
    }

    #[test]
    fn prop_string_arrays_of_strings_always_pass(
        items in prop::collection::vec("[a-z]{1,6}", 1..8)
    ) {
        let arr = Value::array(items.into_iter().map(Value::from));
        prop_assert!(is_string_array(&arr, true, true));
        prop_assert!(is_property_key_array(&arr, true));
    }

    #[test]
    fn prop_property_key_matches_definition(v in value_strategy()) {
        let expected =
            (is_string(&v, false) || is_number(&v, false) || is_symbol(&v)) && v.is_truthy();
        prop_assert_eq!(is_property_key(&v), expected);
    }

    #[test]
    fn prop_object_with_valid_key_never_errors(v in value_strategy(), key in "[a-z]{1,6}") {
        // However malformed the subject, a well-formed key list is never an error.
        let result = is_object_with(&v, &Value::from(key.as_str()), false);
        prop_assert!(result.is_ok());
    }

    #[test]
    fn prop_builder_agrees_with_predicate(v in value_strategy(), flag in any::<bool>()) {
        let checked = assert_variable(&v, None);
        prop_assert_eq!(checked.is_string(flag).is_ok(), is_string(&v, flag));
        prop_assert_eq!(checked.is_number(flag).is_ok(), is_number(&v, flag));
        prop_assert_eq!(checked.is_array(flag).is_ok(), is_array(&v, flag));
        prop_assert_eq!(checked.is_property_key().is_ok(), is_property_key(&v));
    }
}
