//! End-to-end tests for the assertion layer and the predicate contracts
//! it is built on.

use attest::{
    assert, assert_variable, has_callable, is_array, is_empty_array, is_number_or_string,
    is_object_array, is_object_with, is_property_key, is_string, is_string_array, Error, Symbol,
    Value,
};

#[test]
fn guard_carries_only_the_caller_message() {
    assert!(assert(true, Some("never seen")).is_ok());

    let err = assert(false, Some("broken invariant")).unwrap_err();
    assert_eq!(err, Error::Guard { message: Some("broken invariant".into()) });

    let err = assert(false, None).unwrap_err();
    assert_eq!(err, Error::Guard { message: None });
}

#[test]
fn builder_raises_for_wrong_shape_and_passes_for_right_one() {
    let five = Value::from(5);
    assert!(assert_variable(&five, None).is_string(false).is_err());
    assert!(assert_variable(&five, None).is_number(false).is_ok());

    let x = Value::from("x");
    assert!(assert_variable(&x, None).is_string(false).is_ok());
}

#[test]
fn builder_custom_message_is_verbatim() {
    let err = assert_variable(&Value::from(5), Some("custom"))
        .is_string(false)
        .unwrap_err();
    assert_eq!(err.to_string(), "custom");
}

#[test]
fn string_contracts() {
    assert!(is_string(&Value::from(""), false));
    assert!(!is_string(&Value::from(""), true));
    assert!(is_string(&Value::from("non-empty"), true));
    assert!(!is_string(&Value::from(1), false));
}

#[test]
fn number_contracts() {
    use attest::is_number;
    // NaN has numeric runtime type but is never a number here.
    assert!(!is_number(&Value::from(f64::NAN), false));
    assert!(is_number(&Value::from(0), false));
    assert!(!is_number(&Value::from(0), true));
    assert!(is_number(&Value::from(-2.5), true));
}

#[test]
fn number_or_string_reuses_the_flag_for_both_branches() {
    assert!(is_number_or_string(&Value::from("x"), true));
    assert!(is_number_or_string(&Value::from(3), true));
    assert!(!is_number_or_string(&Value::from(""), true));
    assert!(!is_number_or_string(&Value::from(0), true));
    assert!(is_number_or_string(&Value::from(""), false));
    assert!(is_number_or_string(&Value::from(0), false));
}

#[test]
fn empty_array_and_non_empty_array_never_overlap() {
    let empty = Value::array([]);
    let full = Value::array([Value::Null]);

    assert!(is_empty_array(&empty) && !is_array(&empty, true));
    assert!(!is_empty_array(&full) && is_array(&full, true));
    assert!(is_array(&empty, false) && is_array(&full, false));
}

#[test]
fn string_array_vacuous_truth() {
    assert!(!is_string_array(&Value::array([]), true, false));
    assert!(!is_string_array(&Value::array([]), true, true));
    assert!(is_string_array(&Value::array([]), false, false));
    assert!(is_string_array(&Value::array([]), false, true));
}

#[test]
fn property_keys_reject_falsy_values() {
    assert!(!is_property_key(&Value::from(0)));
    assert!(!is_property_key(&Value::from("")));
    assert!(is_property_key(&Value::from(-1)));
    assert!(is_property_key(&Value::from("a")));
    assert!(is_property_key(&Value::from(Symbol::new())));
}

#[test]
fn object_with_missing_key_is_false_but_empty_key_list_raises() {
    let empty_obj = Value::object::<&str, _>([]);
    assert_eq!(is_object_with(&empty_obj, &Value::from("x"), false), Ok(false));

    let err = is_object_with(&empty_obj, &Value::array([]), false).unwrap_err();
    assert!(err.is_invalid_argument());

    // The same empty key list is fine for the array-of-objects predicate.
    assert_eq!(
        is_object_array(&Value::array([]), Some(&Value::array([])), false),
        Ok(true)
    );
}

#[test]
fn has_callable_distinguishes_shape_failure_from_misuse() {
    let with_fn = Value::object([("f", Value::function(|_| Value::Null))]);
    let with_num = Value::object([("f", Value::from(1))]);

    assert_eq!(has_callable(&with_fn, "f"), Ok(true));
    assert_eq!(has_callable(&with_num, "f"), Ok(false));
    assert!(has_callable(&Value::object::<&str, _>([]), "").unwrap_err().is_invalid_argument());
}

#[test]
fn builder_never_rewraps_configuration_errors() {
    let subject = Value::object::<&str, _>([]);
    let err = assert_variable(&subject, Some("shadowed"))
        .is_object_with(&Value::array([]), false)
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_ne!(err.to_string(), "shadowed");
}

#[test]
fn builder_covers_every_predicate() {
    let sym = Symbol::new();
    let obj = Value::object([
        ("name", Value::from("ada")),
        ("run", Value::function(|_| Value::Null)),
    ]);
    let names = Value::array([Value::from("a"), Value::from("b")]);
    let keys = Value::array([Value::from("k"), Value::from(1)]);
    let rows = Value::array([Value::object([("id", Value::from(1))])]);

    assert!(assert_variable(&Value::from("s"), None).is_string(true).is_ok());
    assert!(assert_variable(&Value::from(1), None).is_number(true).is_ok());
    assert!(assert_variable(&Value::from(1), None).is_number_or_string(true).is_ok());
    assert!(assert_variable(&Value::from(sym), None).is_symbol().is_ok());
    assert!(assert_variable(&Value::function(|_| Value::Null), None).is_callable().is_ok());
    assert!(assert_variable(&obj, None).is_plain_object().is_ok());
    assert!(assert_variable(&names, None).is_array(true).is_ok());
    assert!(assert_variable(&Value::array([]), None).is_empty_array().is_ok());
    assert!(assert_variable(&names, None).is_string_array(true, true).is_ok());
    assert!(assert_variable(&Value::from("k"), None).is_property_key().is_ok());
    assert!(assert_variable(&keys, None).is_property_key_array(true).is_ok());
    assert!(assert_variable(&obj, None).is_object_with(&Value::from("name"), true).is_ok());
    assert!(assert_variable(&rows, None).is_object_array(Some(&Value::from("id")), true).is_ok());
    assert!(assert_variable(&obj, None).has_callable("run").is_ok());
}

#[test]
fn default_messages_describe_the_expected_shape() {
    let wrong = Value::Null;
    let cases: Vec<(Result<(), Error>, &str)> = vec![
        (assert_variable(&wrong, None).is_string(false), "variable must be a string"),
        (assert_variable(&wrong, None).is_number(false), "variable must be a number"),
        (
            assert_variable(&wrong, None).is_number_or_string(false),
            "variable must be a number or a string",
        ),
        (assert_variable(&wrong, None).is_symbol(), "variable must be a symbol"),
        (assert_variable(&wrong, None).is_callable(), "variable must be callable"),
        (assert_variable(&wrong, None).is_plain_object(), "variable must be a plain object"),
        (assert_variable(&wrong, None).is_array(false), "variable must be an array"),
        (assert_variable(&wrong, None).is_empty_array(), "variable must be an empty array"),
        (
            assert_variable(&wrong, None).is_string_array(false, false),
            "variable must be an array of strings",
        ),
        (assert_variable(&wrong, None).is_property_key(), "variable must be a property key"),
        (
            assert_variable(&wrong, None).is_property_key_array(false),
            "variable must be an array of property keys",
        ),
        (
            assert_variable(&wrong, None).is_object_with(&Value::from("k"), false),
            "variable must be an object with the required keys",
        ),
        (
            assert_variable(&wrong, None).is_object_array(None, false),
            "variable must be an array of objects",
        ),
        (
            assert_variable(&wrong, None).has_callable("run"),
            "variable must have a callable property 'run'",
        ),
    ];
    for (result, expected) in cases {
        assert_eq!(result.unwrap_err().to_string(), expected);
    }
}
