//! Scalar shape predicates
//!
//! Checks for the leaf shapes: strings, numbers, symbols, callables, and
//! plain objects. Every function here is total over [`Value`] and never
//! returns anything but a boolean.

use crate::Value;

/// Check if a value is a string.
///
/// With `non_empty` set, the empty string is rejected.
///
/// # Example
///
/// ```
/// use attest::{is_string, Value};
///
/// assert!(is_string(&Value::from("hello"), false));
/// assert!(is_string(&Value::from(""), false));
/// assert!(!is_string(&Value::from(""), true));
/// assert!(!is_string(&Value::from(5), false));
/// ```
#[inline]
pub fn is_string(value: &Value, non_empty: bool) -> bool {
    match value {
        Value::String(s) => !non_empty || !s.is_empty(),
        _ => false,
    }
}

/// Check if a value is a number.
///
/// NaN is rejected even though its runtime type is numeric. With `non_zero`
/// set, zero is rejected as well.
///
/// # Example
///
/// ```
/// use attest::{is_number, Value};
///
/// assert!(is_number(&Value::from(0), false));
/// assert!(!is_number(&Value::from(0), true));
/// assert!(!is_number(&Value::from(f64::NAN), false));
/// ```
#[inline]
pub fn is_number(value: &Value, non_zero: bool) -> bool {
    match value {
        Value::Number(n) => !n.is_nan() && (!non_zero || *n != 0.0),
        _ => false,
    }
}

/// Check if a value is a number or a string.
///
/// The `non_empty` flag doubles as `non_zero` for the numeric branch, so
/// with it set both the empty string and zero are rejected.
///
/// # Example
///
/// ```
/// use attest::{is_number_or_string, Value};
///
/// assert!(is_number_or_string(&Value::from("id"), false));
/// assert!(is_number_or_string(&Value::from(7), false));
/// assert!(!is_number_or_string(&Value::from(0), true));
/// assert!(!is_number_or_string(&Value::Null, false));
/// ```
#[inline]
pub fn is_number_or_string(value: &Value, non_empty: bool) -> bool {
    is_string(value, non_empty) || is_number(value, non_empty)
}

/// Check if a value is a symbol.
#[inline]
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// Check if a value is callable.
///
/// # Example
///
/// ```
/// use attest::{is_callable, Value};
///
/// assert!(is_callable(&Value::function(|_| Value::Null)));
/// assert!(!is_callable(&Value::from("not a function")));
/// ```
#[inline]
pub fn is_callable(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Check if a value is a plain keyed object.
///
/// Arrays, null, and every other specialized shape are rejected; only the
/// ordinary key/value object form qualifies.
///
/// # Example
///
/// ```
/// use attest::{is_plain_object, Value};
///
/// assert!(is_plain_object(&Value::object([("a", Value::from(1))])));
/// assert!(!is_plain_object(&Value::array([])));
/// assert!(!is_plain_object(&Value::Null));
/// ```
#[inline]
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}
