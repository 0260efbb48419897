//! Array shape predicates

use super::scalar::is_string;
use crate::Value;

/// Check if a value is an array.
///
/// With `non_empty` set, the array must contain at least one element.
///
/// # Example
///
/// ```
/// use attest::{is_array, Value};
///
/// assert!(is_array(&Value::array([]), false));
/// assert!(!is_array(&Value::array([]), true));
/// assert!(is_array(&Value::array([Value::from(1)]), true));
/// assert!(!is_array(&Value::from("not an array"), false));
/// ```
#[inline]
pub fn is_array(value: &Value, non_empty: bool) -> bool {
    match value {
        Value::Array(items) => !non_empty || !items.is_empty(),
        _ => false,
    }
}

/// Check if a value is an array with no elements.
///
/// For any array this is mutually exclusive with `is_array(v, true)`.
///
/// # Example
///
/// ```
/// use attest::{is_empty_array, Value};
///
/// assert!(is_empty_array(&Value::array([])));
/// assert!(!is_empty_array(&Value::array([Value::Null])));
/// assert!(!is_empty_array(&Value::Null));
/// ```
#[inline]
pub fn is_empty_array(value: &Value) -> bool {
    matches!(value, Value::Array(items) if items.is_empty())
}

/// Check if a value is an array whose every element is a string.
///
/// An empty array passes vacuously unless `non_empty` is set. With
/// `item_non_empty` set, every element must also be a non-empty string.
///
/// # Example
///
/// ```
/// use attest::{is_string_array, Value};
///
/// let names = Value::array([Value::from("a"), Value::from("b")]);
/// assert!(is_string_array(&names, false, false));
///
/// let with_blank = Value::array([Value::from("a"), Value::from("")]);
/// assert!(is_string_array(&with_blank, false, false));
/// assert!(!is_string_array(&with_blank, false, true));
///
/// // Vacuous truth over the empty array, unless non_empty is requested.
/// assert!(is_string_array(&Value::array([]), false, false));
/// assert!(!is_string_array(&Value::array([]), true, false));
/// ```
pub fn is_string_array(value: &Value, non_empty: bool, item_non_empty: bool) -> bool {
    match value {
        Value::Array(items) => {
            (!non_empty || !items.is_empty())
                && items.iter().all(|item| is_string(item, item_non_empty))
        }
        _ => false,
    }
}
