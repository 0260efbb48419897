//! Property-key predicates and key-list normalization
//!
//! A property key is anything usable to index an object: a non-empty string,
//! a non-NaN non-zero number, or a symbol. The normalization helper here is
//! shared by the object predicates, which take a single key or a key list as
//! a configuration argument and must reject malformed key lists before
//! looking at the subject value.

use super::scalar::{is_number, is_string, is_symbol};
use crate::{Error, Key, Value};

/// Check if a value is a property key.
///
/// Falsy candidates are rejected: the empty string and zero are not valid
/// keys, while `-1` and `"a"` are.
///
/// # Example
///
/// ```
/// use attest::{is_property_key, Value, Symbol};
///
/// assert!(is_property_key(&Value::from("a")));
/// assert!(is_property_key(&Value::from(-1)));
/// assert!(is_property_key(&Value::from(Symbol::new())));
/// assert!(!is_property_key(&Value::from("")));
/// assert!(!is_property_key(&Value::from(0)));
/// ```
#[inline]
pub fn is_property_key(value: &Value) -> bool {
    (is_string(value, false) || is_number(value, false) || is_symbol(value)) && value.is_truthy()
}

/// Check if a value is an array whose every element is a property key.
///
/// An empty array passes vacuously unless `non_empty` is set.
///
/// # Example
///
/// ```
/// use attest::{is_property_key_array, Value};
///
/// let keys = Value::array([Value::from("a"), Value::from(1)]);
/// assert!(is_property_key_array(&keys, false));
///
/// assert!(is_property_key_array(&Value::array([]), false));
/// assert!(!is_property_key_array(&Value::array([]), true));
/// ```
pub fn is_property_key_array(value: &Value, non_empty: bool) -> bool {
    match value {
        Value::Array(items) => {
            (!non_empty || !items.is_empty()) && items.iter().all(is_property_key)
        }
        _ => false,
    }
}

/// Normalize a keys argument into lookup keys.
///
/// A single key is wrapped into a one-element list; an array contributes its
/// elements. Every element must be a valid property key or the whole call is
/// rejected with [`Error::InvalidArgument`], before any subject value is
/// inspected. An empty list is rejected unless `allow_empty` is set.
pub(crate) fn normalize_keys(keys: &Value, allow_empty: bool) -> Result<Vec<Key>, Error> {
    let items: Vec<&Value> = match keys {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };
    if items.is_empty() && !allow_empty {
        return Err(Error::invalid_argument(
            "keys must be a property key or a non-empty array of property keys",
        ));
    }
    items
        .into_iter()
        .map(|item| {
            Key::from_value(item).ok_or_else(|| {
                Error::invalid_argument(format!(
                    "keys must contain only property keys, got {}",
                    item.type_name()
                ))
            })
        })
        .collect()
}
