//! Object shape predicates
//!
//! These predicates take a configuration argument (a key list or a method
//! name) in addition to the subject value, and are the only fallible ones in
//! the crate: a malformed configuration argument is a caller-contract
//! violation and yields [`Error::InvalidArgument`] no matter what the subject
//! value is. A subject that merely fails the shape check is `Ok(false)`.

use super::key::normalize_keys;
use super::scalar::is_callable;
use crate::{Error, Key, Value};
use std::collections::BTreeMap;

/// Check if a value is a plain object carrying every given key.
///
/// `keys` is a single property key or an array of property keys; an empty
/// key list is rejected with [`Error::InvalidArgument`]. With
/// `prop_non_empty` unset a key merely has to be present; with it set the
/// value stored under the key must also be truthy.
///
/// # Examples
///
/// ```
/// use attest::{is_object_with, Value};
///
/// let user = Value::object([("name", Value::from("ada"))]);
/// assert_eq!(is_object_with(&user, &Value::from("name"), false), Ok(true));
/// assert_eq!(is_object_with(&user, &Value::from("email"), false), Ok(false));
///
/// // A malformed keys argument raises regardless of the subject.
/// assert!(is_object_with(&user, &Value::array([]), false).is_err());
/// ```
///
/// A present-but-falsy property passes the existence check and fails the
/// truthy one:
///
/// ```
/// use attest::{is_object_with, Value};
///
/// let user = Value::object([("name", Value::from(""))]);
/// assert_eq!(is_object_with(&user, &Value::from("name"), false), Ok(true));
/// assert_eq!(is_object_with(&user, &Value::from("name"), true), Ok(false));
/// ```
pub fn is_object_with(value: &Value, keys: &Value, prop_non_empty: bool) -> Result<bool, Error> {
    let keys = normalize_keys(keys, false)?;
    let Value::Object(map) = value else {
        return Ok(false);
    };
    Ok(keys.iter().all(|key| {
        if prop_non_empty {
            map.get(key).is_some_and(Value::is_truthy)
        } else {
            map.contains_key(key)
        }
    }))
}

/// Check if a value is an array of plain objects, optionally all carrying
/// every given key.
///
/// Unlike [`is_object_with`], an empty key list (or `None`) is allowed and
/// means "no key requirement" — but a key list containing anything other
/// than property keys is still rejected with [`Error::InvalidArgument`].
/// An empty array passes vacuously unless `non_empty` is set.
///
/// # Example
///
/// ```
/// use attest::{is_object_array, Value};
///
/// assert_eq!(is_object_array(&Value::array([]), None, false), Ok(true));
/// assert_eq!(is_object_array(&Value::array([]), None, true), Ok(false));
///
/// let rows = Value::array([
///     Value::object([("id", Value::from(1))]),
///     Value::object([("id", Value::from(2))]),
/// ]);
/// assert_eq!(is_object_array(&rows, Some(&Value::from("id")), true), Ok(true));
/// assert_eq!(is_object_array(&rows, Some(&Value::from("name")), false), Ok(false));
/// ```
pub fn is_object_array(
    value: &Value,
    keys: Option<&Value>,
    non_empty: bool,
) -> Result<bool, Error> {
    let keys = match keys {
        Some(keys) => normalize_keys(keys, true)?,
        None => Vec::new(),
    };
    let Value::Array(items) = value else {
        return Ok(false);
    };
    if non_empty && items.is_empty() {
        return Ok(false);
    }
    Ok(items.iter().all(|item| match item {
        Value::Object(map) => keys.iter().all(|key| map.contains_key(key)),
        _ => false,
    }))
}

/// Check if a value is a plain object exposing a callable under `method`.
///
/// `method` must be a non-empty string or the call is rejected with
/// [`Error::InvalidArgument`]. A present-but-not-callable property is
/// `Ok(false)`.
///
/// # Example
///
/// ```
/// use attest::{has_callable, Value};
///
/// let svc = Value::object([("run", Value::function(|_| Value::Null))]);
/// assert_eq!(has_callable(&svc, "run"), Ok(true));
/// assert_eq!(has_callable(&svc, "stop"), Ok(false));
/// assert!(has_callable(&svc, "").is_err());
/// ```
pub fn has_callable(value: &Value, method: &str) -> Result<bool, Error> {
    if method.is_empty() {
        return Err(Error::invalid_argument(
            "method name must be a non-empty string",
        ));
    }
    let Value::Object(map) = value else {
        return Ok(false);
    };
    Ok(lookup(map, method).is_some_and(is_callable))
}

fn lookup<'a>(map: &'a BTreeMap<Key, Value>, key: &str) -> Option<&'a Value> {
    map.get(&Key::from(key))
}
