//! Shape predicates over dynamic values
//!
//! This module provides the boolean query layer: pure, side-effect-free
//! functions that answer "does this value satisfy shape X?" without ever
//! mutating the value. Predicates compose by ordinary boolean logic —
//! `is_number_or_string` is literally `is_string || is_number`, and the
//! object predicates are built from the leaf checks.
//!
//! Predicates never raise for a malformed subject; anything that is not the
//! shape in question is simply `false`. The only fallible calls are the
//! three that take a configuration argument ([`is_object_with`],
//! [`is_object_array`], [`has_callable`]), which reject a malformed `keys`
//! list or method name with [`Error::InvalidArgument`](crate::Error) before
//! looking at the subject.
//!
//! # Example
//!
//! ```
//! use attest::{is_string, is_object_with, Value};
//!
//! let user = Value::object([("name", Value::from("ada"))]);
//! assert!(is_object_with(&user, &Value::from("name"), false).unwrap());
//! assert!(!is_string(&user, false));
//! ```

mod collection;
mod key;
mod object;
mod scalar;

// Scalar predicates
pub use scalar::{is_callable, is_number, is_number_or_string, is_plain_object, is_string, is_symbol};

// Array predicates
pub use collection::{is_array, is_empty_array, is_string_array};

// Property-key predicates
pub use key::{is_property_key, is_property_key_array};

// Object predicates
pub use object::{has_callable, is_object_array, is_object_with};
