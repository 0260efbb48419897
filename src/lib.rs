//! # Attest
//!
//! Runtime shape predicates and fluent assertions for dynamic values.
//!
//! ## Philosophy
//!
//! **Attest** keeps two small layers strictly apart:
//!
//! - **Predicates** are pure boolean queries — `is_string`, `is_array`,
//!   `is_object_with`, and friends never raise for a subject that merely has
//!   the wrong shape and never mutate what they inspect.
//! - **Assertions** turn the same queries into raised errors — the bare
//!   [`assert`] guard and the per-value [`assert_variable`] builder return
//!   `Err` instead of `false`, carrying a human-readable message.
//!
//! The subject of every check is a [`Value`]: a tagged dynamic value covering
//! strings, numbers, symbols, arrays, keyed objects, and callables.
//!
//! ## Quick Example
//!
//! ```rust
//! use attest::{assert_variable, is_object_with, Value};
//!
//! let user = Value::object([
//!     ("name", Value::from("ada")),
//!     ("greet", Value::function(|_| Value::from("hi"))),
//! ]);
//!
//! // Query form: a plain boolean.
//! assert!(is_object_with(&user, &Value::from("name"), false)?);
//!
//! // Assertion form: raises with a message instead.
//! assert_variable(&user, None).is_plain_object()?;
//! assert_variable(&user, None).has_callable("greet")?;
//!
//! let err = assert_variable(&user, None).is_string(false).unwrap_err();
//! assert_eq!(err.to_string(), "variable must be a string");
//! # Ok::<(), attest::Error>(())
//! ```
//!
//! ## Error categories
//!
//! A failed subject is an [`Error::Assertion`]; a malformed configuration
//! argument (an invalid key list, an empty method name) is an
//! [`Error::InvalidArgument`] and is raised even from the boolean predicates,
//! because it is a programmer error independent of the subject value.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod assert;
mod error;
#[cfg(feature = "json")]
mod json;
pub mod predicate;
mod value;

// Re-exports
pub use assert::{assert, assert_variable, Assertion};
pub use error::Error;
pub use predicate::{
    has_callable, is_array, is_callable, is_empty_array, is_number, is_number_or_string,
    is_object_array, is_object_with, is_plain_object, is_property_key, is_property_key_array,
    is_string, is_string_array, is_symbol,
};
pub use value::{Key, NativeFn, Symbol, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assert::{assert, assert_variable, Assertion};
    pub use crate::error::Error;
    pub use crate::predicate::{
        has_callable, is_array, is_callable, is_empty_array, is_number, is_number_or_string,
        is_object_array, is_object_with, is_plain_object, is_property_key, is_property_key_array,
        is_string, is_string_array, is_symbol,
    };
    pub use crate::value::{Key, NativeFn, Symbol, Value};
}
