//! Assertion layer: raise instead of returning a boolean
//!
//! Two entry points sit on top of the predicate layer:
//!
//! - [`assert`] — a bare guard clause over an already-computed condition
//! - [`assert_variable`] — a fluent builder bound to one value, exposing one
//!   method per predicate; each method returns `Ok(())` when the shape holds
//!   and [`Error::Assertion`] otherwise
//!
//! # Examples
//!
//! ```
//! use attest::{assert_variable, Value};
//!
//! let name = Value::from("ada");
//! assert_variable(&name, None).is_string(true)?;
//!
//! let err = assert_variable(&Value::from(5), None).is_string(false).unwrap_err();
//! assert_eq!(err.to_string(), "variable must be a string");
//! # Ok::<(), attest::Error>(())
//! ```
//!
//! A custom message overrides the default wholesale:
//!
//! ```
//! use attest::{assert_variable, Value};
//!
//! let err = assert_variable(&Value::from(5), Some("custom"))
//!     .is_string(false)
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "custom");
//! ```

use crate::predicate;
use crate::{Error, Value};

/// Raise [`Error::Guard`] when `condition` is false.
///
/// The error carries only the caller-supplied message; there is no default.
///
/// # Example
///
/// ```
/// use attest::assert;
///
/// assert!(assert(1 + 1 == 2, None).is_ok());
/// let err = assert(false, Some("broken invariant")).unwrap_err();
/// assert_eq!(err.to_string(), "broken invariant");
/// ```
pub fn assert(condition: bool, message: Option<&str>) -> Result<(), Error> {
    if condition {
        return Ok(());
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(reason = message.unwrap_or(""), "guard failed");
    Err(Error::Guard {
        message: message.map(str::to_owned),
    })
}

/// Bind a value (and an optional custom failure message) to an assertion
/// builder.
///
/// The builder borrows the value, owns no resources, and may be reused for
/// any number of independent checks.
///
/// # Example
///
/// ```
/// use attest::{assert_variable, Value};
///
/// let id = Value::from(42);
/// let checked = assert_variable(&id, None);
/// checked.is_number(true)?;
/// checked.is_property_key()?;
/// assert!(checked.is_string(false).is_err());
/// # Ok::<(), attest::Error>(())
/// ```
pub fn assert_variable<'a>(value: &'a Value, message: Option<&'a str>) -> Assertion<'a> {
    Assertion { value, message }
}

/// Fluent per-value assertion builder returned by [`assert_variable`].
///
/// Each method mirrors a predicate: it passes silently when the bound value
/// satisfies the shape and raises [`Error::Assertion`] otherwise. The three
/// methods backed by fallible predicates propagate
/// [`Error::InvalidArgument`] unchanged — a misconfigured key list is never
/// rewrapped as a value failure.
#[derive(Debug, Clone, Copy)]
pub struct Assertion<'a> {
    value: &'a Value,
    message: Option<&'a str>,
}

impl Assertion<'_> {
    fn check(&self, passed: bool, default: &str) -> Result<(), Error> {
        if passed {
            return Ok(());
        }
        let message = self.message.unwrap_or(default).to_owned();
        #[cfg(feature = "tracing")]
        tracing::debug!(subject = self.value.type_name(), reason = %message, "assertion failed");
        Err(Error::Assertion { message })
    }

    /// Assert the bound value is a string, non-empty if requested.
    pub fn is_string(&self, non_empty: bool) -> Result<(), Error> {
        let default = if non_empty {
            "variable must be a non-empty string"
        } else {
            "variable must be a string"
        };
        self.check(predicate::is_string(self.value, non_empty), default)
    }

    /// Assert the bound value is a number, non-zero if requested.
    pub fn is_number(&self, non_zero: bool) -> Result<(), Error> {
        let default = if non_zero {
            "variable must be a non-zero number"
        } else {
            "variable must be a number"
        };
        self.check(predicate::is_number(self.value, non_zero), default)
    }

    /// Assert the bound value is a number or a string.
    pub fn is_number_or_string(&self, non_empty: bool) -> Result<(), Error> {
        self.check(
            predicate::is_number_or_string(self.value, non_empty),
            "variable must be a number or a string",
        )
    }

    /// Assert the bound value is a symbol.
    pub fn is_symbol(&self) -> Result<(), Error> {
        self.check(predicate::is_symbol(self.value), "variable must be a symbol")
    }

    /// Assert the bound value is callable.
    pub fn is_callable(&self) -> Result<(), Error> {
        self.check(predicate::is_callable(self.value), "variable must be callable")
    }

    /// Assert the bound value is a plain object.
    pub fn is_plain_object(&self) -> Result<(), Error> {
        self.check(
            predicate::is_plain_object(self.value),
            "variable must be a plain object",
        )
    }

    /// Assert the bound value is an array, non-empty if requested.
    pub fn is_array(&self, non_empty: bool) -> Result<(), Error> {
        let default = if non_empty {
            "variable must be a non-empty array"
        } else {
            "variable must be an array"
        };
        self.check(predicate::is_array(self.value, non_empty), default)
    }

    /// Assert the bound value is an empty array.
    pub fn is_empty_array(&self) -> Result<(), Error> {
        self.check(
            predicate::is_empty_array(self.value),
            "variable must be an empty array",
        )
    }

    /// Assert the bound value is an array of strings.
    pub fn is_string_array(&self, non_empty: bool, item_non_empty: bool) -> Result<(), Error> {
        self.check(
            predicate::is_string_array(self.value, non_empty, item_non_empty),
            "variable must be an array of strings",
        )
    }

    /// Assert the bound value is a property key.
    pub fn is_property_key(&self) -> Result<(), Error> {
        self.check(
            predicate::is_property_key(self.value),
            "variable must be a property key",
        )
    }

    /// Assert the bound value is an array of property keys.
    pub fn is_property_key_array(&self, non_empty: bool) -> Result<(), Error> {
        self.check(
            predicate::is_property_key_array(self.value, non_empty),
            "variable must be an array of property keys",
        )
    }

    /// Assert the bound value is a plain object carrying every given key.
    ///
    /// A malformed `keys` argument propagates as
    /// [`Error::InvalidArgument`], custom message or not.
    pub fn is_object_with(&self, keys: &Value, prop_non_empty: bool) -> Result<(), Error> {
        self.check(
            predicate::is_object_with(self.value, keys, prop_non_empty)?,
            "variable must be an object with the required keys",
        )
    }

    /// Assert the bound value is an array of plain objects, optionally all
    /// carrying every given key.
    pub fn is_object_array(&self, keys: Option<&Value>, non_empty: bool) -> Result<(), Error> {
        self.check(
            predicate::is_object_array(self.value, keys, non_empty)?,
            "variable must be an array of objects",
        )
    }

    /// Assert the bound value exposes a callable under `method`.
    pub fn has_callable(&self, method: &str) -> Result<(), Error> {
        self.check(
            predicate::has_callable(self.value, method)?,
            &format!("variable must have a callable property '{}'", method),
        )
    }
}
