//! Error types for assertion failures and misused arguments
//!
//! Failures fall into three categories, kept structurally distinct so callers
//! can match on them:
//!
//! - [`Error::Guard`] — the bare [`assert`](crate::assert) condition was false
//! - [`Error::Assertion`] — a value failed a shape assertion
//! - [`Error::InvalidArgument`] — a predicate's own configuration argument
//!   (the `keys` list or a method name) was malformed; this is a programmer
//!   error and is raised regardless of the subject value

use thiserror::Error;

/// Error raised by the assertion layer or by a misconfigured predicate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bare `assert` guard failed. Carries only the caller-supplied
    /// message, if any.
    #[error("{}", .message.as_deref().unwrap_or("assertion failed"))]
    Guard {
        /// The caller-supplied message, if one was given.
        message: Option<String>,
    },

    /// A value under test failed a shape assertion.
    #[error("{message}")]
    Assertion {
        /// The caller-supplied message, or a default description of the
        /// expected shape.
        message: String,
    },

    /// A predicate's configuration argument was malformed.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Error {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether this error is a caller-contract violation rather than a
    /// failed subject value.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_display_without_message() {
        let err = Error::Guard { message: None };
        assert_eq!(err.to_string(), "assertion failed");
    }

    #[test]
    fn test_guard_display_with_message() {
        let err = Error::Guard {
            message: Some("boom".to_string()),
        };
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("keys must be property keys");
        assert_eq!(
            err.to_string(),
            "invalid argument: keys must be property keys"
        );
        assert!(err.is_invalid_argument());
    }
}
