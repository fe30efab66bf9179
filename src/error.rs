//! Error types for the toolkit.
//!
//! Operations on empty inputs never fail; they return `None` or an empty
//! sequence instead. The errors here cover the few cases where a caller hands
//! the toolkit something it cannot work with.

use std::fmt;

/// Represents errors that can occur when using the toolkit.
///
/// # Examples
///
/// ```rust
/// use sequent::ToolkitError;
///
/// let error = ToolkitError::InvalidOperation {
///     method: "push".to_string(),
///     receiver: "number".to_string(),
/// };
/// assert_eq!(format!("{error}"), "invalid operation: no method `push` on number");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    /// An argument had the wrong shape for the operation.
    ///
    /// Returned by `memoize` when the argument cannot be used as a cache key.
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// A human readable description of what was wrong.
        reason: String,
    },

    /// A named method could not be applied to an element.
    ///
    /// Returned by `invoke` when the method table has no entry for the name,
    /// or when the entry does not accept the element it was called on.
    InvalidOperation {
        /// The method name that was requested.
        method: String,
        /// A description of the receiver the method was requested on.
        receiver: String,
    },

    /// No deferred-execution facility is available.
    ///
    /// Returned by `delay` when called outside a tokio runtime.
    SchedulerUnavailable,
}

impl ToolkitError {
    /// Creates an [`ToolkitError::InvalidArgument`] error.
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    /// Creates an [`ToolkitError::InvalidOperation`] error.
    pub fn invalid_operation(method: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self::InvalidOperation {
            method: method.into(),
            receiver: receiver.into(),
        }
    }
}

impl fmt::Display for ToolkitError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { operation, reason } => {
                write!(formatter, "invalid argument to {operation}: {reason}")
            }
            Self::InvalidOperation { method, receiver } => {
                write!(
                    formatter,
                    "invalid operation: no method `{method}` on {receiver}"
                )
            }
            Self::SchedulerUnavailable => write!(
                formatter,
                "no scheduler available: delay must be called from within a tokio runtime"
            ),
        }
    }
}

impl std::error::Error for ToolkitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = ToolkitError::invalid_argument("memoize", "arrays cannot be cache keys");
        assert_eq!(
            format!("{error}"),
            "invalid argument to memoize: arrays cannot be cache keys"
        );
    }

    #[test]
    fn test_invalid_operation_display() {
        let error = ToolkitError::invalid_operation("shout", "text");
        assert_eq!(
            format!("{error}"),
            "invalid operation: no method `shout` on text"
        );
    }

    #[test]
    fn test_scheduler_unavailable_display() {
        let message = format!("{}", ToolkitError::SchedulerUnavailable);
        assert!(message.starts_with("no scheduler available"));
    }

    #[test]
    fn test_error_equality() {
        let first = ToolkitError::invalid_operation("push", "number");
        let second = ToolkitError::invalid_operation("push", "number");
        let third = ToolkitError::invalid_operation("pop", "number");
        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&ToolkitError::SchedulerUnavailable);
    }
}
