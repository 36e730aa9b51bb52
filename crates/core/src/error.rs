//! Core error types for algoviz operations using Railway-Oriented Programming.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.
//! Structure mutations and traversals return these as values; the caller
//! decides whether anything is shown to the user.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for algoviz operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Input errors
    #[error("invalid input: {reason}")]
    Validation { reason: String },

    #[error("{what} not found")]
    NotFound { what: String },

    // Structural errors
    #[error("invariant violation: {reason}")]
    InvariantViolation { reason: String },

    /// A well-formed request that leaves the structure unchanged.
    #[error("no-op: {reason}")]
    NoOp { reason: String },

    // Configuration errors
    #[error("failed to read config '{path}': {reason}")]
    ConfigReadFailed { path: PathBuf, reason: String },

    #[error("config parse error: {reason}")]
    ConfigParseFailed { reason: String },
}

impl Error {
    /// Create a validation error.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Create a not-found error for the described entity.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create an invariant violation error.
    pub fn invariant_violation(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }

    /// Create a no-op marker.
    pub fn noop(reason: impl Into<String>) -> Self {
        Self::NoOp {
            reason: reason.into(),
        }
    }

    /// Create a config read error.
    pub fn config_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }

    /// Check if this is a no-op rather than a failure.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp { .. })
    }

    /// Check if this error stems from a user request the UI should report.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::NotFound { .. } | Self::InvariantViolation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("value 7");
        assert_eq!(err.to_string(), "value 7 not found");

        let err = Error::invariant_violation("5 is not greater than 9");
        assert!(err.to_string().contains("5 is not greater than 9"));
    }

    #[test]
    fn test_noop_is_not_user_error() {
        let noop = Error::noop("slot occupied");
        assert!(noop.is_noop());
        assert!(!noop.is_user_error());
    }

    #[test]
    fn test_user_errors() {
        assert!(Error::validation("NaN").is_user_error());
        assert!(Error::not_found("node 3").is_user_error());
        assert!(Error::invariant_violation("order").is_user_error());
        assert!(!Error::config_parse_failed("bad toml").is_user_error());
    }
}
