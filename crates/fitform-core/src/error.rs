//! Error types for the FitForm engine.
//!
//! The engine itself is designed to degrade rather than halt: per-frame
//! input problems (too few landmarks, wrong camera viewpoint) and missing
//! threshold entries are reported through the [`Feedback`](crate::Feedback)
//! record, never as errors. The types here cover the remaining edges —
//! configuration documents and frame construction — where a caller can
//! actually act on a `Result`.

use thiserror::Error;

/// A specialized `Result` type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Top-level error type for the FitForm core crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    /// Threshold configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation error for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Description of what validation failed
        message: String,
    },
}

impl CoreError {
    /// Creates a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns `true` if this error is recoverable.
    ///
    /// Configuration errors are always recoverable: the engine keeps serving
    /// frames with whatever configuration it already holds.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Config(e) => e.is_recoverable(),
            Self::Validation { .. } => false,
        }
    }
}

/// Errors produced while loading a threshold document.
///
/// Only document-level problems surface here. Malformed entries *inside* a
/// well-formed document are skipped with a warning during loading, so that a
/// partially broken configuration still yields a usable table.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document could not be parsed as JSON at all
    #[error("threshold document is not valid JSON: {message}")]
    InvalidJson {
        /// Parser error description
        message: String,
    },

    /// The document root has the wrong shape
    #[error("threshold document root must be an object, found {found}")]
    UnexpectedRoot {
        /// JSON type actually found at the root
        found: &'static str,
    },
}

impl ConfigError {
    /// Creates a new invalid-JSON error.
    #[must_use]
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson {
            message: message.into(),
        }
    }

    /// Creates a new unexpected-root error.
    #[must_use]
    pub fn unexpected_root(found: &'static str) -> Self {
        Self::UnexpectedRoot { found }
    }

    /// Returns `true` if this error is recoverable.
    ///
    /// All configuration errors are: the previous table stays in effect.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::unexpected_root("array");
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::invalid_json("trailing comma");
        let core_err: CoreError = config_err.into();
        assert!(matches!(core_err, CoreError::Config(_)));
        assert!(core_err.is_recoverable());
    }

    #[test]
    fn test_validation_not_recoverable() {
        let err = CoreError::validation("odd coordinate count");
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("odd coordinate count"));
    }
}
