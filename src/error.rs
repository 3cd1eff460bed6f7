//! Error types for cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CairnError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CairnError::Other`) for provider backends with
//!   their own error types
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// A secret reference reached a load operation without a usable name.
    #[error("Secret reference '{key}' has an empty name")]
    EmptySecretName { key: String },

    /// A provider could not produce a value for the requested name.
    #[error("Failed to resolve '{name}': {message}")]
    ResolveFailed { name: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_name_displays_key() {
        let err = CairnError::EmptySecretName {
            key: "dbPassword".into(),
        };
        assert!(err.to_string().contains("dbPassword"));
    }

    #[test]
    fn resolve_failed_displays_name_and_message() {
        let err = CairnError::ResolveFailed {
            name: "service/api/token".into(),
            message: "no such parameter".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("service/api/token"));
        assert!(msg.contains("no such parameter"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "binary missing");
        let err: CairnError = io_err.into();
        assert!(matches!(err, CairnError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CairnError::ResolveFailed {
                name: "x".into(),
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
