//! Error types for the shelter library.
//!
//! This module provides the error hierarchy for all store operations,
//! using `thiserror` for ergonomic error handling.
//!
//! A query that matches no rows is not an error: it is reported as `None`
//! or as zero rows affected.

use thiserror::Error;

/// Result type alias for operations that may fail with a shelter error.
///
/// # Examples
///
/// ```
/// use shelter::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the shelter library.
#[derive(Debug, Error)]
pub enum Error {
    /// A field set was rejected before reaching the store.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the field set was rejected (e.g. "name required").
        reason: String,
    },

    /// A resource identifier could not be classified, or the operation is not
    /// supported for its shape.
    #[error("unsupported resource '{resource}': {reason}")]
    UnsupportedResource {
        /// The resource identifier as supplied by the caller.
        resource: String,
        /// Why the resource was rejected.
        reason: String,
    },

    /// The underlying store failed.
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// The on-disk schema version cannot be used by this build.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The schema version this build understands.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] with the given reason.
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::UnsupportedResource`] for the given identifier.
    pub(crate) fn unsupported_resource(
        resource: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnsupportedResource {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Check if the error is a validator rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelter::Error;
    ///
    /// let err = Error::InvalidArgument { reason: "name required".into() };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if the error is a router rejection.
    #[must_use]
    pub fn is_unsupported_resource(&self) -> bool {
        matches!(self, Self::UnsupportedResource { .. })
    }

    /// Check if the error comes from the underlying store.
    #[must_use]
    pub fn is_store_error(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Check if the error is a lock timeout from the underlying store.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        match self {
            Self::Store(rusqlite::Error::SqliteFailure(e, _)) => matches!(
                e.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = Error::invalid_argument("name required");
        let display = format!("{err}");
        assert!(display.contains("invalid argument"));
        assert!(display.contains("name required"));
        assert!(err.is_invalid_argument());
        assert!(!err.is_store_error());
    }

    #[test]
    fn test_unsupported_resource_error() {
        let err = Error::unsupported_resource("cats/1", "unknown collection");
        let display = format!("{err}");
        assert!(display.contains("cats/1"));
        assert!(display.contains("unknown collection"));
        assert!(err.is_unsupported_resource());
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_store_error_conversion() {
        let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(err.is_store_error());
        assert!(format!("{err}").contains("store error"));
        assert!(!err.is_busy());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "busy_timeout_ms".to_string(),
            message: "must be a positive integer".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("busy_timeout_ms"));
        assert!(display.contains("must be a positive integer"));
    }
}
