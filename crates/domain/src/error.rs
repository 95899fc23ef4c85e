//! Unified error types for the domain layer
//!
//! Every failure carries a stable, machine-checkable [`ErrorKind`] plus a
//! human-readable message. Errors are always returned, never raised.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable classification of a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    MissingArgument,
    InvalidArgument,
    Conflict,
    InvalidConfiguration,
    NotFound,
    NotImplemented,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingArgument => "missing_argument",
            Self::InvalidArgument => "invalid_argument",
            Self::Conflict => "conflict",
            Self::InvalidConfiguration => "invalid_configuration",
            Self::NotFound => "not_found",
            Self::NotImplemented => "not_implemented",
        }
    }

    /// HTTP-style status code for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingArgument | Self::InvalidArgument => 400,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::InvalidConfiguration => 422,
            Self::NotImplemented => 501,
        }
    }
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required argument was absent or empty
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// A value failed structural validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A state change was blocked by a safety invariant
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A configuration payload was absent or malformed
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Lookup or delete target is absent
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Operation exists on the interface but has no behavior yet
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl DomainError {
    /// Creates a missing-argument error.
    ///
    /// Use this when a required input is absent or empty:
    ///
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::missing_argument("Place name is required"));
    /// }
    /// ```
    pub fn missing_argument(msg: impl Into<String>) -> Self {
        Self::MissingArgument(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a not implemented error naming the operation
    pub fn not_implemented(operation: &'static str) -> Self {
        Self::NotImplemented(operation)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument(_) => ErrorKind::MissingArgument,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::NotImplemented(_) => ErrorKind::NotImplemented,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_error() {
        let err = DomainError::missing_argument("name is required");
        assert_eq!(err.kind(), ErrorKind::MissingArgument);
        assert_eq!(err.to_string(), "Missing argument: name is required");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Place", "123e4567-e89b-12d3-a456-426614174000");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("Place"));
        assert!(err.to_string().contains("123e4567"));
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_conflict_error() {
        let err = DomainError::conflict("enclosure is occupied");
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "Conflict: enclosure is occupied");
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_invalid_configuration_status() {
        let err = DomainError::invalid_configuration("capacity is required");
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_not_implemented_error() {
        let err = DomainError::not_implemented("move_dinos");
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
        assert_eq!(err.to_string(), "Not implemented: move_dinos");
        assert_eq!(err.status_code(), 501);
    }

    #[test]
    fn test_kind_log_labels() {
        assert_eq!(DomainError::conflict("occupied").kind().as_str(), "conflict");
        assert_eq!(
            DomainError::invalid_configuration("no capacity").kind().as_str(),
            "invalid_configuration"
        );
        assert_eq!(ErrorKind::NotFound.as_str(), "not_found");
    }

    #[test]
    fn test_kind_serializes_camel_case() {
        let json = serde_json::to_string(&ErrorKind::InvalidConfiguration).unwrap();
        assert_eq!(json, "\"invalidConfiguration\"");
    }
}
