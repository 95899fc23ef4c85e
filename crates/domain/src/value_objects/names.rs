//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty after trimming (`DomainError::MissingArgument` otherwise)
//! - Within length limits (`DomainError::InvalidArgument` otherwise)
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name and location fields
pub const MAX_NAME_LENGTH: usize = 200;

/// Shared validation for required text fields.
pub(crate) fn validate_required(label: &str, value: &str) -> Result<(), DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::missing_argument(format!(
            "{} cannot be empty",
            label
        )));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(DomainError::invalid_argument(format!(
            "{} cannot exceed {} characters",
            label, MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new validated value.
            ///
            /// # Errors
            ///
            /// - `DomainError::MissingArgument` if the value is empty after trimming
            /// - `DomainError::InvalidArgument` if it exceeds 200 characters
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                validate_required($label, &value)?;
                Ok(Self(value.trim().to_string()))
            }

            /// Returns the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> String {
                name.0
            }
        }
    };
}

define_name!(
    /// A validated dinosaur name (non-empty, <=200 chars, trimmed)
    DinoName,
    "Dinosaur name"
);

define_name!(
    /// A validated place name (non-empty, <=200 chars, trimmed)
    PlaceName,
    "Place name"
);

define_name!(
    /// A validated place location (non-empty, <=200 chars, trimmed)
    PlaceLocation,
    "Place location"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn valid_name_is_trimmed() {
        let name = DinoName::new("  Blue  ").unwrap();
        assert_eq!(name.as_str(), "Blue");
    }

    #[test]
    fn empty_name_is_missing_argument() {
        let err = DinoName::new("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingArgument);
    }

    #[test]
    fn whitespace_only_location_is_missing_argument() {
        let err = PlaceLocation::new("   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingArgument);
    }

    #[test]
    fn overlong_name_is_invalid_argument() {
        let err = PlaceName::new("x".repeat(MAX_NAME_LENGTH + 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn name_at_limit_is_accepted() {
        assert!(PlaceName::new("x".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn deserialize_rejects_empty() {
        let result: Result<DinoName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
        let name: DinoName = serde_json::from_str("\"Rexy\"").unwrap();
        assert_eq!(name.to_string(), "Rexy");
    }
}
