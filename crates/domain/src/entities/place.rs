//! Place entity - labs and enclosures registered with the park
//!
//! Simple data struct with public fields: a `Place` may be rebuilt from
//! storage or seed data field by field, so [`Place::validate`] re-checks the
//! rules [`Place::new`] enforces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{validate_required, PlaceLocation, PlaceName};
use crate::PlaceId;

/// The kind of place
///
/// Deserializes through [`FromStr`], so stored data accepts the same
/// spellings as parsing does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PlaceKind {
    Lab,
    Enclosure,
}

impl PlaceKind {
    pub const ALL: [PlaceKind; 2] = [Self::Lab, Self::Enclosure];

    /// Get a display-friendly name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Lab => "Lab",
            Self::Enclosure => "Enclosure",
        }
    }

    /// Get the lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lab => "lab",
            Self::Enclosure => "enclosure",
        }
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PlaceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lab" => Ok(Self::Lab),
            // "cage" is the older name for an enclosure
            "enclosure" | "cage" => Ok(Self::Enclosure),
            _ => Err(DomainError::invalid_argument(format!(
                "Unknown place kind: {}",
                s
            ))),
        }
    }
}

impl TryFrom<String> for PlaceKind {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A lab or enclosure in the park
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub location: String,
    pub kind: PlaceKind,
}

impl Place {
    /// Create a place with a freshly generated ID.
    ///
    /// # Errors
    ///
    /// `DomainError::MissingArgument` if `name` or `location` is empty.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        kind: PlaceKind,
    ) -> Result<Self, DomainError> {
        let name = PlaceName::new(name)?;
        let location = PlaceLocation::new(location)?;
        Ok(Self {
            id: PlaceId::new(),
            name: name.into(),
            location: location.into(),
            kind,
        })
    }

    /// Structural validation for records not built through [`Place::new`].
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidArgument` describing the first broken rule.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_required("Place name", &self.name)
            .and_then(|_| validate_required("Place location", &self.location))
            .map_err(|err| match err {
                DomainError::MissingArgument(msg) => DomainError::InvalidArgument(msg),
                other => other,
            })
    }
}

/// Optional-predicate filter over places
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceFilter {
    pub by_kind: Option<PlaceKind>,
}

impl PlaceFilter {
    pub fn by_kind(kind: PlaceKind) -> Self {
        Self {
            by_kind: Some(kind),
        }
    }

    pub fn matches(&self, place: &Place) -> bool {
        self.by_kind.map_or(true, |kind| place.kind == kind)
    }
}
