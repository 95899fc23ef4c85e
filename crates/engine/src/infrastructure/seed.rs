//! JSON seed data for bootstrapping a park.
//!
//! ```json
//! {
//!   "places": [{ "name": "Hatchery", "location": "Visitor Center", "kind": "Lab" }],
//!   "enclosures": [
//!     { "capacity": { "species": "Triceratops", "maxOccupants": 2 }, "power": "ACTIVE" }
//!   ],
//!   "dinosaurs": [{ "name": "Blue", "species": "Velociraptor" }]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use dinopark_domain::{
    Dinosaur, DomainError, Enclosure, EnclosureCapacity, EnclosureId, Place, PlaceKind,
    PowerState, Species,
};

use super::ports::ParkControl;

/// Errors that can occur while loading or applying seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid seed entry: {0}")]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSeed {
    pub name: String,
    pub location: String,
    pub kind: PlaceKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnclosureSeed {
    #[serde(default)]
    pub capacity: Option<EnclosureCapacity>,
    #[serde(default)]
    pub power: PowerState,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DinosaurSeed {
    pub name: String,
    pub species: Species,
}

/// Seed file contents. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkSeed {
    #[serde(default)]
    pub places: Vec<PlaceSeed>,
    #[serde(default)]
    pub enclosures: Vec<EnclosureSeed>,
    #[serde(default)]
    pub dinosaurs: Vec<DinosaurSeed>,
}

impl ParkSeed {
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Build empty enclosures with their seeded capacity and power state.
    pub fn enclosures(&self) -> Vec<Enclosure> {
        self.enclosures
            .iter()
            .map(|seed| {
                Enclosure::from_storage(
                    EnclosureId::new(),
                    seed.capacity.clone(),
                    Vec::new(),
                    seed.power,
                )
            })
            .collect()
    }

    pub fn dinosaurs(&self) -> Result<Vec<Dinosaur>, SeedError> {
        self.dinosaurs
            .iter()
            .map(|seed| Dinosaur::new(seed.name.as_str(), seed.species).map_err(SeedError::from))
            .collect()
    }
}

/// Register every seeded place through `park`. Returns the number registered.
pub async fn apply_places(park: &dyn ParkControl, seed: &ParkSeed) -> Result<usize, SeedError> {
    for entry in &seed.places {
        let place = Place::new(entry.name.as_str(), entry.location.as_str(), entry.kind)?;
        park.register_place(place).await?;
    }
    Ok(seed.places.len())
}
