//! Enclosure capacity policy

use serde::{Deserialize, Serialize};

use crate::entities::Species;

/// The (species, max-count) pair governing what an enclosure may hold.
///
/// Replaced wholesale on reconfiguration; there are no `&mut` methods.
/// The species is a free-form label set by the science team, so construction
/// does not validate it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnclosureCapacity {
    species: String,
    max_occupants: u16,
}

impl EnclosureCapacity {
    pub fn new(species: impl Into<String>, max_occupants: u16) -> Self {
        Self {
            species: species.into(),
            max_occupants,
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn max_occupants(&self) -> u16 {
        self.max_occupants
    }

    /// The species label parsed into a known [`Species`], if it names one.
    pub fn species_kind(&self) -> Option<Species> {
        self.species.parse().ok()
    }

    /// Free slots left given the current occupant count (saturating at zero).
    pub fn remaining(&self, occupants: usize) -> usize {
        usize::from(self.max_occupants).saturating_sub(occupants)
    }
}
