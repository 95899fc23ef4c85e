//! Dinosaur entity - an animal registered with the park
//!
//! Diet is derived from species and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::DinoName;
use crate::DinosaurId;

/// The closed set of species the park houses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Species {
    Tyrannosaurus,
    Velociraptor,
    Spinosaurus,
    Megalosaurus,
    Brachiosaurus,
    Stegosaurus,
    Ankylosaurus,
    Triceratops,
}

impl Species {
    pub const ALL: [Species; 8] = [
        Self::Tyrannosaurus,
        Self::Velociraptor,
        Self::Spinosaurus,
        Self::Megalosaurus,
        Self::Brachiosaurus,
        Self::Stegosaurus,
        Self::Ankylosaurus,
        Self::Triceratops,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tyrannosaurus => "Tyrannosaurus",
            Self::Velociraptor => "Velociraptor",
            Self::Spinosaurus => "Spinosaurus",
            Self::Megalosaurus => "Megalosaurus",
            Self::Brachiosaurus => "Brachiosaurus",
            Self::Stegosaurus => "Stegosaurus",
            Self::Ankylosaurus => "Ankylosaurus",
            Self::Triceratops => "Triceratops",
        }
    }

    /// Diet class for this species.
    ///
    /// No species currently maps to [`Diet::Omnivore`].
    pub fn diet(&self) -> Diet {
        match self {
            Self::Tyrannosaurus | Self::Velociraptor | Self::Spinosaurus | Self::Megalosaurus => {
                Diet::Carnivore
            }
            Self::Brachiosaurus | Self::Stegosaurus | Self::Ankylosaurus | Self::Triceratops => {
                Diet::Herbivore
            }
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|species| species.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::invalid_argument(format!("Unknown species: {}", s)))
    }
}

impl TryFrom<String> for Species {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Derived diet classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    Omnivore,
    Carnivore,
    Herbivore,
}

impl Diet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Omnivore => "Omnivore",
            Self::Carnivore => "Carnivore",
            Self::Herbivore => "Herbivore",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dinosaur. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dinosaur {
    pub id: DinosaurId,
    pub name: DinoName,
    pub species: Species,
}

impl Dinosaur {
    /// Create a dinosaur with a freshly generated ID.
    ///
    /// # Errors
    ///
    /// `DomainError::MissingArgument` if `name` is empty.
    pub fn new(name: impl Into<String>, species: Species) -> Result<Self, DomainError> {
        Ok(Self {
            id: DinosaurId::new(),
            name: DinoName::new(name)?,
            species,
        })
    }

    pub fn diet(&self) -> Diet {
        self.species.diet()
    }
}

/// Optional-predicate filter over dinosaurs. Set predicates are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DinoFilter {
    pub by_diet: Option<Diet>,
    pub by_species: Option<Species>,
    pub by_name: Option<String>,
}

impl DinoFilter {
    pub fn by_diet(diet: Diet) -> Self {
        Self {
            by_diet: Some(diet),
            ..Self::default()
        }
    }

    pub fn by_species(species: Species) -> Self {
        Self {
            by_species: Some(species),
            ..Self::default()
        }
    }

    pub fn matches(&self, dino: &Dinosaur) -> bool {
        self.by_diet.map_or(true, |diet| dino.diet() == diet)
            && self.by_species.map_or(true, |species| dino.species == species)
            && self
                .by_name
                .as_deref()
                .map_or(true, |name| dino.name.as_str() == name)
    }
}
