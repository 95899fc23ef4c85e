//! Entities: plain records with identity

pub mod dinosaur;
pub mod place;

pub use dinosaur::{DinoFilter, Diet, Dinosaur, Species};
pub use place::{Place, PlaceFilter, PlaceKind};
