extern crate self as dinopark_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Enclosure, EnclosureControl, EnclosureFilter, EnclosureState};
pub use entities::{DinoFilter, Diet, Dinosaur, Place, PlaceFilter, PlaceKind, Species};
pub use error::{DomainError, ErrorKind};
pub use ids::{DinosaurId, EnclosureId, PlaceId};
pub use value_objects::{DinoName, EnclosureCapacity, PlaceLocation, PlaceName, PowerState};
