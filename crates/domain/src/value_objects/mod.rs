//! Value objects: validated names, capacity policy, power state

mod capacity;
mod names;
mod power;

pub use capacity::EnclosureCapacity;
pub use names::{DinoName, PlaceLocation, PlaceName, MAX_NAME_LENGTH};
pub use power::PowerState;

pub(crate) use names::validate_required;
