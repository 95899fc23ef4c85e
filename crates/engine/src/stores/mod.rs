//! In-memory stores for park state.

pub mod enclosure;
pub mod places;

pub use enclosure::EnclosureHandle;
pub use places::PlaceStore;
