//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Enforces its invariants inside its own mutations

pub mod enclosure;

pub use enclosure::{Enclosure, EnclosureControl, EnclosureFilter, EnclosureState};
