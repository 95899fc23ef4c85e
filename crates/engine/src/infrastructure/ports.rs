//! Port traits for park control.

use async_trait::async_trait;

use dinopark_domain::{
    DinoFilter, Dinosaur, DinosaurId, DomainError, Enclosure, EnclosureFilter, EnclosureId,
    EnclosureState, Place, PlaceFilter, PlaceId,
};

/// Park-wide control surface.
///
/// Place control is backed by the place registry. Enclosure and dino control
/// are part of the contract but return `DomainError::NotImplemented`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParkControl: Send + Sync {
    // =========================================================================
    // Place control
    // =========================================================================

    /// List places, optionally by kind.
    async fn list_places(&self, filter: Option<PlaceFilter>) -> Result<Vec<Place>, DomainError>;
    /// Register a new lab or enclosure site.
    async fn register_place(&self, place: Place) -> Result<Place, DomainError>;
    /// Deregister a decommissioned place.
    async fn remove_place(&self, place: &Place) -> Result<Place, DomainError>;

    // =========================================================================
    // Enclosure control
    // =========================================================================

    async fn list_enclosures(
        &self,
        filter: Option<EnclosureFilter>,
    ) -> Result<Vec<EnclosureState>, DomainError>;
    async fn register_enclosure(&self, enclosure: Enclosure)
        -> Result<EnclosureState, DomainError>;
    async fn remove_enclosure(&self, id: EnclosureId) -> Result<EnclosureState, DomainError>;

    // =========================================================================
    // Dino control
    // =========================================================================

    async fn list_dinos(&self, filter: Option<DinoFilter>) -> Result<Vec<Dinosaur>, DomainError>;
    async fn register_dino(&self, dino: Dinosaur) -> Result<Dinosaur, DomainError>;
    /// Removes a registered dino (e.g. after an incident during transfer).
    async fn remove_dino(&self, id: DinosaurId) -> Result<Dinosaur, DomainError>;
    /// Move dinos to a place. Safety-critical: loose dinos endanger handler
    /// staff, so moves are meant to be automated rather than manual.
    async fn move_dinos(
        &self,
        dinos: Vec<DinosaurId>,
        destination: PlaceId,
    ) -> Result<Vec<DinosaurId>, DomainError>;
}
