//! Park composition root.

use async_trait::async_trait;

use dinopark_domain::{
    DinoFilter, Dinosaur, DinosaurId, DomainError, Enclosure, EnclosureFilter, EnclosureId,
    EnclosureState, Place, PlaceFilter, PlaceId,
};

use crate::infrastructure::ports::ParkControl;
use crate::stores::{EnclosureHandle, PlaceStore};

/// The park: every dinosaur, enclosure and place it holds.
///
/// Only place control goes through a live registry; dinosaurs and enclosures
/// are fixed at construction.
pub struct Park {
    dinos: Vec<Dinosaur>,
    enclosures: Vec<EnclosureHandle>,
    places: PlaceStore,
}

impl Park {
    pub fn new() -> Self {
        Self {
            dinos: Vec::new(),
            enclosures: Vec::new(),
            places: PlaceStore::new(),
        }
    }

    pub fn with_enclosures(mut self, enclosures: impl IntoIterator<Item = Enclosure>) -> Self {
        self.enclosures
            .extend(enclosures.into_iter().map(EnclosureHandle::new));
        self
    }

    pub fn with_dinos(mut self, dinos: impl IntoIterator<Item = Dinosaur>) -> Self {
        self.dinos.extend(dinos);
        self
    }

    pub fn dinos(&self) -> &[Dinosaur] {
        &self.dinos
    }

    pub fn enclosures(&self) -> &[EnclosureHandle] {
        &self.enclosures
    }

    /// Look up an enclosure by ID.
    pub fn enclosure(&self, id: EnclosureId) -> Option<EnclosureHandle> {
        self.enclosures.iter().find(|e| e.id() == id).cloned()
    }

    pub fn places(&self) -> &PlaceStore {
        &self.places
    }
}

impl Default for Park {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParkControl for Park {
    async fn list_places(&self, filter: Option<PlaceFilter>) -> Result<Vec<Place>, DomainError> {
        Ok(self.places.list(filter.as_ref()).await)
    }

    async fn register_place(&self, place: Place) -> Result<Place, DomainError> {
        self.places.register(place).await
    }

    async fn remove_place(&self, place: &Place) -> Result<Place, DomainError> {
        self.places.remove(place).await
    }

    async fn list_enclosures(
        &self,
        _filter: Option<EnclosureFilter>,
    ) -> Result<Vec<EnclosureState>, DomainError> {
        Err(DomainError::not_implemented("list_enclosures"))
    }

    async fn register_enclosure(
        &self,
        _enclosure: Enclosure,
    ) -> Result<EnclosureState, DomainError> {
        Err(DomainError::not_implemented("register_enclosure"))
    }

    async fn remove_enclosure(&self, _id: EnclosureId) -> Result<EnclosureState, DomainError> {
        Err(DomainError::not_implemented("remove_enclosure"))
    }

    async fn list_dinos(&self, _filter: Option<DinoFilter>) -> Result<Vec<Dinosaur>, DomainError> {
        Err(DomainError::not_implemented("list_dinos"))
    }

    async fn register_dino(&self, _dino: Dinosaur) -> Result<Dinosaur, DomainError> {
        Err(DomainError::not_implemented("register_dino"))
    }

    async fn remove_dino(&self, _id: DinosaurId) -> Result<Dinosaur, DomainError> {
        Err(DomainError::not_implemented("remove_dino"))
    }

    async fn move_dinos(
        &self,
        _dinos: Vec<DinosaurId>,
        _destination: PlaceId,
    ) -> Result<Vec<DinosaurId>, DomainError> {
        Err(DomainError::not_implemented("move_dinos"))
    }
}
