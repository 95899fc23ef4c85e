//! Enclosure aggregate - the physical cage, digitally represented
//!
//! # Safety invariants
//!
//! - The capacity policy may only change while the enclosure is empty.
//! - Power may only go `Down` while the enclosure is empty.
//!
//! Both are enforced inside the aggregate so that no caller can bypass them;
//! the occupant list is private and only reachable through read accessors.

use serde::{Deserialize, Serialize};

use crate::entities::{DinoFilter, Diet, Dinosaur, Species};
use crate::error::DomainError;
use crate::value_objects::{EnclosureCapacity, PowerState};
use crate::{DinosaurId, EnclosureId};

/// Control surface of a single enclosure.
pub trait EnclosureControl {
    /// Replace the capacity policy wholesale.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if `capacity` is `None`
    /// - `Conflict` if any dinosaur is in the enclosure, whatever the payload
    fn set_capacity(
        &mut self,
        capacity: Option<EnclosureCapacity>,
    ) -> Result<EnclosureCapacity, DomainError>;

    /// Request a power transition and return the resulting state.
    ///
    /// Requesting the current state is a no-op. Going `Down` with occupants
    /// present fails with `Conflict` and leaves the state unchanged.
    fn command_power(&mut self, target: PowerState) -> Result<PowerState, DomainError>;

    /// Snapshot of the full enclosure state. No side effects.
    fn read_state(&self) -> EnclosureState;

    /// Occupants matching `filter` (all occupants when `None`).
    fn list_occupants(&self, filter: Option<&DinoFilter>) -> Vec<Dinosaur>;

    /// Move dinosaurs into this enclosure.
    ///
    /// Moving dinos puts handler staff and park infrastructure at risk and
    /// there is no validated model for it yet, so this always returns
    /// `NotImplemented`.
    fn move_occupants(&mut self, dinos: &[DinosaurId]) -> Result<Vec<DinosaurId>, DomainError>;
}

/// Serializable snapshot returned by [`EnclosureControl::read_state`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnclosureState {
    pub id: EnclosureId,
    pub capacity: Option<EnclosureCapacity>,
    pub occupants: Vec<Dinosaur>,
    pub power: PowerState,
}

/// An enclosure in the park
///
/// # Example
///
/// ```
/// use dinopark_domain::aggregates::{Enclosure, EnclosureControl};
/// use dinopark_domain::value_objects::{EnclosureCapacity, PowerState};
///
/// let mut enclosure = Enclosure::new();
/// let capacity = enclosure
///     .set_capacity(Some(EnclosureCapacity::new("Triceratops", 2)))
///     .unwrap();
/// assert_eq!(capacity.max_occupants(), 2);
/// assert_eq!(enclosure.command_power(PowerState::Active).unwrap(), PowerState::Active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    id: EnclosureId,
    capacity: Option<EnclosureCapacity>,
    occupants: Vec<Dinosaur>,
    power: PowerState,
}

impl Enclosure {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an empty, powered-down enclosure with no capacity policy.
    pub fn new() -> Self {
        Self {
            id: EnclosureId::new(),
            capacity: None,
            occupants: Vec::new(),
            power: PowerState::Down,
        }
    }

    /// Reconstruct an enclosure from storage.
    pub fn from_storage(
        id: EnclosureId,
        capacity: Option<EnclosureCapacity>,
        occupants: Vec<Dinosaur>,
        power: PowerState,
    ) -> Self {
        Self {
            id,
            capacity,
            occupants,
            power,
        }
    }

    /// Set the initial capacity policy (construction only).
    pub fn with_capacity(mut self, capacity: EnclosureCapacity) -> Self {
        self.capacity = Some(capacity);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> EnclosureId {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> Option<&EnclosureCapacity> {
        self.capacity.as_ref()
    }

    #[inline]
    pub fn power_state(&self) -> PowerState {
        self.power
    }

    #[inline]
    pub fn occupants(&self) -> &[Dinosaur] {
        &self.occupants
    }

    #[inline]
    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Free slots under the current policy, `None` while no policy is set.
    pub fn capacity_remaining(&self) -> Option<usize> {
        self.capacity
            .as_ref()
            .map(|cap| cap.remaining(self.occupants.len()))
    }
}

impl Default for Enclosure {
    fn default() -> Self {
        Self::new()
    }
}

impl EnclosureControl for Enclosure {
    fn set_capacity(
        &mut self,
        capacity: Option<EnclosureCapacity>,
    ) -> Result<EnclosureCapacity, DomainError> {
        let capacity = capacity.ok_or_else(|| {
            DomainError::invalid_configuration("invalid enclosure configuration requested")
        })?;
        if !self.is_empty() {
            return Err(DomainError::conflict(format!(
                "unable to adjust enclosure capacity while {} dinos are in the enclosure",
                self.occupants.len()
            )));
        }
        self.capacity = Some(capacity.clone());
        Ok(capacity)
    }

    fn command_power(&mut self, target: PowerState) -> Result<PowerState, DomainError> {
        if target == self.power {
            return Ok(self.power);
        }
        if target == PowerState::Down && !self.is_empty() {
            return Err(DomainError::conflict(format!(
                "unable to power down enclosure while {} dinos are in the enclosure",
                self.occupants.len()
            )));
        }
        self.power = target;
        Ok(self.power)
    }

    fn read_state(&self) -> EnclosureState {
        EnclosureState {
            id: self.id,
            capacity: self.capacity.clone(),
            occupants: self.occupants.clone(),
            power: self.power,
        }
    }

    fn list_occupants(&self, filter: Option<&DinoFilter>) -> Vec<Dinosaur> {
        self.occupants
            .iter()
            .filter(|dino| filter.map_or(true, |f| f.matches(dino)))
            .cloned()
            .collect()
    }

    fn move_occupants(&mut self, _dinos: &[DinosaurId]) -> Result<Vec<DinosaurId>, DomainError> {
        Err(DomainError::not_implemented("move_occupants"))
    }
}

/// Optional-predicate filter over enclosures. Set predicates are ANDed.
///
/// Species, diet and remaining-capacity predicates never match an enclosure
/// without a capacity policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnclosureFilter {
    pub by_power_state: Option<PowerState>,
    pub by_number_of_occupants: Option<usize>,
    pub by_capacity_remaining: Option<usize>,
    pub by_species: Option<Species>,
    pub by_diet: Option<Diet>,
}

impl EnclosureFilter {
    pub fn matches(&self, enclosure: &Enclosure) -> bool {
        let housed = enclosure
            .capacity()
            .and_then(EnclosureCapacity::species_kind);
        self.by_power_state
            .map_or(true, |state| enclosure.power_state() == state)
            && self
                .by_number_of_occupants
                .map_or(true, |count| enclosure.occupant_count() == count)
            && self
                .by_capacity_remaining
                .map_or(true, |free| enclosure.capacity_remaining() == Some(free))
            && self
                .by_species
                .map_or(true, |species| housed == Some(species))
            && self
                .by_diet
                .map_or(true, |diet| housed.is_some_and(|species| species.diet() == diet))
    }
}
