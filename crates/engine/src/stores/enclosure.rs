//! Shared enclosure handle.
//!
//! Each enclosure sits behind its own mutex, so capacity and power commands
//! on one enclosure serialize without blocking the rest of the park.

use std::sync::Arc;

use tokio::sync::Mutex;

use dinopark_domain::{
    DinoFilter, Dinosaur, DomainError, Enclosure, EnclosureCapacity, EnclosureControl,
    EnclosureId, EnclosureState, PowerState,
};

/// Cloneable, lock-guarded reference to a single [`Enclosure`].
#[derive(Clone)]
pub struct EnclosureHandle {
    id: EnclosureId,
    enclosure: Arc<Mutex<Enclosure>>,
}

impl EnclosureHandle {
    pub fn new(enclosure: Enclosure) -> Self {
        Self {
            id: enclosure.id(),
            enclosure: Arc::new(Mutex::new(enclosure)),
        }
    }

    pub fn id(&self) -> EnclosureId {
        self.id
    }

    /// See [`EnclosureControl::set_capacity`].
    pub async fn set_capacity(
        &self,
        capacity: Option<EnclosureCapacity>,
    ) -> Result<EnclosureCapacity, DomainError> {
        let mut enclosure = self.enclosure.lock().await;
        match enclosure.set_capacity(capacity) {
            Ok(applied) => {
                tracing::debug!(
                    enclosure_id = %self.id,
                    species = %applied.species(),
                    max_occupants = applied.max_occupants(),
                    "Enclosure capacity set"
                );
                Ok(applied)
            }
            Err(err) => {
                tracing::warn!(
                    enclosure_id = %self.id,
                    occupants = enclosure.occupant_count(),
                    kind = err.kind().as_str(),
                    error = %err,
                    "Enclosure capacity change refused"
                );
                Err(err)
            }
        }
    }

    /// See [`EnclosureControl::command_power`].
    pub async fn command_power(&self, target: PowerState) -> Result<PowerState, DomainError> {
        let mut enclosure = self.enclosure.lock().await;
        let from = enclosure.power_state();
        match enclosure.command_power(target) {
            Ok(state) => {
                if state != from {
                    tracing::debug!(
                        enclosure_id = %self.id,
                        %from,
                        to = %state,
                        "Enclosure power changed"
                    );
                }
                Ok(state)
            }
            Err(err) => {
                tracing::warn!(
                    enclosure_id = %self.id,
                    occupants = enclosure.occupant_count(),
                    requested = %target,
                    kind = err.kind().as_str(),
                    error = %err,
                    "Enclosure power change refused"
                );
                Err(err)
            }
        }
    }

    pub async fn power_state(&self) -> PowerState {
        self.enclosure.lock().await.power_state()
    }

    pub async fn read_state(&self) -> EnclosureState {
        self.enclosure.lock().await.read_state()
    }

    pub async fn list_occupants(&self, filter: Option<&DinoFilter>) -> Vec<Dinosaur> {
        self.enclosure.lock().await.list_occupants(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinopark_domain::{ErrorKind, Species};

    fn occupied_handle() -> EnclosureHandle {
        let sarah = Dinosaur::new("Sarah", Species::Triceratops).unwrap();
        EnclosureHandle::new(Enclosure::from_storage(
            EnclosureId::new(),
            Some(EnclosureCapacity::new("Triceratops", 2)),
            vec![sarah],
            PowerState::Active,
        ))
    }

    #[tokio::test]
    async fn commands_apply_to_shared_enclosure() {
        let handle = EnclosureHandle::new(Enclosure::new());
        let other = handle.clone();

        let capacity = EnclosureCapacity::new("Triceratops", 2);
        assert_eq!(
            handle.set_capacity(Some(capacity.clone())).await.unwrap(),
            capacity
        );
        assert_eq!(
            other.command_power(PowerState::Active).await.unwrap(),
            PowerState::Active
        );

        let state = handle.read_state().await;
        assert_eq!(state.id, handle.id());
        assert_eq!(state.capacity, Some(capacity));
        assert_eq!(state.power.to_string(), "ACTIVE");
    }

    #[tokio::test]
    async fn refused_power_down_leaves_state() {
        let handle = occupied_handle();
        let err = handle.command_power(PowerState::Down).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(handle.power_state().await, PowerState::Active);
    }

    #[tokio::test]
    async fn refused_capacity_change_while_occupied() {
        let handle = occupied_handle();
        let err = handle
            .set_capacity(Some(EnclosureCapacity::new("Stegosaurus", 5)))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(
            handle.read_state().await.capacity,
            Some(EnclosureCapacity::new("Triceratops", 2))
        );
    }

    #[tokio::test]
    async fn lists_occupants_through_lock() {
        let handle = occupied_handle();
        assert_eq!(handle.list_occupants(None).await.len(), 1);
        assert!(handle
            .list_occupants(Some(&DinoFilter::by_species(Species::Stegosaurus)))
            .await
            .is_empty());
    }
}
