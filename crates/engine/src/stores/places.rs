//! Place registry.
//!
//! Identifier-keyed storage of [`Place`] records behind a single lock. Writes
//! take the write lock; listing takes the read lock, so a listing never
//! observes a half-applied registration or removal.

use std::collections::HashMap;

use tokio::sync::RwLock;

use dinopark_domain::{DomainError, Place, PlaceFilter, PlaceId};

/// Thread-safe registry of places, keyed by [`PlaceId`].
///
/// Owns every registered place; [`PlaceStore::remove`] hands ownership back.
pub struct PlaceStore {
    places: RwLock<HashMap<PlaceId, Place>>,
}

impl PlaceStore {
    pub fn new() -> Self {
        Self {
            places: RwLock::new(HashMap::new()),
        }
    }

    /// Register a place and return the stored record.
    ///
    /// A place whose ID is already registered replaces the existing entry.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidArgument` if the place has an empty name or location.
    pub async fn register(&self, place: Place) -> Result<Place, DomainError> {
        place.validate()?;

        let mut places = self.places.write().await;
        if let Some(previous) = places.insert(place.id, place.clone()) {
            tracing::warn!(
                place_id = %place.id,
                previous_name = %previous.name,
                name = %place.name,
                "Place registration replaced an existing entry"
            );
        } else {
            tracing::debug!(place_id = %place.id, kind = ?place.kind, "Place registered");
        }
        Ok(place)
    }

    /// Remove a place by its ID and return the record that was stored.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidArgument` if `place` fails validation
    /// - `DomainError::NotFound` if no place with that ID is registered
    pub async fn remove(&self, place: &Place) -> Result<Place, DomainError> {
        place.validate()?;

        let mut places = self.places.write().await;
        let removed = places
            .remove(&place.id)
            .ok_or_else(|| DomainError::not_found("Place", place.id.to_string()))?;
        tracing::debug!(place_id = %removed.id, remaining = places.len(), "Place removed");
        Ok(removed)
    }

    /// List places matching `filter`, or every place when `None`.
    ///
    /// Order is unspecified.
    pub async fn list(&self, filter: Option<&PlaceFilter>) -> Vec<Place> {
        let places = self.places.read().await;
        places
            .values()
            .filter(|place| filter.map_or(true, |f| f.matches(place)))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: PlaceId) -> Option<Place> {
        self.places.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.places.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.places.read().await.is_empty()
    }
}

impl Default for PlaceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use dinopark_domain::{ErrorKind, PlaceKind};

    fn place(name: &str, location: &str, kind: PlaceKind) -> Place {
        Place::new(name, location, kind).unwrap()
    }

    mod list {
        use super::*;

        #[tokio::test]
        async fn empty_registry_lists_nothing() {
            let store = PlaceStore::new();
            assert!(store.list(None).await.is_empty());
            assert!(store
                .list(Some(&PlaceFilter::by_kind(PlaceKind::Lab)))
                .await
                .is_empty());
        }

        #[tokio::test]
        async fn kind_filter_without_match_returns_nothing() {
            let store = PlaceStore::new();
            store
                .register(place("Entry doesn't match filter", "Loc1", PlaceKind::Enclosure))
                .await
                .unwrap();
            let labs = store.list(Some(&PlaceFilter::by_kind(PlaceKind::Lab))).await;
            assert!(labs.is_empty());
        }

        #[tokio::test]
        async fn kind_filter_selects_matching_places() {
            let store = PlaceStore::new();
            store
                .register(place("Place1", "Loc1", PlaceKind::Enclosure))
                .await
                .unwrap();
            let lab = store
                .register(place("Place2", "Loc2", PlaceKind::Lab))
                .await
                .unwrap();

            let labs = store.list(Some(&PlaceFilter::by_kind(PlaceKind::Lab))).await;
            assert_eq!(labs, vec![lab]);
        }

        #[tokio::test]
        async fn no_filter_returns_all() {
            let store = PlaceStore::new();
            store
                .register(place("Place1", "Loc1", PlaceKind::Enclosure))
                .await
                .unwrap();
            store
                .register(place("Place2", "Loc2", PlaceKind::Lab))
                .await
                .unwrap();

            let mut names: Vec<_> = store.list(None).await.into_iter().map(|p| p.name).collect();
            names.sort();
            assert_eq!(names, vec!["Place1", "Place2"]);
        }
    }

    mod register {
        use super::*;

        #[tokio::test]
        async fn register_then_list_round_trips() {
            let store = PlaceStore::new();
            let stored = store
                .register(place("Place1", "Loc1", PlaceKind::Lab))
                .await
                .unwrap();
            assert_eq!(store.list(None).await, vec![stored.clone()]);
            assert_eq!(store.get(stored.id).await, Some(stored));
        }

        #[tokio::test]
        async fn register_adds_to_existing_entries() {
            let store = PlaceStore::new();
            store
                .register(place("Place1", "Loc1", PlaceKind::Enclosure))
                .await
                .unwrap();
            store
                .register(place("Place2", "Loc2", PlaceKind::Lab))
                .await
                .unwrap();
            assert_eq!(store.len().await, 2);
        }

        #[tokio::test]
        async fn invalid_place_is_rejected() {
            let store = PlaceStore::new();
            let broken = Place {
                id: PlaceId::nil(),
                name: String::new(),
                location: "Loc1".to_string(),
                kind: PlaceKind::Lab,
            };
            let err = store.register(broken).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(store.is_empty().await);
        }

        #[tokio::test]
        async fn duplicate_id_replaces_entry() {
            let store = PlaceStore::new();
            let original = place("Place1", "Loc1", PlaceKind::Lab);
            let replacement = Place {
                name: "Place1 (rebuilt)".to_string(),
                ..original.clone()
            };
            store.register(original).await.unwrap();
            store.register(replacement.clone()).await.unwrap();

            assert_eq!(store.len().await, 1);
            assert_eq!(store.get(replacement.id).await, Some(replacement));
        }

        #[tokio::test]
        async fn concurrent_registrations_are_all_kept() {
            let store = Arc::new(PlaceStore::new());
            let mut handles = Vec::new();
            for i in 0..32 {
                let store = Arc::clone(&store);
                handles.push(tokio::spawn(async move {
                    store
                        .register(place(&format!("Paddock {i}"), "East dock", PlaceKind::Enclosure))
                        .await
                }));
            }
            for handle in handles {
                handle.await.unwrap().unwrap();
            }
            assert_eq!(store.len().await, 32);
        }
    }

    mod remove {
        use super::*;

        #[tokio::test]
        async fn remove_returns_the_stored_place() {
            let store = PlaceStore::new();
            let keep = store
                .register(place("Place1", "Loc1", PlaceKind::Lab))
                .await
                .unwrap();
            let gone = store
                .register(place("Place2", "Loc2", PlaceKind::Enclosure))
                .await
                .unwrap();

            let removed = store.remove(&gone).await.unwrap();
            assert_eq!(removed, gone);
            assert_eq!(store.len().await, 1);
            assert_eq!(store.list(None).await, vec![keep]);
        }

        #[tokio::test]
        async fn remove_unknown_place_is_not_found() {
            let store = PlaceStore::new();
            store
                .register(place("Place1", "Loc1", PlaceKind::Lab))
                .await
                .unwrap();

            let stranger = place("Place2", "Loc2", PlaceKind::Lab);
            let err = store.remove(&stranger).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound);
            assert_eq!(store.len().await, 1);
        }

        #[tokio::test]
        async fn remove_invalid_place_is_rejected() {
            let store = PlaceStore::new();
            let registered = store
                .register(place("Place1", "Loc1", PlaceKind::Lab))
                .await
                .unwrap();
            let broken = Place {
                location: String::new(),
                ..registered
            };
            let err = store.remove(&broken).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert_eq!(store.len().await, 1);
        }
    }
}
