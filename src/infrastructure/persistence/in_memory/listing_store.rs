//! # In-Memory Listing Store
//!
//! In-memory implementation of [`ListingStore`] with optimistic locking.
//!
//! This implementation uses a thread-safe `HashMap` for storage, making it
//! suitable for unit tests and single-process deployments without database
//! dependencies.

use crate::domain::entities::Listing;
use crate::domain::value_objects::ListingId;
use crate::infrastructure::persistence::traits::{
    ListingStore, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`ListingStore`].
///
/// Uses a thread-safe `HashMap` for storage. Saves enforce optimistic
/// locking: the caller must present the version it loaded, and the stored
/// copy gets its version bumped on success.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListingStore {
    storage: Arc<RwLock<HashMap<ListingId, Listing>>>,
}

impl InMemoryListingStore {
    /// Creates a new empty in-memory listing store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of listings in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all listings from the store.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl ListingStore for InMemoryListingStore {
    async fn save(&self, listing: &Listing) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;

        if let Some(existing) = storage.get(&listing.id())
            && existing.version() != listing.version()
        {
            return Err(RepositoryError::version_conflict(
                "Listing",
                listing.id().to_string(),
                listing.version(),
                existing.version(),
            ));
        }

        let mut stored = listing.clone();
        stored.bump_version();
        storage.insert(stored.id(), stored);
        Ok(())
    }

    async fn get(&self, id: &ListingId) -> RepositoryResult<Option<Listing>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Listing>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn find_negotiating(&self) -> RepositoryResult<Vec<Listing>> {
        let storage = self.storage.read().await;
        let negotiating: Vec<Listing> = storage
            .values()
            .filter(|l| l.negotiation_state().is_negotiating())
            .cloned()
            .collect();
        Ok(negotiating)
    }

    async fn delete(&self, id: &ListingId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{PartyRole, Price, Principal, UserId};

    fn create_test_listing(title: &str) -> Listing {
        Listing::new(
            ListingId::new_v4(),
            UserId::new("provider-1"),
            title,
            Price::new(50.0).unwrap(),
        )
    }

    fn seeker() -> Principal {
        Principal::new(UserId::new("seeker-1"), PartyRole::Seeker)
    }

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = InMemoryListingStore::new();
        assert!(store.is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_and_get() {
        let store = InMemoryListingStore::new();
        let listing = create_test_listing("Cleaning");
        let id = listing.id();

        store.save(&listing).await.unwrap();

        let retrieved = store.get(&id).await.unwrap().unwrap();
        assert_eq!(retrieved.id(), id);
        assert_eq!(retrieved.title(), "Cleaning");
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let store = InMemoryListingStore::new();
        let result = store.get(&ListingId::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn save_bumps_version() {
        let store = InMemoryListingStore::new();
        let listing = create_test_listing("Cleaning");
        store.save(&listing).await.unwrap();

        let stored = store.get(&listing.id()).await.unwrap().unwrap();
        assert_eq!(stored.version(), 1);
    }

    #[tokio::test]
    async fn save_with_loaded_version_succeeds() {
        let store = InMemoryListingStore::new();
        let listing = create_test_listing("Cleaning");
        store.save(&listing).await.unwrap();

        let mut loaded = store.get(&listing.id()).await.unwrap().unwrap();
        loaded
            .start_negotiation(&seeker(), Price::new(40.0).unwrap())
            .unwrap();
        store.save(&loaded).await.unwrap();

        let stored = store.get(&listing.id()).await.unwrap().unwrap();
        assert_eq!(stored.version(), 2);
        assert!(stored.negotiation_state().is_negotiating());
    }

    #[tokio::test]
    async fn save_with_stale_version_conflicts() {
        let store = InMemoryListingStore::new();
        let listing = create_test_listing("Cleaning");
        store.save(&listing).await.unwrap();

        let stale = store.get(&listing.id()).await.unwrap().unwrap();
        let fresh = store.get(&listing.id()).await.unwrap().unwrap();
        store.save(&fresh).await.unwrap();

        let result = store.save(&stale).await;
        assert!(matches!(
            result,
            Err(RepositoryError::VersionConflict { expected: 1, actual: 2, .. })
        ));
    }

    #[tokio::test]
    async fn find_negotiating_filters_by_state() {
        let store = InMemoryListingStore::new();
        let quiet = create_test_listing("Quiet");
        let mut busy = create_test_listing("Busy");
        busy.start_negotiation(&seeker(), Price::new(40.0).unwrap())
            .unwrap();

        store.save(&quiet).await.unwrap();
        store.save(&busy).await.unwrap();

        let negotiating = store.find_negotiating().await.unwrap();
        assert_eq!(negotiating.len(), 1);
        assert_eq!(negotiating.first().unwrap().id(), busy.id());
    }

    #[tokio::test]
    async fn delete_removes_listing() {
        let store = InMemoryListingStore::new();
        let listing = create_test_listing("Cleaning");
        store.save(&listing).await.unwrap();

        assert!(store.delete(&listing.id()).await.unwrap());
        assert!(!store.delete(&listing.id()).await.unwrap());
        assert!(store.get(&listing.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_empties_store() {
        let store = InMemoryListingStore::new();
        store.save(&create_test_listing("a")).await.unwrap();
        store.save(&create_test_listing("b")).await.unwrap();

        store.clear().await;
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
