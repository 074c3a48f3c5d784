//! # Store Traits
//!
//! Port definitions for persistence abstraction.
//!
//! This module defines the [`ListingStore`] trait (port) that abstracts
//! listing persistence. Implementations can use different backends like
//! PostgreSQL or in-memory storage.
//!
//! # Examples
//!
//! ```ignore
//! use bargain_engine::infrastructure::persistence::traits::ListingStore;
//!
//! async fn count_negotiations(store: &impl ListingStore) {
//!     let open = store.find_negotiating().await.unwrap();
//!     println!("{} listings under negotiation", open.len());
//! }
//! ```

use crate::domain::entities::Listing;
use crate::domain::value_objects::ListingId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Optimistic locking conflict.
    #[error("Version conflict: {entity_type} with id {id} has been modified")]
    VersionConflict {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
        /// Expected version.
        expected: u64,
        /// Actual version.
        actual: u64,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a version conflict error.
    #[must_use]
    pub fn version_conflict(
        entity_type: &'static str,
        id: impl Into<String>,
        expected: u64,
        actual: u64,
    ) -> Self {
        Self::VersionConflict {
            entity_type,
            id: id.into(),
            expected,
            actual,
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a version conflict error.
    #[must_use]
    pub fn is_version_conflict(&self) -> bool {
        matches!(self, Self::VersionConflict { .. })
    }
}

/// Result type for store operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Store for listing aggregates.
///
/// Provides persistence for [`Listing`] entities including their full
/// negotiation state.
///
/// # Examples
///
/// ```ignore
/// use bargain_engine::infrastructure::persistence::traits::ListingStore;
///
/// async fn example(store: &impl ListingStore) {
///     let listing = store.get(&listing_id).await?;
///     let open = store.find_negotiating().await?;
/// }
/// ```
#[async_trait]
pub trait ListingStore: Send + Sync + fmt::Debug {
    /// Saves a listing.
    ///
    /// If the listing already exists, it will be updated. Uses optimistic
    /// locking via the version field: the caller must save the same version
    /// it loaded, and the stored copy gets its version bumped.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::VersionConflict` if the listing has been
    /// modified since it was loaded.
    async fn save(&self, listing: &Listing) -> RepositoryResult<()>;

    /// Gets a listing by ID.
    ///
    /// Returns `None` if the listing does not exist.
    async fn get(&self, id: &ListingId) -> RepositoryResult<Option<Listing>>;

    /// Gets all listings.
    async fn get_all(&self) -> RepositoryResult<Vec<Listing>>;

    /// Finds listings with an open negotiation (`Pending` or `InProgress`).
    async fn find_negotiating(&self) -> RepositoryResult<Vec<Listing>>;

    /// Deletes a listing by ID.
    ///
    /// Returns `Ok(true)` if the listing was deleted, `Ok(false)` if it
    /// didn't exist.
    async fn delete(&self, id: &ListingId) -> RepositoryResult<bool>;

    /// Counts all listings.
    async fn count(&self) -> RepositoryResult<u64>;
}
