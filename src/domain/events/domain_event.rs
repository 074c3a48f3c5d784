//! # Domain Event Core
//!
//! The [`DomainEvent`] trait and shared [`EventMetadata`] carried by every
//! negotiation event.

use crate::domain::value_objects::{ListingId, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata attached to every domain event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// The listing the event belongs to.
    pub listing_id: ListingId,
    /// When the event was emitted.
    pub timestamp: Timestamp,
}

impl EventMetadata {
    /// Creates metadata for an event on the given listing.
    #[must_use]
    pub fn for_listing(listing_id: ListingId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            listing_id,
            timestamp: Timestamp::now(),
        }
    }
}

/// Behavior common to all negotiation domain events.
pub trait DomainEvent {
    /// Returns the unique event identifier.
    fn event_id(&self) -> Uuid;

    /// Returns the listing the event belongs to.
    fn listing_id(&self) -> ListingId;

    /// Returns when the event was emitted.
    fn timestamp(&self) -> Timestamp;

    /// Returns a stable event name for logging and routing.
    fn event_name(&self) -> &'static str;
}
