//! # Negotiation Events
//!
//! Domain events for the listing price-negotiation lifecycle.
//!
//! # Event Flow
//!
//! ```text
//! NegotiationStarted -> OfferSubmitted -> (repeat | OfferRejected -> repeat)
//!                                      -> OfferAccepted
//! ```
//!
//! `OfferRejected` ends only that offer; the negotiation stays open and more
//! `OfferSubmitted` events may follow.

use crate::domain::events::domain_event::{DomainEvent, EventMetadata};
use crate::domain::value_objects::{ListingId, OfferId, PartyRole, Price, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event emitted when a seeker opens a negotiation on a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegotiationStarted {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// The seeker who started the negotiation.
    pub initiator_id: UserId,
    /// The listed price captured as the negotiation baseline.
    pub initial_price: Price,
    /// The seeker's proposed starting price.
    pub starting_price: Price,
}

impl NegotiationStarted {
    /// Creates a new `NegotiationStarted` event.
    #[must_use]
    pub fn new(
        listing_id: ListingId,
        initiator_id: UserId,
        initial_price: Price,
        starting_price: Price,
    ) -> Self {
        Self {
            metadata: EventMetadata::for_listing(listing_id),
            initiator_id,
            initial_price,
            starting_price,
        }
    }
}

impl DomainEvent for NegotiationStarted {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn listing_id(&self) -> ListingId {
        self.metadata.listing_id
    }

    fn timestamp(&self) -> Timestamp {
        self.metadata.timestamp
    }

    fn event_name(&self) -> &'static str {
        "NegotiationStarted"
    }
}

/// Event emitted when either party submits an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferSubmitted {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// The newly created offer.
    pub offer_id: OfferId,
    /// Who submitted the offer.
    pub submitter_id: UserId,
    /// Which side the submitter acted on.
    pub submitter_role: PartyRole,
    /// The proposed price.
    pub price: Price,
}

impl OfferSubmitted {
    /// Creates a new `OfferSubmitted` event.
    #[must_use]
    pub fn new(
        listing_id: ListingId,
        offer_id: OfferId,
        submitter_id: UserId,
        submitter_role: PartyRole,
        price: Price,
    ) -> Self {
        Self {
            metadata: EventMetadata::for_listing(listing_id),
            offer_id,
            submitter_id,
            submitter_role,
            price,
        }
    }
}

impl DomainEvent for OfferSubmitted {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn listing_id(&self) -> ListingId {
        self.metadata.listing_id
    }

    fn timestamp(&self) -> Timestamp {
        self.metadata.timestamp
    }

    fn event_name(&self) -> &'static str {
        "OfferSubmitted"
    }
}

/// Event emitted when an offer is accepted, closing the negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferAccepted {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// The accepted offer.
    pub offer_id: OfferId,
    /// Who accepted it.
    pub acceptor_id: UserId,
    /// The agreed final price.
    pub final_price: Price,
}

impl OfferAccepted {
    /// Creates a new `OfferAccepted` event.
    #[must_use]
    pub fn new(
        listing_id: ListingId,
        offer_id: OfferId,
        acceptor_id: UserId,
        final_price: Price,
    ) -> Self {
        Self {
            metadata: EventMetadata::for_listing(listing_id),
            offer_id,
            acceptor_id,
            final_price,
        }
    }
}

impl DomainEvent for OfferAccepted {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn listing_id(&self) -> ListingId {
        self.metadata.listing_id
    }

    fn timestamp(&self) -> Timestamp {
        self.metadata.timestamp
    }

    fn event_name(&self) -> &'static str {
        "OfferAccepted"
    }
}

/// Event emitted when a single offer is rejected.
///
/// The negotiation itself stays open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRejected {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// The rejected offer.
    pub offer_id: OfferId,
    /// Who rejected it.
    pub rejector_id: UserId,
}

impl OfferRejected {
    /// Creates a new `OfferRejected` event.
    #[must_use]
    pub fn new(listing_id: ListingId, offer_id: OfferId, rejector_id: UserId) -> Self {
        Self {
            metadata: EventMetadata::for_listing(listing_id),
            offer_id,
            rejector_id,
        }
    }
}

impl DomainEvent for OfferRejected {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn listing_id(&self) -> ListingId {
        self.metadata.listing_id
    }

    fn timestamp(&self) -> Timestamp {
        self.metadata.timestamp
    }

    fn event_name(&self) -> &'static str {
        "OfferRejected"
    }
}

/// Enum containing all negotiation-related events.
///
/// This enum allows for type-safe handling of all negotiation events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NegotiationEvent {
    /// A negotiation was started.
    NegotiationStarted(NegotiationStarted),
    /// An offer was submitted.
    OfferSubmitted(OfferSubmitted),
    /// An offer was accepted.
    OfferAccepted(OfferAccepted),
    /// An offer was rejected.
    OfferRejected(OfferRejected),
}

impl DomainEvent for NegotiationEvent {
    fn event_id(&self) -> Uuid {
        match self {
            Self::NegotiationStarted(e) => e.event_id(),
            Self::OfferSubmitted(e) => e.event_id(),
            Self::OfferAccepted(e) => e.event_id(),
            Self::OfferRejected(e) => e.event_id(),
        }
    }

    fn listing_id(&self) -> ListingId {
        match self {
            Self::NegotiationStarted(e) => e.listing_id(),
            Self::OfferSubmitted(e) => e.listing_id(),
            Self::OfferAccepted(e) => e.listing_id(),
            Self::OfferRejected(e) => e.listing_id(),
        }
    }

    fn timestamp(&self) -> Timestamp {
        match self {
            Self::NegotiationStarted(e) => e.timestamp(),
            Self::OfferSubmitted(e) => e.timestamp(),
            Self::OfferAccepted(e) => e.timestamp(),
            Self::OfferRejected(e) => e.timestamp(),
        }
    }

    fn event_name(&self) -> &'static str {
        match self {
            Self::NegotiationStarted(e) => e.event_name(),
            Self::OfferSubmitted(e) => e.event_name(),
            Self::OfferAccepted(e) => e.event_name(),
            Self::OfferRejected(e) => e.event_name(),
        }
    }
}
