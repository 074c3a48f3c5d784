//! # Domain Events
//!
//! Events emitted as the negotiation lifecycle advances, published by the
//! application layer on a broadcast channel.

pub mod domain_event;
pub mod negotiation_events;

pub use domain_event::{DomainEvent, EventMetadata};
pub use negotiation_events::{
    NegotiationEvent, NegotiationStarted, OfferAccepted, OfferRejected, OfferSubmitted,
};
