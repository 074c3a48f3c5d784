//! # Application Services
//!
//! Orchestration logic sitting between the transport layer and the domain.

pub mod negotiation;

pub use negotiation::{ListingView, NegotiationConfig, NegotiationService, OfferView};
