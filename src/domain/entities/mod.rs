//! # Domain Entities
//!
//! Aggregate roots and entities of the negotiation domain.
//!
//! - [`Listing`]: the negotiable item and its state machine (aggregate root)
//! - [`Offer`]: a single proposed price inside a listing's thread

pub mod listing;
pub mod offer;

pub use listing::Listing;
pub use offer::Offer;
