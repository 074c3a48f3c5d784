//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ListingId`], [`OfferId`]: UUID-based identifiers
//! - [`UserId`]: opaque string identifier from the identity provider
//!
//! ## Numeric Types
//!
//! - [`Price`]: finite, strictly positive decimal price
//!
//! ## Domain Enums
//!
//! - [`NegotiationState`]: listing-level negotiation lifecycle
//! - [`OfferStatus`]: per-offer resolution status
//! - [`PartyRole`]: provider or seeker side of the negotiation

pub mod ids;
pub mod negotiation_state;
pub mod offer_status;
pub mod party;
pub mod price;
pub mod timestamp;

pub use ids::{ListingId, OfferId, UserId};
pub use negotiation_state::NegotiationState;
pub use offer_status::OfferStatus;
pub use party::{PartyRole, Principal};
pub use price::Price;
pub use timestamp::Timestamp;
