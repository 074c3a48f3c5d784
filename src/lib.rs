//! # Bargain Engine
//!
//! A price-negotiation engine for a services marketplace: providers publish
//! listings at a listed price, seekers open negotiations, both parties
//! exchange offers, and accepting one locks the final price.
//!
//! # Architecture
//!
//! The crate follows a layered design:
//!
//! - [`domain`]: entities, value objects, events, and domain errors; pure
//!   logic with no I/O
//! - [`application`]: the [`application::services::NegotiationService`]
//!   orchestrating the domain through store ports
//! - [`infrastructure`]: store implementations behind the
//!   [`infrastructure::persistence::traits::ListingStore`] port
//! - [`api`]: the axum REST surface
//!
//! # Quick Start
//!
//! ```
//! use bargain_engine::application::services::NegotiationService;
//! use bargain_engine::domain::value_objects::{PartyRole, Principal, UserId};
//! use bargain_engine::infrastructure::persistence::InMemoryListingStore;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = NegotiationService::new(Arc::new(InMemoryListingStore::new()));
//!
//! let provider = Principal::new(UserId::new("provider-1"), PartyRole::Provider);
//! let seeker = Principal::new(UserId::new("seeker-1"), PartyRole::Seeker);
//!
//! let listing = service.create_listing(&provider, "House cleaning", 50.0).await?;
//! service.start_negotiation(listing.id, &seeker, 40.0).await?;
//! let offer = service.submit_offer(listing.id, &provider, 45.0, None).await?;
//! let closed = service.accept_offer(listing.id, offer.id, &seeker).await?;
//!
//! assert!(closed.negotiation_state.is_terminal());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
