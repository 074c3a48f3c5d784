//! # REST API
//!
//! REST endpoints using axum for the negotiation engine.
//!
//! # Endpoints
//!
//! ## Listings
//! - `POST /api/v1/listings` - Create a listing (provider only)
//! - `GET /api/v1/listings/{id}` - Get a listing with its negotiation
//! - `GET /api/v1/listings/negotiating` - Listings with open negotiations
//!
//! ## Negotiation
//! - `POST /api/v1/listings/{id}/negotiation` - Start a negotiation (seeker)
//! - `POST /api/v1/listings/{id}/offers` - Submit an offer (either party)
//! - `POST /api/v1/listings/{id}/offers/{offer_id}/accept` - Accept an offer
//! - `POST /api/v1/listings/{id}/offers/{offer_id}/reject` - Reject an offer
//!
//! ## Health
//! - `GET /api/v1/health` - Health check endpoint
//!
//! # Identity
//!
//! Mutating requests carry the acting identity in the `x-user-id` and
//! `x-user-role` headers; authentication happens upstream of this service.

pub mod handlers;
pub mod routes;

pub use handlers::{
    AppState, CreateListingRequest, ErrorResponse, HealthResponse, StartNegotiationRequest,
    SubmitOfferRequest,
};
pub use routes::create_router;
