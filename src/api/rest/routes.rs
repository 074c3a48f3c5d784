//! # Route Table
//!
//! Wires the negotiation handlers into an axum [`Router`].

use crate::api::rest::handlers::{
    AppState, accept_offer, create_listing, get_listing, health, list_negotiating, reject_offer,
    start_negotiation, submit_offer,
};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the complete API router.
///
/// # Examples
///
/// ```ignore
/// use bargain_engine::api::rest::{AppState, create_router};
/// use std::sync::Arc;
///
/// let router = create_router(Arc::new(AppState::new(service)));
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/listings", post(create_listing))
        .route("/api/v1/listings/negotiating", get(list_negotiating))
        .route("/api/v1/listings/{id}", get(get_listing))
        .route("/api/v1/listings/{id}/negotiation", post(start_negotiation))
        .route("/api/v1/listings/{id}/offers", post(submit_offer))
        .route(
            "/api/v1/listings/{id}/offers/{offer_id}/accept",
            post(accept_offer),
        )
        .route(
            "/api/v1/listings/{id}/offers/{offer_id}/reject",
            post(reject_offer),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
