//! # REST Handlers
//!
//! Request/response types and axum handlers for the negotiation API.
//!
//! The acting identity arrives on every mutating request via the
//! `x-user-id` and `x-user-role` headers; authentication itself happens
//! upstream. Handlers translate [`EngineError`]s onto HTTP status codes:
//!
//! | Error             | Status |
//! |-------------------|--------|
//! | `InvalidArgument` | 400    |
//! | `Forbidden`       | 403    |
//! | `NotFound`        | 404    |
//! | `InvalidState`    | 409    |
//! | `Conflict`        | 409    |
//! | `Repository`      | 500    |

use crate::application::error::EngineError;
use crate::application::services::{ListingView, NegotiationService, OfferView};
use crate::domain::value_objects::{ListingId, OfferId, PartyRole, Principal, UserId};
use axum::Json;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Shared state for all REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The negotiation service.
    pub service: NegotiationService,
}

impl AppState {
    /// Creates the handler state around a service.
    #[must_use]
    pub fn new(service: NegotiationService) -> Self {
        Self { service }
    }
}

/// JSON error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error category.
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let (status, category) = match &self {
            Self::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "invalid_argument"),
            Self::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            Self::InvalidState(_) => (StatusCode::CONFLICT, "invalid_state"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            Self::Repository(err) => {
                error!(error = %err, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };
        let body = match &self {
            // Backend details stay out of responses.
            Self::Repository(_) => ErrorResponse::new(category, "internal error"),
            other => ErrorResponse::new(category, other.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_value(parts, "x-user-id")?;
        let role = header_value(parts, "x-user-role")?;
        let role: PartyRole = role.parse().map_err(|_| {
            bad_request(format!(
                "x-user-role must be 'provider' or 'seeker', got '{role}'"
            ))
        })?;
        Ok(Principal::new(UserId::new(user_id), role))
    }
}

fn header_value(parts: &Parts, name: &str) -> Result<String, Response> {
    let value = parts
        .headers
        .get(name)
        .ok_or_else(|| bad_request(format!("missing {name} header")))?;
    let value = value
        .to_str()
        .map_err(|_| bad_request(format!("{name} header is not valid UTF-8")))?;
    if value.trim().is_empty() {
        return Err(bad_request(format!("{name} header is empty")));
    }
    Ok(value.to_string())
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("invalid_argument", message)),
    )
        .into_response()
}

// ========== Request Bodies ==========

/// Body of `POST /api/v1/listings`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListingRequest {
    /// The listing title.
    pub title: String,
    /// The published price.
    pub listed_price: f64,
}

/// Body of `POST /api/v1/listings/{id}/negotiation`.
#[derive(Debug, Clone, Deserialize)]
pub struct StartNegotiationRequest {
    /// The seeker's proposed starting price.
    pub starting_price: f64,
}

/// Body of `POST /api/v1/listings/{id}/offers`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOfferRequest {
    /// The proposed price.
    pub price: f64,
    /// Optional free-text annotation.
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /api/v1/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: String,
}

// ========== Handlers ==========

/// `GET /api/v1/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// `POST /api/v1/listings`
pub async fn create_listing(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Json(body): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<ListingView>), EngineError> {
    let view = state
        .service
        .create_listing(&principal, body.title, body.listed_price)
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// `GET /api/v1/listings/{id}`
pub async fn get_listing(
    State(state): State<Arc<AppState>>,
    Path(listing_id): Path<ListingId>,
) -> Result<Json<ListingView>, EngineError> {
    let view = state.service.get_listing(listing_id).await?;
    Ok(Json(view))
}

/// `GET /api/v1/listings/negotiating`
pub async fn list_negotiating(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ListingView>>, EngineError> {
    let views = state.service.find_negotiating().await?;
    Ok(Json(views))
}

/// `POST /api/v1/listings/{id}/negotiation`
pub async fn start_negotiation(
    State(state): State<Arc<AppState>>,
    Path(listing_id): Path<ListingId>,
    principal: Principal,
    Json(body): Json<StartNegotiationRequest>,
) -> Result<(StatusCode, Json<ListingView>), EngineError> {
    let view = state
        .service
        .start_negotiation(listing_id, &principal, body.starting_price)
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// `POST /api/v1/listings/{id}/offers`
pub async fn submit_offer(
    State(state): State<Arc<AppState>>,
    Path(listing_id): Path<ListingId>,
    principal: Principal,
    Json(body): Json<SubmitOfferRequest>,
) -> Result<(StatusCode, Json<OfferView>), EngineError> {
    let view = state
        .service
        .submit_offer(listing_id, &principal, body.price, body.message)
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// `POST /api/v1/listings/{id}/offers/{offer_id}/accept`
pub async fn accept_offer(
    State(state): State<Arc<AppState>>,
    Path((listing_id, offer_id)): Path<(ListingId, OfferId)>,
    principal: Principal,
) -> Result<Json<ListingView>, EngineError> {
    let view = state
        .service
        .accept_offer(listing_id, offer_id, &principal)
        .await?;
    Ok(Json(view))
}

/// `POST /api/v1/listings/{id}/offers/{offer_id}/reject`
pub async fn reject_offer(
    State(state): State<Arc<AppState>>,
    Path((listing_id, offer_id)): Path<(ListingId, OfferId)>,
    principal: Principal,
) -> Result<Json<ListingView>, EngineError> {
    let view = state
        .service
        .reject_offer(listing_id, offer_id, &principal)
        .await?;
    Ok(Json(view))
}
