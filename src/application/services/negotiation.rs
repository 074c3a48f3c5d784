//! # Negotiation Service
//!
//! Orchestrates the listing price-negotiation lifecycle.
//!
//! This module provides the [`NegotiationService`], the application-layer
//! entry point for every negotiation operation: creating listings, starting
//! negotiations, submitting offers, and accepting or rejecting them.
//!
//! # Concurrency
//!
//! Operations targeting the same listing are serialized two ways:
//!
//! 1. A per-listing async mutex makes each load-mutate-save cycle exclusive
//!    within this process.
//! 2. The [`ListingStore`] enforces optimistic locking via the listing's
//!    version field; a stale save is retried on a fresh copy up to
//!    [`NegotiationConfig::max_save_attempts`] times before surfacing
//!    [`EngineError::Conflict`].
//!
//! Operations on different listings proceed in parallel.

use crate::application::error::{EngineError, EngineResult};
use crate::domain::entities::{Listing, Offer};
use crate::domain::events::{
    NegotiationEvent, NegotiationStarted, OfferAccepted, OfferRejected, OfferSubmitted,
};
use crate::domain::value_objects::{
    ListingId, NegotiationState, OfferId, OfferStatus, PartyRole, Price, Principal, Timestamp,
    UserId,
};
use crate::infrastructure::persistence::traits::{ListingStore, RepositoryError};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};
use tracing::{info, warn};

/// Default capacity of the event broadcast channel.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Configuration for the negotiation service.
#[derive(Debug, Clone)]
pub struct NegotiationConfig {
    /// How many times a save is retried after a version conflict before the
    /// operation fails with [`EngineError::Conflict`].
    pub max_save_attempts: u32,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            max_save_attempts: 3,
        }
    }
}

/// Read model of an offer, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferView {
    /// The offer id.
    pub id: OfferId,
    /// Who submitted the offer.
    pub submitter_id: UserId,
    /// Which side the submitter acted on.
    pub submitter_role: PartyRole,
    /// The proposed price.
    pub price: Price,
    /// Optional free-text annotation.
    pub message: Option<String>,
    /// When the offer was submitted.
    pub submitted_at: Timestamp,
    /// Resolution status.
    pub status: OfferStatus,
}

impl From<&Offer> for OfferView {
    fn from(offer: &Offer) -> Self {
        Self {
            id: offer.id(),
            submitter_id: offer.submitter_id().clone(),
            submitter_role: offer.submitter_role(),
            price: offer.price(),
            message: offer.message().map(str::to_string),
            submitted_at: offer.submitted_at(),
            status: offer.status(),
        }
    }
}

/// Read model of a listing and its negotiation, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingView {
    /// The listing id.
    pub id: ListingId,
    /// The owning provider.
    pub provider_id: UserId,
    /// The listing title.
    pub title: String,
    /// The originally published price.
    pub listed_price: Price,
    /// The price captured when negotiation started, if any.
    pub initial_price: Option<Price>,
    /// The latest agreed-or-proposed price.
    pub current_price: Price,
    /// Listing-level negotiation state.
    pub negotiation_state: NegotiationState,
    /// The seeker who started the negotiation, if any.
    pub initiator_id: Option<UserId>,
    /// The offer thread in chronological order.
    pub offers: Vec<OfferView>,
    /// Optimistic-locking version.
    pub version: u64,
    /// When the listing was created.
    pub created_at: Timestamp,
    /// When the listing last changed.
    pub updated_at: Timestamp,
}

impl From<&Listing> for ListingView {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id(),
            provider_id: listing.provider_id().clone(),
            title: listing.title().to_string(),
            listed_price: listing.listed_price(),
            initial_price: listing.initial_price(),
            current_price: listing.current_price(),
            negotiation_state: listing.negotiation_state(),
            initiator_id: listing.initiator_id().cloned(),
            offers: listing.offers().iter().map(OfferView::from).collect(),
            version: listing.version(),
            created_at: listing.created_at(),
            updated_at: listing.updated_at(),
        }
    }
}

/// Application service for listing price negotiation.
///
/// Cheap to clone; clones share the store, the lock registry, and the event
/// channel.
#[derive(Debug, Clone)]
pub struct NegotiationService {
    store: Arc<dyn ListingStore>,
    config: NegotiationConfig,
    locks: Arc<DashMap<ListingId, Arc<Mutex<()>>>>,
    events: broadcast::Sender<NegotiationEvent>,
}

impl NegotiationService {
    /// Creates a service with default configuration.
    #[must_use]
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self::with_config(store, NegotiationConfig::default())
    }

    /// Creates a service with the given configuration.
    #[must_use]
    pub fn with_config(store: Arc<dyn ListingStore>, config: NegotiationConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            config,
            locks: Arc::new(DashMap::new()),
            events,
        }
    }

    /// Subscribes to negotiation lifecycle events.
    ///
    /// Events are emitted after the corresponding state change has been
    /// persisted. Slow subscribers may observe lagged receives.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<NegotiationEvent> {
        self.events.subscribe()
    }

    /// Creates a new listing owned by the acting provider.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Forbidden`] if the principal is not a provider
    /// - [`EngineError::InvalidArgument`] if the price is invalid
    pub async fn create_listing(
        &self,
        principal: &Principal,
        title: impl Into<String>,
        listed_price: f64,
    ) -> EngineResult<ListingView> {
        if !principal.role().is_provider() {
            return Err(EngineError::forbidden("only providers may create listings"));
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EngineError::invalid_argument("title must not be empty"));
        }
        let price = Price::new(listed_price).map_err(EngineError::from)?;

        let listing = Listing::new(
            ListingId::new_v4(),
            principal.user_id().clone(),
            title,
            price,
        );
        self.store.save(&listing).await?;
        info!(listing_id = %listing.id(), provider_id = %principal.user_id(), "listing created");
        Ok(ListingView::from(&listing))
    }

    /// Returns a listing by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] if the listing does not exist.
    pub async fn get_listing(&self, listing_id: ListingId) -> EngineResult<ListingView> {
        let listing = self.load(listing_id).await?;
        Ok(ListingView::from(&listing))
    }

    /// Returns all listings with an open negotiation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Repository`] if the store fails.
    pub async fn find_negotiating(&self) -> EngineResult<Vec<ListingView>> {
        let listings = self.store.find_negotiating().await?;
        Ok(listings.iter().map(ListingView::from).collect())
    }

    /// Starts a negotiation on a listing.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotFound`] if the listing does not exist
    /// - [`EngineError::Forbidden`] if the principal is not a seeker
    /// - [`EngineError::InvalidState`] if a negotiation already exists
    /// - [`EngineError::InvalidArgument`] if the price is invalid
    pub async fn start_negotiation(
        &self,
        listing_id: ListingId,
        principal: &Principal,
        starting_price: f64,
    ) -> EngineResult<ListingView> {
        let price = Price::new(starting_price).map_err(EngineError::from)?;
        let principal = principal.clone();

        let listing = self
            .mutate(listing_id, move |listing| {
                listing.start_negotiation(&principal, price)?;
                let initial = listing
                    .initial_price()
                    .unwrap_or_else(|| listing.listed_price());
                Ok(vec![NegotiationEvent::NegotiationStarted(
                    NegotiationStarted::new(
                        listing.id(),
                        principal.user_id().clone(),
                        initial,
                        price,
                    ),
                )])
            })
            .await?;

        info!(listing_id = %listing_id, "negotiation started");
        Ok(ListingView::from(&listing))
    }

    /// Submits an offer from either party.
    ///
    /// A seeker's offer on a listing with no negotiation implicitly starts
    /// one.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotFound`] if the listing does not exist
    /// - [`EngineError::InvalidState`] if the negotiation is closed, or a
    ///   provider offers before any negotiation exists
    /// - [`EngineError::InvalidArgument`] if the price is invalid
    pub async fn submit_offer(
        &self,
        listing_id: ListingId,
        principal: &Principal,
        price: f64,
        message: Option<String>,
    ) -> EngineResult<OfferView> {
        let price = Price::new(price).map_err(EngineError::from)?;
        let principal = principal.clone();

        let listing = self
            .mutate(listing_id, move |listing| {
                let offer_id = listing.submit_offer(&principal, price, message.clone())?;
                Ok(vec![NegotiationEvent::OfferSubmitted(OfferSubmitted::new(
                    listing.id(),
                    offer_id,
                    principal.user_id().clone(),
                    principal.role(),
                    price,
                ))])
            })
            .await?;

        // The mutation appends exactly one offer, so the latest is ours.
        let offer = listing
            .latest_offer()
            .ok_or_else(|| EngineError::Repository(RepositoryError::internal(
                "offer missing after submit",
            )))?;
        info!(listing_id = %listing_id, offer_id = %offer.id(), "offer submitted");
        Ok(OfferView::from(offer))
    }

    /// Accepts a pending offer, closing the negotiation at that price.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotFound`] if the listing or offer does not exist
    /// - [`EngineError::InvalidState`] if the negotiation is closed or the
    ///   offer is already resolved
    /// - [`EngineError::Forbidden`] if the acting user submitted the offer
    pub async fn accept_offer(
        &self,
        listing_id: ListingId,
        offer_id: OfferId,
        principal: &Principal,
    ) -> EngineResult<ListingView> {
        let principal = principal.clone();

        let listing = self
            .mutate(listing_id, move |listing| {
                let final_price = listing.accept_offer(offer_id, &principal)?;
                Ok(vec![NegotiationEvent::OfferAccepted(OfferAccepted::new(
                    listing.id(),
                    offer_id,
                    principal.user_id().clone(),
                    final_price,
                ))])
            })
            .await?;

        info!(listing_id = %listing_id, offer_id = %offer_id, "offer accepted");
        Ok(ListingView::from(&listing))
    }

    /// Rejects a pending offer; the negotiation stays open.
    ///
    /// # Errors
    ///
    /// Same as [`accept_offer`](NegotiationService::accept_offer).
    pub async fn reject_offer(
        &self,
        listing_id: ListingId,
        offer_id: OfferId,
        principal: &Principal,
    ) -> EngineResult<ListingView> {
        let principal = principal.clone();

        let listing = self
            .mutate(listing_id, move |listing| {
                listing.reject_offer(offer_id, &principal)?;
                Ok(vec![NegotiationEvent::OfferRejected(OfferRejected::new(
                    listing.id(),
                    offer_id,
                    principal.user_id().clone(),
                ))])
            })
            .await?;

        info!(listing_id = %listing_id, offer_id = %offer_id, "offer rejected");
        Ok(ListingView::from(&listing))
    }

    /// Loads a listing or fails with `NotFound`.
    async fn load(&self, listing_id: ListingId) -> EngineResult<Listing> {
        self.store
            .get(&listing_id)
            .await?
            .ok_or_else(|| EngineError::not_found("Listing", listing_id.to_string()))
    }

    /// Runs a load-mutate-save cycle under the listing's lock.
    ///
    /// The closure is re-applied to a fresh copy after each version
    /// conflict, up to the configured attempt limit.
    async fn mutate<F>(&self, listing_id: ListingId, mut apply: F) -> EngineResult<Listing>
    where
        F: FnMut(&mut Listing) -> EngineResult<Vec<NegotiationEvent>>,
    {
        let lock = self
            .locks
            .entry(listing_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        for attempt in 1..=self.config.max_save_attempts {
            let mut listing = self.load(listing_id).await?;
            let events = apply(&mut listing)?;

            match self.store.save(&listing).await {
                Ok(()) => {
                    for event in events {
                        let _ = self.events.send(event);
                    }
                    listing.bump_version();
                    return Ok(listing);
                }
                Err(RepositoryError::VersionConflict { .. }) => {
                    warn!(
                        listing_id = %listing_id,
                        attempt,
                        max = self.config.max_save_attempts,
                        "version conflict, retrying"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(EngineError::conflict(format!(
            "listing {listing_id} kept changing during save, giving up after {} attempts",
            self.config.max_save_attempts
        )))
    }
}
