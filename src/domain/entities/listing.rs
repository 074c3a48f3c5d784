//! # Listing Aggregate
//!
//! The negotiable item and its price-negotiation state machine.
//!
//! This module provides the [`Listing`] aggregate root, which owns the
//! negotiation state attached to a marketplace listing: the captured initial
//! price, the current price, the append-only offer thread, and the
//! listing-level [`NegotiationState`].
//!
//! # State Machine
//!
//! ```text
//! None → Pending → InProgress → Accepted
//!    └──────────────────┘
//! ```
//!
//! A seeker starts the negotiation (or submits a first offer directly, which
//! both opens the negotiation and counts as an offer). Both parties then
//! exchange offers; accepting one locks the price. Rejecting an offer marks
//! only that offer: the listing stays `InProgress` and keeps accepting
//! offers.
//!
//! # Examples
//!
//! ```
//! use bargain_engine::domain::entities::listing::Listing;
//! use bargain_engine::domain::value_objects::{
//!     ListingId, NegotiationState, PartyRole, Price, Principal, UserId,
//! };
//!
//! let mut listing = Listing::new(
//!     ListingId::new_v4(),
//!     UserId::new("provider-1"),
//!     "House cleaning",
//!     Price::new(50.0).unwrap(),
//! );
//!
//! let seeker = Principal::new(UserId::new("seeker-1"), PartyRole::Seeker);
//! listing
//!     .start_negotiation(&seeker, Price::new(40.0).unwrap())
//!     .unwrap();
//!
//! assert_eq!(listing.negotiation_state(), NegotiationState::Pending);
//! assert_eq!(listing.initial_price(), Some(Price::new(50.0).unwrap()));
//! ```

use crate::domain::entities::offer::Offer;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    ListingId, NegotiationState, OfferId, Price, Principal, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The negotiable listing aggregate root.
///
/// # Invariants
///
/// - `offers` is append-only; existing offers change only their status
/// - At most one offer is ever `Accepted`
/// - `initial_price` is set exactly once, when negotiation starts, and never
///   overwritten
/// - `current_price` equals `listed_price` before negotiation, otherwise the
///   most recently submitted offer's price, or the accepted offer's price
///   once one exists
/// - Offer timestamps are non-decreasing in sequence order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier, immutable.
    id: ListingId,
    /// The provider who owns the listing.
    provider_id: UserId,
    /// Human-readable label; no semantic effect.
    title: String,
    /// The price as originally published.
    listed_price: Price,
    /// Captured from `listed_price` when negotiation starts; set once.
    initial_price: Option<Price>,
    /// The latest agreed-or-proposed price.
    current_price: Price,
    /// Listing-level negotiation state.
    negotiation_state: NegotiationState,
    /// The seeker who started the negotiation.
    initiator_id: Option<UserId>,
    /// Append-only offer thread, insertion order = chronological order.
    offers: Vec<Offer>,
    /// Optimistic-locking version, managed by the listing store.
    version: u64,
    /// When the listing was created.
    created_at: Timestamp,
    /// When the listing last changed.
    updated_at: Timestamp,
}

impl Listing {
    /// Creates a new listing with no negotiation.
    ///
    /// `current_price` starts equal to `listed_price`.
    #[must_use]
    pub fn new(
        id: ListingId,
        provider_id: UserId,
        title: impl Into<String>,
        listed_price: Price,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            provider_id,
            title: title.into(),
            listed_price,
            initial_price: None,
            current_price: listed_price,
            negotiation_state: NegotiationState::None,
            initiator_id: None,
            offers: Vec::new(),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstructs a listing from stored parts.
    ///
    /// Bypasses validation; only for use with trusted storage.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ListingId,
        provider_id: UserId,
        title: String,
        listed_price: Price,
        initial_price: Option<Price>,
        current_price: Price,
        negotiation_state: NegotiationState,
        initiator_id: Option<UserId>,
        offers: Vec<Offer>,
        version: u64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            provider_id,
            title,
            listed_price,
            initial_price,
            current_price,
            negotiation_state,
            initiator_id,
            offers,
            version,
            created_at,
            updated_at,
        }
    }

    fn transition_to(&mut self, target: NegotiationState) -> DomainResult<()> {
        if !self.negotiation_state.can_transition_to(target) {
            return Err(DomainError::InvalidStateTransition {
                from: self.negotiation_state,
                to: target,
            });
        }
        self.negotiation_state = target;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ========== Accessors ==========

    /// Returns the listing id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ListingId {
        self.id
    }

    /// Returns the owning provider's id.
    #[inline]
    #[must_use]
    pub fn provider_id(&self) -> &UserId {
        &self.provider_id
    }

    /// Returns the listing title.
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the originally published price.
    #[inline]
    #[must_use]
    pub fn listed_price(&self) -> Price {
        self.listed_price
    }

    /// Returns the price captured when negotiation started, if it has.
    #[inline]
    #[must_use]
    pub fn initial_price(&self) -> Option<Price> {
        self.initial_price
    }

    /// Returns the latest agreed-or-proposed price.
    #[inline]
    #[must_use]
    pub fn current_price(&self) -> Price {
        self.current_price
    }

    /// Returns the listing-level negotiation state.
    #[inline]
    #[must_use]
    pub fn negotiation_state(&self) -> NegotiationState {
        self.negotiation_state
    }

    /// Returns the seeker who started the negotiation, if any.
    #[inline]
    #[must_use]
    pub fn initiator_id(&self) -> Option<&UserId> {
        self.initiator_id.as_ref()
    }

    /// Returns the offer thread in chronological order.
    #[inline]
    #[must_use]
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Returns the number of offers submitted.
    #[inline]
    #[must_use]
    pub fn offer_count(&self) -> usize {
        self.offers.len()
    }

    /// Returns the most recently submitted offer, if any.
    #[must_use]
    pub fn latest_offer(&self) -> Option<&Offer> {
        self.offers.last()
    }

    /// Looks up an offer by id.
    #[must_use]
    pub fn offer(&self, id: OfferId) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id() == id)
    }

    /// Returns the accepted offer, if one exists.
    #[must_use]
    pub fn accepted_offer(&self) -> Option<&Offer> {
        self.offers.iter().find(|o| o.status().is_accepted())
    }

    /// Returns the optimistic-locking version.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Increments the optimistic-locking version.
    ///
    /// Called by the listing store on successful save; not part of the
    /// negotiation semantics.
    pub fn bump_version(&mut self) {
        self.version = self.version.saturating_add(1);
    }

    /// Returns when the listing was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the listing last changed.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ========== State Transitions ==========

    /// Starts a negotiation with a seeker-proposed starting price.
    ///
    /// Captures the listed price into `initial_price`, sets the current
    /// price to `starting_price`, records the initiator, and moves the
    /// listing to `Pending` with an empty offer thread.
    ///
    /// # Errors
    ///
    /// - [`DomainError::RoleNotAllowed`] if the principal is not a seeker
    /// - [`DomainError::NegotiationAlreadyStarted`] if a negotiation exists
    pub fn start_negotiation(
        &mut self,
        principal: &Principal,
        starting_price: Price,
    ) -> DomainResult<()> {
        if !principal.role().is_seeker() {
            return Err(DomainError::RoleNotAllowed {
                role: principal.role(),
                action: "start a negotiation",
            });
        }
        if self.negotiation_state != NegotiationState::None {
            return Err(DomainError::NegotiationAlreadyStarted {
                state: self.negotiation_state,
            });
        }

        self.initial_price = Some(self.listed_price);
        self.current_price = starting_price;
        self.initiator_id = Some(principal.user_id().clone());
        self.offers.clear();
        self.transition_to(NegotiationState::Pending)
    }

    /// Submits an offer from either party.
    ///
    /// Appends a pending [`Offer`] with a fresh id and a submission time
    /// clamped to be non-decreasing within the thread, sets the current
    /// price to the offered price, and moves the listing to `InProgress`.
    ///
    /// When no negotiation exists yet and the submitter is a seeker, the
    /// offer implicitly starts the negotiation (captures `initial_price`
    /// and records the initiator) before being appended.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NegotiationNotStarted`] if state is `None` and the
    ///   submitter is a provider
    /// - [`DomainError::NegotiationClosed`] if the negotiation is terminal
    pub fn submit_offer(
        &mut self,
        principal: &Principal,
        price: Price,
        message: Option<String>,
    ) -> DomainResult<OfferId> {
        match self.negotiation_state {
            NegotiationState::None => {
                if !principal.role().is_seeker() {
                    return Err(DomainError::NegotiationNotStarted);
                }
                // Implicit start: the seeker's first offer opens the thread.
                self.initial_price = Some(self.listed_price);
                self.initiator_id = Some(principal.user_id().clone());
            }
            NegotiationState::Pending | NegotiationState::InProgress => {}
            state @ (NegotiationState::Accepted | NegotiationState::Rejected) => {
                return Err(DomainError::NegotiationClosed { state });
            }
        }

        let now = Timestamp::now();
        let submitted_at = self
            .offers
            .last()
            .map_or(now, |prev| now.max(prev.submitted_at()));

        let offer_id = OfferId::new_v4();
        self.offers.push(Offer::new(
            offer_id,
            principal.user_id().clone(),
            principal.role(),
            price,
            message,
            submitted_at,
        ));
        self.current_price = price;

        if self.negotiation_state != NegotiationState::InProgress {
            self.transition_to(NegotiationState::InProgress)?;
        } else {
            self.updated_at = Timestamp::now();
        }

        Ok(offer_id)
    }

    /// Accepts a pending offer, locking the negotiated price.
    ///
    /// Marks the offer accepted, moves the listing to `Accepted` (terminal)
    /// and sets the current price to the offer's price. Other pending
    /// offers are left pending; the terminal state makes them unreachable.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NegotiationClosed`] if the negotiation is terminal
    /// - [`DomainError::OfferNotFound`] if the offer does not exist
    /// - [`DomainError::OfferNotPending`] if the offer is already resolved
    /// - [`DomainError::SelfResponse`] if the acting user submitted the offer
    pub fn accept_offer(&mut self, offer_id: OfferId, acting: &Principal) -> DomainResult<Price> {
        if self.negotiation_state.is_terminal() {
            return Err(DomainError::NegotiationClosed {
                state: self.negotiation_state,
            });
        }

        let offer = self.find_pending_counterparty_offer(offer_id, acting)?;
        offer.accept()?;
        let price = offer.price();

        self.current_price = price;
        self.transition_to(NegotiationState::Accepted)?;
        Ok(price)
    }

    /// Rejects a pending offer.
    ///
    /// Marks only the offer; the listing stays `InProgress` and further
    /// offers are still accepted. The listing-level `Rejected` state is
    /// deliberately not produced here.
    ///
    /// # Errors
    ///
    /// Same as [`accept_offer`](Listing::accept_offer).
    pub fn reject_offer(&mut self, offer_id: OfferId, acting: &Principal) -> DomainResult<()> {
        if self.negotiation_state.is_terminal() {
            return Err(DomainError::NegotiationClosed {
                state: self.negotiation_state,
            });
        }

        let offer = self.find_pending_counterparty_offer(offer_id, acting)?;
        offer.reject()?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Finds a pending offer that the acting user may respond to.
    fn find_pending_counterparty_offer(
        &mut self,
        offer_id: OfferId,
        acting: &Principal,
    ) -> DomainResult<&mut Offer> {
        let offer = self
            .offers
            .iter_mut()
            .find(|o| o.id() == offer_id)
            .ok_or(DomainError::OfferNotFound { offer: offer_id })?;

        if !offer.status().is_pending() {
            return Err(DomainError::OfferNotPending {
                offer: offer_id,
                status: offer.status(),
            });
        }
        if offer.is_submitted_by(acting.user_id()) {
            return Err(DomainError::SelfResponse { offer: offer_id });
        }
        Ok(offer)
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Listing[{}] \"{}\" listed={} current={} state={} offers={}",
            self.id,
            self.title,
            self.listed_price,
            self.current_price,
            self.negotiation_state,
            self.offers.len()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{OfferStatus, PartyRole};

    fn price(value: f64) -> Price {
        Price::new(value).unwrap()
    }

    fn seeker() -> Principal {
        Principal::new(UserId::new("seeker-1"), PartyRole::Seeker)
    }

    fn provider() -> Principal {
        Principal::new(UserId::new("provider-1"), PartyRole::Provider)
    }

    fn make_listing() -> Listing {
        Listing::new(
            ListingId::new_v4(),
            UserId::new("provider-1"),
            "House cleaning",
            price(50.0),
        )
    }

    mod construction {
        use super::*;

        #[test]
        fn new_listing_has_no_negotiation() {
            let listing = make_listing();
            assert_eq!(listing.negotiation_state(), NegotiationState::None);
            assert_eq!(listing.current_price(), price(50.0));
            assert_eq!(listing.initial_price(), None);
            assert!(listing.initiator_id().is_none());
            assert!(listing.offers().is_empty());
            assert_eq!(listing.version(), 0);
        }

        #[test]
        fn accessors_return_given_values() {
            let id = ListingId::new_v4();
            let listing = Listing::new(id, UserId::new("p"), "Plumbing", price(40.0));
            assert_eq!(listing.id(), id);
            assert_eq!(listing.provider_id().as_str(), "p");
            assert_eq!(listing.title(), "Plumbing");
            assert_eq!(listing.listed_price(), price(40.0));
        }
    }

    mod start_negotiation {
        use super::*;

        #[test]
        fn seeker_starts_negotiation() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();

            assert_eq!(listing.negotiation_state(), NegotiationState::Pending);
            assert_eq!(listing.initial_price(), Some(price(50.0)));
            assert_eq!(listing.current_price(), price(40.0));
            assert_eq!(listing.initiator_id().unwrap().as_str(), "seeker-1");
            assert!(listing.offers().is_empty());
        }

        #[test]
        fn provider_may_not_start() {
            let mut listing = make_listing();
            let result = listing.start_negotiation(&provider(), price(40.0));
            assert!(matches!(result, Err(DomainError::RoleNotAllowed { .. })));
            assert_eq!(listing.negotiation_state(), NegotiationState::None);
        }

        #[test]
        fn starting_twice_fails() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();

            let result = listing.start_negotiation(&seeker(), price(35.0));
            assert!(matches!(
                result,
                Err(DomainError::NegotiationAlreadyStarted { .. })
            ));
            // First start is untouched.
            assert_eq!(listing.current_price(), price(40.0));
        }

        #[test]
        fn initial_price_captures_listed_price_once() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            listing.submit_offer(&provider(), price(45.0), None).unwrap();

            assert_eq!(listing.initial_price(), Some(price(50.0)));
        }
    }

    mod submit_offer {
        use super::*;

        #[test]
        fn offer_moves_listing_to_in_progress() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();

            let id = listing
                .submit_offer(&provider(), price(45.0), None)
                .unwrap();

            assert_eq!(listing.negotiation_state(), NegotiationState::InProgress);
            assert_eq!(listing.current_price(), price(45.0));
            assert_eq!(listing.offer_count(), 1);
            let offer = listing.offer(id).unwrap();
            assert_eq!(offer.status(), OfferStatus::Pending);
            assert_eq!(offer.submitter_role(), PartyRole::Provider);
        }

        #[test]
        fn seeker_offer_from_none_implicitly_starts() {
            let mut listing = make_listing();
            let id = listing
                .submit_offer(&seeker(), price(40.0), Some("hi".to_string()))
                .unwrap();

            assert_eq!(listing.negotiation_state(), NegotiationState::InProgress);
            assert_eq!(listing.initial_price(), Some(price(50.0)));
            assert_eq!(listing.initiator_id().unwrap().as_str(), "seeker-1");
            assert_eq!(listing.current_price(), price(40.0));
            assert_eq!(listing.offer(id).unwrap().message(), Some("hi"));
        }

        #[test]
        fn provider_offer_from_none_fails() {
            let mut listing = make_listing();
            let result = listing.submit_offer(&provider(), price(45.0), None);
            assert!(matches!(result, Err(DomainError::NegotiationNotStarted)));
            assert!(listing.offers().is_empty());
            assert_eq!(listing.negotiation_state(), NegotiationState::None);
        }

        #[test]
        fn offers_append_in_order() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();

            listing.submit_offer(&provider(), price(48.0), None).unwrap();
            listing.submit_offer(&seeker(), price(42.0), None).unwrap();
            listing.submit_offer(&provider(), price(45.0), None).unwrap();

            assert_eq!(listing.offer_count(), 3);
            let prices: Vec<Price> = listing.offers().iter().map(Offer::price).collect();
            assert_eq!(prices, vec![price(48.0), price(42.0), price(45.0)]);
            assert_eq!(listing.current_price(), price(45.0));
        }

        #[test]
        fn timestamps_are_non_decreasing() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            for i in 0..5 {
                let p = price(41.0 + f64::from(i));
                listing.submit_offer(&provider(), p, None).unwrap();
            }
            let stamps: Vec<Timestamp> = listing
                .offers()
                .iter()
                .map(Offer::submitted_at)
                .collect();
            assert!(stamps.windows(2).all(|w| match w {
                [a, b] => !b.is_before(a),
                _ => true,
            }));
        }

        #[test]
        fn offer_ids_are_unique() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let a = listing.submit_offer(&provider(), price(45.0), None).unwrap();
            let b = listing.submit_offer(&seeker(), price(42.0), None).unwrap();
            assert_ne!(a, b);
        }

        #[test]
        fn submit_after_acceptance_fails() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let id = listing.submit_offer(&provider(), price(45.0), None).unwrap();
            listing.accept_offer(id, &seeker()).unwrap();

            let result = listing.submit_offer(&seeker(), price(30.0), None);
            assert!(matches!(
                result,
                Err(DomainError::NegotiationClosed {
                    state: NegotiationState::Accepted,
                })
            ));
            assert_eq!(listing.offer_count(), 1);
            assert_eq!(listing.current_price(), price(45.0));
        }
    }

    mod accept_offer {
        use super::*;

        #[test]
        fn accept_locks_price_and_state() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let id = listing.submit_offer(&provider(), price(45.0), None).unwrap();

            let accepted_price = listing.accept_offer(id, &seeker()).unwrap();

            assert_eq!(accepted_price, price(45.0));
            assert_eq!(listing.negotiation_state(), NegotiationState::Accepted);
            assert_eq!(listing.current_price(), price(45.0));
            assert_eq!(listing.offer(id).unwrap().status(), OfferStatus::Accepted);
        }

        #[test]
        fn accept_unknown_offer_fails() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            listing.submit_offer(&provider(), price(45.0), None).unwrap();

            let result = listing.accept_offer(OfferId::new_v4(), &seeker());
            assert!(matches!(result, Err(DomainError::OfferNotFound { .. })));
        }

        #[test]
        fn accept_own_offer_fails() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let id = listing.submit_offer(&provider(), price(45.0), None).unwrap();

            let result = listing.accept_offer(id, &provider());
            assert!(matches!(result, Err(DomainError::SelfResponse { .. })));
            assert_eq!(listing.negotiation_state(), NegotiationState::InProgress);
            assert_eq!(listing.offer(id).unwrap().status(), OfferStatus::Pending);
        }

        #[test]
        fn accept_twice_fails_without_further_change() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let id = listing.submit_offer(&provider(), price(45.0), None).unwrap();
            listing.accept_offer(id, &seeker()).unwrap();

            let snapshot = listing.clone();
            let result = listing.accept_offer(id, &seeker());
            assert!(matches!(result, Err(DomainError::NegotiationClosed { .. })));
            assert_eq!(listing, snapshot);
        }

        #[test]
        fn sibling_offers_stay_pending_after_acceptance() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let first = listing.submit_offer(&provider(), price(48.0), None).unwrap();
            let second = listing.submit_offer(&seeker(), price(42.0), None).unwrap();

            listing.accept_offer(second, &provider()).unwrap();

            assert_eq!(listing.offer(first).unwrap().status(), OfferStatus::Pending);
            // But the terminal state makes the sibling unreachable.
            let result = listing.accept_offer(first, &seeker());
            assert!(matches!(result, Err(DomainError::NegotiationClosed { .. })));
            assert_eq!(listing.accepted_offer().unwrap().id(), second);
        }

        #[test]
        fn at_most_one_accepted_offer() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            listing.submit_offer(&provider(), price(48.0), None).unwrap();
            let id = listing.submit_offer(&seeker(), price(42.0), None).unwrap();
            listing.accept_offer(id, &provider()).unwrap();

            let accepted = listing
                .offers()
                .iter()
                .filter(|o| o.status().is_accepted())
                .count();
            assert_eq!(accepted, 1);
        }
    }

    mod reject_offer {
        use super::*;

        #[test]
        fn reject_marks_only_the_offer() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let id = listing.submit_offer(&provider(), price(48.0), None).unwrap();

            listing.reject_offer(id, &seeker()).unwrap();

            assert_eq!(listing.offer(id).unwrap().status(), OfferStatus::Rejected);
            // The listing-level state stays in progress; rejection does not
            // terminate the negotiation.
            assert_eq!(listing.negotiation_state(), NegotiationState::InProgress);
        }

        #[test]
        fn further_offers_accepted_after_rejection() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let id = listing.submit_offer(&provider(), price(48.0), None).unwrap();
            listing.reject_offer(id, &seeker()).unwrap();

            let next = listing.submit_offer(&provider(), price(44.0), None).unwrap();
            assert_eq!(listing.offer_count(), 2);
            assert_eq!(listing.offer(next).unwrap().status(), OfferStatus::Pending);
            assert_eq!(listing.current_price(), price(44.0));
        }

        #[test]
        fn reject_own_offer_fails() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let id = listing.submit_offer(&provider(), price(48.0), None).unwrap();

            let result = listing.reject_offer(id, &provider());
            assert!(matches!(result, Err(DomainError::SelfResponse { .. })));
        }

        #[test]
        fn reject_resolved_offer_fails() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let id = listing.submit_offer(&provider(), price(48.0), None).unwrap();
            listing.reject_offer(id, &seeker()).unwrap();

            let result = listing.reject_offer(id, &seeker());
            assert!(matches!(result, Err(DomainError::OfferNotPending { .. })));
        }

        #[test]
        fn reject_after_acceptance_fails() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let first = listing.submit_offer(&provider(), price(48.0), None).unwrap();
            let second = listing.submit_offer(&seeker(), price(42.0), None).unwrap();
            listing.accept_offer(second, &provider()).unwrap();

            let result = listing.reject_offer(first, &seeker());
            assert!(matches!(result, Err(DomainError::NegotiationClosed { .. })));
        }
    }

    mod full_flows {
        use super::*;

        #[test]
        fn start_counter_accept() {
            // listed 50, seeker opens at 40, provider counters 45, seeker accepts.
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            assert_eq!(listing.negotiation_state(), NegotiationState::Pending);

            let counter = listing.submit_offer(&provider(), price(45.0), None).unwrap();
            assert_eq!(listing.current_price(), price(45.0));
            assert_eq!(listing.negotiation_state(), NegotiationState::InProgress);
            assert_eq!(listing.offer_count(), 1);

            listing.accept_offer(counter, &seeker()).unwrap();
            assert_eq!(listing.negotiation_state(), NegotiationState::Accepted);
            assert_eq!(listing.current_price(), price(45.0));
            assert_eq!(listing.initial_price(), Some(price(50.0)));
        }

        #[test]
        fn multi_round_haggling() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(35.0)).unwrap();

            let o1 = listing.submit_offer(&provider(), price(48.0), None).unwrap();
            listing.reject_offer(o1, &seeker()).unwrap();
            let o2 = listing.submit_offer(&seeker(), price(40.0), None).unwrap();
            listing.reject_offer(o2, &provider()).unwrap();
            let o3 = listing.submit_offer(&provider(), price(43.0), None).unwrap();
            listing.accept_offer(o3, &seeker()).unwrap();

            assert_eq!(listing.negotiation_state(), NegotiationState::Accepted);
            assert_eq!(listing.current_price(), price(43.0));
            assert_eq!(listing.offer_count(), 3);
            assert_eq!(listing.accepted_offer().unwrap().id(), o3);
        }
    }

    mod versioning {
        use super::*;

        #[test]
        fn bump_version_increments() {
            let mut listing = make_listing();
            listing.bump_version();
            listing.bump_version();
            assert_eq!(listing.version(), 2);
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn roundtrip_preserves_negotiation() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            listing.submit_offer(&provider(), price(45.0), None).unwrap();

            let json = serde_json::to_string(&listing).unwrap();
            let back: Listing = serde_json::from_str(&json).unwrap();
            assert_eq!(listing, back);
        }

        #[test]
        fn state_serializes_as_wire_string() {
            let mut listing = make_listing();
            listing.start_negotiation(&seeker(), price(40.0)).unwrap();
            let json = serde_json::to_value(&listing).unwrap();
            assert_eq!(json["negotiation_state"], "pending");
        }
    }
}
