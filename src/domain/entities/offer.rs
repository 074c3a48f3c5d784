//! # Offer Entity
//!
//! A single proposed price in a negotiation thread.
//!
//! Offers are immutable once created except for their [`OfferStatus`]:
//! the price, submitter, message, and submission time never change, and the
//! status moves from `Pending` to exactly one of `Accepted` or `Rejected`.
//!
//! # Examples
//!
//! ```
//! use bargain_engine::domain::entities::offer::Offer;
//! use bargain_engine::domain::value_objects::{
//!     OfferId, OfferStatus, PartyRole, Price, Timestamp, UserId,
//! };
//!
//! let offer = Offer::new(
//!     OfferId::new_v4(),
//!     UserId::new("provider-1"),
//!     PartyRole::Provider,
//!     Price::new(45.0).unwrap(),
//!     Some("best I can do".to_string()),
//!     Timestamp::now(),
//! );
//!
//! assert_eq!(offer.status(), OfferStatus::Pending);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{OfferId, OfferStatus, PartyRole, Price, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single offer in a listing's negotiation thread.
///
/// # Invariants
///
/// - `id`, `submitter_id`, `submitter_role`, `price`, `message`, and
///   `submitted_at` are immutable after construction
/// - `status` transitions `Pending → Accepted` or `Pending → Rejected`
///   exactly once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Unique identifier, generated at submission time.
    id: OfferId,
    /// Who submitted the offer.
    submitter_id: UserId,
    /// Which side the submitter acted on.
    submitter_role: PartyRole,
    /// The proposed price.
    price: Price,
    /// Optional free-text annotation; no semantic effect.
    message: Option<String>,
    /// Engine-assigned submission time.
    submitted_at: Timestamp,
    /// Resolution status.
    status: OfferStatus,
}

impl Offer {
    /// Creates a new pending offer.
    ///
    /// The id and timestamp are assigned by the aggregate so that ids are
    /// fresh and timestamps are non-decreasing within the thread.
    #[must_use]
    pub fn new(
        id: OfferId,
        submitter_id: UserId,
        submitter_role: PartyRole,
        price: Price,
        message: Option<String>,
        submitted_at: Timestamp,
    ) -> Self {
        Self {
            id,
            submitter_id,
            submitter_role,
            price,
            message,
            submitted_at,
            status: OfferStatus::Pending,
        }
    }

    /// Reconstructs an offer from stored parts, including its status.
    #[must_use]
    pub fn from_parts(
        id: OfferId,
        submitter_id: UserId,
        submitter_role: PartyRole,
        price: Price,
        message: Option<String>,
        submitted_at: Timestamp,
        status: OfferStatus,
    ) -> Self {
        Self {
            id,
            submitter_id,
            submitter_role,
            price,
            message,
            submitted_at,
            status,
        }
    }

    // ========== Accessors ==========

    /// Returns the offer id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> OfferId {
        self.id
    }

    /// Returns the submitter's user id.
    #[inline]
    #[must_use]
    pub fn submitter_id(&self) -> &UserId {
        &self.submitter_id
    }

    /// Returns the side the submitter acted on.
    #[inline]
    #[must_use]
    pub fn submitter_role(&self) -> PartyRole {
        self.submitter_role
    }

    /// Returns the proposed price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the optional annotation.
    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns when the offer was submitted.
    #[inline]
    #[must_use]
    pub fn submitted_at(&self) -> Timestamp {
        self.submitted_at
    }

    /// Returns the resolution status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> OfferStatus {
        self.status
    }

    /// Returns true if the offer was submitted by the given user.
    #[must_use]
    pub fn is_submitted_by(&self, user: &UserId) -> bool {
        &self.submitter_id == user
    }

    // ========== Resolution ==========

    /// Marks the offer as accepted.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OfferNotPending`] if the offer has already
    /// been resolved.
    pub fn accept(&mut self) -> DomainResult<()> {
        self.ensure_pending()?;
        self.status = OfferStatus::Accepted;
        Ok(())
    }

    /// Marks the offer as rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OfferNotPending`] if the offer has already
    /// been resolved.
    pub fn reject(&mut self) -> DomainResult<()> {
        self.ensure_pending()?;
        self.status = OfferStatus::Rejected;
        Ok(())
    }

    fn ensure_pending(&self) -> DomainResult<()> {
        if !self.status.is_pending() {
            return Err(DomainError::OfferNotPending {
                offer: self.id,
                status: self.status,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Offer[{}] {} by {} ({}) [{}]",
            self.id, self.price, self.submitter_id, self.submitter_role, self.status
        )
    }
}
