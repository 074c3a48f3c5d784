//! # Offer Status
//!
//! Per-offer resolution status.
//!
//! An offer starts [`Pending`](OfferStatus::Pending) and is resolved exactly
//! once: either [`Accepted`](OfferStatus::Accepted) or
//! [`Rejected`](OfferStatus::Rejected). Resolution never reverts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolution status of a single offer in a negotiation thread.
///
/// # Examples
///
/// ```
/// use bargain_engine::domain::value_objects::offer_status::OfferStatus;
///
/// let status = OfferStatus::Pending;
/// assert!(status.is_pending());
/// assert!(!status.is_resolved());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    /// Awaiting a response from the counterparty.
    #[default]
    Pending,

    /// The counterparty accepted this offer (terminal).
    Accepted,

    /// The counterparty rejected this offer (terminal).
    Rejected,
}

impl OfferStatus {
    /// Returns true if the offer is still awaiting a response.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true if the offer has been accepted or rejected.
    ///
    /// Resolved offers never change status again.
    #[inline]
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !self.is_pending()
    }

    /// Returns true if the offer was accepted.
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}
