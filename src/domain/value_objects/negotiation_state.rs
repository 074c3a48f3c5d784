//! # Negotiation State
//!
//! Listing-level negotiation lifecycle state machine.
//!
//! This module provides the [`NegotiationState`] enum representing where a
//! listing's price negotiation stands, from "no negotiation" through the
//! offer exchange to an agreed price.
//!
//! # State Machine
//!
//! ```text
//! None → Pending → InProgress → Accepted
//!    └──────────────────┘  (a seeker's first offer may open the
//!                           negotiation and count as an offer at once)
//! ```
//!
//! `Rejected` exists in the closed enum for reconstruction from storage but
//! no engine operation produces it: rejecting an offer only marks that offer.
//!
//! # Examples
//!
//! ```
//! use bargain_engine::domain::value_objects::negotiation_state::NegotiationState;
//!
//! let state = NegotiationState::None;
//! assert!(state.can_transition_to(NegotiationState::Pending));
//! assert!(!state.can_transition_to(NegotiationState::Accepted));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing-level negotiation lifecycle state.
///
/// State transitions are enforced via
/// [`can_transition_to`](NegotiationState::can_transition_to).
///
/// # Terminal States
///
/// - [`Accepted`](NegotiationState::Accepted): an offer was accepted, the
///   price is locked
/// - [`Rejected`](NegotiationState::Rejected): closed without agreement
///   (reachable only through storage reconstruction)
///
/// # Examples
///
/// ```
/// use bargain_engine::domain::value_objects::negotiation_state::NegotiationState;
///
/// assert!(!NegotiationState::InProgress.is_terminal());
/// assert!(NegotiationState::Accepted.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum NegotiationState {
    /// No negotiation exists; the listed price stands.
    #[default]
    None = 0,

    /// A seeker has set a starting price; no offer exchanged yet.
    Pending = 1,

    /// At least one offer has been submitted since the start.
    InProgress = 2,

    /// An offer was accepted; the price is locked (terminal).
    Accepted = 3,

    /// The negotiation was closed without agreement (terminal).
    Rejected = 4,
}

impl NegotiationState {
    /// Returns true if this is a terminal state.
    ///
    /// Terminal states cannot transition to any other state and accept no
    /// further offers.
    ///
    /// # Examples
    ///
    /// ```
    /// use bargain_engine::domain::value_objects::negotiation_state::NegotiationState;
    ///
    /// assert!(!NegotiationState::None.is_terminal());
    /// assert!(!NegotiationState::Pending.is_terminal());
    /// assert!(NegotiationState::Accepted.is_terminal());
    /// assert!(NegotiationState::Rejected.is_terminal());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Returns true if this state can transition to the target state.
    ///
    /// Enforces the negotiation state machine rules:
    /// - None → Pending, InProgress
    /// - Pending → InProgress, Accepted
    /// - InProgress → Accepted
    /// - Terminal states → (none)
    ///
    /// None → InProgress covers the implicit start path where a seeker's
    /// first offer both opens the negotiation and counts as an offer.
    ///
    /// # Arguments
    ///
    /// * `target` - The target state to transition to
    ///
    /// # Examples
    ///
    /// ```
    /// use bargain_engine::domain::value_objects::negotiation_state::NegotiationState;
    ///
    /// assert!(NegotiationState::Pending.can_transition_to(NegotiationState::InProgress));
    /// assert!(!NegotiationState::Accepted.can_transition_to(NegotiationState::InProgress));
    /// ```
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::None, Self::Pending)
                | (Self::None, Self::InProgress)
                | (Self::Pending, Self::InProgress)
                | (Self::Pending, Self::Accepted)
                | (Self::InProgress, Self::Accepted)
        )
    }

    /// Returns the valid next states from this state.
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::None => vec![Self::Pending, Self::InProgress],
            Self::Pending => vec![Self::InProgress, Self::Accepted],
            Self::InProgress => vec![Self::Accepted],
            Self::Accepted | Self::Rejected => vec![],
        }
    }

    /// Returns true if a negotiation has been started and not yet closed.
    #[inline]
    #[must_use]
    pub const fn is_negotiating(&self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }

    /// Returns true if the state accepts new offers.
    ///
    /// `None` additionally accepts an offer from a seeker (the implicit
    /// start path); that role check lives in the aggregate.
    #[inline]
    #[must_use]
    pub const fn accepts_offers(&self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }

    /// Returns the numeric value of this state.
    #[inline]
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for NegotiationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

/// Error returned when converting an invalid u8 to [`NegotiationState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNegotiationStateError(
    /// The invalid u8 value.
    pub u8,
);

impl fmt::Display for InvalidNegotiationStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid negotiation state value: {}", self.0)
    }
}

impl std::error::Error for InvalidNegotiationStateError {}

impl TryFrom<u8> for NegotiationState {
    type Error = InvalidNegotiationStateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Pending),
            2 => Ok(Self::InProgress),
            3 => Ok(Self::Accepted),
            4 => Ok(Self::Rejected),
            _ => Err(InvalidNegotiationStateError(value)),
        }
    }
}
