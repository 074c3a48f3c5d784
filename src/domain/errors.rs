//! # Domain Errors
//!
//! Error types for business rule violations inside the negotiation aggregate.
//!
//! Every variant names the precise rule that failed; the application layer
//! maps these onto the caller-facing taxonomy (`InvalidArgument`,
//! `InvalidState`, `NotFound`, `Forbidden`) in `application::error`.
//!
//! # Examples
//!
//! ```
//! use bargain_engine::domain::errors::DomainError;
//! use bargain_engine::domain::value_objects::NegotiationState;
//!
//! let err = DomainError::NegotiationClosed {
//!     state: NegotiationState::Accepted,
//! };
//! assert!(err.to_string().contains("accepted"));
//! ```

use crate::domain::value_objects::{NegotiationState, OfferId, OfferStatus, PartyRole};
use thiserror::Error;

/// Business rule violation inside the negotiation domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A price failed validation (non-positive, NaN, or infinite).
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A negotiation already exists on the listing.
    #[error("negotiation already started (state is {state})")]
    NegotiationAlreadyStarted {
        /// The listing's current negotiation state.
        state: NegotiationState,
    },

    /// The operation needs an open negotiation but none has been started.
    #[error("negotiation has not been started")]
    NegotiationNotStarted,

    /// The negotiation is closed and accepts no further offers.
    #[error("negotiation is closed (state is {state})")]
    NegotiationClosed {
        /// The terminal state the listing is in.
        state: NegotiationState,
    },

    /// The requested state transition is not part of the state machine.
    #[error("invalid negotiation state transition: {from} -> {to}")]
    InvalidStateTransition {
        /// Current state.
        from: NegotiationState,
        /// Requested state.
        to: NegotiationState,
    },

    /// The referenced offer does not exist on the listing.
    #[error("offer not found: {offer}")]
    OfferNotFound {
        /// The missing offer's id.
        offer: OfferId,
    },

    /// The offer has already been resolved and cannot change status.
    #[error("offer {offer} is not pending (status is {status})")]
    OfferNotPending {
        /// The offer's id.
        offer: OfferId,
        /// The offer's resolved status.
        status: OfferStatus,
    },

    /// A party may not accept or reject its own offer.
    #[error("cannot respond to own offer {offer}")]
    SelfResponse {
        /// The offer the submitter tried to respond to.
        offer: OfferId,
    },

    /// The acting role is not permitted to perform the operation.
    #[error("role {role} may not {action}")]
    RoleNotAllowed {
        /// The acting role.
        role: PartyRole,
        /// The attempted operation, human-readable.
        action: &'static str,
    },

    /// A generic validation failure not covered by a specific variant.
    #[error("validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if this error is a price/input validation failure.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidPrice(_) | Self::Validation(_))
    }

    /// Returns true if this error is a role or identity rule violation.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::SelfResponse { .. } | Self::RoleNotAllowed { .. })
    }

    /// Returns true if this error reports a missing offer.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::OfferNotFound { .. })
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_price_is_invalid_argument() {
        let err = DomainError::InvalidPrice("got -5".to_string());
        assert!(err.is_invalid_argument());
        assert!(!err.is_forbidden());
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn self_response_is_forbidden() {
        let err = DomainError::SelfResponse {
            offer: OfferId::new_v4(),
        };
        assert!(err.is_forbidden());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn role_not_allowed_is_forbidden() {
        let err = DomainError::RoleNotAllowed {
            role: PartyRole::Provider,
            action: "start a negotiation",
        };
        assert!(err.is_forbidden());
        assert!(err.to_string().contains("provider"));
        assert!(err.to_string().contains("start a negotiation"));
    }

    #[test]
    fn offer_not_found_is_not_found() {
        let offer = OfferId::new_v4();
        let err = DomainError::OfferNotFound { offer };
        assert!(err.is_not_found());
        assert!(err.to_string().contains(&offer.to_string()));
    }

    #[test]
    fn transition_error_names_both_states() {
        let err = DomainError::InvalidStateTransition {
            from: NegotiationState::Accepted,
            to: NegotiationState::InProgress,
        };
        let msg = err.to_string();
        assert!(msg.contains("accepted"));
        assert!(msg.contains("in_progress"));
    }

    #[test]
    fn closed_error_names_state() {
        let err = DomainError::NegotiationClosed {
            state: NegotiationState::Accepted,
        };
        assert!(err.to_string().contains("accepted"));
    }
}
