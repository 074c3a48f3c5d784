//! # Application Errors
//!
//! The caller-facing error taxonomy of the negotiation engine.
//!
//! Domain rule violations and store failures are folded into four
//! caller-visible categories plus transport-level catch-alls:
//!
//! - [`EngineError::InvalidArgument`]: malformed input (bad price, bad id)
//! - [`EngineError::InvalidState`]: the operation is not allowed in the
//!   listing's current negotiation state
//! - [`EngineError::NotFound`]: the listing or offer does not exist
//! - [`EngineError::Forbidden`]: role or identity rules forbid the caller
//! - [`EngineError::Conflict`]: concurrent writers could not be reconciled
//! - [`EngineError::Repository`]: the storage backend failed

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::traits::RepositoryError;
use thiserror::Error;

/// Error type for negotiation engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The input itself is malformed, regardless of engine state.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not allowed in the current negotiation state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A referenced entity does not exist.
    #[error("{resource_type} not found: {id}")]
    NotFound {
        /// The kind of missing entity.
        resource_type: &'static str,
        /// The missing entity's identifier.
        id: String,
    },

    /// Role or identity rules forbid the caller from this operation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Concurrent modifications could not be reconciled after retries.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The storage backend failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl EngineError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an invalid state error.
    #[must_use]
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Returns true if this is an invalid argument error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns true if this is an invalid state error.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a conflict error.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

impl From<DomainError> for EngineError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidPrice(_) | DomainError::Validation(_) => {
                Self::InvalidArgument(err.to_string())
            }
            DomainError::OfferNotFound { offer } => Self::NotFound {
                resource_type: "Offer",
                id: offer.to_string(),
            },
            DomainError::SelfResponse { .. } | DomainError::RoleNotAllowed { .. } => {
                Self::Forbidden(err.to_string())
            }
            DomainError::NegotiationAlreadyStarted { .. }
            | DomainError::NegotiationNotStarted
            | DomainError::NegotiationClosed { .. }
            | DomainError::InvalidStateTransition { .. }
            | DomainError::OfferNotPending { .. } => Self::InvalidState(err.to_string()),
        }
    }
}

/// Result type for application operations.
pub type EngineResult<T> = Result<T, EngineError>;
