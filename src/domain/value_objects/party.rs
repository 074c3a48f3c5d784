//! # Negotiation Parties
//!
//! Roles and acting principals in a two-party negotiation.
//!
//! A negotiation always involves a **provider** (the side offering the
//! service) and a **seeker** (the side looking to hire). The engine trusts
//! the identity provider to supply the acting [`Principal`] and performs
//! only the role checks the state machine requires.
//!
//! # Examples
//!
//! ```
//! use bargain_engine::domain::value_objects::party::{PartyRole, Principal};
//! use bargain_engine::domain::value_objects::ids::UserId;
//!
//! let seeker = Principal::new(UserId::new("user-1"), PartyRole::Seeker);
//! assert!(seeker.role().is_seeker());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::ids::UserId;

/// The side a user acts on in a negotiation.
///
/// Only a [`Seeker`](PartyRole::Seeker) may start a negotiation; once
/// started, both sides may submit counter-offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    /// The side offering the service (the selling side).
    Provider,

    /// The side looking to hire (the buying side).
    Seeker,
}

impl PartyRole {
    /// Returns true if this is the hiring side.
    #[inline]
    #[must_use]
    pub const fn is_seeker(&self) -> bool {
        matches!(self, Self::Seeker)
    }

    /// Returns true if this is the service-offering side.
    #[inline]
    #[must_use]
    pub const fn is_provider(&self) -> bool {
        matches!(self, Self::Provider)
    }

    /// Returns the opposite role.
    #[must_use]
    pub const fn counterparty(&self) -> Self {
        match self {
            Self::Provider => Self::Seeker,
            Self::Seeker => Self::Provider,
        }
    }
}

impl fmt::Display for PartyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Provider => "provider",
            Self::Seeker => "seeker",
        };
        write!(f, "{s}")
    }
}

/// Error returned when parsing an unknown role string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPartyRoleError(
    /// The unrecognized role string.
    pub String,
);

impl fmt::Display for InvalidPartyRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid party role: {}", self.0)
    }
}

impl std::error::Error for InvalidPartyRoleError {}

impl std::str::FromStr for PartyRole {
    type Err = InvalidPartyRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "provider" => Ok(Self::Provider),
            "seeker" => Ok(Self::Seeker),
            other => Err(InvalidPartyRoleError(other.to_string())),
        }
    }
}

/// The acting user as supplied by the identity provider.
///
/// The engine trusts this pair; verifying that the user genuinely holds the
/// claimed role is the identity provider's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    user_id: UserId,
    role: PartyRole,
}

impl Principal {
    /// Creates a principal from a user id and role.
    #[must_use]
    pub fn new(user_id: UserId, role: PartyRole) -> Self {
        Self { user_id, role }
    }

    /// Returns the acting user's id.
    #[inline]
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the role the user acts under.
    #[inline]
    #[must_use]
    pub fn role(&self) -> PartyRole {
        self.role
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.user_id, self.role)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn seeker_predicates() {
        assert!(PartyRole::Seeker.is_seeker());
        assert!(!PartyRole::Seeker.is_provider());
    }

    #[test]
    fn provider_predicates() {
        assert!(PartyRole::Provider.is_provider());
        assert!(!PartyRole::Provider.is_seeker());
    }

    #[test]
    fn counterparty_is_opposite() {
        assert_eq!(PartyRole::Seeker.counterparty(), PartyRole::Provider);
        assert_eq!(PartyRole::Provider.counterparty(), PartyRole::Seeker);
    }

    #[test]
    fn parses_wire_strings() {
        assert_eq!(PartyRole::from_str("provider").unwrap(), PartyRole::Provider);
        assert_eq!(PartyRole::from_str("seeker").unwrap(), PartyRole::Seeker);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = PartyRole::from_str("admin").unwrap_err();
        assert!(err.to_string().contains("admin"));
    }

    #[test]
    fn display_matches_wire_strings() {
        assert_eq!(PartyRole::Provider.to_string(), "provider");
        assert_eq!(PartyRole::Seeker.to_string(), "seeker");
    }

    #[test]
    fn principal_accessors() {
        let principal = Principal::new(UserId::new("user-7"), PartyRole::Provider);
        assert_eq!(principal.user_id().as_str(), "user-7");
        assert_eq!(principal.role(), PartyRole::Provider);
    }

    #[test]
    fn serde_roundtrip() {
        let principal = Principal::new(UserId::new("user-7"), PartyRole::Seeker);
        let json = serde_json::to_string(&principal).unwrap();
        let deserialized: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(principal, deserialized);
    }
}
