//! # Identifier Types
//!
//! Strongly-typed identifiers for listings, offers, and users.
//!
//! ## UUID-based
//!
//! - [`ListingId`]: identifies a negotiable listing
//! - [`OfferId`]: identifies a single offer; generated with UUID v4 so ids
//!   are structurally collision-free even for offers created in the same
//!   instant
//!
//! ## String-based
//!
//! - [`UserId`]: opaque user identifier supplied by the identity provider
//!
//! # Examples
//!
//! ```
//! use bargain_engine::domain::value_objects::ids::{ListingId, OfferId, UserId};
//!
//! let listing = ListingId::new_v4();
//! let offer = OfferId::new_v4();
//! let user = UserId::new("user-1");
//!
//! assert_ne!(offer, OfferId::new_v4());
//! assert_eq!(user.as_str(), "user-1");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            #[must_use]
            pub fn new_v4() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID (e.g. when reconstructing from storage).
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parses an identifier from its string form.
            ///
            /// # Errors
            ///
            /// Returns a [`uuid::Error`] if the string is not a valid UUID.
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Uuid::parse_str(s).map(Self)
            }

            /// Returns the underlying UUID.
            #[inline]
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

uuid_id! {
    /// Unique identifier of a negotiable listing.
    ListingId
}

uuid_id! {
    /// Unique identifier of a single offer within a listing's thread.
    OfferId
}

/// Opaque user identifier supplied by the identity provider.
///
/// The engine never interprets the contents; it only compares identities
/// (e.g. to forbid a user responding to their own offer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a user id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod uuid_ids {
        use super::*;

        #[test]
        fn new_v4_is_unique() {
            let a = OfferId::new_v4();
            let b = OfferId::new_v4();
            assert_ne!(a, b);
        }

        #[test]
        fn parse_roundtrip() {
            let id = ListingId::new_v4();
            let parsed = ListingId::parse(&id.to_string()).unwrap();
            assert_eq!(id, parsed);
        }

        #[test]
        fn parse_rejects_garbage() {
            assert!(OfferId::parse("not-a-uuid").is_err());
        }

        #[test]
        fn from_uuid_preserves_value() {
            let uuid = Uuid::new_v4();
            let id = ListingId::from_uuid(uuid);
            assert_eq!(id.as_uuid(), &uuid);
        }

        #[test]
        fn serde_is_transparent() {
            let id = OfferId::new_v4();
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{id}\""));
            let back: OfferId = serde_json::from_str(&json).unwrap();
            assert_eq!(id, back);
        }
    }

    mod user_id {
        use super::*;

        #[test]
        fn new_and_as_str() {
            let id = UserId::new("user-42");
            assert_eq!(id.as_str(), "user-42");
        }

        #[test]
        fn equality_is_by_value() {
            assert_eq!(UserId::new("u1"), UserId::from("u1"));
            assert_ne!(UserId::new("u1"), UserId::new("u2"));
        }

        #[test]
        fn display() {
            assert_eq!(UserId::new("u1").to_string(), "u1");
        }

        #[test]
        fn serde_is_transparent() {
            let id = UserId::new("user-42");
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, "\"user-42\"");
        }
    }
}
