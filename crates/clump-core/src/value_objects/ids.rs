//! Typed identifiers for domain entities
//!
//! Each id wraps the `i64` key the database generates (`BIGSERIAL`), so an
//! `EventId` can never be passed where a `UserId` is expected. Identifiers
//! are opaque: the domain only ever compares them for equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an identifier from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid identifier format")]
    InvalidFormat,
}

/// Identifier for a person (the actor in join/leave operations)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(i64);

/// Identifier for an event
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(i64);

/// Identifier for a calendar category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(i64);

/// Identifier for an event forum
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ForumId(i64);

/// Identifier for a forum comment
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CommentId(i64);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            /// Create an identifier from a raw i64 value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Parse from string representation
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                s.parse::<i64>()
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

impl_id!(UserId);
impl_id!(EventId);
impl_id!(CategoryId);
impl_id!(ForumId);
impl_id!(CommentId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = EventId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(EventId::from(42), id);
    }

    #[test]
    fn test_id_parse() {
        let id = UserId::parse("123").unwrap();
        assert_eq!(id.into_inner(), 123);

        assert!(UserId::parse("not a number").is_err());
        assert_eq!("77".parse::<CommentId>().unwrap(), CommentId::new(77));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ForumId::new(9).to_string(), "9");
    }

    #[test]
    fn test_id_serde_number() {
        let json = serde_json::to_string(&EventId::new(314)).unwrap();
        assert_eq!(json, "314");

        let id: EventId = serde_json::from_str("314").unwrap();
        assert_eq!(id, EventId::new(314));
    }

    #[test]
    fn test_ids_are_distinct_types() {
        fn takes_event(_: EventId) {}
        takes_event(EventId::new(1));
        // takes_event(UserId::new(1)); // would not compile
    }
}
