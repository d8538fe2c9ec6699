//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw strings the service sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod amount;
pub mod envelope;
pub mod serde_util;

pub use amount::Amount;
pub use envelope::{DataPayload, Envelope};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Declares a string newtype with the same surface as the other identifiers.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self(s))
            }
        }
    };
}

// ─── TokenId ─────────────────────────────────────────────────────────────────

string_id! {
    /// Identifier the service assigns to an issued token.
    TokenId
}

// ─── TxId ────────────────────────────────────────────────────────────────────

string_id! {
    /// Identifier the service assigns to a submitted transfer.
    TxId
}

// ─── Address ─────────────────────────────────────────────────────────────────

string_id! {
    /// A wallet address (base58check P2PKH string).
    Address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_id_serde_is_transparent() {
        let id = TokenId::new("tok_42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""tok_42""#);

        let back: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_address_display_and_from() {
        let addr = Address::from("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert_eq!(addr.to_string(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert!(!addr.is_empty());
        assert!(Address::default().is_empty());
    }
}
