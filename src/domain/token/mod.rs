//! Token domain: issuance and token lookups.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::{Address, TokenId};

/// An issued token as reported by `queryToken`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Echoed by some service builds; `None` when the record omits it.
    pub token_id: Option<TokenId>,
    /// Issuing (owner) address.
    pub owner: Option<Address>,
    pub name: String,
    pub total_supply: Option<Decimal>,
    /// The `data` record exactly as received.
    pub raw: serde_json::Value,
}

impl TokenInfo {
    /// Whether this record describes a token issued with `name` and `supply`.
    pub fn matches(&self, name: &str, supply: Decimal) -> bool {
        self.name == name && self.total_supply == Some(supply)
    }
}
