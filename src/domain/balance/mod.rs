//! Balance domain: per-address token holdings.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::{Address, TokenId};

/// Holdings of one address, keyed by token id.
///
/// An address that never received anything has an empty balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub address: Address,
    pub holdings: BTreeMap<TokenId, Decimal>,
}

impl Balance {
    /// Amount held of `token_id`; zero when absent.
    pub fn amount_of(&self, token_id: &TokenId) -> Decimal {
        self.holdings
            .get(token_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// True when no token has a non-zero amount.
    pub fn is_empty(&self) -> bool {
        self.holdings.values().all(|v| v.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_of_defaults_to_zero() {
        let balance = Balance::default();
        assert!(balance.is_empty());
        assert_eq!(balance.amount_of(&TokenId::from("tok")), Decimal::ZERO);
    }

    #[test]
    fn test_zero_entries_count_as_empty() {
        let mut balance = Balance::default();
        balance.holdings.insert(TokenId::from("tok"), Decimal::ZERO);
        assert!(balance.is_empty());

        balance.holdings.insert(TokenId::from("tok2"), Decimal::from(3));
        assert!(!balance.is_empty());
        assert_eq!(balance.amount_of(&TokenId::from("tok2")), Decimal::from(3));
    }
}
