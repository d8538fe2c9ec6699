//! Transfer domain: signed transfers and transaction lookups.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::{Address, TokenId, TxId};

/// A transaction as reported by `queryTx`.
///
/// Typed fields are filled when the record carries them; `raw` always holds
/// the record as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfo {
    pub tx_id: Option<TxId>,
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub token_id: Option<TokenId>,
    pub amount: Option<Decimal>,
    pub raw: serde_json::Value,
}
