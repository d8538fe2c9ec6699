//! Wire types for transfers and transaction lookup.

use serde::{Deserialize, Serialize};

use crate::shared::serde_util::opt_string_or_number;
use crate::shared::{Address, Amount, TokenId, TxId};

/// Signed payload for `POST /ocean/v1/transfer`.
///
/// Field order is part of the signature: do not reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPayload {
    pub from_address: Address,
    pub to_address: Address,
    pub token_id: TokenId,
    pub amount: Amount,
}

/// Payload of a successful transfer envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmittedTransfer {
    #[serde(rename = "txID", default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<TxId>,
}

/// The `data` record of `GET /ocean/v1/queryTx/{txId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(
        rename = "txID",
        alias = "txId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tx_id: Option<TxId>,
    #[serde(
        rename = "fromAddress",
        alias = "from",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub from_address: Option<Address>,
    #[serde(
        rename = "toAddress",
        alias = "to",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub to_address: Option<Address>,
    #[serde(
        rename = "tokenId",
        alias = "tokenID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub token_id: Option<TokenId>,
    #[serde(
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<String>,
}
