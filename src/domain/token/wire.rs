//! Wire types for token issuance and lookup.

use serde::{Deserialize, Serialize};

use crate::shared::serde_util::opt_string_or_number;
use crate::shared::{Address, Amount, TokenId};

/// Signed payload for `POST /ocean/v1/issueToken`.
///
/// Field order is part of the signature: do not reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTokenPayload {
    pub address: Address,
    pub token_name: String,
    pub total_number: Amount,
}

/// Payload of a successful issuance envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuedToken {
    #[serde(rename = "tokenID", default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
}

/// The `data` record of `GET /ocean/v1/queryToken/{tokenId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    #[serde(
        rename = "tokenID",
        alias = "tokenId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub token_id: Option<TokenId>,
    #[serde(alias = "owner", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(rename = "tokenName", alias = "name", default)]
    pub token_name: String,
    #[serde(
        rename = "totalNumber",
        alias = "totalSupply",
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_number: Option<String>,
}
