//! Conversions from wire types to domain types for tokens.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::wire::TokenRecord;
use super::TokenInfo;
use crate::error::SdkError;
use crate::shared::serde_util::{decode_data, malformed};

impl TryFrom<serde_json::Value> for TokenInfo {
    type Error = SdkError;

    fn try_from(data: serde_json::Value) -> Result<Self, Self::Error> {
        let record: TokenRecord = decode_data(data.clone())?;
        if record.token_name.is_empty() && record.total_number.is_none() {
            return Err(malformed(format!(
                "token record has neither name nor supply: {}",
                data
            )));
        }

        let total_supply = record
            .total_number
            .as_deref()
            .map(|s| {
                Decimal::from_str(s.trim()).map_err(|e| {
                    malformed(format!("invalid totalNumber '{}': {}", s, e))
                })
            })
            .transpose()?;

        Ok(Self {
            token_id: record.token_id.filter(|id| !id.is_empty()),
            owner: record.address.filter(|a| !a.is_empty()),
            name: record.token_name,
            total_supply,
            raw: data,
        })
    }
}
