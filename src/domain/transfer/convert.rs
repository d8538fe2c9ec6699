//! Conversions from wire types to domain types for transactions.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::wire::TransactionRecord;
use super::TransactionInfo;
use crate::error::SdkError;
use crate::shared::serde_util::{decode_data, malformed};

impl TryFrom<serde_json::Value> for TransactionInfo {
    type Error = SdkError;

    fn try_from(data: serde_json::Value) -> Result<Self, Self::Error> {
        if data.is_null() {
            return Err(malformed("transaction record is empty"));
        }
        let record: TransactionRecord = decode_data(data.clone())?;

        let amount = record
            .amount
            .as_deref()
            .map(|s| {
                Decimal::from_str(s.trim())
                    .map_err(|e| malformed(format!("invalid amount '{}': {}", s, e)))
            })
            .transpose()?;

        Ok(Self {
            tx_id: record.tx_id,
            from: record.from_address,
            to: record.to_address,
            token_id: record.token_id,
            amount,
            raw: data,
        })
    }
}
