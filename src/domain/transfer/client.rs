//! Transfers sub-client: signed transfers and transaction lookup.

use crate::client::OceanClient;
use crate::domain::transfer::wire::TransferPayload;
use crate::domain::transfer::TransactionInfo;
use crate::error::SdkError;
use crate::shared::{Address, Amount, TokenId, TxId};
use crate::signing::{SignedEnvelope, Wallet};

pub struct Transfers<'a> {
    pub(crate) client: &'a OceanClient,
}

impl<'a> Transfers<'a> {
    /// Move `amount` of `token_id` from `from` to `to`, signed by `from`.
    ///
    /// Not idempotent: calling twice submits two transfers.
    pub async fn send(
        &self,
        token_id: &TokenId,
        from: &Wallet,
        to: &Address,
        amount: Amount,
    ) -> Result<TxId, SdkError> {
        if token_id.is_empty() {
            return Err(SdkError::Validation("token id must not be empty".into()));
        }
        if to.is_empty() {
            return Err(SdkError::Validation("recipient address must not be empty".into()));
        }

        let payload = TransferPayload {
            from_address: from.address().clone(),
            to_address: to.clone(),
            token_id: token_id.clone(),
            amount,
        };
        let envelope = SignedEnvelope::sign(from, &payload)?;

        tracing::debug!(from = %from.address(), to = %to, "Transfer start");

        let submitted = self
            .client
            .http
            .transfer(&envelope)
            .await?
            .into_result()?;

        let tx_id = submitted
            .tx_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| SdkError::Validation("transfer succeeded without a txID".into()))?;

        tracing::info!(
            token_id = %token_id,
            from = %from.address(),
            to = %to,
            amount = %amount,
            tx_id = %tx_id,
            "Transfer accepted"
        );
        Ok(tx_id)
    }

    /// Look up a submitted transaction.
    pub async fn get(&self, tx_id: &TxId) -> Result<TransactionInfo, SdkError> {
        let data = self
            .client
            .http
            .query_tx(tx_id)
            .await?
            .into_result()?
            .data;
        TransactionInfo::try_from(data)
    }
}
