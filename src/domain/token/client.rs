//! Tokens sub-client: issuance and lookup.

use crate::client::OceanClient;
use crate::domain::token::wire::IssueTokenPayload;
use crate::domain::token::TokenInfo;
use crate::error::SdkError;
use crate::shared::{Amount, TokenId};
use crate::signing::{SignedEnvelope, Wallet};

pub struct Tokens<'a> {
    pub(crate) client: &'a OceanClient,
}

impl<'a> Tokens<'a> {
    /// Issue a new token owned by `owner`, returning the service-assigned id.
    pub async fn issue(
        &self,
        owner: &Wallet,
        name: &str,
        total_supply: Amount,
    ) -> Result<TokenId, SdkError> {
        if name.trim().is_empty() {
            return Err(SdkError::Validation("token name must not be empty".into()));
        }

        let payload = IssueTokenPayload {
            address: owner.address().clone(),
            token_name: name.to_string(),
            total_number: total_supply,
        };
        let envelope = SignedEnvelope::sign(owner, &payload)?;

        let issued = self
            .client
            .http
            .issue_token(&envelope)
            .await?
            .into_result()?;

        let token_id = issued
            .token_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| SdkError::Validation("issueToken succeeded without a tokenID".into()))?;

        tracing::info!(
            owner = %owner.address(),
            token_name = name,
            supply = %total_supply,
            token_id = %token_id,
            "Issued token"
        );
        Ok(token_id)
    }

    /// Look up an issued token.
    pub async fn get(&self, token_id: &TokenId) -> Result<TokenInfo, SdkError> {
        let data = self
            .client
            .http
            .query_token(token_id)
            .await?
            .into_result()?
            .data;
        TokenInfo::try_from(data)
    }
}
