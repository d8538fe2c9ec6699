//! High-level client: `OceanClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the accessor methods, and flat wrappers that
//! take raw address / WIF strings.

use crate::config::OceanConfig;
use crate::domain::balance::client::Balances;
use crate::domain::balance::Balance;
use crate::domain::token::client::Tokens;
use crate::domain::token::TokenInfo;
use crate::domain::transfer::client::Transfers;
use crate::domain::transfer::TransactionInfo;
use crate::error::SdkError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::{OceanHttp, QueryRetry};
use crate::shared::{Address, Amount, TokenId, TxId};
use crate::signing::Wallet;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::balance::client::Balances as BalancesClient;
pub use crate::domain::token::client::Tokens as TokensClient;
pub use crate::domain::transfer::client::Transfers as TransfersClient;

/// The primary entry point for the Ocean SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.tokens()`, `client.transfers()`, `client.balances()`.
///
/// Holds no state beyond the connection pool; clone freely across tasks.
#[derive(Clone)]
pub struct OceanClient {
    pub(crate) http: OceanHttp,
}

impl OceanClient {
    pub fn builder() -> OceanClientBuilder {
        OceanClientBuilder::default()
    }

    /// Build a client from a loaded [`OceanConfig`].
    pub fn from_config(config: &OceanConfig) -> Result<Self, SdkError> {
        config.validate()?;
        Self::builder()
            .base_url(&config.api_url())
            .timeout(config.timeout())
            .build()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// The low-level HTTP client.
    pub fn http(&self) -> &OceanHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    pub fn transfers(&self) -> Transfers<'_> {
        Transfers { client: self }
    }

    pub fn balances(&self) -> Balances<'_> {
        Balances { client: self }
    }

    // ── Flat calls ───────────────────────────────────────────────────────

    /// Issue `total_supply` units of a token named `name` to `owner_address`,
    /// signed with `owner_wif`.
    pub async fn issue_token(
        &self,
        owner_address: &str,
        owner_wif: &str,
        name: &str,
        total_supply: &str,
    ) -> Result<TokenId, SdkError> {
        let owner = Wallet::new(owner_address, owner_wif)?;
        let supply: Amount = total_supply.parse()?;
        self.tokens().issue(&owner, name, supply).await
    }

    /// Transfer `amount` of `token_id` from `from_address` (signed with
    /// `from_wif`) to `to_address`.
    pub async fn transfer(
        &self,
        token_id: &str,
        from_address: &str,
        from_wif: &str,
        to_address: &str,
        amount: &str,
    ) -> Result<TxId, SdkError> {
        let from = Wallet::new(from_address, from_wif)?;
        let amount: Amount = amount.parse()?;
        self.transfers()
            .send(
                &TokenId::from(token_id),
                &from,
                &Address::from(to_address),
                amount,
            )
            .await
    }

    pub async fn query_token(&self, token_id: &str) -> Result<TokenInfo, SdkError> {
        self.tokens().get(&TokenId::from(token_id)).await
    }

    pub async fn query_balance(&self, address: &str) -> Result<Balance, SdkError> {
        self.balances().get(&Address::from(address)).await
    }

    pub async fn query_transaction(&self, tx_id: &str) -> Result<TransactionInfo, SdkError> {
        self.transfers().get(&TxId::from(tx_id)).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct OceanClientBuilder {
    base_url: String,
    timeout: Duration,
    query_retry: QueryRetry,
}

impl Default for OceanClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            query_retry: QueryRetry::NEVER,
        }
    }
}

impl OceanClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry policy for the GET queries. Signed writes are never retried.
    pub fn query_retry(mut self, retry: QueryRetry) -> Self {
        self.query_retry = retry;
        self
    }

    pub fn build(self) -> Result<OceanClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base URL must not be empty".into()));
        }
        Ok(OceanClient {
            http: OceanHttp::new(&self.base_url, self.timeout)?.with_query_retry(self.query_retry),
        })
    }
}
