//! Balances sub-client.

use crate::client::OceanClient;
use crate::domain::balance::Balance;
use crate::error::SdkError;
use crate::shared::Address;

pub struct Balances<'a> {
    pub(crate) client: &'a OceanClient,
}

impl<'a> Balances<'a> {
    /// Holdings of `address`. Unknown addresses yield an empty balance.
    pub async fn get(&self, address: &Address) -> Result<Balance, SdkError> {
        let data = self
            .client
            .http
            .query_balance(address)
            .await?
            .into_result()?
            .data;
        let balance = Balance::from_data(address.clone(), data)?;
        tracing::debug!(address = %address, holdings = ?balance.holdings, "Balance");
        Ok(balance)
    }
}
