//! Bounded concurrent fan-out over many wallets.
//!
//! Every job runs to completion; one failure does not cancel the rest. Results
//! come back in input order so each wallet can be reported individually.

use futures_util::stream::{self, StreamExt};
use rust_decimal::Decimal;

use crate::client::OceanClient;
use crate::domain::balance::Balance;
use crate::error::SdkError;
use crate::shared::{Address, Amount, TokenId, TxId};
use crate::signing::Wallet;

/// Default number of in-flight requests.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// One transfer to perform.
#[derive(Debug, Clone)]
pub struct TransferOrder {
    pub from: Wallet,
    pub to: Address,
    pub amount: Amount,
}

impl TransferOrder {
    pub fn new(from: Wallet, to: Address, amount: Amount) -> Self {
        Self { from, to, amount }
    }

    /// Pair `senders[i]` with `receivers[i]`; extra entries on either side are ignored.
    pub fn pairwise(senders: &[Wallet], receivers: &[Address], amount: Amount) -> Vec<Self> {
        senders
            .iter()
            .zip(receivers)
            .map(|(from, to)| Self::new(from.clone(), to.clone(), amount))
            .collect()
    }
}

/// Result of one [`TransferOrder`].
#[derive(Debug)]
pub struct TransferOutcome {
    pub from: Address,
    pub to: Address,
    pub result: Result<TxId, SdkError>,
}

impl TransferOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Result of one balance lookup.
#[derive(Debug)]
pub struct BalanceOutcome {
    pub address: Address,
    pub result: Result<Balance, SdkError>,
}

/// Tally of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn of(outcomes: &[TransferOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_ok()).count();
        Self {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Run `orders` with at most `concurrency` transfers in flight.
///
/// A `concurrency` of 0 is treated as 1.
pub async fn transfer_all(
    client: &OceanClient,
    token_id: &TokenId,
    orders: Vec<TransferOrder>,
    concurrency: usize,
) -> Vec<TransferOutcome> {
    let total = orders.len();
    tracing::info!(total, concurrency, token_id = %token_id, "Batch transfer start");

    let outcomes: Vec<TransferOutcome> = stream::iter(orders)
        .map(|order| async move {
            let result = client
                .transfers()
                .send(token_id, &order.from, &order.to, order.amount)
                .await;
            if let Err(e) = &result {
                tracing::error!(from = %order.from.address(), to = %order.to, error = %e, "Transfer failed");
            }
            TransferOutcome {
                from: order.from.address().clone(),
                to: order.to,
                result,
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let summary = BatchSummary::of(&outcomes);
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Batch transfer end"
    );
    outcomes
}

/// Look up many balances with at most `concurrency` requests in flight.
pub async fn query_balances(
    client: &OceanClient,
    addresses: Vec<Address>,
    concurrency: usize,
) -> Vec<BalanceOutcome> {
    stream::iter(addresses)
        .map(|address| async move {
            let result = client.balances().get(&address).await;
            BalanceOutcome { address, result }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// Sum of `token_id` across every successful lookup.
pub fn total_of(outcomes: &[BalanceOutcome], token_id: &TokenId) -> Decimal {
    outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .map(|b| b.amount_of(token_id))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairwise_truncates_to_shorter_side() {
        let senders = Wallet::generate_many(3);
        let receivers: Vec<Address> = Wallet::generate_many(2)
            .iter()
            .map(|w| w.address().clone())
            .collect();
        let orders = TransferOrder::pairwise(&senders, &receivers, "1".parse().unwrap());
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].from.address(), senders[1].address());
        assert_eq!(orders[1].to, receivers[1]);
    }

    #[test]
    fn test_summary() {
        let outcomes = vec![
            TransferOutcome {
                from: Address::from("a"),
                to: Address::from("b"),
                result: Ok(TxId::from("tx")),
            },
            TransferOutcome {
                from: Address::from("c"),
                to: Address::from("d"),
                result: Err(SdkError::RemoteRejected("insufficient balance".into())),
            },
        ];
        let summary = BatchSummary::of(&outcomes);
        assert_eq!(summary, BatchSummary { succeeded: 1, failed: 1 });
        assert!(!summary.all_succeeded());
    }

    #[test]
    fn test_total_of_skips_failures() {
        let token = TokenId::from("tok");
        let mut ok = Balance::default();
        ok.holdings.insert(token.clone(), Decimal::from(5));
        let outcomes = vec![
            BalanceOutcome {
                address: Address::from("a"),
                result: Ok(ok.clone()),
            },
            BalanceOutcome {
                address: Address::from("b"),
                result: Ok(ok),
            },
            BalanceOutcome {
                address: Address::from("c"),
                result: Err(SdkError::Other("down".into())),
            },
        ];
        assert_eq!(total_of(&outcomes, &token), Decimal::from(10));
    }
}
