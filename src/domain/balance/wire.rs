//! Wire types for balance lookup.

use std::collections::BTreeMap;

use crate::shared::serde_util::StringOrNumber;

/// The `data` record of `GET /ocean/v1/queryBalance/{address}`:
/// token id → amount, amounts quoted or bare.
pub type BalanceRecord = BTreeMap<String, StringOrNumber>;
