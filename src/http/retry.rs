//! Retry for the read-only queries.
//!
//! `queryToken`, `queryBalance` and `queryTx` can be repeated safely. The
//! signed writes never go through here: a repeated transfer is a second transfer.

use std::time::Duration;

use crate::error::HttpError;

/// How many times a query is attempted and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRetry {
    /// Total attempts including the first. `1` means no retry.
    pub attempts: u32,
    /// Wait before the first retry; doubles for each one after.
    pub backoff: Duration,
}

impl Default for QueryRetry {
    fn default() -> Self {
        Self::NEVER
    }
}

impl QueryRetry {
    /// Single attempt.
    pub const NEVER: Self = Self {
        attempts: 1,
        backoff: Duration::ZERO,
    };

    /// `attempts` of 0 is treated as 1.
    pub fn new(attempts: u32, backoff: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            backoff,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.attempts > 1
    }

    /// Wait before retry number `retry` (1-based).
    pub fn backoff_before(&self, retry: u32) -> Duration {
        let doublings = retry.saturating_sub(1).min(16);
        self.backoff.saturating_mul(1u32 << doublings)
    }

    /// Transport failures and gateway errors; never a 4xx or a decoding failure.
    pub fn is_retryable(error: &HttpError) -> bool {
        match error {
            HttpError::Timeout => true,
            HttpError::ServerError { status, .. } => matches!(status, 502 | 503 | 504),
            HttpError::Reqwest(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}
