//! Low-level HTTP client: `OceanHttp`.
//!
//! One method per API endpoint. Returns raw envelopes; the status check and
//! conversion to domain types happen in the sub-clients.

use crate::domain::token::wire::IssuedToken;
use crate::domain::transfer::wire::SubmittedTransfer;
use crate::error::HttpError;
use crate::http::retry::QueryRetry;
use crate::network::{paths, API_PREFIX};
use crate::shared::{Address, DataPayload, Envelope, TokenId, TxId};
use crate::signing::SignedEnvelope;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the Ocean REST API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct OceanHttp {
    base_url: String,
    client: Client,
    /// Applied to the GET queries only.
    query_retry: QueryRetry,
}

impl OceanHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            query_retry: QueryRetry::NEVER,
        })
    }

    pub fn with_query_retry(mut self, retry: QueryRetry) -> Self {
        self.query_retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_url, API_PREFIX, path)
    }

    fn endpoint_with_id(&self, path: &str, id: &str) -> String {
        format!(
            "{}{}/{}/{}",
            self.base_url,
            API_PREFIX,
            path,
            urlencoding::encode(id)
        )
    }

    // ── Signed writes ────────────────────────────────────────────────────

    pub async fn issue_token(
        &self,
        body: &SignedEnvelope,
    ) -> Result<Envelope<IssuedToken>, HttpError> {
        let url = self.endpoint(paths::ISSUE_TOKEN);
        self.post(&url, body).await
    }

    pub async fn transfer(
        &self,
        body: &SignedEnvelope,
    ) -> Result<Envelope<SubmittedTransfer>, HttpError> {
        let url = self.endpoint(paths::TRANSFER);
        self.post(&url, body).await
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub async fn query_token(
        &self,
        token_id: &TokenId,
    ) -> Result<Envelope<DataPayload>, HttpError> {
        let url = self.endpoint_with_id(paths::QUERY_TOKEN, token_id.as_str());
        self.get(&url).await
    }

    pub async fn query_balance(
        &self,
        address: &Address,
    ) -> Result<Envelope<DataPayload>, HttpError> {
        let url = self.endpoint_with_id(paths::QUERY_BALANCE, address.as_str());
        self.get(&url).await
    }

    pub async fn query_tx(&self, tx_id: &TxId) -> Result<Envelope<DataPayload>, HttpError> {
        let url = self.endpoint_with_id(paths::QUERY_TX, tx_id.as_str());
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let retry = self.query_retry;
        let mut attempt = 1;
        loop {
            match self.do_request(&reqwest::Method::GET, url, None::<&()>).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < retry.attempts && QueryRetry::is_retryable(&e) => {
                    let delay = retry.backoff_before(attempt);
                    tracing::debug!(
                        attempt,
                        max = retry.attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        url,
                        "Retrying query"
                    );
                    futures_timer::Delay::new(delay).await;
                    attempt += 1;
                }
                Err(e) if attempt > 1 && QueryRetry::is_retryable(&e) => {
                    return Err(HttpError::MaxRetriesExceeded {
                        attempts: attempt,
                        last_error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Writes are single-shot regardless of the configured query retry.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(&reqwest::Method::POST, url, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();
        let text = resp.text().await?;

        tracing::debug!(%method, url, status = status.as_u16(), body = %text, "Response");

        if status.is_success() {
            return serde_json::from_str::<T>(&text).map_err(|e| {
                HttpError::Decode(format!("{} (body: {})", e, truncate(&text, 256)))
            });
        }

        // A rejection envelope on an error status is still a rejection; hand it
        // back so the caller reports the service's message.
        if let Ok(rejection) = serde_json::from_str::<Rejection>(&text) {
            if !rejection.status {
                if let Ok(envelope) = serde_json::from_str::<T>(&text) {
                    return Ok(envelope);
                }
            }
        }

        let status_code = status.as_u16();
        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: text,
            }),
        }
    }
}

/// Just enough of an envelope to recognise a rejection.
#[derive(Deserialize)]
struct Rejection {
    status: bool,
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let http = OceanHttp::new("http://127.0.0.1:4000/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(http.base_url(), "http://127.0.0.1:4000");
        assert_eq!(
            http.endpoint(paths::ISSUE_TOKEN),
            "http://127.0.0.1:4000/ocean/v1/issueToken"
        );
        assert_eq!(
            http.endpoint_with_id(paths::QUERY_BALANCE, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"),
            "http://127.0.0.1:4000/ocean/v1/queryBalance/1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let http = OceanHttp::new("http://h", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            http.endpoint_with_id(paths::QUERY_TX, "a/b c"),
            "http://h/ocean/v1/queryTx/a%2Fb%20c"
        );
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
