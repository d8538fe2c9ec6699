//! Unified SDK error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The service answered with `status: false`.
    #[error("Remote rejected request: {0}")]
    RemoteRejected(String),

    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// Connection, timeout, status-code or decoding failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::Http(_))
    }

    /// The service processed the request and refused it.
    pub fn is_rejected(&self) -> bool {
        matches!(self, SdkError::RemoteRejected(_))
    }

    /// The server's rejection message, if this is a rejection.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            SdkError::RemoteRejected(msg) => Some(msg),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Undecodable response: {0}")]
    Decode(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Key handling and signature errors.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("Invalid WIF private key: {0}")]
    InvalidWif(String),

    #[error("Invalid hex in {field}: {source}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid signature encoding: {0}")]
    InvalidSignature(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let rejected = SdkError::RemoteRejected("token not found".into());
        assert!(rejected.is_rejected());
        assert!(!rejected.is_transport());
        assert_eq!(rejected.rejection_message(), Some("token not found"));

        let transport = SdkError::from(HttpError::Timeout);
        assert!(transport.is_transport());
        assert!(!transport.is_rejected());
        assert_eq!(transport.rejection_message(), None);
    }

    #[test]
    fn test_display_carries_server_message() {
        let err = SdkError::RemoteRejected("insufficient balance".into());
        assert_eq!(
            err.to_string(),
            "Remote rejected request: insufficient balance"
        );
    }
}
