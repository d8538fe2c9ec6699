//! The uniform response envelope returned by every endpoint.
//!
//! ```json
//! {"status": true,  "message": "", "tokenID": "..."}
//! {"status": false, "message": "token not found"}
//! ```
//!
//! The payload key differs per endpoint (`tokenID`, `txID`, `data`), so the
//! payload type is flattened into the envelope and every payload field must
//! tolerate being absent on a rejection.

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// `{status, message, <payload>}` wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: bool,
    /// Present on failure. Older service builds call this field `msg`.
    #[serde(default, alias = "msg")]
    pub message: String,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Envelope<T> {
    /// A successful envelope.
    pub fn ok(payload: T) -> Self {
        Self {
            status: true,
            message: String::new(),
            payload,
        }
    }

    /// Turns `status: false` into [`SdkError::RemoteRejected`].
    pub fn into_result(self) -> Result<T, SdkError> {
        if self.status {
            Ok(self.payload)
        } else {
            Err(SdkError::RemoteRejected(self.message))
        }
    }
}

/// Payload of the query endpoints: an operation-specific `data` value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPayload {
    #[serde(default)]
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Issued {
        #[serde(rename = "tokenID", default)]
        token_id: Option<String>,
    }

    #[test]
    fn test_success_envelope() {
        let json = r#"{"status": true, "message": "", "tokenID": "tok_1"}"#;
        let env: Envelope<Issued> = serde_json::from_str(json).unwrap();
        let payload = env.into_result().unwrap();
        assert_eq!(payload.token_id.as_deref(), Some("tok_1"));
    }

    #[test]
    fn test_rejection_without_payload_key() {
        let json = r#"{"status": false, "message": "token not found"}"#;
        let env: Envelope<Issued> = serde_json::from_str(json).unwrap();
        let err = env.into_result().unwrap_err();
        assert_eq!(err.rejection_message(), Some("token not found"));
    }

    #[test]
    fn test_legacy_msg_field() {
        let json = r#"{"status": false, "msg": "bad signature"}"#;
        let env: Envelope<DataPayload> = serde_json::from_str(json).unwrap();
        assert_eq!(env.message, "bad signature");
    }

    #[test]
    fn test_missing_message_defaults_to_empty() {
        let json = r#"{"status": true, "data": {"a": "1"}}"#;
        let env: Envelope<DataPayload> = serde_json::from_str(json).unwrap();
        assert!(env.message.is_empty());
        assert_eq!(env.payload.data["a"], "1");
    }

    #[test]
    fn test_query_envelope_without_data_is_null() {
        let json = r#"{"status": true, "message": ""}"#;
        let env: Envelope<DataPayload> = serde_json::from_str(json).unwrap();
        assert!(env.payload.data.is_null());
    }
}
