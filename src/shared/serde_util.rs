//! Custom serde helpers for the service's wire formats.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::{HttpError, SdkError};

/// A scalar that the service sends either quoted or as a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    pub fn into_string(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

/// Deserializes an optional string-or-number field into `Option<String>`.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(raw.map(StringOrNumber::into_string))
}

/// Decodes a `data` field that may hold the value itself or a string of JSON.
///
/// Chaincode-backed endpoints hand back the stored bytes verbatim, so the same
/// record can arrive as `{"tokenName": ...}` or `"{\"tokenName\": ...}"`.
/// `null` and blank strings decode to `T::default()`.
///
/// Undecodable input is a transport-level [`HttpError::Decode`].
pub fn decode_data<T>(value: serde_json::Value) -> Result<T, SdkError>
where
    T: DeserializeOwned + Default,
{
    let decoded = match value {
        serde_json::Value::Null => Ok(T::default()),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(T::default()),
        serde_json::Value::String(s) => serde_json::from_str(&s),
        other => serde_json::from_value(other),
    };
    decoded.map_err(malformed)
}

/// A `data` record the client cannot make sense of.
pub(crate) fn malformed(detail: impl std::fmt::Display) -> SdkError {
    SdkError::Http(HttpError::Decode(format!("malformed data record: {}", detail)))
}
