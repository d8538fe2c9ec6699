//! Positive token quantities.
//!
//! The service exchanges quantities as JSON strings (`"totalNumber": "10000"`),
//! so [`Amount`] serializes as its plain decimal string and accepts either a
//! string or a JSON number on input.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::SdkError;

/// A strictly positive token quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Wrap a decimal, rejecting zero and negative values.
    ///
    /// The scale is kept as given, so `"1.50"` is sent as `"1.50"`.
    pub fn new(value: Decimal) -> Result<Self, SdkError> {
        if value <= Decimal::ZERO {
            return Err(SdkError::Validation(format!(
                "amount must be positive, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| SdkError::Validation(format!("invalid amount '{}': {}", s, e)))?;
        Self::new(value)
    }
}

impl TryFrom<u32> for Amount {
    type Error = SdkError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(Decimal::from(n))
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = SdkError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = super::serde_util::StringOrNumber::deserialize(deserializer)?;
        Amount::from_str(&raw.into_string()).map_err(serde::de::Error::custom)
    }
}
