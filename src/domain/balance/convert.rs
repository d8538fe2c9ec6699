//! Conversion from the balance `data` record.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::wire::BalanceRecord;
use super::Balance;
use crate::error::SdkError;
use crate::shared::serde_util::{decode_data, malformed};
use crate::shared::{Address, TokenId};

impl Balance {
    /// Build a balance from the raw `data` value of a `queryBalance` reply.
    ///
    /// `null`, `""` and `{}` all yield an empty balance.
    pub fn from_data(address: Address, data: serde_json::Value) -> Result<Self, SdkError> {
        let record: BalanceRecord = decode_data(data)?;

        let holdings = record
            .into_iter()
            .map(|(token, raw)| {
                let s = raw.into_string();
                let amount = Decimal::from_str(s.trim()).map_err(|e| {
                    malformed(format!("invalid balance for {}: '{}': {}", token, s, e))
                })?;
                Ok((TokenId::new(token), amount))
            })
            .collect::<Result<_, SdkError>>()?;

        Ok(Self { address, holdings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn addr() -> Address {
        Address::from("1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm")
    }

    #[test]
    fn test_empty_shapes() {
        for data in [serde_json::Value::Null, json!(""), json!({}), json!("{}")] {
            let balance = Balance::from_data(addr(), data).unwrap();
            assert!(balance.is_empty());
            assert_eq!(balance.address, addr());
        }
    }

    #[test]
    fn test_mixed_amount_encodings() {
        let data = json!({"tok_1": "9900", "tok_2": 20000});
        let balance = Balance::from_data(addr(), data).unwrap();
        assert_eq!(balance.amount_of(&TokenId::from("tok_1")), Decimal::from(9900));
        assert_eq!(balance.amount_of(&TokenId::from("tok_2")), Decimal::from(20000));
    }

    #[test]
    fn test_string_encoded_record() {
        let data = json!("{\"tok_1\":\"1\"}");
        let balance = Balance::from_data(addr(), data).unwrap();
        assert_eq!(balance.amount_of(&TokenId::from("tok_1")), Decimal::ONE);
    }

    #[test]
    fn test_bad_amount() {
        let data = json!({"tok_1": "many"});
        let err = Balance::from_data(addr(), data).unwrap_err();
        assert!(err.is_transport(), "{err:?}");
    }

    #[test]
    fn test_unparseable_record_is_a_decode_failure() {
        let err = Balance::from_data(addr(), json!("not json")).unwrap_err();
        assert!(matches!(
            err,
            SdkError::Http(crate::error::HttpError::Decode(_))
        ));
        assert!(err.is_transport());
        assert!(!err.is_rejected());
    }
}
