//! Conversion: TransactionResponse → Transaction.

use super::wire;
use super::{Transaction, TransactionKind, TransactionValidationError};
use chrono::{DateTime, Utc};

fn parse_kind(raw: &str) -> Option<TransactionKind> {
    match raw {
        "swap" => Some(TransactionKind::Swap),
        "mint" => Some(TransactionKind::Mint),
        "burn" => Some(TransactionKind::Burn),
        _ => None,
    }
}

impl TryFrom<wire::TransactionResponse> for Transaction {
    type Error = TransactionValidationError;

    fn try_from(source: wire::TransactionResponse) -> Result<Self, Self::Error> {
        let kind = parse_kind(&source.kind)
            .ok_or_else(|| TransactionValidationError::UnknownKind(source.kind.clone()))?;

        let timestamp = DateTime::<Utc>::from_timestamp(source.timestamp, 0)
            .ok_or(TransactionValidationError::InvalidTimestamp(source.timestamp))?;

        for (value, field) in [
            (source.amount_token0, "amountToken0"),
            (source.amount_token1, "amountToken1"),
            (source.amount_usd, "amountUSD"),
        ] {
            if !value.is_finite() {
                return Err(TransactionValidationError::NonFiniteAmount(
                    source.hash.clone(),
                    field,
                ));
            }
        }

        Ok(Transaction {
            kind,
            hash: source.hash,
            timestamp,
            sender: source.sender,
            token0_symbol: source.token0_symbol,
            token1_symbol: source.token1_symbol,
            amount_token0: source.amount_token0,
            amount_token1: source.amount_token1,
            amount_usd: source.amount_usd,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> wire::TransactionResponse {
        wire::TransactionResponse {
            kind: "swap".to_string(),
            hash: "0xhash".to_string(),
            timestamp: 1_704_067_200,
            sender: "0xsender".to_string(),
            token0_symbol: "WETH".to_string(),
            token1_symbol: "USDC".to_string(),
            amount_token0: 1.5,
            amount_token1: 4_500.0,
            amount_usd: 4_500.0,
        }
    }

    #[test]
    fn test_valid_transaction_converts() {
        let tx = Transaction::try_from(response()).unwrap();
        assert_eq!(tx.kind, TransactionKind::Swap);
        assert_eq!(tx.timestamp.timestamp(), 1_704_067_200);
    }

    #[test]
    fn test_unknown_kind_fails() {
        let mut resp = response();
        resp.kind = "collect".to_string();
        let err = Transaction::try_from(resp).unwrap_err();
        assert_eq!(err, TransactionValidationError::UnknownKind("collect".to_string()));
    }

    #[test]
    fn test_wire_type_field_is_renamed() {
        let json = r#"{
            "type": "burn",
            "hash": "0xabc",
            "timestamp": 1704067200,
            "sender": "0xdef",
            "token0Symbol": "CHR",
            "token1Symbol": "WETH",
            "amountToken0": 10.0,
            "amountToken1": 0.5,
            "amountUSD": 1500.0
        }"#;
        let resp: wire::TransactionResponse = serde_json::from_str(json).unwrap();
        let tx = Transaction::try_from(resp).unwrap();
        assert_eq!(tx.kind, TransactionKind::Burn);
        assert_eq!(tx.amount_usd, 1500.0);
    }

    #[test]
    fn test_non_finite_amount_fails() {
        let mut resp = response();
        resp.amount_usd = f64::NAN;
        let err = Transaction::try_from(resp).unwrap_err();
        assert!(matches!(err, TransactionValidationError::NonFiniteAmount(_, "amountUSD")));
    }
}
