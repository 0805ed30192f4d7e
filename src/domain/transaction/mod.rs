//! Transaction domain — swaps, mints, and burns for the transactions table.

pub mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of on-chain action a row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Swap,
    Mint,
    Burn,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swap => "swap",
            Self::Mint => "mint",
            Self::Burn => "burn",
        }
    }

    /// Table cell label, e.g. `"Swap WETH for USDC"` uses this verb.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Swap => "Swap",
            Self::Mint => "Add",
            Self::Burn => "Remove",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated transaction row.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub hash: String,
    pub timestamp: DateTime<Utc>,
    pub sender: String,
    pub token0_symbol: String,
    pub token1_symbol: String,
    pub amount_token0: f64,
    pub amount_token1: f64,
    pub amount_usd: f64,
}

/// Validation failures for transaction wire data.
#[derive(Error, Debug, PartialEq)]
pub enum TransactionValidationError {
    #[error("unknown transaction kind {0:?}")]
    UnknownKind(String),

    #[error("invalid timestamp {0}")]
    InvalidTimestamp(i64),

    #[error("tx {0}: non-finite value in field {1}")]
    NonFiniteAmount(String, &'static str),
}

/// Rows matching the table's kind filter; `None` keeps everything.
pub fn filter_by_kind(
    transactions: &[Transaction],
    kind: Option<TransactionKind>,
) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|tx| kind.map_or(true, |k| tx.kind == k))
        .collect()
}
