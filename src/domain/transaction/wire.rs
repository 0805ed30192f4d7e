//! Wire types for transaction responses (indexer REST).

use serde::{Deserialize, Serialize};

/// Raw transaction row from the transactions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub hash: String,
    /// Unix seconds.
    pub timestamp: i64,
    #[serde(default)]
    pub sender: String,
    #[serde(rename = "token0Symbol", default)]
    pub token0_symbol: String,
    #[serde(rename = "token1Symbol", default)]
    pub token1_symbol: String,
    #[serde(rename = "amountToken0", default)]
    pub amount_token0: f64,
    #[serde(rename = "amountToken1", default)]
    pub amount_token1: f64,
    #[serde(rename = "amountUSD")]
    pub amount_usd: f64,
}

/// Transactions listing for a network, pool, or token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionResponse>,
    pub total: usize,
}
