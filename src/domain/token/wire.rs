//! Wire types for token responses (indexer REST).

use serde::{Deserialize, Serialize};

/// Raw token snapshot from the tokens endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenDataResponse {
    #[serde(default)]
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "priceUSD")]
    pub price_usd: f64,
    #[serde(rename = "priceUSDChange", default)]
    pub price_usd_change: f64,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: f64,
    #[serde(rename = "volumeUSDChange", default)]
    pub volume_usd_change: f64,
    #[serde(rename = "volumeUSDWeek", default)]
    pub volume_usd_week: f64,
    #[serde(rename = "tvlUSD")]
    pub tvl_usd: f64,
    #[serde(rename = "tvlUSDChange", default)]
    pub tvl_usd_change: f64,
    #[serde(rename = "feesUSD", default)]
    pub fees_usd: f64,
}

/// Paginated tokens listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensResponse {
    pub tokens: Vec<TokenDataResponse>,
    pub total: usize,
}
