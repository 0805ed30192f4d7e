//! Wire types for pool responses (indexer REST).

use serde::{Deserialize, Serialize};

/// Raw token reference inside a pool response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenRefResponse {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Raw pool snapshot from the pools endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoolDataResponse {
    #[serde(default)]
    pub address: String,
    pub token0: TokenRefResponse,
    pub token1: TokenRefResponse,
    #[serde(rename = "feeTier")]
    pub fee_tier: i64,
    #[serde(rename = "tvlUSD")]
    pub tvl_usd: f64,
    #[serde(rename = "tvlUSDChange", default)]
    pub tvl_usd_change: f64,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: f64,
    #[serde(rename = "volumeUSDChange", default)]
    pub volume_usd_change: f64,
    #[serde(rename = "volumeUSDWeek", default)]
    pub volume_usd_week: f64,
}

/// Paginated pools listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolsResponse {
    pub pools: Vec<PoolDataResponse>,
    pub total: usize,
}
