//! Wire types for protocol-wide stats (indexer REST).

use serde::{Deserialize, Serialize};

/// Raw protocol snapshot from the overview endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProtocolDataResponse {
    #[serde(rename = "tvlUSD")]
    pub tvl_usd: f64,
    #[serde(rename = "tvlUSDChange", default)]
    pub tvl_usd_change: f64,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: f64,
    #[serde(rename = "volumeUSDChange", default)]
    pub volume_usd_change: f64,
    #[serde(rename = "feesUSD", default)]
    pub fees_usd: f64,
    #[serde(rename = "txCount", default)]
    pub tx_count: u64,
}
