//! Pool domain — per-pool stats and chart series.

pub mod convert;
pub mod wire;

use crate::charts::{aggregate, ChartEntry, DatedRecord, Granularity};
use crate::shared::{PoolAddress, TokenAddress};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One side of a pool pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRef {
    pub address: TokenAddress,
    pub symbol: String,
}

/// Validated per-pool snapshot for the pool table and pool page header.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolData {
    pub address: PoolAddress,
    pub token0: TokenRef,
    pub token1: TokenRef,
    /// Fee tier in hundredths of a bip (e.g. 3000 = 0.3%).
    pub fee_tier: u32,
    pub tvl_usd: f64,
    pub tvl_usd_change: f64,
    pub volume_usd: f64,
    pub volume_usd_change: f64,
    pub volume_usd_week: f64,
}

impl PoolData {
    /// 24h fee revenue derived from volume and the fee tier.
    pub fn fees_24h(&self) -> f64 {
        self.volume_usd * (self.fee_tier as f64 / 1_000_000.0)
    }

    /// Display pair label, e.g. `"WETH/USDC"`.
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.token0.symbol, self.token1.symbol)
    }
}

/// One day of a single pool's chart data.
///
/// Pool and token chart endpoints spell TVL as `totalValueLockedUSD`, unlike
/// the protocol endpoint's `tvlUSD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolChartEntry {
    pub date: i64,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: f64,
    #[serde(rename = "totalValueLockedUSD")]
    pub total_value_locked_usd: f64,
    #[serde(rename = "feesUSD", default)]
    pub fees_usd: f64,
}

impl DatedRecord for PoolChartEntry {
    fn date(&self) -> i64 {
        self.date
    }
}

/// Validation failures for pool wire data.
#[derive(Error, Debug, PartialEq)]
pub enum PoolValidationError {
    #[error("missing pool address")]
    MissingAddress,

    #[error("missing symbol for token{0}")]
    MissingTokenSymbol(u8),

    #[error("invalid fee tier {0}")]
    InvalidFeeTier(i64),

    #[error("non-finite value in field {0}")]
    NonFiniteMetric(&'static str),

    #[error("pool {0}: {1:?}")]
    Multiple(String, Vec<PoolValidationError>),
}

// ─── Aggregated series over one pool's day data ──────────────────────────────

pub fn volume_series(days: &[PoolChartEntry], granularity: Granularity) -> Vec<ChartEntry> {
    aggregate(days, granularity, |d| d.volume_usd)
}

pub fn tvl_series(days: &[PoolChartEntry], granularity: Granularity) -> Vec<ChartEntry> {
    aggregate(days, granularity, |d| d.total_value_locked_usd)
}

pub fn fees_series(days: &[PoolChartEntry], granularity: Granularity) -> Vec<ChartEntry> {
    aggregate(days, granularity, |d| d.fees_usd)
}
