//! Token domain — per-token stats, price series.

pub mod convert;
pub mod wire;

use crate::charts::{aggregate, ChartEntry, DatedRecord, Granularity};
use crate::shared::TokenAddress;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validated per-token snapshot for the token table and token page header.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenData {
    pub address: TokenAddress,
    pub symbol: String,
    pub name: String,
    pub price_usd: f64,
    /// 24h price change, percent.
    pub price_usd_change: f64,
    pub volume_usd: f64,
    pub volume_usd_change: f64,
    pub volume_usd_week: f64,
    pub tvl_usd: f64,
    pub tvl_usd_change: f64,
    pub fees_usd: f64,
}

/// One day of a single token's chart data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenChartEntry {
    pub date: i64,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: f64,
    #[serde(rename = "totalValueLockedUSD")]
    pub total_value_locked_usd: f64,
    #[serde(rename = "priceUSD", default)]
    pub price_usd: f64,
}

impl DatedRecord for TokenChartEntry {
    fn date(&self) -> i64 {
        self.date
    }
}

/// Validation failures for token wire data.
#[derive(Error, Debug, PartialEq)]
pub enum TokenValidationError {
    #[error("missing token address")]
    MissingAddress,

    #[error("token {0}: missing symbol")]
    MissingSymbol(String),

    #[error("token {0}: non-finite value in field {1}")]
    NonFiniteMetric(String, &'static str),
}

// ─── Aggregated series over one token's day data ─────────────────────────────

pub fn volume_series(days: &[TokenChartEntry], granularity: Granularity) -> Vec<ChartEntry> {
    aggregate(days, granularity, |d| d.volume_usd)
}

pub fn tvl_series(days: &[TokenChartEntry], granularity: Granularity) -> Vec<ChartEntry> {
    aggregate(days, granularity, |d| d.total_value_locked_usd)
}

/// Weekly or monthly price series, summed per bucket like every other
/// metric; callers wanting a bucket average divide by the bucket size.
pub fn price_series(days: &[TokenChartEntry], granularity: Granularity) -> Vec<ChartEntry> {
    aggregate(days, granularity, |d| d.price_usd)
}
