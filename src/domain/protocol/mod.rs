//! Protocol domain — network-wide stats and the daily chart series.

pub mod convert;
pub mod wire;

use crate::charts::{aggregate, ChartEntry, DatedRecord, Granularity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One day of protocol-wide chart data, as served by the indexer.
///
/// Used directly on the wire: field names mirror the backend JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDayData {
    /// Unix seconds, truncated to a day boundary by the backend.
    pub date: i64,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: f64,
    #[serde(rename = "tvlUSD")]
    pub tvl_usd: f64,
    #[serde(rename = "feesUSD", default)]
    pub fees_usd: f64,
}

impl DatedRecord for ChartDayData {
    fn date(&self) -> i64 {
        self.date
    }
}

/// Current protocol-wide snapshot for the overview page header.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolData {
    pub tvl_usd: f64,
    pub tvl_usd_change: f64,
    pub volume_usd: f64,
    pub volume_usd_change: f64,
    pub fees_usd: f64,
    pub tx_count: u64,
}

/// Validation failures for protocol wire data.
#[derive(Error, Debug, PartialEq)]
pub enum ProtocolValidationError {
    #[error("non-finite value in field {0}")]
    NonFiniteMetric(&'static str),
}

// ─── Aggregated series over the protocol day data ────────────────────────────

/// Weekly or monthly trading volume series.
pub fn volume_series(days: &[ChartDayData], granularity: Granularity) -> Vec<ChartEntry> {
    aggregate(days, granularity, |d| d.volume_usd)
}

/// Weekly or monthly TVL series (sum of daily TVL values, matching the
/// dashboard's bar-chart semantics).
pub fn tvl_series(days: &[ChartDayData], granularity: Granularity) -> Vec<ChartEntry> {
    aggregate(days, granularity, |d| d.tvl_usd)
}

/// Weekly or monthly fee revenue series.
pub fn fees_series(days: &[ChartDayData], granularity: Granularity) -> Vec<ChartEntry> {
    aggregate(days, granularity, |d| d.fees_usd)
}
