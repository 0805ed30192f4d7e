//! Chart series aggregation.
//!
//! The backend serves chart data at day granularity. The dashboard's weekly
//! and monthly chart modes re-bucket that series client-side: each calendar
//! week or month collapses to a single point whose value is the sum of the
//! contained days. This module is the pure, render-free core of that logic.

pub mod aggregate;
pub mod bucket;
pub mod state;

pub use aggregate::{aggregate, ChartEntry, DatedRecord};
pub use bucket::{bucket_key, utc_day, BucketKey};
pub use state::{ChartStore, SeriesScope};

use serde::{Deserialize, Serialize};

/// Bucket granularity for re-aggregated chart series.
///
/// Day granularity is the raw series itself and needs no aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Week,
    Month,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_serde() {
        let g: Granularity = serde_json::from_str("\"week\"").unwrap();
        assert_eq!(g, Granularity::Week);
        assert_eq!(serde_json::to_string(&Granularity::Month).unwrap(), "\"month\"");
    }
}
