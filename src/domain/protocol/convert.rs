//! Conversion: ProtocolDataResponse → ProtocolData.

use super::wire;
use super::{ProtocolData, ProtocolValidationError};

fn finite(value: f64, field: &'static str) -> Result<f64, ProtocolValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProtocolValidationError::NonFiniteMetric(field))
    }
}

impl TryFrom<wire::ProtocolDataResponse> for ProtocolData {
    type Error = ProtocolValidationError;

    fn try_from(source: wire::ProtocolDataResponse) -> Result<Self, Self::Error> {
        Ok(ProtocolData {
            tvl_usd: finite(source.tvl_usd, "tvlUSD")?,
            tvl_usd_change: finite(source.tvl_usd_change, "tvlUSDChange")?,
            volume_usd: finite(source.volume_usd, "volumeUSD")?,
            volume_usd_change: finite(source.volume_usd_change, "volumeUSDChange")?,
            fees_usd: finite(source.fees_usd, "feesUSD")?,
            tx_count: source.tx_count,
        })
    }
}
