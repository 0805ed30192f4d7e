//! Conversion: TokenDataResponse → TokenData.

use super::wire;
use super::{TokenData, TokenValidationError};
use crate::shared::TokenAddress;

impl TryFrom<wire::TokenDataResponse> for TokenData {
    type Error = TokenValidationError;

    fn try_from(source: wire::TokenDataResponse) -> Result<Self, Self::Error> {
        if source.address.is_empty() {
            return Err(TokenValidationError::MissingAddress);
        }
        let symbol = source
            .symbol
            .ok_or_else(|| TokenValidationError::MissingSymbol(source.address.clone()))?;

        for (value, field) in [
            (source.price_usd, "priceUSD"),
            (source.volume_usd, "volumeUSD"),
            (source.tvl_usd, "tvlUSD"),
            (source.fees_usd, "feesUSD"),
        ] {
            if !value.is_finite() {
                return Err(TokenValidationError::NonFiniteMetric(
                    source.address.clone(),
                    field,
                ));
            }
        }

        Ok(TokenData {
            name: source.name.unwrap_or_else(|| symbol.clone()),
            address: TokenAddress::from(source.address),
            symbol,
            price_usd: source.price_usd,
            price_usd_change: source.price_usd_change,
            volume_usd: source.volume_usd,
            volume_usd_change: source.volume_usd_change,
            volume_usd_week: source.volume_usd_week,
            tvl_usd: source.tvl_usd,
            tvl_usd_change: source.tvl_usd_change,
            fees_usd: source.fees_usd,
        })
    }
}
