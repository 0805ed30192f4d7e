//! Conversion: PoolDataResponse → PoolData (TryFrom + validation).

use super::wire;
use super::{PoolData, PoolValidationError, TokenRef};
use crate::shared::PoolAddress;

fn token_ref(source: wire::TokenRefResponse, index: u8) -> Result<TokenRef, PoolValidationError> {
    let symbol = source
        .symbol
        .ok_or(PoolValidationError::MissingTokenSymbol(index))?;
    Ok(TokenRef {
        address: source.address.into(),
        symbol,
    })
}

impl TryFrom<wire::PoolDataResponse> for PoolData {
    type Error = PoolValidationError;

    fn try_from(source: wire::PoolDataResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<PoolValidationError> = Vec::new();
        let address_str = source.address.clone();

        if source.address.is_empty() {
            errors.push(PoolValidationError::MissingAddress);
        }

        let token0 = match token_ref(source.token0, 0) {
            Ok(t) => Some(t),
            Err(err) => {
                errors.push(err);
                None
            }
        };
        let token1 = match token_ref(source.token1, 1) {
            Ok(t) => Some(t),
            Err(err) => {
                errors.push(err);
                None
            }
        };

        let fee_tier = u32::try_from(source.fee_tier).unwrap_or_else(|_| {
            errors.push(PoolValidationError::InvalidFeeTier(source.fee_tier));
            0
        });

        for (value, field) in [
            (source.tvl_usd, "tvlUSD"),
            (source.volume_usd, "volumeUSD"),
            (source.volume_usd_week, "volumeUSDWeek"),
        ] {
            if !value.is_finite() {
                errors.push(PoolValidationError::NonFiniteMetric(field));
            }
        }

        match (token0, token1) {
            (Some(token0), Some(token1)) if errors.is_empty() => Ok(PoolData {
                address: PoolAddress::from(address_str),
                token0,
                token1,
                fee_tier,
                tvl_usd: source.tvl_usd,
                tvl_usd_change: source.tvl_usd_change,
                volume_usd: source.volume_usd,
                volume_usd_change: source.volume_usd_change,
                volume_usd_week: source.volume_usd_week,
            }),
            _ => Err(PoolValidationError::Multiple(address_str, errors)),
        }
    }
}
