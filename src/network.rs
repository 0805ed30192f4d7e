//! Supported networks for per-network dashboard views.

use serde::{Deserialize, Serialize};

/// A network the dashboard can show statistics for.
///
/// This is the network *selector* data only; wallet and RPC connectivity
/// live outside this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Arbitrum,
    Ethereum,
    Optimism,
    Polygon,
}

impl Network {
    /// Route slug used in dashboard URLs and API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arbitrum => "arbitrum",
            Self::Ethereum => "ethereum",
            Self::Optimism => "optimism",
            Self::Polygon => "polygon",
        }
    }

    /// Human-readable network name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Arbitrum => "Arbitrum",
            Self::Ethereum => "Ethereum",
            Self::Optimism => "Optimism",
            Self::Polygon => "Polygon",
        }
    }

    pub fn all() -> &'static [Network] {
        &[
            Self::Arbitrum,
            Self::Ethereum,
            Self::Optimism,
            Self::Polygon,
        ]
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_serde() {
        let n: Network = serde_json::from_str("\"arbitrum\"").unwrap();
        assert_eq!(n, Network::Arbitrum);
        assert_eq!(serde_json::to_string(&Network::Polygon).unwrap(), "\"polygon\"");
    }

    #[test]
    fn test_route_slug() {
        assert_eq!(Network::Ethereum.as_str(), "ethereum");
        assert_eq!(Network::Ethereum.to_string(), "ethereum");
    }
}
