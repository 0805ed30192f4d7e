//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw strings the indexer backend sends, so they can be
//! used directly in wire types without conversion overhead.

pub mod fmt;

pub use fmt::{format_amount, format_dollar, format_percent};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── PoolAddress ─────────────────────────────────────────────────────────────

/// Newtype for pool contract addresses (0x-prefixed hex string).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolAddress(String);

impl PoolAddress {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PoolAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PoolAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PoolAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for PoolAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PoolAddress(s.to_string()))
    }
}

impl Serialize for PoolAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PoolAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PoolAddress(s))
    }
}

// ─── TokenAddress ────────────────────────────────────────────────────────────

/// Newtype for token contract addresses (0x-prefixed hex string).
///
/// Serializes transparently as a JSON string. Can be used as a HashMap key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenAddress(String);

impl TokenAddress {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened display form (`0x1234…abcd`) for table cells.
    pub fn short(&self) -> String {
        if self.0.len() <= 10 {
            return self.0.clone();
        }
        format!("{}…{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl std::fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TokenAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TokenAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for TokenAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TokenAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TokenAddress(s))
    }
}
