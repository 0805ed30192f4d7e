//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, display-ready)
//! - `wire.rs` — Raw serde structs matching indexer backend responses
//! - `convert.rs` — `TryFrom` conversions with validation

pub mod pool;
pub mod protocol;
pub mod token;
pub mod transaction;

use crate::error::SdkError;
use serde::{Deserialize, Serialize};

/// Serialized response wrapper used by the indexer backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default)]
    pub success: bool,
    pub data: T,
    #[serde(default)]
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Unwrap the payload, turning non-2xx envelopes into errors.
    pub fn into_data(self) -> Result<T, SdkError> {
        if self.ok() {
            Ok(self.data)
        } else {
            Err(SdkError::Backend {
                status: self.status_code,
                message: self.message,
            })
        }
    }
}
