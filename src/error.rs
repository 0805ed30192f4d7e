//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Pool validation: {0}")]
    Pool(#[from] crate::domain::pool::PoolValidationError),

    #[error("Token validation: {0}")]
    Token(#[from] crate::domain::token::TokenValidationError),

    #[error("Transaction validation: {0}")]
    Transaction(#[from] crate::domain::transaction::TransactionValidationError),

    #[error("Protocol validation: {0}")]
    Protocol(#[from] crate::domain::protocol::ProtocolValidationError),

    #[error("Backend error {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
