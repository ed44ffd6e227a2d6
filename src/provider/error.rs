//! Error types for upstream provider calls.

use thiserror::Error;

/// Errors from the market-data provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
