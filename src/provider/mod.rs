//! Provider Module
//!
//! The upstream market-data collaborator. Routes never call it directly:
//! they go through the response cache, which only invokes it on a miss.

mod error;
mod http;
mod request;

use async_trait::async_trait;
use serde_json::Value;

pub use error::ProviderError;
pub use http::HttpProvider;
pub use request::{FuturesKind, MarketRequest, ResponseShape};

/// Source of market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Performs one upstream call. Failures are never cached.
    async fn fetch(&self, request: &MarketRequest) -> Result<Value, ProviderError>;
}
