//! HTTP market-data provider.
//!
//! Forwards each request as a GET to a configured upstream service that
//! fronts the market-data library.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::error::ProviderError;
use super::{MarketDataProvider, MarketRequest};

/// Longest error body kept in a `ProviderError::Status`.
const MAX_ERROR_BODY: usize = 200;

/// Provider backed by a JSON-over-HTTP upstream.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProvider {
    /// Creates a provider for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &MarketRequest) -> String {
        format!("{}/{}", self.base_url, request.path())
    }
}

#[async_trait]
impl MarketDataProvider for HttpProvider {
    async fn fetch(&self, request: &MarketRequest) -> Result<Value, ProviderError> {
        let url = self.url_for(request);
        debug!(%url, "Fetching from upstream");

        let response = self
            .client
            .get(&url)
            .query(&request.query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            let body: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
