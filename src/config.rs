//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_SOFT_CAP, DEFAULT_TTL_SECS};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum age of a cached response in seconds
    pub cache_ttl: u64,
    /// Entry count above which a write sweeps expired entries
    pub cache_soft_cap: usize,
    /// Base URL of the market-data upstream
    pub upstream_base_url: String,
    /// Per-request upstream timeout in seconds
    pub upstream_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL_SECS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_SOFT_CAP` - Sweep threshold in entries (default: 100)
    /// - `UPSTREAM_BASE_URL` - Market-data upstream (default: http://127.0.0.1:8000)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 30)
    pub fn from_env() -> Self {
        Self {
            server_port: parse_var("SERVER_PORT", DEFAULT_PORT),
            cache_ttl: parse_var("CACHE_TTL_SECS", DEFAULT_TTL_SECS),
            cache_soft_cap: parse_var("CACHE_SOFT_CAP", DEFAULT_SOFT_CAP),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}

/// Reads and parses `name`, falling back to `default` if unset or invalid.
fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            cache_ttl: DEFAULT_TTL_SECS,
            cache_soft_cap: DEFAULT_SOFT_CAP,
            upstream_base_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}
