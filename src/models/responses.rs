//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::{json, Value};

use crate::cache::CacheStats;
use crate::provider::ResponseShape;

// == Cached Payload Shaping ==
/// Annotates an upstream payload with its `cached` flag.
///
/// `Merged` payloads that are JSON objects get the flag added as a top-level
/// field; anything else is wrapped as `{ "data": ..., "cached": ... }`.
pub fn annotate(value: Value, shape: ResponseShape, cached: bool) -> Value {
    match (shape, value) {
        (ResponseShape::Merged, Value::Object(mut map)) => {
            map.insert("cached".to_string(), Value::Bool(cached));
            Value::Object(map)
        }
        (_, data) => json!({ "data": data, "cached": cached }),
    }
}

/// Response body for GET /api/cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expired_on_read: u64,
    pub sweeps: u64,
    pub swept: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    pub ttl_secs: u64,
    pub soft_cap: usize,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, ttl_secs: u64, soft_cap: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expired_on_read: stats.expired_on_read,
            sweeps: stats.sweeps,
            swept: stats.swept,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_secs,
            soft_cap,
        }
    }
}

/// Response body for the health endpoint (GET /api/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always `true`
    pub error: bool,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
