//! Market Gateway - a caching HTTP gateway for market data
//!
//! Fronts a market-data provider with a process-wide TTL response cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;

pub use api::AppState;
pub use cache::ResponseCache;
pub use config::Config;
