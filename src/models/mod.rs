//! Request and Response models for the gateway API
//!
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    DisclosuresQuery, EurobondQuery, HistoryQuery, InflationCalcRequest, ScreenerRequest,
    SearchQuery,
};
pub use responses::{annotate, ErrorResponse, HealthResponse, StatsResponse};
