//! API Module
//!
//! HTTP handlers and routing for the gateway REST API. Every market-data
//! route answers from the response cache when it can and tags its payload
//! with `cached: true|false`.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
