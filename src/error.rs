//! Error types for the gateway
//!
//! Provides unified HTTP error handling using thiserror. The cache itself
//! never fails; every variant here comes from request validation or the
//! upstream provider.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::models::ErrorResponse;
use crate::provider::ProviderError;

// == API Error Enum ==
/// Unified error type for route handlers.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Missing or malformed caller input, rejected before the cache is used
    #[error("{0}")]
    InvalidRequest(String),

    /// Upstream answered, but with nothing for the requested resource
    #[error("{0}")]
    NotFound(String),

    /// Upstream fetch failed
    #[error("Upstream fetch failed: {0}")]
    Upstream(#[from] ProviderError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == Extractor Rejections ==
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::InvalidRequest(msg) => warn!("Rejected request: {}", msg),
            ApiError::NotFound(msg) => warn!("Not found: {}", msg),
            ApiError::Upstream(err) => warn!("Upstream error: {}", err),
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for route handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
