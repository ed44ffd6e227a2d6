//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::*;

/// Creates the main router with all endpoints configured under `/api`.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/cache/stats", get(stats_handler))
        .route("/api/ticker/:symbol", get(ticker_handler))
        .route("/api/ticker/:symbol/history", get(ticker_history_handler))
        .route("/api/fx/:symbol", get(fx_handler))
        .route("/api/crypto/:symbol", get(crypto_handler))
        .route("/api/index/:symbol", get(index_handler))
        .route("/api/inflation/latest", get(inflation_latest_handler))
        .route("/api/inflation/calculate", post(inflation_calculate_handler))
        .route("/api/calendar/week", get(calendar_week_handler))
        .route("/api/tcmb/rates", get(tcmb_rates_handler))
        .route("/api/bonds", get(bonds_handler))
        .route("/api/eurobond", get(eurobond_list_handler))
        .route("/api/eurobond/:isin", get(eurobond_handler))
        .route("/api/screener", post(screener_handler))
        .route("/api/viop/stock-futures", get(viop_stock_futures_handler))
        .route("/api/viop/index-futures", get(viop_index_futures_handler))
        .route("/api/viop/currency-futures", get(viop_currency_futures_handler))
        .route("/api/kap/companies", get(kap_companies_handler))
        .route("/api/kap/search", get(kap_search_handler))
        .route("/api/kap/disclosures/:ticker", get(kap_disclosures_handler))
        .route("/api/kap/calendar/:ticker", get(kap_calendar_handler))
        .route("/api/kap/details/:ticker", get(kap_details_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
