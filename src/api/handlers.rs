//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint. Every data handler
//! builds a `MarketRequest`, then goes through the shared response cache.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::Value;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    annotate, DisclosuresQuery, EurobondQuery, HealthResponse, HistoryQuery,
    InflationCalcRequest, ScreenerRequest, SearchQuery, StatsResponse,
};
use crate::provider::{
    FuturesKind, HttpProvider, MarketDataProvider, MarketRequest, ProviderError,
};

/// Application state shared across all handlers.
///
/// Built once at startup; clones share the same cache and provider.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide response cache
    pub cache: ResponseCache<Value>,
    /// Upstream market-data provider
    pub provider: Arc<dyn MarketDataProvider>,
}

impl AppState {
    pub fn new(cache: ResponseCache<Value>, provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { cache, provider }
    }

    /// Creates a new AppState from configuration, talking HTTP to the
    /// configured upstream.
    pub fn from_config(config: &Config) -> std::result::Result<Self, ProviderError> {
        let cache = ResponseCache::new(config.cache_ttl(), config.cache_soft_cap);
        let provider = HttpProvider::new(&config.upstream_base_url, config.upstream_timeout())?;
        Ok(Self::new(cache, Arc::new(provider)))
    }
}

/// Looks `request` up in the cache, fetching and storing it on a miss.
///
/// A `null` answer to a request with a not-found message becomes a 404 and
/// is not stored.
async fn serve(state: &AppState, request: MarketRequest) -> Result<Json<Value>> {
    let key = request.cache_key();
    let result = state
        .cache
        .get_or_fetch(key.as_str(), || async {
            let value = state.provider.fetch(&request).await?;
            match request.not_found_message() {
                Some(message) if value.is_null() => Err(ApiError::NotFound(message.to_string())),
                _ => Ok(value),
            }
        })
        .await?;

    Ok(Json(annotate(result.value, request.shape(), result.cached)))
}

// == Market Data ==

/// GET /api/ticker/:symbol
pub async fn ticker_handler(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>> {
    serve(&state, MarketRequest::Ticker { symbol }).await
}

/// GET /api/ticker/:symbol/history
pub async fn ticker_history_handler(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    query: std::result::Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Value>> {
    let Query(query) = query?;
    let request = MarketRequest::TickerHistory {
        symbol,
        period: query.period,
        interval: query.interval,
    };
    serve(&state, request).await
}

/// GET /api/fx/:symbol
pub async fn fx_handler(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>> {
    serve(&state, MarketRequest::Fx { symbol }).await
}

/// GET /api/crypto/:symbol
pub async fn crypto_handler(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>> {
    serve(&state, MarketRequest::Crypto { symbol }).await
}

/// GET /api/index/:symbol
pub async fn index_handler(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>> {
    serve(&state, MarketRequest::Index { symbol }).await
}

// == Macro Data ==

/// GET /api/inflation/latest
pub async fn inflation_latest_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    serve(&state, MarketRequest::InflationLatest).await
}

/// POST /api/inflation/calculate
pub async fn inflation_calculate_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<InflationCalcRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(req) = payload?;
    let (amount, start_date, end_date) = req.validate().map_err(ApiError::InvalidRequest)?;
    let request = MarketRequest::InflationCalculate {
        amount,
        start_date,
        end_date,
    };
    serve(&state, request).await
}

/// GET /api/calendar/week
pub async fn calendar_week_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    serve(&state, MarketRequest::EconomicCalendarWeek).await
}

/// GET /api/tcmb/rates
pub async fn tcmb_rates_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    serve(&state, MarketRequest::TcmbRates).await
}

// == Fixed Income ==

/// GET /api/bonds
pub async fn bonds_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    serve(&state, MarketRequest::Bonds).await
}

/// GET /api/eurobond
pub async fn eurobond_list_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<EurobondQuery>, QueryRejection>,
) -> Result<Json<Value>> {
    let Query(query) = query?;
    let currency = query.currency.filter(|c| !c.is_empty());
    serve(&state, MarketRequest::EurobondList { currency }).await
}

/// GET /api/eurobond/:isin
pub async fn eurobond_handler(
    State(state): State<AppState>,
    Path(isin): Path<String>,
) -> Result<Json<Value>> {
    serve(&state, MarketRequest::Eurobond { isin }).await
}

// == Screener & Derivatives ==

/// POST /api/screener
pub async fn screener_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ScreenerRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(req) = payload?;
    let template = req.validate().map_err(ApiError::InvalidRequest)?;
    serve(&state, MarketRequest::Screener { template }).await
}

/// GET /api/viop/stock-futures
pub async fn viop_stock_futures_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    serve(&state, MarketRequest::Viop(FuturesKind::Stock)).await
}

/// GET /api/viop/index-futures
pub async fn viop_index_futures_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    serve(&state, MarketRequest::Viop(FuturesKind::Index)).await
}

/// GET /api/viop/currency-futures
pub async fn viop_currency_futures_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>> {
    serve(&state, MarketRequest::Viop(FuturesKind::Currency)).await
}

// == KAP Disclosures ==

/// GET /api/kap/companies
pub async fn kap_companies_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    serve(&state, MarketRequest::KapCompanies).await
}

/// GET /api/kap/search?q=...
pub async fn kap_search_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Value>> {
    let Query(query) = query?;
    let query = query.validate().map_err(ApiError::InvalidRequest)?;
    serve(&state, MarketRequest::KapSearch { query }).await
}

/// GET /api/kap/disclosures/:ticker
pub async fn kap_disclosures_handler(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    query: std::result::Result<Query<DisclosuresQuery>, QueryRejection>,
) -> Result<Json<Value>> {
    let Query(query) = query?;
    let request = MarketRequest::KapDisclosures {
        ticker,
        limit: query.limit,
    };
    serve(&state, request).await
}

/// GET /api/kap/calendar/:ticker
pub async fn kap_calendar_handler(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<Value>> {
    serve(&state, MarketRequest::KapCalendar { ticker }).await
}

/// GET /api/kap/details/:ticker
pub async fn kap_details_handler(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<Value>> {
    serve(&state, MarketRequest::KapDetails { ticker }).await
}

// == Service ==

/// GET /api/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats();
    Json(StatsResponse::new(
        &stats,
        state.cache.ttl().as_secs(),
        state.cache.soft_cap(),
    ))
}

/// GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
