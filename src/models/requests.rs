//! Request DTOs for the gateway API
//!
//! Query strings and JSON bodies accepted by the route handlers.

use serde::Deserialize;

/// Default history window when none is given.
pub const DEFAULT_PERIOD: &str = "1mo";
/// Default candle interval when none is given.
pub const DEFAULT_INTERVAL: &str = "1d";
/// Default number of KAP disclosures returned.
pub const DEFAULT_DISCLOSURE_LIMIT: u32 = 5;

fn default_period() -> String {
    DEFAULT_PERIOD.to_string()
}

fn default_interval() -> String {
    DEFAULT_INTERVAL.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_DISCLOSURE_LIMIT
}

/// Query for GET /api/ticker/:symbol/history
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(default = "default_interval")]
    pub interval: String,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            period: default_period(),
            interval: default_interval(),
        }
    }
}

/// Query for GET /api/kap/disclosures/:ticker
#[derive(Debug, Clone, Deserialize)]
pub struct DisclosuresQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Query for GET /api/kap/search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// Returns the search term, or an error message if it is missing.
    pub fn validate(&self) -> std::result::Result<String, String> {
        match self.q.as_deref() {
            Some(q) if !q.is_empty() => Ok(q.to_string()),
            _ => Err("Missing query parameter: q".to_string()),
        }
    }
}

/// Query for GET /api/eurobond
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EurobondQuery {
    pub currency: Option<String>,
}

/// Body for POST /api/inflation/calculate
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationCalcRequest {
    pub amount: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl InflationCalcRequest {
    /// Returns `(amount, start_date, end_date)` or an error message if any
    /// field is missing, empty or zero.
    pub fn validate(&self) -> std::result::Result<(f64, String, String), String> {
        let amount = self.amount.filter(|a| *a != 0.0);
        let start = self.start_date.as_deref().filter(|s| !s.is_empty());
        let end = self.end_date.as_deref().filter(|s| !s.is_empty());

        match (amount, start, end) {
            (Some(amount), Some(start), Some(end)) => Ok((amount, start.to_string(), end.to_string())),
            _ => Err("Missing required fields: amount, startDate, endDate".to_string()),
        }
    }
}

/// Body for POST /api/screener
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenerRequest {
    pub template: Option<String>,
}

impl ScreenerRequest {
    pub fn validate(&self) -> std::result::Result<String, String> {
        match self.template.as_deref() {
            Some(t) if !t.is_empty() => Ok(t.to_string()),
            _ => Err("Missing required field: template".to_string()),
        }
    }
}
