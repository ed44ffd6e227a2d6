//! Market Requests
//!
//! Every upstream call the gateway can make, with its cache key, its
//! upstream location and the shape its response is returned in.

use crate::cache::CacheKey;

// == Response Shape ==
/// How a payload is annotated with the `cached` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Object payloads get `cached` merged in at the top level
    Merged,
    /// Payload is returned as `{ "data": ..., "cached": ... }`
    Wrapped,
}

// == VIOP Contract Kind ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuturesKind {
    Stock,
    Index,
    Currency,
}

impl FuturesKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuturesKind::Stock => "stock-futures",
            FuturesKind::Index => "index-futures",
            FuturesKind::Currency => "currency-futures",
        }
    }
}

// == Market Request ==
/// One logical request to the market-data provider.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketRequest {
    Ticker { symbol: String },
    TickerHistory { symbol: String, period: String, interval: String },
    Fx { symbol: String },
    Crypto { symbol: String },
    Index { symbol: String },
    InflationLatest,
    InflationCalculate { amount: f64, start_date: String, end_date: String },
    EconomicCalendarWeek,
    Bonds,
    EurobondList { currency: Option<String> },
    Eurobond { isin: String },
    Screener { template: String },
    Viop(FuturesKind),
    KapCompanies,
    KapSearch { query: String },
    KapDisclosures { ticker: String, limit: u32 },
    KapCalendar { ticker: String },
    KapDetails { ticker: String },
    TcmbRates,
}

impl MarketRequest {
    // == Cache Key ==
    /// Key under which this request's response is cached.
    ///
    /// Every parameter that changes the upstream result is part of the key.
    pub fn cache_key(&self) -> CacheKey {
        match self {
            MarketRequest::Ticker { symbol } => CacheKey::new("ticker").segment(symbol),
            MarketRequest::TickerHistory {
                symbol,
                period,
                interval,
            } => CacheKey::new("ticker")
                .segment(symbol)
                .segment("history")
                .segment(period)
                .segment(interval),
            MarketRequest::Fx { symbol } => CacheKey::new("fx").segment(symbol),
            MarketRequest::Crypto { symbol } => CacheKey::new("crypto").segment(symbol),
            MarketRequest::Index { symbol } => CacheKey::new("index").segment(symbol),
            MarketRequest::InflationLatest => CacheKey::new("inflation").segment("latest"),
            MarketRequest::InflationCalculate {
                amount,
                start_date,
                end_date,
            } => CacheKey::new("inflation")
                .segment("calc")
                .segment(amount)
                .segment(start_date)
                .segment(end_date),
            MarketRequest::EconomicCalendarWeek => CacheKey::new("calendar").segment("week"),
            MarketRequest::Bonds => CacheKey::new("bonds").segment("all"),
            MarketRequest::EurobondList { currency } => CacheKey::new("eurobond")
                .segment("list")
                .optional_segment(currency.as_deref(), "all"),
            MarketRequest::Eurobond { isin } => CacheKey::new("eurobond").segment(isin),
            MarketRequest::Screener { template } => CacheKey::new("screener").segment(template),
            MarketRequest::Viop(kind) => CacheKey::new("viop").segment(kind.as_str()),
            MarketRequest::KapCompanies => CacheKey::new("kap").segment("companies"),
            MarketRequest::KapSearch { query } => {
                CacheKey::new("kap").segment("search").segment(query)
            }
            MarketRequest::KapDisclosures { ticker, limit } => CacheKey::new("kap")
                .segment("disclosures")
                .segment(ticker)
                .segment(limit),
            MarketRequest::KapCalendar { ticker } => {
                CacheKey::new("kap").segment("calendar").segment(ticker)
            }
            MarketRequest::KapDetails { ticker } => {
                CacheKey::new("kap").segment("details").segment(ticker)
            }
            MarketRequest::TcmbRates => CacheKey::new("tcmb").segment("rates").segment("all"),
        }
    }

    // == Upstream Path ==
    /// Path on the provider, relative to its base URL.
    pub fn path(&self) -> String {
        match self {
            MarketRequest::Ticker { symbol } => format!("ticker/{}", symbol),
            MarketRequest::TickerHistory { symbol, .. } => format!("ticker/{}/history", symbol),
            MarketRequest::Fx { symbol } => format!("fx/{}", symbol),
            MarketRequest::Crypto { symbol } => format!("crypto/{}", symbol),
            MarketRequest::Index { symbol } => format!("index/{}", symbol),
            MarketRequest::InflationLatest => "inflation/latest".to_string(),
            MarketRequest::InflationCalculate { .. } => "inflation/calculate".to_string(),
            MarketRequest::EconomicCalendarWeek => "calendar/week".to_string(),
            MarketRequest::Bonds => "bonds".to_string(),
            MarketRequest::EurobondList { .. } => "eurobond".to_string(),
            MarketRequest::Eurobond { isin } => format!("eurobond/{}", isin),
            MarketRequest::Screener { .. } => "screener".to_string(),
            MarketRequest::Viop(kind) => format!("viop/{}", kind.as_str()),
            MarketRequest::KapCompanies => "kap/companies".to_string(),
            MarketRequest::KapSearch { .. } => "kap/search".to_string(),
            MarketRequest::KapDisclosures { ticker, .. } => format!("kap/disclosures/{}", ticker),
            MarketRequest::KapCalendar { ticker } => format!("kap/calendar/{}", ticker),
            MarketRequest::KapDetails { ticker } => format!("kap/details/{}", ticker),
            MarketRequest::TcmbRates => "tcmb/rates".to_string(),
        }
    }

    // == Upstream Query ==
    /// Query parameters sent to the provider.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            MarketRequest::TickerHistory {
                period, interval, ..
            } => vec![("period", period.clone()), ("interval", interval.clone())],
            MarketRequest::InflationCalculate {
                amount,
                start_date,
                end_date,
            } => vec![
                ("amount", amount.to_string()),
                ("startDate", start_date.clone()),
                ("endDate", end_date.clone()),
            ],
            MarketRequest::EurobondList {
                currency: Some(currency),
            } => vec![("currency", currency.clone())],
            MarketRequest::Screener { template } => vec![("template", template.clone())],
            MarketRequest::KapSearch { query } => vec![("q", query.clone())],
            MarketRequest::KapDisclosures { limit, .. } => vec![("limit", limit.to_string())],
            _ => Vec::new(),
        }
    }

    // == Response Shape ==
    /// Single-record lookups are merged; list-like results are wrapped.
    pub fn shape(&self) -> ResponseShape {
        match self {
            MarketRequest::Ticker { .. }
            | MarketRequest::Fx { .. }
            | MarketRequest::Crypto { .. }
            | MarketRequest::Index { .. }
            | MarketRequest::InflationLatest
            | MarketRequest::InflationCalculate { .. }
            | MarketRequest::KapDetails { .. } => ResponseShape::Merged,
            _ => ResponseShape::Wrapped,
        }
    }

    // == Not Found ==
    /// Message to fail with when upstream answers this request with `null`.
    ///
    /// `None` means a `null` body is an ordinary (cacheable) answer.
    pub fn not_found_message(&self) -> Option<&'static str> {
        match self {
            MarketRequest::Eurobond { .. } => Some("Eurobond not found"),
            _ => None,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_keys() {
        let info = MarketRequest::Ticker {
            symbol: "THYAO".to_string(),
        };
        let history = MarketRequest::TickerHistory {
            symbol: "THYAO".to_string(),
            period: "1mo".to_string(),
            interval: "1d".to_string(),
        };

        assert_eq!(info.cache_key().as_str(), "ticker:THYAO");
        assert_eq!(history.cache_key().as_str(), "ticker:THYAO:history:1mo:1d");
    }

    #[test]
    fn test_distinct_parameters_give_distinct_keys() {
        let daily = MarketRequest::TickerHistory {
            symbol: "THYAO".to_string(),
            period: "1mo".to_string(),
            interval: "1d".to_string(),
        };
        let hourly = MarketRequest::TickerHistory {
            symbol: "THYAO".to_string(),
            period: "1mo".to_string(),
            interval: "1h".to_string(),
        };

        assert_ne!(daily.cache_key(), hourly.cache_key());
    }

    #[test]
    fn test_fixed_keys() {
        assert_eq!(MarketRequest::InflationLatest.cache_key().as_str(), "inflation:latest");
        assert_eq!(MarketRequest::EconomicCalendarWeek.cache_key().as_str(), "calendar:week");
        assert_eq!(MarketRequest::Bonds.cache_key().as_str(), "bonds:all");
        assert_eq!(MarketRequest::KapCompanies.cache_key().as_str(), "kap:companies");
        assert_eq!(MarketRequest::TcmbRates.cache_key().as_str(), "tcmb:rates:all");
        assert_eq!(
            MarketRequest::Viop(FuturesKind::Currency).cache_key().as_str(),
            "viop:currency-futures"
        );
    }

    #[test]
    fn test_inflation_calculation_key() {
        let req = MarketRequest::InflationCalculate {
            amount: 1000.0,
            start_date: "2020-01".to_string(),
            end_date: "2024-01".to_string(),
        };
        let fractional = MarketRequest::InflationCalculate {
            amount: 1000.5,
            start_date: "2020-01".to_string(),
            end_date: "2024-01".to_string(),
        };

        assert_eq!(req.cache_key().as_str(), "inflation:calc:1000:2020-01:2024-01");
        assert_ne!(req.cache_key(), fractional.cache_key());
    }

    #[test]
    fn test_eurobond_list_key_defaults_to_all() {
        let all = MarketRequest::EurobondList { currency: None };
        let usd = MarketRequest::EurobondList {
            currency: Some("USD".to_string()),
        };

        assert_eq!(all.cache_key().as_str(), "eurobond:list:all");
        assert_eq!(usd.cache_key().as_str(), "eurobond:list:USD");
        assert!(all.query().is_empty());
        assert_eq!(usd.query(), vec![("currency", "USD".to_string())]);
    }

    #[test]
    fn test_kap_disclosures() {
        let req = MarketRequest::KapDisclosures {
            ticker: "ASELS".to_string(),
            limit: 5,
        };

        assert_eq!(req.cache_key().as_str(), "kap:disclosures:ASELS:5");
        assert_eq!(req.path(), "kap/disclosures/ASELS");
        assert_eq!(req.query(), vec![("limit", "5".to_string())]);
    }

    #[test]
    fn test_paths() {
        assert_eq!(
            MarketRequest::Fx {
                symbol: "USD".to_string()
            }
            .path(),
            "fx/USD"
        );
        assert_eq!(MarketRequest::Viop(FuturesKind::Stock).path(), "viop/stock-futures");
        assert_eq!(
            MarketRequest::Screener {
                template: "high_dividend".to_string()
            }
            .query(),
            vec![("template", "high_dividend".to_string())]
        );
    }

    #[test]
    fn test_shapes() {
        assert_eq!(
            MarketRequest::Ticker {
                symbol: "THYAO".to_string()
            }
            .shape(),
            ResponseShape::Merged
        );
        assert_eq!(MarketRequest::InflationLatest.shape(), ResponseShape::Merged);
        assert_eq!(MarketRequest::Bonds.shape(), ResponseShape::Wrapped);
        assert_eq!(MarketRequest::KapCompanies.shape(), ResponseShape::Wrapped);
        assert_eq!(
            MarketRequest::KapDetails {
                ticker: "ASELS".to_string()
            }
            .shape(),
            ResponseShape::Merged
        );
    }

    #[test]
    fn test_only_single_eurobond_treats_null_as_not_found() {
        let single = MarketRequest::Eurobond {
            isin: "XS0000000000".to_string(),
        };
        assert_eq!(single.not_found_message(), Some("Eurobond not found"));
        assert_eq!(MarketRequest::EurobondList { currency: None }.not_found_message(), None);
        assert_eq!(MarketRequest::Bonds.not_found_message(), None);
    }
}
