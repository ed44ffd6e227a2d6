//! Cache Key Module
//!
//! Builds deterministic cache keys from a namespace and an ordered list of
//! request parameters.

use std::fmt;

/// Separator placed between key segments.
pub const KEY_DELIMITER: char = ':';

// == Cache Key ==
/// A cache key such as `ticker:THYAO:history:1mo:1d`.
///
/// Segments are escaped so a parameter containing the delimiter cannot make
/// two different parameter lists render to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    rendered: String,
}

impl CacheKey {
    // == Constructor ==
    /// Starts a key in the given namespace.
    pub fn new(namespace: &str) -> Self {
        Self {
            rendered: escape(namespace),
        }
    }

    // == Segment ==
    /// Appends one parameter to the key.
    pub fn segment(mut self, value: impl fmt::Display) -> Self {
        self.rendered.push(KEY_DELIMITER);
        self.rendered.push_str(&escape(&value.to_string()));
        self
    }

    /// Appends `value`, or `fallback` when the parameter was not supplied.
    pub fn optional_segment(self, value: Option<&str>, fallback: &str) -> Self {
        self.segment(value.unwrap_or(fallback))
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    pub fn into_string(self) -> String {
        self.rendered
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.rendered
    }
}

/// Percent-escapes `%` and the delimiter.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '%' => out.push_str("%25"),
            KEY_DELIMITER => out.push_str("%3A"),
            other => out.push(other),
        }
    }
    out
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_only() {
        assert_eq!(CacheKey::new("bonds").segment("all").as_str(), "bonds:all");
        assert_eq!(CacheKey::new("kap").as_str(), "kap");
    }

    #[test]
    fn test_history_key_layout() {
        let key = CacheKey::new("ticker")
            .segment("THYAO")
            .segment("history")
            .segment("1mo")
            .segment("1d");
        assert_eq!(key.to_string(), "ticker:THYAO:history:1mo:1d");
    }

    #[test]
    fn test_numeric_segments() {
        let key = CacheKey::new("kap").segment("disclosures").segment("ASELS").segment(5);
        assert_eq!(key.into_string(), "kap:disclosures:ASELS:5");
    }

    #[test]
    fn test_optional_segment_fallback() {
        let with = CacheKey::new("eurobond").segment("list").optional_segment(Some("USD"), "all");
        let without = CacheKey::new("eurobond").segment("list").optional_segment(None, "all");

        assert_eq!(with.as_str(), "eurobond:list:USD");
        assert_eq!(without.as_str(), "eurobond:list:all");
    }

    #[test]
    fn test_delimiter_in_segment_does_not_collide() {
        let joined = CacheKey::new("kap").segment("search").segment("a:b");
        let split = CacheKey::new("kap").segment("search").segment("a").segment("b");

        assert_ne!(joined, split);
        assert_eq!(joined.as_str(), "kap:search:a%3Ab");
    }

    #[test]
    fn test_escape_character_is_escaped() {
        let literal = CacheKey::new("kap").segment("a%3Ab");
        let delimited = CacheKey::new("kap").segment("a:b");

        assert_ne!(literal, delimited);
        assert_eq!(literal.as_str(), "kap:a%253Ab");
    }

    #[test]
    fn test_empty_segment_is_kept() {
        let key = CacheKey::new("kap").segment("search").segment("");
        assert_eq!(key.as_str(), "kap:search:");
    }
}
