//! exchangerate-api.com rate table provider.
//!
//! The keyless v4 endpoint returns the full table for one base currency:
//!
//! ```text
//! GET https://api.exchangerate-api.com/v4/latest/EUR
//! { "base": "EUR", "date": "2026-10-18", "rates": { "EUR": 1, "USD": 1.08, ... } }
//! ```
//!
//! Rates are refreshed upstream about once a day, so values may be stale.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::LookupError;
use crate::models::{CurrencyCode, ExchangeRate};
use crate::provider::{build_client, RateSource, DEFAULT_REQUEST_TIMEOUT};

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// Base URL; the base currency code is appended as the last path segment
pub const DEFAULT_RATES_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest/";

#[derive(Debug, Deserialize)]
struct RateTableResponse {
    #[serde(default)]
    base: Option<String>,
    rates: HashMap<String, f64>,
}

/// Extracts the rate for `target` from a rate table body based on `base`.
pub fn parse_rate(
    body: &str,
    base: CurrencyCode,
    target: CurrencyCode,
) -> Result<ExchangeRate, LookupError> {
    let table: RateTableResponse = serde_json::from_str(body)
        .map_err(|e| LookupError::malformed(PROVIDER_ID, e.to_string()))?;

    if let Some(reported) = table.base.as_deref() {
        if reported != base.as_str() {
            return Err(LookupError::malformed(
                PROVIDER_ID,
                format!("expected base {} but table is based on {}", base, reported),
            ));
        }
    }

    let raw = table
        .rates
        .get(target.as_str())
        .copied()
        .ok_or_else(|| LookupError::UnmappedCurrency {
            provider: PROVIDER_ID.to_string(),
            currency: target.to_string(),
        })?;

    ExchangeRate::from_f64(raw).ok_or_else(|| {
        LookupError::malformed(PROVIDER_ID, format!("invalid rate {} for {}", raw, target))
    })
}

/// Rate table lookups through exchangerate-api.com.
pub struct ExchangeRateApiSource {
    client: Client,
    endpoint: String,
}

impl ExchangeRateApiSource {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_RATES_ENDPOINT, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Uses a different table URL prefix. The base code is appended to it.
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            endpoint: endpoint.into(),
        }
    }

    /// The full table URL for `base`.
    pub fn table_url(&self, base: CurrencyCode) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), base)
    }
}

impl Default for ExchangeRateApiSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for ExchangeRateApiSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn rate_for(
        &self,
        base: CurrencyCode,
        target: CurrencyCode,
    ) -> Result<ExchangeRate, LookupError> {
        let response = self
            .client
            .get(self.table_url(base))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LookupError::network(PROVIDER_ID, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::network(PROVIDER_ID, e))?;

        parse_rate(&body, base, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const TABLE: &str = r#"{
        "provider": "https://www.exchangerate-api.com",
        "base": "EUR",
        "date": "2026-10-18",
        "time_last_updated": 1792281601,
        "rates": { "EUR": 1, "USD": 1.08, "JPY": 162.35, "GBP": 0.86 }
    }"#;

    #[test]
    fn test_parse_rate() {
        let rate = parse_rate(TABLE, CurrencyCode::Eur, CurrencyCode::Usd).unwrap();
        assert_eq!(rate.value(), dec!(1.08));

        let rate = parse_rate(TABLE, CurrencyCode::Eur, CurrencyCode::Jpy).unwrap();
        assert_eq!(rate.value(), dec!(162.35));
    }

    #[test]
    fn test_parse_rate_missing_target() {
        let err = parse_rate(TABLE, CurrencyCode::Eur, CurrencyCode::Cop).unwrap_err();
        assert!(matches!(err, LookupError::UnmappedCurrency { .. }));
        assert!(err.to_string().contains("COP"));
    }

    #[test]
    fn test_parse_rate_wrong_shape() {
        let err = parse_rate(r#"{"result":"error"}"#, CurrencyCode::Eur, CurrencyCode::Usd)
            .unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse { .. }));
    }

    #[test]
    fn test_parse_rate_wrong_base() {
        let body = r#"{"base":"USD","rates":{"USD":1,"EUR":0.92}}"#;
        let err = parse_rate(body, CurrencyCode::Eur, CurrencyCode::Usd).unwrap_err();
        assert_eq!(err.kind(), "malformed_response");
    }

    #[test]
    fn test_parse_rate_rejects_zero() {
        let body = r#"{"base":"EUR","rates":{"USD":0}}"#;
        let err = parse_rate(body, CurrencyCode::Eur, CurrencyCode::Usd).unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse { .. }));
    }

    #[test]
    fn test_table_url() {
        let source = ExchangeRateApiSource::new();
        assert_eq!(
            source.table_url(CurrencyCode::Eur),
            "https://api.exchangerate-api.com/v4/latest/EUR"
        );
        assert_eq!(source.id(), "EXCHANGE_RATE_API");
    }
}
