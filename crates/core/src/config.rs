//! Localization settings, with environment overrides.

use std::time::Duration;

use crate::errors::{Error, Result};
use crate::formatter::AmountStyle;
use storefront_rates::{DEFAULT_GEO_ENDPOINT, DEFAULT_RATES_ENDPOINT, DEFAULT_REQUEST_TIMEOUT};

pub const ENV_GEO_URL: &str = "STOREFRONT_GEO_URL";
pub const ENV_RATES_URL: &str = "STOREFRONT_RATES_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "STOREFRONT_HTTP_TIMEOUT_SECS";
pub const ENV_MONETARY_AMOUNTS: &str = "STOREFRONT_MONETARY_AMOUNTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationConfig {
    /// Geolocation endpoint answering with `country_code`.
    pub geo_endpoint: String,
    /// Rate table URL prefix; the base code is appended.
    pub rates_endpoint: String,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
    /// Render unconverted amounts with two decimals.
    pub monetary_amounts: bool,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            rates_endpoint: DEFAULT_RATES_ENDPOINT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            monetary_amounts: false,
        }
    }
}

impl LocalizationConfig {
    /// Defaults overridden by whichever `STOREFRONT_*` variables are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_GEO_URL) {
            config.geo_endpoint = non_empty(ENV_GEO_URL, url)?;
        }
        if let Some(url) = lookup(ENV_RATES_URL) {
            config.rates_endpoint = non_empty(ENV_RATES_URL, url)?;
        }
        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::InvalidConfigValue(format!("{}={}", ENV_HTTP_TIMEOUT_SECS, raw))
            })?;
            if secs == 0 {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must be greater than zero",
                    ENV_HTTP_TIMEOUT_SECS
                )));
            }
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup(ENV_MONETARY_AMOUNTS) {
            config.monetary_amounts = parse_bool(ENV_MONETARY_AMOUNTS, &raw)?;
        }

        Ok(config)
    }

    pub fn amount_style(&self) -> AmountStyle {
        if self.monetary_amounts {
            AmountStyle::Monetary
        } else {
            AmountStyle::Plain
        }
    }
}

fn non_empty(key: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidConfigValue(format!("{} is empty", key)));
    }
    Ok(trimmed.to_string())
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidConfigValue(format!("{}={}", key, raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<LocalizationConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LocalizationConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, LocalizationConfig::default());
        assert_eq!(config.geo_endpoint, "https://ipapi.co/json/");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.amount_style(), AmountStyle::Plain);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (ENV_GEO_URL, "http://localhost:9000/geo"),
            (ENV_RATES_URL, "http://localhost:9000/rates/"),
            (ENV_HTTP_TIMEOUT_SECS, "5"),
            (ENV_MONETARY_AMOUNTS, "yes"),
        ])
        .unwrap();
        assert_eq!(config.geo_endpoint, "http://localhost:9000/geo");
        assert_eq!(config.rates_endpoint, "http://localhost:9000/rates/");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.amount_style(), AmountStyle::Monetary);
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[(ENV_HTTP_TIMEOUT_SECS, "soon")]).is_err());
        assert!(config_from(&[(ENV_HTTP_TIMEOUT_SECS, "0")]).is_err());
        assert!(config_from(&[(ENV_GEO_URL, "  ")]).is_err());
        assert!(matches!(
            config_from(&[(ENV_MONETARY_AMOUNTS, "maybe")]),
            Err(Error::InvalidConfigValue(_))
        ));
    }
}
