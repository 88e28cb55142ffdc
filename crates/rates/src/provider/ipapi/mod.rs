//! ipapi.co geolocation provider.
//!
//! Calls the keyless `json/` endpoint, which geolocates the caller's own
//! public address and answers with a JSON object carrying `country_code`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::LookupError;
use crate::models::CountryCode;
use crate::provider::{build_client, GeoLocator, DEFAULT_REQUEST_TIMEOUT};

/// Provider ID constant
const PROVIDER_ID: &str = "IPAPI";

/// Public endpoint, no API key required
pub const DEFAULT_GEO_ENDPOINT: &str = "https://ipapi.co/json/";

/// The part of the ipapi response we care about.
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    country_code: Option<String>,
    /// Set on rate-limit and reserved-range answers
    #[serde(default)]
    error: bool,
    #[serde(default)]
    reason: Option<String>,
}

/// Extracts the country from an ipapi response body.
pub fn parse_country(body: &str) -> Result<CountryCode, LookupError> {
    let parsed: IpApiResponse = serde_json::from_str(body)
        .map_err(|e| LookupError::malformed(PROVIDER_ID, e.to_string()))?;

    if parsed.error {
        return Err(LookupError::malformed(
            PROVIDER_ID,
            parsed.reason.unwrap_or_else(|| "error flag set".to_string()),
        ));
    }

    let raw = parsed
        .country_code
        .ok_or_else(|| LookupError::malformed(PROVIDER_ID, "missing country_code"))?;

    CountryCode::parse(&raw).ok_or_else(|| {
        LookupError::malformed(PROVIDER_ID, format!("invalid country_code '{}'", raw))
    })
}

/// Geolocation through ipapi.co.
pub struct IpApiLocator {
    client: Client,
    endpoint: String,
}

impl IpApiLocator {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_GEO_ENDPOINT, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Points the locator at a different URL, e.g. a self-hosted mirror.
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for IpApiLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeoLocator for IpApiLocator {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn locate(&self) -> Result<CountryCode, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LookupError::network(PROVIDER_ID, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::network(PROVIDER_ID, e))?;

        parse_country(&body)
    }
}
