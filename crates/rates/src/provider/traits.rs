//! Lookup provider trait definitions.

use async_trait::async_trait;

use crate::errors::LookupError;
use crate::models::{CountryCode, CurrencyCode, ExchangeRate};

/// Resolves the visitor's country from their public IP address.
///
/// Implementations perform at most one network request per call and report
/// every failure as a [`LookupError`]; they never panic and never retry.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Identifier used in diagnostics, e.g. "IPAPI".
    fn id(&self) -> &'static str;

    async fn locate(&self) -> Result<CountryCode, LookupError>;
}

/// Fetches a rate table and extracts one conversion rate from it.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Identifier used in diagnostics, e.g. "EXCHANGE_RATE_API".
    fn id(&self) -> &'static str;

    /// Units of `target` per one unit of `base`.
    async fn rate_for(
        &self,
        base: CurrencyCode,
        target: CurrencyCode,
    ) -> Result<ExchangeRate, LookupError>;
}
