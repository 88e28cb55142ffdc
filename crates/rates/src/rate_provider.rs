//! Fail-soft facade over a geolocator and a rate source.
//!
//! Both lookups collapse every error into `None` and a warning. Callers only
//! ever see "value" or "no value", and the page stays in EUR on the latter.

use std::sync::Arc;

use log::{debug, warn};

use crate::models::{CountryCode, CurrencyCode, ExchangeRate};
use crate::provider::{GeoLocator, RateSource};

/// Country detection and rate lookup with absent-on-failure semantics.
#[derive(Clone)]
pub struct RateProvider {
    locator: Arc<dyn GeoLocator>,
    source: Arc<dyn RateSource>,
}

impl RateProvider {
    pub fn new(locator: Arc<dyn GeoLocator>, source: Arc<dyn RateSource>) -> Self {
        Self { locator, source }
    }

    /// One geolocation lookup. `None` on any failure.
    pub async fn detect_country(&self) -> Option<CountryCode> {
        match self.locator.locate().await {
            Ok(country) => {
                debug!("{} located visitor in {}", self.locator.id(), country);
                Some(country)
            }
            Err(e) => {
                warn!("Could not detect visitor country ({}): {}", e.kind(), e);
                None
            }
        }
    }

    /// One rate lookup for `target` against EUR.
    ///
    /// EUR is the identity case and returns `None` without calling the source.
    pub async fn get_exchange_rate(&self, target: CurrencyCode) -> Option<ExchangeRate> {
        if target.is_base() {
            return None;
        }

        match self.source.rate_for(CurrencyCode::BASE, target).await {
            Ok(rate) => {
                debug!("{} rate EUR->{} = {}", self.source.id(), target, rate);
                Some(rate)
            }
            Err(e) => {
                warn!(
                    "Could not fetch EUR->{} exchange rate ({}): {}",
                    target,
                    e.kind(),
                    e
                );
                None
            }
        }
    }
}
