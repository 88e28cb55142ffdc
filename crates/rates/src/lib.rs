//! Storefront Rates Crate
//!
//! Visitor geolocation and EUR exchange-rate lookups for storefront price
//! localization.
//!
//! # Overview
//!
//! ```text
//! +-------------+      +----------------+
//! | GeoLocator  |      |   RateSource   |   (typed LookupError on failure)
//! +-------------+      +----------------+
//!        \                   /
//!         v                 v
//!        +-------------------+
//!        |   RateProvider    |   (fail-soft: Option + warning)
//!        +-------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CurrencyCode`] - The closed set of displayable currencies
//! - [`CountryCode`] - Two-letter country code from geolocation
//! - [`ExchangeRate`] - Positive units of target currency per EUR
//! - [`RateProvider`] - The fail-soft lookup facade

pub mod errors;
pub mod models;
pub mod provider;
mod rate_provider;

pub use errors::LookupError;
pub use models::{CountryCode, CurrencyCode, ExchangeRate, UnknownCurrency};
pub use provider::exchange_rate_api::{ExchangeRateApiSource, DEFAULT_RATES_ENDPOINT};
pub use provider::ipapi::{IpApiLocator, DEFAULT_GEO_ENDPOINT};
pub use provider::{GeoLocator, RateSource, StaticLocator, DEFAULT_REQUEST_TIMEOUT};
pub use rate_provider::RateProvider;
