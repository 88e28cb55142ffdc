//! Lookup models
//!
//! - `currency` - The closed set of displayable currencies (CurrencyCode)
//! - `country` - Two-letter country codes from geolocation (CountryCode)
//! - `rate` - Positive EUR-based exchange rates (ExchangeRate)

mod country;
mod currency;
mod rate;

pub use country::CountryCode;
pub use currency::{CurrencyCode, UnknownCurrency};
pub use rate::ExchangeRate;
