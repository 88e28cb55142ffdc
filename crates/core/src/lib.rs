//! Storefront Core - catalog data, price formatting and visitor currency localization.
//!
//! All catalog prices are authored in EUR. On page load the [`Localizer`]
//! guesses the visitor's currency from their IP-derived country, fetches one
//! exchange rate and rewrites the price elements of a [`PricePage`]. Any
//! failure along the way leaves the page in EUR.

pub mod catalog;
pub mod config;
pub mod currency;
pub mod errors;
pub mod formatter;
pub mod localization;
pub mod page;

pub use config::LocalizationConfig;
pub use currency::{currency_meta, target_currency, CurrencyCode, CurrencyMeta};
pub use formatter::{format_price, AmountStyle, FormattedPrice};
pub use localization::{BaseReason, LocalizationOutcome, Localizer, Resolution};
pub use page::{rewrite_prices, PricePage, PriceRewriter, PriceSelectors, RewriteReport, ScanRoot};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
