//! Visitor currency localization.
//!
//! One pass per page load: detect the country, pick the currency, fetch a
//! rate if the currency is not EUR, rewrite the prices. Every failure stops
//! the pass and leaves the EUR page as it was.

mod localizer;


pub use localizer::{BaseReason, LocalizationOutcome, Localizer, Resolution};
