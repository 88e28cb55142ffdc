//! Core error types for the storefront.
//!
//! Configuration, selector construction and catalog lookups return these.
//! The rewriter only logs the price variants and leaves the element as it is.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the storefront core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Price text is not a number: '{0}'")]
    UnparsablePriceText(String),

    #[error("Converted price out of range: {amount} x {rate}")]
    AmountOutOfRange { amount: String, rate: String },

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unknown book: {0}")]
    UnknownBook(String),
}
