//! Error types for geolocation and exchange-rate lookups.
//!
//! Every variant here is recoverable from the caller's point of view: the
//! [`RateProvider`](crate::RateProvider) facade turns each one into an absent
//! result plus a warning, so nothing in this module ever reaches a visitor.

use thiserror::Error;

/// Errors that can occur while talking to a lookup service.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request never produced a usable HTTP response.
    /// Covers DNS failures, timeouts, refused connections and non-2xx statuses.
    #[error("Network failure: {provider} - {message}")]
    NetworkFailure {
        /// The provider that was being called
        provider: String,
        /// The underlying transport message
        message: String,
    },

    /// The service answered but the body did not have the expected shape.
    #[error("Malformed response: {provider} - {message}")]
    MalformedResponse {
        /// The provider that returned the body
        provider: String,
        /// What was wrong with it
        message: String,
    },

    /// The rate table was well formed but did not list the requested currency.
    #[error("Currency {currency} not present in rate table from {provider}")]
    UnmappedCurrency {
        /// The provider that returned the table
        provider: String,
        /// The requested target currency
        currency: String,
    },
}

impl LookupError {
    /// Builds a [`LookupError::NetworkFailure`] from a transport error.
    pub fn network(provider: &str, err: reqwest::Error) -> Self {
        Self::NetworkFailure {
            provider: provider.to_string(),
            message: err.to_string(),
        }
    }

    /// Builds a [`LookupError::MalformedResponse`].
    pub fn malformed(provider: &str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Short kind label used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NetworkFailure { .. } => "network_failure",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::UnmappedCurrency { .. } => "unmapped_currency",
        }
    }
}
