//! Lookup provider abstractions and implementations.
//!
//! This module contains:
//! - The `GeoLocator` and `RateSource` traits
//! - Concrete HTTP providers (ipapi.co, exchangerate-api.com)
//! - A network-free `StaticLocator`
//!
//! Providers return typed [`LookupError`](crate::errors::LookupError)s. Turning
//! those into absent values is the job of [`RateProvider`](crate::RateProvider).

mod fixed;
mod traits;

pub mod exchange_rate_api;
pub mod ipapi;

pub use fixed::StaticLocator;
pub use traits::{GeoLocator, RateSource};

use reqwest::Client;
use std::time::Duration;

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the shared HTTP client used by the providers.
pub(crate) fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}
