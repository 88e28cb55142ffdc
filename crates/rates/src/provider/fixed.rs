//! A locator that answers without touching the network.

use async_trait::async_trait;

use crate::errors::LookupError;
use crate::models::CountryCode;
use crate::provider::GeoLocator;

const PROVIDER_ID: &str = "STATIC";

/// Always reports the same country, or always fails if none was given.
///
/// Used when the country is already known, e.g. from a command-line override.
#[derive(Debug, Clone, Default)]
pub struct StaticLocator {
    country: Option<CountryCode>,
}

impl StaticLocator {
    pub fn new(country: Option<CountryCode>) -> Self {
        Self { country }
    }
}

#[async_trait]
impl GeoLocator for StaticLocator {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn locate(&self) -> Result<CountryCode, LookupError> {
        self.country
            .ok_or_else(|| LookupError::malformed(PROVIDER_ID, "no country configured"))
    }
}
