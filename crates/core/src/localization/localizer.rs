use std::sync::Arc;

use log::info;

use crate::config::LocalizationConfig;
use crate::currency::{target_currency, CurrencyCode};
use crate::page::{PricePage, PriceRewriter, PriceSelectors, RewriteReport, ScanRoot};
use storefront_rates::{
    CountryCode, ExchangeRate, ExchangeRateApiSource, IpApiLocator, RateProvider,
};

/// Why the page stays in EUR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseReason {
    /// Geolocation failed.
    CountryUnknown,
    /// The visitor's country uses EUR or is not mapped to another currency.
    BaseCurrencyCountry(CountryCode),
    /// No usable rate for the visitor's currency.
    RateUnavailable(CurrencyCode),
}

/// The outcome of the lookup phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    BaseCurrency(BaseReason),
    Convert {
        currency: CurrencyCode,
        rate: ExchangeRate,
    },
}

/// What a localization pass did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizationOutcome {
    /// Nothing was rewritten.
    Unchanged(BaseReason),
    Converted {
        currency: CurrencyCode,
        rate: ExchangeRate,
        report: RewriteReport,
    },
}

/// Runs the visitor currency lookup and rewrites the page once.
#[derive(Clone)]
pub struct Localizer {
    provider: RateProvider,
    rewriter: PriceRewriter,
    scan_root: ScanRoot,
}

impl Localizer {
    pub fn new(provider: RateProvider) -> Self {
        Self {
            provider,
            rewriter: PriceRewriter::default(),
            scan_root: ScanRoot::Document,
        }
    }

    /// HTTP providers at the configured endpoints.
    pub fn from_config(config: &LocalizationConfig) -> Self {
        let provider = RateProvider::new(
            Arc::new(IpApiLocator::with_endpoint(
                config.geo_endpoint.clone(),
                config.request_timeout,
            )),
            Arc::new(ExchangeRateApiSource::with_endpoint(
                config.rates_endpoint.clone(),
                config.request_timeout,
            )),
        );
        Self::new(provider)
            .with_rewriter(PriceRewriter::new(PriceSelectors::default(), config.amount_style()))
    }

    pub fn with_provider(mut self, provider: RateProvider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_rewriter(mut self, rewriter: PriceRewriter) -> Self {
        self.rewriter = rewriter;
        self
    }

    pub fn with_scan_root(mut self, scan_root: ScanRoot) -> Self {
        self.scan_root = scan_root;
        self
    }

    /// Country lookup, then (only for non-EUR currencies) one rate lookup.
    pub async fn resolve(&self) -> Resolution {
        let Some(country) = self.provider.detect_country().await else {
            return Resolution::BaseCurrency(BaseReason::CountryUnknown);
        };

        let currency = target_currency(Some(&country));
        if currency.is_base() {
            info!("Visitor in {} sees base currency EUR, no conversion needed", country);
            return Resolution::BaseCurrency(BaseReason::BaseCurrencyCountry(country));
        }

        match self.provider.get_exchange_rate(currency).await {
            Some(rate) => Resolution::Convert { currency, rate },
            None => {
                info!("Keeping base currency EUR, no rate for {}", currency);
                Resolution::BaseCurrency(BaseReason::RateUnavailable(currency))
            }
        }
    }

    /// Applies a resolution to the page. Base-currency resolutions leave it untouched.
    pub fn apply(&self, page: &mut PricePage, resolution: Resolution) -> LocalizationOutcome {
        match resolution {
            Resolution::BaseCurrency(reason) => LocalizationOutcome::Unchanged(reason),
            Resolution::Convert { currency, rate } => {
                let report = self
                    .rewriter
                    .rewrite(page, &self.scan_root, currency, Some(rate));
                info!(
                    "Prices converted to {} (rate: {}, rewritten: {}, skipped: {})",
                    currency, rate, report.rewritten, report.skipped
                );
                LocalizationOutcome::Converted {
                    currency,
                    rate,
                    report,
                }
            }
        }
    }

    /// The full page-load sequence.
    pub async fn localize(&self, page: &mut PricePage) -> LocalizationOutcome {
        let resolution = self.resolve().await;
        self.apply(page, resolution)
    }
}
