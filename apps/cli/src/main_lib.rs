//! Page-load driver: load a page, localize it once, hand back the HTML.

pub mod args;

use std::sync::Arc;

use anyhow::{anyhow, Context};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use args::Args;
use storefront_core::catalog::{books_by_id, render_catalog_page, BOOKS};
use storefront_core::{LocalizationConfig, LocalizationOutcome, Localizer, PricePage, ScanRoot};
use storefront_rates::{CountryCode, ExchangeRateApiSource, RateProvider, StaticLocator};

/// Logs go to stderr; stdout is reserved for the page.
pub fn init_tracing() {
    let log_format =
        std::env::var("STOREFRONT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// The page to localize: the input file, or the rendered catalog.
pub fn load_page(args: &Args) -> anyhow::Result<PricePage> {
    match &args.input {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(if args.fragment {
                PricePage::parse_fragment(&source)
            } else {
                PricePage::parse_document(&source)
            })
        }
        None if args.books.is_empty() => Ok(PricePage::parse_document(&render_catalog_page(
            BOOKS,
        ))),
        None => {
            let books = books_by_id(&args.books)?;
            Ok(PricePage::parse_document(&render_catalog_page(books)))
        }
    }
}

/// HTTP lookups per `config`, with geolocation replaced by a fixed country if one is given.
pub fn build_localizer(config: &LocalizationConfig, args: &Args) -> anyhow::Result<Localizer> {
    let localizer = match &args.country {
        None => Localizer::from_config(config),
        Some(raw) => {
            let country = CountryCode::parse(raw)
                .ok_or_else(|| anyhow!("Invalid country code '{}'", raw))?;
            tracing::info!("Using fixed country {}", country);
            let provider = RateProvider::new(
                Arc::new(StaticLocator::new(Some(country))),
                Arc::new(ExchangeRateApiSource::with_endpoint(
                    config.rates_endpoint.clone(),
                    config.request_timeout,
                )),
            );
            Localizer::from_config(config).with_provider(provider)
        }
    };

    Ok(match &args.scope {
        Some(selector) => localizer.with_scan_root(ScanRoot::within(selector)?),
        None => localizer,
    })
}

/// Loads, localizes and serialises the page.
pub async fn run(args: &Args, config: &LocalizationConfig) -> anyhow::Result<String> {
    let mut page = load_page(args)?;
    let localizer = build_localizer(config, args)?;

    match localizer.localize(&mut page).await {
        LocalizationOutcome::Unchanged(reason) => {
            tracing::info!("Page left in EUR: {:?}", reason)
        }
        LocalizationOutcome::Converted {
            currency, report, ..
        } => tracing::info!(
            "Page localized to {} ({} prices, {} skipped)",
            currency,
            report.rewritten,
            report.skipped
        ),
    }

    Ok(page.html())
}
