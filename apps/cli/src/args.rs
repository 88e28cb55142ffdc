//! Command-line arguments for the page localizer.
use clap::Parser;
use std::path::PathBuf;

/// Localize the prices of a storefront page for the current visitor.
#[derive(Debug, Default, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// HTML page to localize. When omitted the catalog page is rendered.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Parse the input as a fragment instead of a full document.
    #[arg(long, requires = "input")]
    pub fragment: bool,

    /// Render only these catalog books (repeatable).
    #[arg(long = "book", value_name = "ID", conflicts_with = "input")]
    pub books: Vec<String>,

    /// Two-letter country to localize for, skipping IP geolocation.
    #[arg(long, value_name = "CC")]
    pub country: Option<String>,

    /// Limit the rewrite to descendants of elements matching this CSS selector.
    #[arg(long, value_name = "SELECTOR")]
    pub scope: Option<String>,

    /// Write the page to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}
