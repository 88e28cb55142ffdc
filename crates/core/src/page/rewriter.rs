use log::debug;
use rust_decimal::Decimal;
use scraper::ElementRef;

use super::amount::{parse_amount, parse_attribute_amount};
use super::{PricePage, PriceRole, PriceSelectors, ScanRoot, BASE_AMOUNT_ATTRIBUTE};
use crate::currency::{currency_meta, CurrencyCode};
use crate::errors::{Error, Result};
use crate::formatter::{format_price, AmountStyle};
use storefront_rates::ExchangeRate;

/// Label shown before the currency name in the indicator.
pub const INDICATOR_PREFIX: &str = "Moneda: ";

/// What a rewrite pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewriteReport {
    /// Price elements whose text was replaced.
    pub rewritten: usize,
    /// Price elements left alone because no amount could be read or converted.
    pub skipped: usize,
    /// Whether a currency indicator was found and shown.
    pub indicator_updated: bool,
}

/// Rewrites tagged price elements into a target currency.
#[derive(Debug, Clone, Default)]
pub struct PriceRewriter {
    selectors: PriceSelectors,
    style: AmountStyle,
}

impl PriceRewriter {
    pub fn new(selectors: PriceSelectors, style: AmountStyle) -> Self {
        Self { selectors, style }
    }

    /// Rewrites every original and discounted price inside `root`.
    ///
    /// The EUR amount comes from `data-price` when present, so pages rendered
    /// with that attribute can be rewritten any number of times. Otherwise it
    /// is parsed from the visible text, and a second pass would treat the
    /// already-converted number as EUR. Elements with no readable amount, or
    /// whose converted amount overflows, are skipped.
    pub fn rewrite(
        &self,
        page: &mut PricePage,
        root: &ScanRoot,
        currency: CurrencyCode,
        rate: Option<ExchangeRate>,
    ) -> RewriteReport {
        let mut report = RewriteReport::default();

        for role in [PriceRole::Original, PriceRole::Discounted] {
            let (rewritten, skipped) =
                page.replace_texts(root, self.selectors.for_role(role), |el| {
                    match self.localized_text(el, currency, rate) {
                        Ok(text) => Some(text),
                        Err(e) => {
                            debug!("Skipping price element: {}", e);
                            None
                        }
                    }
                });
            report.rewritten += rewritten;
            report.skipped += skipped;
        }

        let label = format!("{}{}", INDICATOR_PREFIX, currency_meta(currency).display_name);
        report.indicator_updated = page.reveal_with_text(root, &self.selectors.indicator, &label);

        report
    }

    fn localized_text(
        &self,
        el: ElementRef<'_>,
        currency: CurrencyCode,
        rate: Option<ExchangeRate>,
    ) -> Result<String> {
        let amount = base_amount(el)?;
        let price = format_price(amount, rate, currency.as_str(), self.style).ok_or_else(|| {
            Error::AmountOutOfRange {
                amount: amount.to_string(),
                rate: rate.map(|r| r.to_string()).unwrap_or_default(),
            }
        })?;
        Ok(price.display())
    }
}

/// The EUR amount an element stands for.
fn base_amount(el: ElementRef<'_>) -> Result<Decimal> {
    if let Some(amount) = el
        .value()
        .attr(BASE_AMOUNT_ATTRIBUTE)
        .and_then(parse_attribute_amount)
    {
        return Ok(amount);
    }

    let text: String = el.text().collect();
    parse_amount(&text).ok_or_else(|| Error::UnparsablePriceText(text.trim().to_string()))
}

/// Rewrites prices with the standard selectors and plain amounts.
pub fn rewrite_prices(
    page: &mut PricePage,
    root: &ScanRoot,
    currency: CurrencyCode,
    rate: Option<ExchangeRate>,
) -> RewriteReport {
    PriceRewriter::default().rewrite(page, root, currency, rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::parse_selector;
    use rust_decimal_macros::dec;

    fn usd() -> Option<ExchangeRate> {
        ExchangeRate::new(dec!(1.08))
    }

    fn prices(page: &PricePage) -> Vec<String> {
        let selectors = PriceSelectors::default();
        let mut all = page.texts(&ScanRoot::Document, &selectors.original);
        all.extend(page.texts(&ScanRoot::Document, &selectors.discounted));
        all
    }

    #[test]
    fn test_rewrites_text_price() {
        let mut page = PricePage::parse_fragment(
            r#"<span class="popup-price-original">€12.99</span>"#,
        );
        let report = rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Usd, usd());

        assert_eq!(prices(&page), vec!["$14.03"]);
        assert_eq!(report.rewritten, 1);
        assert_eq!(report.skipped, 0);
        assert!(!report.indicator_updated);
    }

    #[test]
    fn test_unparsable_text_is_untouched() {
        let mut page = PricePage::parse_fragment(
            r#"<span class="popup-price-original">N/A</span><span class="popup-price-discount">€9.99</span>"#,
        );
        let report = rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Usd, usd());

        assert_eq!(prices(&page), vec!["N/A", "$10.79"]);
        assert_eq!(report.rewritten, 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_overflowing_price_is_untouched() {
        let mut page = PricePage::parse_fragment(concat!(
            r#"<span class="popup-price-original">€50000000000000000000000000000</span>"#,
            r#"<span class="popup-price-discount">€9.99</span>"#,
        ));
        let jpy = ExchangeRate::new(dec!(162.35));
        let report = rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Jpy, jpy);

        assert_eq!(prices(&page), vec!["€50000000000000000000000000000", "¥1621.88"]);
        assert_eq!(report.rewritten, 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_data_attribute_makes_rewrite_repeatable() {
        let mut page = PricePage::parse_fragment(
            r#"<span class="popup-price-discount" data-price="9.99">€9.99</span>"#,
        );
        rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Usd, usd());
        rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Usd, usd());
        assert_eq!(prices(&page), vec!["$10.79"]);

        let gbp = ExchangeRate::new(dec!(0.86));
        rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Gbp, gbp);
        assert_eq!(prices(&page), vec!["£8.59"]);
    }

    #[test]
    fn test_text_only_rewrite_compounds() {
        let mut page = PricePage::parse_fragment(
            r#"<span class="popup-price-original">€10.00</span>"#,
        );
        rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Usd, usd());
        rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Usd, usd());
        // 10.80 re-read as EUR
        assert_eq!(prices(&page), vec!["$11.66"]);
    }

    #[test]
    fn test_without_rate_keeps_amount() {
        let mut page = PricePage::parse_fragment(
            r#"<span class="popup-price-original">€12.99</span>"#,
        );
        rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Jpy, None);
        assert_eq!(prices(&page), vec!["¥12.99"]);
    }

    #[test]
    fn test_monetary_style_without_rate() {
        let rewriter = PriceRewriter::new(PriceSelectors::default(), AmountStyle::Monetary);
        let mut page = PricePage::parse_fragment(
            r#"<span class="popup-price-original" data-price="10">€10.00</span>"#,
        );
        rewriter.rewrite(&mut page, &ScanRoot::Document, CurrencyCode::Eur, None);
        assert_eq!(prices(&page), vec!["€10.00"]);
    }

    #[test]
    fn test_scan_root_limits_rewrite() {
        let mut page = PricePage::parse_fragment(
            r#"<div id="popup"><span class="popup-price-original">€12.99</span></div>
               <div id="other"><span class="popup-price-original">€19.99</span></div>"#,
        );
        let root = ScanRoot::within("#popup").unwrap();
        let report = rewrite_prices(&mut page, &root, CurrencyCode::Usd, usd());

        assert_eq!(report.rewritten, 1);
        assert_eq!(prices(&page), vec!["$14.03", "€19.99"]);
    }

    #[test]
    fn test_nested_scan_roots_visit_once() {
        let mut page = PricePage::parse_fragment(
            r#"<div class="shelf"><div class="shelf"><span class="popup-price-original" data-price="1">€1</span></div></div>"#,
        );
        let root = ScanRoot::within(".shelf").unwrap();
        let report = rewrite_prices(&mut page, &root, CurrencyCode::Usd, usd());
        assert_eq!(report.rewritten, 1);
        assert_eq!(prices(&page), vec!["$1.08"]);
    }

    #[test]
    fn test_indicator_is_labelled_and_shown() {
        let mut page = PricePage::parse_fragment(
            r#"<span id="currency-indicator" class="badge" style="display: none; color: red"></span>"#,
        );
        let report = rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Mxn, None);
        assert!(report.indicator_updated);

        let selector = parse_selector("#currency-indicator").unwrap();
        assert_eq!(
            page.texts(&ScanRoot::Document, &selector),
            vec!["Moneda: MXN"]
        );
        let html = page.html();
        assert!(html.contains("display: inline"));
        assert!(!html.contains("display: none"));
        assert!(html.contains("color: red"));
        assert!(html.contains(r#"class="badge""#));
    }

    #[test]
    fn test_hidden_indicator_is_unhidden() {
        let mut page =
            PricePage::parse_fragment(r#"<span id="currency-indicator" hidden>EUR</span>"#);
        rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Brl, None);
        let html = page.html();
        assert!(!html.contains("hidden"));
        assert!(html.contains("Moneda: BRL"));
    }

    #[test]
    fn test_table_cell_indicator_is_shown() {
        let mut page = PricePage::parse_fragment(
            r#"<table><tr><td id="currency-indicator" style="display: none">EUR</td></tr></table>"#,
        );
        let report = rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Usd, usd());
        assert!(report.indicator_updated);

        let selector = parse_selector("td#currency-indicator").unwrap();
        assert_eq!(
            page.texts(&ScanRoot::Document, &selector),
            vec!["Moneda: USD"]
        );
        let html = page.html();
        assert!(html.contains("display: inline"));
        assert!(!html.contains("display: none"));
    }

    #[test]
    fn test_indicator_that_cannot_be_copied_is_not_reported_shown() {
        let mut page = PricePage::parse_fragment(
            r#"<table><colgroup><col id="currency-indicator" style="display: none"></colgroup></table>"#,
        );
        let report = rewrite_prices(&mut page, &ScanRoot::Document, CurrencyCode::Usd, usd());
        assert!(!report.indicator_updated);
        assert!(page.html().contains("display: none"));
    }

    #[test]
    fn test_custom_selectors() {
        let selectors = PriceSelectors::new(".was", ".now", "#cur").unwrap();
        let rewriter = PriceRewriter::new(selectors, AmountStyle::Plain);
        let mut page = PricePage::parse_fragment(
            r#"<p class="was">€12.99</p><p class="now">€9.99</p><p class="popup-price-original">€1</p>"#,
        );
        let report = rewriter.rewrite(&mut page, &ScanRoot::Document, CurrencyCode::Usd, usd());
        assert_eq!(report.rewritten, 2);
        assert!(page.html().contains("€1<"));
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(PriceSelectors::new("..", ".now", "#cur").is_err());
        assert!(ScanRoot::within("##").is_err());
    }
}
