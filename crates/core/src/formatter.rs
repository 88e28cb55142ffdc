//! Price formatting for display.
//!
//! Pure functions: no I/O, same input always gives the same string.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::{lookup_meta, CurrencyCode};
use storefront_rates::ExchangeRate;

/// Fallback symbol when no rate is applied and the code is unknown.
const BASE_FALLBACK_SYMBOL: &str = "€";
/// Fallback symbol when a rate is applied and the code is unknown.
const CONVERTED_FALLBACK_SYMBOL: &str = "$";

/// How an unconverted amount is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountStyle {
    /// As parsed, without trailing zeros: `12.99`, `10`.
    #[default]
    Plain,
    /// Always two decimals: `12.99`, `10.00`.
    Monetary,
}

/// A price ready to be written into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedPrice {
    pub display_amount: String,
    pub symbol: &'static str,
    pub code: String,
}

impl FormattedPrice {
    /// Symbol immediately followed by the amount, e.g. `$14.03`.
    pub fn display(&self) -> String {
        format!("{}{}", self.symbol, self.display_amount)
    }
}

/// `amount * rate`, rounded half away from zero to two decimals.
/// `None` when the product does not fit a `Decimal`.
pub fn convert_amount(amount: Decimal, rate: ExchangeRate) -> Option<Decimal> {
    amount
        .checked_mul(rate.value())
        .map(|v| v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

fn two_decimals(value: Decimal) -> String {
    let mut value = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    value.to_string()
}

/// Formats a EUR `amount` for display in `currency`.
///
/// Without a rate the amount is shown as-is and an unknown code falls back to
/// the euro sign and `EUR`. With a rate the converted amount always has two
/// decimals and an unknown code falls back to `$` and the raw code.
///
/// Returns `None` only when the conversion overflows.
pub fn format_price(
    amount: Decimal,
    rate: Option<ExchangeRate>,
    currency: &str,
    style: AmountStyle,
) -> Option<FormattedPrice> {
    let meta = lookup_meta(currency);

    let price = match rate {
        None => FormattedPrice {
            display_amount: match style {
                AmountStyle::Plain => amount.normalize().to_string(),
                AmountStyle::Monetary => two_decimals(amount),
            },
            symbol: meta.map_or(BASE_FALLBACK_SYMBOL, |m| m.symbol),
            code: meta
                .map_or(CurrencyCode::BASE.as_str(), |m| m.display_name)
                .to_string(),
        },
        Some(rate) => FormattedPrice {
            display_amount: two_decimals(convert_amount(amount, rate)?),
            symbol: meta.map_or(CONVERTED_FALLBACK_SYMBOL, |m| m.symbol),
            code: meta.map_or(currency, |m| m.display_name).to_string(),
        },
    };
    Some(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::currency_meta;
    use rust_decimal_macros::dec;

    fn rate(value: Decimal) -> Option<ExchangeRate> {
        ExchangeRate::new(value)
    }

    #[test]
    fn test_converted_usd() {
        let price = format_price(dec!(12.99), rate(dec!(1.08)), "USD", AmountStyle::Plain).unwrap();
        assert_eq!(price.display_amount, "14.03");
        assert_eq!(price.symbol, "$");
        assert_eq!(price.code, "USD");
        assert_eq!(price.display(), "$14.03");
    }

    #[test]
    fn test_converted_amount_is_rounded_product() {
        let amounts = [dec!(9.99), dec!(12.99), dec!(14.99), dec!(19.99), dec!(0.01)];
        let rates = [dec!(0.86), dec!(1.08), dec!(162.35), dec!(4215.7), dec!(1.005)];
        for amount in amounts {
            for r in rates {
                let price = format_price(amount, rate(r), "GBP", AmountStyle::Plain).unwrap();
                let expected = (amount * r)
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                assert_eq!(price.display_amount.parse::<Decimal>().unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_converted_always_two_decimals() {
        let price = format_price(dec!(10), rate(dec!(1.5)), "USD", AmountStyle::Plain).unwrap();
        assert_eq!(price.display_amount, "15.00");
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let rate = ExchangeRate::new(dec!(0.125)).unwrap();
        assert_eq!(convert_amount(dec!(1), rate), Some(dec!(0.13)));
    }

    #[test]
    fn test_unconverted_symbol_matches_table() {
        for code in CurrencyCode::ALL {
            let price = format_price(dec!(9.99), None, code.as_str(), AmountStyle::Plain).unwrap();
            assert_eq!(price.symbol, currency_meta(code).symbol);
            assert_eq!(price.code, code.as_str());
        }
    }

    #[test]
    fn test_unknown_code_without_rate_falls_back_to_euro() {
        let price = format_price(dec!(9.99), None, "CHF", AmountStyle::Plain).unwrap();
        assert_eq!(price.symbol, "€");
        assert_eq!(price.code, "EUR");
    }

    #[test]
    fn test_unknown_code_with_rate_falls_back_to_dollar() {
        let price = format_price(dec!(9.99), rate(dec!(0.94)), "CHF", AmountStyle::Plain).unwrap();
        assert_eq!(price.symbol, "$");
        assert_eq!(price.code, "CHF");
        assert_eq!(price.display_amount, "9.39");
    }

    #[test]
    fn test_unconverted_amount_styles() {
        let plain = format_price(dec!(10.00), None, "EUR", AmountStyle::Plain).unwrap();
        assert_eq!(plain.display_amount, "10");

        let plain = format_price(dec!(12.99), None, "EUR", AmountStyle::Plain).unwrap();
        assert_eq!(plain.display_amount, "12.99");

        let monetary = format_price(dec!(10), None, "EUR", AmountStyle::Monetary).unwrap();
        assert_eq!(monetary.display_amount, "10.00");
        assert_eq!(monetary.display(), "€10.00");
    }

    #[test]
    fn test_overflowing_conversion_is_none() {
        let huge = dec!(50000000000000000000000000000);
        assert!(convert_amount(huge, ExchangeRate::new(dec!(162.35)).unwrap()).is_none());
        assert!(format_price(huge, rate(dec!(162.35)), "JPY", AmountStyle::Plain).is_none());

        let unconverted = format_price(huge, None, "EUR", AmountStyle::Plain).unwrap();
        assert_eq!(unconverted.display_amount, "50000000000000000000000000000");
    }
}
