use std::fmt;

use rust_decimal::Decimal;

/// Units of target currency per one unit of EUR.
///
/// Always strictly positive. A rate is only meaningful for the page load
/// that fetched it and is never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    /// Wraps a decimal rate, rejecting zero and negative values.
    pub fn new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Converts a JSON float, rejecting NaN, infinities and non-positive values.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Decimal::try_from(value).ok().and_then(Self::new)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
