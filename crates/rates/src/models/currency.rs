use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Currencies a visitor can be shown.
///
/// EUR is the base currency every catalog price is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Eur,
    Usd,
    Gbp,
    Jpy,
    Cad,
    Aud,
    Mxn,
    Brl,
    Cop,
    Clp,
    Ars,
}

impl CurrencyCode {
    /// The currency all stored prices are denominated in.
    pub const BASE: CurrencyCode = CurrencyCode::Eur;

    /// Every supported code, in table order.
    pub const ALL: [CurrencyCode; 11] = [
        Self::Eur,
        Self::Usd,
        Self::Gbp,
        Self::Jpy,
        Self::Cad,
        Self::Aud,
        Self::Mxn,
        Self::Brl,
        Self::Cop,
        Self::Clp,
        Self::Ars,
    ];

    /// ISO 4217 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Mxn => "MXN",
            Self::Brl => "BRL",
            Self::Cop => "COP",
            Self::Clp => "CLP",
            Self::Ars => "ARS",
        }
    }

    pub fn is_base(&self) -> bool {
        *self == Self::BASE
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the supported currency codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported currency code: {}", self.0)
    }
}

impl std::error::Error for UnknownCurrency {}

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}
