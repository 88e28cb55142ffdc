//! Static currency data: display metadata per code and the country map.
//!
//! Both tables are compile-time constants and are never mutated.

mod country_map;

pub use country_map::{country_currency, target_currency, COUNTRY_CURRENCIES};
pub use storefront_rates::{CurrencyCode, UnknownCurrency};

/// Display metadata for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyMeta {
    pub code: CurrencyCode,
    pub symbol: &'static str,
    pub display_name: &'static str,
}

/// Symbol and name for every supported currency.
///
/// Several American currencies share the bare `$`; CAD and AUD carry a
/// prefix so they stay distinguishable from USD.
pub static CURRENCY_TABLE: [CurrencyMeta; 11] = [
    meta(CurrencyCode::Eur, "€", "EUR"),
    meta(CurrencyCode::Usd, "$", "USD"),
    meta(CurrencyCode::Gbp, "£", "GBP"),
    meta(CurrencyCode::Jpy, "¥", "JPY"),
    meta(CurrencyCode::Cad, "CAD$", "CAD"),
    meta(CurrencyCode::Aud, "AUD$", "AUD"),
    meta(CurrencyCode::Mxn, "$", "MXN"),
    meta(CurrencyCode::Brl, "R$", "BRL"),
    meta(CurrencyCode::Cop, "$", "COP"),
    meta(CurrencyCode::Clp, "$", "CLP"),
    meta(CurrencyCode::Ars, "$", "ARS"),
];

const fn meta(
    code: CurrencyCode,
    symbol: &'static str,
    display_name: &'static str,
) -> CurrencyMeta {
    CurrencyMeta {
        code,
        symbol,
        display_name,
    }
}

/// Metadata for a supported code.
pub fn currency_meta(code: CurrencyCode) -> &'static CurrencyMeta {
    // The table lists every variant exactly once.
    CURRENCY_TABLE
        .iter()
        .find(|m| m.code == code)
        .unwrap_or(&CURRENCY_TABLE[0])
}

/// Metadata for a raw code string, `None` if it is not a supported code.
pub fn lookup_meta(code: &str) -> Option<&'static CurrencyMeta> {
    code.parse::<CurrencyCode>().ok().map(currency_meta)
}
