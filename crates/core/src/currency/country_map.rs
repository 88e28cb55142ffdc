use super::CurrencyCode;
use storefront_rates::CountryCode;

/// Country → currency for the markets the store sells into.
///
/// Countries not listed here are shown EUR prices.
pub const COUNTRY_CURRENCIES: &[(&str, CurrencyCode)] = &[
    ("US", CurrencyCode::Usd),
    ("GB", CurrencyCode::Gbp),
    ("JP", CurrencyCode::Jpy),
    ("CA", CurrencyCode::Cad),
    ("AU", CurrencyCode::Aud),
    ("MX", CurrencyCode::Mxn),
    ("BR", CurrencyCode::Brl),
    ("CO", CurrencyCode::Cop),
    ("CL", CurrencyCode::Clp),
    ("AR", CurrencyCode::Ars),
    ("ES", CurrencyCode::Eur),
    ("FR", CurrencyCode::Eur),
    ("DE", CurrencyCode::Eur),
    ("IT", CurrencyCode::Eur),
    ("PT", CurrencyCode::Eur),
    ("NL", CurrencyCode::Eur),
];

/// The mapped currency for `country`, if it has one.
pub fn country_currency(country: &CountryCode) -> Option<CurrencyCode> {
    COUNTRY_CURRENCIES
        .iter()
        .find(|(cc, _)| *cc == country.as_str())
        .map(|(_, currency)| *currency)
}

/// The currency a visitor from `country` should see. EUR when unknown or unmapped.
pub fn target_currency(country: Option<&CountryCode>) -> CurrencyCode {
    country
        .and_then(country_currency)
        .unwrap_or(CurrencyCode::BASE)
}
