use rust_decimal::Decimal;
use std::str::FromStr;

/// Reads a EUR amount from displayed price text.
///
/// Everything except ASCII digits and `.` is dropped, then the longest
/// leading `digits[.digits]` run is read. `€12.99` gives 12.99, `1.234.50`
/// gives 1.234, and text without digits gives `None`.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let int_len = cleaned.bytes().take_while(u8::is_ascii_digit).count();
    let (int_part, rest) = cleaned.split_at(int_len);
    let frac_part = rest
        .strip_prefix('.')
        .map(|r| {
            let len = r.bytes().take_while(u8::is_ascii_digit).count();
            &r[..len]
        })
        .unwrap_or("");

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let normalized = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    };

    Decimal::from_str(&normalized).ok()
}

/// Reads an amount stored verbatim in a `data-price` attribute.
pub fn parse_attribute_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim())
        .ok()
        .filter(|amount| !amount.is_sign_negative())
}
