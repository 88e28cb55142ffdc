use std::fmt;

/// Two-letter country code as reported by a geolocation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parses a two-letter ASCII code, upper-casing it.
    ///
    /// Returns `None` for anything that is not exactly two ASCII letters.
    pub fn parse(raw: &str) -> Option<Self> {
        let bytes = raw.trim().as_bytes();
        match bytes {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Some(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        let code = CountryCode::parse("jp").unwrap();
        assert_eq!(code.as_str(), "JP");
        assert_eq!(code, CountryCode::parse("JP").unwrap());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(CountryCode::parse("").is_none());
        assert!(CountryCode::parse("USA").is_none());
        assert!(CountryCode::parse("1A").is_none());
        assert!(CountryCode::parse("é").is_none());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(CountryCode::parse(" mx ").unwrap().to_string(), "MX");
    }
}
