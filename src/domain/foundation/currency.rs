//! ISO-4217 currency code value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A three-letter currency code, normalised to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a CurrencyCode, returning error unless the input is three ASCII letters.
    pub fn try_new(code: &str) -> Result<Self, ValidationError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ValidationError::empty_field("currency"));
        }
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "currency",
                format!("expected a three-letter ISO code, got '{}'", code),
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the display symbol for well-known currencies.
    pub fn symbol(&self) -> Option<&'static str> {
        match self.0.as_str() {
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            _ => None,
        }
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_to_uppercase() {
        assert_eq!(CurrencyCode::try_new("usd").unwrap().as_str(), "USD");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(CurrencyCode::try_new("US").is_err());
        assert!(CurrencyCode::try_new("USDT").is_err());
    }

    #[test]
    fn rejects_non_letters() {
        let err = CurrencyCode::try_new("U5D").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn rejects_empty() {
        let err = CurrencyCode::try_new("").unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
    }

    #[test]
    fn symbol_known_and_unknown() {
        assert_eq!(CurrencyCode::try_new("GBP").unwrap().symbol(), Some("£"));
        assert_eq!(CurrencyCode::try_new("SEK").unwrap().symbol(), None);
    }

    #[test]
    fn deserializes_with_validation() {
        let code: CurrencyCode = serde_json::from_str("\"eur\"").unwrap();
        assert_eq!(code.as_str(), "EUR");
        assert!(serde_json::from_str::<CurrencyCode>("\"euro\"").is_err());
    }
}
