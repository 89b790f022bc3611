//! Price type with decimal-string currency semantics.
//!
//! Prices travel over the wire as strings (`"45.00"`) and are stored as
//! exact decimals. Two fractional digits at most, never negative.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price must be a decimal number")]
    Invalid,
    /// The value is below zero.
    #[error("price must not be negative")]
    Negative,
    /// The value carries more than two fractional digits.
    #[error("price must have at most 2 decimal places")]
    TooPrecise,
}

/// A non-negative currency amount with at most two fractional digits.
///
/// Serializes as the decimal string the storefront API speaks
/// (`"45.00"`), preserving the scale it was parsed with.
///
/// ## Examples
///
/// ```
/// use kumawat_traders_core::Price;
///
/// assert!(Price::parse("45.00").is_ok());
/// assert!(Price::parse("0").is_ok());
///
/// assert!(Price::parse("-1").is_err());     // negative
/// assert!(Price::parse("1.234").is_err());  // too precise
/// assert!(Price::parse("abc").is_err());    // not a number
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(Decimal);

impl Price {
    /// Maximum number of fractional digits.
    pub const MAX_SCALE: u32 = 2;

    /// Parse a `Price` from its decimal-string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not parse as a decimal, is
    /// negative, or has more than two fractional digits.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount: Decimal = s.trim().parse().map_err(|_| PriceError::Invalid)?;

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }

        if amount.scale() > Self::MAX_SCALE {
            return Err(PriceError::TooPrecise);
        }

        Ok(Self(amount))
    }

    /// Build a price from an amount in minor units (paise).
    ///
    /// Infallible, so seed data can be declared without parsing.
    #[must_use]
    pub fn from_minor_units(units: i64) -> Self {
        Self(Decimal::new(units, Self::MAX_SCALE))
    }

    /// The exact decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<String> for Price {
    type Error = PriceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.0.to_string()
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(Price::parse("45.00").is_ok());
        assert!(Price::parse("0").is_ok());
        assert!(Price::parse("0.5").is_ok());
        assert!(Price::parse("12").is_ok());
        assert!(Price::parse(" 120.00 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Price::parse("abc"), Err(PriceError::Invalid));
        assert_eq!(Price::parse(""), Err(PriceError::Invalid));
        assert_eq!(Price::parse("12.3.4"), Err(PriceError::Invalid));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(Price::parse("-1"), Err(PriceError::Negative));
        assert_eq!(Price::parse("-0.01"), Err(PriceError::Negative));
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        assert_eq!(Price::parse("1.234"), Err(PriceError::TooPrecise));
        assert_eq!(Price::parse("0.001"), Err(PriceError::TooPrecise));
    }

    #[test]
    fn test_preserves_scale() {
        let price = Price::parse("45.00").unwrap();
        assert_eq!(price.to_string(), "45.00");

        let price = Price::parse("45").unwrap();
        assert_eq!(price.to_string(), "45");
    }

    #[test]
    fn test_from_minor_units() {
        assert_eq!(Price::from_minor_units(4500).to_string(), "45.00");
        assert_eq!(Price::from_minor_units(1200).to_string(), "12.00");
    }

    #[test]
    fn test_serde_round_trip() {
        let price = Price::parse("38.00").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"38.00\"");

        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<Price>("\"-5\"").is_err());
        assert!(serde_json::from_str::<Price>("\"1.999999\"").is_err());
    }
}
