//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog data sometimes carries prices as JSON numbers (`10`) and sometimes
//! as numeric strings (`"20"`). Both are coerced into a [`Price`] at the
//! boundary; anything that is not a non-negative decimal is rejected there,
//! so totals are never computed from garbage.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::quantity::Quantity;

/// Errors that can occur when coercing a value into a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty (or only whitespace).
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price is not a number: {0:?}")]
    NotANumber(String),
    /// The input is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
    /// An amount derived from valid prices left the representable range.
    #[error("amount exceeds the supported range")]
    Overflow,
}

/// A non-negative product price in the store currency (USD).
///
/// Serializes as a decimal string (`"19.99"`) to avoid float rounding on the
/// wire; deserializes from either a number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price, used as the total of an empty cart.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    ///
    /// Used for compiled-in catalog data, which is well-formed by construction.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Coerce a string such as `"20"` or `" 19.99 "` into a price.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed string is empty, not a decimal
    /// number, or negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }
        let amount = Decimal::from_str(trimmed)
            .map_err(|_| PriceError::NotANumber(trimmed.to_owned()))?;
        Self::new(amount)
    }

    /// Get the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the product does not fit in a
    /// [`Decimal`].
    pub fn times(self, quantity: Quantity) -> Result<Self, PriceError> {
        self.0
            .checked_mul(Decimal::from(quantity.get()))
            .map(Self)
            .ok_or(PriceError::Overflow)
    }

    /// Sum of two prices.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the sum does not fit in a
    /// [`Decimal`].
    pub fn checked_add(self, other: Self) -> Result<Self, PriceError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(PriceError::Overflow)
    }

    /// Sum an iterator of fallible amounts, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by `amounts`, or
    /// [`PriceError::Overflow`] if the running total leaves the range.
    pub fn try_sum<I>(amounts: I) -> Result<Self, PriceError>
    where
        I: IntoIterator<Item = Result<Self, PriceError>>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |total, amount| total.checked_add(amount?))
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Wire representation accepted for prices.
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match PriceRepr::deserialize(deserializer)? {
            PriceRepr::Number(n) => n.to_string(),
            PriceRepr::Text(s) => s,
        };
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_string() {
        let price = Price::parse("20").unwrap();
        assert_eq!(price.amount(), Decimal::from(20));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Price::parse(" 19.99 ").unwrap(), Price::from_cents(1999));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Price::parse(""), Err(PriceError::Empty)));
        assert!(matches!(
            Price::parse("abc"),
            Err(PriceError::NotANumber(_))
        ));
        assert!(matches!(Price::parse("-1"), Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let from_number: Price = serde_json::from_str("10").unwrap();
        let from_string: Price = serde_json::from_str("\"10\"").unwrap();
        assert_eq!(from_number, from_string);

        let fractional: Price = serde_json::from_str("19.99").unwrap();
        assert_eq!(fractional, Price::from_cents(1999));
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_string() {
        assert!(serde_json::from_str::<Price>("\"free\"").is_err());
    }

    #[test]
    fn test_times_quantity() {
        let qty = Quantity::new(3).unwrap();
        assert_eq!(
            Price::from_cents(250).times(qty).unwrap(),
            Price::from_cents(750)
        );
    }

    #[test]
    fn test_times_overflow_is_an_error() {
        let huge = Price::parse("50000000000000000000").unwrap();
        let qty = Quantity::new(u32::MAX).unwrap();
        assert_eq!(huge.times(qty), Err(PriceError::Overflow));
    }

    #[test]
    fn test_try_sum() {
        let total =
            Price::try_sum([Ok(Price::from_cents(1000)), Ok(Price::from_cents(2000))]).unwrap();
        assert_eq!(total, Price::from_cents(3000));

        assert_eq!(Price::try_sum([]), Ok(Price::ZERO));
    }

    #[test]
    fn test_try_sum_overflow_is_an_error() {
        let max = Price::new(Decimal::MAX).unwrap();
        assert_eq!(
            Price::try_sum([Ok(max), Ok(Price::from_cents(100))]),
            Err(PriceError::Overflow)
        );
        assert_eq!(
            Price::try_sum([Ok(max), Err(PriceError::Overflow)]),
            Err(PriceError::Overflow)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(1999).display(), "$19.99");
        assert_eq!(Price::parse("20").unwrap().display(), "$20.00");
    }
}
