//! Cart line quantities.
//!
//! A cart entry always holds at least one unit; removing the last unit means
//! removing the entry. [`Quantity`] encodes that by wrapping a `NonZeroU32`.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Errors that can occur when coercing input into a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The input string is empty (or only whitespace).
    #[error("quantity cannot be empty")]
    Empty,
    /// The input is not a whole number.
    #[error("quantity must be a whole number, got {0:?}")]
    NotAWholeNumber(String),
    /// The input is zero or negative.
    #[error("quantity must be at least 1, got {0}")]
    NotPositive(i64),
    /// The input does not fit in a quantity.
    #[error("quantity is too large: {0}")]
    TooLarge(String),
}

/// A positive number of units of one product in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit; the quantity of a freshly added cart entry.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, returning `None` for zero.
    #[must_use]
    pub const fn new(n: u32) -> Option<Self> {
        match NonZeroU32::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Get the number of units.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// One more unit.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::TooLarge`] on overflow.
    pub fn incremented(self) -> Result<Self, QuantityError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| QuantityError::TooLarge(format!("{}+1", self.0)))
    }

    /// One fewer unit, never going below one.
    #[must_use]
    pub fn decremented(self) -> Self {
        Self::new(self.get() - 1).unwrap_or(Self::ONE)
    }

    /// Coerce a user-supplied string such as `"3"` into a quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed string is empty, not a whole number,
    /// not positive, or too large.
    pub fn parse(s: &str) -> Result<Self, QuantityError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(QuantityError::Empty);
        }
        let n: i64 = trimmed
            .parse()
            .map_err(|_| QuantityError::NotAWholeNumber(trimmed.to_owned()))?;
        Self::try_from(n)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        if n < 1 {
            return Err(QuantityError::NotPositive(n));
        }
        let n = u32::try_from(n).map_err(|_| QuantityError::TooLarge(n.to_string()))?;
        Self::new(n).ok_or(QuantityError::NotPositive(0))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity as typed into a form field: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(serde_json::Number),
    Text(String),
}

impl QuantityInput {
    /// Validate the input into a [`Quantity`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a positive whole number.
    pub fn parse(&self) -> Result<Quantity, QuantityError> {
        match self {
            Self::Number(n) => n.as_i64().map_or_else(
                || Err(QuantityError::NotAWholeNumber(n.to_string())),
                Quantity::try_from,
            ),
            Self::Text(s) => Quantity::parse(s),
        }
    }
}

impl From<u32> for QuantityInput {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for QuantityInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_a_quantity() {
        assert!(Quantity::new(0).is_none());
        assert_eq!(Quantity::new(1), Some(Quantity::ONE));
    }

    #[test]
    fn test_decrement_floors_at_one() {
        assert_eq!(Quantity::ONE.decremented(), Quantity::ONE);
        assert_eq!(Quantity::new(3).unwrap().decremented().get(), 2);
    }

    #[test]
    fn test_increment_overflow() {
        let max = Quantity::new(u32::MAX).unwrap();
        assert!(matches!(max.incremented(), Err(QuantityError::TooLarge(_))));
        assert_eq!(Quantity::ONE.incremented().unwrap().get(), 2);
    }

    #[test]
    fn test_parse_strings() {
        assert_eq!(Quantity::parse(" 4 ").unwrap().get(), 4);
        assert_eq!(Quantity::parse(""), Err(QuantityError::Empty));
        assert_eq!(
            Quantity::parse("two"),
            Err(QuantityError::NotAWholeNumber("two".to_string()))
        );
        assert_eq!(Quantity::parse("0"), Err(QuantityError::NotPositive(0)));
        assert_eq!(Quantity::parse("-2"), Err(QuantityError::NotPositive(-2)));
        assert!(matches!(
            Quantity::parse("99999999999"),
            Err(QuantityError::TooLarge(_))
        ));
    }

    #[test]
    fn test_input_from_json() {
        let number: QuantityInput = serde_json::from_str("3").unwrap();
        let text: QuantityInput = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(number.parse().unwrap(), text.parse().unwrap());

        let fractional: QuantityInput = serde_json::from_str("2.5").unwrap();
        assert!(matches!(
            fractional.parse(),
            Err(QuantityError::NotAWholeNumber(_))
        ));
    }
}
