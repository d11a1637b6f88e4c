//! Monetary amount rendered with exactly two decimal places.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calculated monetary value, always held at a scale of two.
///
/// Amounts are rounded half away from zero on construction, so both
/// `Display` and the JSON form are a string fixed to two decimal places.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Amount::new(Decimal::from(500)).to_string(), "500.00");
/// assert_eq!(Amount::new(Decimal::new(12345, 3)).to_string(), "12.35");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The zero amount, `0.00`.
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }

    /// Creates an amount, rounding to two decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            // avoid rendering "-0.00"
            rounded = Decimal::ZERO;
        }
        rounded.rescale(2);
        Self(rounded)
    }

    /// Returns the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self::new)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_number_renders_two_places() {
        assert_eq!(Amount::new(dec("2400")).to_string(), "2400.00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(Amount::new(dec("0.125")).to_string(), "0.13");
        assert_eq!(Amount::new(dec("-0.125")).to_string(), "-0.13");
        assert_eq!(Amount::new(dec("99.994")).to_string(), "99.99");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(Amount::new(dec("-0.001")).to_string(), "0.00");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Amount::new(dec("150"))).unwrap();
        assert_eq!(json, "\"150.00\"");
    }

    #[test]
    fn test_deserializes_from_string_and_number() {
        let from_str: Amount = serde_json::from_str("\"1000.5\"").unwrap();
        let from_int: Amount = serde_json::from_str("1000").unwrap();
        assert_eq!(from_str.to_string(), "1000.50");
        assert_eq!(from_int.to_string(), "1000.00");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let amount: Amount = " 12.5 ".parse().unwrap();
        assert_eq!(amount.value(), dec("12.50"));
    }

    #[test]
    fn test_zero_is_zero() {
        assert!(Amount::zero().is_zero());
        assert_eq!(Amount::zero().to_string(), "0.00");
    }
}
