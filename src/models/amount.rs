//! Amount type for representing shares of a trip's cost
//!
//! Trip prices are split by the number of people in the car, so shares are
//! rarely whole cents. Amounts keep full `f64` precision internally and are
//! only rounded to two decimals when rendered or written to a record.

use std::fmt;
use std::ops::Add;

/// Tolerance used when comparing amounts that went through a two-decimal
/// record and back
pub const CENT: f64 = 0.01;

/// A monetary amount in the carpool's currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use carpool::models::Amount;
    /// let share = Amount::new(12.5);
    /// assert_eq!(share.to_string(), "12.50");
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the unrounded value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount can be owed by a participant (finite, not negative)
    pub fn is_valid_share(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Split the amount evenly between `ways` people
    ///
    /// Splitting zero ways yields zero.
    pub fn split(self, ways: usize) -> Self {
        if ways == 0 {
            Self::zero()
        } else {
            Self(self.0 / ways as f64)
        }
    }

    /// Value rounded to two decimals
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    /// Check whether two amounts agree within `tolerance`
    pub fn approx_eq(&self, other: Amount, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }

    /// Parse a plain decimal amount as written in a record cell
    ///
    /// Accepts "12.50", "12" and "0.00". Currency symbols, signs and
    /// non-finite values are rejected.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        let plain = !trimmed.is_empty()
            && trimmed.chars().all(|c| c.is_ascii_digit() || c == '.');
        if !plain {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        trimmed
            .parse::<f64>()
            .map(Self)
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // a tiny negative rounds to -0.0, which would print as "-0.00"
        let rounded = self.rounded();
        if rounded == 0.0 {
            write!(f, "{:.2}", 0.0)
        } else {
            write!(f, "{:.2}", rounded)
        }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rounds_to_two_decimals() {
        assert_eq!(Amount::new(12.5).to_string(), "12.50");
        assert_eq!(Amount::new(9.7718).to_string(), "9.77");
        assert_eq!(Amount::new(3.257266).to_string(), "3.26");
        assert_eq!(Amount::zero().to_string(), "0.00");
        assert_eq!(Amount::new(-0.001).to_string(), "0.00");
    }

    #[test]
    fn test_split() {
        assert_eq!(Amount::new(25.0).split(2), Amount::new(12.5));
        assert_eq!(Amount::new(25.0).split(0), Amount::zero());
    }

    #[test]
    fn test_arithmetic_keeps_precision() {
        let third = Amount::new(10.0).split(3);
        let total = third + third + third;
        assert!(total.approx_eq(Amount::new(10.0), 1e-9));
        assert_eq!(third.to_string(), "3.33");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("12.50").unwrap(), Amount::new(12.5));
        assert_eq!(Amount::parse(" 7 ").unwrap(), Amount::new(7.0));
        assert!(Amount::parse("$12.50").is_err());
        assert!(Amount::parse("-3.10").is_err());
        assert!(Amount::parse("+3.10").is_err());
        assert!(Amount::parse("1e3").is_err());
        assert!(Amount::parse("1.2.3").is_err());
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse("inf").is_err());
    }

    #[test]
    fn test_valid_share() {
        assert!(Amount::zero().is_valid_share());
        assert!(Amount::new(4.2).is_valid_share());
        assert!(!Amount::new(-1.0).is_valid_share());
        assert!(!Amount::new(f64::NAN).is_valid_share());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Amount::new(1.25), Amount::new(2.5), Amount::new(0.25)];
        let total: Amount = amounts.into_iter().sum();
        assert_eq!(total, Amount::new(4.0));
    }
}
