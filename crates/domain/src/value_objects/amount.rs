//! Monetary amount value object

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A non-negative money amount with at most two fractional digits
///
/// Backed by a fixed-point [`Decimal`] so that `49.50` stays exactly `49.50`
/// through parsing, formatting and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Maximum number of significant fractional digits
    pub const MAX_SCALE: u32 = 2;

    /// Create a new amount, rejecting negative values and sub-cent precision
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::InvalidAmount(format!(
                "{value} is negative"
            )));
        }

        if value.normalize().scale() > Self::MAX_SCALE {
            return Err(DomainError::InvalidAmount(format!(
                "{value} has more than {} fractional digits",
                Self::MAX_SCALE
            )));
        }

        Ok(Self(value))
    }

    /// The zero amount
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Zero amounts are syntactically valid but never recorded
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Format with exactly two decimals (e.g. `100.00`)
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact parse: digits beyond the 28-digit precision must not round away cents
        let value = Decimal::from_str_exact(s.trim())
            .map_err(|e| DomainError::InvalidAmount(format!("{s}: {e}")))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_amount() {
        let amount: Amount = "100".parse().unwrap();
        assert_eq!(amount.value(), Decimal::new(100, 0));
        assert_eq!(amount.formatted(), "100.00");
    }

    #[test]
    fn parses_two_fraction_digits_exactly() {
        let amount: Amount = "49.50".parse().unwrap();
        assert_eq!(amount.value(), Decimal::new(4950, 2));
        assert_eq!(amount.to_string(), "49.50");
    }

    #[test]
    fn parses_one_fraction_digit() {
        let amount: Amount = "3.5".parse().unwrap();
        assert_eq!(amount.formatted(), "3.50");
    }

    #[test]
    fn no_float_drift() {
        let amount: Amount = "0.10".parse().unwrap();
        let sum = amount.value() + Decimal::new(20, 2);
        assert_eq!(sum, Decimal::new(30, 2));
    }

    #[test]
    fn rejects_negative() {
        let result: Result<Amount, _> = "-5".parse();
        assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
    }

    #[test]
    fn rejects_sub_cent_precision() {
        let result: Result<Amount, _> = "1.005".parse();
        assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
    }

    #[test]
    fn trailing_zeros_do_not_count_as_precision() {
        let amount: Amount = "1.500".parse().unwrap();
        assert_eq!(amount.formatted(), "1.50");
    }

    #[test]
    fn rejects_garbage() {
        let result: Result<Amount, _> = "abc".parse();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_digits_beyond_precision_instead_of_rounding() {
        let result: Result<Amount, _> = "9999999999999999999999999999.99".parse();
        assert!(matches!(result, Err(DomainError::InvalidAmount(_))));

        let result: Result<Amount, _> = "7922816251426433759354395033.55".parse();
        assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
    }

    #[test]
    fn long_amount_keeps_cents() {
        let amount: Amount = "99999999999999999999999999.99".parse().unwrap();
        assert_eq!(amount.formatted(), "99999999999999999999999999.99");
    }

    #[test]
    fn zero_is_valid_but_flagged() {
        let amount: Amount = "0".parse().unwrap();
        assert!(amount.is_zero());
        assert_eq!(amount, Amount::zero());
    }

    #[test]
    fn ordering_follows_value() {
        let small: Amount = "9.99".parse().unwrap();
        let large: Amount = "10".parse().unwrap();
        assert!(small < large);
    }

    #[test]
    fn serde_round_trip_keeps_cents() {
        let amount: Amount = "12.34".parse().unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
