//! Caller-supplied amounts for conversions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A non-negative, finite amount of money in either currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Creates a new amount.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidAmount(value.to_string()));
        }
        if value < 0.0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Converts dollars to bolívares.
    pub fn to_local(self, rate: f64) -> Result<f64, DomainError> {
        self.converted(self.0 * rate)
    }

    /// Converts bolívares to dollars. Yields zero while no rate is known.
    pub fn to_usd(self, rate: f64) -> Result<f64, DomainError> {
        self.converted(if rate > 0.0 { self.0 / rate } else { 0.0 })
    }

    // JSON has no encoding for infinity.
    fn converted(self, result: f64) -> Result<f64, DomainError> {
        if result.is_finite() {
            Ok(result)
        } else {
            Err(DomainError::ConversionOverflow(self.0))
        }
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidAmount(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parse() {
        let amount: Amount = "100".parse().unwrap();
        assert_eq!(amount.value(), 100.0);

        let amount: Amount = " 12.5 ".parse().unwrap();
        assert_eq!(amount.value(), 12.5);
    }

    #[test]
    fn test_negative_amount_fails() {
        let result = "-1".parse::<Amount>();
        assert!(matches!(result, Err(DomainError::NegativeAmount)));
    }

    #[test]
    fn test_garbage_amount_fails() {
        for input in ["", "abc", "1,5", "NaN", "inf"] {
            assert!(
                matches!(input.parse::<Amount>(), Err(DomainError::InvalidAmount(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_conversions() {
        let usd = Amount::new(100.0).unwrap();
        assert_eq!(usd.to_local(36.5).unwrap(), 3650.0);

        let bs = Amount::new(3650.0).unwrap();
        assert_eq!(bs.to_usd(36.5).unwrap(), 100.0);
    }

    #[test]
    fn test_to_usd_without_rate_is_zero() {
        let bs = Amount::new(3650.0).unwrap();
        assert_eq!(bs.to_usd(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_conversion_overflow_fails() {
        let usd = Amount::new(1e308).unwrap();
        assert!(matches!(
            usd.to_local(36.5),
            Err(DomainError::ConversionOverflow(_))
        ));

        let bs = Amount::new(f64::MAX).unwrap();
        assert!(matches!(
            bs.to_usd(0.5),
            Err(DomainError::ConversionOverflow(_))
        ));
    }
}
