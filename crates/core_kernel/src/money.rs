//! Rand amounts with precise decimal arithmetic
//!
//! Every monetary value in the portal is a non-negative South African Rand
//! amount in whole units (premiums, cover, excess, claimed and approved
//! amounts). `Rand` uses rust_decimal so that sums and monthly equivalents
//! never pick up floating-point drift, and refuses negative values at
//! construction time.
//!
//! On the wire a `Rand` is a plain JSON number, which is what presentation
//! collaborators expect to hand to their own currency formatter.
//!
//! Amounts are capped at [`Rand::MAX_UNITS`] whole rand. Anything larger is
//! refused at construction and on deserialization, so sums over any realistic
//! list of amounts stay far inside `Decimal`'s range.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use thiserror::Error;

/// ISO 4217 code of the only currency the portal deals in
pub const CURRENCY_CODE: &str = "ZAR";

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount must not be negative: {0}")]
    Negative(Decimal),

    #[error("Amount exceeds the largest supported value: {0}")]
    OutOfRange(Decimal),

    #[error("Overflow during calculation")]
    Overflow,

    #[error("Division by zero")]
    DivisionByZero,
}

/// A non-negative amount of South African Rand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rand(Decimal);

impl Rand {
    /// Largest accepted amount, in whole rand
    pub const MAX_UNITS: u64 = u64::MAX;

    /// Creates a Rand amount, rejecting negative and out-of-range values
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        if amount > Decimal::from(Self::MAX_UNITS) {
            return Err(MoneyError::OutOfRange(amount));
        }
        Ok(Self(amount.normalize()))
    }

    /// Creates a Rand amount from whole units
    pub fn from_whole(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Zero rand
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Divides into `parts` equal shares rounded to cents
    pub fn divide(&self, parts: u32) -> Result<Self, MoneyError> {
        if parts == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self((self.0 / Decimal::from(parts)).round_dp(2).normalize()))
    }

    /// Adds, failing instead of panicking when the sum leaves `Decimal`'s range
    pub fn checked_add(&self, other: Rand) -> Result<Rand, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// Subtracts, clamping at zero
    pub fn saturating_sub(&self, other: Rand) -> Self {
        if other.0 >= self.0 {
            Self::zero()
        } else {
            Self(self.0 - other.0)
        }
    }
}

impl Add for Rand {
    type Output = Rand;

    /// Saturates at `Decimal::MAX`; use [`Rand::checked_add`] to detect overflow
    fn add(self, other: Rand) -> Rand {
        self.checked_add(other).unwrap_or(Rand(Decimal::MAX))
    }
}

impl Sum for Rand {
    fn sum<I: Iterator<Item = Rand>>(iter: I) -> Self {
        iter.fold(Rand::zero(), |acc, r| acc + r)
    }
}

impl<'a> Sum<&'a Rand> for Rand {
    fn sum<I: Iterator<Item = &'a Rand>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl TryFrom<Decimal> for Rand {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Rand::new(value)
    }
}

impl fmt::Display for Rand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", CURRENCY_CODE, self.0)
    }
}

impl Serialize for Rand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.fract().is_zero() {
            if let Some(units) = self.0.to_u64() {
                return serializer.serialize_u64(units);
            }
        }
        match self.0.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => Err(serde::ser::Error::custom(format!(
                "Amount {} cannot be represented as a number",
                self.0
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Rand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Rand::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(Rand::new(dec!(-1)), Err(MoneyError::Negative(dec!(-1))));
    }

    #[test]
    fn test_amount_above_cap_rejected() {
        let huge = dec!(60000000000000000000000000000);
        assert_eq!(Rand::new(huge), Err(MoneyError::OutOfRange(huge)));
        assert!(Rand::new(Decimal::from(Rand::MAX_UNITS)).is_ok());
    }

    #[test]
    fn test_checked_add_reports_overflow() {
        let near_limit = Rand(Decimal::MAX);
        assert_eq!(near_limit.checked_add(Rand::from_whole(1)), Err(MoneyError::Overflow));
        assert_eq!(near_limit + Rand::from_whole(1), near_limit);
        assert_eq!(
            Rand::from_whole(2).checked_add(Rand::from_whole(3)),
            Ok(Rand::from_whole(5))
        );
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_amount() {
        assert!(serde_json::from_str::<Rand>("60000000000000000000000000000").is_err());
        assert!(serde_json::from_str::<Rand>("-5").is_err());
        assert_eq!(serde_json::from_str::<Rand>("45000").unwrap(), Rand::from_whole(45000));
    }

    #[test]
    fn test_whole_amount_serializes_as_integer() {
        let json = serde_json::to_string(&Rand::from_whole(45000)).unwrap();
        assert_eq!(json, "45000");
    }

    #[test]
    fn test_divide_rounds_to_cents() {
        let monthly = Rand::from_whole(2400).divide(12).unwrap();
        assert_eq!(monthly.amount(), dec!(200));

        let odd = Rand::from_whole(1000).divide(3).unwrap();
        assert_eq!(odd.amount(), dec!(333.33));
    }
}
