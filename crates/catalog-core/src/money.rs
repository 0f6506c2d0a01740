//! # Money Module
//!
//! Provides the `Money` type for handling product prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In memory a price might be the float 12.5                             │
//! │  In PostgreSQL the same price is NUMERIC(14,2) = 12.50                 │
//! │  Comparing the two directly is a type error waiting to happen          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price is normalized to cents on the way in and out            │
//! │    12.5 (float) → 1250 cents ← 12.50 (NUMERIC)                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::money::Money;
//!
//! let price = Money::from_cents(1250);
//! assert_eq!(price, "12.50".parse::<Money>().unwrap());
//! assert_eq!(price.to_decimal().to_string(), "12.50");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are representable so validation can
///   reject them with a proper error instead of a parse failure
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Decimal string on the wire**: JSON carries `"12.50"`, never a float
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount to Money, rounding to whole cents.
    ///
    /// Midpoints round away from zero, matching how PostgreSQL rounds a
    /// value into a `NUMERIC(14,2)` column.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::from_decimal(Decimal::new(12345, 3)).unwrap(); // 12.345
    /// assert_eq!(price.cents(), 1235);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Result<Self, ValidationError> {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        rounded
            .checked_mul(Decimal::from(100))
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "price".to_string(),
                min: i64::MIN,
                max: i64::MAX,
            })
    }

    /// Returns the amount as a two-decimal-place `Decimal` (store form).
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Parses a plain decimal amount such as `"12.50"` or `"3"`.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| ValidationError::invalid_format("price", e.to_string()))?;
        Money::from_decimal(amount)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

/// Serialized as a decimal string: `Money::from_cents(1250)` → `"12.50"`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal().to_string())
    }
}

/// Accepts a decimal string, a whole number, or a fractional number.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Whole(i64),
            Fractional(f64),
        }

        let money = match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text.parse::<Money>(),
            Repr::Whole(whole) => Money::from_decimal(Decimal::from(whole)),
            Repr::Fractional(value) => Decimal::try_from(value)
                .map_err(|e| ValidationError::invalid_format("price", e.to_string()))
                .and_then(Money::from_decimal),
        };

        money.map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!("12.50".parse::<Money>().unwrap().cents(), 1250);
        assert_eq!(" 12.5 ".parse::<Money>().unwrap().cents(), 1250);
        assert_eq!("3".parse::<Money>().unwrap().cents(), 300);
        assert_eq!("0.005".parse::<Money>().unwrap().cents(), 1);
        assert!("twelve".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
    }

    /// The store hands back NUMERIC(14,2); the in-memory value might have
    /// come from a float. Both must land on the same cents.
    #[test]
    fn test_decimal_normalization() {
        let stored = Decimal::new(1250, 2); // 12.50
        let from_float = Decimal::try_from(12.5_f64).unwrap(); // 12.5

        assert_eq!(
            Money::from_decimal(stored).unwrap(),
            Money::from_decimal(from_float).unwrap()
        );
        assert_eq!(Money::from_cents(1250).to_decimal(), stored);
    }

    #[test]
    fn test_to_decimal_keeps_two_places() {
        assert_eq!(Money::from_cents(1250).to_decimal().to_string(), "12.50");
        assert_eq!(Money::from_cents(5).to_decimal().to_string(), "0.05");
    }

    #[test]
    fn test_from_decimal_overflow() {
        assert!(Money::from_decimal(Decimal::MAX).is_err());
    }

    #[test]
    fn test_json_forms() {
        let money: Money = serde_json::from_str("\"19.99\"").unwrap();
        assert_eq!(money.cents(), 1999);

        let money: Money = serde_json::from_str("12.5").unwrap();
        assert_eq!(money.cents(), 1250);

        let money: Money = serde_json::from_str("7").unwrap();
        assert_eq!(money.cents(), 700);

        assert_eq!(
            serde_json::to_string(&Money::from_cents(1250)).unwrap(),
            "\"12.50\""
        );

        assert!(serde_json::from_str::<Money>("true").is_err());
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 1].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 351);
    }
}
