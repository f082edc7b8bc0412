use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use crate::errors::{MaturityError, Result};

/// Money type for deposit principals and maturity amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from integer amount (rupees, dollars, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> std::result::Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?))
    }

    /// create from a float produced by a growth calculation
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(MaturityError::InvalidAmount { value });
        }
        Decimal::from_f64(value)
            .map(|d| Money(d.normalize()))
            .ok_or(MaturityError::InvalidAmount { value })
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// lossy conversion for fractional-exponent math
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// round to specified decimal places
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// annual interest rate, stored as a fraction (0.075 for 7.5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    /// create from percentage (e.g., 7.5 for 7.5%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// rate for one of `periods` equal compounding periods per year
    pub fn periodic(&self, periods: u32) -> Rate {
        Rate(self.0 / Decimal::from(periods))
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}
