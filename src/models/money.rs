//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) so that summation in the
//! aggregation engine is exact. Rounding to two decimal places happens only
//! when an amount is formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse a money amount from a decimal string
    ///
    /// Accepts "12.50", "12.5", "12" and an optional leading "$". Negative
    /// and overflowing values are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let s = s.strip_prefix('$').unwrap_or(s);

        // Expense amounts are never negative
        if s.is_empty() || s.starts_with('-') {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => {
                if frac.is_empty() || frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let digits = frac.len();
                let frac: i64 = frac.parse().map_err(|_| invalid())?;
                let frac = if digits == 1 { frac * 10 } else { frac };
                (whole, frac)
            }
            None => (s, 0),
        };

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Self(cents))
    }

    /// Format with the given currency symbol ("$" -> "$12.50")
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}.{:02}", symbol, self.0 / 100, (self.0 % 100).abs())
    }

    /// Format as a plain decimal string without a currency symbol ("12.50")
    ///
    /// Used for the CSV ledger so the amount column stays symbol-free.
    pub fn to_decimal_string(&self) -> String {
        format!("{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => {
                write!(f, "Invalid money format: '{}'", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
