//! Money type for representing rupee amounts
//!
//! Internally stores amounts in paise (i64) to avoid floating-point precision
//! issues. Provides Indian digit grouping for display and the compact form
//! used in UPI links.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A base-currency (INR) amount stored as paise (hundredths of a rupee)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from paise
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    /// Create a Money amount from whole rupees
    ///
    /// # Examples
    /// ```
    /// use upi_checkout::models::Money;
    /// let price = Money::from_rupees(8999);
    /// assert_eq!(price.paise(), 899_900);
    /// ```
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in paise
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Get the whole rupees portion (truncated toward zero)
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Get the paise portion (0-99)
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Exact decimal value in rupees
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Amount as written into the `am` parameter of a UPI link
    ///
    /// Whole amounts carry no decimals (`8999`), fractional ones two (`8999.50`).
    pub fn upi_amount(&self) -> String {
        if self.paise_part() == 0 {
            self.rupees().to_string()
        } else {
            format!("{}.{:02}", self.rupees(), self.paise_part())
        }
    }

    /// Format with Indian digit grouping (`12,34,567`)
    ///
    /// Paise are only shown when non-zero.
    pub fn format_grouped(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let whole = group_indian(self.rupees().unsigned_abs());
        if self.paise_part() == 0 {
            format!("{}{}", sign, whole)
        } else {
            format!("{}{}.{:02}", sign, whole, self.paise_part())
        }
    }
}

/// Group digits the way `en-IN` locales do: last three, then pairs
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.format_grouped())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        let m = Money::from_rupees(45000);
        assert_eq!(m.paise(), 4_500_000);
        assert_eq!(m.rupees(), 45000);
        assert_eq!(m.paise_part(), 0);
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(Money::from_rupees(999).format_grouped(), "999");
        assert_eq!(Money::from_rupees(8999).format_grouped(), "8,999");
        assert_eq!(Money::from_rupees(45000).format_grouped(), "45,000");
        assert_eq!(Money::from_rupees(1234567).format_grouped(), "12,34,567");
        assert_eq!(Money::from_rupees(123456789).format_grouped(), "12,34,56,789");
        assert_eq!(Money::from_paise(123450).format_grouped(), "1,234.50");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rupees(36001).to_string(), "₹36,001");
        assert_eq!(Money::from_rupees(-500).to_string(), "₹-500");
    }

    #[test]
    fn test_upi_amount() {
        assert_eq!(Money::from_rupees(8999).upi_amount(), "8999");
        assert_eq!(Money::from_paise(899_950).upi_amount(), "8999.50");
        assert_eq!(Money::from_paise(5).upi_amount(), "0.05");
    }

    #[test]
    fn test_arithmetic_and_decimal() {
        let saved = Money::from_rupees(45000) - Money::from_rupees(8999);
        assert_eq!(saved, Money::from_rupees(36001));
        assert_eq!((saved + Money::from_paise(50)).to_decimal().to_string(), "36001.50");
    }
}
