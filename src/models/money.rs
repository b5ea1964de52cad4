//! Money type for representing expense amounts
//!
//! Internally stores amounts in hundredths (i64) to avoid floating-point
//! precision issues. The serde representation is the decimal display form
//! ("15000.00") so the persisted CSV column stays plain decimal text.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn fraction(&self) -> i64 {
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

    /// Parse a money amount from decimal text
    ///
    /// Accepts formats: "15000", "15000.5", "15000.50", "-10.25".
    /// Fractional digits beyond two are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Only one sign, and only at the very front
        if s.is_empty() || s.starts_with(['+', '-']) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let hundredths = if let Some((units_str, frac_str)) = s.split_once('.') {
            let units: i64 = units_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            if !frac_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            // Pad or truncate the fraction to 2 digits
            let frac: i64 = match frac_str.len() {
                0 => 0,
                1 => {
                    frac_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            // Amounts too large for the hundredths representation are
            // invalid, not a wrap-around
            units
                .checked_mul(100)
                .and_then(|u| u.checked_add(frac))
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
        } else {
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        Ok(Self(if negative { -hundredths } else { hundredths }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.fraction())
        } else {
            write!(f, "{}.{:02}", self.units(), self.fraction())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Money::parse(&s).map_err(serde::de::Error::custom)
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

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
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
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hundredths() {
        let m = Money::from_hundredths(1050);
        assert_eq!(m.hundredths(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.fraction(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_hundredths(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_hundredths(0)), "0.00");
        assert_eq!(format!("{}", Money::from_hundredths(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_hundredths(5)), "0.05");
        assert_eq!(format!("{}", Money::from_hundredths(1500000)), "15000.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().hundredths(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().hundredths(), -1050);
        assert_eq!(Money::parse("10").unwrap().hundredths(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().hundredths(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().hundredths(), 5);
        assert_eq!(Money::parse("15000.0").unwrap().hundredths(), 1500000);
        assert_eq!(Money::parse(" 25.00 ").unwrap().hundredths(), 2500);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("10.5.0").is_err());
        assert!(Money::parse("10,50").is_err());
        assert!(Money::parse("--10").is_err());
        assert!(Money::parse("+10").is_err());
        assert!(Money::parse("10.x5").is_err());
    }

    #[test]
    fn test_parse_rejects_over_range_amounts() {
        // Syntactically valid decimals whose hundredths exceed i64 must be
        // an error, never a wrapped value
        assert!(Money::parse("99999999999999999").is_err());
        assert!(Money::parse("99999999999999999.99").is_err());
        assert!(Money::parse("-99999999999999999").is_err());
        assert!(Money::parse("184467440737095516.15").is_err());

        // Near the boundary but representable still parses
        let max = i64::MAX / 100;
        assert_eq!(
            Money::parse(&max.to_string()).unwrap().hundredths(),
            max * 100
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_hundredths(1000);
        let b = Money::from_hundredths(500);

        assert_eq!((a + b).hundredths(), 1500);
        assert_eq!((a - b).hundredths(), 500);
        assert_eq!((-a).hundredths(), -1000);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_hundredths(100),
            Money::from_hundredths(200),
            Money::from_hundredths(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.hundredths(), 600);
    }

    #[test]
    fn test_display_parse_round_trip() {
        let m = Money::from_hundredths(6500000);
        assert_eq!(Money::parse(&m.to_string()).unwrap(), m);
    }
}
