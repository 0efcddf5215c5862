//! Money type for expense amounts
//!
//! Amounts are stored as whole cents in an i64 so that sums over a category
//! are exact. Floating point never enters the arithmetic path; it would
//! accumulate drift over repeated additions.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::error::SpendlogError;

/// A currency amount in cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(i64);

impl Money {
    /// Create an amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendlog::models::Money;
    /// let amount = Money::from_cents(350); // $3.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whether the amount is exactly zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether the amount is below zero
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse an amount from user-entered text.
    ///
    /// Accepts `"10.50"`, `"$10.50"`, `"-10.50"`, `"10"` (whole dollars) and
    /// `"10.5"` (single decimal digit). Anything else is a parse error for
    /// the prompt loop to report.
    pub fn parse(input: &str) -> Result<Self, SpendlogError> {
        let trimmed = input.trim();
        let err = || SpendlogError::ParseAmount(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        // The sign was consumed above, so only bare digit runs are valid
        // from here on; str::parse alone would let "+5" or "-5" back in.
        let parse_digits = |s: &str| -> Result<i64, SpendlogError> {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
            s.parse().map_err(|_| err())
        };

        let cents = match rest.split_once('.') {
            None => parse_digits(rest)?.checked_mul(100).ok_or_else(err)?,
            Some((dollars, frac)) => {
                let frac_cents = match frac.len() {
                    1 => parse_digits(frac)? * 10,
                    2 => parse_digits(frac)?,
                    _ => return Err(err()),
                };
                parse_digits(dollars)?
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(frac_cents))
                    .ok_or_else(err)?
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

// Sums saturate at the i64 limits rather than wrap.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert!(!m.is_zero());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(" 3.50 ").unwrap().cents(), 350);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("10.505").is_err());
        assert!(Money::parse("$").is_err());
        assert!(Money::parse("10.").is_err());
    }

    #[test]
    fn test_parse_rejects_misplaced_signs() {
        // The sign is only valid before the currency symbol; a stray one
        // inside the digits must not flip or shrink the amount.
        assert!(Money::parse("$-10.50").is_err());
        assert!(Money::parse("10.-5").is_err());
        assert!(Money::parse("--10").is_err());
        assert!(Money::parse("+10").is_err());
        assert!(Money::parse("1-0.50").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        // i64::MAX cents is 92233720368547758.07; anything past it is an
        // input error, never a wrap or a panic.
        assert!(Money::parse("92233720368547759.00").is_err());
        assert!(Money::parse("92233720368547758.08").is_err());
        assert!(Money::parse("92233720368547759").is_err());
        assert!(Money::parse("999999999999999999999999").is_err());
        assert_eq!(
            Money::parse("92233720368547758.07").unwrap().cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1050);
        let b = Money::from_cents(525);
        assert_eq!((a + b).cents(), 1575);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1575);

        let total: Money = [a, b, Money::zero()].into_iter().sum();
        assert_eq!(total.cents(), 1575);
    }

    #[test]
    fn test_addition_saturates_at_limits() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!((max + Money::from_cents(1)).cents(), i64::MAX);

        let mut acc = Money::from_cents(i64::MIN);
        acc += Money::from_cents(-1);
        assert_eq!(acc.cents(), i64::MIN);

        let total: Money = [max, max].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }
}
