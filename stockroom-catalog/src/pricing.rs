use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::product::ProductError;

/// A price in minor currency units (cents)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parse a decimal amount such as `19.99` or `$5`, rounded to the nearest cent.
    ///
    /// A single leading `$` is accepted. Midpoints round away from zero, so
    /// `0.005` becomes one cent. Negative amounts are rejected.
    pub fn parse_amount(input: &str) -> Result<Self, ProductError> {
        let invalid = || ProductError::InvalidPrice(input.to_string());

        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        let amount = Decimal::from_str(digits).map_err(|_| invalid())?;
        if amount.is_sign_negative() {
            return Err(invalid());
        }

        amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Wrap a raw cent count, as read back from a backup file.
    pub fn from_cents(cents: i64) -> Result<Self, ProductError> {
        if cents < 0 {
            return Err(ProductError::InvalidPrice(cents.to_string()));
        }
        Ok(Self(cents))
    }
}

/// Renders `dollars.cc` with the cents always two digits: 1999 -> `19.99`, 5 -> `0.05`.
impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl From<Cents> for i64 {
    fn from(cents: Cents) -> Self {
        cents.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_with_currency_symbol() {
        assert_eq!(Cents::parse_amount("$19.99").unwrap(), Cents::new(1999));
        assert_eq!(Cents::parse_amount("$5.00").unwrap(), Cents::new(500));
        assert_eq!(Cents::parse_amount(" 7 ").unwrap(), Cents::new(700));
    }

    #[test]
    fn test_parse_amount_rounds_to_nearest_cent() {
        assert_eq!(Cents::parse_amount("1.005").unwrap(), Cents::new(101));
        assert_eq!(Cents::parse_amount("1.004").unwrap(), Cents::new(100));
        assert_eq!(Cents::parse_amount("$0.999").unwrap(), Cents::new(100));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(Cents::parse_amount("").is_err());
        assert!(Cents::parse_amount("$").is_err());
        assert!(Cents::parse_amount("five").is_err());
        assert!(Cents::parse_amount("-1.00").is_err());
        assert!(Cents::parse_amount("$$1").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Cents::new(1999).to_string(), "19.99");
        assert_eq!(Cents::new(5).to_string(), "0.05");
        assert_eq!(Cents::new(50).to_string(), "0.50");
        assert_eq!(Cents::new(500).to_string(), "5.00");
        assert_eq!(Cents::new(0).to_string(), "0.00");
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Cents::from_cents(1999).unwrap().get(), 1999);
        assert!(Cents::from_cents(-1).is_err());
    }
}
