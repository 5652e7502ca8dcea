use std::{fmt, iter::Sum, ops::Add, str::FromStr};

use crate::LedgerError;

/// Largest amount a single expense may carry, in cents (one billion).
pub const MAX_AMOUNT_CENTS: i64 = 1_000_000_000 * 100;

/// Non-negative money amount represented as **integer cents**.
///
/// Every amount in the ledger goes through this type so that the running
/// total is exact and always renders with two fraction digits.
///
/// # Examples
///
/// ```rust
/// use ledger::MoneyCents;
///
/// let amount = MoneyCents::new(12_50);
/// assert_eq!(amount.cents(), 1250);
/// assert_eq!(amount.to_string(), "12.50");
/// ```
///
/// Parsing from the amount field (accepts `.` or `,` as decimal separator;
/// rejects signs; rounds extra decimals half-up to the cent):
///
/// ```rust
/// use ledger::MoneyCents;
///
/// assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<MoneyCents>().unwrap().cents(), 1050);
/// assert_eq!("12.345".parse::<MoneyCents>().unwrap().cents(), 1235);
/// assert!("-3".parse::<MoneyCents>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0.saturating_add(rhs.0))
    }
}

impl Sum for MoneyCents {
    fn sum<I: Iterator<Item = MoneyCents>>(iter: I) -> Self {
        iter.fold(MoneyCents::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a MoneyCents> for MoneyCents {
    fn sum<I: Iterator<Item = &'a MoneyCents>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for MoneyCents {
    type Err = LedgerError;

    /// Parses the text of the amount field into cents.
    ///
    /// Validation rules:
    /// - `.` or `,` as decimal separator, at most one of them
    /// - more than 2 fractional digits round half-up (`12.345` is `12.35`)
    /// - no sign, no exponent, no grouping
    /// - at most [`MAX_AMOUNT_CENTS`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| LedgerError::InvalidAmount(reason.to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::MissingAmount);
        }

        let normalized = trimmed.replace(',', ".");
        let (units_str, frac_str) = match normalized.split_once('.') {
            Some((units, frac)) => (units, frac),
            None => (normalized.as_str(), ""),
        };

        if frac_str.contains('.') {
            return Err(invalid("more than one decimal separator"));
        }
        if units_str.is_empty() && frac_str.is_empty() {
            return Err(invalid("no digits"));
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(units_str) || !all_digits(frac_str) {
            return Err(invalid("not a number"));
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| invalid("amount too large"))?
        };

        let (cents_str, dropped) = frac_str.split_at(frac_str.len().min(2));
        let mut cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid("not a number"))? * 10,
            _ => cents_str.parse().map_err(|_| invalid("not a number"))?,
        };
        if dropped.starts_with(['5', '6', '7', '8', '9']) {
            cents += 1;
        }

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .filter(|v| *v <= MAX_AMOUNT_CENTS)
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(MoneyCents(total))
    }
}
