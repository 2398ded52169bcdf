//! Tenor periods such as "2D", "6M" or "1Y".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Time unit of a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Weeks of seven calendar days.
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years.
    Years,
}

impl TimeUnit {
    fn suffix(self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Months => 'M',
            TimeUnit::Years => 'Y',
        }
    }
}

/// A signed length of time expressed in a calendar unit.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{Period, TimeUnit};
///
/// let p: Period = "6M".parse().unwrap();
/// assert_eq!(p, Period::new(6, TimeUnit::Months));
/// assert_eq!(p.to_string(), "6M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    length: i32,
    unit: TimeUnit,
}

impl Period {
    /// Creates a new period.
    #[must_use]
    pub const fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Shorthand for a number of days.
    #[must_use]
    pub const fn days(length: i32) -> Self {
        Self::new(length, TimeUnit::Days)
    }

    /// Shorthand for a number of months.
    #[must_use]
    pub const fn months(length: i32) -> Self {
        Self::new(length, TimeUnit::Months)
    }

    /// Returns the signed length.
    #[must_use]
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Returns the unit.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Length expressed in months, if the unit is months or years.
    #[must_use]
    pub fn in_months(&self) -> Option<i32> {
        match self.unit {
            TimeUnit::Months => Some(self.length),
            TimeUnit::Years => Some(self.length * 12),
            TimeUnit::Days | TimeUnit::Weeks => None,
        }
    }

    /// Adds the period to a date without any business-day adjustment.
    pub fn add_to(&self, date: Date) -> CoreResult<Date> {
        match self.unit {
            TimeUnit::Days => Ok(date.add_days(i64::from(self.length))),
            TimeUnit::Weeks => Ok(date.add_days(7 * i64::from(self.length))),
            TimeUnit::Months => date.add_months(self.length),
            TimeUnit::Years => date.add_years(self.length),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.unit.suffix())
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || CoreError::InvalidPeriod {
            input: s.to_string(),
        };

        let unit = match trimmed.chars().last().map(|c| c.to_ascii_uppercase()) {
            Some('D') => TimeUnit::Days,
            Some('W') => TimeUnit::Weeks,
            Some('M') => TimeUnit::Months,
            Some('Y') => TimeUnit::Years,
            _ => return Err(invalid()),
        };

        let digits = &trimmed[..trimmed.len() - 1];
        let length = digits.parse::<i32>().map_err(|_| invalid())?;

        Ok(Self::new(length, unit))
    }
}

impl TryFrom<String> for Period {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!("2D".parse::<Period>().unwrap(), Period::days(2));
        assert_eq!("1w".parse::<Period>().unwrap(), Period::new(1, TimeUnit::Weeks));
        assert_eq!("12M".parse::<Period>().unwrap(), Period::months(12));
        assert_eq!("1Y".parse::<Period>().unwrap(), Period::new(1, TimeUnit::Years));
        assert_eq!("-2D".parse::<Period>().unwrap(), Period::days(-2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Period>().is_err());
        assert!("M".parse::<Period>().is_err());
        assert!("6X".parse::<Period>().is_err());
        assert!("six months".parse::<Period>().is_err());
    }

    #[test]
    fn test_in_months() {
        assert_eq!(Period::months(6).in_months(), Some(6));
        assert_eq!(Period::new(2, TimeUnit::Years).in_months(), Some(24));
        assert_eq!(Period::days(10).in_months(), None);
    }

    #[test]
    fn test_add_to() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(
            Period::months(1).add_to(date).unwrap(),
            Date::from_ymd(2025, 2, 28).unwrap()
        );
        assert_eq!(
            Period::new(2, TimeUnit::Weeks).add_to(date).unwrap(),
            Date::from_ymd(2025, 2, 14).unwrap()
        );
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Period::months(6)).unwrap();
        assert_eq!(json, "\"6M\"");
        let back: Period = serde_json::from_str("\"3M\"").unwrap();
        assert_eq!(back, Period::months(3));
    }
}
