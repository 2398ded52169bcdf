//! Day count conventions.
//!
//! A day count convention turns a date interval into a fraction of a year.
//! Coupons use it for accrual, curves use it to convert pillar dates into
//! interpolation times.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360, money market and EUR floating legs
//! - [`Act365Fixed`]: Actual/365 Fixed
//! - [`Thirty360`]: 30/360 Bond Basis
//! - [`Thirty360E`]: 30E/360 Eurobond Basis
//!
//! # Usage
//!
//! ```rust
//! use tenor_core::daycounts::{DayCount, DayCountConvention, Thirty360};
//! use tenor_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! assert_eq!(Thirty360.day_count(start, end), 180);
//! assert_eq!(DayCountConvention::Thirty360.year_fraction(start, end), 0.5);
//! ```

mod act360;
mod act365;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use thirty360::{Thirty360, Thirty360E};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so that curves and
/// coupons holding them can be shared across pricing threads.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention (e.g., "ACT/360").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative when `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
///
/// Parses from the configuration names ("Actual360", "Actual365Fixed",
/// "Thirty360", "Thirty360E") and the usual market aliases ("ACT/360",
/// "30/360", "30E/360", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum DayCountConvention {
    /// Actual/360
    #[default]
    Actual360,
    /// Actual/365 Fixed
    Actual365Fixed,
    /// 30/360 Bond Basis
    Thirty360,
    /// 30E/360 Eurobond Basis
    Thirty360E,
}

impl DayCountConvention {
    /// Returns the implementation behind the convention.
    #[must_use]
    pub fn day_counter(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Actual360 => &Act360,
            DayCountConvention::Actual365Fixed => &Act365Fixed,
            DayCountConvention::Thirty360 => &Thirty360,
            DayCountConvention::Thirty360E => &Thirty360E,
        }
    }

    /// Year fraction between two dates under this convention.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_counter().year_fraction(start, end)
    }

    /// Day count between two dates under this convention.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        self.day_counter().day_count(start, end)
    }

    /// Returns the configuration name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual360 => "Actual360",
            DayCountConvention::Actual365Fixed => "Actual365Fixed",
            DayCountConvention::Thirty360 => "Thirty360",
            DayCountConvention::Thirty360E => "Thirty360E",
        }
    }

    /// Returns all supported conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Actual360,
            DayCountConvention::Actual365Fixed,
            DayCountConvention::Thirty360,
            DayCountConvention::Thirty360E,
        ]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACTUAL360" | "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Actual360),

            "ACTUAL365FIXED" | "ACTUAL365" | "ACT/365" | "ACT/365F" | "ACT/365 FIXED"
            | "ACTUAL/365" | "ACT365" => Ok(DayCountConvention::Actual365Fixed),

            "THIRTY360" | "30/360" | "30/360 BOND BASIS" | "BOND" | "BONDBASIS" => {
                Ok(DayCountConvention::Thirty360)
            }

            "THIRTY360E" | "30E/360" | "30/360 EUROPEAN" | "EUROBOND" => {
                Ok(DayCountConvention::Thirty360E)
            }

            _ => Err(CoreError::unsupported("day count", s)),
        }
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCountConvention> for String {
    fn from(convention: DayCountConvention) -> Self {
        convention.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_dispatch() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 7, 1).unwrap();

        assert_eq!(DayCountConvention::Actual360.day_count(start, end), 181);
        assert_eq!(DayCountConvention::Actual360.year_fraction(start, end), 181.0 / 360.0);
        assert_eq!(DayCountConvention::Actual365Fixed.year_fraction(start, end), 181.0 / 365.0);
        assert_eq!(DayCountConvention::Thirty360.year_fraction(start, end), 0.5);
        assert_eq!(DayCountConvention::Thirty360E.year_fraction(start, end), 0.5);
    }

    #[test]
    fn test_parse_names_and_aliases() {
        for dc in DayCountConvention::all() {
            assert_eq!(dc.name().parse::<DayCountConvention>().unwrap(), *dc);
        }
        assert_eq!("ACT/360".parse::<DayCountConvention>().unwrap(), DayCountConvention::Actual360);
        assert_eq!("30/360".parse::<DayCountConvention>().unwrap(), DayCountConvention::Thirty360);
        assert_eq!(
            "30E/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360E
        );
    }

    #[test]
    fn test_unsupported_name() {
        let err = "InvalidDC".parse::<DayCountConvention>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported day count 'InvalidDC'");
    }

    #[test]
    fn test_serde_uses_config_names() {
        let json = serde_json::to_string(&DayCountConvention::Actual365Fixed).unwrap();
        assert_eq!(json, "\"Actual365Fixed\"");
        let dc: DayCountConvention = serde_json::from_str("\"ACT/360\"").unwrap();
        assert_eq!(dc, DayCountConvention::Actual360);
    }
}
