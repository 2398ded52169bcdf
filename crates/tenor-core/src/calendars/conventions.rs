//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::error::CoreError;
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls on a
/// non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum BusinessDayConvention {
    /// Move to the following business day.
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    #[default]
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// No adjustment.
    Unadjusted,
}

impl BusinessDayConvention {
    /// Returns the configuration name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "ModifiedFollowing",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for BusinessDayConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "FOLLOWING" | "F" => Ok(BusinessDayConvention::Following),
            "MODIFIEDFOLLOWING" | "MF" => Ok(BusinessDayConvention::ModifiedFollowing),
            "PRECEDING" | "P" => Ok(BusinessDayConvention::Preceding),
            "UNADJUSTED" | "NONE" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(CoreError::unsupported("business day convention", s)),
        }
    }
}

impl TryFrom<String> for BusinessDayConvention {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BusinessDayConvention> for String {
    fn from(convention: BusinessDayConvention) -> Self {
        convention.name().to_string()
    }
}

/// Adjusts a date according to the given business day convention.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> Date {
    if calendar.is_business_day(date) {
        return date;
    }

    match convention {
        BusinessDayConvention::Unadjusted => date,

        BusinessDayConvention::Following => following(date, calendar),

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = following(date, calendar);
            if adjusted.month() == date.month() {
                adjusted
            } else {
                preceding(date, calendar)
            }
        }

        BusinessDayConvention::Preceding => preceding(date, calendar),
    }
}

fn following<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(1);
    }
    date
}

fn preceding<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(-1);
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::Target2Calendar;

    #[test]
    fn test_following() {
        let cal = Target2Calendar::global();

        // Saturday rolls to Monday
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        let adjusted = adjust(saturday, BusinessDayConvention::Following, cal);
        assert_eq!(adjusted, Date::from_ymd(2025, 1, 6).unwrap());
    }

    #[test]
    fn test_preceding() {
        let cal = Target2Calendar::global();

        let sunday = Date::from_ymd(2025, 1, 5).unwrap();
        let adjusted = adjust(sunday, BusinessDayConvention::Preceding, cal);
        assert_eq!(adjusted, Date::from_ymd(2025, 1, 3).unwrap());
    }

    #[test]
    fn test_modified_following_stays_in_month() {
        let cal = Target2Calendar::global();

        // Saturday May 31 2025: following is June 2, so roll back to Friday May 30
        let saturday = Date::from_ymd(2025, 5, 31).unwrap();
        let adjusted = adjust(saturday, BusinessDayConvention::ModifiedFollowing, cal);
        assert_eq!(adjusted, Date::from_ymd(2025, 5, 30).unwrap());

        // Mid-month behaves like Following
        let mid = Date::from_ymd(2025, 5, 17).unwrap();
        let adjusted = adjust(mid, BusinessDayConvention::ModifiedFollowing, cal);
        assert_eq!(adjusted, Date::from_ymd(2025, 5, 19).unwrap());
    }

    #[test]
    fn test_unadjusted() {
        let cal = Target2Calendar::global();
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert_eq!(adjust(saturday, BusinessDayConvention::Unadjusted, cal), saturday);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "ModifiedFollowing".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(
            "Modified Following".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(
            "following".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::Following
        );
        assert!("Nearest".parse::<BusinessDayConvention>().is_err());
    }
}
