//! TARGET calendar for euro-denominated payments.

use std::sync::OnceLock;

use super::bitmap::{HolidayBitmap, HolidayCalendarBuilder, Observance, MIN_YEAR};
use super::Calendar;
use crate::types::Date;

static TARGET2_CALENDAR: OnceLock<Target2Calendar> = OnceLock::new();

/// TARGET (Trans-European Automated Real-time Gross Settlement Express
/// Transfer) holiday calendar.
///
/// ## Holidays
///
/// - New Year's Day (January 1)
/// - Good Friday and Easter Monday
/// - Labour Day (May 1)
/// - Christmas Day and December 26
///
/// Holidays falling on a weekend are not moved.
#[derive(Debug, Clone)]
pub struct Target2Calendar {
    bitmap: HolidayBitmap,
}

impl Target2Calendar {
    /// Builds a new TARGET calendar.
    pub fn new() -> Self {
        let bitmap = HolidayCalendarBuilder::new("TARGET")
            .fixed(1, 1, MIN_YEAR, Observance::None)
            .easter_offset(-2)
            .easter_offset(1)
            .fixed(5, 1, MIN_YEAR, Observance::None)
            .fixed(12, 25, MIN_YEAR, Observance::None)
            .fixed(12, 26, MIN_YEAR, Observance::None)
            .build();
        Self { bitmap }
    }

    /// Shared instance, built on first use.
    pub fn global() -> &'static Target2Calendar {
        TARGET2_CALENDAR.get_or_init(Target2Calendar::new)
    }
}

impl Default for Target2Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for Target2Calendar {
    fn name(&self) -> &'static str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.bitmap.is_business_day(date.as_naive_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_fixed_holidays() {
        let cal = Target2Calendar::global();

        assert!(!cal.is_business_day(d(2025, 1, 1)));
        assert!(!cal.is_business_day(d(2025, 5, 1)));
        assert!(!cal.is_business_day(d(2025, 12, 25)));
        assert!(!cal.is_business_day(d(2025, 12, 26)));
    }

    #[test]
    fn test_easter_holidays() {
        let cal = Target2Calendar::global();

        // Easter 2025 is April 20
        assert!(!cal.is_business_day(d(2025, 4, 18)));
        assert!(!cal.is_business_day(d(2025, 4, 21)));
        assert!(cal.is_business_day(d(2025, 4, 17)));
        assert!(cal.is_business_day(d(2025, 4, 22)));
    }

    #[test]
    fn test_weekend_holiday_not_observed() {
        let cal = Target2Calendar::global();

        // Jan 1 2028 is a Saturday; Friday Dec 31 2027 stays open
        assert!(cal.is_business_day(d(2027, 12, 31)));
        assert!(cal.is_business_day(d(2028, 1, 3)));
    }

    #[test]
    fn test_regular_days() {
        let cal = Target2Calendar::global();

        assert!(cal.is_business_day(d(2025, 1, 15)));
        assert!(!cal.is_business_day(d(2025, 1, 4)));
        assert!(!cal.is_business_day(d(2025, 1, 5)));
    }
}
