//! United States calendar following the NYSE holiday schedule.

use std::sync::OnceLock;

use chrono::Weekday;

use super::bitmap::{HolidayBitmap, HolidayCalendarBuilder, Observance, MIN_YEAR};
use super::Calendar;
use crate::types::Date;

static UNITED_STATES_CALENDAR: OnceLock<UnitedStatesCalendar> = OnceLock::new();

/// United States exchange calendar (NYSE holidays).
///
/// ## Holidays
///
/// - New Year's Day (Sunday moves to Monday; Saturday is not observed)
/// - Martin Luther King Jr. Day (third Monday in January)
/// - Washington's Birthday (third Monday in February)
/// - Good Friday
/// - Memorial Day (last Monday in May)
/// - Juneteenth (June 19, since 2022)
/// - Independence Day (July 4)
/// - Labor Day (first Monday in September)
/// - Thanksgiving (fourth Thursday in November)
/// - Christmas Day (December 25)
///
/// Fixed-date holidays other than New Year's Day move Saturday to Friday and
/// Sunday to Monday.
#[derive(Debug, Clone)]
pub struct UnitedStatesCalendar {
    bitmap: HolidayBitmap,
}

impl UnitedStatesCalendar {
    /// Builds a new United States calendar.
    pub fn new() -> Self {
        let bitmap = HolidayCalendarBuilder::new("UnitedStates")
            .fixed(1, 1, MIN_YEAR, Observance::SundayToMonday)
            .nth_weekday(1, Weekday::Mon, 3)
            .nth_weekday(2, Weekday::Mon, 3)
            .easter_offset(-2)
            .last_weekday(5, Weekday::Mon)
            .fixed(6, 19, 2022, Observance::NearestWeekday)
            .fixed(7, 4, MIN_YEAR, Observance::NearestWeekday)
            .nth_weekday(9, Weekday::Mon, 1)
            .nth_weekday(11, Weekday::Thu, 4)
            .fixed(12, 25, MIN_YEAR, Observance::NearestWeekday)
            .build();
        Self { bitmap }
    }

    /// Shared instance, built on first use.
    pub fn global() -> &'static UnitedStatesCalendar {
        UNITED_STATES_CALENDAR.get_or_init(UnitedStatesCalendar::new)
    }
}

impl Default for UnitedStatesCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for UnitedStatesCalendar {
    fn name(&self) -> &'static str {
        "UnitedStates"
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
    fn test_2025_holidays() {
        let cal = UnitedStatesCalendar::global();

        let holidays = [
            d(2025, 1, 1),
            d(2025, 1, 20),
            d(2025, 2, 17),
            d(2025, 4, 18),
            d(2025, 5, 26),
            d(2025, 6, 19),
            d(2025, 7, 4),
            d(2025, 9, 1),
            d(2025, 11, 27),
            d(2025, 12, 25),
        ];
        for holiday in holidays {
            assert!(!cal.is_business_day(holiday), "{holiday} should be a holiday");
        }
    }

    #[test]
    fn test_observed_holidays() {
        let cal = UnitedStatesCalendar::global();

        // July 4 2026 is a Saturday, observed Friday July 3
        assert!(!cal.is_business_day(d(2026, 7, 3)));
        // Jan 1 2023 is a Sunday, observed Monday Jan 2
        assert!(!cal.is_business_day(d(2023, 1, 2)));
        // Jan 1 2022 is a Saturday, Friday Dec 31 2021 stays open
        assert!(cal.is_business_day(d(2021, 12, 31)));
    }

    #[test]
    fn test_juneteenth_starts_2022() {
        let cal = UnitedStatesCalendar::global();

        assert!(cal.is_business_day(d(2021, 6, 18)));
        assert!(!cal.is_business_day(d(2024, 6, 19)));
    }
}
