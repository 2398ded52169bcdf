//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`Calendar`] trait with adjustment and business-day arithmetic
//! - Market calendars: TARGET, United States and the null calendar
//! - [`CalendarId`], the closed set of calendar names accepted in configuration

mod bitmap;
mod conventions;
mod target2;
mod united_states;

pub use bitmap::{easter_sunday, HolidayBitmap, HolidayCalendarBuilder, Observance};
pub use conventions::BusinessDayConvention;
pub use target2::Target2Calendar;
pub use united_states::UnitedStatesCalendar;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Date, Period, TimeUnit};

/// Trait for business day calendars.
///
/// Calendars determine which days are business days for a market and roll
/// dates accordingly.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Advances a date by a number of business days.
    ///
    /// With `days == 0` the date is adjusted with `convention`. Otherwise the
    /// date moves one business day at a time, forwards or backwards, and the
    /// convention is not used.
    fn advance(&self, date: Date, days: i32, convention: BusinessDayConvention) -> Date {
        if days == 0 {
            return self.adjust(date, convention);
        }

        let step: i64 = if days > 0 { 1 } else { -1 };
        let mut result = date;
        let mut remaining = days.unsigned_abs();

        while remaining > 0 {
            result = result.add_days(step);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Advances a date by a period.
    ///
    /// Day periods count business days as in [`Calendar::advance`]. Week,
    /// month and year periods move in calendar units and then adjust.
    fn advance_period(
        &self,
        date: Date,
        period: Period,
        convention: BusinessDayConvention,
    ) -> CoreResult<Date> {
        match period.unit() {
            TimeUnit::Days => Ok(self.advance(date, period.length(), convention)),
            TimeUnit::Weeks | TimeUnit::Months | TimeUnit::Years => {
                Ok(self.adjust(period.add_to(date)?, convention))
            }
        }
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        self.adjust(date, BusinessDayConvention::Following)
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        self.adjust(date, BusinessDayConvention::Preceding)
    }

    /// Counts business days in `(start, end]`.
    fn business_days_between(&self, start: Date, end: Date) -> i32 {
        let mut count = 0;
        let mut current = start.add_days(1);

        while current <= end {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        count
    }
}

/// Calendar in which every day is a business day.
///
/// Dates are never rolled, so whole-month distances keep their day of month.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &'static str {
        "NullCalendar"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }
}

static NULL_CALENDAR: NullCalendar = NullCalendar;

/// Identifier of a supported calendar.
///
/// Parses from "TARGET", "UnitedStates" and "NullCalendar" (plus a few
/// aliases). Any other name is rejected with
/// [`CoreError::UnsupportedConvention`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum CalendarId {
    /// TARGET, the euro settlement calendar.
    #[default]
    Target,
    /// United States (NYSE holidays).
    UnitedStates,
    /// No holidays and no weekends.
    NullCalendar,
}

impl CalendarId {
    /// Returns the shared calendar instance.
    #[must_use]
    pub fn calendar(&self) -> &'static dyn Calendar {
        match self {
            CalendarId::Target => Target2Calendar::global(),
            CalendarId::UnitedStates => UnitedStatesCalendar::global(),
            CalendarId::NullCalendar => &NULL_CALENDAR,
        }
    }

    /// Returns the configuration name of the calendar.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CalendarId::Target => "TARGET",
            CalendarId::UnitedStates => "UnitedStates",
            CalendarId::NullCalendar => "NullCalendar",
        }
    }
}

impl std::fmt::Display for CalendarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for CalendarId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TARGET" | "TARGET2" => Ok(CalendarId::Target),
            "UNITEDSTATES" | "UNITED STATES" | "US" | "NYSE" => Ok(CalendarId::UnitedStates),
            "NULLCALENDAR" | "NULL" => Ok(CalendarId::NullCalendar),
            _ => Err(CoreError::unsupported("calendar", s)),
        }
    }
}

impl TryFrom<String> for CalendarId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarId> for String {
    fn from(id: CalendarId) -> Self {
        id.name().to_string()
    }
}
