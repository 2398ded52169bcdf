//! Schedule generation for swap legs.
//!
//! Dates roll forward from the start date by whole multiples of the payment
//! frequency. Each regular date is computed from the start date, not from the
//! previous date, so a month-end start keeps its day wherever the month
//! allows it (Jan 31, Feb 28, Mar 31, ...). The end date closes the schedule,
//! leaving a short final stub when the frequency does not divide the span.
//!
//! # Example
//!
//! ```rust
//! use tenor_core::{BusinessDayConvention, CalendarId, Date, Frequency};
//! use tenor_swaps::schedule::ScheduleGenerator;
//!
//! let schedule = ScheduleGenerator::new(
//!     Date::from_ymd(2025, 1, 31).unwrap(),
//!     Date::from_ymd(2025, 6, 30).unwrap(),
//!     Frequency::Monthly,
//! )
//! .with_calendar(CalendarId::Target)
//! .with_business_day_convention(BusinessDayConvention::ModifiedFollowing)
//! .generate()
//! .unwrap();
//!
//! assert_eq!(schedule.num_periods(), 5);
//! ```

use log::{debug, warn};

use tenor_core::{BusinessDayConvention, CalendarId, CoreError, CoreResult, Date, Frequency};

/// Generates the period boundary dates of a leg.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleGenerator {
    start: Date,
    end: Date,
    frequency: Frequency,
    calendar: CalendarId,
    convention: BusinessDayConvention,
}

impl ScheduleGenerator {
    /// Creates a generator on the TARGET calendar with Modified Following
    /// adjustment.
    #[must_use]
    pub fn new(start: Date, end: Date, frequency: Frequency) -> Self {
        Self {
            start,
            end,
            frequency,
            calendar: CalendarId::Target,
            convention: BusinessDayConvention::ModifiedFollowing,
        }
    }

    /// Sets the adjustment calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarId) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the business day convention applied to every date.
    #[must_use]
    pub fn with_business_day_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Generates the schedule.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidDateRange`] if `end <= start`
    /// - [`CoreError::InvalidFrequency`] if one period is longer than the
    ///   whole span in months
    pub fn generate(&self) -> CoreResult<Schedule> {
        if self.end <= self.start {
            return Err(CoreError::invalid_date_range(self.start, self.end));
        }

        let step = self.frequency.months_per_period() as i32;
        let span = self.start.whole_months_until(&self.end);
        if step > span {
            return Err(CoreError::invalid_frequency(
                self.frequency.code(),
                format!(
                    "a {step}-month period exceeds the {span}-month span from {} to {}",
                    self.start, self.end
                ),
            ));
        }

        let mut unadjusted = vec![self.start];
        let mut periods = 1;
        loop {
            let next = self.start.add_months(step * periods)?;
            if next >= self.end {
                if next > self.end {
                    warn!(
                        "{} schedule from {} to {} ends with a short stub starting {}",
                        self.frequency,
                        self.start,
                        self.end,
                        unadjusted.last().copied().unwrap_or(self.start)
                    );
                }
                break;
            }
            unadjusted.push(next);
            periods += 1;
        }
        unadjusted.push(self.end);

        let calendar = self.calendar.calendar();
        let mut pairs: Vec<(Date, Date)> = unadjusted
            .into_iter()
            .map(|date| (date, calendar.adjust(date, self.convention)))
            .collect();
        pairs.dedup_by_key(|(_, adjusted)| *adjusted);

        if pairs.len() < 2 {
            return Err(CoreError::invalid_date_range(self.start, self.end));
        }

        let (unadjusted_dates, dates): (Vec<Date>, Vec<Date>) = pairs.into_iter().unzip();

        debug!(
            "generated {} schedule {} -> {} on {} ({}): {} periods",
            self.frequency,
            self.start,
            self.end,
            self.calendar,
            self.convention,
            dates.len() - 1
        );

        Ok(Schedule {
            unadjusted_dates,
            dates,
            frequency: self.frequency,
            calendar: self.calendar,
            convention: self.convention,
        })
    }
}

/// An ordered set of period boundary dates.
///
/// Holds at least two dates; adjusted dates are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    unadjusted_dates: Vec<Date>,
    dates: Vec<Date>,
    frequency: Frequency,
    calendar: CalendarId,
    convention: BusinessDayConvention,
}

impl Schedule {
    /// Returns the adjusted dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the dates before business day adjustment.
    #[must_use]
    pub fn unadjusted_dates(&self) -> &[Date] {
        &self.unadjusted_dates
    }

    /// Returns an iterator over adjusted `(start, end)` pairs.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns the number of periods.
    #[must_use]
    pub fn num_periods(&self) -> usize {
        self.dates.len().saturating_sub(1)
    }

    /// Returns the adjusted start date.
    #[must_use]
    pub fn start(&self) -> Date {
        self.dates[0]
    }

    /// Returns the adjusted end date.
    #[must_use]
    pub fn end(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Returns the payment frequency the schedule was generated with.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the adjustment calendar.
    #[must_use]
    pub fn calendar(&self) -> CalendarId {
        self.calendar
    }

    /// Returns the business day convention.
    #[must_use]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }
}
