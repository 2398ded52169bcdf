//! Swap legs: a schedule of coupons of one kind.
//!
//! Each leg carries [`LegTerms`] and an ordered coupon vector that
//! `build_leg` regenerates from scratch on every call.

mod fixed;
mod floating;

pub use fixed::FixedLeg;
pub use floating::FloatingLeg;

use serde::{Deserialize, Serialize};

use tenor_core::{
    BusinessDayConvention, CalendarId, CoreError, Date, DayCountConvention, Frequency,
};

use crate::coupons::{validate_notional, AccrualPeriod, Coupon};
use crate::error::{SwapError, SwapResult};
use crate::schedule::{Schedule, ScheduleGenerator};

/// Terms shared by fixed and floating legs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegTerms {
    /// First accrual start.
    pub start: Date,
    /// Last accrual end.
    pub end: Date,
    /// Notional of every coupon.
    pub notional: f64,
    /// Calendar for schedule, payment and fixing dates.
    pub calendar: CalendarId,
    /// Payment frequency.
    pub frequency: Frequency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Business day convention of schedule and payment dates.
    pub business_day_convention: BusinessDayConvention,
    /// Business days between accrual end and payment.
    pub payment_lag: u32,
}

impl LegTerms {
    /// Creates terms on TARGET, Actual/360, Following, paying on the
    /// accrual end date.
    #[must_use]
    pub fn new(start: Date, end: Date, notional: f64, frequency: Frequency) -> Self {
        Self {
            start,
            end,
            notional,
            calendar: CalendarId::Target,
            frequency,
            day_count: DayCountConvention::Actual360,
            business_day_convention: BusinessDayConvention::Following,
            payment_lag: 0,
        }
    }

    /// Sets the calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarId) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the day count.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the business day convention.
    #[must_use]
    pub fn with_business_day_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.business_day_convention = convention;
        self
    }

    /// Sets the payment lag in business days.
    #[must_use]
    pub fn with_payment_lag(mut self, payment_lag: u32) -> Self {
        self.payment_lag = payment_lag;
        self
    }

    /// Checks the date range and notional.
    pub fn validate(&self) -> SwapResult<()> {
        if self.end <= self.start {
            return Err(CoreError::invalid_date_range(self.start, self.end).into());
        }
        validate_notional(self.notional)?;
        self.payment_lag_days()?;
        Ok(())
    }

    fn payment_lag_days(&self) -> SwapResult<i32> {
        i32::try_from(self.payment_lag).map_err(|_| {
            SwapError::validation("payment_lag", format!("{} is too large", self.payment_lag))
        })
    }

    /// Generates the leg's schedule.
    pub fn schedule(&self) -> SwapResult<Schedule> {
        Ok(ScheduleGenerator::new(self.start, self.end, self.frequency)
            .with_calendar(self.calendar)
            .with_business_day_convention(self.business_day_convention)
            .generate()?)
    }

    /// Payment date of a period ending on `period_end`.
    pub fn payment_date(&self, period_end: Date) -> SwapResult<Date> {
        Ok(self.calendar.calendar().advance(
            period_end,
            self.payment_lag_days()?,
            self.business_day_convention,
        ))
    }

    /// Accrual periods of the leg, one per schedule period.
    pub fn accrual_periods(&self) -> SwapResult<Vec<AccrualPeriod>> {
        self.validate()?;
        self.schedule()?
            .periods()
            .map(|(start, end)| {
                AccrualPeriod::new(
                    start,
                    end,
                    self.payment_date(end)?,
                    self.notional,
                    self.calendar,
                    self.day_count,
                )
            })
            .collect()
    }
}

/// A leg of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Leg {
    /// Fixed rate leg.
    Fixed(FixedLeg),
    /// Floating rate leg.
    Floating(FloatingLeg),
}

impl Leg {
    /// Returns the leg terms.
    #[must_use]
    pub fn terms(&self) -> &LegTerms {
        match self {
            Leg::Fixed(leg) => leg.terms(),
            Leg::Floating(leg) => leg.terms(),
        }
    }

    /// Returns the number of built coupons.
    #[must_use]
    pub fn num_coupons(&self) -> usize {
        match self {
            Leg::Fixed(leg) => leg.coupons().len(),
            Leg::Floating(leg) => leg.coupons().len(),
        }
    }

    /// Returns the built coupons in payment order.
    #[must_use]
    pub fn coupons(&self) -> Vec<Coupon> {
        match self {
            Leg::Fixed(leg) => leg.coupons().iter().copied().map(Coupon::Fixed).collect(),
            Leg::Floating(leg) => leg.coupons().iter().cloned().map(Coupon::Floating).collect(),
        }
    }
}

impl From<FixedLeg> for Leg {
    fn from(leg: FixedLeg) -> Self {
        Leg::Fixed(leg)
    }
}

impl From<FloatingLeg> for Leg {
    fn from(leg: FloatingLeg) -> Self {
        Leg::Floating(leg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_payment_lag_counts_business_days() {
        let terms = LegTerms::new(d(2025, 1, 31), d(2025, 6, 30), 1_000_000.0, Frequency::Monthly)
            .with_payment_lag(2);

        // Friday Feb 28 + 2 business days
        assert_eq!(terms.payment_date(d(2025, 2, 28)).unwrap(), d(2025, 3, 4));
    }

    #[test]
    fn test_zero_payment_lag_adjusts() {
        let terms = LegTerms::new(d(2025, 1, 31), d(2025, 6, 30), 1_000_000.0, Frequency::Monthly);
        assert_eq!(terms.payment_date(d(2025, 6, 30)).unwrap(), d(2025, 6, 30));
        assert_eq!(terms.payment_date(d(2025, 5, 31)).unwrap(), d(2025, 6, 2));
    }

    #[test]
    fn test_accrual_periods_are_contiguous() {
        let terms = LegTerms::new(d(2025, 1, 31), d(2025, 6, 30), 1_000_000.0, Frequency::Monthly)
            .with_business_day_convention(BusinessDayConvention::ModifiedFollowing);
        let periods = terms.accrual_periods().unwrap();

        assert_eq!(periods.len(), 5);
        for pair in periods.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        assert!(periods.iter().all(|p| p.payment_date() >= p.end()));
    }

    #[test]
    fn test_validate() {
        let terms = LegTerms::new(d(2025, 6, 30), d(2025, 1, 31), 1_000_000.0, Frequency::Monthly);
        assert!(matches!(
            terms.validate().unwrap_err(),
            SwapError::Core(CoreError::InvalidDateRange { .. })
        ));

        let terms = LegTerms::new(d(2025, 1, 31), d(2025, 6, 30), 0.0, Frequency::Monthly);
        assert!(matches!(terms.validate().unwrap_err(), SwapError::Validation { .. }));
    }
}
