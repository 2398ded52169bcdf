//! Coupons: one accrual period paying a fixed or floating rate.
//!
//! [`Coupon`] is a closed enum over [`FixedCoupon`] and [`FloatingCoupon`].
//! Both variants share an [`AccrualPeriod`], validated once when it is
//! created, and are immutable afterwards.

mod fixed;
mod floating;

pub use fixed::FixedCoupon;
pub(crate) use fixed::validate_fixed_rate;
pub use floating::{FloatingCoupon, FloatingRateTerms, RateObservation};

use serde::Serialize;

use tenor_core::{CalendarId, CoreError, Date, DayCountConvention};

use crate::error::{SwapError, SwapResult};

/// Dates, notional and conventions of one coupon period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccrualPeriod {
    start: Date,
    end: Date,
    payment_date: Date,
    notional: f64,
    calendar: CalendarId,
    day_count: DayCountConvention,
}

impl AccrualPeriod {
    /// Creates a validated accrual period.
    ///
    /// # Errors
    ///
    /// - `SwapError::Core(InvalidDateRange)` if `end <= start`
    /// - `SwapError::Validation` if the payment date precedes `end` or the
    ///   notional is not strictly positive
    pub fn new(
        start: Date,
        end: Date,
        payment_date: Date,
        notional: f64,
        calendar: CalendarId,
        day_count: DayCountConvention,
    ) -> SwapResult<Self> {
        if end <= start {
            return Err(CoreError::invalid_date_range(start, end).into());
        }
        if payment_date < end {
            return Err(SwapError::validation(
                "payment_date",
                format!("payment date {payment_date} is before the accrual end {end}"),
            ));
        }
        validate_notional(notional)?;

        Ok(Self {
            start,
            end,
            payment_date,
            notional,
            calendar,
            day_count,
        })
    }

    /// Returns the accrual start date.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the accrual end date.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the payment date.
    #[must_use]
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Returns the notional.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the calendar.
    #[must_use]
    pub fn calendar(&self) -> CalendarId {
        self.calendar
    }

    /// Returns the accrual day count.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Year fraction from start to end under the period's day count.
    #[must_use]
    pub fn accrual_fraction(&self) -> f64 {
        self.day_count.year_fraction(self.start, self.end)
    }
}

pub(crate) fn validate_notional(notional: f64) -> SwapResult<()> {
    if notional.is_finite() && notional > 0.0 {
        Ok(())
    } else {
        Err(SwapError::validation(
            "notional",
            format!("must be strictly positive, got {notional}"),
        ))
    }
}

/// A coupon of either variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Coupon {
    /// Fixed rate coupon.
    Fixed(FixedCoupon),
    /// Floating rate coupon.
    Floating(FloatingCoupon),
}

impl Coupon {
    /// Returns the cash amount paid on the payment date.
    #[must_use]
    pub fn amount(&self) -> f64 {
        match self {
            Coupon::Fixed(c) => c.amount(),
            Coupon::Floating(c) => c.amount(),
        }
    }

    /// Returns the accrual period.
    #[must_use]
    pub fn period(&self) -> &AccrualPeriod {
        match self {
            Coupon::Fixed(c) => c.period(),
            Coupon::Floating(c) => c.period(),
        }
    }

    /// Returns the payment date.
    #[must_use]
    pub fn payment_date(&self) -> Date {
        self.period().payment_date()
    }

    /// Returns the all-in rate: the fixed rate, or index rate plus spread.
    #[must_use]
    pub fn rate(&self) -> f64 {
        match self {
            Coupon::Fixed(c) => c.rate(),
            Coupon::Floating(c) => c.all_in_rate(),
        }
    }
}

impl From<FixedCoupon> for Coupon {
    fn from(coupon: FixedCoupon) -> Self {
        Coupon::Fixed(coupon)
    }
}

impl From<FloatingCoupon> for Coupon {
    fn from(coupon: FloatingCoupon) -> Self {
        Coupon::Floating(coupon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn period(start: Date, end: Date, payment: Date, notional: f64) -> SwapResult<AccrualPeriod> {
        AccrualPeriod::new(
            start,
            end,
            payment,
            notional,
            CalendarId::Target,
            DayCountConvention::Actual360,
        )
    }

    #[test]
    fn test_accrual_fraction() {
        let p = period(d(2025, 1, 1), d(2025, 7, 1), d(2025, 7, 1), 1_000_000.0).unwrap();
        assert_relative_eq!(p.accrual_fraction(), 181.0 / 360.0);
    }

    #[test]
    fn test_end_must_follow_start() {
        let err = period(d(2025, 7, 1), d(2025, 1, 1), d(2025, 7, 1), 1.0).unwrap_err();
        assert!(matches!(err, SwapError::Core(CoreError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_payment_before_end_is_rejected() {
        let err = period(d(2025, 1, 1), d(2025, 7, 1), d(2025, 6, 30), 1.0).unwrap_err();
        assert!(matches!(err, SwapError::Validation { ref field, .. } if field == "payment_date"));
    }

    #[test]
    fn test_notional_must_be_positive() {
        for notional in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = period(d(2025, 1, 1), d(2025, 7, 1), d(2025, 7, 1), notional).unwrap_err();
            assert!(matches!(err, SwapError::Validation { ref field, .. } if field == "notional"));
        }
    }

    #[test]
    fn test_coupon_enum_dispatch() {
        let p = period(d(2025, 1, 1), d(2025, 7, 1), d(2025, 7, 3), 1_000_000.0).unwrap();
        let coupon: Coupon = FixedCoupon::new(p, 0.05).unwrap().into();

        assert_eq!(coupon.payment_date(), d(2025, 7, 3));
        assert_relative_eq!(coupon.rate(), 0.05);
        assert_relative_eq!(coupon.amount(), 1_000_000.0 * 0.05 * 181.0 / 360.0);
    }
}
