//! Core trait for curves that discount and project.
//!
//! [`RateCurve`] is the only curve abstraction the swap and pricing crates
//! depend on. Floating-rate indices hold an `Arc<dyn RateCurve>` for
//! projection; the pricer discounts on a concrete
//! [`DiscountCurve`](crate::DiscountCurve).

use tenor_core::{CoreError, Date, DayCountConvention};

use crate::error::{CurveError, CurveResult};

/// A curve of discount factors anchored at a reference date.
///
/// # Derived Methods
///
/// - [`forward_rate`](RateCurve::forward_rate): simply compounded forward
///   between two dates
/// - [`zero_rate`](RateCurve::zero_rate): continuously compounded zero rate
pub trait RateCurve: Send + Sync {
    /// Returns the curve's reference (value) date.
    fn reference_date(&self) -> Date;

    /// Day count used to convert dates into curve times.
    fn day_count(&self) -> DayCountConvention;

    /// Returns the discount factor from the reference date to `date`.
    fn discount_factor(&self, date: Date) -> CurveResult<f64>;

    /// Simply compounded forward rate between two dates.
    ///
    /// `F = (DF(start) / DF(end) - 1) / yf(start, end)` with the year fraction
    /// measured in `day_count`.
    fn forward_rate(&self, start: Date, end: Date, day_count: DayCountConvention) -> CurveResult<f64> {
        if end <= start {
            return Err(CoreError::invalid_date_range(start, end).into());
        }

        let tau = day_count.year_fraction(start, end);
        if tau <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "non-positive accrual {tau} between {start} and {end} under {day_count}"
            )));
        }

        let df_start = self.discount_factor(start)?;
        let df_end = self.discount_factor(end)?;

        Ok((df_start / df_end - 1.0) / tau)
    }

    /// Continuously compounded zero rate to `date`, `-ln(DF) / t`.
    fn zero_rate(&self, date: Date) -> CurveResult<f64> {
        let t = self.day_count().year_fraction(self.reference_date(), date);
        if t == 0.0 {
            return Err(CurveError::invalid_value(format!(
                "zero rate is undefined at the reference date {date}"
            )));
        }

        let df = self.discount_factor(date)?;
        Ok(-df.ln() / t)
    }
}
