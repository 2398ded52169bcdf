//! Flat continuously compounded curve.

use tenor_core::{Date, DayCountConvention};

use crate::error::{CurveError, CurveResult};
use crate::traits::RateCurve;

/// A curve with a single continuously compounded rate.
///
/// `DF(d) = exp(-r * t)` with `t` the year fraction from the reference date
/// under the curve day count. Defined for every date, so it never fails on
/// range. Typically used as the projection curve of a floating index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatForwardCurve {
    reference_date: Date,
    rate: f64,
    day_count: DayCountConvention,
}

impl FlatForwardCurve {
    /// Creates a flat curve.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidValue`] if the rate is not finite.
    pub fn new(reference_date: Date, rate: f64, day_count: DayCountConvention) -> CurveResult<Self> {
        if !rate.is_finite() {
            return Err(CurveError::invalid_value(format!("flat rate {rate} is not finite")));
        }
        Ok(Self {
            reference_date,
            rate,
            day_count,
        })
    }

    /// Returns the continuously compounded rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl RateCurve for FlatForwardCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        let t = self.day_count.year_fraction(self.reference_date, date);
        Ok((-self.rate * t).exp())
    }

    fn zero_rate(&self, _date: Date) -> CurveResult<f64> {
        Ok(self.rate)
    }
}
