//! Fixed rate coupon.

use crate::coupons::AccrualPeriod;
use crate::error::{SwapError, SwapResult};

/// A coupon paying `notional * rate * accrual_fraction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCoupon {
    period: AccrualPeriod,
    rate: f64,
}

impl FixedCoupon {
    /// Creates a fixed coupon.
    ///
    /// # Errors
    ///
    /// Returns `SwapError::Validation` if the rate is outside `[0, 1]`.
    pub fn new(period: AccrualPeriod, rate: f64) -> SwapResult<Self> {
        validate_fixed_rate(rate)?;
        Ok(Self { period, rate })
    }

    /// Returns the accrual period.
    #[must_use]
    pub fn period(&self) -> &AccrualPeriod {
        &self.period
    }

    /// Returns the fixed rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the coupon amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.period.notional() * self.rate * self.period.accrual_fraction()
    }
}

pub(crate) fn validate_fixed_rate(rate: f64) -> SwapResult<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(SwapError::validation(
            "fixed_rate",
            format!("must be between 0 and 1 (0.05 for 5%), got {rate}"),
        ))
    }
}
