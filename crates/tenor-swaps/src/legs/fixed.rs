//! Fixed rate leg.

use log::debug;

use crate::coupons::{validate_fixed_rate, FixedCoupon};
use crate::error::SwapResult;
use crate::legs::LegTerms;

/// A leg of fixed rate coupons.
///
/// # Example
///
/// ```rust
/// use tenor_core::{Date, Frequency};
/// use tenor_swaps::legs::{FixedLeg, LegTerms};
///
/// let terms = LegTerms::new(
///     Date::from_ymd(2025, 1, 31).unwrap(),
///     Date::from_ymd(2025, 6, 30).unwrap(),
///     1_000_000.0,
///     Frequency::Monthly,
/// );
/// let mut leg = FixedLeg::new(terms, 0.05).unwrap();
/// assert_eq!(leg.build_leg().unwrap().len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLeg {
    terms: LegTerms,
    rate: f64,
    coupons: Vec<FixedCoupon>,
}

impl FixedLeg {
    /// Creates an unbuilt fixed leg.
    ///
    /// # Errors
    ///
    /// Returns an error if the terms are invalid or the rate is outside `[0, 1]`.
    pub fn new(terms: LegTerms, rate: f64) -> SwapResult<Self> {
        terms.validate()?;
        validate_fixed_rate(rate)?;
        Ok(Self {
            terms,
            rate,
            coupons: Vec::new(),
        })
    }

    /// Generates one coupon per schedule period, replacing any previous ones.
    pub fn build_leg(&mut self) -> SwapResult<&[FixedCoupon]> {
        let coupons = self
            .terms
            .accrual_periods()?
            .into_iter()
            .map(|period| FixedCoupon::new(period, self.rate))
            .collect::<SwapResult<Vec<_>>>()?;

        debug!(
            "built fixed leg {} -> {} at {}: {} coupons",
            self.terms.start,
            self.terms.end,
            self.rate,
            coupons.len()
        );

        self.coupons = coupons;
        Ok(&self.coupons)
    }

    /// Returns the leg terms.
    #[must_use]
    pub fn terms(&self) -> &LegTerms {
        &self.terms
    }

    /// Returns the fixed rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the coupons of the last build.
    #[must_use]
    pub fn coupons(&self) -> &[FixedCoupon] {
        &self.coupons
    }
}
