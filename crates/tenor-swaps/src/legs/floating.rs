//! Floating rate leg.

use log::debug;

use crate::context::PricingContext;
use crate::coupons::{FloatingCoupon, FloatingRateTerms};
use crate::error::{SwapError, SwapResult};
use crate::indices::RateIndex;
use crate::legs::LegTerms;

/// A leg of floating rate coupons on one index.
///
/// The fixing date of each coupon is moved back on the leg calendar with the
/// leg's business day convention.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingLeg {
    terms: LegTerms,
    spread: f64,
    fixing_lag: u32,
    coupons: Vec<FloatingCoupon>,
}

impl FloatingLeg {
    /// Creates an unbuilt floating leg.
    ///
    /// # Errors
    ///
    /// Returns an error if the terms are invalid or the spread is not finite.
    pub fn new(terms: LegTerms, spread: f64, fixing_lag: u32) -> SwapResult<Self> {
        terms.validate()?;
        if !spread.is_finite() {
            return Err(SwapError::validation(
                "spread",
                format!("must be finite, got {spread}"),
            ));
        }
        Ok(Self {
            terms,
            spread,
            fixing_lag,
            coupons: Vec::new(),
        })
    }

    /// Generates one coupon per schedule period, replacing any previous ones.
    ///
    /// Each coupon resolves its rate against `index` at `ctx`.
    pub fn build_leg(
        &mut self,
        index: &RateIndex,
        ctx: &PricingContext,
    ) -> SwapResult<&[FloatingCoupon]> {
        let rate_terms = self.rate_terms();
        let coupons = self
            .terms
            .accrual_periods()?
            .into_iter()
            .map(|period| FloatingCoupon::new(period, rate_terms, index, ctx))
            .collect::<SwapResult<Vec<_>>>()?;

        debug!(
            "built {} floating leg {} -> {} + {}: {} coupons ({} fixed)",
            index.name(),
            self.terms.start,
            self.terms.end,
            self.spread,
            coupons.len(),
            coupons.iter().filter(|c| c.observation().is_fixed()).count()
        );

        self.coupons = coupons;
        Ok(&self.coupons)
    }

    /// Returns the leg terms.
    #[must_use]
    pub fn terms(&self) -> &LegTerms {
        &self.terms
    }

    /// Returns the spread over the index.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Returns the fixing lag in business days.
    #[must_use]
    pub fn fixing_lag(&self) -> u32 {
        self.fixing_lag
    }

    /// Returns the coupon-level rate terms implied by the leg.
    #[must_use]
    pub fn rate_terms(&self) -> FloatingRateTerms {
        FloatingRateTerms {
            spread: self.spread,
            fixing_lag: self.fixing_lag,
            fixing_convention: self.terms.business_day_convention,
        }
    }

    /// Returns the coupons of the last build.
    #[must_use]
    pub fn coupons(&self) -> &[FloatingCoupon] {
        &self.coupons
    }
}
