//! Floating rate coupon.
//!
//! The index rate is resolved once, when the coupon is built:
//!
//! 1. The fixing date is the accrual start moved back `fixing_lag` business
//!    days on the period's calendar.
//! 2. A fixing recorded for that date is used as is.
//! 3. Otherwise the simply compounded forward over
//!    `[max(fixing_date, evaluation_date), end]` is projected from the
//!    index curve.

use log::debug;
use serde::{Deserialize, Serialize};

use tenor_core::{BusinessDayConvention, Date};

use crate::context::PricingContext;
use crate::coupons::AccrualPeriod;
use crate::error::{SwapError, SwapResult};
use crate::indices::RateIndex;

/// Spread and fixing conventions of a floating coupon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingRateTerms {
    /// Spread added to the index rate (0.0025 for 25bp).
    pub spread: f64,
    /// Business days between the fixing date and the accrual start.
    pub fixing_lag: u32,
    /// Convention used when the fixing lag is zero.
    pub fixing_convention: BusinessDayConvention,
}

impl Default for FloatingRateTerms {
    fn default() -> Self {
        Self {
            spread: 0.0,
            fixing_lag: 2,
            fixing_convention: BusinessDayConvention::ModifiedFollowing,
        }
    }
}

impl FloatingRateTerms {
    /// Creates terms with the given spread and the default fixing lag.
    #[must_use]
    pub fn with_spread(spread: f64) -> Self {
        Self {
            spread,
            ..Self::default()
        }
    }
}

/// Where the index rate of a floating coupon came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum RateObservation {
    /// A recorded fixing.
    Fixed {
        /// Fixing date.
        date: Date,
        /// Fixed rate.
        rate: f64,
    },
    /// A forward projected from the index curve.
    Projected {
        /// Start of the projection window.
        start: Date,
        /// End of the projection window.
        end: Date,
        /// Projected forward rate.
        rate: f64,
    },
}

impl RateObservation {
    /// Returns the index rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        match self {
            RateObservation::Fixed { rate, .. } | RateObservation::Projected { rate, .. } => *rate,
        }
    }

    /// Returns true if the rate came from a recorded fixing.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, RateObservation::Fixed { .. })
    }
}

/// A coupon paying `notional * (index_rate + spread) * accrual_fraction`.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingCoupon {
    period: AccrualPeriod,
    terms: FloatingRateTerms,
    index_name: String,
    fixing_date: Date,
    observation: RateObservation,
}

impl FloatingCoupon {
    /// Creates a floating coupon and resolves its index rate.
    ///
    /// # Errors
    ///
    /// - `SwapError::Validation` if the spread is not finite
    /// - `SwapError::MissingFixing` if no fixing is recorded and the
    ///   evaluation date is already at or past the accrual end
    /// - `SwapError::Curve` if the projection curve cannot be evaluated
    pub fn new(
        period: AccrualPeriod,
        terms: FloatingRateTerms,
        index: &RateIndex,
        ctx: &PricingContext,
    ) -> SwapResult<Self> {
        if !terms.spread.is_finite() {
            return Err(SwapError::validation(
                "spread",
                format!("must be finite, got {}", terms.spread),
            ));
        }
        let lag = i32::try_from(terms.fixing_lag).map_err(|_| {
            SwapError::validation("fixing_lag", format!("{} is too large", terms.fixing_lag))
        })?;

        let fixing_date =
            period
                .calendar()
                .calendar()
                .advance(period.start(), -lag, terms.fixing_convention);

        let observation = match index.try_fixing(fixing_date) {
            Some(rate) => RateObservation::Fixed {
                date: fixing_date,
                rate,
            },
            None => {
                let start = fixing_date.max(ctx.evaluation_date());
                if start >= period.end() {
                    return Err(SwapError::missing_fixing(
                        index.name(),
                        fixing_date,
                        ctx.evaluation_date(),
                    ));
                }
                let rate = index.project_forward(start, period.end(), period.day_count())?;
                RateObservation::Projected {
                    start,
                    end: period.end(),
                    rate,
                }
            }
        };

        debug!(
            "{} coupon {} -> {}: fixing date {}, {} rate {:.6}",
            index.name(),
            period.start(),
            period.end(),
            fixing_date,
            if observation.is_fixed() { "fixed" } else { "projected" },
            observation.rate()
        );

        Ok(Self {
            period,
            terms,
            index_name: index.name().to_string(),
            fixing_date,
            observation,
        })
    }

    /// Returns the accrual period.
    #[must_use]
    pub fn period(&self) -> &AccrualPeriod {
        &self.period
    }

    /// Returns the spread.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.terms.spread
    }

    /// Returns the fixing lag in business days.
    #[must_use]
    pub fn fixing_lag(&self) -> u32 {
        self.terms.fixing_lag
    }

    /// Returns the name of the index the rate was resolved against.
    #[must_use]
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Returns the fixing date.
    #[must_use]
    pub fn fixing_date(&self) -> Date {
        self.fixing_date
    }

    /// Returns how the index rate was obtained.
    #[must_use]
    pub fn observation(&self) -> &RateObservation {
        &self.observation
    }

    /// Returns the index rate, excluding the spread.
    #[must_use]
    pub fn index_rate(&self) -> f64 {
        self.observation.rate()
    }

    /// Returns the index rate plus the spread.
    #[must_use]
    pub fn all_in_rate(&self) -> f64 {
        self.index_rate() + self.terms.spread
    }

    /// Returns the coupon amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.period.notional() * self.all_in_rate() * self.period.accrual_fraction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::Arc;
    use tenor_core::{CalendarId, DayCountConvention};
    use tenor_curves::FlatForwardCurve;

    use crate::indices::DEFAULT_INDEX_NAME;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn index() -> RateIndex {
        let curve = FlatForwardCurve::new(d(2025, 1, 31), 0.03, DayCountConvention::Actual360)
            .unwrap();
        RateIndex::new(DEFAULT_INDEX_NAME, Arc::new(curve))
    }

    fn period() -> AccrualPeriod {
        AccrualPeriod::new(
            d(2025, 1, 31),
            d(2025, 4, 30),
            d(2025, 5, 2),
            1_000_000.0,
            CalendarId::Target,
            DayCountConvention::Actual360,
        )
        .unwrap()
    }

    #[test]
    fn test_projected_rate_on_flat_curve() {
        let ctx = PricingContext::new(d(2025, 1, 31));
        let coupon =
            FloatingCoupon::new(period(), FloatingRateTerms::with_spread(0.0025), &index(), &ctx)
                .unwrap();

        // Jan 31 2025 is a Friday; two TARGET business days earlier is Wednesday
        assert_eq!(coupon.fixing_date(), d(2025, 1, 29));
        assert!(!coupon.observation().is_fixed());
        let accrual: f64 = 89.0 / 360.0;
        assert_relative_eq!(coupon.index_rate(), 0.03, epsilon = 5e-4);
        assert_relative_eq!(
            coupon.index_rate(),
            ((0.03 * accrual).exp() - 1.0) / accrual,
            epsilon = 1e-12
        );

        assert_relative_eq!(
            coupon.amount(),
            1_000_000.0 * (coupon.index_rate() + 0.0025) * accrual,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_projection_starts_at_evaluation_date() {
        let ctx = PricingContext::new(d(2025, 1, 31));
        let coupon =
            FloatingCoupon::new(period(), FloatingRateTerms::default(), &index(), &ctx).unwrap();

        assert_eq!(
            *coupon.observation(),
            RateObservation::Projected {
                start: d(2025, 1, 31),
                end: d(2025, 4, 30),
                rate: coupon.index_rate(),
            }
        );
    }

    #[test]
    fn test_fixing_wins_over_projection() {
        let index = index();
        index.add_fixing(d(2025, 1, 29), 0.025).unwrap();
        let ctx = PricingContext::new(d(2025, 1, 31));

        let coupon =
            FloatingCoupon::new(period(), FloatingRateTerms::with_spread(0.001), &index, &ctx)
                .unwrap();

        assert_eq!(
            *coupon.observation(),
            RateObservation::Fixed {
                date: d(2025, 1, 29),
                rate: 0.025
            }
        );
        assert_relative_eq!(
            coupon.amount(),
            1_000_000.0 * (0.025 + 0.001) * 89.0 / 360.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_missing_fixing_after_period_end() {
        let ctx = PricingContext::new(d(2025, 5, 2));
        let err =
            FloatingCoupon::new(period(), FloatingRateTerms::default(), &index(), &ctx).unwrap_err();

        assert_eq!(
            err,
            SwapError::missing_fixing(DEFAULT_INDEX_NAME, d(2025, 1, 29), d(2025, 5, 2))
        );
    }

    #[test]
    fn test_zero_fixing_lag_adjusts_start() {
        let period = AccrualPeriod::new(
            d(2025, 3, 1),
            d(2025, 6, 2),
            d(2025, 6, 2),
            1_000_000.0,
            CalendarId::Target,
            DayCountConvention::Actual360,
        )
        .unwrap();
        let terms = FloatingRateTerms {
            fixing_lag: 0,
            fixing_convention: BusinessDayConvention::Following,
            ..FloatingRateTerms::default()
        };
        let ctx = PricingContext::new(d(2025, 1, 31));

        let coupon = FloatingCoupon::new(period, terms, &index(), &ctx).unwrap();
        // Saturday Mar 1 rolls to Monday Mar 3
        assert_eq!(coupon.fixing_date(), d(2025, 3, 3));
    }

    #[test]
    fn test_non_finite_spread_is_rejected() {
        let ctx = PricingContext::new(d(2025, 1, 31));
        let err = FloatingCoupon::new(
            period(),
            FloatingRateTerms::with_spread(f64::NAN),
            &index(),
            &ctx,
        )
        .unwrap_err();
        assert!(matches!(err, SwapError::Validation { ref field, .. } if field == "spread"));
    }

    #[test]
    fn test_observation_is_tagged_by_source() {
        let fixed = RateObservation::Fixed {
            date: d(2025, 1, 29),
            rate: 0.025,
        };
        let json = serde_json::to_value(fixed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"source": "fixed", "date": "2025-01-29", "rate": 0.025})
        );

        let projected: RateObservation = serde_json::from_str(
            r#"{"source": "projected", "start": "2025-01-31", "end": "2025-04-30", "rate": 0.03}"#,
        )
        .unwrap();
        assert!(!projected.is_fixed());
        assert_eq!(
            projected,
            RateObservation::Projected {
                start: d(2025, 1, 31),
                end: d(2025, 4, 30),
                rate: 0.03
            }
        );

        assert!(serde_json::from_str::<RateObservation>(r#"{"source": "guessed", "rate": 0.03}"#)
            .is_err());
    }

    #[test]
    fn test_rate_terms_fill_missing_fields_with_defaults() {
        let terms: FloatingRateTerms = serde_json::from_str(r#"{"spread": 0.001}"#).unwrap();
        assert_eq!(terms, FloatingRateTerms::with_spread(0.001));
        assert_eq!(terms.fixing_lag, 2);

        let round_trip: FloatingRateTerms =
            serde_json::from_str(&serde_json::to_string(&terms).unwrap()).unwrap();
        assert_eq!(round_trip, terms);
    }
}
