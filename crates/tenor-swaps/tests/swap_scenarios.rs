//! End-to-end scenarios for coupons, legs and swaps.
//!
//! Every floating rate is projected from a flat 3% continuously compounded
//! curve anchored at 2025-01-31, unless a fixing is recorded.

use std::sync::Arc;

use approx::assert_relative_eq;
use tenor_core::{BusinessDayConvention, CalendarId, Date, DayCountConvention, Frequency};
use tenor_curves::{DiscountCurveBuilder, FlatForwardCurve, InterpolationSpace};
use tenor_swaps::prelude::*;

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn euribor() -> RateIndex {
    let curve = FlatForwardCurve::new(d(2025, 1, 31), 0.03, DayCountConvention::Actual360).unwrap();
    RateIndex::new(DEFAULT_INDEX_NAME, Arc::new(curve))
}

fn ctx() -> PricingContext {
    PricingContext::new(d(2025, 1, 31))
}

// ============================================================================
// Coupons
// ============================================================================

#[test]
fn test_fixed_coupon_half_year() {
    let period = AccrualPeriod::new(
        d(2025, 1, 1),
        d(2025, 7, 1),
        d(2025, 7, 1),
        1_000_000.0,
        CalendarId::Target,
        DayCountConvention::Actual360,
    )
    .unwrap();
    let coupon = FixedCoupon::new(period, 0.05).unwrap();

    assert_relative_eq!(coupon.amount(), 1_000_000.0 * 0.05 * 181.0 / 360.0);
}

#[test]
fn test_floating_coupon_without_fixing() {
    let period = AccrualPeriod::new(
        d(2025, 1, 31),
        d(2025, 4, 30),
        d(2025, 5, 2),
        1_000_000.0,
        CalendarId::Target,
        DayCountConvention::Actual360,
    )
    .unwrap();
    let coupon =
        FloatingCoupon::new(period, FloatingRateTerms::with_spread(0.0025), &euribor(), &ctx())
            .unwrap();

    let rate = coupon.index_rate();
    assert_relative_eq!(rate, 0.03, epsilon = 5e-4);
    assert_eq!(
        coupon.amount(),
        1_000_000.0 * (rate + 0.0025) * period.accrual_fraction()
    );
}

#[test]
fn test_recorded_fixing_is_used() {
    let index = euribor();
    index.add_fixing(d(2025, 1, 29), 0.025).unwrap();

    let period = AccrualPeriod::new(
        d(2025, 1, 31),
        d(2025, 4, 30),
        d(2025, 4, 30),
        1_000_000.0,
        CalendarId::Target,
        DayCountConvention::Actual360,
    )
    .unwrap();
    let coupon =
        FloatingCoupon::new(period, FloatingRateTerms::with_spread(0.001), &index, &ctx()).unwrap();

    assert!(coupon.observation().is_fixed());
    assert_relative_eq!(
        coupon.amount(),
        1_000_000.0 * (0.025 + 0.001) * period.accrual_fraction()
    );
}

#[test]
fn test_projection_on_discount_curve() {
    let curve = DiscountCurveBuilder::new(d(2025, 1, 31))
        .add_pillar(d(2025, 1, 31), 1.0)
        .add_pillar(d(2025, 4, 30), 0.9925)
        .add_pillar(d(2025, 7, 31), 0.985)
        .with_interpolation_space(InterpolationSpace::LogDiscount)
        .build()
        .unwrap();
    let index = RateIndex::new(DEFAULT_INDEX_NAME, Arc::new(curve));

    let period = AccrualPeriod::new(
        d(2025, 1, 31),
        d(2025, 4, 30),
        d(2025, 4, 30),
        1_000_000.0,
        CalendarId::Target,
        DayCountConvention::Actual360,
    )
    .unwrap();
    let coupon = FloatingCoupon::new(period, FloatingRateTerms::default(), &index, &ctx()).unwrap();

    let tau = 89.0 / 360.0;
    assert_relative_eq!(coupon.index_rate(), (1.0 / 0.9925 - 1.0) / tau, epsilon = 1e-12);
}

// ============================================================================
// Legs
// ============================================================================

#[test]
fn test_fixed_leg_month_ends() {
    let terms = LegTerms::new(d(2025, 1, 31), d(2025, 6, 30), 1_000_000.0, Frequency::Monthly);
    let mut leg = FixedLeg::new(terms, 0.05).unwrap();
    let coupons = leg.build_leg().unwrap();

    assert_eq!(coupons.len(), 5);
    for pair in coupons.windows(2) {
        assert_eq!(pair[0].period().end(), pair[1].period().start());
    }
    let accrual: f64 = coupons.iter().map(|c| c.period().accrual_fraction()).sum();
    assert_relative_eq!(accrual, 5.0 / 12.0, epsilon = 0.01);
}

#[test]
fn test_floating_leg_with_payment_lag() {
    let terms = LegTerms::new(d(2025, 1, 31), d(2025, 6, 30), 1_000_000.0, Frequency::Monthly)
        .with_business_day_convention(BusinessDayConvention::ModifiedFollowing)
        .with_payment_lag(2);
    let mut leg = FloatingLeg::new(terms, 0.0025, 2).unwrap();
    let coupons = leg.build_leg(&euribor(), &ctx()).unwrap();

    assert_eq!(coupons.len(), 5);
    for coupon in coupons {
        assert_relative_eq!(coupon.index_rate(), 0.03, epsilon = 5e-4);
        assert!(coupon.period().start() < coupon.period().end());
        assert!(coupon.period().end() < coupon.period().payment_date());
    }
    assert_eq!(coupons[0].period().payment_date(), d(2025, 3, 4));
}

#[test]
fn test_leg_enum_exposes_coupons() {
    let terms = LegTerms::new(d(2025, 1, 31), d(2025, 6, 30), 1_000_000.0, Frequency::Monthly);
    let mut fixed = FixedLeg::new(terms, 0.05).unwrap();
    fixed.build_leg().unwrap();

    let leg = Leg::from(fixed);
    assert_eq!(leg.num_coupons(), 5);
    assert!(leg.coupons().iter().all(|c| matches!(c, Coupon::Fixed(_))));
    assert!(leg.coupons().iter().all(|c| c.amount() > 0.0));
}

// ============================================================================
// Swaps
// ============================================================================

fn one_year_swap() -> SwapTerms {
    SwapTerms {
        spread: 0.0025,
        floating_payment_lag: 2,
        ..SwapTerms::new(
            d(2025, 1, 31),
            d(2026, 1, 31),
            1_000_000.0,
            0.05,
            Frequency::Monthly,
            Frequency::Monthly,
        )
    }
}

#[test]
fn test_monthly_swap() {
    let swap = Swap::new(one_year_swap(), &euribor(), &ctx()).unwrap();

    let fixed = swap.fixed_leg().coupons();
    let floating = swap.floating_leg().coupons();
    assert_eq!(fixed.len(), floating.len());
    assert!(fixed.iter().all(|c| c.amount() > 0.0));
    assert!(floating.iter().all(|c| c.amount() > 0.0));

    assert_eq!(fixed[0].period().start(), d(2025, 2, 4));
    // Saturday Jan 31 2026: Following on the fixed leg, Modified Following on
    // the floating leg
    assert_eq!(fixed.last().unwrap().period().end(), d(2026, 2, 2));
    assert_eq!(floating.last().unwrap().period().end(), d(2026, 1, 30));
}

#[test]
fn test_swap_with_mixed_frequencies() {
    let terms = SwapTerms {
        fixed_frequency: Frequency::Annual,
        floating_frequency: Frequency::Quarterly,
        fixed_day_count: DayCountConvention::Thirty360,
        end_date: d(2027, 1, 29),
        ..one_year_swap()
    };
    let swap = Swap::new(terms, &euribor(), &ctx()).unwrap();

    assert_eq!(swap.fixed_leg().coupons().len(), 2);
    assert_eq!(swap.floating_leg().coupons().len(), 8);
    assert_eq!(
        swap.fixed_leg().coupons()[0].period().day_count(),
        DayCountConvention::Thirty360
    );
}

#[test]
fn test_swaps_build_concurrently_on_shared_index() {
    let index = euribor();
    index.add_fixing(d(2025, 1, 31), 0.0251).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let index = index.clone();
            std::thread::spawn(move || {
                let terms = SwapTerms {
                    fixed_rate: 0.03 + 0.005 * f64::from(i),
                    ..one_year_swap()
                };
                Swap::new(terms, &index, &ctx()).map(|swap| swap.fixed_leg().coupons().len())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 12);
    }
}
