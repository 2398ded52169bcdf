//! Property tests for schedule generation and leg accrual.

use proptest::prelude::*;
use tenor_core::{BusinessDayConvention, Calendar, CalendarId, CoreError, Date, Frequency};
use tenor_swaps::prelude::*;

const FREQUENCIES: [Frequency; 4] = [
    Frequency::Monthly,
    Frequency::Quarterly,
    Frequency::SemiAnnual,
    Frequency::Annual,
];

const CONVENTIONS: [BusinessDayConvention; 3] = [
    BusinessDayConvention::Following,
    BusinessDayConvention::ModifiedFollowing,
    BusinessDayConvention::Preceding,
];

fn schedule_inputs() -> impl Strategy<Value = (Date, Date, Frequency, BusinessDayConvention)> {
    (
        2000i32..2040,
        1u32..=12,
        1u32..=31,
        1i32..120,
        0i64..28,
        0usize..FREQUENCIES.len(),
        0usize..CONVENTIONS.len(),
    )
        .prop_filter_map("day exists in month", |(y, m, day, months, extra, f, c)| {
            let start = Date::from_ymd(y, m, day).ok()?;
            let end = start.add_months(months).ok()?.add_days(extra);
            Some((start, end, FREQUENCIES[f], CONVENTIONS[c]))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn schedule_invariants((start, end, frequency, convention) in schedule_inputs()) {
        let calendar = CalendarId::Target.calendar();
        let step = frequency.months_per_period() as i32;
        let result = ScheduleGenerator::new(start, end, frequency)
            .with_calendar(CalendarId::Target)
            .with_business_day_convention(convention)
            .generate();

        if step > start.whole_months_until(&end) {
            let rejected = matches!(result, Err(CoreError::InvalidFrequency { .. }));
            prop_assert!(rejected);
            return Ok(());
        }

        let schedule = result.unwrap();
        let dates = schedule.dates();

        prop_assert!(dates.len() >= 2);
        prop_assert_eq!(dates[0], calendar.adjust(start, convention));
        prop_assert_eq!(dates[dates.len() - 1], calendar.adjust(end, convention));
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));

        let unadjusted = schedule.unadjusted_dates();
        for (i, date) in unadjusted[..unadjusted.len() - 1].iter().enumerate() {
            prop_assert_eq!(*date, start.add_months(step * i as i32).unwrap());
        }

        let max_gap = 31 * i64::from(step) + 7;
        prop_assert!(dates.windows(2).all(|w| w[1] - w[0] <= max_gap));
    }

    #[test]
    fn fixed_leg_accrual_telescopes((start, end, frequency, convention) in schedule_inputs()) {
        prop_assume!(frequency.months_per_period() as i32 <= start.whole_months_until(&end));

        let terms = LegTerms::new(start, end, 1_000_000.0, frequency)
            .with_business_day_convention(convention);
        let mut leg = FixedLeg::new(terms, 0.05).unwrap();
        let coupons = leg.build_leg().unwrap();

        let first = coupons[0].period().start();
        let last = coupons[coupons.len() - 1].period().end();
        let accrual: f64 = coupons.iter().map(|c| c.period().accrual_fraction()).sum();
        prop_assert!((accrual - (last - first) as f64 / 360.0).abs() < 1e-9);

        let amount: f64 = coupons.iter().map(FixedCoupon::amount).sum();
        prop_assert!((amount - 1_000_000.0 * 0.05 * accrual).abs() < 1e-6);
    }
}
