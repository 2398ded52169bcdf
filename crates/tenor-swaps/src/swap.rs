//! Vanilla fixed-for-floating interest rate swap.

use log::debug;
use serde::{Deserialize, Serialize};

use tenor_core::{
    BusinessDayConvention, CalendarId, CoreError, Date, DayCountConvention, Frequency,
};

use crate::context::PricingContext;
use crate::coupons::validate_notional;
use crate::error::{SwapError, SwapResult};
use crate::indices::RateIndex;
use crate::legs::{FixedLeg, FloatingLeg, LegTerms};

/// Economic terms of a vanilla swap.
///
/// Both legs share the notional, the calendar and the window from the value
/// date to `end_date`; frequency, day count, business day convention and
/// payment lag are set per leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapTerms {
    /// Trade date.
    pub trade_date: Date,
    /// Last accrual end of both legs.
    pub end_date: Date,
    /// Business days from trade date to value date.
    pub spot_lag: u32,
    /// Notional of both legs.
    pub notional: f64,
    /// Fixed leg rate.
    pub fixed_rate: f64,
    /// Fixed leg payment frequency.
    pub fixed_frequency: Frequency,
    /// Floating leg payment frequency.
    pub floating_frequency: Frequency,
    /// Spread over the floating index.
    pub spread: f64,
    /// Calendar of both legs.
    pub calendar: CalendarId,
    /// Fixed leg day count.
    pub fixed_day_count: DayCountConvention,
    /// Floating leg day count.
    pub floating_day_count: DayCountConvention,
    /// Fixed leg business day convention.
    pub fixed_business_day_convention: BusinessDayConvention,
    /// Floating leg business day convention.
    pub floating_business_day_convention: BusinessDayConvention,
    /// Fixed leg payment lag in business days.
    pub fixed_payment_lag: u32,
    /// Floating leg payment lag in business days.
    pub floating_payment_lag: u32,
    /// Floating leg fixing lag in business days.
    pub fixing_lag: u32,
}

impl SwapTerms {
    /// Creates terms with market defaults: spot lag 2, TARGET, Actual/360 on
    /// both legs, Following on the fixed leg, Modified Following on the
    /// floating leg, no payment lag and a two day fixing lag.
    #[must_use]
    pub fn new(
        trade_date: Date,
        end_date: Date,
        notional: f64,
        fixed_rate: f64,
        fixed_frequency: Frequency,
        floating_frequency: Frequency,
    ) -> Self {
        Self {
            trade_date,
            end_date,
            spot_lag: 2,
            notional,
            fixed_rate,
            fixed_frequency,
            floating_frequency,
            spread: 0.0,
            calendar: CalendarId::Target,
            fixed_day_count: DayCountConvention::Actual360,
            floating_day_count: DayCountConvention::Actual360,
            fixed_business_day_convention: BusinessDayConvention::Following,
            floating_business_day_convention: BusinessDayConvention::ModifiedFollowing,
            fixed_payment_lag: 0,
            floating_payment_lag: 0,
            fixing_lag: 2,
        }
    }

    /// Value date: the trade date moved forward `spot_lag` business days.
    pub fn value_date(&self) -> SwapResult<Date> {
        let lag = i32::try_from(self.spot_lag).map_err(|_| {
            SwapError::validation("spot_lag", format!("{} is too large", self.spot_lag))
        })?;
        Ok(self
            .calendar
            .calendar()
            .advance(self.trade_date, lag, BusinessDayConvention::Following))
    }

    fn fixed_leg_terms(&self, value_date: Date) -> LegTerms {
        LegTerms::new(value_date, self.end_date, self.notional, self.fixed_frequency)
            .with_calendar(self.calendar)
            .with_day_count(self.fixed_day_count)
            .with_business_day_convention(self.fixed_business_day_convention)
            .with_payment_lag(self.fixed_payment_lag)
    }

    fn floating_leg_terms(&self, value_date: Date) -> LegTerms {
        LegTerms::new(value_date, self.end_date, self.notional, self.floating_frequency)
            .with_calendar(self.calendar)
            .with_day_count(self.floating_day_count)
            .with_business_day_convention(self.floating_business_day_convention)
            .with_payment_lag(self.floating_payment_lag)
    }
}

/// A fixed leg and a floating leg over the same window.
#[derive(Debug, Clone, PartialEq)]
pub struct Swap {
    terms: SwapTerms,
    value_date: Date,
    fixed_leg: FixedLeg,
    floating_leg: FloatingLeg,
}

impl Swap {
    /// Creates the swap and builds both legs.
    ///
    /// # Errors
    ///
    /// - `SwapError::Core(InvalidDateRange)` if `end_date <= trade_date`, or
    ///   the value date is not before `end_date`
    /// - `SwapError::Validation` for a non-positive notional or a fixed
    ///   rate outside `[0, 1]`
    /// - any schedule or rate resolution error of the legs
    pub fn new(terms: SwapTerms, index: &RateIndex, ctx: &PricingContext) -> SwapResult<Self> {
        if terms.end_date <= terms.trade_date {
            return Err(CoreError::invalid_date_range(terms.trade_date, terms.end_date).into());
        }
        validate_notional(terms.notional)?;

        let value_date = terms.value_date()?;
        if terms.end_date <= value_date {
            return Err(CoreError::invalid_date_range(value_date, terms.end_date).into());
        }

        let mut fixed_leg = FixedLeg::new(terms.fixed_leg_terms(value_date), terms.fixed_rate)?;
        fixed_leg.build_leg()?;

        let mut floating_leg = FloatingLeg::new(
            terms.floating_leg_terms(value_date),
            terms.spread,
            terms.fixing_lag,
        )?;
        floating_leg.build_leg(index, ctx)?;

        debug!(
            "built swap traded {} value {} -> {}: {} fixed / {} floating coupons",
            terms.trade_date,
            value_date,
            terms.end_date,
            fixed_leg.coupons().len(),
            floating_leg.coupons().len()
        );

        Ok(Self {
            terms,
            value_date,
            fixed_leg,
            floating_leg,
        })
    }

    /// Returns the swap terms.
    #[must_use]
    pub fn terms(&self) -> &SwapTerms {
        &self.terms
    }

    /// Returns the value date.
    #[must_use]
    pub fn value_date(&self) -> Date {
        self.value_date
    }

    /// Returns the end date.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.terms.end_date
    }

    /// Returns the notional.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.terms.notional
    }

    /// Returns the fixed leg.
    #[must_use]
    pub fn fixed_leg(&self) -> &FixedLeg {
        &self.fixed_leg
    }

    /// Returns the floating leg.
    #[must_use]
    pub fn floating_leg(&self) -> &FloatingLeg {
        &self.floating_leg
    }
}
