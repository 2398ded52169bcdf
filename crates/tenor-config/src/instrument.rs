//! Coupon, leg and swap configurations.
//!
//! Each config carries the defaults of the market conventions it models and
//! builds the matching `tenor-swaps` type. Floating configs resolve their
//! rates against the index and pricing context they are built with.

use serde::{Deserialize, Serialize};

use tenor_core::{BusinessDayConvention, CalendarId, Date, DayCountConvention, Frequency};
use tenor_pricing::{Instrument, InstrumentKind};
use tenor_swaps::{
    AccrualPeriod, FixedCoupon, FixedLeg, FloatingCoupon, FloatingLeg, FloatingRateTerms,
    LegTerms, PricingContext, RateIndex, Swap, SwapTerms,
};

use crate::error::{
    check_dates, check_fixed_rate, check_notional, check_spread, ConfigError, ConfigResult,
    Validate, ValidationError,
};

fn default_index_name() -> String {
    tenor_swaps::indices::DEFAULT_INDEX_NAME.to_string()
}

fn default_fixing_lag() -> u32 {
    2
}

fn default_spot_lag() -> u32 {
    2
}

fn following() -> BusinessDayConvention {
    BusinessDayConvention::Following
}

fn modified_following() -> BusinessDayConvention {
    BusinessDayConvention::ModifiedFollowing
}

fn check_payment_date(end: Date, payment: Date, errors: &mut Vec<ValidationError>) {
    if payment < end {
        errors.push(ValidationError::with_rule(
            "payment_date",
            format!("Payment date {payment} must not precede end date {end}"),
            "payment_after_end",
        ));
    }
}

fn check_index(expected: &str, index: &RateIndex) -> ConfigResult<()> {
    if expected == index.name() {
        return Ok(());
    }
    Err(ConfigError::Validation {
        field: "index_name".to_string(),
        message: format!("Index {expected} is not configured, got {}", index.name()),
    })
}

// =============================================================================
// COUPONS
// =============================================================================

/// Configuration of a single fixed coupon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedCouponConfig {
    /// Accrual start.
    pub start_date: Date,
    /// Accrual end.
    pub end_date: Date,
    /// Payment date.
    pub payment_date: Date,
    /// Notional.
    pub notional: f64,
    /// Fixed rate (0.05 for 5%).
    pub fixed_rate: f64,
    /// Calendar.
    #[serde(default)]
    pub calendar: CalendarId,
    /// Accrual day count.
    #[serde(default)]
    pub day_count: DayCountConvention,
}

impl FixedCouponConfig {
    /// Builds the coupon.
    pub fn build(&self) -> ConfigResult<FixedCoupon> {
        self.validate_or_error()?;
        let period = AccrualPeriod::new(
            self.start_date,
            self.end_date,
            self.payment_date,
            self.notional,
            self.calendar,
            self.day_count,
        )?;
        Ok(FixedCoupon::new(period, self.fixed_rate)?)
    }
}

impl Validate for FixedCouponConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_notional(self.notional, &mut errors);
        check_fixed_rate(self.fixed_rate, &mut errors);
        check_dates("start date", self.start_date, self.end_date, &mut errors);
        check_payment_date(self.end_date, self.payment_date, &mut errors);
        errors
    }
}

/// Configuration of a single floating coupon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingCouponConfig {
    /// Accrual start.
    pub start_date: Date,
    /// Accrual end.
    pub end_date: Date,
    /// Payment date.
    pub payment_date: Date,
    /// Notional.
    pub notional: f64,
    /// Spread over the index.
    #[serde(default)]
    pub spread: f64,
    /// Index name.
    #[serde(default = "default_index_name")]
    pub index_name: String,
    /// Calendar.
    #[serde(default)]
    pub calendar: CalendarId,
    /// Accrual day count.
    #[serde(default)]
    pub day_count: DayCountConvention,
    /// Business days from fixing to accrual start.
    #[serde(default = "default_fixing_lag")]
    pub fixing_lag: u32,
    /// Convention for the fixing date.
    #[serde(default = "modified_following")]
    pub convention: BusinessDayConvention,
}

impl FloatingCouponConfig {
    /// Builds the coupon, resolving its rate against `index` at `ctx`.
    pub fn build(&self, index: &RateIndex, ctx: &PricingContext) -> ConfigResult<FloatingCoupon> {
        self.validate_or_error()?;
        check_index(&self.index_name, index)?;
        let period = AccrualPeriod::new(
            self.start_date,
            self.end_date,
            self.payment_date,
            self.notional,
            self.calendar,
            self.day_count,
        )?;
        let terms = FloatingRateTerms {
            spread: self.spread,
            fixing_lag: self.fixing_lag,
            fixing_convention: self.convention,
        };
        Ok(FloatingCoupon::new(period, terms, index, ctx)?)
    }
}

impl Validate for FloatingCouponConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_notional(self.notional, &mut errors);
        check_spread(self.spread, &mut errors);
        check_dates("start date", self.start_date, self.end_date, &mut errors);
        check_payment_date(self.end_date, self.payment_date, &mut errors);
        errors
    }
}

// =============================================================================
// LEGS
// =============================================================================

/// Configuration of a fixed leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedLegConfig {
    /// First accrual start.
    pub start_date: Date,
    /// Last accrual end.
    pub end_date: Date,
    /// Notional.
    pub notional: f64,
    /// Payment frequency, e.g. "6M".
    pub payment_frequency: Frequency,
    /// Fixed rate.
    pub fixed_rate: f64,
    /// Calendar.
    #[serde(default)]
    pub calendar: CalendarId,
    /// Accrual day count.
    #[serde(default)]
    pub day_count: DayCountConvention,
    /// Schedule and payment convention.
    #[serde(default = "following")]
    pub business_convention: BusinessDayConvention,
    /// Business days from accrual end to payment.
    #[serde(default)]
    pub payment_lag: u32,
}

impl FixedLegConfig {
    /// Returns the leg terms.
    pub fn terms(&self) -> LegTerms {
        LegTerms::new(self.start_date, self.end_date, self.notional, self.payment_frequency)
            .with_calendar(self.calendar)
            .with_day_count(self.day_count)
            .with_business_day_convention(self.business_convention)
            .with_payment_lag(self.payment_lag)
    }

    /// Builds the leg and its coupons.
    pub fn build(&self) -> ConfigResult<FixedLeg> {
        self.validate_or_error()?;
        let mut leg = FixedLeg::new(self.terms(), self.fixed_rate)?;
        leg.build_leg()?;
        Ok(leg)
    }
}

impl Validate for FixedLegConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_notional(self.notional, &mut errors);
        check_fixed_rate(self.fixed_rate, &mut errors);
        check_dates("start date", self.start_date, self.end_date, &mut errors);
        errors
    }
}

/// Configuration of a floating leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingLegConfig {
    /// First accrual start.
    pub start_date: Date,
    /// Last accrual end.
    pub end_date: Date,
    /// Notional.
    pub notional: f64,
    /// Payment frequency, e.g. "3M".
    pub payment_frequency: Frequency,
    /// Index name.
    #[serde(default = "default_index_name")]
    pub index_name: String,
    /// Spread over the index.
    #[serde(default)]
    pub spread: f64,
    /// Calendar.
    #[serde(default)]
    pub calendar: CalendarId,
    /// Accrual day count.
    #[serde(default)]
    pub day_count: DayCountConvention,
    /// Schedule, payment and fixing convention.
    #[serde(default = "following")]
    pub business_convention: BusinessDayConvention,
    /// Business days from fixing to accrual start.
    #[serde(default = "default_fixing_lag")]
    pub fixing_lag: u32,
    /// Business days from accrual end to payment.
    #[serde(default)]
    pub payment_lag: u32,
}

impl FloatingLegConfig {
    /// Returns the leg terms.
    pub fn terms(&self) -> LegTerms {
        LegTerms::new(self.start_date, self.end_date, self.notional, self.payment_frequency)
            .with_calendar(self.calendar)
            .with_day_count(self.day_count)
            .with_business_day_convention(self.business_convention)
            .with_payment_lag(self.payment_lag)
    }

    /// Builds the leg, resolving every coupon against `index` at `ctx`.
    pub fn build(&self, index: &RateIndex, ctx: &PricingContext) -> ConfigResult<FloatingLeg> {
        self.validate_or_error()?;
        check_index(&self.index_name, index)?;
        let mut leg = FloatingLeg::new(self.terms(), self.spread, self.fixing_lag)?;
        leg.build_leg(index, ctx)?;
        Ok(leg)
    }
}

impl Validate for FloatingLegConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_notional(self.notional, &mut errors);
        check_spread(self.spread, &mut errors);
        check_dates("start date", self.start_date, self.end_date, &mut errors);
        errors
    }
}

// =============================================================================
// SWAP
// =============================================================================

/// Configuration of a vanilla fixed-for-floating swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapConfig {
    /// Trade date.
    pub trade_date: Date,
    /// End date of both legs.
    pub end_date: Date,
    /// Business days from trade to value date.
    #[serde(default = "default_spot_lag")]
    pub spot_lag: u32,
    /// Notional.
    pub notional: f64,
    /// Fixed leg rate.
    pub fixed_rate: f64,
    /// Fixed leg frequency.
    pub fixed_frequency: Frequency,
    /// Floating leg frequency.
    pub floating_frequency: Frequency,
    /// Spread over the index.
    #[serde(default)]
    pub spread: f64,
    /// Index name of the floating leg.
    #[serde(default = "default_index_name")]
    pub index_name: String,
    /// Calendar of both legs.
    #[serde(default)]
    pub calendar: CalendarId,
    /// Fixed leg day count.
    #[serde(default)]
    pub fixed_day_count: DayCountConvention,
    /// Floating leg day count.
    #[serde(default)]
    pub floating_day_count: DayCountConvention,
    /// Fixed leg convention.
    #[serde(default = "following")]
    pub fixed_business_convention: BusinessDayConvention,
    /// Floating leg convention.
    #[serde(default = "modified_following")]
    pub floating_business_convention: BusinessDayConvention,
    /// Fixed leg payment lag.
    #[serde(default)]
    pub fixed_payment_lag: u32,
    /// Floating leg payment lag.
    #[serde(default)]
    pub floating_payment_lag: u32,
    /// Floating leg fixing lag.
    #[serde(default = "default_fixing_lag")]
    pub fixing_lag: u32,
}

impl SwapConfig {
    /// Returns the swap terms.
    pub fn terms(&self) -> SwapTerms {
        SwapTerms {
            trade_date: self.trade_date,
            end_date: self.end_date,
            spot_lag: self.spot_lag,
            notional: self.notional,
            fixed_rate: self.fixed_rate,
            fixed_frequency: self.fixed_frequency,
            floating_frequency: self.floating_frequency,
            spread: self.spread,
            calendar: self.calendar,
            fixed_day_count: self.fixed_day_count,
            floating_day_count: self.floating_day_count,
            fixed_business_day_convention: self.fixed_business_convention,
            floating_business_day_convention: self.floating_business_convention,
            fixed_payment_lag: self.fixed_payment_lag,
            floating_payment_lag: self.floating_payment_lag,
            fixing_lag: self.fixing_lag,
        }
    }

    /// Builds the swap and both legs.
    pub fn build(&self, index: &RateIndex, ctx: &PricingContext) -> ConfigResult<Swap> {
        self.validate_or_error()?;
        check_index(&self.index_name, index)?;
        Ok(Swap::new(self.terms(), index, ctx)?)
    }
}

impl Validate for SwapConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_notional(self.notional, &mut errors);
        check_fixed_rate(self.fixed_rate, &mut errors);
        check_spread(self.spread, &mut errors);
        check_dates("trade date", self.trade_date, self.end_date, &mut errors);
        errors
    }
}

// =============================================================================
// TAGGED INSTRUMENTS
// =============================================================================

/// An instrument of a pricing request, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InstrumentConfig {
    /// A fixed coupon.
    FixedCoupon(FixedCouponConfig),
    /// A floating coupon.
    FloatingCoupon(FloatingCouponConfig),
    /// A fixed leg.
    FixedLeg(FixedLegConfig),
    /// A floating leg.
    FloatingLeg(FloatingLegConfig),
    /// A swap.
    Swap(SwapConfig),
}

impl InstrumentConfig {
    /// Instrument kinds that can be configured.
    pub const KINDS: [InstrumentKind; 5] = [
        InstrumentKind::FixedCoupon,
        InstrumentKind::FloatingCoupon,
        InstrumentKind::FixedLeg,
        InstrumentKind::FloatingLeg,
        InstrumentKind::Swap,
    ];

    /// Returns the instrument kind.
    pub fn kind(&self) -> InstrumentKind {
        match self {
            InstrumentConfig::FixedCoupon(_) => InstrumentKind::FixedCoupon,
            InstrumentConfig::FloatingCoupon(_) => InstrumentKind::FloatingCoupon,
            InstrumentConfig::FixedLeg(_) => InstrumentKind::FixedLeg,
            InstrumentConfig::FloatingLeg(_) => InstrumentKind::FloatingLeg,
            InstrumentConfig::Swap(_) => InstrumentKind::Swap,
        }
    }

    /// Builds the instrument.
    pub fn build(&self, index: &RateIndex, ctx: &PricingContext) -> ConfigResult<BuiltInstrument> {
        Ok(match self {
            InstrumentConfig::FixedCoupon(c) => BuiltInstrument::FixedCoupon(c.build()?),
            InstrumentConfig::FloatingCoupon(c) => {
                BuiltInstrument::FloatingCoupon(c.build(index, ctx)?)
            }
            InstrumentConfig::FixedLeg(c) => BuiltInstrument::FixedLeg(c.build()?),
            InstrumentConfig::FloatingLeg(c) => BuiltInstrument::FloatingLeg(c.build(index, ctx)?),
            InstrumentConfig::Swap(c) => BuiltInstrument::Swap(c.build(index, ctx)?),
        })
    }
}

impl Validate for InstrumentConfig {
    fn validate(&self) -> Vec<ValidationError> {
        match self {
            InstrumentConfig::FixedCoupon(c) => c.validate(),
            InstrumentConfig::FloatingCoupon(c) => c.validate(),
            InstrumentConfig::FixedLeg(c) => c.validate(),
            InstrumentConfig::FloatingLeg(c) => c.validate(),
            InstrumentConfig::Swap(c) => c.validate(),
        }
    }
}

/// An instrument built from its configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum BuiltInstrument {
    /// A fixed coupon.
    FixedCoupon(FixedCoupon),
    /// A floating coupon.
    FloatingCoupon(FloatingCoupon),
    /// A fixed leg.
    FixedLeg(FixedLeg),
    /// A floating leg.
    FloatingLeg(FloatingLeg),
    /// A swap.
    Swap(Swap),
}

impl BuiltInstrument {
    /// Borrows the instrument for pricing.
    pub fn as_instrument(&self) -> Instrument<'_> {
        match self {
            BuiltInstrument::FixedCoupon(c) => Instrument::FixedCoupon(c),
            BuiltInstrument::FloatingCoupon(c) => Instrument::FloatingCoupon(c),
            BuiltInstrument::FixedLeg(l) => Instrument::FixedLeg(l),
            BuiltInstrument::FloatingLeg(l) => Instrument::FloatingLeg(l),
            BuiltInstrument::Swap(s) => Instrument::Swap(s),
        }
    }
}
