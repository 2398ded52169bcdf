//! Discount curve configuration.

use serde::{Deserialize, Serialize};

use tenor_core::{BusinessDayConvention, CalendarId, Date, DayCountConvention, Period};
use tenor_curves::{
    DiscountCurve, DiscountCurveBuilder, InterpolationMethod, InterpolationSpace, DEFAULT_CURRENCY,
    DEFAULT_CURVE_ID,
};

use crate::error::{ConfigResult, Validate, ValidationError};

/// Where a pillar sits: a date, or a tenor from the value date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PillarPoint {
    /// An explicit date, e.g. "2025-04-30".
    Date(Date),
    /// A tenor such as "6M" or "1Y".
    Tenor(Period),
}

/// Configuration of a [`DiscountCurve`].
///
/// Pillars are `[point, discount_factor]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountCurveConfig {
    /// Curve identifier.
    #[serde(default = "default_curve_id")]
    pub curve_id: String,

    /// Valuation date of the curve.
    pub value_date: Date,

    /// Pillars in increasing order.
    pub pillars: Vec<(PillarPoint, f64)>,

    /// Interpolation method.
    #[serde(default)]
    pub interp_method: InterpolationMethod,

    /// Quantity the interpolation runs on.
    #[serde(default)]
    pub interpolation_on: InterpolationSpace,

    /// Whether queries outside the pillars extrapolate.
    #[serde(default)]
    pub allow_extrapolation: bool,

    /// Day count for curve times.
    #[serde(default)]
    pub day_count: DayCountConvention,

    /// Calendar used to resolve tenor pillars.
    #[serde(default)]
    pub calendar: CalendarId,

    /// Convention used to resolve tenor pillars.
    #[serde(default = "default_curve_convention")]
    pub business_day_convention: BusinessDayConvention,

    /// Curve currency.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_curve_id() -> String {
    DEFAULT_CURVE_ID.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_curve_convention() -> BusinessDayConvention {
    BusinessDayConvention::ModifiedFollowing
}

impl DiscountCurveConfig {
    /// Creates a configuration with default conventions and no pillars.
    pub fn new(value_date: Date) -> Self {
        Self {
            curve_id: default_curve_id(),
            value_date,
            pillars: Vec::new(),
            interp_method: InterpolationMethod::default(),
            interpolation_on: InterpolationSpace::default(),
            allow_extrapolation: false,
            day_count: DayCountConvention::default(),
            calendar: CalendarId::default(),
            business_day_convention: default_curve_convention(),
            currency: default_currency(),
        }
    }

    /// Builder method to add a dated pillar.
    pub fn with_pillar(mut self, date: Date, discount_factor: f64) -> Self {
        self.pillars.push((PillarPoint::Date(date), discount_factor));
        self
    }

    /// Builder method to add a tenor pillar.
    pub fn with_tenor_pillar(mut self, tenor: Period, discount_factor: f64) -> Self {
        self.pillars.push((PillarPoint::Tenor(tenor), discount_factor));
        self
    }

    /// Builder method to set the interpolation space.
    pub fn with_interpolation_on(mut self, space: InterpolationSpace) -> Self {
        self.interpolation_on = space;
        self
    }

    /// Builds the curve.
    pub fn build(&self) -> ConfigResult<DiscountCurve> {
        self.validate_or_error()?;

        let builder = DiscountCurveBuilder::new(self.value_date)
            .with_method(self.interp_method)
            .with_interpolation_space(self.interpolation_on)
            .with_extrapolation(self.allow_extrapolation)
            .with_day_count(self.day_count)
            .with_calendar(self.calendar)
            .with_business_day_convention(self.business_day_convention)
            .with_curve_id(self.curve_id.clone())
            .with_currency(self.currency.clone());

        let builder = self
            .pillars
            .iter()
            .fold(builder, |b, (point, df)| match point {
                PillarPoint::Date(date) => b.add_pillar(*date, *df),
                PillarPoint::Tenor(tenor) => b.add_tenor_pillar(*tenor, *df),
            });

        Ok(builder.build()?)
    }
}

impl Validate for DiscountCurveConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.curve_id.is_empty() {
            errors.push(ValidationError::new("curve_id", "Curve id cannot be empty"));
        }

        if self.pillars.is_empty() {
            errors.push(ValidationError::with_rule(
                "pillars",
                "At least one pillar is required",
                "non_empty",
            ));
        }

        for (i, (_, df)) in self.pillars.iter().enumerate() {
            if !(*df > 0.0 && *df <= 1.5) {
                errors.push(ValidationError::with_rule(
                    format!("pillars[{i}]"),
                    format!("Discount factor must be in (0, 1.5], got {df}"),
                    "discount_factor_range",
                ));
            }
        }

        let dated: Vec<(usize, Date)> = self
            .pillars
            .iter()
            .enumerate()
            .filter_map(|(i, (point, _))| match point {
                PillarPoint::Date(date) => Some((i, *date)),
                PillarPoint::Tenor(_) => None,
            })
            .collect();
        for pair in dated.windows(2) {
            let ((_, prev), (i, date)) = (pair[0], pair[1]);
            if date <= prev {
                errors.push(ValidationError::with_rule(
                    format!("pillars[{i}]"),
                    format!("Pillar date {date} must be after {prev}"),
                    "increasing_dates",
                ));
            }
        }

        errors
    }
}
