//! Discount factor curve.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tenor_core::{BusinessDayConvention, Calendar, CalendarId, Date, DayCountConvention, Period};
use tenor_math::interpolation::{CubicSpline, Interpolator, LinearInterpolator};
use tenor_math::MathError;

use crate::error::{CurveError, CurveResult};
use crate::interpolation::{InterpolationMethod, InterpolationSpace};
use crate::traits::RateCurve;

/// Largest discount factor accepted on a pillar.
pub const MAX_DISCOUNT_FACTOR: f64 = 1.5;

/// Curve id used when none is given.
pub const DEFAULT_CURVE_ID: &str = "EUR_EONIA_DISC";

/// Currency used when none is given.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// A dated discount factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    /// Pillar date.
    pub date: Date,
    /// Discount factor from the value date to `date`.
    pub discount_factor: f64,
}

impl Pillar {
    /// Creates a new pillar.
    #[must_use]
    pub fn new(date: Date, discount_factor: f64) -> Self {
        Self {
            date,
            discount_factor,
        }
    }
}

/// A discount curve interpolated between pillars.
///
/// Pillar dates are converted into times from the value date with the curve's
/// day count, the discount factors are mapped into the chosen
/// [`InterpolationSpace`], and a [`LinearInterpolator`] or [`CubicSpline`] is
/// fitted through them. Queries invert the mapping.
///
/// The curve is immutable once built and is cheap to clone: the fitted
/// interpolator sits behind an `Arc`.
#[derive(Clone)]
pub struct DiscountCurve {
    curve_id: String,
    currency: String,
    value_date: Date,
    pillars: Vec<Pillar>,
    times: Vec<f64>,
    space: InterpolationSpace,
    method: InterpolationMethod,
    allow_extrapolation: bool,
    day_count: DayCountConvention,
    interpolator: Arc<dyn Interpolator>,
}

impl fmt::Debug for DiscountCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscountCurve")
            .field("curve_id", &self.curve_id)
            .field("value_date", &self.value_date)
            .field("pillars", &self.pillars.len())
            .field("space", &self.space)
            .field("method", &self.method)
            .field("allow_extrapolation", &self.allow_extrapolation)
            .field("day_count", &self.day_count)
            .finish_non_exhaustive()
    }
}

impl DiscountCurve {
    /// Builds a curve from dated pillars.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidPillar`] if a discount factor is outside
    ///   (0, 1.5], or dates (and their times) are not strictly increasing
    /// - [`CurveError::InsufficientPillars`] if the method needs more pillars
    pub fn new(
        value_date: Date,
        pillars: Vec<Pillar>,
        method: InterpolationMethod,
        space: InterpolationSpace,
        allow_extrapolation: bool,
        day_count: DayCountConvention,
    ) -> CurveResult<Self> {
        validate_pillars(&pillars)?;

        if pillars.len() < method.min_points() {
            return Err(CurveError::InsufficientPillars {
                method: method.name(),
                required: method.min_points(),
                got: pillars.len(),
            });
        }

        let times: Vec<f64> = pillars
            .iter()
            .map(|p| day_count.year_fraction(value_date, p.date))
            .collect();

        for (i, w) in times.windows(2).enumerate() {
            if w[1] <= w[0] {
                return Err(CurveError::invalid_pillar(
                    pillars[i + 1].date,
                    format!("time {:.6} does not increase under {day_count}", w[1]),
                ));
            }
        }

        let values: Vec<f64> = pillars
            .iter()
            .zip(&times)
            .map(|(p, &t)| space.to_space(p.discount_factor, t))
            .collect();

        let interpolator = fit(method, times.clone(), values, allow_extrapolation)?;

        log::debug!(
            "built discount curve at {value_date}: {} pillars, {method} on {space}, extrapolation {}",
            pillars.len(),
            if allow_extrapolation { "on" } else { "off" }
        );

        Ok(Self {
            curve_id: DEFAULT_CURVE_ID.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            value_date,
            pillars,
            times,
            space,
            method,
            allow_extrapolation,
            day_count,
            interpolator,
        })
    }

    /// Returns the discount factor for `date`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::OutOfRange`] when the date's time lies outside
    /// the pillar times and extrapolation is disabled.
    pub fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        let t = self.time(date);
        let value = self.interpolator.interpolate(t).map_err(|e| match e {
            MathError::ExtrapolationNotAllowed { min, max, .. } => CurveError::OutOfRange {
                date,
                time: t,
                min,
                max,
            },
            other => CurveError::interpolation(other.to_string()),
        })?;

        Ok(self.space.to_discount(value, t))
    }

    /// Continuously compounded zero rate to `date`.
    ///
    /// # Errors
    ///
    /// - [`CurveError::OutOfRange`] when `date` cannot be discounted
    /// - [`CurveError::InvalidValue`] at the value date, where no rate is defined
    pub fn zero_rate(&self, date: Date) -> CurveResult<f64> {
        RateCurve::zero_rate(self, date)
    }

    /// Simply compounded forward rate between two dates.
    ///
    /// # Errors
    ///
    /// - [`CurveError::OutOfRange`] when either date cannot be discounted
    /// - [`CurveError::Core`] when `end` does not follow `start`
    /// - [`CurveError::InvalidValue`] when the accrual is not positive
    pub fn forward_rate(
        &self,
        start: Date,
        end: Date,
        day_count: DayCountConvention,
    ) -> CurveResult<f64> {
        RateCurve::forward_rate(self, start, end, day_count)
    }

    /// Time in years from the value date under the curve day count.
    #[must_use]
    pub fn time(&self, date: Date) -> f64 {
        self.day_count.year_fraction(self.value_date, date)
    }

    /// Returns the value date.
    #[must_use]
    pub fn value_date(&self) -> Date {
        self.value_date
    }

    /// Returns the pillars.
    #[must_use]
    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    /// Returns the pillar times in years.
    #[must_use]
    pub fn pillar_times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the interpolation space.
    #[must_use]
    pub fn interpolation_space(&self) -> InterpolationSpace {
        self.space
    }

    /// Returns the interpolation method.
    #[must_use]
    pub fn interpolation_method(&self) -> InterpolationMethod {
        self.method
    }

    /// Returns true if queries outside the pillars are extrapolated.
    #[must_use]
    pub fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    /// Returns the day count used for curve times.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the last pillar date.
    #[must_use]
    pub fn max_date(&self) -> Date {
        self.pillars
            .last()
            .map_or(self.value_date, |pillar| pillar.date)
    }

    /// Returns the curve identifier.
    #[must_use]
    pub fn curve_id(&self) -> &str {
        &self.curve_id
    }

    /// Returns the curve currency.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl RateCurve for DiscountCurve {
    fn reference_date(&self) -> Date {
        self.value_date
    }

    fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        DiscountCurve::discount_factor(self, date)
    }
}

fn validate_pillars(pillars: &[Pillar]) -> CurveResult<()> {
    for pillar in pillars {
        let df = pillar.discount_factor;
        if !(df > 0.0 && df <= MAX_DISCOUNT_FACTOR) {
            return Err(CurveError::invalid_pillar(
                pillar.date,
                format!("discount factor {df} outside (0, {MAX_DISCOUNT_FACTOR}]"),
            ));
        }
    }

    for w in pillars.windows(2) {
        if w[1].date <= w[0].date {
            return Err(CurveError::invalid_pillar(
                w[1].date,
                format!("pillar dates must be strictly increasing (previous {})", w[0].date),
            ));
        }
    }

    Ok(())
}

fn fit(
    method: InterpolationMethod,
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
) -> CurveResult<Arc<dyn Interpolator>> {
    let to_curve_error = |e: MathError| CurveError::interpolation(e.to_string());

    let interpolator: Arc<dyn Interpolator> = match method {
        InterpolationMethod::Linear => {
            let linear = LinearInterpolator::new(xs, ys).map_err(to_curve_error)?;
            if allow_extrapolation {
                Arc::new(linear.with_extrapolation())
            } else {
                Arc::new(linear)
            }
        }
        InterpolationMethod::Cubic => {
            let spline = CubicSpline::not_a_knot(xs, ys).map_err(to_curve_error)?;
            if allow_extrapolation {
                Arc::new(spline.with_extrapolation())
            } else {
                Arc::new(spline)
            }
        }
    };

    Ok(interpolator)
}

/// A pillar given either as a date or as a tenor from the value date.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PillarSpec {
    Dated(Date),
    Tenor(Period),
}

/// Builder for [`DiscountCurve`].
///
/// Defaults: linear on discount factors, no extrapolation, Actual/360,
/// TARGET calendar and Modified Following for tenor pillars, curve id
/// `EUR_EONIA_DISC` in EUR.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{Date, Period};
/// use tenor_curves::prelude::*;
///
/// let value_date = Date::from_ymd(2025, 1, 31).unwrap();
/// let curve = DiscountCurveBuilder::new(value_date)
///     .add_tenor_pillar(Period::days(0), 1.0)
///     .add_tenor_pillar("6M".parse().unwrap(), 0.98)
///     .add_tenor_pillar("1Y".parse().unwrap(), 0.95)
///     .with_interpolation_space(InterpolationSpace::LogDiscount)
///     .with_extrapolation(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(curve.curve_id(), "EUR_EONIA_DISC");
/// ```
#[derive(Debug, Clone)]
pub struct DiscountCurveBuilder {
    value_date: Date,
    pillars: Vec<(PillarSpec, f64)>,
    method: InterpolationMethod,
    space: InterpolationSpace,
    allow_extrapolation: bool,
    day_count: DayCountConvention,
    calendar: CalendarId,
    convention: BusinessDayConvention,
    curve_id: String,
    currency: String,
}

impl DiscountCurveBuilder {
    /// Creates a builder for a curve valued at `value_date`.
    #[must_use]
    pub fn new(value_date: Date) -> Self {
        Self {
            value_date,
            pillars: Vec::new(),
            method: InterpolationMethod::default(),
            space: InterpolationSpace::default(),
            allow_extrapolation: false,
            day_count: DayCountConvention::Actual360,
            calendar: CalendarId::Target,
            convention: BusinessDayConvention::ModifiedFollowing,
            curve_id: DEFAULT_CURVE_ID.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Adds a dated pillar.
    #[must_use]
    pub fn add_pillar(mut self, date: Date, discount_factor: f64) -> Self {
        self.pillars.push((PillarSpec::Dated(date), discount_factor));
        self
    }

    /// Adds a pillar at a tenor from the value date.
    ///
    /// The tenor is resolved at build time with the builder's calendar and
    /// business day convention.
    #[must_use]
    pub fn add_tenor_pillar(mut self, tenor: Period, discount_factor: f64) -> Self {
        self.pillars.push((PillarSpec::Tenor(tenor), discount_factor));
        self
    }

    /// Sets the interpolation space.
    #[must_use]
    pub fn with_interpolation_space(mut self, space: InterpolationSpace) -> Self {
        self.space = space;
        self
    }

    /// Sets the interpolation method.
    #[must_use]
    pub fn with_method(mut self, method: InterpolationMethod) -> Self {
        self.method = method;
        self
    }

    /// Enables or disables extrapolation.
    #[must_use]
    pub fn with_extrapolation(mut self, allow: bool) -> Self {
        self.allow_extrapolation = allow;
        self
    }

    /// Sets the day count used for curve times.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the calendar used to resolve tenor pillars.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarId) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the convention used to resolve tenor pillars.
    #[must_use]
    pub fn with_business_day_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Sets the curve identifier.
    #[must_use]
    pub fn with_curve_id(mut self, curve_id: impl Into<String>) -> Self {
        self.curve_id = curve_id.into();
        self
    }

    /// Sets the curve currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Resolves tenor pillars and builds the curve.
    pub fn build(self) -> CurveResult<DiscountCurve> {
        let calendar = self.calendar.calendar();
        let mut pillars = Vec::with_capacity(self.pillars.len());

        for (spec, df) in &self.pillars {
            let date = match spec {
                PillarSpec::Dated(date) => *date,
                PillarSpec::Tenor(tenor) => {
                    calendar.advance_period(self.value_date, *tenor, self.convention)?
                }
            };
            pillars.push(Pillar::new(date, *df));
        }

        let mut curve = DiscountCurve::new(
            self.value_date,
            pillars,
            self.method,
            self.space,
            self.allow_extrapolation,
            self.day_count,
        )?;
        curve.curve_id = self.curve_id;
        curve.currency = self.currency;

        Ok(curve)
    }
}
