//! Rate index configuration.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use tenor_core::{Date, DayCountConvention};
use tenor_curves::{DiscountCurve, FlatForwardCurve, RateCurve};
use tenor_swaps::RateIndex;

use crate::error::{ConfigResult, Validate, ValidationError};

/// The curve forwards are projected from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionConfig {
    /// Project on the request's discount curve.
    #[default]
    DiscountCurve,
    /// Project on a flat continuously compounded rate.
    FlatRate {
        /// The flat rate (0.03 for 3%).
        rate: f64,
        /// Day count of the flat curve.
        #[serde(default)]
        day_count: DayCountConvention,
    },
}

/// Configuration of a floating rate index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Index name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Recorded fixings by date.
    #[serde(default)]
    pub fixings: BTreeMap<Date, f64>,

    /// Projection curve for unfixed coupons.
    #[serde(default)]
    pub projection: ProjectionConfig,
}

fn default_name() -> String {
    tenor_swaps::indices::DEFAULT_INDEX_NAME.to_string()
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            fixings: BTreeMap::new(),
            projection: ProjectionConfig::default(),
        }
    }
}

impl IndexConfig {
    /// Builds the index, projecting on `curve` or on a flat curve anchored
    /// at the curve's value date.
    pub fn build(&self, curve: &Arc<DiscountCurve>) -> ConfigResult<RateIndex> {
        self.validate_or_error()?;

        let projection: Arc<dyn RateCurve> = match self.projection {
            ProjectionConfig::DiscountCurve => curve.clone(),
            ProjectionConfig::FlatRate { rate, day_count } => Arc::new(FlatForwardCurve::new(
                curve.value_date(),
                rate,
                day_count,
            )?),
        };

        let index = RateIndex::new(self.name.clone(), projection);
        for (date, rate) in &self.fixings {
            index.add_fixing(*date, *rate)?;
        }
        Ok(index)
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(ValidationError::new("name", "Index name cannot be empty"));
        }

        for (date, rate) in &self.fixings {
            if !rate.is_finite() {
                errors.push(ValidationError::with_rule(
                    format!("fixings.{date}"),
                    format!("Fixing must be finite, got {rate}"),
                    "finite_fixing",
                ));
            }
        }

        if let ProjectionConfig::FlatRate { rate, .. } = self.projection {
            if !rate.is_finite() {
                errors.push(ValidationError::with_rule(
                    "projection.rate",
                    format!("Flat rate must be finite, got {rate}"),
                    "finite_rate",
                ));
            }
        }

        errors
    }
}
