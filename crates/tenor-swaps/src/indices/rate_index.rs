//! Floating rate index with fixings and a projection curve.

use std::fmt;
use std::sync::Arc;

use log::debug;

use tenor_core::{Date, DayCountConvention};
use tenor_curves::{CurveResult, RateCurve};

use super::FixingStore;
use crate::error::{SwapError, SwapResult};

/// Name of the index used when none is configured.
pub const DEFAULT_INDEX_NAME: &str = "EURIBOR3M";

/// A named floating rate index.
///
/// Past rates come from a [`FixingStore`]; future rates are projected as
/// simply compounded forwards on the index's curve. Both are held in `Arc`s
/// so one index can be cloned into many legs and read from many threads.
#[derive(Clone)]
pub struct RateIndex {
    name: String,
    fixings: Arc<FixingStore>,
    projection: Arc<dyn RateCurve>,
}

impl RateIndex {
    /// Creates an index with an empty private fixing store.
    #[must_use]
    pub fn new(name: impl Into<String>, projection: Arc<dyn RateCurve>) -> Self {
        Self {
            name: name.into(),
            fixings: Arc::new(FixingStore::new()),
            projection,
        }
    }

    /// Reads and records fixings in a shared store.
    #[must_use]
    pub fn with_fixing_store(mut self, fixings: Arc<FixingStore>) -> Self {
        self.fixings = fixings;
        self
    }

    /// Returns the index name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fixing published on `date`, if one was recorded.
    #[must_use]
    pub fn try_fixing(&self, date: Date) -> Option<f64> {
        self.fixings.get_fixing(&self.name, date)
    }

    /// Projects the simply compounded forward rate over `[start, end]`.
    pub fn project_forward(
        &self,
        start: Date,
        end: Date,
        day_count: DayCountConvention,
    ) -> CurveResult<f64> {
        self.projection.forward_rate(start, end, day_count)
    }

    /// Records a fixing.
    ///
    /// # Errors
    ///
    /// Returns `SwapError::Validation` if the rate is not finite.
    pub fn add_fixing(&self, date: Date, rate: f64) -> SwapResult<()> {
        if !rate.is_finite() {
            return Err(SwapError::validation(
                "fixing",
                format!("{} fixing on {date} must be finite, got {rate}", self.name),
            ));
        }
        debug!("{} fixing {date} = {rate}", self.name);
        self.fixings.add_fixing(&self.name, date, rate);
        Ok(())
    }

    /// Returns the store the index reads from.
    #[must_use]
    pub fn fixing_store(&self) -> &Arc<FixingStore> {
        &self.fixings
    }

    /// Returns the projection curve.
    #[must_use]
    pub fn projection_curve(&self) -> &Arc<dyn RateCurve> {
        &self.projection
    }
}

impl fmt::Debug for RateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateIndex")
            .field("name", &self.name)
            .field("fixings", &self.fixings.count(&self.name))
            .field("projection_reference", &self.projection.reference_date())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenor_curves::FlatForwardCurve;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn flat_index(rate: f64) -> RateIndex {
        let curve =
            FlatForwardCurve::new(date(2025, 1, 31), rate, DayCountConvention::Actual360).unwrap();
        RateIndex::new(DEFAULT_INDEX_NAME, Arc::new(curve))
    }

    #[test]
    fn test_fixing_lookup() {
        let index = flat_index(0.03);
        assert_eq!(index.try_fixing(date(2025, 1, 29)), None);

        index.add_fixing(date(2025, 1, 29), 0.025).unwrap();
        assert_eq!(index.try_fixing(date(2025, 1, 29)), Some(0.025));
    }

    #[test]
    fn test_non_finite_fixing_is_rejected() {
        let index = flat_index(0.03);
        let err = index.add_fixing(date(2025, 1, 29), f64::NAN).unwrap_err();
        assert!(matches!(err, SwapError::Validation { .. }));
        assert_eq!(index.try_fixing(date(2025, 1, 29)), None);
    }

    #[test]
    fn test_projection_on_flat_curve() {
        let index = flat_index(0.03);
        let start = date(2025, 1, 31);
        let end = date(2025, 4, 30);

        let forward = index
            .project_forward(start, end, DayCountConvention::Actual360)
            .unwrap();
        let tau: f64 = 89.0 / 360.0;
        assert_relative_eq!(forward, ((0.03 * tau).exp() - 1.0) / tau, epsilon = 1e-14);
    }

    #[test]
    fn test_shared_store_is_visible_to_clones() {
        let store = Arc::new(FixingStore::new());
        let index = flat_index(0.03).with_fixing_store(Arc::clone(&store));
        let clone = index.clone();

        index.add_fixing(date(2025, 1, 29), 0.025).unwrap();
        assert_eq!(clone.try_fixing(date(2025, 1, 29)), Some(0.025));
        assert_eq!(store.count(DEFAULT_INDEX_NAME), 1);
    }
}
