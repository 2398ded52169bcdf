//! Historical fixings for rate indices.
//!
//! A [`FixingStore`] is shared by every index that reads from it. Lookups take
//! a read lock and inserts take a write lock, so a pricing thread never sees
//! a half-written fixing.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use tenor_core::Date;

/// A single published fixing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexFixing {
    /// The fixing date.
    pub date: Date,
    /// The fixing rate (as decimal, e.g., 0.025 for 2.5%).
    pub rate: f64,
}

impl IndexFixing {
    /// Creates a new fixing.
    #[must_use]
    pub fn new(date: Date, rate: f64) -> Self {
        Self { date, rate }
    }
}

/// Thread-safe storage of fixings keyed by index name, then date.
///
/// # Example
///
/// ```rust
/// use tenor_core::Date;
/// use tenor_swaps::indices::FixingStore;
///
/// let store = FixingStore::new();
/// let date = Date::from_ymd(2025, 1, 29).unwrap();
/// store.add_fixing("EURIBOR3M", date, 0.025);
///
/// assert_eq!(store.get_fixing("EURIBOR3M", date), Some(0.025));
/// assert_eq!(store.get_fixing("EURIBOR6M", date), None);
/// ```
#[derive(Debug, Default)]
pub struct FixingStore {
    fixings: RwLock<BTreeMap<String, BTreeMap<Date, f64>>>,
}

impl FixingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fixing, replacing any previous value for the same date.
    pub fn add_fixing(&self, index: &str, date: Date, rate: f64) {
        self.fixings
            .write()
            .entry(index.to_string())
            .or_default()
            .insert(date, rate);
    }

    /// Records several fixings for one index under a single write lock.
    pub fn add_fixings(&self, index: &str, fixings: impl IntoIterator<Item = IndexFixing>) {
        let mut guard = self.fixings.write();
        let dates = guard.entry(index.to_string()).or_default();
        for fixing in fixings {
            dates.insert(fixing.date, fixing.rate);
        }
    }

    /// Returns the fixing published on `date`, if any.
    #[must_use]
    pub fn get_fixing(&self, index: &str, date: Date) -> Option<f64> {
        self.fixings
            .read()
            .get(index)
            .and_then(|dates| dates.get(&date).copied())
    }

    /// Returns the most recent fixing on or before `date`.
    #[must_use]
    pub fn last_fixing_before(&self, index: &str, date: Date) -> Option<IndexFixing> {
        self.fixings.read().get(index).and_then(|dates| {
            dates
                .range(..=date)
                .next_back()
                .map(|(d, r)| IndexFixing::new(*d, *r))
        })
    }

    /// Returns every fixing of an index in date order.
    #[must_use]
    pub fn fixings(&self, index: &str) -> Vec<IndexFixing> {
        self.fixings
            .read()
            .get(index)
            .map(|dates| dates.iter().map(|(d, r)| IndexFixing::new(*d, *r)).collect())
            .unwrap_or_default()
    }

    /// Returns the number of fixings recorded for an index.
    #[must_use]
    pub fn count(&self, index: &str) -> usize {
        self.fixings.read().get(index).map_or(0, BTreeMap::len)
    }

    /// Removes every fixing of an index.
    pub fn clear_index(&self, index: &str) {
        self.fixings.write().remove(index);
    }
}
