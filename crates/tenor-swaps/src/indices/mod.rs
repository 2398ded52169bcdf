//! Rate indices and their fixings.
//!
//! - [`FixingStore`]: thread-safe historical fixings keyed by index name
//! - [`RateIndex`]: fixing lookup first, curve projection otherwise

mod fixing_store;
mod rate_index;

pub use fixing_store::{FixingStore, IndexFixing};
pub use rate_index::{RateIndex, DEFAULT_INDEX_NAME};
