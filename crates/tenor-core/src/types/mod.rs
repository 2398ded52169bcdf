//! Domain types for schedule and curve calculations.
//!
//! - [`Date`]: Calendar date with month arithmetic
//! - [`Period`]: Tenor such as "2D" or "6M"
//! - [`Frequency`]: Payment frequency of a leg

mod date;
mod frequency;
mod period;

pub use date::Date;
pub use frequency::Frequency;
pub use period::{Period, TimeUnit};
