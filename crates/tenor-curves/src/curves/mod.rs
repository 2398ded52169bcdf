//! Curve implementations.
//!
//! - [`DiscountCurve`]: interpolated pillar curve used for discounting
//! - [`FlatForwardCurve`]: single continuously compounded rate

mod discount;
mod flat;

pub use discount::{DiscountCurve, DiscountCurveBuilder, Pillar, DEFAULT_CURRENCY, DEFAULT_CURVE_ID};
pub use flat::FlatForwardCurve;
