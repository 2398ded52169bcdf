//! # Tenor Curves
//!
//! Discount and projection curves for the Tenor fixed income pricing library.
//!
//! This crate provides:
//!
//! - **Curve Trait**: [`RateCurve`], the discount-factor view shared by
//!   discounting and forward projection
//! - **Discount Curve**: [`DiscountCurve`] built from dated or tenor pillars,
//!   interpolated on discount factors, their logs or zero rates
//! - **Flat Curve**: [`FlatForwardCurve`], a continuously compounded flat
//!   curve for projection
//!
//! ## Quick Start
//!
//! ```rust
//! use tenor_curves::prelude::*;
//! use tenor_core::types::Date;
//!
//! let value_date = Date::from_ymd(2025, 1, 31).unwrap();
//! let curve = DiscountCurveBuilder::new(value_date)
//!     .add_pillar(value_date, 1.0)
//!     .add_pillar(Date::from_ymd(2025, 4, 30).unwrap(), 0.9925)
//!     .add_pillar(Date::from_ymd(2025, 7, 31).unwrap(), 0.985)
//!     .with_interpolation_space(InterpolationSpace::LogDiscount)
//!     .build()
//!     .unwrap();
//!
//! let df = curve.discount_factor(Date::from_ymd(2025, 3, 31).unwrap()).unwrap();
//! assert!(df < 1.0 && df > 0.9925);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod curves;
pub mod error;
pub mod interpolation;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curves::{DiscountCurve, DiscountCurveBuilder, FlatForwardCurve, Pillar};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::interpolation::{InterpolationMethod, InterpolationSpace};
    pub use crate::traits::RateCurve;
}

pub use curves::{
    DiscountCurve, DiscountCurveBuilder, FlatForwardCurve, Pillar, DEFAULT_CURRENCY, DEFAULT_CURVE_ID,
};
pub use error::{CurveError, CurveResult};
pub use interpolation::{InterpolationMethod, InterpolationSpace};
pub use traits::RateCurve;
