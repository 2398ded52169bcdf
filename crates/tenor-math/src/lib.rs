//! # Tenor Math
//!
//! Numerical building blocks for the Tenor fixed income pricing library.
//!
//! This crate provides:
//!
//! - **Interpolation**: the [`Interpolator`](interpolation::Interpolator) trait
//!   with piecewise linear and cubic spline (natural or not-a-knot) implementations
//!
//! Both interpolators reproduce their knots exactly and, when extrapolation is
//! enabled, continue the boundary segment outside the knot range.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{CubicSpline, Interpolator, LinearInterpolator, SplineBoundary};
}

pub use error::{MathError, MathResult};
