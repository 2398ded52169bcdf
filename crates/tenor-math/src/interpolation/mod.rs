//! Interpolation methods for curve construction.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: piecewise linear, C0
//! - [`CubicSpline`]: cubic spline, C2, with natural or not-a-knot ends
//!
//! Curves choose the space the values live in (discount factors, their logs
//! or zero rates); the interpolators only see `(x, y)` knots.

mod cubic_spline;
mod linear;

pub use cubic_spline::{CubicSpline, SplineBoundary};
pub use linear::LinearInterpolator;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
///
/// Implementations are immutable after construction and thread-safe, so a
/// fitted interpolator can sit behind an `Arc` shared by many curves.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }

    /// Rejects NaN and, unless extrapolation is allowed, points outside the
    /// knot range.
    fn check_domain(&self, x: f64) -> MathResult<()> {
        if x.is_nan() {
            return Err(MathError::invalid_input("query point is NaN"));
        }
        if !self.allows_extrapolation() && !self.in_range(x) {
            return Err(MathError::extrapolation_not_allowed(
                x,
                self.min_x(),
                self.max_x(),
            ));
        }
        Ok(())
    }
}

/// Validates a knot set: matching lengths, at least `required` points, finite
/// values and strictly increasing x.
pub(crate) fn validate_knots(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("knots must be finite"));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::invalid_input(
            "x values must be strictly increasing",
        ));
    }
    Ok(())
}

/// Index `i` of the segment `[xs[i], xs[i+1]]` used for `x`.
///
/// Points left of the first knot use the first segment and points right of
/// the last knot use the last one.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    let last = xs.len() - 2;
    xs.partition_point(|&k| k <= x).saturating_sub(1).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_find_segment() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(find_segment(&xs, -1.0), 0);
        assert_eq!(find_segment(&xs, 0.0), 0);
        assert_eq!(find_segment(&xs, 1.0), 1);
        assert_eq!(find_segment(&xs, 2.5), 2);
        assert_eq!(find_segment(&xs, 3.0), 2);
        assert_eq!(find_segment(&xs, 10.0), 2);
    }

    #[test]
    fn test_validate_knots() {
        assert!(validate_knots(&[0.0, 1.0], &[1.0, 2.0], 2).is_ok());
        assert!(matches!(
            validate_knots(&[0.0], &[1.0], 2),
            Err(MathError::InsufficientData { required: 2, actual: 1 })
        ));
        assert!(validate_knots(&[0.0, 1.0], &[1.0], 2).is_err());
        assert!(validate_knots(&[1.0, 1.0], &[1.0, 2.0], 2).is_err());
        assert!(validate_knots(&[0.0, 1.0], &[1.0, f64::NAN], 2).is_err());
    }

    #[test]
    fn test_all_interpolators_through_points() {
        let times = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let rates = vec![0.02, 0.025, 0.03, 0.035, 0.04];

        let linear = LinearInterpolator::new(times.clone(), rates.clone()).unwrap();
        let spline = CubicSpline::new(times.clone(), rates.clone()).unwrap();

        for (t, r) in times.iter().zip(rates.iter()) {
            assert_relative_eq!(linear.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
            assert_relative_eq!(spline.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_nan_is_rejected_even_with_extrapolation() {
        let linear = LinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 0.9])
            .unwrap()
            .with_extrapolation();
        assert!(matches!(
            linear.interpolate(f64::NAN),
            Err(MathError::InvalidInput { .. })
        ));
    }
}
