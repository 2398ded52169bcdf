//! Cubic spline interpolation.

use super::{find_segment, validate_knots, Interpolator};
use crate::error::MathResult;

/// End conditions closing the spline system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplineBoundary {
    /// Zero second derivative at both end knots.
    #[default]
    Natural,
    /// Continuous third derivative at the second and second-to-last knots,
    /// so the first two and last two pieces are each one cubic.
    NotAKnot,
}

impl SplineBoundary {
    /// Minimum number of knots the end conditions need.
    #[must_use]
    pub fn min_points(&self) -> usize {
        match self {
            SplineBoundary::Natural => 3,
            SplineBoundary::NotAKnot => 4,
        }
    }
}

/// Cubic spline interpolation.
///
/// Piecewise cubic polynomials with continuous first and second derivatives,
/// closed by a [`SplineBoundary`]. A not-a-knot spline reproduces any cubic
/// polynomial exactly; a natural spline is linear at its ends.
///
/// Outside the knot range, when extrapolation is enabled, the first or last
/// cubic piece is evaluated as is.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{CubicSpline, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
/// assert!((spline.interpolate(2.0).unwrap() - 4.0).abs() < 1e-12);
///
/// // Through four points of x^2 the not-a-knot spline is x^2 itself
/// let exact = CubicSpline::not_a_knot(xs, ys).unwrap();
/// assert!((exact.interpolate(1.5).unwrap() - 2.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
    boundary: SplineBoundary,
    allow_extrapolation: bool,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 points, the lengths differ,
    /// a value is not finite or `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        Self::with_boundary(xs, ys, SplineBoundary::Natural)
    }

    /// Creates a not-a-knot cubic spline interpolator.
    ///
    /// # Errors
    ///
    /// As [`CubicSpline::new`], with at least 4 points required.
    pub fn not_a_knot(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        Self::with_boundary(xs, ys, SplineBoundary::NotAKnot)
    }

    /// Creates a cubic spline with the given end conditions.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than `boundary.min_points()`
    /// points, the lengths differ, a value is not finite or `xs` is not
    /// strictly increasing.
    pub fn with_boundary(xs: Vec<f64>, ys: Vec<f64>, boundary: SplineBoundary) -> MathResult<Self> {
        validate_knots(&xs, &ys, boundary.min_points())?;

        let y2s = match boundary {
            SplineBoundary::Natural => natural_second_derivatives(&xs, &ys),
            SplineBoundary::NotAKnot => not_a_knot_second_derivatives(&xs, &ys),
        };
        log::trace!("fitted {boundary:?} cubic spline over {} knots", xs.len());

        Ok(Self {
            xs,
            ys,
            y2s,
            boundary,
            allow_extrapolation: false,
        })
    }

    /// Returns the end conditions.
    #[must_use]
    pub fn boundary(&self) -> SplineBoundary {
        self.boundary
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Segment index, width and the weights `a = (x_hi - x)/h`, `b = (x - x_lo)/h`.
    fn weights(&self, x: f64) -> (usize, f64, f64, f64) {
        let i = find_segment(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        (i, h, a, b)
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_domain(x)?;

        let (i, h, a, b) = self.weights(x);
        let y = a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.y2s[i] + (b * b * b - b) * self.y2s[i + 1]) * (h * h) / 6.0;

        Ok(y)
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_domain(x)?;

        let (i, h, a, b) = self.weights(x);
        let dy = (self.ys[i + 1] - self.ys[i]) / h
            - (3.0 * a * a - 1.0) / 6.0 * h * self.y2s[i]
            + (3.0 * b * b - 1.0) / 6.0 * h * self.y2s[i + 1];

        Ok(dy)
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Second derivatives at the knots of a natural spline (tridiagonal solve).
fn natural_second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    let mut u = vec![0.0; n - 1];

    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2s[i - 1] + 2.0;
        y2s[i] = (sig - 1.0) / p;
        let slope_change =
            (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]) - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * slope_change / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    y2s[n - 1] = 0.0;
    for i in (0..n - 1).rev() {
        y2s[i] = y2s[i] * y2s[i + 1] + u[i];
    }

    y2s
}

/// Second derivatives at the knots of a not-a-knot spline.
///
/// The end conditions tie `M0` to `M1, M2` and `M[n-1]` to `M[n-2], M[n-3]`.
/// Substituting them into the first and last smoothness rows leaves a
/// tridiagonal system in the interior second derivatives.
fn not_a_knot_second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let slope: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

    // Row k is the smoothness equation at knot k + 1
    let m = n - 2;
    let mut sub = vec![0.0; m];
    let mut diag = vec![0.0; m];
    let mut sup = vec![0.0; m];
    let mut rhs = vec![0.0; m];
    for k in 0..m {
        sub[k] = h[k];
        diag[k] = 2.0 * (h[k] + h[k + 1]);
        sup[k] = h[k + 1];
        rhs[k] = 6.0 * (slope[k + 1] - slope[k]);
    }

    let (h0, h1) = (h[0], h[1]);
    diag[0] += h0 * (h0 + h1) / h1;
    sup[0] -= h0 * h0 / h1;

    let (ha, hb) = (h[n - 3], h[n - 2]);
    diag[m - 1] += hb * (ha + hb) / ha;
    sub[m - 1] -= hb * hb / ha;

    for k in 1..m {
        let w = sub[k] / diag[k - 1];
        diag[k] -= w * sup[k - 1];
        rhs[k] -= w * rhs[k - 1];
    }

    let mut y2s = vec![0.0; n];
    y2s[m] = rhs[m - 1] / diag[m - 1];
    for k in (0..m - 1).rev() {
        y2s[k + 1] = (rhs[k] - sup[k] * y2s[k + 2]) / diag[k];
    }

    y2s[0] = ((h0 + h1) * y2s[1] - h0 * y2s[2]) / h1;
    y2s[n - 1] = ((ha + hb) * y2s[n - 2] - hb * y2s[n - 3]) / ha;

    y2s
}
