//! Property tests for the interpolators.
//!
//! Knots are reproduced exactly, values stay inside the convex hull of a
//! linear segment, and out-of-range queries fail unless extrapolation is on.

use proptest::prelude::*;
use tenor_math::prelude::*;

/// Strictly increasing knot times in (0, 30] with discount-factor-like values.
fn knots(min: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.05f64..3.0, 0.5f64..1.2), min..12).prop_map(|steps| {
        let mut t = 0.0;
        let mut xs = Vec::with_capacity(steps.len());
        let mut ys = Vec::with_capacity(steps.len());
        for (dt, y) in steps {
            t += dt;
            xs.push(t);
            ys.push(y);
        }
        (xs, ys)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn linear_reproduces_knots((xs, ys) in knots(2)) {
        let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            prop_assert!((interp.interpolate(*x).unwrap() - y).abs() < 1e-12);
        }
    }

    #[test]
    fn cubic_reproduces_knots((xs, ys) in knots(3)) {
        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            prop_assert!((spline.interpolate(*x).unwrap() - y).abs() < 1e-10);
        }
    }

    #[test]
    fn not_a_knot_reproduces_knots((xs, ys) in knots(4)) {
        let spline = CubicSpline::not_a_knot(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            prop_assert!((spline.interpolate(*x).unwrap() - y).abs() < 1e-9);
        }
    }

    #[test]
    fn linear_stays_between_neighbours((xs, ys) in knots(2), w in 0.0f64..1.0) {
        let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        for i in 0..xs.len() - 1 {
            let x = xs[i] + w * (xs[i + 1] - xs[i]);
            let y = interp.interpolate(x).unwrap();
            let lo = ys[i].min(ys[i + 1]);
            let hi = ys[i].max(ys[i + 1]);
            prop_assert!(y >= lo - 1e-12 && y <= hi + 1e-12);
        }
    }

    #[test]
    fn out_of_range_is_an_error_not_nan((xs, ys) in knots(3), gap in 0.01f64..5.0) {
        let linear = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
        let beyond = xs[xs.len() - 1] + gap;

        let is_range_error = |r: MathResult<f64>| {
            matches!(r, Err(MathError::ExtrapolationNotAllowed { .. }))
        };
        prop_assert!(is_range_error(linear.interpolate(beyond)));
        prop_assert!(is_range_error(spline.interpolate(beyond)));
        prop_assert!(is_range_error(spline.interpolate(xs[0] - gap)));

        let extrapolating = spline.with_extrapolation();
        prop_assert!(extrapolating.interpolate(beyond).unwrap().is_finite());
    }
}
