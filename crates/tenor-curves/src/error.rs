//! Error types for curve operations.

use tenor_core::{CoreError, Date};
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Requested date is outside the pillar range and extrapolation is off.
    #[error("Date {date} (t={time:.6}) out of curve range [{min:.6}, {max:.6}]")]
    OutOfRange {
        /// The requested date.
        date: Date,
        /// The requested time in years from the value date.
        time: f64,
        /// First pillar time.
        min: f64,
        /// Last pillar time.
        max: f64,
    },

    /// A pillar failed validation.
    #[error("Invalid pillar at {date}: {reason}")]
    InvalidPillar {
        /// Pillar date.
        date: Date,
        /// Why it was rejected.
        reason: String,
    },

    /// Not enough pillars for the interpolation method.
    #[error("Insufficient pillars for {method} interpolation: need at least {required}, got {got}")]
    InsufficientPillars {
        /// Interpolation method name.
        method: &'static str,
        /// Minimum required pillars.
        required: usize,
        /// Actual number of pillars.
        got: usize,
    },

    /// Interpolation space name is not supported.
    #[error("Unsupported interpolation space '{name}': expected discount, log_discount or zero")]
    UnsupportedInterpolationSpace {
        /// The requested name.
        name: String,
    },

    /// Interpolation method name is not supported.
    #[error("Unsupported interpolation method '{name}': expected linear or cubic")]
    UnsupportedInterpolationMethod {
        /// The requested name.
        name: String,
    },

    /// Interpolation failed.
    #[error("Interpolation error: {reason}")]
    Interpolation {
        /// Description of the interpolation error.
        reason: String,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why the value is invalid.
        reason: String,
    },

    /// Error from date and convention handling.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates an invalid pillar error.
    #[must_use]
    pub fn invalid_pillar(date: Date, reason: impl Into<String>) -> Self {
        Self::InvalidPillar {
            date,
            reason: reason.into(),
        }
    }

    /// Creates an interpolation error.
    #[must_use]
    pub fn interpolation(reason: impl Into<String>) -> Self {
        Self::Interpolation {
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}
