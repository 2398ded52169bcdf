//! Error types for schedule, coupon, leg and swap construction.

use thiserror::Error;

use tenor_core::{CoreError, Date};
use tenor_curves::CurveError;

/// A specialized Result type for swap operations.
pub type SwapResult<T> = Result<T, SwapError>;

/// Errors that can occur while building coupons, legs and swaps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
    /// An input failed validation.
    #[error("Validation failed for {field}: {reason}")]
    Validation {
        /// The offending field.
        field: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A floating rate has neither a recorded fixing nor a projectable forward.
    #[error(
        "Missing fixing for {index} on {fixing_date}: no forward can be projected \
         from the evaluation date {evaluation_date}"
    )]
    MissingFixing {
        /// Index name.
        index: String,
        /// The fixing date that was looked up.
        fixing_date: Date,
        /// Evaluation date of the pricing context.
        evaluation_date: Date,
    },

    /// Core library error (dates, schedules, conventions).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Curve error raised while projecting a forward rate.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl SwapError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing fixing error.
    #[must_use]
    pub fn missing_fixing(index: impl Into<String>, fixing_date: Date, evaluation_date: Date) -> Self {
        Self::MissingFixing {
            index: index.into(),
            fixing_date,
            evaluation_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = SwapError::validation("notional", "must be positive, got -1");
        assert_eq!(
            err.to_string(),
            "Validation failed for notional: must be positive, got -1"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let start = Date::from_ymd(2025, 6, 30).unwrap();
        let end = Date::from_ymd(2025, 1, 31).unwrap();
        let err: SwapError = CoreError::invalid_date_range(start, end).into();

        assert!(matches!(err, SwapError::Core(CoreError::InvalidDateRange { .. })));
        assert!(err.to_string().starts_with("Invalid date range"));
    }

    #[test]
    fn test_missing_fixing_display() {
        let fixing = Date::from_ymd(2025, 1, 29).unwrap();
        let eval = Date::from_ymd(2025, 5, 2).unwrap();
        let err = SwapError::missing_fixing("EURIBOR3M", fixing, eval);
        assert!(err.to_string().contains("EURIBOR3M on 2025-01-29"));
    }
}
