//! Error types for the Tenor core crate.
//!
//! This module defines the errors raised by date arithmetic, convention
//! parsing and schedule generation.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// The end of a date range is not after its start.
    #[error("Invalid date range: end {end} must be after start {start}")]
    InvalidDateRange {
        /// Start of the range.
        start: Date,
        /// End of the range.
        end: Date,
    },

    /// Payment frequency is unsupported or cannot be scheduled over the range.
    #[error("Invalid frequency '{frequency}': {reason}")]
    InvalidFrequency {
        /// The offending frequency.
        frequency: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A tenor string such as "6M" could not be parsed.
    #[error("Invalid period '{input}': expected <integer><D|W|M|Y>")]
    InvalidPeriod {
        /// The input that failed to parse.
        input: String,
    },

    /// A convention name is not in the supported set.
    #[error("Unsupported {kind} '{name}'")]
    UnsupportedConvention {
        /// Kind of convention (calendar, day count, ...).
        kind: &'static str,
        /// The name that was requested.
        name: String,
    },

    /// Input failed validation.
    #[error("Validation failed for {field}: {reason}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Description of the failure.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid date range error.
    #[must_use]
    pub fn invalid_date_range(start: Date, end: Date) -> Self {
        Self::InvalidDateRange { start, end }
    }

    /// Creates an invalid frequency error.
    #[must_use]
    pub fn invalid_frequency(frequency: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFrequency {
            frequency: frequency.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unsupported convention error.
    #[must_use]
    pub fn unsupported(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnsupportedConvention {
            kind,
            name: name.into(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
