//! Configuration error types.

use thiserror::Error;

use tenor_curves::CurveError;
use tenor_pricing::PricingError;
use tenor_swaps::SwapError;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Validation error.
    #[error("Validation error on {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {}", join(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error, including unknown convention names.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The file could not be read.
    #[error("Cannot read {path}: {message}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        message: String,
    },

    /// The file extension maps to no supported format.
    #[error("Unsupported configuration format for {path}: expected .json or .toml")]
    UnsupportedFormat {
        /// Path that was read.
        path: String,
    },

    /// Curve construction failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Instrument construction failed.
    #[error(transparent)]
    Swap(#[from] SwapError),

    /// Pricing failed, or an instrument type is unsupported.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }

    /// Prefixes the field with the path of the enclosing config.
    #[must_use]
    pub fn nested(mut self, parent: &str) -> Self {
        self.field = format!("{parent}.{}", self.field);
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref rule) = self.rule {
            write!(f, "{}: {} (rule: {})", self.field, self.message, rule)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ConfigError::Deserialization(err.to_string())
        } else {
            ConfigError::Serialization(err.to_string())
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}

// Shared field checks, named after the rules they report.

pub(crate) fn check_notional(notional: f64, errors: &mut Vec<ValidationError>) {
    if !(notional.is_finite() && notional > 0.0) {
        errors.push(ValidationError::with_rule(
            "notional",
            format!("Notional must be strictly positive, got {notional}"),
            "positive_notional",
        ));
    }
}

pub(crate) fn check_fixed_rate(rate: f64, errors: &mut Vec<ValidationError>) {
    if !(0.0..=1.0).contains(&rate) {
        errors.push(ValidationError::with_rule(
            "fixed_rate",
            format!("Fixed rate must be between 0 and 1 (0.05 for 5%), got {rate}"),
            "rate_range",
        ));
    }
}

pub(crate) fn check_spread(spread: f64, errors: &mut Vec<ValidationError>) {
    if !spread.is_finite() {
        errors.push(ValidationError::with_rule(
            "spread",
            format!("Spread must be finite, got {spread}"),
            "finite_spread",
        ));
    }
}

pub(crate) fn check_dates<D: PartialOrd + std::fmt::Display>(
    start_field: &str,
    start: D,
    end: D,
    errors: &mut Vec<ValidationError>,
) {
    if end <= start {
        errors.push(ValidationError::with_rule(
            "end_date",
            format!("End date {end} must be after {start_field} {start}"),
            "end_after_start",
        ));
    }
}
