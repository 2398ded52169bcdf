//! Error types for the pricing framework.

use thiserror::Error;

use tenor_core::CoreError;
use tenor_curves::CurveError;
use tenor_swaps::SwapError;

/// Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur while pricing instruments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// The pricer cannot value this kind of instrument.
    #[error("Unsupported instrument type '{kind}'")]
    UnsupportedInstrument {
        /// Instrument type name as requested.
        kind: String,
    },

    /// No pricer is registered under this name.
    #[error("Unsupported pricer type '{name}': expected DISCOUNTING")]
    UnsupportedPricer {
        /// Pricer name as requested.
        name: String,
    },

    /// Curve error during discount factor lookup.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Error while building the priced instrument.
    #[error(transparent)]
    Swap(#[from] SwapError),

    /// Core library error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PricingError {
    /// Creates an unsupported instrument error.
    #[must_use]
    pub fn unsupported_instrument(kind: impl Into<String>) -> Self {
        Self::UnsupportedInstrument { kind: kind.into() }
    }

    /// Creates an unsupported pricer error.
    #[must_use]
    pub fn unsupported_pricer(name: impl Into<String>) -> Self {
        Self::UnsupportedPricer { name: name.into() }
    }
}
