//! Pricing context threaded through rate resolution.

use serde::{Deserialize, Serialize};

use tenor_core::Date;

/// Market state shared by every floating-rate resolution of a pricing run.
///
/// Passed by value wherever a forward is projected; nothing reads an
/// implicit evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingContext {
    evaluation_date: Date,
}

impl PricingContext {
    /// Creates a context evaluated at `evaluation_date`.
    #[must_use]
    pub fn new(evaluation_date: Date) -> Self {
        Self { evaluation_date }
    }

    /// Returns the evaluation date.
    #[must_use]
    pub fn evaluation_date(&self) -> Date {
        self.evaluation_date
    }
}
