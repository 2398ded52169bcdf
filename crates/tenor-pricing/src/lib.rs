//! # Tenor Pricing
//!
//! Present values of coupons, legs and swaps for the Tenor fixed income
//! pricing library.
//!
//! This crate provides:
//!
//! - **Pricer Trait**: [`Pricer`], valuing a borrowed [`Instrument`] on any
//!   [`RateCurve`](tenor_curves::RateCurve)
//! - **Discounting**: [`DiscountingPricer`], `amount * df(payment_date)` per
//!   cash flow, summed over legs and netted over swaps
//! - **Batch Pricing**: parallel valuation of independent instruments
//! - **Reports**: per cash flow amounts, discount factors and present values
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use tenor_core::{Date, DayCountConvention, Frequency};
//! use tenor_curves::{DiscountCurveBuilder, FlatForwardCurve, InterpolationSpace};
//! use tenor_pricing::prelude::*;
//! use tenor_swaps::prelude::*;
//!
//! let today = Date::from_ymd(2025, 1, 31).unwrap();
//! let curve = DiscountCurveBuilder::new(today)
//!     .add_pillar(today, 1.0)
//!     .add_pillar(Date::from_ymd(2025, 7, 31).unwrap(), 0.985)
//!     .add_pillar(Date::from_ymd(2026, 7, 31).unwrap(), 0.955)
//!     .with_interpolation_space(InterpolationSpace::LogDiscount)
//!     .build()
//!     .unwrap();
//!
//! let projection = FlatForwardCurve::new(today, 0.03, DayCountConvention::Actual360).unwrap();
//! let index = RateIndex::new("EURIBOR3M", Arc::new(projection));
//! let terms = SwapTerms::new(
//!     today,
//!     Date::from_ymd(2026, 7, 31).unwrap(),
//!     1_000_000.0,
//!     0.05,
//!     Frequency::SemiAnnual,
//!     Frequency::Quarterly,
//! );
//! let swap = Swap::new(terms, &index, &PricingContext::new(today)).unwrap();
//!
//! let npv = DiscountingPricer::new()
//!     .price(Instrument::Swap(&swap), &curve)
//!     .unwrap();
//! assert!(npv > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod discounting;
pub mod error;
pub mod instrument;
pub mod pricer;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::discounting::{DiscountedCashFlow, DiscountingPricer};
    pub use crate::error::{PricingError, PricingResult};
    pub use crate::instrument::{Instrument, InstrumentKind};
    pub use crate::pricer::{Pricer, PricerType};
}

pub use discounting::{DiscountedCashFlow, DiscountingPricer};
pub use error::{PricingError, PricingResult};
pub use instrument::{Instrument, InstrumentKind};
pub use pricer::{Pricer, PricerType};
