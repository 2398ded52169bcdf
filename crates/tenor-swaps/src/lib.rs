//! # Tenor Swaps
//!
//! Schedules, coupons, legs and vanilla swaps for the Tenor fixed income
//! pricing library.
//!
//! This crate provides:
//!
//! - **Schedules**: forward date generation with business day adjustment
//! - **Indices**: fixing lookup first, forward projection otherwise
//! - **Coupons**: fixed and floating coupons over validated accrual periods
//! - **Legs**: fixed and floating legs rebuilt from their terms
//! - **Swaps**: a fixed and a floating leg from the spot value date
//!
//! Floating rates are resolved against an explicit [`PricingContext`]; no
//! evaluation date is read from global state.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use tenor_core::{Date, DayCountConvention, Frequency};
//! use tenor_curves::FlatForwardCurve;
//! use tenor_swaps::prelude::*;
//!
//! let today = Date::from_ymd(2025, 1, 31).unwrap();
//! let curve = FlatForwardCurve::new(today, 0.03, DayCountConvention::Actual360).unwrap();
//! let index = RateIndex::new("EURIBOR3M", Arc::new(curve));
//! let ctx = PricingContext::new(today);
//!
//! let terms = SwapTerms::new(
//!     today,
//!     Date::from_ymd(2026, 1, 31).unwrap(),
//!     1_000_000.0,
//!     0.05,
//!     Frequency::Monthly,
//!     Frequency::Monthly,
//! );
//! let swap = Swap::new(terms, &index, &ctx).unwrap();
//! assert_eq!(swap.value_date(), Date::from_ymd(2025, 2, 4).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::float_cmp)]

pub mod context;
pub mod coupons;
pub mod error;
pub mod indices;
pub mod legs;
pub mod schedule;
pub mod swap;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::context::PricingContext;
    pub use crate::coupons::{
        AccrualPeriod, Coupon, FixedCoupon, FloatingCoupon, FloatingRateTerms, RateObservation,
    };
    pub use crate::error::{SwapError, SwapResult};
    pub use crate::indices::{FixingStore, IndexFixing, RateIndex, DEFAULT_INDEX_NAME};
    pub use crate::legs::{FixedLeg, FloatingLeg, Leg, LegTerms};
    pub use crate::schedule::{Schedule, ScheduleGenerator};
    pub use crate::swap::{Swap, SwapTerms};
}

pub use context::PricingContext;
pub use coupons::{AccrualPeriod, Coupon, FixedCoupon, FloatingCoupon, FloatingRateTerms};
pub use error::{SwapError, SwapResult};
pub use indices::{FixingStore, RateIndex};
pub use legs::{FixedLeg, FloatingLeg, Leg, LegTerms};
pub use schedule::{Schedule, ScheduleGenerator};
pub use swap::{Swap, SwapTerms};
