//! # Tenor Core
//!
//! Date and convention primitives for the Tenor fixed income pricing library.
//!
//! This crate provides the building blocks every other Tenor crate relies on:
//!
//! - **Types**: [`Date`], [`Period`] tenors and payment [`Frequency`]
//! - **Day Count Conventions**: year fractions for Actual/360, Actual/365 Fixed,
//!   30/360 Bond Basis and 30E/360
//! - **Business Day Calendars**: TARGET, United States and the null calendar,
//!   with business-day adjustment and advancing
//!
//! Conventions are closed enums. Names coming from configuration files are
//! resolved once through `FromStr` (or serde) and never looked up again.
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let cal = CalendarId::Target.calendar();
//! let trade = Date::from_ymd(2025, 1, 31).unwrap();
//! let spot = cal.advance(trade, 2, BusinessDayConvention::Following);
//! assert_eq!(spot, Date::from_ymd(2025, 2, 4).unwrap());
//!
//! let yf = DayCountConvention::Actual360.year_fraction(trade, spot);
//! assert!((yf - 4.0 / 360.0).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::return_self_not_must_use)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar, CalendarId};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Frequency, Period, TimeUnit};
}

pub use calendars::{BusinessDayConvention, Calendar, CalendarId};
pub use daycounts::{DayCount, DayCountConvention};
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency, Period, TimeUnit};
