//! Tenor Configuration Layer
//!
//! Serde configurations for every buildable object of the Tenor pricing
//! library, with validation and loading from JSON or TOML files.
//!
//! # Features
//!
//! - **Curve Configuration**: Pillars by date or tenor, interpolation and calendar settings
//! - **Index Configuration**: Recorded fixings and the projection curve
//! - **Instrument Configuration**: Coupons, legs and swaps with market defaults
//! - **Pricing Requests**: Curve, index and tagged instruments priced in one call
//! - **Validation**: Every config reports all of its invalid fields at once
//!
//! # Example
//!
//! ```rust
//! use tenor_config::{LoadConfig, PricingRequest};
//!
//! let request = PricingRequest::from_json_str(r#"{
//!     "curve": {
//!         "value_date": "2025-01-31",
//!         "pillars": [["2025-01-31", 1.0], ["6M", 0.985], ["1Y", 0.97]]
//!     },
//!     "instruments": [{
//!         "type": "swap",
//!         "trade_date": "2025-01-29",
//!         "end_date": "2025-07-31",
//!         "notional": 1000000,
//!         "fixed_rate": 0.03,
//!         "fixed_frequency": "6M",
//!         "floating_frequency": "3M"
//!     }]
//! }"#).unwrap();
//!
//! let values = request.price().unwrap();
//! assert_eq!(values.len(), 1);
//! assert!(values[0].present_value.is_finite());
//! ```
//!
//! # Instrument types
//!
//! Instruments are tagged by `type`: `fixed_coupon`, `floating_coupon`,
//! `fixed_leg`, `floating_leg` or `swap`. Any other tag is rejected with
//! `PricingError::UnsupportedInstrument` when the request is parsed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod curve;
mod error;
mod index;
mod instrument;
mod loader;
mod request;

// Re-export core types
pub use curve::{DiscountCurveConfig, PillarPoint};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use index::{IndexConfig, ProjectionConfig};
pub use instrument::{
    BuiltInstrument, FixedCouponConfig, FixedLegConfig, FloatingCouponConfig, FloatingLegConfig,
    InstrumentConfig, SwapConfig,
};
pub use loader::{ConfigFormat, LoadConfig};
pub use request::{InstrumentValue, PricingRequest};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::DiscountCurveConfig;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::index::IndexConfig;
    pub use crate::instrument::{InstrumentConfig, SwapConfig};
    pub use crate::loader::LoadConfig;
    pub use crate::request::{InstrumentValue, PricingRequest};
}
