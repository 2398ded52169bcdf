//! End-to-end pricing requests.
//!
//! A request bundles a discount curve, a rate index and a list of tagged
//! instruments. [`PricingRequest::price`] builds all of them and returns one
//! value per instrument, in request order.

use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use tenor_core::Date;
use tenor_pricing::{Instrument, InstrumentKind, PricerType, PricingError};
use tenor_swaps::PricingContext;

use crate::curve::DiscountCurveConfig;
use crate::error::{ConfigResult, Validate, ValidationError};
use crate::index::IndexConfig;
use crate::instrument::{BuiltInstrument, InstrumentConfig};
use crate::loader::{ConfigFormat, LoadConfig};

/// A pricing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Evaluation date; defaults to the curve's value date.
    #[serde(default)]
    pub evaluation_date: Option<Date>,

    /// Pricer used for every instrument.
    #[serde(default)]
    pub pricer: PricerType,

    /// Discount curve.
    pub curve: DiscountCurveConfig,

    /// Index used by floating instruments.
    #[serde(default)]
    pub index: IndexConfig,

    /// Instruments to value.
    #[serde(default)]
    pub instruments: Vec<InstrumentConfig>,
}

/// The value of one instrument of a request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstrumentValue {
    /// Instrument kind.
    pub kind: InstrumentKind,
    /// Present value on the request's curve.
    pub present_value: f64,
}

impl PricingRequest {
    /// Creates a request with no instruments.
    pub fn new(curve: DiscountCurveConfig) -> Self {
        Self {
            evaluation_date: None,
            pricer: PricerType::default(),
            curve,
            index: IndexConfig::default(),
            instruments: Vec::new(),
        }
    }

    /// Builder method to add an instrument.
    pub fn with_instrument(mut self, instrument: InstrumentConfig) -> Self {
        self.instruments.push(instrument);
        self
    }

    /// Builder method to set the index.
    pub fn with_index(mut self, index: IndexConfig) -> Self {
        self.index = index;
        self
    }

    /// Returns the evaluation date.
    pub fn evaluation_date(&self) -> Date {
        self.evaluation_date.unwrap_or(self.curve.value_date)
    }

    /// Builds and prices every instrument.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid configuration, on any construction error,
    /// or on the first instrument that cannot be priced.
    pub fn price(&self) -> ConfigResult<Vec<InstrumentValue>> {
        self.validate_or_error()?;

        let curve = Arc::new(self.curve.build()?);
        let index = self.index.build(&curve)?;
        let ctx = PricingContext::new(self.evaluation_date());

        let built = self
            .instruments
            .iter()
            .map(|config| config.build(&index, &ctx))
            .collect::<ConfigResult<Vec<_>>>()?;
        let views: Vec<Instrument<'_>> = built.iter().map(BuiltInstrument::as_instrument).collect();

        debug!(
            "Pricing {} instruments with {} on {} as of {}",
            views.len(),
            self.pricer,
            curve.curve_id(),
            ctx.evaluation_date()
        );

        let pricer = self.pricer.create();
        pricer
            .price_all(&views, curve.as_ref())
            .into_iter()
            .zip(&views)
            .map(|(result, view)| {
                Ok(InstrumentValue {
                    kind: view.kind(),
                    present_value: result?,
                })
            })
            .collect()
    }
}

impl Validate for PricingRequest {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = self
            .curve
            .validate()
            .into_iter()
            .map(|e| e.nested("curve"))
            .collect();

        errors.extend(self.index.validate().into_iter().map(|e| e.nested("index")));

        for (i, instrument) in self.instruments.iter().enumerate() {
            let path = format!("instruments[{i}]");
            errors.extend(instrument.validate().into_iter().map(|e| e.nested(&path)));
        }

        errors
    }
}

/// The `type` tags of a request, read before the full document.
#[derive(Deserialize)]
struct TagScan {
    #[serde(default)]
    instruments: Vec<TagOnly>,
}

#[derive(Deserialize)]
struct TagOnly {
    #[serde(rename = "type")]
    kind: String,
}

/// Rejects instrument tags that name no configurable kind.
fn check_instrument_types(scan: &TagScan) -> ConfigResult<()> {
    for tag in &scan.instruments {
        let kind = InstrumentKind::from_str(&tag.kind)?;
        if !InstrumentConfig::KINDS.contains(&kind) {
            return Err(PricingError::unsupported_instrument(tag.kind.as_str()).into());
        }
    }
    Ok(())
}

impl LoadConfig for PricingRequest {
    fn parse(content: &str, format: ConfigFormat) -> ConfigResult<Self> {
        let scan: TagScan = format.deserialize(content)?;
        check_instrument_types(&scan)?;

        let request: Self = format.deserialize(content)?;
        request.validate_or_error()?;
        Ok(request)
    }
}
