//! The pricer trait and the closed set of pricer types.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use tenor_curves::RateCurve;

use crate::discounting::DiscountingPricer;
use crate::error::{PricingError, PricingResult};
use crate::instrument::{Instrument, InstrumentKind};

/// Values instruments against a discount curve.
///
/// Implementations hold no market state: the curve is passed to every call,
/// so one pricer can be shared across threads and curves.
pub trait Pricer: Send + Sync {
    /// Returns the type of this pricer.
    fn pricer_type(&self) -> PricerType;

    /// Returns true if the pricer can value instruments of this kind.
    fn supports(&self, kind: InstrumentKind) -> bool;

    /// Returns the present value of `instrument` discounted on `curve`.
    ///
    /// # Errors
    ///
    /// - `PricingError::UnsupportedInstrument` if `supports` rejects the kind
    /// - `PricingError::Curve` if a payment date cannot be discounted
    fn price(&self, instrument: Instrument<'_>, curve: &dyn RateCurve) -> PricingResult<f64>;

    /// Prices independent instruments in parallel.
    ///
    /// Results keep the input order; one failure does not affect the others.
    fn price_all(
        &self,
        instruments: &[Instrument<'_>],
        curve: &dyn RateCurve,
    ) -> Vec<PricingResult<f64>> {
        instruments
            .par_iter()
            .map(|instrument| self.price(*instrument, curve))
            .collect()
    }

    /// Checks that `instrument` is supported.
    fn ensure_supported(&self, instrument: &Instrument<'_>) -> PricingResult<()> {
        let kind = instrument.kind();
        if self.supports(kind) {
            Ok(())
        } else {
            Err(PricingError::unsupported_instrument(kind.name()))
        }
    }
}

/// Available pricers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PricerType {
    /// Discount every cash flow on a single curve.
    #[default]
    Discounting,
}

impl PricerType {
    /// Returns the pricer name, e.g. "DISCOUNTING".
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PricerType::Discounting => "DISCOUNTING",
        }
    }

    /// Creates a pricer of this type.
    #[must_use]
    pub fn create(&self) -> Box<dyn Pricer> {
        match self {
            PricerType::Discounting => Box::new(DiscountingPricer::new()),
        }
    }
}

impl fmt::Display for PricerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PricerType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DISCOUNTING" => Ok(PricerType::Discounting),
            _ => Err(PricingError::unsupported_pricer(s)),
        }
    }
}

impl TryFrom<String> for PricerType {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PricerType> for String {
    fn from(pricer_type: PricerType) -> Self {
        pricer_type.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricer_type_parse() {
        assert_eq!("DISCOUNTING".parse::<PricerType>().unwrap(), PricerType::Discounting);
        assert_eq!("discounting".parse::<PricerType>().unwrap(), PricerType::Discounting);
        assert!(matches!(
            "BLACK".parse::<PricerType>(),
            Err(PricingError::UnsupportedPricer { .. })
        ));
    }

    #[test]
    fn test_pricer_type_serde() {
        let json = serde_json::to_string(&PricerType::Discounting).unwrap();
        assert_eq!(json, "\"DISCOUNTING\"");
        let back: PricerType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PricerType::Discounting);
    }

    #[test]
    fn test_create_returns_matching_pricer() {
        let pricer = PricerType::Discounting.create();
        assert_eq!(pricer.pricer_type(), PricerType::Discounting);
        assert!(InstrumentKind::ALL.iter().all(|kind| pricer.supports(*kind)));
    }
}
