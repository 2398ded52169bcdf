//! Priceable instruments.
//!
//! [`Instrument`] borrows one of the coupon, leg or swap types of
//! `tenor-swaps`, so pricing never copies coupon vectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use tenor_swaps::{Coupon, FixedCoupon, FixedLeg, FloatingCoupon, FloatingLeg, Leg, Swap};

use crate::error::PricingError;

/// Type of a priceable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InstrumentKind {
    /// A single fixed rate coupon.
    FixedCoupon,
    /// A single floating rate coupon.
    FloatingCoupon,
    /// A coupon of either variant.
    Coupon,
    /// A leg of fixed rate coupons.
    FixedLeg,
    /// A leg of floating rate coupons.
    FloatingLeg,
    /// A leg of either variant.
    Leg,
    /// A fixed-for-floating swap.
    Swap,
}

impl InstrumentKind {
    /// Every instrument kind.
    pub const ALL: [InstrumentKind; 7] = [
        InstrumentKind::FixedCoupon,
        InstrumentKind::FloatingCoupon,
        InstrumentKind::Coupon,
        InstrumentKind::FixedLeg,
        InstrumentKind::FloatingLeg,
        InstrumentKind::Leg,
        InstrumentKind::Swap,
    ];

    /// Returns the canonical name, e.g. "FixedLeg".
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            InstrumentKind::FixedCoupon => "FixedCoupon",
            InstrumentKind::FloatingCoupon => "FloatingCoupon",
            InstrumentKind::Coupon => "Coupon",
            InstrumentKind::FixedLeg => "FixedLeg",
            InstrumentKind::FloatingLeg => "FloatingLeg",
            InstrumentKind::Leg => "Leg",
            InstrumentKind::Swap => "Swap",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InstrumentKind {
    type Err = PricingError;

    /// Parses "FixedLeg", "fixed_leg" or "FIXED-LEG" alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "fixedcoupon" => Ok(InstrumentKind::FixedCoupon),
            "floatingcoupon" => Ok(InstrumentKind::FloatingCoupon),
            "coupon" => Ok(InstrumentKind::Coupon),
            "fixedleg" => Ok(InstrumentKind::FixedLeg),
            "floatingleg" => Ok(InstrumentKind::FloatingLeg),
            "leg" => Ok(InstrumentKind::Leg),
            "swap" => Ok(InstrumentKind::Swap),
            _ => Err(PricingError::unsupported_instrument(s)),
        }
    }
}

impl TryFrom<String> for InstrumentKind {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InstrumentKind> for String {
    fn from(kind: InstrumentKind) -> Self {
        kind.name().to_string()
    }
}

/// A borrowed view of anything a pricer can value.
#[derive(Debug, Clone, Copy)]
pub enum Instrument<'a> {
    /// A fixed rate coupon.
    FixedCoupon(&'a FixedCoupon),
    /// A floating rate coupon.
    FloatingCoupon(&'a FloatingCoupon),
    /// A coupon of either variant.
    Coupon(&'a Coupon),
    /// A fixed rate leg.
    FixedLeg(&'a FixedLeg),
    /// A floating rate leg.
    FloatingLeg(&'a FloatingLeg),
    /// A leg of either variant.
    Leg(&'a Leg),
    /// A fixed-for-floating swap.
    Swap(&'a Swap),
}

impl Instrument<'_> {
    /// Returns the instrument kind.
    #[must_use]
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Instrument::FixedCoupon(_) => InstrumentKind::FixedCoupon,
            Instrument::FloatingCoupon(_) => InstrumentKind::FloatingCoupon,
            Instrument::Coupon(_) => InstrumentKind::Coupon,
            Instrument::FixedLeg(_) => InstrumentKind::FixedLeg,
            Instrument::FloatingLeg(_) => InstrumentKind::FloatingLeg,
            Instrument::Leg(_) => InstrumentKind::Leg,
            Instrument::Swap(_) => InstrumentKind::Swap,
        }
    }
}

impl<'a> From<&'a FixedCoupon> for Instrument<'a> {
    fn from(coupon: &'a FixedCoupon) -> Self {
        Instrument::FixedCoupon(coupon)
    }
}

impl<'a> From<&'a FloatingCoupon> for Instrument<'a> {
    fn from(coupon: &'a FloatingCoupon) -> Self {
        Instrument::FloatingCoupon(coupon)
    }
}

impl<'a> From<&'a Coupon> for Instrument<'a> {
    fn from(coupon: &'a Coupon) -> Self {
        Instrument::Coupon(coupon)
    }
}

impl<'a> From<&'a FixedLeg> for Instrument<'a> {
    fn from(leg: &'a FixedLeg) -> Self {
        Instrument::FixedLeg(leg)
    }
}

impl<'a> From<&'a FloatingLeg> for Instrument<'a> {
    fn from(leg: &'a FloatingLeg) -> Self {
        Instrument::FloatingLeg(leg)
    }
}

impl<'a> From<&'a Leg> for Instrument<'a> {
    fn from(leg: &'a Leg) -> Self {
        Instrument::Leg(leg)
    }
}

impl<'a> From<&'a Swap> for Instrument<'a> {
    fn from(swap: &'a Swap) -> Self {
        Instrument::Swap(swap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in InstrumentKind::ALL {
            assert_eq!(kind.name().parse::<InstrumentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_accepts_config_tags() {
        assert_eq!(
            "fixed_coupon".parse::<InstrumentKind>().unwrap(),
            InstrumentKind::FixedCoupon
        );
        assert_eq!(
            "FLOATING_LEG".parse::<InstrumentKind>().unwrap(),
            InstrumentKind::FloatingLeg
        );
        assert_eq!(" swap ".parse::<InstrumentKind>().unwrap(), InstrumentKind::Swap);
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let err = "Swaption".parse::<InstrumentKind>().unwrap_err();
        assert_eq!(err, PricingError::unsupported_instrument("Swaption"));
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&InstrumentKind::FloatingLeg).unwrap();
        assert_eq!(json, "\"FloatingLeg\"");
        let kind: InstrumentKind = serde_json::from_str("\"fixed_leg\"").unwrap();
        assert_eq!(kind, InstrumentKind::FixedLeg);
        assert!(serde_json::from_str::<InstrumentKind>("\"cap\"").is_err());
    }
}
