//! Single-curve discounting pricer.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use tenor_core::Date;
use tenor_curves::RateCurve;
use tenor_swaps::{Coupon, FixedCoupon, FixedLeg, FloatingCoupon, FloatingLeg, Leg, Swap};

use crate::error::PricingResult;
use crate::instrument::{Instrument, InstrumentKind};
use crate::pricer::{Pricer, PricerType};

/// One discounted cash flow.
///
/// `amount` is signed from the holder's side: swap floating coupons are paid
/// and carry a negative amount. Summing `present_value` over a report gives
/// the instrument price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountedCashFlow {
    /// Payment date.
    pub payment_date: Date,
    /// Signed cash amount.
    pub amount: f64,
    /// Discount factor at the payment date.
    pub discount_factor: f64,
    /// `amount * discount_factor`.
    pub present_value: f64,
}

/// Prices every cash flow as `amount * df(payment_date)`.
///
/// Legs sum their coupons. A swap is worth its fixed leg minus its floating
/// leg, the value to the party receiving fixed.
///
/// # Example
///
/// ```rust,ignore
/// use tenor_pricing::prelude::*;
///
/// let pricer = DiscountingPricer::new();
/// let npv = pricer.price(Instrument::Swap(&swap), &curve)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountingPricer;

impl DiscountingPricer {
    /// Creates a discounting pricer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns every cash flow of `instrument` with its discount factor.
    ///
    /// Swap reports list the fixed leg first, then the floating leg with
    /// negated amounts.
    pub fn cash_flows(
        &self,
        instrument: Instrument<'_>,
        curve: &dyn RateCurve,
    ) -> PricingResult<Vec<DiscountedCashFlow>> {
        self.ensure_supported(&instrument)?;
        match instrument {
            Instrument::FixedCoupon(c) => Ok(vec![discount_fixed(c, curve)?]),
            Instrument::FloatingCoupon(c) => Ok(vec![discount_floating(c, curve)?]),
            Instrument::Coupon(c) => Ok(vec![discount_coupon(c, curve)?]),
            Instrument::FixedLeg(leg) => fixed_leg_flows(leg, curve),
            Instrument::FloatingLeg(leg) => floating_leg_flows(leg, curve),
            Instrument::Leg(Leg::Fixed(leg)) => fixed_leg_flows(leg, curve),
            Instrument::Leg(Leg::Floating(leg)) => floating_leg_flows(leg, curve),
            Instrument::Swap(swap) => {
                let mut flows = fixed_leg_flows(swap.fixed_leg(), curve)?;
                flows.extend(
                    floating_leg_flows(swap.floating_leg(), curve)?
                        .into_iter()
                        .map(|flow| DiscountedCashFlow {
                            amount: -flow.amount,
                            present_value: -flow.present_value,
                            ..flow
                        }),
                );
                Ok(flows)
            }
        }
    }

    fn price_swap(&self, swap: &Swap, curve: &dyn RateCurve) -> PricingResult<f64> {
        let fixed = sum_pv(&fixed_leg_flows(swap.fixed_leg(), curve)?);
        let floating = sum_pv(&floating_leg_flows(swap.floating_leg(), curve)?);
        debug!(
            "swap {} -> {}: fixed pv {:.2}, floating pv {:.2}, npv {:.2}",
            swap.value_date(),
            swap.end_date(),
            fixed,
            floating,
            fixed - floating
        );
        Ok(fixed - floating)
    }
}

impl Pricer for DiscountingPricer {
    fn pricer_type(&self) -> PricerType {
        PricerType::Discounting
    }

    fn supports(&self, kind: InstrumentKind) -> bool {
        InstrumentKind::ALL.contains(&kind)
    }

    fn price(&self, instrument: Instrument<'_>, curve: &dyn RateCurve) -> PricingResult<f64> {
        match instrument {
            Instrument::Swap(swap) => {
                self.ensure_supported(&instrument)?;
                self.price_swap(swap, curve)
            }
            _ => Ok(sum_pv(&self.cash_flows(instrument, curve)?)),
        }
    }
}

fn sum_pv(flows: &[DiscountedCashFlow]) -> f64 {
    flows.iter().map(|flow| flow.present_value).sum()
}

fn discount(
    payment_date: Date,
    amount: f64,
    curve: &dyn RateCurve,
) -> PricingResult<DiscountedCashFlow> {
    let discount_factor = curve.discount_factor(payment_date)?;
    let present_value = amount * discount_factor;
    trace!(
        "cash flow {}: amount {:.2}, df {:.8}, pv {:.2}",
        payment_date,
        amount,
        discount_factor,
        present_value
    );
    Ok(DiscountedCashFlow {
        payment_date,
        amount,
        discount_factor,
        present_value,
    })
}

fn discount_fixed(coupon: &FixedCoupon, curve: &dyn RateCurve) -> PricingResult<DiscountedCashFlow> {
    discount(coupon.period().payment_date(), coupon.amount(), curve)
}

fn discount_floating(
    coupon: &FloatingCoupon,
    curve: &dyn RateCurve,
) -> PricingResult<DiscountedCashFlow> {
    discount(coupon.period().payment_date(), coupon.amount(), curve)
}

fn discount_coupon(coupon: &Coupon, curve: &dyn RateCurve) -> PricingResult<DiscountedCashFlow> {
    match coupon {
        Coupon::Fixed(c) => discount_fixed(c, curve),
        Coupon::Floating(c) => discount_floating(c, curve),
    }
}

fn fixed_leg_flows(leg: &FixedLeg, curve: &dyn RateCurve) -> PricingResult<Vec<DiscountedCashFlow>> {
    leg.coupons()
        .iter()
        .map(|c| discount_fixed(c, curve))
        .collect()
}

fn floating_leg_flows(
    leg: &FloatingLeg,
    curve: &dyn RateCurve,
) -> PricingResult<Vec<DiscountedCashFlow>> {
    leg.coupons()
        .iter()
        .map(|c| discount_floating(c, curve))
        .collect()
}
