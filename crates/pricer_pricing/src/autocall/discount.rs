//! Discount curve evaluation: `DF(t0, t)` from a flat or piecewise rate.
//!
//! Wraps `pricer_core::market_data::curves`'s `FlatCurve<f64>` and
//! `InterpolatedCurve<f64>` (both implementing the shared `YieldCurve<f64>`
//! trait) behind a small enum, since a term sheet's [`DiscountCurveSpec`] is
//! resolved once per run and then queried at every grid step.

use pricer_core::market_data::curves::{
    CurveInterpolation, FlatCurve, InterpolatedCurve, YieldCurve,
};

use super::error::PricingError;
use super::term_sheet::DiscountCurveSpec;

/// A resolved discount curve, ready to evaluate `DF(t0, t)` and forward rates.
pub enum DiscountCurve {
    /// Constant continuously-compounded rate.
    Flat(FlatCurve<f64>),
    /// Piecewise-constant (log-linear discount factor) zero curve.
    Piecewise(InterpolatedCurve<f64>),
}

impl DiscountCurve {
    /// Builds a [`DiscountCurve`] from the term sheet's specification.
    pub fn from_spec(spec: &DiscountCurveSpec) -> Result<Self, PricingError> {
        match spec {
            DiscountCurveSpec::Flat { flat_rate } => Ok(DiscountCurve::Flat(FlatCurve::new(*flat_rate))),
            DiscountCurveSpec::Piecewise { piecewise_rate } => {
                if piecewise_rate.len() < 2 {
                    return Err(PricingError::schema(
                        "piecewise discount curve needs at least two pillars",
                    ));
                }
                let tenors: Vec<f64> = piecewise_rate.iter().map(|p| p.tenor_years).collect();
                let rates: Vec<f64> = piecewise_rate.iter().map(|p| p.rate).collect();
                let curve = InterpolatedCurve::new(&tenors, &rates, CurveInterpolation::LogLinear, true)
                    .map_err(|e| PricingError::schema(e.to_string()))?;
                Ok(DiscountCurve::Piecewise(curve))
            }
        }
    }

    /// `DF(t0, t)` for `t >= 0`. `DF(t0, 0) = 1` by the curve's invariant.
    pub fn discount_factor(&self, t: f64) -> Result<f64, PricingError> {
        let df = match self {
            DiscountCurve::Flat(c) => c.discount_factor(t),
            DiscountCurve::Piecewise(c) => c.discount_factor(t),
        };
        df.map_err(|e| PricingError::numeric(e.to_string()))
    }

    /// Instantaneous forward rate applying on `(t1, t2)`, `t2 > t1 >= 0`.
    /// Used by the path generator as the drift rate for a single grid step.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> Result<f64, PricingError> {
        if (t2 - t1).abs() < 1e-12 {
            return Ok(0.0);
        }
        let rate = match self {
            DiscountCurve::Flat(c) => c.forward_rate(t1, t2),
            DiscountCurve::Piecewise(c) => c.forward_rate(t1, t2),
        };
        rate.map_err(|e| PricingError::numeric(e.to_string()))
    }
}
