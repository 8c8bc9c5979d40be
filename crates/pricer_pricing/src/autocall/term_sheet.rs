//! The term sheet: an immutable, validated description of an autocallable note.
//!
//! A [`TermSheet`] is produced by total deserialization of the wire format
//! described in the system's external interface contract — unknown JSON keys
//! are rejected by `serde`'s `deny_unknown_fields`, and [`TermSheet::validate`]
//! performs the remaining structural checks that a schema alone cannot
//! express (date ordering, matrix symmetry, array-length agreement).

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pricer_core::types::time::{Date, DayCountConvention};

use super::error::PricingError;

/// Day count used throughout the engine to turn calendar dates into year
/// fractions. Fixed at ACT/365F per the system overview's discount curve row.
pub const DAY_COUNT: DayCountConvention = DayCountConvention::ActualActual365;

/// Top-level, immutable pricing input: one note, fully specified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermSheet {
    /// Product identity, currency, notional, and key dates.
    pub meta: Meta,
    /// Ordered underlyings (worst-of products evaluate the minimum across these).
    pub underlyings: Vec<Underlying>,
    /// Discounting curve used both for drift and for present-valuing cashflows.
    pub discount_curve: DiscountCurveSpec,
    /// Pairwise correlation between underlyings (diagonal is implicitly 1).
    pub correlation: Correlation,
    /// Observation/payment/autocall/coupon schedule, one entry per period.
    pub schedules: Schedule,
    /// Knock-in barrier level and monitoring frequency.
    pub ki_barrier: KiBarrier,
    /// Payoff mechanics: worst-of flag, coupon memory, redemption policies.
    pub payoff: Payoff,
}

/// Product identity, currency, notional, and the dates that frame the trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Meta {
    /// Free-text product identifier, carried through to the result for display.
    pub product_id: String,
    /// ISO currency code of the notional.
    pub currency: String,
    /// Notional amount `N`.
    pub notional: f64,
    /// Trade date, if distinct from valuation (optional; informational only).
    #[serde(default)]
    pub trade_date: Option<Date>,
    /// Pricing (as-of) date. All year fractions are measured from here.
    pub valuation_date: Date,
    /// Settlement date, if distinct from valuation (optional; informational only).
    #[serde(default)]
    pub settlement_date: Option<Date>,
    /// Scheduled maturity (final observation) date.
    pub maturity_date: Date,
    /// Date on which the maturity redemption, if any, is paid.
    pub maturity_payment_date: Date,
}

/// A single underlying asset: spot, currency, dividend model, and vol model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Underlying {
    /// Asset identifier, referenced by [`Correlation::pairwise`] keys.
    pub id: String,
    /// Initial spot `S0`.
    pub spot: f64,
    /// ISO currency code of the underlying (informational; no quanto adjustment).
    pub currency: String,
    /// Continuous yield or discrete ex-date/amount dividend schedule.
    pub dividend_model: DividendModel,
    /// Flat, piecewise-constant, or Heston-style LSV volatility.
    pub vol_model: VolModel,
}

/// Dividend treatment for one underlying.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub enum DividendModel {
    /// Continuously compounded dividend yield `q`, folded into drift.
    Continuous {
        /// Continuous dividend yield (>= 0).
        continuous_yield: f64,
    },
    /// Discrete cash dividends on named ex-dates, applied as log-spot jumps.
    Discrete {
        /// Ex-date/amount pairs; amounts in the underlying's own currency.
        schedule: Vec<DiscreteDividend>,
    },
}

/// One discrete dividend: a cash amount paid on an ex-date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscreteDividend {
    /// Ex-dividend date (must be strictly after the valuation date).
    pub ex_date: Date,
    /// Cash amount (>= 0).
    pub amount: f64,
}

/// Volatility model for one underlying.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub enum VolModel {
    /// A single flat volatility applied at every step.
    Flat {
        /// Flat volatility (annualized, > 0).
        flat_vol: f64,
    },
    /// Piecewise-constant term structure, keyed by the date from which the
    /// rate applies; the path generator holds the last-quoted value flat
    /// beyond the final pillar.
    Piecewise {
        /// Ascending date -> vol pillars.
        term_structure: Vec<VolPillar>,
    },
    /// Heston-style local-stochastic volatility (QE-discretized variance).
    Lsv {
        /// Initial variance `v0`.
        v0: f64,
        /// Long-run variance `theta`.
        theta: f64,
        /// Mean-reversion speed `kappa`.
        kappa: f64,
        /// Vol-of-vol `xi`.
        xi: f64,
        /// Spot/variance correlation `rho_v`.
        rho_v: f64,
    },
}

/// One pillar of a piecewise-constant volatility term structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VolPillar {
    /// Date from which this volatility applies.
    pub date: Date,
    /// Volatility applying on `[date, next pillar)`.
    pub vol: f64,
}

/// Discount curve specification: flat or piecewise-constant zero rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiscountCurveSpec {
    /// A single flat continuously-compounded rate.
    Flat {
        /// The constant rate `r`.
        flat_rate: f64,
    },
    /// Piecewise-constant zero rates at named tenors (in years from valuation).
    Piecewise {
        /// Ascending (tenor_years, rate) pillars.
        piecewise_rate: Vec<RatePillar>,
    },
}

/// One pillar of a piecewise discount curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatePillar {
    /// Tenor in years from the valuation date.
    pub tenor_years: f64,
    /// Zero rate applying at/after this tenor.
    pub rate: f64,
}

/// Unordered-pair correlation between underlyings. Diagonal is implicitly 1.
///
/// JSON keys are `"id_a|id_b"` with the two identifiers joined by a pipe, in
/// either order — [`Correlation::get`] normalizes the lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Correlation {
    /// Map from `"id_a|id_b"` to the pairwise correlation rho.
    #[serde(default)]
    pub pairwise: HashMap<String, f64>,
}

impl Correlation {
    /// Looks up the correlation between two asset ids, trying both orderings.
    /// Returns `1.0` for `a == b`, and `0.0` for an unlisted pair.
    pub fn get(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        self.pairwise
            .get(&format!("{a}|{b}"))
            .or_else(|| self.pairwise.get(&format!("{b}|{a}")))
            .copied()
            .unwrap_or(0.0)
    }
}

/// The equal-length observation/payment/autocall/coupon schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schedule {
    /// Observation date for each period, strictly increasing.
    pub observation_dates: Vec<Date>,
    /// Payment date for coupons/autocall redemption tied to each observation.
    pub payment_dates: Vec<Date>,
    /// Autocall trigger level (fraction of initial spot) per period.
    pub autocall_levels: Vec<f64>,
    /// Coupon barrier (fraction of initial spot) per period.
    pub coupon_barriers: Vec<f64>,
    /// Coupon rate per period, paid on notional if the barrier condition holds.
    pub coupon_rates: Vec<f64>,
}

impl Schedule {
    /// Number of scheduled observation periods `M`.
    pub fn len(&self) -> usize {
        self.observation_dates.len()
    }

    /// Whether the schedule has zero periods.
    pub fn is_empty(&self) -> bool {
        self.observation_dates.is_empty()
    }
}

/// Knock-in barrier monitoring frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Monitoring {
    /// Tested only at scheduled observation dates.
    DiscreteAtObservations,
    /// Tested continuously via Brownian-bridge augmentation between steps.
    Continuous,
}

/// Knock-in barrier: level and monitoring frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KiBarrier {
    /// Barrier level as a fraction of each asset's own initial spot.
    pub level: f64,
    /// Discrete or continuous monitoring.
    pub monitoring: Monitoring,
}

/// Cash or physical settlement. See [`crate::autocall`] module docs for the
/// open-question resolution: physical settlement only changes labeling, not
/// the computed cash PV (this engine has no delivery-of-shares accounting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Settlement {
    /// Cash-settled redemption.
    Cash,
    /// Physical (share delivery) redemption; priced identically in cash terms.
    Physical,
}

/// Redemption policy applied at maturity when a knock-in event has occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KiRedemptionPolicy {
    /// `max(N * W_M, N * ki_redemption_floor)`.
    WorstPerformance,
    /// Redemption equal to par (`N`), regardless of performance.
    Par,
    /// `N * W_M` with no floor.
    Performance,
}

/// Payoff mechanics: worst-of flag, coupon memory, settlement, and redemption
/// fractions/policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Payoff {
    /// If true, the performance driving autocall/coupon/KI checks is the
    /// minimum across underlyings; otherwise each asset is tracked separately
    /// and the basket-level check uses the same minimum (worst-of is the only
    /// supported basket convention; per-asset/rainbow baskets are out of scope).
    pub worst_of: bool,
    /// Whether unpaid coupons accumulate and are paid on a later qualifying date.
    pub coupon_memory: bool,
    /// Cash or physical settlement (cosmetic; see [`Settlement`]).
    pub settlement: Settlement,
    /// Fraction of notional redeemed on autocall (typically 1.0).
    pub redemption_if_autocall: f64,
    /// Fraction of notional redeemed at maturity if no knock-in occurred.
    pub redemption_if_no_ki: f64,
    /// Redemption policy at maturity if a knock-in occurred.
    pub redemption_if_ki: KiRedemptionPolicy,
    /// Floor (fraction of notional) under [`KiRedemptionPolicy::WorstPerformance`].
    pub ki_redemption_floor: f64,
}

impl TermSheet {
    /// Validates every invariant from the data model section: array-length
    /// agreement, date ordering, correlation symmetry, non-negative
    /// dividends/vols. Returns the first violation found.
    ///
    /// Does not attempt PSD projection of the correlation matrix — that is
    /// the job of [`super::correlation::build_cholesky`], invoked by the
    /// engine after this validation pass succeeds.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.underlyings.is_empty() {
            return Err(PricingError::schema("term sheet has no underlyings"));
        }
        if self.meta.notional <= 0.0 {
            return Err(PricingError::schema("notional must be positive"));
        }

        let s = &self.schedules;
        let m = s.len();
        if s.payment_dates.len() != m
            || s.autocall_levels.len() != m
            || s.coupon_barriers.len() != m
            || s.coupon_rates.len() != m
        {
            return Err(PricingError::schema(
                "schedule arrays must all have equal length",
            ));
        }

        let val_date = self.meta.valuation_date;
        let mut prev_obs: Option<Date> = None;
        for i in 0..m {
            let obs = s.observation_dates[i];
            let pay = s.payment_dates[i];
            if obs < val_date {
                return Err(PricingError::date(format!(
                    "observation date at index {i} precedes the valuation date"
                )));
            }
            if let Some(prev) = prev_obs {
                if obs <= prev {
                    return Err(PricingError::date(
                        "observation dates must be strictly increasing",
                    ));
                }
            }
            if pay < obs {
                return Err(PricingError::date(format!(
                    "payment date at index {i} precedes its observation date"
                )));
            }
            prev_obs = Some(obs);
        }
        if self.meta.maturity_payment_date < self.meta.maturity_date {
            return Err(PricingError::date(
                "maturity payment date precedes maturity date",
            ));
        }

        for u in &self.underlyings {
            if u.spot <= 0.0 {
                return Err(PricingError::schema(format!(
                    "underlying {} has non-positive spot",
                    u.id
                )));
            }
            match &u.dividend_model {
                DividendModel::Continuous { continuous_yield } => {
                    if *continuous_yield < 0.0 {
                        return Err(PricingError::schema(format!(
                            "underlying {} has negative dividend yield",
                            u.id
                        )));
                    }
                }
                DividendModel::Discrete { schedule } => {
                    for d in schedule {
                        if d.amount < 0.0 {
                            return Err(PricingError::schema(format!(
                                "underlying {} has a negative discrete dividend",
                                u.id
                            )));
                        }
                        if d.ex_date <= val_date {
                            return Err(PricingError::date(format!(
                                "underlying {}'s dividend ex-date is not after valuation",
                                u.id
                            )));
                        }
                    }
                }
            }
            match &u.vol_model {
                VolModel::Flat { flat_vol } => {
                    if *flat_vol < 0.0 {
                        return Err(PricingError::schema(format!(
                            "underlying {} has negative flat vol",
                            u.id
                        )));
                    }
                }
                VolModel::Piecewise { term_structure } => {
                    if term_structure.is_empty() {
                        return Err(PricingError::schema(format!(
                            "underlying {} has an empty vol term structure",
                            u.id
                        )));
                    }
                    for p in term_structure {
                        if p.vol < 0.0 {
                            return Err(PricingError::schema(format!(
                                "underlying {} has a negative vol pillar",
                                u.id
                            )));
                        }
                    }
                }
                VolModel::Lsv {
                    v0, theta, kappa, xi, rho_v,
                } => {
                    if *v0 <= 0.0 || *theta <= 0.0 || *kappa <= 0.0 || *xi <= 0.0 {
                        return Err(PricingError::schema(format!(
                            "underlying {} has a non-positive LSV parameter",
                            u.id
                        )));
                    }
                    if !(-1.0..=1.0).contains(rho_v) {
                        return Err(PricingError::schema(format!(
                            "underlying {} has an out-of-range LSV rho",
                            u.id
                        )));
                    }
                }
            }
        }

        if self.ki_barrier.level < 0.0 {
            return Err(PricingError::schema("KI barrier level must be non-negative"));
        }

        Ok(())
    }

    /// Index of an underlying by id, used to resolve correlation pairs and
    /// per-asset Greek bumps.
    pub fn underlying_index(&self, id: &str) -> Option<usize> {
        self.underlyings.iter().position(|u| u.id == id)
    }

    /// Number of underlyings `n`.
    pub fn n_assets(&self) -> usize {
        self.underlyings.len()
    }

    /// Year fraction from valuation date to `date`, under [`DAY_COUNT`].
    pub fn year_fraction(&self, date: Date) -> f64 {
        DAY_COUNT.year_fraction_dates(self.meta.valuation_date, date)
    }
}

/// Converts a [`Date`] to a plain `chrono::NaiveDate`, for callers that need
/// calendar arithmetic beyond year fractions (e.g. business-day enumeration).
pub fn as_naive(date: Date) -> NaiveDate {
    date.into_inner()
}
