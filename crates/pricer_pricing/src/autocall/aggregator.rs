//! Reporting: reduces per-path outcomes into a PV with standard error, a
//! coupon/redemption decomposition, and a per-scheduled-date cashflow table.
//!
//! Grounded on `pricer_pricing::greeks::result::GreeksResult`'s named-field,
//! serde-optional result-struct style; the cashflow-table grouping logic
//! itself is new (no teacher component folds path outcomes into a scheduled
//! cashflow table).

use std::collections::BTreeMap;
use std::time::Duration;

use super::discount::DiscountCurve;
use super::error::PricingError;
use super::event_engine::{CashflowCategory, PathOutcome};
use super::term_sheet::TermSheet;

/// Top-level price summary statistics.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    /// Mean present value across all simulated paths.
    pub pv: f64,
    /// Standard error of the PV estimate (`stdev / sqrt(P)`).
    pub pv_std_error: f64,
    /// `pv` expressed as a fraction of notional.
    pub pv_pct_notional: f64,
    /// Fraction of paths that autocalled before maturity.
    pub autocall_probability: f64,
    /// Fraction of paths on which a knock-in event occurred.
    pub ki_probability: f64,
    /// Mean number of coupon cashflows paid per path.
    pub expected_coupon_count: f64,
    /// Mean year fraction of the terminating event (autocall or maturity).
    pub expected_life_years: f64,
    /// Number of paths simulated, `P`.
    pub num_paths: usize,
    /// Paths on which a discrete dividend exceeded the pre-dividend spot and
    /// was capped (diagnostic only; does not affect validity of the result).
    pub degenerate_paths: usize,
    /// Wall-clock time spent inside the pricing call, in milliseconds.
    pub computation_time_ms: f64,
}

/// One row of the expected-cashflow table, keyed by scheduled event and
/// cashflow category.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CashflowRow {
    /// Event (observation or maturity) date this row is tied to.
    pub date: pricer_core::types::time::Date,
    /// Date on which this cashflow, if it occurs, is paid.
    pub payment_date: pricer_core::types::time::Date,
    /// Cashflow category.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub category: CashflowCategory,
    /// Fraction of paths on which a cashflow of this category landed on this date.
    pub probability: f64,
    /// Mean cash amount, conditional on the cashflow occurring.
    pub expected_amount: f64,
    /// `DF(t0, payment_date)`.
    pub discount_factor: f64,
    /// Unconditional mean contribution to PV (`probability * expected_amount * discount_factor`).
    pub pv_contribution: f64,
}

/// PV split by cashflow category.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Decomposition {
    /// PV of all coupon cashflows (memory or current-period).
    pub coupon_pv: f64,
    /// PV of redemption at autocall.
    pub autocall_redemption_pv: f64,
    /// PV of redemption at maturity.
    pub maturity_redemption_pv: f64,
    /// `autocall_redemption_pv + maturity_redemption_pv`.
    pub redemption_pv: f64,
    /// `coupon_pv + redemption_pv`, should match `summary.pv` up to rounding.
    pub total_pv: f64,
}

/// The full result of a `price` call.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceResult {
    /// Top-level scalar statistics.
    pub summary: Summary,
    /// Expected-cashflow table, one row per (scheduled date, category).
    pub cashflows: Vec<CashflowRow>,
    /// PV decomposition by cashflow category.
    pub decomposition: Decomposition,
    /// Non-fatal diagnostics (near-PSD projection, dividend capping).
    pub warnings: Vec<String>,
}

/// Reduces a full set of per-path outcomes into a [`PriceResult`].
///
/// `elapsed` is the wall-clock duration of the simulation; it is recorded
/// verbatim into `summary.computation_time_ms` and otherwise has no bearing
/// on the numbers (the engine never self-limits on time, per the
/// concurrency model: timeouts are the caller's responsibility).
pub fn aggregate(
    term_sheet: &TermSheet,
    discount_curve: &DiscountCurve,
    outcomes: &[PathOutcome],
    degenerate_paths: usize,
    warnings: Vec<String>,
    elapsed: Duration,
) -> Result<PriceResult, PricingError> {
    let num_paths = outcomes.len();
    if num_paths == 0 {
        return Err(PricingError::schema("no paths were simulated"));
    }

    let mut path_pvs = Vec::with_capacity(num_paths);
    let mut autocalled = 0usize;
    let mut ki_hit = 0usize;
    let mut coupon_count_sum = 0.0_f64;
    let mut life_sum = 0.0_f64;

    // (observation_index, category) -> (occurrence count, sum of amounts, payment_year)
    let mut buckets: BTreeMap<(Option<usize>, CategoryKey), (usize, f64, f64)> = BTreeMap::new();

    for outcome in outcomes {
        let mut pv = 0.0_f64;
        for cf in &outcome.cashflows {
            let df = discount_curve.discount_factor(cf.payment_year)?;
            pv += cf.amount * df;
            if cf.category == CashflowCategory::Coupon {
                coupon_count_sum += 1.0;
            }
            let entry = buckets
                .entry((cf.observation_index, CategoryKey(cf.category)))
                .or_insert((0, 0.0, cf.payment_year));
            entry.0 += 1;
            entry.1 += cf.amount;
            entry.2 = cf.payment_year;
        }
        if !pv.is_finite() {
            return Err(PricingError::numeric("non-finite path PV"));
        }
        path_pvs.push(pv);
        if outcome.autocalled {
            autocalled += 1;
        }
        if outcome.ki_hit {
            ki_hit += 1;
        }
        life_sum += outcome.life_years;
    }

    let pv = path_pvs.iter().sum::<f64>() / num_paths as f64;
    let variance = if num_paths > 1 {
        path_pvs.iter().map(|&x| (x - pv) * (x - pv)).sum::<f64>() / (num_paths as f64 - 1.0)
    } else {
        0.0
    };
    let pv_std_error = (variance / num_paths as f64).sqrt();

    if !pv.is_finite() || !pv_std_error.is_finite() {
        return Err(PricingError::numeric("non-finite aggregate PV or standard error"));
    }

    let mut decomposition = Decomposition::default();
    let mut cashflows = Vec::with_capacity(buckets.len());
    for ((obs_idx, CategoryKey(category)), (count, sum_amount, payment_year)) in buckets {
        let probability = count as f64 / num_paths as f64;
        let expected_amount = sum_amount / count as f64;
        let discount_factor = discount_curve.discount_factor(payment_year)?;
        let pv_contribution = probability * expected_amount * discount_factor;

        let (date, payment_date) = match obs_idx {
            Some(i) => (
                term_sheet.schedules.observation_dates[i],
                term_sheet.schedules.payment_dates[i],
            ),
            None => (
                term_sheet.meta.maturity_date,
                term_sheet.meta.maturity_payment_date,
            ),
        };

        match category {
            CashflowCategory::Coupon => decomposition.coupon_pv += pv_contribution,
            CashflowCategory::AutocallRedemption => {
                decomposition.autocall_redemption_pv += pv_contribution
            }
            CashflowCategory::MaturityRedemption => {
                decomposition.maturity_redemption_pv += pv_contribution
            }
        }

        cashflows.push(CashflowRow {
            date,
            payment_date,
            category,
            probability,
            expected_amount,
            discount_factor,
            pv_contribution,
        });
    }
    cashflows.sort_by(|a, b| a.payment_date.cmp(&b.payment_date).then_with(|| a.category.cmp(&b.category)));

    decomposition.redemption_pv =
        decomposition.autocall_redemption_pv + decomposition.maturity_redemption_pv;
    decomposition.total_pv = decomposition.coupon_pv + decomposition.redemption_pv;

    let summary = Summary {
        pv,
        pv_std_error,
        pv_pct_notional: pv / term_sheet.meta.notional,
        autocall_probability: autocalled as f64 / num_paths as f64,
        ki_probability: ki_hit as f64 / num_paths as f64,
        expected_coupon_count: coupon_count_sum / num_paths as f64,
        expected_life_years: life_sum / num_paths as f64,
        num_paths,
        degenerate_paths,
        computation_time_ms: elapsed.as_secs_f64() * 1000.0,
    };

    Ok(PriceResult {
        summary,
        cashflows,
        decomposition,
        warnings,
    })
}

/// Wraps [`CashflowCategory`] so it can key a `BTreeMap` alongside
/// `Option<usize>` (using its declaration-order `Ord`: coupon, then
/// autocall redemption, then maturity redemption — the order in which
/// same-date rows should read).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct CategoryKey(CashflowCategory);
