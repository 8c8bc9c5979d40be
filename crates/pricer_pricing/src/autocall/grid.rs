//! The simulation grid: event-aligned time discretization.
//!
//! No direct teacher equivalent exists — `pricer_pricing::mc::config` takes a
//! flat `n_steps` uniform grid. This builder instead merges every event date
//! (observations, discrete ex-dividend dates, maturity) into one strictly
//! increasing time partition, then optionally inserts extra uniformly-spaced
//! times inside each inter-event interval so no step exceeds
//! `1 / n_steps_per_year`. Every step records the metadata the path generator
//! and event engine need without re-querying the term sheet: dt, the forward
//! discount rate, per-asset volatility, and any ex-dividend jump.

use std::collections::BTreeSet;

use pricer_core::types::time::Date;

use super::discount::DiscountCurve;
use super::error::PricingError;
use super::term_sheet::{DividendModel, TermSheet, VolModel};

/// One interval `(t_start, t_end]` of the grid, with everything the path
/// generator needs to evolve log-spots across it.
#[derive(Debug, Clone)]
pub struct GridStep {
    /// Year fraction at the start of the step.
    pub t_start: f64,
    /// Year fraction at the end of the step.
    pub t_end: f64,
    /// `t_end - t_start`.
    pub dt: f64,
    /// Instantaneous forward rate applying on `(t_start, t_end)`.
    pub forward_rate: f64,
    /// `DF(t0, t_start)`.
    pub discount_start: f64,
    /// `DF(t0, t_end)`.
    pub discount_end: f64,
    /// Per-asset volatility applying across this interval.
    pub vols: Vec<f64>,
    /// Per-asset discrete dividend amount (in spot currency) falling due at
    /// `t_end`. Summed if more than one scheduled dividend lands inside the
    /// same refined step.
    pub dividend_jumps: Vec<f64>,
    /// Index into the term sheet's schedule if `t_end` is an observation date.
    pub observation_index: Option<usize>,
    /// Whether `t_end` is the maturity date.
    pub is_maturity: bool,
}

/// The full event-aligned time partition for one pricing run.
#[derive(Debug, Clone)]
pub struct SimulationGrid {
    /// Year fractions `0 = t0 < t1 < ... < tK`, length `K + 1`.
    pub times: Vec<f64>,
    /// Per-interval metadata, length `K`.
    pub steps: Vec<GridStep>,
}

impl SimulationGrid {
    /// Number of steps `K`.
    pub fn n_steps(&self) -> usize {
        self.steps.len()
    }
}

/// Builds the simulation grid for `term_sheet` under `discount_curve`.
///
/// `n_steps_per_year`, if given, refines the grid so no interval between
/// consecutive grid times exceeds `1 / n_steps_per_year` years; `None` means
/// no refinement beyond the event dates themselves.
pub fn build_grid(
    term_sheet: &TermSheet,
    discount_curve: &DiscountCurve,
    n_steps_per_year: Option<usize>,
) -> Result<SimulationGrid, PricingError> {
    let val_date = term_sheet.meta.valuation_date;

    // Collect every event date as a year fraction, deduplicated via a sorted
    // set keyed on a fixed-precision bit pattern (dates normalize to distinct
    // day-granularity year fractions under ACT/365F, so direct f64 equality
    // on post-normalization values is safe here).
    let mut event_years: BTreeSet<OrderedF64> = BTreeSet::new();
    event_years.insert(OrderedF64(0.0));

    let mut push_date = |d: Date| -> Result<(), PricingError> {
        if d < val_date {
            return Err(PricingError::date(
                "an event date precedes the valuation date",
            ));
        }
        event_years.insert(OrderedF64(term_sheet.year_fraction(d)));
        Ok(())
    };

    for &obs in &term_sheet.schedules.observation_dates {
        push_date(obs)?;
    }
    for u in &term_sheet.underlyings {
        if let DividendModel::Discrete { schedule } = &u.dividend_model {
            for d in schedule {
                push_date(d.ex_date)?;
            }
        }
    }
    push_date(term_sheet.meta.maturity_date)?;

    // Refinement: walk consecutive event years and insert uniform sub-points.
    let mut times: Vec<f64> = event_years.into_iter().map(|o| o.0).collect();
    if let Some(steps_per_year) = n_steps_per_year {
        if steps_per_year > 0 {
            let max_dt = 1.0 / steps_per_year as f64;
            let mut refined = Vec::with_capacity(times.len());
            refined.push(times[0]);
            for window in times.windows(2) {
                let (a, b) = (window[0], window[1]);
                let span = b - a;
                let n_sub = (span / max_dt).ceil().max(1.0) as usize;
                for k in 1..=n_sub {
                    refined.push(a + span * (k as f64) / (n_sub as f64));
                }
            }
            times = refined;
        }
    }

    // De-duplicate again post-refinement (refinement boundaries coincide
    // with event times by construction, but guard against fp drift).
    times.dedup_by(|a, b| (*a - *b).abs() < 1e-12);

    let maturity_year = term_sheet.year_fraction(term_sheet.meta.maturity_date);
    let mut obs_year_to_index: Vec<(f64, usize)> = term_sheet
        .schedules
        .observation_dates
        .iter()
        .enumerate()
        .map(|(i, &d)| (term_sheet.year_fraction(d), i))
        .collect();
    obs_year_to_index.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

    let n_assets = term_sheet.n_assets();
    let mut dividend_at: Vec<Vec<(f64, f64)>> = vec![Vec::new(); n_assets];
    for (a, u) in term_sheet.underlyings.iter().enumerate() {
        if let DividendModel::Discrete { schedule } = &u.dividend_model {
            for d in schedule {
                dividend_at[a].push((term_sheet.year_fraction(d.ex_date), d.amount));
            }
        }
    }

    // Pre-resolve piecewise vol pillars to year fractions (ascending, by the
    // term sheet's own date order) so per-step lookup is a simple scan.
    let vol_pillars: Vec<Option<Vec<(f64, f64)>>> = term_sheet
        .underlyings
        .iter()
        .map(|u| match &u.vol_model {
            VolModel::Piecewise { term_structure } => Some(
                term_structure
                    .iter()
                    .map(|p| (term_sheet.year_fraction(p.date), p.vol))
                    .collect(),
            ),
            _ => None,
        })
        .collect();

    let mut steps = Vec::with_capacity(times.len() - 1);
    for w in times.windows(2) {
        let (t_start, t_end) = (w[0], w[1]);
        let dt = t_end - t_start;
        if dt <= 0.0 {
            return Err(PricingError::date("grid times are not strictly increasing"));
        }

        let forward_rate = discount_curve.forward_rate(t_start, t_end)?;
        let discount_start = discount_curve.discount_factor(t_start)?;
        let discount_end = discount_curve.discount_factor(t_end)?;

        let midpoint = 0.5 * (t_start + t_end);
        let vols: Vec<f64> = term_sheet
            .underlyings
            .iter()
            .enumerate()
            .map(|(a, u)| vol_at(&u.vol_model, vol_pillars[a].as_deref(), midpoint))
            .collect();

        let dividend_jumps: Vec<f64> = (0..n_assets)
            .map(|a| {
                dividend_at[a]
                    .iter()
                    .filter(|&&(year, _)| (year - t_end).abs() < 1e-9)
                    .map(|&(_, amount)| amount)
                    .sum()
            })
            .collect();

        let observation_index = obs_year_to_index
            .iter()
            .find(|&&(year, _)| (year - t_end).abs() < 1e-9)
            .map(|&(_, idx)| idx);

        let is_maturity = (t_end - maturity_year).abs() < 1e-9;

        steps.push(GridStep {
            t_start,
            t_end,
            dt,
            forward_rate,
            discount_start,
            discount_end,
            vols,
            dividend_jumps,
            observation_index,
            is_maturity,
        });
    }

    Ok(SimulationGrid { times, steps })
}

/// Volatility applying at year fraction `t`: the flat vol, or for a
/// piecewise term structure, the last pillar whose date is `<= t` (held flat
/// before the first pillar and beyond the final one — no extrapolation model
/// is specified). LSV models carry their own stochastic variance process and
/// report `sqrt(v0)` here purely as the grid's nominal plateau value; the
/// path generator ignores it for LSV assets in favour of the simulated
/// variance path.
fn vol_at(model: &VolModel, pillars: Option<&[(f64, f64)]>, t: f64) -> f64 {
    match model {
        VolModel::Flat { flat_vol } => *flat_vol,
        VolModel::Piecewise { .. } => {
            let pillars = pillars.expect("piecewise model must have pre-resolved pillars");
            let mut applicable = pillars[0].1;
            for &(year, vol) in pillars {
                if year <= t {
                    applicable = vol;
                } else {
                    break;
                }
            }
            applicable
        }
        VolModel::Lsv { v0, .. } => v0.sqrt(),
    }
}

/// Wraps an `f64` with a total order, for use as a `BTreeSet` key.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrderedF64(f64);

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedF64 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(std::cmp::Ordering::Equal)
    }
}
