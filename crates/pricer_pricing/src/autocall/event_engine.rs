//! Per-path event engine: the ALIVE/AUTOCALLED/MATURED state machine that
//! turns a block's simulated spot path into a list of dated cashflows.
//!
//! Grounded on `path_dependent::{payoff, observer}`'s streaming-accumulator
//! architecture for the idea of folding over a path once to produce a small
//! summary, though the state machine itself (autocall-before-coupon
//! ordering, coupon memory, knock-in-conditioned maturity redemption) has no
//! direct teacher counterpart.

use super::path_gen::SimulatedBlock;
use super::term_sheet::{KiRedemptionPolicy, Monitoring, TermSheet};

/// The category of one scheduled cashflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CashflowCategory {
    /// A coupon paid at an observation (current period rate plus any memory).
    Coupon,
    /// The redemption paid when the note autocalls.
    AutocallRedemption,
    /// The redemption paid at scheduled maturity.
    MaturityRedemption,
}

/// One dated cashflow realized along a single path.
#[derive(Debug, Clone, Copy)]
pub struct Cashflow {
    /// Index into the term sheet's schedule this cashflow is tied to, or
    /// `None` for the maturity redemption when it is not also the final
    /// scheduled observation.
    pub observation_index: Option<usize>,
    /// Year fraction (from valuation) on which the cashflow is paid.
    pub payment_year: f64,
    /// Cash amount (in notional currency units, not yet discounted).
    pub amount: f64,
    /// What kind of cashflow this is.
    pub category: CashflowCategory,
}

/// The realized outcome of simulating one path to termination.
pub struct PathOutcome {
    /// Every cashflow the path generated, in payment order.
    pub cashflows: Vec<Cashflow>,
    /// Whether the note autocalled before maturity.
    pub autocalled: bool,
    /// Whether a knock-in event occurred (discrete or continuous).
    pub ki_hit: bool,
    /// Year fraction of the terminating event (autocall date, or maturity).
    pub life_years: f64,
}

/// Runs the event engine for path `p` of `block`, given the term sheet and
/// the pre-resolved observation year fractions / maturity year fraction.
pub fn evaluate_path(
    term_sheet: &TermSheet,
    block: &SimulatedBlock,
    p: usize,
    observation_years: &[f64],
    maturity_year: f64,
) -> PathOutcome {
    let schedule = &term_sheet.schedules;
    let payoff = &term_sheet.payoff;
    let n_assets = term_sheet.n_assets();
    let worst_of = payoff.worst_of;

    let mut cashflows = Vec::new();
    let mut memory = 0.0_f64;
    let mut alive = true;
    let mut autocalled = false;
    let mut ki_hit = matches!(term_sheet.ki_barrier.monitoring, Monitoring::Continuous)
        && block.ki_hit_continuous[p];
    let discrete_monitoring = matches!(
        term_sheet.ki_barrier.monitoring,
        Monitoring::DiscreteAtObservations
    );
    let mut life_years = maturity_year;

    for i in 0..schedule.len() {
        if !alive {
            break;
        }
        let payment_year = term_sheet.year_fraction(schedule.payment_dates[i]);

        // Autocall and coupon triggers are always evaluated against the
        // worst-performing asset; `worst_of` only changes how the maturity
        // redemption amount itself is computed once a knock-in has occurred
        // (see `redemption_if_ki`'s `Performance` arm below).
        let worst_perf = (0..n_assets)
            .map(|a| block.observation_spot(p, i, a) / term_sheet.underlyings[a].spot)
            .fold(f64::INFINITY, f64::min);

        if worst_perf >= schedule.autocall_levels[i] {
            let redemption = term_sheet.meta.notional * payoff.redemption_if_autocall;
            let coupon_amount = term_sheet.meta.notional
                * (schedule.coupon_rates[i] + if payoff.coupon_memory { memory } else { 0.0 });

            cashflows.push(Cashflow {
                observation_index: Some(i),
                payment_year,
                amount: redemption,
                category: CashflowCategory::AutocallRedemption,
            });
            if coupon_amount > 0.0 {
                cashflows.push(Cashflow {
                    observation_index: Some(i),
                    payment_year,
                    amount: coupon_amount,
                    category: CashflowCategory::Coupon,
                });
            }

            alive = false;
            autocalled = true;
            life_years = observation_years[i];
            break;
        }

        if worst_perf >= schedule.coupon_barriers[i] {
            let amount =
                term_sheet.meta.notional * (schedule.coupon_rates[i] + memory);
            if amount > 0.0 {
                cashflows.push(Cashflow {
                    observation_index: Some(i),
                    payment_year,
                    amount,
                    category: CashflowCategory::Coupon,
                });
            }
            memory = 0.0;
        } else if payoff.coupon_memory {
            memory += schedule.coupon_rates[i];
        }

        if discrete_monitoring && !ki_hit {
            let hit = if worst_of {
                worst_perf < term_sheet.ki_barrier.level
            } else {
                (0..n_assets).any(|a| {
                    block.observation_spot(p, i, a) / term_sheet.underlyings[a].spot
                        < term_sheet.ki_barrier.level
                })
            };
            if hit {
                ki_hit = true;
            }
        }
    }

    if alive {
        let maturity_payment_year = term_sheet.year_fraction(term_sheet.meta.maturity_payment_date);
        let worst_perf_m = (0..n_assets)
            .map(|a| block.terminal_spot(p, a) / term_sheet.underlyings[a].spot)
            .fold(f64::INFINITY, f64::min);

        let redemption = if !ki_hit {
            term_sheet.meta.notional * payoff.redemption_if_no_ki
        } else {
            match payoff.redemption_if_ki {
                KiRedemptionPolicy::WorstPerformance => (term_sheet.meta.notional * worst_perf_m)
                    .max(term_sheet.meta.notional * payoff.ki_redemption_floor),
                KiRedemptionPolicy::Performance => term_sheet.meta.notional * worst_perf_m,
                KiRedemptionPolicy::Par => term_sheet.meta.notional,
            }
        };

        cashflows.push(Cashflow {
            observation_index: None,
            payment_year: maturity_payment_year,
            amount: redemption,
            category: CashflowCategory::MaturityRedemption,
        });
        life_years = maturity_year;
    }

    PathOutcome {
        cashflows,
        autocalled,
        ki_hit,
        life_years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autocall::term_sheet::{
        Correlation, DiscountCurveSpec, DividendModel, KiBarrier, Meta, Payoff, Schedule,
        Settlement, TermSheet, Underlying, VolModel,
    };
    use pricer_core::types::time::Date;

    fn base_term_sheet(n_obs: usize, autocall_level: f64, coupon_barrier: f64) -> TermSheet {
        let val = Date::from_ymd(2024, 1, 1).unwrap();
        let maturity = Date::from_ymd(2024, 1, 1).unwrap();
        TermSheet {
            meta: Meta {
                product_id: "TEST".into(),
                currency: "USD".into(),
                notional: 1_000_000.0,
                trade_date: None,
                valuation_date: val,
                settlement_date: None,
                maturity_date: maturity,
                maturity_payment_date: maturity,
            },
            underlyings: vec![Underlying {
                id: "A".into(),
                spot: 100.0,
                currency: "USD".into(),
                dividend_model: DividendModel::Continuous { continuous_yield: 0.0 },
                vol_model: VolModel::Flat { flat_vol: 0.2 },
            }],
            discount_curve: DiscountCurveSpec::Flat { flat_rate: 0.0 },
            correlation: Correlation::default(),
            schedules: Schedule {
                observation_dates: vec![val; n_obs],
                payment_dates: vec![val; n_obs],
                autocall_levels: vec![autocall_level; n_obs],
                coupon_barriers: vec![coupon_barrier; n_obs],
                coupon_rates: vec![0.05; n_obs],
            },
            ki_barrier: KiBarrier {
                level: 0.6,
                monitoring: Monitoring::DiscreteAtObservations,
            },
            payoff: Payoff {
                worst_of: true,
                coupon_memory: false,
                settlement: Settlement::Cash,
                redemption_if_autocall: 1.0,
                redemption_if_no_ki: 1.0,
                redemption_if_ki: KiRedemptionPolicy::WorstPerformance,
                ki_redemption_floor: 0.0,
            },
        }
    }

    fn single_obs_block(spot: f64) -> SimulatedBlock {
        SimulatedBlock {
            n_paths: 1,
            n_assets: 1,
            n_obs: 1,
            observation_spots: vec![spot],
            terminal_spots: vec![spot],
            ki_hit_continuous: vec![false],
            degenerate: vec![false],
        }
    }

    #[test]
    fn autocall_triggers_and_pays_redemption() {
        let ts = base_term_sheet(1, 1.0, 0.7);
        let block = single_obs_block(105.0);
        let outcome = evaluate_path(&ts, &block, 0, &[1.0], 1.0);
        assert!(outcome.autocalled);
        assert!(!outcome.ki_hit);
        assert_eq!(outcome.cashflows.len(), 2);
        let redemption = outcome
            .cashflows
            .iter()
            .find(|c| c.category == CashflowCategory::AutocallRedemption)
            .unwrap();
        assert!((redemption.amount - 1_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn below_coupon_barrier_forfeits_without_memory() {
        let ts = base_term_sheet(1, 2.0, 0.7);
        let block = single_obs_block(50.0);
        let outcome = evaluate_path(&ts, &block, 0, &[1.0], 1.0);
        assert!(!outcome.autocalled);
        assert!(outcome.cashflows.iter().all(|c| c.category != CashflowCategory::Coupon));
    }

    #[test]
    fn ki_breach_reduces_maturity_redemption() {
        let ts = base_term_sheet(1, 2.0, 0.7);
        let block = single_obs_block(50.0);
        let outcome = evaluate_path(&ts, &block, 0, &[1.0], 1.0);
        assert!(outcome.ki_hit);
        let redemption = outcome
            .cashflows
            .iter()
            .find(|c| c.category == CashflowCategory::MaturityRedemption)
            .unwrap();
        assert!((redemption.amount - 500_000.0).abs() < 1e-6);
    }
}
