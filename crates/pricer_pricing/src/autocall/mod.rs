//! Autocallable structured note pricing: Monte Carlo PV and first-order
//! Greeks for multi-asset equity autocallables.
//!
//! This module is the engine described by the system's design notes: a
//! term sheet plus a run configuration go in, a [`aggregator::PriceResult`]
//! (or, via [`risk`], a [`RiskResult`]) comes out, with no process-wide
//! state — every call to [`price`] is a pure function of its three
//! arguments (term sheet, run config, and the run config's own seed).
//!
//! ```text
//! TermSheet + RunConfig
//!   -> grid::build_grid            (event-aligned time partition)
//!   -> correlation::build_cholesky (Cholesky factor, PSD-projected if needed)
//!   -> path_gen::generate_block     (per block, in parallel)
//!   -> event_engine::evaluate_path  (per path within a block)
//!   -> aggregator::aggregate        (PV, decomposition, cashflow table)
//! ```
//!
//! [`risk`] wraps this pipeline with bumped term sheets sharing the exact
//! same seed, block size, and antithetic setting as the base run, which is
//! what makes the Common Random Numbers variance-reduction property hold
//! (see [`rng`] module docs).

pub mod aggregator;
pub mod calendar;
pub mod config;
pub mod correlation;
pub mod discount;
pub mod error;
pub mod event_engine;
pub mod grid;
pub mod greeks;
pub mod path_gen;
pub mod qe;
pub mod rng;
pub mod term_sheet;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use config::RunConfig;
use correlation::build_cholesky;
use discount::DiscountCurve;
use error::{PricingError, PricingResult};
use event_engine::{evaluate_path, PathOutcome};
use grid::SimulationGrid;
use term_sheet::TermSheet;

pub use aggregator::PriceResult;
pub use greeks::{risk, Greeks, RiskResult};

/// Cooperative cancellation token, polled between blocks (never inside a
/// block's hot loop, per the concurrency model). Cloning shares the same
/// underlying flag; [`CancelToken::cancel`] from any clone stops every
/// worker at its next block boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that is never cancelled unless [`CancelToken::cancel`] is called.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Requests cancellation. Takes effect at the next block boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True if [`CancelToken::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Prices `term_sheet` under `run_config`, with no cancellation support.
/// Equivalent to [`price_cancellable`] with a token that is never cancelled.
pub fn price(term_sheet: &TermSheet, run_config: &RunConfig) -> PricingResult<PriceResult> {
    price_cancellable(term_sheet, run_config, &CancelToken::new())
}

/// Prices `term_sheet` under `run_config`, checking `cancel` between blocks.
///
/// Validates the term sheet and run config before any simulation begins
/// (per the error-handling policy: input errors surface before work
/// starts), builds the grid and Cholesky factor once, then processes blocks
/// in parallel via `rayon`. Each block is fully determined by its
/// `block_index`, so the result is identical regardless of how many worker
/// threads rayon happens to use.
pub fn price_cancellable(
    term_sheet: &TermSheet,
    run_config: &RunConfig,
    cancel: &CancelToken,
) -> PricingResult<PriceResult> {
    let start = Instant::now();
    term_sheet.validate()?;
    run_config.validate()?;

    let discount_curve = DiscountCurve::from_spec(&term_sheet.discount_curve)?;
    let grid = grid::build_grid(term_sheet, &discount_curve, run_config.n_steps_per_year)?;
    run_config.check_memory_ceiling(term_sheet.n_assets(), grid.n_steps())?;
    let correlation_build = build_cholesky(term_sheet)?;

    let mut warnings = Vec::new();
    if correlation_build.projected {
        warnings.push(
            "correlation matrix was not positive semi-definite within tolerance; \
             projected to the nearest correlation matrix by eigenvalue clipping"
                .to_string(),
        );
    }

    let blocks = run_config.blocks();
    let results: Vec<PricingResult<(Vec<PathOutcome>, usize)>> = blocks
        .par_iter()
        .map(|&(block_index, n_paths)| {
            if cancel.is_cancelled() {
                return Err(PricingError::Cancelled);
            }
            run_block(
                term_sheet,
                &grid,
                &discount_curve,
                &correlation_build.cholesky,
                run_config,
                block_index,
                n_paths,
            )
        })
        .collect();

    let mut outcomes = Vec::with_capacity(run_config.num_paths);
    let mut degenerate_paths = 0usize;
    for result in results {
        let (block_outcomes, block_degenerate) = result?;
        outcomes.extend(block_outcomes);
        degenerate_paths += block_degenerate;
    }

    aggregator::aggregate(
        term_sheet,
        &discount_curve,
        &outcomes,
        degenerate_paths,
        warnings,
        start.elapsed(),
    )
}

/// Generates and evaluates one block, returning every path's outcome
/// alongside the block's degenerate-dividend path count.
fn run_block(
    term_sheet: &TermSheet,
    grid: &SimulationGrid,
    discount_curve: &DiscountCurve,
    cholesky: &pricer_models::models::hybrid::correlated::CholeskyFactor<f64>,
    run_config: &RunConfig,
    block_index: u64,
    n_paths: usize,
) -> PricingResult<(Vec<PathOutcome>, usize)> {
    let block = path_gen::generate_block(
        term_sheet,
        grid,
        discount_curve,
        cholesky,
        run_config.seed,
        block_index,
        run_config.block_size,
        n_paths,
        run_config.antithetic,
    )?;

    let observation_years: Vec<f64> = term_sheet
        .schedules
        .observation_dates
        .iter()
        .map(|&d| term_sheet.year_fraction(d))
        .collect();
    let maturity_year = term_sheet.year_fraction(term_sheet.meta.maturity_date);
    let degenerate_count = block.degenerate.iter().filter(|&&d| d).count();

    let outcomes = (0..n_paths)
        .map(|p| evaluate_path(term_sheet, &block, p, &observation_years, maturity_year))
        .collect();
    Ok((outcomes, degenerate_count))
}
