//! Run configuration: path count, seeding, blocking, and bump sizing.
//!
//! Grounded on `mc::config::{MonteCarloConfig, MonteCarloConfigBuilder}` for
//! the builder-plus-`validate()` shape; the fields themselves (block size,
//! antithetic toggle, bump config) are new to this engine.

use super::error::PricingError;

/// How a Monte Carlo run is partitioned and seeded.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Total number of paths `P`, `P >= 1`.
    pub num_paths: usize,
    /// Base RNG seed for the run.
    pub seed: u64,
    /// Paths generated per block, `1 <= block_size <= num_paths`. Blocks are
    /// the unit of parallelism and of cooperative cancellation.
    pub block_size: usize,
    /// Whether to pair each path with its antithetic partner. When set,
    /// `num_paths` must be even.
    pub antithetic: bool,
    /// Optional uniform grid refinement, in steps per year, layered on top
    /// of the event-aligned grid. `None` uses event dates only.
    pub n_steps_per_year: Option<usize>,
    /// Optional caller-supplied memory ceiling, in bytes, for the path
    /// generator's per-block working buffer. `None` means no ceiling is
    /// enforced. Checked against `block_size * n_assets * (n_steps + 1) *
    /// size_of::<f64>()` once the grid is built, before any block runs;
    /// exceeding it is an [`PricingError::ResourceExceeded`], not a panic.
    pub memory_ceiling_bytes: Option<u64>,
}

impl RunConfig {
    /// Validates the structural constraints on path/block counts.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.num_paths == 0 {
            return Err(PricingError::schema("num_paths must be at least 1"));
        }
        if self.block_size == 0 || self.block_size > self.num_paths {
            return Err(PricingError::schema(
                "block_size must be between 1 and num_paths",
            ));
        }
        if self.antithetic && self.num_paths % 2 != 0 {
            return Err(PricingError::schema(
                "antithetic sampling requires an even num_paths",
            ));
        }
        if self.antithetic && self.block_size % 2 != 0 && self.block_size != self.num_paths {
            return Err(PricingError::schema(
                "antithetic sampling requires an even block_size",
            ));
        }
        Ok(())
    }

    /// Checks the per-block working-buffer footprint (`block_size *
    /// n_assets * (n_steps + 1)` doubles, for the log-spot buffer the path
    /// generator allocates per block) against [`RunConfig::memory_ceiling_bytes`],
    /// if one was supplied. A no-op when no ceiling is set.
    pub fn check_memory_ceiling(&self, n_assets: usize, n_steps: usize) -> Result<(), PricingError> {
        let Some(ceiling) = self.memory_ceiling_bytes else {
            return Ok(());
        };
        let floats = self.block_size as u128
            * n_assets as u128
            * (n_steps as u128 + 1);
        let bytes = floats * std::mem::size_of::<f64>() as u128;
        if bytes > ceiling as u128 {
            return Err(PricingError::ResourceExceeded(format!(
                "block working buffer needs {bytes} bytes (block_size={} * n_assets={} * (n_steps+1)={}), \
                 exceeding the {ceiling}-byte ceiling",
                self.block_size, n_assets, n_steps + 1,
            )));
        }
        Ok(())
    }

    /// Splits `num_paths` into blocks of at most `block_size`, returning each
    /// block's `(block_index, paths_in_block)`.
    pub fn blocks(&self) -> Vec<(u64, usize)> {
        let mut blocks = Vec::new();
        let mut remaining = self.num_paths;
        let mut idx = 0u64;
        while remaining > 0 {
            let n = remaining.min(self.block_size);
            blocks.push((idx, n));
            remaining -= n;
            idx += 1;
        }
        blocks
    }
}

/// Finite-difference scheme used to turn bumped reprices into a Greek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Differencing {
    /// `(V(x+h) - V(x-h)) / (2h)`, two reprices per bumped quantity.
    Central,
    /// `(V(x+h) - V(x)) / h`, one reprice per bumped quantity (reuses the base price).
    Forward,
}

/// Sizing and selection of the finite-difference Greeks computed by `risk`.
#[derive(Debug, Clone, Copy)]
pub struct BumpConfig {
    /// Absolute spot bump applied per underlying (e.g. `0.01` for a 1% bump
    /// expressed as a fraction of each asset's own spot).
    pub spot_bump_fraction: f64,
    /// Absolute volatility bump (e.g. `0.01` for 1 vol point).
    pub vol_bump: f64,
    /// Whether to compute the single parallel-shift rho.
    pub include_rho: bool,
    /// Flat discount curve bump size, in rate units (e.g. `0.0001` for 1bp).
    pub rho_bump: f64,
    /// Central or forward differencing.
    pub differencing: Differencing,
}

impl Default for BumpConfig {
    fn default() -> Self {
        Self {
            spot_bump_fraction: 0.01,
            vol_bump: 0.01,
            include_rho: true,
            rho_bump: 0.0001,
            differencing: Differencing::Central,
        }
    }
}
