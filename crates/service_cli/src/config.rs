//! Configuration layering: an optional `autocall.toml` file supplies
//! defaults, command-line flags override them.
//!
//! No environment-variable layer: determinism is a contract on the library,
//! not an env toggle.

use std::path::Path;

use serde::Deserialize;

use pricer_pricing::autocall::config::{BumpConfig, Differencing, RunConfig};

use crate::error::{CliError, Result};

/// The `[run]` table of an `autocall.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunSection {
    pub paths: Option<usize>,
    pub seed: Option<u64>,
    pub block_size: Option<usize>,
    pub antithetic: Option<bool>,
    pub steps_per_year: Option<usize>,
    pub memory_ceiling_mb: Option<u64>,
}

/// The `[bump]` table of an `autocall.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BumpSection {
    pub spot_bump: Option<f64>,
    pub vol_bump: Option<f64>,
    pub include_rho: Option<bool>,
    pub rho_bump: Option<f64>,
    pub differencing: Option<String>,
}

/// The full contents of an `autocall.toml` config file. Every field is
/// optional: an absent file, or an absent table within a present file,
/// simply leaves the corresponding defaults untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub run: RunSection,
    #[serde(default)]
    pub bump: BumpSection,
}

impl ConfigFile {
    /// Loads `path` if it exists; returns the empty (all-defaults) config
    /// otherwise, since `--config` carries a default value rather than
    /// being required.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Overrides collected from CLI flags for the `price`/`risk` commands.
/// `None` means "flag not given, fall through to the config file or the
/// engine's own default".
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub paths: Option<usize>,
    pub seed: Option<u64>,
    pub block_size: Option<usize>,
    pub antithetic: Option<bool>,
    pub steps_per_year: Option<usize>,
    pub memory_ceiling_mb: Option<u64>,
}

/// Builds a [`RunConfig`] from a config file layer and CLI overrides (CLI
/// wins). `block_size` falls back to the full path count (a single block)
/// when neither source sets it.
pub fn build_run_config(file: &ConfigFile, cli: &RunOverrides) -> Result<RunConfig> {
    let num_paths = cli
        .paths
        .or(file.run.paths)
        .ok_or_else(|| CliError::InvalidArgument("--paths is required".to_string()))?;
    let seed = cli
        .seed
        .or(file.run.seed)
        .ok_or_else(|| CliError::InvalidArgument("--seed is required".to_string()))?;
    let block_size = cli
        .block_size
        .or(file.run.block_size)
        .unwrap_or(num_paths);
    let antithetic = cli.antithetic.or(file.run.antithetic).unwrap_or(false);
    let n_steps_per_year = cli.steps_per_year.or(file.run.steps_per_year);
    let memory_ceiling_bytes = cli
        .memory_ceiling_mb
        .or(file.run.memory_ceiling_mb)
        .map(|mb| mb * 1024 * 1024);

    let run_config = RunConfig {
        num_paths,
        seed,
        block_size,
        antithetic,
        n_steps_per_year,
        memory_ceiling_bytes,
    };
    run_config.validate().map_err(CliError::Pricing)?;
    Ok(run_config)
}

/// CLI overrides for bump sizing, used only by the `risk` command.
#[derive(Debug, Clone, Default)]
pub struct BumpOverrides {
    pub spot_bump: Option<f64>,
    pub vol_bump: Option<f64>,
    pub include_rho: Option<bool>,
    pub rho_bump: Option<f64>,
    pub differencing: Option<Differencing>,
}

/// Builds a [`BumpConfig`] from a config file layer and CLI overrides,
/// falling back to [`BumpConfig::default`] field-by-field.
pub fn build_bump_config(file: &ConfigFile, cli: &BumpOverrides) -> Result<BumpConfig> {
    let defaults = BumpConfig::default();
    let file_differencing = file
        .bump
        .differencing
        .as_deref()
        .map(parse_differencing)
        .transpose()?;

    Ok(BumpConfig {
        spot_bump_fraction: cli
            .spot_bump
            .or(file.bump.spot_bump)
            .unwrap_or(defaults.spot_bump_fraction),
        vol_bump: cli.vol_bump.or(file.bump.vol_bump).unwrap_or(defaults.vol_bump),
        include_rho: cli
            .include_rho
            .or(file.bump.include_rho)
            .unwrap_or(defaults.include_rho),
        rho_bump: cli.rho_bump.or(file.bump.rho_bump).unwrap_or(defaults.rho_bump),
        differencing: cli
            .differencing
            .or(file_differencing)
            .unwrap_or(defaults.differencing),
    })
}

fn parse_differencing(s: &str) -> Result<Differencing> {
    match s {
        "central" => Ok(Differencing::Central),
        "forward" => Ok(Differencing::Forward),
        other => Err(CliError::InvalidArgument(format!(
            "unknown differencing scheme: {other}. Supported: central, forward"
        ))),
    }
}
