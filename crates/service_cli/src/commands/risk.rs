//! `risk` command: price a term sheet and report its first-order Greeks
//! alongside the base-case value, under Common Random Numbers.

use std::fs;

use pricer_pricing::autocall::config::Differencing;
use pricer_pricing::autocall::term_sheet::TermSheet;

use crate::config::{build_bump_config, build_run_config, BumpOverrides, ConfigFile, RunOverrides};
use crate::error::{CliError, Result};

pub struct RiskArgs<'a> {
    pub term_sheet: &'a str,
    pub config: &'a str,
    pub paths: Option<usize>,
    pub seed: Option<u64>,
    pub block_size: Option<usize>,
    pub antithetic: Option<bool>,
    pub steps_per_year: Option<usize>,
    pub memory_ceiling_mb: Option<u64>,
    pub spot_bump: Option<f64>,
    pub vol_bump: Option<f64>,
    pub include_rho: Option<bool>,
    pub rho_bump: Option<f64>,
    pub differencing: Option<String>,
    pub format: &'a str,
}

pub fn run(args: RiskArgs<'_>) -> Result<()> {
    if !std::path::Path::new(args.term_sheet).exists() {
        return Err(CliError::FileNotFound(args.term_sheet.to_string()));
    }
    let raw = fs::read_to_string(args.term_sheet)?;
    let term_sheet: TermSheet = serde_json::from_str(&raw)?;

    let config_file = ConfigFile::load(args.config)?;
    let run_config = build_run_config(
        &config_file,
        &RunOverrides {
            paths: args.paths,
            seed: args.seed,
            block_size: args.block_size,
            antithetic: args.antithetic,
            steps_per_year: args.steps_per_year,
            memory_ceiling_mb: args.memory_ceiling_mb,
        },
    )?;

    let differencing = args
        .differencing
        .as_deref()
        .map(|s| match s {
            "central" => Ok(Differencing::Central),
            "forward" => Ok(Differencing::Forward),
            other => Err(CliError::InvalidArgument(format!(
                "unknown differencing scheme: {other}. Supported: central, forward"
            ))),
        })
        .transpose()?;

    let bump_config = build_bump_config(
        &config_file,
        &BumpOverrides {
            spot_bump: args.spot_bump,
            vol_bump: args.vol_bump,
            include_rho: args.include_rho,
            rho_bump: args.rho_bump,
            differencing,
        },
    )?;

    let result = pricer_pricing::autocall::risk(&term_sheet, &run_config, &bump_config)?;

    match args.format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "table" => print_table(&result),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown format: {other}. Supported: json, table"
            )));
        }
    }
    Ok(())
}

fn print_table(result: &pricer_pricing::autocall::RiskResult) {
    let s = &result.price.summary;
    println!("pv              {:.6}", s.pv);
    println!("pv_std_error    {:.6}", s.pv_std_error);
    println!();
    println!("{:<12} {:>14} {:>14} {:>14}", "asset", "delta", "delta_pct", "vega");
    for (id, delta) in &result.greeks.delta {
        let delta_pct = result.greeks.delta_pct.get(id).copied().unwrap_or(0.0);
        let vega = result.greeks.vega.get(id).copied().unwrap_or(0.0);
        println!("{id:<12} {delta:>14.6} {delta_pct:>14.6} {vega:>14.6}");
    }
    match result.greeks.rho {
        Some(rho) => println!("\nrho             {rho:.6}"),
        None => println!("\nrho             (not requested)"),
    }
}
