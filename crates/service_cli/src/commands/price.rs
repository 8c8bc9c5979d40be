//! `price` command: read a term sheet, run the Monte Carlo engine once, and
//! report its present value and cashflow decomposition.

use std::fs;

use pricer_pricing::autocall::term_sheet::TermSheet;

use crate::config::{build_run_config, ConfigFile, RunOverrides};
use crate::error::{CliError, Result};

pub struct PriceArgs<'a> {
    pub term_sheet: &'a str,
    pub config: &'a str,
    pub paths: Option<usize>,
    pub seed: Option<u64>,
    pub block_size: Option<usize>,
    pub antithetic: Option<bool>,
    pub steps_per_year: Option<usize>,
    pub memory_ceiling_mb: Option<u64>,
    pub format: &'a str,
}

pub fn run(args: PriceArgs<'_>) -> Result<()> {
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

    let result = pricer_pricing::autocall::price(&term_sheet, &run_config)?;

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

fn print_table(result: &pricer_pricing::autocall::PriceResult) {
    let s = &result.summary;
    println!("pv                    {:.6}", s.pv);
    println!("pv_std_error          {:.6}", s.pv_std_error);
    println!("pv_pct_notional       {:.6}", s.pv_pct_notional);
    println!("autocall_probability  {:.6}", s.autocall_probability);
    println!("ki_probability        {:.6}", s.ki_probability);
    println!("expected_coupon_count {:.6}", s.expected_coupon_count);
    println!("expected_life_years   {:.6}", s.expected_life_years);
    println!("num_paths             {}", s.num_paths);
    println!("degenerate_paths      {}", s.degenerate_paths);
    println!("computation_time_ms   {:.3}", s.computation_time_ms);
    if !result.warnings.is_empty() {
        println!("warnings:");
        for w in &result.warnings {
            println!("  - {w}");
        }
    }
    println!("\ncashflows:");
    println!(
        "{:<22} {:<22} {:<22} {:>12} {:>14} {:>14}",
        "date", "payment_date", "category", "probability", "expected_amount", "pv_contribution"
    );
    for row in &result.cashflows {
        println!(
            "{:<22} {:<22} {:<22} {:>12.6} {:>14.6} {:>14.6}",
            row.date,
            row.payment_date,
            format!("{:?}", row.category),
            row.probability,
            row.expected_amount,
            row.pv_contribution,
        );
    }
}
