//! Command-line interface for pricing autocallable structured notes.
//!
//! # Commands
//!
//! - `autocall price --term-sheet <file>` - price a note, once
//! - `autocall risk --term-sheet <file>` - price a note and its Greeks
//!
//! # Exit codes
//!
//! `0` on success, `2` for input/validation failures caught before
//! simulation starts, `1` for failures during the run itself (numeric
//! blow-up, resource limits, cancellation).

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Autocallable structured note pricing CLI.
#[derive(Parser)]
#[command(name = "autocall")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (`[run]`/`[bump]` sections; CLI flags win
    /// over anything it sets).
    #[arg(short, long, global = true, default_value = "autocall.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a term sheet once and report PV, standard error, and the
    /// expected cashflow decomposition.
    Price {
        /// Path to the term sheet JSON file.
        #[arg(short, long)]
        term_sheet: String,

        /// Number of Monte Carlo paths.
        #[arg(short, long)]
        paths: Option<usize>,

        /// Base RNG seed.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Paths simulated per parallel block.
        #[arg(long)]
        block_size: Option<usize>,

        /// Pair each path with its antithetic partner (requires even paths).
        #[arg(long)]
        antithetic: Option<bool>,

        /// Uniform grid refinement, steps per year, on top of event dates.
        #[arg(long)]
        steps_per_year: Option<usize>,

        /// Caller-supplied memory ceiling for a block's working buffer, in
        /// megabytes. Exceeding it fails fast with a `ResourceExceeded` error
        /// before any path is simulated.
        #[arg(long)]
        memory_ceiling_mb: Option<u64>,

        /// Output format (json, table).
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Price a term sheet and compute its first-order Greeks (delta, vega,
    /// optionally rho) under Common Random Numbers.
    Risk {
        /// Path to the term sheet JSON file.
        #[arg(short, long)]
        term_sheet: String,

        /// Number of Monte Carlo paths.
        #[arg(short, long)]
        paths: Option<usize>,

        /// Base RNG seed.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Paths simulated per parallel block.
        #[arg(long)]
        block_size: Option<usize>,

        /// Pair each path with its antithetic partner (requires even paths).
        #[arg(long)]
        antithetic: Option<bool>,

        /// Uniform grid refinement, steps per year, on top of event dates.
        #[arg(long)]
        steps_per_year: Option<usize>,

        /// Caller-supplied memory ceiling for a block's working buffer, in
        /// megabytes. Exceeding it fails fast with a `ResourceExceeded` error
        /// before any path is simulated.
        #[arg(long)]
        memory_ceiling_mb: Option<u64>,

        /// Spot bump fraction applied per underlying for delta.
        #[arg(long)]
        spot_bump: Option<f64>,

        /// Absolute vol bump (vol points) applied per underlying for vega.
        #[arg(long)]
        vol_bump: Option<f64>,

        /// Compute a single parallel-shift rho.
        #[arg(long)]
        include_rho: Option<bool>,

        /// Flat discount curve bump, in rate units, for rho.
        #[arg(long)]
        rho_bump: Option<f64>,

        /// Finite-difference scheme: central or forward.
        #[arg(long)]
        differencing: Option<String>,

        /// Output format (json, table).
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if cli.verbose {
        info!("verbose mode enabled");
    }

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Price {
            term_sheet,
            paths,
            seed,
            block_size,
            antithetic,
            steps_per_year,
            memory_ceiling_mb,
            format,
        } => commands::price::run(commands::price::PriceArgs {
            term_sheet: &term_sheet,
            config: &cli.config,
            paths,
            seed,
            block_size,
            antithetic,
            steps_per_year,
            memory_ceiling_mb,
            format: &format,
        }),
        Commands::Risk {
            term_sheet,
            paths,
            seed,
            block_size,
            antithetic,
            steps_per_year,
            memory_ceiling_mb,
            spot_bump,
            vol_bump,
            include_rho,
            rho_bump,
            differencing,
            format,
        } => commands::risk::run(commands::risk::RiskArgs {
            term_sheet: &term_sheet,
            config: &cli.config,
            paths,
            seed,
            block_size,
            antithetic,
            steps_per_year,
            memory_ceiling_mb,
            spot_bump,
            vol_bump,
            include_rho,
            rho_bump,
            differencing,
            format: &format,
        }),
    }
}
