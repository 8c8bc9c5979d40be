//! CLI error taxonomy and its mapping onto process exit codes.

use thiserror::Error;

use pricer_pricing::autocall::error::PricingError;

/// Errors surfaced by the CLI layer, wrapping the engine's own
/// [`PricingError`] alongside input/IO failures specific to the command
/// line (missing files, bad flags, unparsable config).
#[derive(Debug, Error)]
pub enum CliError {
    /// A file path given on the command line does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// A flag value was syntactically well-formed but semantically invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reading a file from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The term sheet file was not valid JSON, or failed `deny_unknown_fields`.
    #[error("invalid term sheet JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The `--config` TOML file was not valid TOML.
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// The pricing engine itself rejected the input or failed during the run.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Maps this error onto the process exit code contract: `2` for
    /// anything that is a validation problem caught before simulation
    /// begins, `1` for anything that happened (or could only be detected)
    /// while the engine was running.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::FileNotFound(_)
            | CliError::InvalidArgument(_)
            | CliError::Json(_)
            | CliError::Toml(_) => 2,
            CliError::Io(_) => 1,
            CliError::Pricing(e) => match e {
                PricingError::InvalidSchema(_) | PricingError::InvalidDate(_) => 2,
                PricingError::NumericFailure(_)
                | PricingError::ResourceExceeded(_)
                | PricingError::Cancelled => 1,
            },
        }
    }
}
