//! Error taxonomy for the autocallable pricing engine.
//!
//! Kinds mirror the failure modes a caller needs to distinguish: bad input
//! (caught before any simulation runs), bad numerics (aborts the run), a
//! caller-supplied resource ceiling being exceeded, and cooperative
//! cancellation between blocks.

use thiserror::Error;

/// Errors produced while validating or pricing an autocallable term sheet.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// Required fields missing, array length mismatch, or a correlation
    /// matrix that remains non-PSD beyond tolerance even after projection.
    #[error("invalid term sheet: {0}")]
    InvalidSchema(String),

    /// Unparseable or out-of-order dates, or an observation before valuation.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A non-finite PV, or a zero divisor in the Brownian-bridge formula.
    #[error("numeric failure: {0}")]
    NumericFailure(String),

    /// `block_size * n_assets * n_steps` exceeds the caller's memory ceiling.
    #[error("resource exceeded: {0}")]
    ResourceExceeded(String),

    /// The caller's cancel token fired between blocks.
    #[error("run cancelled")]
    Cancelled,
}

/// Result alias used throughout the autocallable engine.
pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    /// Shorthand for an [`PricingError::InvalidSchema`] built from a `Display`.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::InvalidSchema(msg.into())
    }

    /// Shorthand for an [`PricingError::InvalidDate`].
    pub fn date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    /// Shorthand for an [`PricingError::NumericFailure`].
    pub fn numeric(msg: impl Into<String>) -> Self {
        Self::NumericFailure(msg.into())
    }
}
