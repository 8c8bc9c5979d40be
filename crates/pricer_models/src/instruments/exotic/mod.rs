//! Exotic derivative instruments.
//!
//! This module provides exotic derivative instruments including:
//! - Variance Swaps
//! - Volatility Swaps
//! - Cliquet Options
//! - Autocallables
//! - Rainbow Options (Best-of, Worst-of)
//! - Quanto Options
//!
//! # Feature Flag
//!
//! This module is available when the `exotic` feature is enabled.
//! Note: `exotic` implies `equity` as exotic products typically extend equity derivatives.
//!
//! # Future Implementation
//!
//! This module is a skeleton that will be implemented in future tasks.
