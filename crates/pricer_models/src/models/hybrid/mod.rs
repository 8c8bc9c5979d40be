//! Hybrid and correlated stochastic models.
//!
//! This module provides models for multi-factor processes:
//! - Correlated models with Cholesky decomposition (future implementation)
//! - Hybrid equity-rates models (future implementation)
//!
//! # Feature Flag
//!
//! This module is available when the `exotic` feature is enabled
//! (hybrid models are typically used for exotic derivatives).
//!
//! # Future Implementation
//!
//! This module is a skeleton that will be implemented in future tasks.

pub mod correlated;
