//! Foreign exchange derivative instruments.
//!
//! This module provides FX derivative instruments including:
//! - FX Options
//! - FX Forwards
//!
//! # Feature Flag
//!
//! This module is available when the `fx` feature is enabled.
//!
//! # Future Implementation
//!
//! This module is a skeleton that will be implemented in future tasks.
