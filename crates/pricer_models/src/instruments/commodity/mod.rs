//! Commodity derivative instruments.
//!
//! This module provides commodity derivative instruments including:
//! - Commodity Options
//! - Commodity Swaps
//!
//! # Feature Flag
//!
//! This module is available when the `commodity` feature is enabled.
//!
//! # Future Implementation
//!
//! This module is a skeleton that will be implemented in future tasks.
