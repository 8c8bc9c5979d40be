//! Interest rate derivative instruments.
//!
//! This module provides interest rate derivative instruments including:
//! - Interest Rate Swaps (IRS)
//! - Swaptions
//! - Caps and Floors
//!
//! # Feature Flag
//!
//! This module is available when the `rates` feature is enabled.
//!
//! # Future Implementation
//!
//! This module is a skeleton that will be implemented in future tasks.
