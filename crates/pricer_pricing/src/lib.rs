//! Monte Carlo pricing engine for multi-asset autocallable structured notes.
//!
//! A term sheet plus a run configuration go in; a present value with
//! standard error, a coupon/redemption decomposition, an expected cashflow
//! table, and (via [`autocall::risk`]) first-order Greeks come out. The
//! engine is a pure function of its inputs — no process-wide state, and
//! identical results regardless of block size or worker thread count for a
//! fixed `(seed, paths, block_size, antithetic)`.
//!
//! See the [`autocall`] module for the pipeline itself: grid construction,
//! correlated path generation, the per-path event state machine, and
//! reporting.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![allow(unknown_lints)]

/// Autocallable structured note pricing: Monte Carlo PV and Greeks engine.
pub mod autocall;

pub use autocall::{price, price_cancellable, risk, CancelToken, Greeks, PriceResult, RiskResult};
