//! Numerical building blocks shared by the market data and pricing layers.
//!
//! - [`interpolators`]: 1D and 2D interpolation over market data (curves, surfaces)
//! - [`solvers`]: root-finding and least-squares optimization (implied vol, calibration)
//! - [`smoothing`]: differentiable replacements for `max`/`min`/`abs`/indicator functions

pub mod interpolators;
pub mod smoothing;
pub mod solvers;
