//! StochasticModel trait for unified stochastic process interface.
//!
//! This module defines the core trait abstraction for stochastic process models
//! (GBM, Heston, SABR), enabling a consistent interface for path generation
//! and Monte Carlo simulations.
//!
//! ## Design Philosophy
//!
//! - **Static dispatch only**: Use enum-based dispatch, not `Box<dyn Trait>`
//! - **Generic Float type**: Supports f64 and DualNumber for AD compatibility
//! - **Differentiable marker**: All models must implement `Differentiable` trait
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::stochastic::{StochasticModel, StochasticState};
//! use pricer_core::traits::Float;
//! use pricer_core::traits::priceable::Differentiable;
//!
//! // Implement for a simple GBM model
//! struct SimpleGBM<T: Float> {
//!     spot: T,
//!     rate: T,
//!     volatility: T,
//! }
//!
//! impl<T: Float> Differentiable for SimpleGBM<T> {}
//!
//! // Model implementation would follow...
//! ```

use pricer_core::traits::priceable::Differentiable;
use pricer_core::traits::Float;

/// State representation for stochastic models.
///
/// Different models have different state dimensions:
/// - GBM: Single value (price)
/// - Heston: Two values (price, variance)
/// - Multi-factor models: Multiple values
///
/// This trait provides a unified interface for state manipulation.
pub trait StochasticState<T: Float>: Clone + Copy + Default {
    /// Number of state variables
    fn dimension() -> usize;

    /// Get state component by index
    fn get(&self, index: usize) -> Option<T>;

    /// Set state component by index
    fn set(&mut self, index: usize, value: T) -> bool;

    /// Create state from slice
    fn from_slice(values: &[T]) -> Option<Self>;

    /// Convert state to array representation
    fn to_array(&self) -> Vec<T>;
}

/// Single-factor state (e.g., GBM price)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SingleState<T: Float>(pub T);

impl<T: Float + Default> StochasticState<T> for SingleState<T> {
    fn dimension() -> usize {
        1
    }

    fn get(&self, index: usize) -> Option<T> {
        if index == 0 {
            Some(self.0)
        } else {
            None
        }
    }

    fn set(&mut self, index: usize, value: T) -> bool {
        if index == 0 {
            self.0 = value;
            true
        } else {
            false
        }
    }

    fn from_slice(values: &[T]) -> Option<Self> {
        if !values.is_empty() {
            Some(SingleState(values[0]))
        } else {
            None
        }
    }

    fn to_array(&self) -> Vec<T> {
        vec![self.0]
    }
}

/// Two-factor state (e.g., Heston price and variance)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TwoFactorState<T: Float> {
    /// First state variable (typically price)
    pub first: T,
    /// Second state variable (typically variance)
    pub second: T,
}

impl<T: Float + Default> StochasticState<T> for TwoFactorState<T> {
    fn dimension() -> usize {
        2
    }

    fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.first),
            1 => Some(self.second),
            _ => None,
        }
    }

    fn set(&mut self, index: usize, value: T) -> bool {
        match index {
            0 => {
                self.first = value;
                true
            }
            1 => {
                self.second = value;
                true
            }
            _ => false,
        }
    }

    fn from_slice(values: &[T]) -> Option<Self> {
        if values.len() >= 2 {
            Some(TwoFactorState {
                first: values[0],
                second: values[1],
            })
        } else {
            None
        }
    }

    fn to_array(&self) -> Vec<T> {
        vec![self.first, self.second]
    }
}

/// Unified trait interface for stochastic process models.
///
/// This trait defines the core methods required for Monte Carlo simulation:
/// - `evolve_step`: Advance state by one time step
/// - `initial_state`: Get starting state from parameters
/// - `brownian_dim`: Number of Brownian motion increments needed
///
/// # Type Parameters
/// * `T` - Float type (f64 or DualNumber)
///
/// # Type Safety
/// - T: Float bound ensures numeric operations available
/// - State type is model-specific (e.g., f64 for GBM, (f64, f64) for Heston)
///
/// # Static Dispatch Only
/// **IMPORTANT**: Do NOT use `Box<dyn StochasticModel>`. Use enum-based dispatch
/// via `StochasticModelEnum` for Enzyme LLVM compatibility.
///
/// # Example
/// ```ignore
/// use pricer_models::models::stochastic::StochasticModel;
///
/// // Correct: enum-based dispatch
/// match model {
///     StochasticModelEnum::GBM(gbm) => gbm.evolve_step(state, dt, &dw),
///     StochasticModelEnum::Heston(heston) => heston.evolve_step(state, dt, &dw),
/// }
///
/// // WRONG: dynamic dispatch - incompatible with Enzyme
/// // let model: Box<dyn StochasticModel<f64>> = ...
/// ```
pub trait StochasticModel<T: Float>: Differentiable {
    /// Model-specific state type (GBM: `SingleState<T>`, Heston: `TwoFactorState<T>`)
    type State: StochasticState<T>;

    /// Model parameters type
    type Params: Clone;

    /// Evolve state by one time step.
    ///
    /// # Arguments
    /// * `state` - Current state
    /// * `dt` - Time step size (must be positive)
    /// * `dw` - Brownian motion increments (length must equal `brownian_dim()`)
    /// * `params` - Model parameters
    ///
    /// # Returns
    /// Next state after one time step
    ///
    /// # Preconditions
    /// - `dt > 0`
    /// - `dw.len() == Self::brownian_dim()`
    ///
    /// # Postconditions
    /// - Returned state is finite (no NaN/Inf)
    fn evolve_step(state: Self::State, dt: T, dw: &[T], params: &Self::Params) -> Self::State;

    /// Get initial state from model parameters.
    ///
    /// # Arguments
    /// * `params` - Model parameters containing initial values
    ///
    /// # Returns
    /// Initial state for simulation
    fn initial_state(params: &Self::Params) -> Self::State;

    /// Number of Brownian motion increments required per step.
    ///
    /// # Returns
    /// - 1 for single-factor models (GBM)
    /// - 2 for two-factor models (Heston with correlated Brownian)
    fn brownian_dim() -> usize;

    /// Model name for logging and debugging.
    fn model_name() -> &'static str;

    /// Number of stochastic factors in the model.
    ///
    /// This method returns the number of independent risk factors in the model:
    /// - 1 for single-factor models (GBM, Hull-White 1F, CIR)
    /// - 2 for two-factor models (G2++, Heston with separate volatility)
    /// - n for multi-factor models (LMM, hybrid models)
    ///
    /// # Returns
    ///
    /// Number of stochastic factors (must be >= 1)
    ///
    /// # Note
    ///
    /// This is distinct from `brownian_dim()` which returns the number of
    /// Brownian motion increments required. For correlated models, these
    /// may differ (e.g., Heston has 2 factors but may use 2 correlated Brownians).
    fn num_factors() -> usize;
}
