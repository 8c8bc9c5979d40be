//! Payoff type definitions with smooth approximations.
//!
//! This module provides payoff types (Call, Put, Digital) with
//! AD-compatible smooth approximations for Enzyme compatibility.

use num_traits::Float;
use pricer_core::math::smoothing::{smooth_indicator, smooth_max};

/// Type of option payoff.
///
/// Provides AD-compatible payoff evaluation using smooth approximations.
/// All payoff computations use `smooth_max` or `smooth_indicator` to maintain
/// differentiability for Enzyme automatic differentiation.
///
/// # Variants
/// - `Call`: max(S - K, 0) payoff using smooth approximation
/// - `Put`: max(K - S, 0) payoff using smooth approximation
/// - `DigitalCall`: 1 if S > K else 0, using smooth indicator
/// - `DigitalPut`: 1 if S < K else 0, using smooth indicator
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// let call = PayoffType::Call;
/// let payoff = call.evaluate(110.0_f64, 100.0, 1e-6);
/// assert!((payoff - 10.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
    /// Digital call: 1 if S > K else 0
    DigitalCall,
    /// Digital put: 1 if S < K else 0
    DigitalPut,
}

impl PayoffType {
    /// Evaluate the payoff for given spot and strike.
    ///
    /// Uses smooth approximations for AD compatibility:
    /// - Call/Put use `smooth_max` for differentiable max(x, 0)
    /// - Digital options use `smooth_indicator` for differentiable step function
    ///
    /// # Arguments
    /// * `spot` - Current spot price (S)
    /// * `strike` - Strike price (K)
    /// * `epsilon` - Smoothing parameter for AD compatibility
    ///
    /// # Returns
    /// Smooth payoff value maintaining AD tape consistency.
    ///
    /// # Panics
    /// Panics if epsilon <= 0 (delegated to smoothing functions).
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::PayoffType;
    ///
    /// // In-the-money call
    /// let call = PayoffType::Call;
    /// let payoff = call.evaluate(110.0_f64, 100.0, 1e-6);
    /// assert!((payoff - 10.0).abs() < 0.01);
    ///
    /// // Out-of-the-money put
    /// let put = PayoffType::Put;
    /// let payoff = put.evaluate(110.0_f64, 100.0, 1e-6);
    /// assert!(payoff < 0.01);
    /// ```
    #[inline]
    pub fn evaluate<T: Float>(&self, spot: T, strike: T, epsilon: T) -> T {
        let zero = T::zero();
        match self {
            PayoffType::Call => {
                // max(S - K, 0)
                smooth_max(spot - strike, zero, epsilon)
            }
            PayoffType::Put => {
                // max(K - S, 0)
                smooth_max(strike - spot, zero, epsilon)
            }
            PayoffType::DigitalCall => {
                // 1 if S > K else 0 (smoothed)
                smooth_indicator(spot - strike, epsilon)
            }
            PayoffType::DigitalPut => {
                // 1 if S < K else 0 (smoothed)
                smooth_indicator(strike - spot, epsilon)
            }
        }
    }

    /// Returns whether this payoff is a call-type (Call or DigitalCall).
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PayoffType::Call | PayoffType::DigitalCall)
    }

    /// Returns whether this payoff is a put-type (Put or DigitalPut).
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, PayoffType::Put | PayoffType::DigitalPut)
    }

    /// Returns whether this payoff is digital (DigitalCall or DigitalPut).
    #[inline]
    pub fn is_digital(&self) -> bool {
        matches!(self, PayoffType::DigitalCall | PayoffType::DigitalPut)
    }
}
