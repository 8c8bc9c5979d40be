//! Flat volatility surface implementation.

use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Flat volatility surface with constant implied volatility.
///
/// A simple volatility surface where the same volatility applies to all
/// strike and expiry combinations. Useful for prototyping, testing, and
/// scenarios where smile/skew effects are negligible.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `Dual64`)
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
///
/// let surface = FlatVol::new(0.20_f64);
///
/// // Volatility is constant for all strikes and expiries
/// assert_eq!(surface.volatility(80.0, 0.5).unwrap(), 0.20);
/// assert_eq!(surface.volatility(100.0, 1.0).unwrap(), 0.20);
/// assert_eq!(surface.volatility(120.0, 2.0).unwrap(), 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVol<T: Float> {
    /// The constant implied volatility
    sigma: T,
}

impl<T: Float> FlatVol<T> {
    /// Construct a flat volatility surface.
    ///
    /// # Arguments
    ///
    /// * `sigma` - The constant implied volatility
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::surfaces::FlatVol;
    ///
    /// let surface = FlatVol::new(0.25_f64);
    /// assert_eq!(surface.sigma(), 0.25);
    /// ```
    #[inline]
    pub fn new(sigma: T) -> Self {
        Self { sigma }
    }

    /// Return the constant volatility.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::surfaces::FlatVol;
    ///
    /// let surface = FlatVol::new(0.30_f64);
    /// assert_eq!(surface.sigma(), 0.30);
    /// ```
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}

impl<T: Float> VolatilitySurface<T> for FlatVol<T> {
    /// Return the implied volatility for given strike and expiry.
    ///
    /// For a flat surface, returns the constant volatility regardless
    /// of strike and expiry (as long as they are positive).
    ///
    /// # Arguments
    ///
    /// * `strike` - Strike price (must be > 0)
    /// * `expiry` - Time to expiry in years (must be > 0)
    ///
    /// # Returns
    ///
    /// * `Ok(sigma)` - The constant volatility
    /// * `Err(MarketDataError::InvalidStrike)` - If strike <= 0
    /// * `Err(MarketDataError::InvalidExpiry)` - If expiry <= 0
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        if strike <= T::zero() {
            return Err(MarketDataError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }
        if expiry <= T::zero() {
            return Err(MarketDataError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.sigma)
    }

    /// Return the valid strike domain.
    ///
    /// For a flat surface, any positive strike is valid.
    #[inline]
    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    /// Return the valid expiry domain.
    ///
    /// For a flat surface, any positive expiry is valid.
    #[inline]
    fn expiry_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
