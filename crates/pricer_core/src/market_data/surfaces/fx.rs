//! FX volatility surface abstractions for FX option pricing.
//!
//! This module provides:
//! - [`FxVolatilitySurface`]: Delta-expiry based volatility surface for FX options
//! - [`FxDeltaPoint`]: Standard delta points used in FX markets

use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::BilinearInterpolator;
use num_traits::Float;

/// Standard delta points used in FX volatility quoting.
///
/// In FX markets, volatility is typically quoted for specific delta points
/// rather than for absolute strikes. Common convention includes:
/// - 10D Put (10 delta put)
/// - 25D Put (25 delta put)
/// - ATM (at-the-money, typically 50 delta straddle)
/// - 25D Call (25 delta call)
/// - 10D Call (10 delta call)
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::FxDeltaPoint;
///
/// let atm = FxDeltaPoint::Atm;
/// assert!((atm.as_delta() - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FxDeltaPoint {
    /// 10 delta put
    Put10D,
    /// 25 delta put
    Put25D,
    /// At-the-money (50 delta)
    Atm,
    /// 25 delta call
    Call25D,
    /// 10 delta call
    Call10D,
}

impl FxDeltaPoint {
    /// Return the delta value for this point.
    ///
    /// # Returns
    ///
    /// The delta value in the range [-1, 1], where:
    /// - Puts have negative delta
    /// - ATM is approximately 0.5
    /// - Calls have positive delta
    ///
    /// Note: Returns absolute delta values for simplicity (0 to 1 scale).
    #[inline]
    pub fn as_delta(&self) -> f64 {
        match self {
            FxDeltaPoint::Put10D => 0.1,
            FxDeltaPoint::Put25D => 0.25,
            FxDeltaPoint::Atm => 0.5,
            FxDeltaPoint::Call25D => 0.75,
            FxDeltaPoint::Call10D => 0.9,
        }
    }

    /// Return all standard delta points in order.
    #[inline]
    pub fn all() -> [FxDeltaPoint; 5] {
        [
            FxDeltaPoint::Put10D,
            FxDeltaPoint::Put25D,
            FxDeltaPoint::Atm,
            FxDeltaPoint::Call25D,
            FxDeltaPoint::Call10D,
        ]
    }
}

/// FX volatility surface using delta × expiry grid.
///
/// This surface stores implied volatilities for FX options organized by
/// delta (moneyness) and expiry. This is the standard market convention
/// for quoting FX volatilities.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `Dual64`)
///
/// # Grid Structure
///
/// - X-axis: Delta points (0.1, 0.25, 0.5, 0.75, 0.9)
/// - Y-axis: Expiry tenors in years
/// - Values: Implied volatilities
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::FxVolatilitySurface;
///
/// // Create a 5x3 surface (5 deltas × 3 expiries)
/// let deltas = [0.1_f64, 0.25, 0.5, 0.75, 0.9];
/// let expiries = [0.25, 1.0, 2.0];
/// let vols = [
///     // 10D Put, 25D Put, ATM, 25D Call, 10D Call for each expiry
///     [0.12, 0.11, 0.10, 0.11, 0.12],  // 3M
///     [0.13, 0.12, 0.11, 0.12, 0.13],  // 1Y
///     [0.14, 0.13, 0.12, 0.13, 0.14],  // 2Y
/// ];
///
/// let surface = FxVolatilitySurface::new(&deltas, &expiries, &vols, true).unwrap();
///
/// // Get ATM vol at 1 year
/// let atm_vol = surface.atm_volatility(1.0).unwrap();
/// assert!((atm_vol - 0.11).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct FxVolatilitySurface<T: Float> {
    /// Delta points (X-axis)
    deltas: Vec<T>,
    /// Expiry tenors in years (Y-axis)
    expiries: Vec<T>,
    /// Volatility grid (expiry × delta)
    volatilities: Vec<Vec<T>>,
    /// Whether to allow extrapolation
    allow_extrapolation: bool,
}

impl<T: Float> FxVolatilitySurface<T> {
    /// Construct an FX volatility surface from a delta × expiry grid.
    ///
    /// # Arguments
    ///
    /// * `deltas` - Delta points (must be sorted, at least 2 points)
    /// * `expiries` - Expiry tenors in years (must be sorted, at least 2 points)
    /// * `volatilities` - Grid of volatilities [expiry][delta]
    /// * `allow_extrapolation` - Whether to allow flat extrapolation
    ///
    /// # Returns
    ///
    /// * `Ok(FxVolatilitySurface)` - Successfully constructed surface
    /// * `Err(MarketDataError)` - If input validation fails
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::surfaces::FxVolatilitySurface;
    ///
    /// let deltas = [0.25_f64, 0.5, 0.75];
    /// let expiries = [0.5, 1.0];
    /// let vols = [
    ///     [0.11, 0.10, 0.11],
    ///     [0.12, 0.11, 0.12],
    /// ];
    ///
    /// let surface = FxVolatilitySurface::new(&deltas, &expiries, &vols, true).unwrap();
    /// ```
    pub fn new(
        deltas: &[T],
        expiries: &[T],
        volatilities: &[impl AsRef<[T]>],
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        // Validate delta points
        if deltas.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: deltas.len(),
                need: 2,
            });
        }

        // Validate expiries
        if expiries.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: expiries.len(),
                need: 2,
            });
        }

        // Validate deltas are sorted and in valid range
        for i in 0..deltas.len() {
            if deltas[i] <= T::zero() || deltas[i] >= T::one() {
                return Err(MarketDataError::InvalidStrike {
                    strike: deltas[i].to_f64().unwrap_or(0.0),
                });
            }
            if i > 0 && deltas[i] <= deltas[i - 1] {
                return Err(MarketDataError::InvalidStrike {
                    strike: deltas[i].to_f64().unwrap_or(0.0),
                });
            }
        }

        // Validate expiries are sorted and positive
        for i in 0..expiries.len() {
            if expiries[i] <= T::zero() {
                return Err(MarketDataError::InvalidExpiry {
                    expiry: expiries[i].to_f64().unwrap_or(0.0),
                });
            }
            if i > 0 && expiries[i] <= expiries[i - 1] {
                return Err(MarketDataError::InvalidExpiry {
                    expiry: expiries[i].to_f64().unwrap_or(0.0),
                });
            }
        }

        // Validate grid dimensions
        if volatilities.len() != expiries.len() {
            return Err(MarketDataError::InsufficientData {
                got: volatilities.len(),
                need: expiries.len(),
            });
        }

        let mut vol_grid = Vec::with_capacity(expiries.len());
        for row in volatilities {
            let row_ref = row.as_ref();
            if row_ref.len() != deltas.len() {
                return Err(MarketDataError::InsufficientData {
                    got: row_ref.len(),
                    need: deltas.len(),
                });
            }

            // Validate volatilities are positive
            for &vol in row_ref {
                if vol <= T::zero() {
                    return Err(MarketDataError::InterpolationFailed {
                        reason: format!(
                            "Volatility must be positive, got {}",
                            vol.to_f64().unwrap_or(0.0)
                        ),
                    });
                }
            }

            vol_grid.push(row_ref.to_vec());
        }

        Ok(Self {
            deltas: deltas.to_vec(),
            expiries: expiries.to_vec(),
            volatilities: vol_grid,
            allow_extrapolation,
        })
    }

    /// Return the delta domain.
    #[inline]
    pub fn delta_domain(&self) -> (T, T) {
        (self.deltas[0], self.deltas[self.deltas.len() - 1])
    }

    /// Return whether extrapolation is allowed.
    #[inline]
    pub fn allow_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    /// Get the ATM (at-the-money) volatility for a given expiry.
    ///
    /// This method returns the volatility at delta = 0.5 (ATM point).
    ///
    /// # Arguments
    ///
    /// * `expiry` - Time to expiry in years
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - ATM volatility
    /// * `Err(MarketDataError)` - If expiry is invalid or out of bounds
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::surfaces::FxVolatilitySurface;
    ///
    /// let deltas = [0.25_f64, 0.5, 0.75];
    /// let expiries = [0.5, 1.0, 2.0];
    /// let vols = [
    ///     [0.11, 0.10, 0.11],
    ///     [0.12, 0.11, 0.12],
    ///     [0.13, 0.12, 0.13],
    /// ];
    ///
    /// let surface = FxVolatilitySurface::new(&deltas, &expiries, &vols, true).unwrap();
    /// let atm_1y = surface.atm_volatility(1.0).unwrap();
    /// assert!((atm_1y - 0.11).abs() < 1e-10);
    /// ```
    pub fn atm_volatility(&self, expiry: T) -> Result<T, MarketDataError> {
        let atm_delta = T::from(0.5).unwrap();
        self.volatility_by_delta(atm_delta, expiry)
    }

    /// Get volatility by delta and expiry.
    ///
    /// # Arguments
    ///
    /// * `delta` - Delta value (0 < delta < 1)
    /// * `expiry` - Time to expiry in years
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - Interpolated volatility
    /// * `Err(MarketDataError)` - If parameters are invalid or out of bounds
    pub fn volatility_by_delta(&self, delta: T, expiry: T) -> Result<T, MarketDataError> {
        if delta <= T::zero() || delta >= T::one() {
            return Err(MarketDataError::InvalidStrike {
                strike: delta.to_f64().unwrap_or(0.0),
            });
        }
        if expiry <= T::zero() {
            return Err(MarketDataError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }

        let (d_min, d_max) = self.delta_domain();
        let (t_min, t_max) = self.expiry_domain();

        // Handle extrapolation
        if !self.allow_extrapolation {
            if delta < d_min || delta > d_max {
                return Err(MarketDataError::OutOfBounds {
                    x: delta.to_f64().unwrap_or(0.0),
                    min: d_min.to_f64().unwrap_or(0.0),
                    max: d_max.to_f64().unwrap_or(0.0),
                });
            }
            if expiry < t_min || expiry > t_max {
                return Err(MarketDataError::OutOfBounds {
                    x: expiry.to_f64().unwrap_or(0.0),
                    min: t_min.to_f64().unwrap_or(0.0),
                    max: t_max.to_f64().unwrap_or(0.0),
                });
            }
        }

        // Use bilinear interpolation
        // Convert Vec<Vec<T>> to &[&[T]] for BilinearInterpolator
        let vol_slices: Vec<&[T]> = self.volatilities.iter().map(|v| v.as_slice()).collect();
        // Grid is stored as volatilities[expiry_idx][delta_idx]
        // BilinearInterpolator expects zs[x_idx][y_idx] = z(xs[x_idx], ys[y_idx])
        // So we pass expiries as x-axis and deltas as y-axis
        let interp =
            BilinearInterpolator::new(&self.expiries, &self.deltas, vol_slices.as_slice())?;

        // Clamp for extrapolation
        let clamped_delta = if delta < d_min {
            d_min
        } else if delta > d_max {
            d_max
        } else {
            delta
        };
        let clamped_expiry = if expiry < t_min {
            t_min
        } else if expiry > t_max {
            t_max
        } else {
            expiry
        };

        // Note: BilinearInterpolator was constructed with (expiries, deltas, ...)
        // so we call interpolate(expiry, delta)
        interp
            .interpolate(clamped_expiry, clamped_delta)
            .map_err(MarketDataError::from)
    }

    /// Get the 25-delta risk reversal for a given expiry.
    ///
    /// Risk reversal = σ(25D Call) - σ(25D Put)
    ///
    /// This measures the skew of the volatility smile.
    ///
    /// # Arguments
    ///
    /// * `expiry` - Time to expiry in years
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - 25-delta risk reversal
    /// * `Err(MarketDataError)` - If calculation fails
    pub fn risk_reversal_25d(&self, expiry: T) -> Result<T, MarketDataError> {
        let call_25d = T::from(0.75).unwrap();
        let put_25d = T::from(0.25).unwrap();

        let vol_call = self.volatility_by_delta(call_25d, expiry)?;
        let vol_put = self.volatility_by_delta(put_25d, expiry)?;

        Ok(vol_call - vol_put)
    }

    /// Get the 25-delta butterfly for a given expiry.
    ///
    /// Butterfly = (σ(25D Call) + σ(25D Put)) / 2 - σ(ATM)
    ///
    /// This measures the curvature of the volatility smile.
    ///
    /// # Arguments
    ///
    /// * `expiry` - Time to expiry in years
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - 25-delta butterfly
    /// * `Err(MarketDataError)` - If calculation fails
    pub fn butterfly_25d(&self, expiry: T) -> Result<T, MarketDataError> {
        let call_25d = T::from(0.75).unwrap();
        let put_25d = T::from(0.25).unwrap();
        let atm = T::from(0.5).unwrap();

        let vol_call = self.volatility_by_delta(call_25d, expiry)?;
        let vol_put = self.volatility_by_delta(put_25d, expiry)?;
        let vol_atm = self.volatility_by_delta(atm, expiry)?;

        let two = T::one() + T::one();
        Ok((vol_call + vol_put) / two - vol_atm)
    }
}

impl<T: Float> VolatilitySurface<T> for FxVolatilitySurface<T> {
    /// Return the implied volatility for given strike (interpreted as delta) and expiry.
    ///
    /// Note: For FxVolatilitySurface, the `strike` parameter is interpreted as delta.
    /// For strike-based lookups, use a separate conversion method.
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        // Interpret strike as delta for consistency with FX convention
        self.volatility_by_delta(strike, expiry)
    }

    fn strike_domain(&self) -> (T, T) {
        self.delta_domain()
    }

    fn expiry_domain(&self) -> (T, T) {
        (self.expiries[0], self.expiries[self.expiries.len() - 1])
    }
}
