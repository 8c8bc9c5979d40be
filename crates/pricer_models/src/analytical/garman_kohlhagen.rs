//! Garman-Kohlhagen model for FX option pricing.
//!
//! This module provides the Garman-Kohlhagen closed-form solution for pricing
//! European FX options. This is the standard model for FX options and extends
//! Black-Scholes to account for two interest rates (domestic and foreign).
//!
//! # Mathematical Background
//!
//! The Garman-Kohlhagen formula prices FX options with:
//! - S: spot exchange rate (domestic per foreign)
//! - K: strike price
//! - rd: domestic risk-free rate (continuous compounding)
//! - rf: foreign risk-free rate (continuous compounding)
//! - σ: volatility of the exchange rate
//! - T: time to maturity in years
//!
//! ## Call Option Price
//! C = S * e^(-rf*T) * N(d1) - K * e^(-rd*T) * N(d2)
//!
//! ## Put Option Price
//! P = K * e^(-rd*T) * N(-d2) - S * e^(-rf*T) * N(-d1)
//!
//! where:
//! d1 = [ln(S/K) + (rd - rf + σ²/2) * T] / (σ * √T)
//! d2 = d1 - σ * √T
//!
//! # Examples
//!
//! ```
//! use pricer_models::analytical::garman_kohlhagen::{
//!     GarmanKohlhagen, GarmanKohlhagenParams,
//! };
//! use pricer_models::instruments::fx::FxOptionType;
//!
//! let params = GarmanKohlhagenParams::new(
//!     1.10,   // spot
//!     1.12,   // strike
//!     0.03,   // domestic rate (3%)
//!     0.01,   // foreign rate (1%)
//!     0.15,   // volatility (15%)
//!     1.0,    // expiry (1 year)
//! ).unwrap();
//!
//! let model = GarmanKohlhagen::new(params);
//! let call_price = model.price(FxOptionType::Call);
//! let put_price = model.price(FxOptionType::Put);
//!
//! // Put-call parity check
//! let parity_diff = call_price - put_price
//!     - (1.10 * (-0.01_f64).exp() - 1.12 * (-0.03_f64).exp());
//! assert!(parity_diff.abs() < 1e-10);
//! ```

use num_traits::Float;
use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::fx::FxOptionType;

/// Parameters for the Garman-Kohlhagen model.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `Dual64`)
#[derive(Debug, Clone, Copy)]
pub struct GarmanKohlhagenParams<T: Float> {
    /// Spot exchange rate (domestic per foreign).
    pub spot: T,
    /// Strike price.
    pub strike: T,
    /// Domestic risk-free rate (continuous compounding).
    pub rate_domestic: T,
    /// Foreign risk-free rate (continuous compounding).
    pub rate_foreign: T,
    /// Volatility of the exchange rate.
    pub volatility: T,
    /// Time to expiry in years.
    pub expiry: T,
}

impl<T: Float> GarmanKohlhagenParams<T> {
    /// Creates new Garman-Kohlhagen parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Spot exchange rate (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate_domestic` - Domestic risk-free rate (can be negative)
    /// * `rate_foreign` - Foreign risk-free rate (can be negative)
    /// * `volatility` - Volatility (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    ///
    /// # Errors
    ///
    /// Returns `AnalyticalError` if any parameter is invalid.
    pub fn new(
        spot: T,
        strike: T,
        rate_domestic: T,
        rate_foreign: T,
        volatility: T,
        expiry: T,
    ) -> Result<Self, AnalyticalError> {
        if spot <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }
        if strike <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: strike.to_f64().unwrap_or(0.0),
            });
        }
        if volatility <= T::zero() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }
        if expiry <= T::zero() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!("Invalid expiry: {}", expiry.to_f64().unwrap_or(0.0)),
            });
        }

        Ok(Self {
            spot,
            strike,
            rate_domestic,
            rate_foreign,
            volatility,
            expiry,
        })
    }

    /// Returns the forward exchange rate.
    ///
    /// F = S * exp((rd - rf) * T)
    #[inline]
    pub fn forward(&self) -> T {
        let drift = (self.rate_domestic - self.rate_foreign) * self.expiry;
        self.spot * drift.exp()
    }
}

/// Garman-Kohlhagen model for FX option pricing.
///
/// Provides closed-form solutions for European FX options including
/// price and Greeks calculations.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `Dual64`)
#[derive(Debug, Clone)]
pub struct GarmanKohlhagen<T: Float> {
    params: GarmanKohlhagenParams<T>,
    /// d1 term from the formula.
    d1: T,
    /// d2 term from the formula.
    d2: T,
    /// √T
    sqrt_t: T,
    /// e^(-rd * T)
    df_domestic: T,
    /// e^(-rf * T)
    df_foreign: T,
}

impl<T: Float> GarmanKohlhagen<T> {
    /// Creates a new Garman-Kohlhagen model instance.
    ///
    /// Pre-computes d1, d2, and discount factors for efficiency.
    ///
    /// # Arguments
    ///
    /// * `params` - Model parameters
    pub fn new(params: GarmanKohlhagenParams<T>) -> Self {
        let sqrt_t = params.expiry.sqrt();
        let vol_sqrt_t = params.volatility * sqrt_t;

        // d1 = [ln(S/K) + (rd - rf + σ²/2) * T] / (σ * √T)
        let log_sk = (params.spot / params.strike).ln();
        let drift = params.rate_domestic - params.rate_foreign
            + params.volatility * params.volatility / T::from(2.0).unwrap();
        let d1 = (log_sk + drift * params.expiry) / vol_sqrt_t;

        // d2 = d1 - σ * √T
        let d2 = d1 - vol_sqrt_t;

        // Discount factors
        let df_domestic = (-params.rate_domestic * params.expiry).exp();
        let df_foreign = (-params.rate_foreign * params.expiry).exp();

        Self {
            params,
            d1,
            d2,
            sqrt_t,
            df_domestic,
            df_foreign,
        }
    }

    /// Returns a reference to the parameters.
    #[inline]
    pub fn params(&self) -> &GarmanKohlhagenParams<T> {
        &self.params
    }

    /// Returns d1.
    #[inline]
    pub fn d1(&self) -> T {
        self.d1
    }

    /// Returns d2.
    #[inline]
    pub fn d2(&self) -> T {
        self.d2
    }

    /// Computes the option price.
    ///
    /// # Arguments
    ///
    /// * `option_type` - Call or Put
    ///
    /// # Returns
    ///
    /// Option price in domestic currency.
    pub fn price(&self, option_type: FxOptionType) -> T {
        let nd1 = norm_cdf(self.d1);
        let nd2 = norm_cdf(self.d2);

        match option_type {
            FxOptionType::Call => {
                // C = S * e^(-rf*T) * N(d1) - K * e^(-rd*T) * N(d2)
                self.params.spot * self.df_foreign * nd1
                    - self.params.strike * self.df_domestic * nd2
            }
            FxOptionType::Put => {
                // P = K * e^(-rd*T) * N(-d2) - S * e^(-rf*T) * N(-d1)
                let nd1_neg = norm_cdf(-self.d1);
                let nd2_neg = norm_cdf(-self.d2);
                self.params.strike * self.df_domestic * nd2_neg
                    - self.params.spot * self.df_foreign * nd1_neg
            }
        }
    }

    /// Computes Delta.
    ///
    /// Delta measures the sensitivity of the option price to changes in spot.
    ///
    /// # Arguments
    ///
    /// * `option_type` - Call or Put
    ///
    /// # Returns
    ///
    /// Delta value.
    pub fn delta(&self, option_type: FxOptionType) -> T {
        let nd1 = norm_cdf(self.d1);

        match option_type {
            FxOptionType::Call => {
                // Δ_call = e^(-rf*T) * N(d1)
                self.df_foreign * nd1
            }
            FxOptionType::Put => {
                // Δ_put = -e^(-rf*T) * N(-d1) = e^(-rf*T) * (N(d1) - 1)
                self.df_foreign * (nd1 - T::one())
            }
        }
    }

    /// Computes Gamma.
    ///
    /// Gamma measures the rate of change of Delta with respect to spot.
    /// Same for both call and put options.
    ///
    /// # Returns
    ///
    /// Gamma value.
    pub fn gamma(&self) -> T {
        let pdf_d1 = norm_pdf(self.d1);

        // Γ = e^(-rf*T) * N'(d1) / (S * σ * √T)
        self.df_foreign * pdf_d1 / (self.params.spot * self.params.volatility * self.sqrt_t)
    }

    /// Computes Vega.
    ///
    /// Vega measures the sensitivity to volatility changes.
    /// Same for both call and put options.
    ///
    /// # Returns
    ///
    /// Vega value (per 1% volatility change).
    pub fn vega(&self) -> T {
        let pdf_d1 = norm_pdf(self.d1);

        // ν = S * e^(-rf*T) * N'(d1) * √T
        self.params.spot * self.df_foreign * pdf_d1 * self.sqrt_t / T::from(100.0).unwrap()
    }

    /// Computes Theta.
    ///
    /// Theta measures the sensitivity to time decay.
    ///
    /// # Arguments
    ///
    /// * `option_type` - Call or Put
    ///
    /// # Returns
    ///
    /// Theta value (per day).
    pub fn theta(&self, option_type: FxOptionType) -> T {
        let pdf_d1 = norm_pdf(self.d1);
        let nd1 = norm_cdf(self.d1);
        let nd2 = norm_cdf(self.d2);

        let two = T::from(2.0).unwrap();
        let days_per_year = T::from(365.0).unwrap();

        let term1 = -self.params.spot * self.df_foreign * pdf_d1 * self.params.volatility
            / (two * self.sqrt_t);

        match option_type {
            FxOptionType::Call => {
                let term2 = self.params.rate_foreign * self.params.spot * self.df_foreign * nd1;
                let term3 = self.params.rate_domestic * self.params.strike * self.df_domestic * nd2;
                (term1 + term2 - term3) / days_per_year
            }
            FxOptionType::Put => {
                let nd1_neg = T::one() - nd1;
                let nd2_neg = T::one() - nd2;
                let term2 = -self.params.rate_foreign * self.params.spot * self.df_foreign * nd1_neg;
                let term3 =
                    self.params.rate_domestic * self.params.strike * self.df_domestic * nd2_neg;
                (term1 + term2 + term3) / days_per_year
            }
        }
    }

    /// Computes Rho (domestic).
    ///
    /// Rho measures the sensitivity to domestic interest rate changes.
    ///
    /// # Arguments
    ///
    /// * `option_type` - Call or Put
    ///
    /// # Returns
    ///
    /// Rho value (per 1% rate change).
    pub fn rho_domestic(&self, option_type: FxOptionType) -> T {
        let nd2 = norm_cdf(self.d2);
        let hundred = T::from(100.0).unwrap();

        match option_type {
            FxOptionType::Call => {
                // ρ_d = K * T * e^(-rd*T) * N(d2)
                self.params.strike * self.params.expiry * self.df_domestic * nd2 / hundred
            }
            FxOptionType::Put => {
                // ρ_d = -K * T * e^(-rd*T) * N(-d2)
                let nd2_neg = T::one() - nd2;
                -self.params.strike * self.params.expiry * self.df_domestic * nd2_neg / hundred
            }
        }
    }

    /// Computes Rho (foreign).
    ///
    /// Rho measures the sensitivity to foreign interest rate changes.
    ///
    /// # Arguments
    ///
    /// * `option_type` - Call or Put
    ///
    /// # Returns
    ///
    /// Rho value (per 1% rate change).
    pub fn rho_foreign(&self, option_type: FxOptionType) -> T {
        let nd1 = norm_cdf(self.d1);
        let hundred = T::from(100.0).unwrap();

        match option_type {
            FxOptionType::Call => {
                // ρ_f = -S * T * e^(-rf*T) * N(d1)
                -self.params.spot * self.params.expiry * self.df_foreign * nd1 / hundred
            }
            FxOptionType::Put => {
                // ρ_f = S * T * e^(-rf*T) * N(-d1)
                let nd1_neg = T::one() - nd1;
                self.params.spot * self.params.expiry * self.df_foreign * nd1_neg / hundred
            }
        }
    }
}

/// Standard normal PDF.
#[inline]
fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(0.398_942_280_401_432_7).unwrap();
    let half = T::from(0.5).unwrap();
    frac_1_sqrt_2pi * (-half * x * x).exp()
}

/// Convenience function to price an FX call option.
///
/// # Arguments
///
/// * `spot` - Spot exchange rate
/// * `strike` - Strike price
/// * `rate_domestic` - Domestic risk-free rate
/// * `rate_foreign` - Foreign risk-free rate
/// * `volatility` - Volatility
/// * `expiry` - Time to expiry in years
///
/// # Returns
///
/// Call option price.
pub fn fx_call_price<T: Float>(
    spot: T,
    strike: T,
    rate_domestic: T,
    rate_foreign: T,
    volatility: T,
    expiry: T,
) -> Result<T, AnalyticalError> {
    let params = GarmanKohlhagenParams::new(
        spot,
        strike,
        rate_domestic,
        rate_foreign,
        volatility,
        expiry,
    )?;
    let model = GarmanKohlhagen::new(params);
    Ok(model.price(FxOptionType::Call))
}

/// Convenience function to price an FX put option.
///
/// # Arguments
///
/// * `spot` - Spot exchange rate
/// * `strike` - Strike price
/// * `rate_domestic` - Domestic risk-free rate
/// * `rate_foreign` - Foreign risk-free rate
/// * `volatility` - Volatility
/// * `expiry` - Time to expiry in years
///
/// # Returns
///
/// Put option price.
pub fn fx_put_price<T: Float>(
    spot: T,
    strike: T,
    rate_domestic: T,
    rate_foreign: T,
    volatility: T,
    expiry: T,
) -> Result<T, AnalyticalError> {
    let params = GarmanKohlhagenParams::new(
        spot,
        strike,
        rate_domestic,
        rate_foreign,
        volatility,
        expiry,
    )?;
    let model = GarmanKohlhagen::new(params);
    Ok(model.price(FxOptionType::Put))
}
