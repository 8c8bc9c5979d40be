//! Swap contract definitions.
//!
//! This module provides interest rate swap structures
//! for fixed-for-floating rate exchanges.

use num_traits::Float;
use pricer_core::types::Currency;

use super::error::InstrumentError;

/// Payment frequency for swap contracts.
///
/// Defines the standard payment frequencies for interest rate swaps.
///
/// # Variants
/// - `Annual`: Once per year (frequency = 1)
/// - `SemiAnnual`: Twice per year (frequency = 2)
/// - `Quarterly`: Four times per year (frequency = 4)
/// - `Monthly`: Twelve times per year (frequency = 12)
///
/// # Examples
/// ```
/// use pricer_models::instruments::PaymentFrequency;
///
/// let freq = PaymentFrequency::Quarterly;
/// assert_eq!(freq.periods_per_year(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentFrequency {
    /// Annual payments (once per year)
    Annual,
    /// Semi-annual payments (twice per year)
    SemiAnnual,
    /// Quarterly payments (four times per year)
    Quarterly,
    /// Monthly payments (twelve times per year)
    Monthly,
}

impl PaymentFrequency {
    /// Returns the number of payment periods per year.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::PaymentFrequency;
    ///
    /// assert_eq!(PaymentFrequency::Annual.periods_per_year(), 1);
    /// assert_eq!(PaymentFrequency::SemiAnnual.periods_per_year(), 2);
    /// assert_eq!(PaymentFrequency::Quarterly.periods_per_year(), 4);
    /// assert_eq!(PaymentFrequency::Monthly.periods_per_year(), 12);
    /// ```
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Annual => 1,
            PaymentFrequency::SemiAnnual => 2,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::Monthly => 12,
        }
    }

    /// Returns the year fraction for one payment period.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::PaymentFrequency;
    ///
    /// let annual = PaymentFrequency::Annual.period_fraction::<f64>();
    /// assert!((annual - 1.0).abs() < 1e-10);
    ///
    /// let quarterly = PaymentFrequency::Quarterly.period_fraction::<f64>();
    /// assert!((quarterly - 0.25).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn period_fraction<T: Float>(&self) -> T {
        T::one() / T::from(self.periods_per_year()).unwrap()
    }
}

/// Interest rate swap contract.
///
/// Represents a fixed-for-floating interest rate swap with specified
/// payment schedule and notional amount.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `Dual64`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{Swap, PaymentFrequency};
/// use pricer_core::types::Currency;
///
/// // Create a 5-year quarterly swap
/// let payment_dates: Vec<f64> = (1..=20).map(|i| 0.25 * i as f64).collect();
/// let swap = Swap::new(
///     1_000_000.0,
///     0.02,
///     payment_dates,
///     PaymentFrequency::Quarterly,
///     Currency::USD,
/// ).unwrap();
///
/// assert_eq!(swap.notional(), 1_000_000.0);
/// assert_eq!(swap.fixed_rate(), 0.02);
/// ```
#[derive(Debug, Clone)]
pub struct Swap<T: Float> {
    notional: T,
    fixed_rate: T,
    payment_dates: Vec<T>,
    frequency: PaymentFrequency,
    currency: Currency,
}

impl<T: Float> Swap<T> {
    /// Creates a new swap contract.
    ///
    /// # Arguments
    /// * `notional` - Notional principal amount (must be positive)
    /// * `fixed_rate` - Fixed interest rate (can be positive or negative)
    /// * `payment_dates` - Vector of payment times in years (must be sorted ascending)
    /// * `frequency` - Payment frequency
    /// * `currency` - Currency denomination
    ///
    /// # Returns
    /// `Ok(Swap)` if parameters are valid,
    /// `Err(InstrumentError)` otherwise.
    ///
    /// # Errors
    /// - `InvalidNotional`: If notional is non-positive
    /// - `InvalidParameter`: If payment_dates are not sorted or empty
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{Swap, PaymentFrequency};
    /// use pricer_core::types::Currency;
    ///
    /// let dates = vec![0.5, 1.0, 1.5, 2.0];
    /// let swap = Swap::new(1_000_000.0, 0.025, dates, PaymentFrequency::SemiAnnual, Currency::EUR);
    /// assert!(swap.is_ok());
    ///
    /// // Empty payment dates
    /// let invalid = Swap::new(1_000_000.0, 0.025, vec![], PaymentFrequency::Annual, Currency::USD);
    /// assert!(invalid.is_err());
    /// ```
    pub fn new(
        notional: T,
        fixed_rate: T,
        payment_dates: Vec<T>,
        frequency: PaymentFrequency,
        currency: Currency,
    ) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        // Validate notional is positive
        if notional <= zero {
            return Err(InstrumentError::InvalidNotional {
                notional: notional.to_f64().unwrap_or(f64::NAN),
            });
        }

        // Validate payment dates are not empty
        if payment_dates.is_empty() {
            return Err(InstrumentError::InvalidParameter {
                message: "Payment dates must not be empty".to_string(),
            });
        }

        // Validate payment dates are sorted in ascending order
        for i in 1..payment_dates.len() {
            if payment_dates[i] <= payment_dates[i - 1] {
                return Err(InstrumentError::InvalidParameter {
                    message: "Payment dates must be sorted in ascending order".to_string(),
                });
            }
        }

        // Validate all payment dates are positive
        if payment_dates[0] <= zero {
            return Err(InstrumentError::InvalidParameter {
                message: "All payment dates must be positive".to_string(),
            });
        }

        Ok(Self {
            notional,
            fixed_rate,
            payment_dates,
            frequency,
            currency,
        })
    }

    /// Returns the notional principal amount.
    #[inline]
    pub fn notional(&self) -> T {
        self.notional
    }

    /// Returns the fixed interest rate.
    #[inline]
    pub fn fixed_rate(&self) -> T {
        self.fixed_rate
    }

    /// Returns a reference to the payment dates.
    #[inline]
    pub fn payment_dates(&self) -> &[T] {
        &self.payment_dates
    }

    /// Returns the payment frequency.
    #[inline]
    pub fn frequency(&self) -> PaymentFrequency {
        self.frequency
    }

    /// Returns the currency denomination.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the number of remaining payment periods.
    #[inline]
    pub fn num_periods(&self) -> usize {
        self.payment_dates.len()
    }

    /// Returns the maturity (last payment date).
    ///
    /// # Panics
    /// This method assumes payment_dates is non-empty, which is enforced
    /// by the constructor.
    #[inline]
    pub fn maturity(&self) -> T {
        // Safe because constructor validates non-empty payment_dates
        *self.payment_dates.last().unwrap()
    }

    /// Calculates the fixed leg cash flow for a single period.
    ///
    /// # Arguments
    /// * `year_fraction` - The accrual period as a fraction of a year
    ///
    /// # Returns
    /// notional * fixed_rate * year_fraction
    #[inline]
    pub fn fixed_leg_cashflow(&self, year_fraction: T) -> T {
        self.notional * self.fixed_rate * year_fraction
    }
}
