//! Multi-curve management for derivatives pricing.
//!
//! This module provides:
//! - [`CurveSet`]: Container for managing multiple named yield curves

use super::{CurveEnum, CurveName};
use crate::market_data::error::MarketDataError;
use num_traits::Float;
use std::collections::HashMap;

/// Container for managing multiple named yield curves.
///
/// `CurveSet` provides a unified interface for storing and retrieving
/// yield curves used in derivatives pricing. It supports the multi-curve
/// framework where discount curves and forward curves are managed separately.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `Dual64`)
///
/// # Multi-Curve Framework
///
/// In modern derivatives pricing, different curves are used for different purposes:
/// - **Discount curves**: Used to compute present values (typically OIS curves)
/// - **Forward curves**: Used to project future cash flows (e.g., SOFR, EURIBOR)
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveSet, CurveName, CurveEnum, FlatCurve, YieldCurve};
///
/// // Create a curve set
/// let mut curves = CurveSet::new();
///
/// // Add discount curve (OIS)
/// curves.insert(CurveName::Ois, CurveEnum::flat(0.03));
///
/// // Add forward curve (SOFR)
/// curves.insert(CurveName::Sofr, CurveEnum::flat(0.035));
///
/// // Set default discount curve
/// curves.set_discount_curve(CurveName::Ois);
///
/// // Get curves
/// let discount = curves.discount_curve().unwrap();
/// let df = discount.discount_factor(1.0).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CurveSet<T: Float> {
    /// Named curves stored in a HashMap
    curves: HashMap<CurveName, CurveEnum<T>>,
    /// Default discount curve name
    discount_curve_name: Option<CurveName>,
}

impl<T: Float> Default for CurveSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CurveSet<T> {
    /// Create an empty curve set.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::CurveSet;
    ///
    /// let curves: CurveSet<f64> = CurveSet::new();
    /// assert!(curves.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            curves: HashMap::new(),
            discount_curve_name: None,
        }
    }

    /// Create a curve set with a single flat discount curve.
    ///
    /// This is a convenience constructor for simple scenarios
    /// where only a single discount rate is needed.
    ///
    /// # Arguments
    ///
    /// * `rate` - The flat discount rate
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveSet, CurveName, YieldCurve};
    ///
    /// let curves = CurveSet::with_flat_discount(0.05_f64);
    /// let discount = curves.discount_curve().unwrap();
    /// let df = discount.discount_factor(1.0).unwrap();
    /// assert!((df - 0.951229).abs() < 1e-5);
    /// ```
    pub fn with_flat_discount(rate: T) -> Self {
        let mut set = Self::new();
        set.insert(CurveName::Discount, CurveEnum::flat(rate));
        set.set_discount_curve(CurveName::Discount);
        set
    }

    /// Insert a curve with the given name.
    ///
    /// If a curve with the same name already exists, it will be replaced.
    ///
    /// # Arguments
    ///
    /// * `name` - The curve name
    /// * `curve` - The yield curve to insert
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveSet, CurveName, CurveEnum};
    ///
    /// let mut curves = CurveSet::new();
    /// curves.insert(CurveName::Sofr, CurveEnum::flat(0.035_f64));
    /// assert!(curves.contains(&CurveName::Sofr));
    /// ```
    #[inline]
    pub fn insert(&mut self, name: CurveName, curve: CurveEnum<T>) {
        self.curves.insert(name, curve);
    }

    /// Get a curve by name.
    ///
    /// # Arguments
    ///
    /// * `name` - The curve name to look up
    ///
    /// # Returns
    ///
    /// * `Some(&CurveEnum)` - Reference to the curve if found
    /// * `None` - If no curve with that name exists
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveSet, CurveName, CurveEnum, YieldCurve};
    ///
    /// let mut curves = CurveSet::new();
    /// curves.insert(CurveName::Sofr, CurveEnum::flat(0.035_f64));
    ///
    /// let sofr = curves.get(&CurveName::Sofr).unwrap();
    /// let rate = sofr.zero_rate(1.0).unwrap();
    /// assert!((rate - 0.035).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn get(&self, name: &CurveName) -> Option<&CurveEnum<T>> {
        self.curves.get(name)
    }

    /// Get a curve by name, returning an error if not found.
    ///
    /// # Arguments
    ///
    /// * `name` - The curve name to look up
    ///
    /// # Returns
    ///
    /// * `Ok(&CurveEnum)` - Reference to the curve
    /// * `Err(MarketDataError::CurveNotFound)` - If no curve with that name exists
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveSet, CurveName, CurveEnum};
    ///
    /// let mut curves = CurveSet::new();
    /// curves.insert(CurveName::Sofr, CurveEnum::flat(0.035_f64));
    ///
    /// let result = curves.get_or_err(&CurveName::Tonar);
    /// assert!(result.is_err());
    /// ```
    pub fn get_or_err(&self, name: &CurveName) -> Result<&CurveEnum<T>, MarketDataError> {
        self.curves
            .get(name)
            .ok_or(MarketDataError::CurveNotFound { name: *name })
    }

    /// Check if a curve with the given name exists.
    ///
    /// # Arguments
    ///
    /// * `name` - The curve name to check
    ///
    /// # Returns
    ///
    /// `true` if the curve exists, `false` otherwise
    #[inline]
    pub fn contains(&self, name: &CurveName) -> bool {
        self.curves.contains_key(name)
    }

    /// Remove a curve by name.
    ///
    /// # Arguments
    ///
    /// * `name` - The curve name to remove
    ///
    /// # Returns
    ///
    /// * `Some(CurveEnum)` - The removed curve if it existed
    /// * `None` - If no curve with that name existed
    #[inline]
    pub fn remove(&mut self, name: &CurveName) -> Option<CurveEnum<T>> {
        // Clear discount curve reference if removing the discount curve
        if Some(*name) == self.discount_curve_name {
            self.discount_curve_name = None;
        }
        self.curves.remove(name)
    }

    /// Return the number of curves in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Check if the curve set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Set the default discount curve name.
    ///
    /// This designates which curve should be used for discounting
    /// when calling `discount_curve()`.
    ///
    /// # Arguments
    ///
    /// * `name` - The curve name to use as the default discount curve
    ///
    /// # Note
    ///
    /// This does not verify that the curve exists. The curve must be
    /// inserted before or after calling this method.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveSet, CurveName, CurveEnum};
    ///
    /// let mut curves = CurveSet::new();
    /// curves.insert(CurveName::Ois, CurveEnum::flat(0.03_f64));
    /// curves.set_discount_curve(CurveName::Ois);
    /// ```
    #[inline]
    pub fn set_discount_curve(&mut self, name: CurveName) {
        self.discount_curve_name = Some(name);
    }

    /// Get the default discount curve.
    ///
    /// Returns the curve designated as the discount curve via
    /// `set_discount_curve()`, or looks for a curve named `Discount`.
    ///
    /// # Returns
    ///
    /// * `Some(&CurveEnum)` - The discount curve if found
    /// * `None` - If no discount curve is configured
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveSet, CurveName, CurveEnum, YieldCurve};
    ///
    /// let mut curves = CurveSet::new();
    /// curves.insert(CurveName::Ois, CurveEnum::flat(0.03_f64));
    /// curves.set_discount_curve(CurveName::Ois);
    ///
    /// let discount = curves.discount_curve().unwrap();
    /// ```
    pub fn discount_curve(&self) -> Option<&CurveEnum<T>> {
        // First try the explicitly set discount curve
        if let Some(name) = self.discount_curve_name {
            if let Some(curve) = self.curves.get(&name) {
                return Some(curve);
            }
        }
        // Fall back to looking for a curve named Discount
        self.curves.get(&CurveName::Discount)
    }

    /// Get the default discount curve, returning an error if not found.
    ///
    /// # Returns
    ///
    /// * `Ok(&CurveEnum)` - The discount curve
    /// * `Err(MarketDataError::CurveNotFound)` - If no discount curve is configured
    pub fn discount_curve_or_err(&self) -> Result<&CurveEnum<T>, MarketDataError> {
        self.discount_curve().ok_or(MarketDataError::CurveNotFound {
            name: CurveName::Discount,
        })
    }

    /// Get a forward curve by name.
    ///
    /// This is a semantic alias for `get()` that makes the intent clearer
    /// when retrieving curves used for forward rate projections.
    ///
    /// # Arguments
    ///
    /// * `name` - The curve name (e.g., `CurveName::Sofr`, `CurveName::Euribor`)
    ///
    /// # Returns
    ///
    /// * `Some(&CurveEnum)` - The forward curve if found
    /// * `None` - If no curve with that name exists
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveSet, CurveName, CurveEnum, YieldCurve};
    ///
    /// let mut curves = CurveSet::new();
    /// curves.insert(CurveName::Sofr, CurveEnum::flat(0.035_f64));
    ///
    /// let forward = curves.forward_curve(&CurveName::Sofr).unwrap();
    /// let fwd_rate = forward.forward_rate(1.0, 2.0).unwrap();
    /// ```
    #[inline]
    pub fn forward_curve(&self, name: &CurveName) -> Option<&CurveEnum<T>> {
        self.curves.get(name)
    }

    /// Get a forward curve by name, returning an error if not found.
    ///
    /// # Arguments
    ///
    /// * `name` - The curve name
    ///
    /// # Returns
    ///
    /// * `Ok(&CurveEnum)` - The forward curve
    /// * `Err(MarketDataError::CurveNotFound)` - If no curve with that name exists
    pub fn forward_curve_or_err(&self, name: &CurveName) -> Result<&CurveEnum<T>, MarketDataError> {
        self.curves
            .get(name)
            .ok_or(MarketDataError::CurveNotFound { name: *name })
    }

    /// Iterate over all curves in the set.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveSet, CurveName, CurveEnum};
    ///
    /// let mut curves = CurveSet::new();
    /// curves.insert(CurveName::Ois, CurveEnum::flat(0.03_f64));
    /// curves.insert(CurveName::Sofr, CurveEnum::flat(0.035_f64));
    ///
    /// for (name, curve) in curves.iter() {
    ///     println!("{}: {:?}", name, curve);
    /// }
    /// ```
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&CurveName, &CurveEnum<T>)> {
        self.curves.iter()
    }

    /// Get all curve names in the set.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveSet, CurveName, CurveEnum};
    ///
    /// let mut curves = CurveSet::new();
    /// curves.insert(CurveName::Ois, CurveEnum::flat(0.03_f64));
    /// curves.insert(CurveName::Sofr, CurveEnum::flat(0.035_f64));
    ///
    /// let names: Vec<_> = curves.curve_names().collect();
    /// assert_eq!(names.len(), 2);
    /// ```
    #[inline]
    pub fn curve_names(&self) -> impl Iterator<Item = &CurveName> {
        self.curves.keys()
    }
}
