//! Common trait implemented by every 1D interpolator in this module.

use crate::types::InterpolationError;
use num_traits::Float;

/// A 1D interpolator over a fixed set of `(x, y)` data points.
///
/// Implementors store their data pre-sorted by `x` at construction time, so
/// `interpolate` and `domain` are cheap, read-only lookups.
pub trait Interpolator<T: Float> {
    /// Interpolates the value at `x`.
    ///
    /// Returns [`InterpolationError::OutOfBounds`] if `x` falls outside
    /// [`Interpolator::domain`].
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// The inclusive `(x_min, x_max)` range over which `interpolate` is valid.
    fn domain(&self) -> (T, T);
}
