//! Fritsch-Carlson monotonicity-preserving cubic Hermite interpolation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Hermite coefficients for one segment, in the same `a + b*dx + c*dx^2 +
/// d*dx^3` layout [`super::cubic_spline`] uses.
#[derive(Debug, Clone, Copy)]
struct HermiteCoeffs<T: Float> {
    a: T,
    b: T,
    c: T,
    d: T,
}

/// A monotone cubic interpolator built with the Fritsch-Carlson tangent
/// limiter: wherever the input data is monotone between three consecutive
/// points, the fitted curve is too, unlike [`super::CubicSplineInterpolator`]
/// which can overshoot into a small dip or bump near a flat run of data.
///
/// Stores sorted (x, y) data points and computes per-segment Hermite
/// coefficients at construction. Supports automatic differentiation through
/// the generic `T: Float` type parameter.
///
/// # Construction
///
/// At least 2 data points are required; the tangent limiter only has an
/// effect with 3 or more.
#[derive(Debug, Clone)]
pub struct MonotonicInterpolator<T: Float> {
    xs: Vec<T>,
    coeffs: Vec<HermiteCoeffs<T>>,
}

impl<T: Float> MonotonicInterpolator<T> {
    /// Construct a monotone cubic interpolator from x and y data points.
    ///
    /// Data points are automatically sorted by x-coordinate if not already
    /// sorted. Requires at least 2 data points.
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        let tangents = Self::fritsch_carlson_tangents(&sorted_xs, &sorted_ys);
        let coeffs = Self::hermite_coefficients(&sorted_xs, &sorted_ys, &tangents);

        Ok(Self {
            xs: sorted_xs,
            coeffs,
        })
    }

    /// Per-knot tangents, limited per Fritsch & Carlson (1980) so the
    /// resulting Hermite cubic never overshoots a monotone run of secants.
    fn fritsch_carlson_tangents(xs: &[T], ys: &[T]) -> Vec<T> {
        let n = xs.len();
        let zero = T::zero();
        let three = T::from(3.0).unwrap();
        let nine = T::from(9.0).unwrap();

        let secants: Vec<T> = (0..n - 1)
            .map(|i| (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]))
            .collect();

        if n == 2 {
            return vec![secants[0], secants[0]];
        }

        let mut m = vec![zero; n];
        m[0] = secants[0];
        m[n - 1] = secants[n - 2];
        for i in 1..n - 1 {
            if secants[i - 1].signum() != secants[i].signum() || secants[i - 1] == zero || secants[i] == zero {
                m[i] = zero;
            } else {
                m[i] = (secants[i - 1] + secants[i]) / T::from(2.0).unwrap();
            }
        }

        for i in 0..n - 1 {
            let delta = secants[i];
            if delta == zero {
                m[i] = zero;
                m[i + 1] = zero;
                continue;
            }
            let alpha = m[i] / delta;
            let beta = m[i + 1] / delta;
            let norm_sq = alpha * alpha + beta * beta;
            if norm_sq > nine {
                let tau = three / norm_sq.sqrt();
                m[i] = tau * alpha * delta;
                m[i + 1] = tau * beta * delta;
            }
        }

        m
    }

    fn hermite_coefficients(xs: &[T], ys: &[T], m: &[T]) -> Vec<HermiteCoeffs<T>> {
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        (0..xs.len() - 1)
            .map(|i| {
                let h = xs[i + 1] - xs[i];
                let a = ys[i];
                let b = m[i];
                let c = (three * (ys[i + 1] - ys[i]) / h - two * m[i] - m[i + 1]) / h;
                let d = (two * (ys[i] - ys[i + 1]) / h + m[i] + m[i + 1]) / (h * h);
                HermiteCoeffs { a, b, c, d }
            })
            .collect()
    }

    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for MonotonicInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let x_min = self.xs[0];
        let x_max = self.xs[self.xs.len() - 1];
        if x < x_min || x > x_max {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);
        let coeffs = &self.coeffs[i];
        let dx = x - self.xs[i];
        let dx2 = dx * dx;
        let dx3 = dx2 * dx;
        Ok(coeffs.a + coeffs.b * dx + coeffs.c * dx2 + coeffs.d * dx3)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
