//! Branch-free smooth interpolation, for call sites under automatic
//! differentiation where a hard segment-selection branch (as in
//! [`super::LinearInterpolator`]'s binary search) would break gradient
//! propagation through Enzyme AD.
//!
//! Every segment's linear extrapolation is evaluated and soft-selected by a
//! sigmoid-windowed weight instead of a single branch picking one segment;
//! as `epsilon -> 0` the weights sharpen toward the hard piecewise-linear
//! indicator, at the cost of evaluating every segment on every call.

use crate::types::InterpolationError;
use num_traits::Float;

fn sigmoid<T: Float>(t: T) -> T {
    T::one() / (T::one() + (-t).exp())
}

/// Smoothly interpolates `ys` over `xs` at `x`, with `epsilon` controlling
/// the sharpness of the segment blend (smaller is closer to hard piecewise
/// linear interpolation, at the cost of a steeper gradient near knots).
///
/// Requires at least 2 data points and `x` within `[xs[0], xs[xs.len()-1]]`.
pub fn smooth_interp<T: Float>(
    xs: &[T],
    ys: &[T],
    x: T,
    epsilon: T,
) -> Result<T, InterpolationError> {
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

    let x_min = xs[0];
    let x_max = xs[xs.len() - 1];
    if x < x_min || x > x_max {
        return Err(InterpolationError::OutOfBounds {
            x: x.to_f64().unwrap_or(f64::NAN),
            min: x_min.to_f64().unwrap_or(f64::NAN),
            max: x_max.to_f64().unwrap_or(f64::NAN),
        });
    }

    let mut weighted_sum = T::zero();
    let mut weight_total = T::zero();
    for i in 0..xs.len() - 1 {
        let (x0, x1) = (xs[i], xs[i + 1]);
        let (y0, y1) = (ys[i], ys[i + 1]);
        let slope = (y1 - y0) / (x1 - x0);
        let line = y0 + slope * (x - x0);

        let weight = sigmoid((x - x0) / epsilon) * sigmoid((x1 - x) / epsilon);
        weighted_sum = weighted_sum + weight * line;
        weight_total = weight_total + weight;
    }

    Ok(weighted_sum / weight_total)
}
