//! Finite-difference derivative approximations.
//!
//! Two entry points:
//! - [`derivative`]: differentiate a re-evaluable function at `x` with step `h`
//! - [`derivative_at_index`]: differentiate sampled data at one of its points,
//!   using neighbouring samples instead of fresh evaluations
//!
//! All functions are generic over `T: num_traits::Float`.
//!
//! # Stencils
//! ```text
//! centered      (f(x+h) - f(x-h)) / 2h                          O(h²)
//! forward       (-3f(x) + 4f(x+h) - f(x+2h)) / 2h                O(h²)
//! backward      (3f(x) - 4f(x-h) + f(x-2h)) / 2h                 O(h²)
//! five-point    (f(x-2h) - 8f(x-h) + 8f(x+h) - f(x+2h)) / 12h    O(h⁴)
//! ```

use crate::types::convert::{decimal_fn_as_f64, to_decimal, to_f64};
use crate::types::{ConversionError, DifferentiationError, SamplePoint};
use num_traits::Float;
use rust_decimal::Decimal;

/// Finite-difference stencil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DerivativeMethod {
    /// Three-point centered difference, O(h²)
    CenteredDifference,
    /// Three-point one-sided difference looking forward, O(h²)
    ForwardDifference,
    /// Three-point one-sided difference looking backward, O(h²)
    BackwardDifference,
    /// Five-point centered difference, O(h⁴)
    #[default]
    CenteredFivePointDifference,
}

/// Approximates `f'(x)` with the given stencil and step `h`.
///
/// Closures compose, so higher derivatives follow by nesting:
/// `derivative(m, |y| derivative(m, &f, y, h), x, h)`.
///
/// # Arguments
/// * `method` - Stencil to use
/// * `f` - Function to differentiate
/// * `x` - Evaluation point
/// * `h` - Step size (positive)
///
/// # Examples
/// ```
/// use numeric_core::math::differentiation::{derivative, DerivativeMethod};
///
/// let d = derivative(DerivativeMethod::CenteredDifference, |x: f64| x * x, 3.0, 1e-3);
/// assert!((d - 6.0).abs() < 1e-8);
/// ```
#[inline]
pub fn derivative<T, F>(method: DerivativeMethod, f: F, x: T, h: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    let four = T::from(4.0).unwrap();

    match method {
        DerivativeMethod::CenteredDifference => (f(x + h) - f(x - h)) / (two * h),
        DerivativeMethod::ForwardDifference => {
            (-three * f(x) + four * f(x + h) - f(x + two * h)) / (two * h)
        }
        DerivativeMethod::BackwardDifference => {
            (three * f(x) - four * f(x - h) + f(x - two * h)) / (two * h)
        }
        DerivativeMethod::CenteredFivePointDifference => {
            let eight = T::from(8.0).unwrap();
            let twelve = T::from(12.0).unwrap();
            (f(x - two * h) - eight * f(x - h) + eight * f(x + h) - f(x + two * h)) / (twelve * h)
        }
    }
}

/// Approximates `f'(x)` with the five-point centered stencil.
#[inline]
pub fn derivative_default<T, F>(f: F, x: T, h: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    derivative(DerivativeMethod::CenteredFivePointDifference, f, x, h)
}

/// Decimal version of [`derivative`].
///
/// # Errors
/// `ConversionError::OutOfRange` if `x` or `h` cannot be represented as
/// `f64`, or the approximation cannot be represented as a decimal (for
/// instance when `f` cannot be evaluated at a probe point).
///
/// # Examples
/// ```
/// use numeric_core::math::differentiation::{derivative_decimal, DerivativeMethod};
/// use numeric_core::types::convert::round_decimal;
/// use rust_decimal::Decimal;
///
/// let d = derivative_decimal(
///     DerivativeMethod::CenteredFivePointDifference,
///     |x| x * x,
///     Decimal::from(3),
///     Decimal::new(1, 2),
/// )
/// .unwrap();
/// assert_eq!(round_decimal(d, 6), Decimal::from(6));
/// ```
pub fn derivative_decimal<F>(
    method: DerivativeMethod,
    f: F,
    x: Decimal,
    h: Decimal,
) -> Result<Decimal, ConversionError>
where
    F: Fn(Decimal) -> Decimal,
{
    let value = derivative(method, decimal_fn_as_f64(f), to_f64(x)?, to_f64(h)?);
    to_decimal(value)
}

/// Approximates the derivative of sampled data at `points[index]`.
///
/// The first two indices use the forward stencil, the last two the backward
/// stencil and everything in between the centered stencil. Each stencil's
/// step is half the x-distance spanned by the two outer samples it reads,
/// so uneven spacing is tolerated.
///
/// # Errors
/// * `MissingNeighbour` - the stencil for `index` reads outside the slice
///   (fewer than three samples, `index >= points.len()`, or index 1 of a
///   three-sample slice, whose forward stencil needs a fourth sample)
/// * `NonIncreasingSamples` - the local step is zero, negative or NaN
///
/// # Examples
/// ```
/// use numeric_core::math::differentiation::derivative_at_index;
/// use numeric_core::types::SamplePoint;
///
/// let pts: Vec<SamplePoint<f64>> =
///     (0..5).map(|i| SamplePoint::new(i as f64, 2.0 * i as f64)).collect();
/// assert!((derivative_at_index(&pts, 2).unwrap() - 2.0).abs() < 1e-12);
/// assert!(derivative_at_index(&pts, 5).is_err());
/// ```
pub fn derivative_at_index<T: Float>(
    points: &[SamplePoint<T>],
    index: usize,
) -> Result<T, DifferentiationError> {
    let len = points.len();
    let missing = DifferentiationError::MissingNeighbour { index, len };

    if index >= len {
        return Err(missing);
    }

    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    let four = T::from(4.0).unwrap();

    let (h, numerator) = if index < 2 {
        if index + 2 >= len {
            return Err(missing);
        }
        let (p0, p1, p2) = (points[index], points[index + 1], points[index + 2]);
        ((p2.x - p0.x) / two, -three * p0.y + four * p1.y - p2.y)
    } else if index + 3 > len {
        let (p0, p1, p2) = (points[index], points[index - 1], points[index - 2]);
        ((p0.x - p2.x) / two, three * p0.y - four * p1.y + p2.y)
    } else {
        let (prev, next) = (points[index - 1], points[index + 1]);
        ((next.x - prev.x) / two, next.y - prev.y)
    };

    if !(h > T::zero()) {
        return Err(DifferentiationError::NonIncreasingSamples { index });
    }

    Ok(numerator / (two * h))
}
