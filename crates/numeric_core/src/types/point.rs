//! Sampled `(x, y)` points for derivatives over discrete data.

use super::convert::to_f64;
use super::error::ConversionError;
use rust_decimal::Decimal;

/// One sample of a function, `y = f(x)`.
///
/// Sequences of samples are passed as `&[SamplePoint<T>]`, ordered strictly
/// increasing in `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplePoint<T> {
    /// Abscissa
    pub x: T,
    /// Ordinate
    pub y: T,
}

impl<T> SamplePoint<T> {
    /// Creates a sample point.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl SamplePoint<f64> {
    /// Creates an `f64` sample from a decimal pair.
    ///
    /// # Errors
    /// `ConversionError::OutOfRange` if either coordinate cannot be
    /// represented as `f64`.
    pub fn from_decimal(x: Decimal, y: Decimal) -> Result<Self, ConversionError> {
        Ok(Self {
            x: to_f64(x)?,
            y: to_f64(y)?,
        })
    }
}

impl<T> From<(T, T)> for SamplePoint<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}
