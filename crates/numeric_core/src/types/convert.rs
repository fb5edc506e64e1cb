//! Range-checked conversions between the floating-point and decimal domains.
//!
//! The iterative algorithms run on `f64`; [`Decimal`] is used where exact
//! base-10 rounding matters (currency amounts). Values cross between the two
//! only at API boundaries, through the functions in this module.
//!
//! | function | out-of-range behaviour |
//! |---|---|
//! | [`to_decimal`] | `Err(OutOfRange)` |
//! | [`to_decimal_saturating`] | clamps to `Decimal::MAX` / `Decimal::MIN`; NaN is `Err` |
//! | [`to_decimal_checked`] | `None` |
//! | [`to_f64`] | `Err(OutOfRange)` |
//! | [`to_i16`] | `Err(OutOfRange)` |
//!
//! Rounding to decimal places is half away from zero in both domains.

use super::error::ConversionError;
use num_traits::Float;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

const DECIMAL: &str = "Decimal";
const DOUBLE: &str = "f64";
const SHORT: &str = "i16";

/// `Decimal::MAX` as the nearest `f64` (slightly above the true maximum).
#[inline]
fn decimal_max_f64() -> f64 {
    Decimal::MAX.to_f64().unwrap_or(f64::MAX)
}

/// `Decimal::MIN` as the nearest `f64` (slightly below the true minimum).
#[inline]
fn decimal_min_f64() -> f64 {
    Decimal::MIN.to_f64().unwrap_or(f64::MIN)
}

/// Converts `value` to a decimal, failing outside the decimal range.
///
/// # Errors
/// `ConversionError::OutOfRange` for NaN, infinities and magnitudes that
/// the 96-bit decimal mantissa cannot hold.
///
/// # Examples
/// ```
/// use numeric_core::types::convert::{to_decimal, round_decimal};
/// use rust_decimal::Decimal;
///
/// let d = to_decimal(std::f64::consts::PI).unwrap();
/// assert_eq!(round_decimal(d, 2), Decimal::new(314, 2));
/// assert!(to_decimal(f64::MAX).is_err());
/// ```
pub fn to_decimal(value: f64) -> Result<Decimal, ConversionError> {
    to_decimal_checked(value).ok_or_else(|| ConversionError::out_of_range(value, DECIMAL))
}

/// Converts `value` to a decimal, returning `None` outside the decimal range.
pub fn to_decimal_checked(value: f64) -> Option<Decimal> {
    if value.is_nan() || value >= decimal_max_f64() || value <= decimal_min_f64() {
        return None;
    }
    Decimal::from_f64(value)
}

/// Converts `value` to a decimal, clamping out-of-range magnitudes.
///
/// Values at or beyond the decimal bounds (infinities included) map to
/// `Decimal::MAX` / `Decimal::MIN`.
///
/// # Errors
/// `ConversionError::OutOfRange` only for NaN, which has no sign to saturate towards.
///
/// # Examples
/// ```
/// use numeric_core::types::convert::to_decimal_saturating;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_decimal_saturating(f64::MAX).unwrap(), Decimal::MAX);
/// assert_eq!(to_decimal_saturating(f64::NEG_INFINITY).unwrap(), Decimal::MIN);
/// assert!(to_decimal_saturating(f64::NAN).is_err());
/// ```
pub fn to_decimal_saturating(value: f64) -> Result<Decimal, ConversionError> {
    if value.is_nan() {
        return Err(ConversionError::out_of_range(value, DECIMAL));
    }
    if value >= decimal_max_f64() {
        return Ok(Decimal::MAX);
    }
    if value <= decimal_min_f64() {
        return Ok(Decimal::MIN);
    }
    Decimal::from_f64(value).ok_or_else(|| ConversionError::out_of_range(value, DECIMAL))
}

/// Converts a decimal to `f64`.
///
/// Every decimal lies inside the `f64` range, so this only fails if the
/// underlying conversion reports a value it cannot represent.
pub fn to_f64(value: Decimal) -> Result<f64, ConversionError> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConversionError::out_of_range(value, DOUBLE))
}

/// Converts `value` to an `i16`, rounding to the nearest integer (half away
/// from zero).
///
/// # Errors
/// `ConversionError::OutOfRange` for NaN or values outside
/// `[i16::MIN, i16::MAX]`.
///
/// # Examples
/// ```
/// use numeric_core::types::convert::to_i16;
///
/// assert_eq!(to_i16(std::f64::consts::PI).unwrap(), 3);
/// assert_eq!(to_i16(f64::from(i16::MAX)).unwrap(), i16::MAX);
/// assert!(to_i16(40_000.0).is_err());
/// ```
pub fn to_i16(value: f64) -> Result<i16, ConversionError> {
    if !(value >= f64::from(i16::MIN) && value <= f64::from(i16::MAX)) {
        return Err(ConversionError::out_of_range(value, SHORT));
    }
    value
        .round()
        .to_i16()
        .ok_or_else(|| ConversionError::out_of_range(value, SHORT))
}

/// Rounds a float to `places` decimal places, half away from zero.
///
/// # Examples
/// ```
/// use numeric_core::types::convert::round_f64;
///
/// assert_eq!(round_f64(std::f64::consts::PI, 2), 3.14);
/// assert_eq!(round_f64(-2.5_f64, 0), -3.0);
/// ```
pub fn round_f64<T: Float>(value: T, places: u32) -> T {
    let scale = T::from(10.0_f64.powi(places as i32)).unwrap_or_else(T::one);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Rounds a decimal to `places` decimal places, half away from zero.
///
/// # Examples
/// ```
/// use numeric_core::types::convert::round_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_decimal(Decimal::new(2345, 3), 2), Decimal::new(235, 2));
/// assert_eq!(round_decimal(Decimal::new(-25, 1), 0), Decimal::from(-3));
/// ```
pub fn round_decimal(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Wraps a decimal function so the floating-point algorithms can call it.
///
/// Probe points that cannot be represented as decimals, and results that
/// cannot be represented as `f64`, evaluate to NaN.
pub(crate) fn decimal_fn_as_f64<F>(f: F) -> impl Fn(f64) -> f64
where
    F: Fn(Decimal) -> Decimal,
{
    move |x| {
        to_decimal_checked(x)
            .and_then(|d| f(d).to_f64())
            .unwrap_or(f64::NAN)
    }
}
