//! Net present value and its rate sensitivity.

use num_traits::Float;

#[inline]
fn discount_factor<T: Float>(rate: T, period: usize) -> T {
    let growth = T::one() + rate;
    match i32::try_from(period) {
        Ok(n) => growth.powi(-n),
        Err(_) => growth.powf(-T::from(period).unwrap_or_else(T::infinity)),
    }
}

/// Net present value of equally spaced cash flows at `rate`.
///
/// An empty slice has an NPV of zero.
///
/// # Examples
/// ```
/// use numeric_finance::cashflow::npv;
///
/// let flows = [-100.0_f64, 110.0];
/// assert!(npv(&flows, 0.1).abs() < 1e-12);
/// assert_eq!(npv(&flows, 0.0), 10.0);
/// ```
pub fn npv<T: Float>(cash_flows: &[T], rate: T) -> T {
    cash_flows
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (n, &c)| acc + c * discount_factor(rate, n))
}

/// Net present value with `ending_value` paid out one period after the last
/// cash flow.
///
/// Equivalent to appending `-ending_value` to `cash_flows` and calling
/// [`npv`].
pub fn npv_with_ending_value<T: Float>(cash_flows: &[T], ending_value: T, rate: T) -> T {
    npv(cash_flows, rate) - ending_value * discount_factor(rate, cash_flows.len())
}

/// Analytic derivative of [`npv`] with respect to `rate`.
///
/// # Examples
/// ```
/// use numeric_finance::cashflow::dnpv_dr;
///
/// // d/dr [110 / (1 + r)] at r = 0 is -110
/// assert_eq!(dnpv_dr(&[-100.0_f64, 110.0], 0.0), -110.0);
/// ```
pub fn dnpv_dr<T: Float>(cash_flows: &[T], rate: T) -> T {
    cash_flows.iter().enumerate().fold(T::zero(), |acc, (n, &c)| {
        let period = T::from(n).unwrap_or_else(T::nan);
        acc - period * c * discount_factor(rate, n + 1)
    })
}
