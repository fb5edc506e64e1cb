//! Decimal entry points for the cash-flow formulas.

use super::irr::irr;
use super::npv::{dnpv_dr, npv, npv_with_ending_value};
use numeric_core::types::convert::{to_decimal, to_f64};
use numeric_core::types::ConversionError;
use rust_decimal::Decimal;

fn flows_as_f64(cash_flows: &[Decimal]) -> Result<Vec<f64>, ConversionError> {
    cash_flows.iter().copied().map(to_f64).collect()
}

/// [`npv`](super::npv) over decimal cash flows.
///
/// # Examples
/// ```
/// use numeric_finance::cashflow::npv_decimal;
/// use numeric_core::types::convert::round_decimal;
/// use rust_decimal::Decimal;
///
/// let flows: Vec<Decimal> = [-500_000, 160_000, 160_000, 160_000, 160_000, 50_000]
///     .into_iter()
///     .map(Decimal::from)
///     .collect();
/// let value = npv_decimal(&flows, Decimal::ZERO).unwrap();
/// assert_eq!(round_decimal(value, 2), Decimal::from(190_000));
/// ```
pub fn npv_decimal(cash_flows: &[Decimal], rate: Decimal) -> Result<Decimal, ConversionError> {
    to_decimal(npv(&flows_as_f64(cash_flows)?, to_f64(rate)?))
}

/// [`npv_with_ending_value`](super::npv_with_ending_value) over decimal cash flows.
pub fn npv_with_ending_value_decimal(
    cash_flows: &[Decimal],
    ending_value: Decimal,
    rate: Decimal,
) -> Result<Decimal, ConversionError> {
    to_decimal(npv_with_ending_value(
        &flows_as_f64(cash_flows)?,
        to_f64(ending_value)?,
        to_f64(rate)?,
    ))
}

/// [`dnpv_dr`](super::dnpv_dr) over decimal cash flows.
pub fn dnpv_dr_decimal(cash_flows: &[Decimal], rate: Decimal) -> Result<Decimal, ConversionError> {
    to_decimal(dnpv_dr(&flows_as_f64(cash_flows)?, to_f64(rate)?))
}

/// [`irr`](super::irr) over decimal cash flows.
///
/// `Ok(None)` means no rate was found near `guess`. Conversion errors are
/// only reported for the inputs and for a converged rate.
pub fn irr_decimal(
    cash_flows: &[Decimal],
    guess: Decimal,
) -> Result<Option<Decimal>, ConversionError> {
    irr(&flows_as_f64(cash_flows)?, to_f64(guess)?)
        .map(to_decimal)
        .transpose()
}
