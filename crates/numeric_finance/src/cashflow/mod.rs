//! Discounted cash-flow analysis.
//!
//! Cash flows are equally spaced: `cash_flows[n]` is received at the end of
//! period `n`, so index 0 is undiscounted.
//!
//! ## Formulas
//!
//! - **NPV**: Σ Cₙ·(1+r)⁻ⁿ
//! - **dNPV/dr**: Σ −n·Cₙ·(1+r)⁻⁽ⁿ⁺¹⁾
//! - **IRR**: the rate r at which NPV(r) = 0
//!
//! ## Numeric Domains
//!
//! The formulas are generic over `T: Float`. The `*_decimal` functions
//! convert to `f64` at the boundary and convert the result back, returning
//! [`ConversionError`](numeric_core::types::ConversionError) when a value
//! cannot cross.

mod decimal;
mod irr;
mod npv;

pub use decimal::{dnpv_dr_decimal, irr_decimal, npv_decimal, npv_with_ending_value_decimal};
pub use irr::{irr, irr_with_config};
pub use npv::{dnpv_dr, npv, npv_with_ending_value};
