//! # numeric_finance (L2: Applications)
//!
//! Discounted cash-flow formulas built on the `numeric_core` root finders.
//!
//! This crate provides:
//! - Net present value, with and without a terminal ending value (`cashflow::npv`)
//! - The analytic rate sensitivity of NPV (`cashflow::dnpv_dr`)
//! - Internal rate of return via Newton-Raphson (`cashflow::irr`)
//! - Decimal entry points for all of the above (`cashflow::npv_decimal`, ...)
//!
//! ## Usage Examples
//!
//! ```rust
//! use numeric_finance::cashflow::{irr, npv};
//! use numeric_core::types::convert::round_f64;
//!
//! let flows = [-500_000.0, 160_000.0, 160_000.0, 160_000.0, 160_000.0, 50_000.0];
//!
//! assert_eq!(round_f64(npv(&flows, 0.0), 2), 190_000.0);
//! assert_eq!(round_f64(irr(&flows, 0.0).unwrap(), 2), 0.13);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod cashflow;
