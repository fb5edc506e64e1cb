//! Core value and error types.
//!
//! This module provides:
//! - `convert`: Range-checked conversions between `f64`, `Decimal` and `i16`, plus rounding
//! - `iteration`: The `IterationResult` envelope returned by every solver
//! - `point`: `SamplePoint` for derivatives over sampled data
//! - `error`: Structured error types for solvers, conversions, differentiation and settings
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`IterationResult`] from `iteration`
//! - [`SamplePoint`] from `point`
//! - [`SolverError`], [`SolverErrorKind`], [`ToleranceIssue`], [`ConversionError`],
//!   [`DifferentiationError`], [`ConfigError`] from `error`

pub mod convert;
pub mod error;
pub mod iteration;
pub mod point;

// Re-export commonly used types at module level
pub use error::{
    ConfigError, ConversionError, DifferentiationError, SolverError, SolverErrorKind,
    ToleranceIssue,
};
pub use iteration::IterationResult;
pub use point::SamplePoint;
