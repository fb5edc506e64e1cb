//! # numeric_core: Root Finding and Finite Differences
//!
//! ## Layer 1 (Foundation) Role
//!
//! numeric_core is the bottom layer of the workspace, providing:
//! - Finite-difference derivatives of functions and sampled data (`math::differentiation`)
//! - Root finders: bisection, binary search, Newton-Raphson, Brent, Brent with retry (`math::solvers`)
//! - The `IterationResult` envelope and `SamplePoint` (`types`)
//! - Range-checked conversions between `f64`, `Decimal` and `i16` (`types::convert`)
//! - Error types: `SolverError`, `ConversionError`, `DifferentiationError`, `ConfigError` (`types::error`)
//! - TOML solver settings with environment overrides (`settings`, with the `serde` feature)
//!
//! ## Numeric Domains
//!
//! Algorithms are written once over `T: num_traits::Float`. Decimal
//! ([`rust_decimal::Decimal`]) entry points convert at the boundary and
//! delegate to the `f64` implementation.
//!
//! ## Usage Examples
//!
//! ```rust
//! use numeric_core::math::differentiation::derivative_default;
//! use numeric_core::math::solvers::{BrentSolver, SolverConfig};
//! use numeric_core::types::convert::round_f64;
//!
//! // Root of sin(x - 1) on [-π/2, π/2]
//! let solver = BrentSolver::new(SolverConfig::default());
//! let result = solver.find_root(|x: f64| (x - 1.0).sin(), -1.5707963, 1.5707963);
//! assert_eq!(round_f64(result.value().unwrap(), 2), 1.0);
//!
//! // d/dx sin(x) at 0
//! let slope = derivative_default(f64::sin, 0.0, 0.01);
//! # assert!((slope - 1.0).abs() < 1e-8);
//! ```
//!
//! ## Logging
//!
//! Solvers emit `tracing` events (`debug` on termination, `trace` per Brent
//! step, `warn` when the retry wrapper gives up). No subscriber is installed.
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for configs and errors, plus TOML settings

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
#[cfg(feature = "serde")]
pub mod settings;
pub mod types;
