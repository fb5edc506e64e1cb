//! Root-finding solvers for scalar functions.
//!
//! ## Available Solvers
//!
//! ### Bracketing
//!
//! - [`BisectionSolver`]: Interval halving; never fails for running out of iterations
//! - [`BinarySearchSolver`]: Tolerance-stepped search for increasing functions
//! - [`BrentSolver`]: Bisection / secant / inverse quadratic hybrid
//! - [`BrentRetrySolver`]: Brent's method that rescales a failing bracket and retries
//!
//! ### Open
//!
//! - [`NewtonRaphsonSolver`]: Derivative-based iteration from a single guess
//!
//! Every solver returns an [`IterationResult`](crate::types::IterationResult)
//! carrying the estimate, iteration and evaluation counts, the converged flag
//! and any failure. Precondition violations always appear as failures.
//! Running out of iterations is a failure for Brent's method only.
//!
//! ## Configuration
//!
//! Bracketing solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-4)
//! - `max_iterations`: Maximum iteration count (default: 25)
//!
//! Newton-Raphson uses [`NewtonRaphsonConfig`]; the retry wrapper uses
//! [`RetryConfig`].
//!
//! ## Decimal Values
//!
//! The `f64` instantiation of each solver also offers `find_root_decimal`,
//! which takes and returns [`rust_decimal::Decimal`] values.
//!
//! ## Examples
//!
//! ```
//! use numeric_core::math::solvers::{BrentSolver, NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let f = |x: f64| x * x - 2.0;
//!
//! let brent = BrentSolver::new(SolverConfig::new(1e-12, 100));
//! let root = brent.find_root(f, 0.0, 2.0).value().unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//!
//! let newton = NewtonRaphsonSolver::with_defaults();
//! let result = newton.find_root(f, |x: f64| 2.0 * x, 1.0);
//! assert!(result.converged());
//! ```

mod binary_search;
mod bisection;
mod brent;
mod config;
mod decimal;
mod newton_raphson;
mod retry;

// Re-export public types at module level
pub use binary_search::BinarySearchSolver;
pub use bisection::BisectionSolver;
pub use brent::BrentSolver;
pub use config::{NewtonRaphsonConfig, RetryConfig, SolverConfig};
pub use newton_raphson::NewtonRaphsonSolver;
pub use retry::{BrentRetrySolver, RetryOutcome};
