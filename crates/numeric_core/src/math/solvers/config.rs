//! Solver configuration types.

use crate::types::{SolverError, ToleranceIssue};
use num_traits::Float;

/// Configuration for bracketing root-finding algorithms.
///
/// Shared by bisection, binary search, Brent's method and the retry wrapper.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use numeric_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-4);
/// assert_eq!(config.max_iterations, 25);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
/// };
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance.
    ///
    /// Interpreted per method: the final bracket width for bisection, the
    /// inward step for binary search, and the relative-plus-absolute band
    /// `2·tol·|b| + tol` for Brent's method.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-4
    /// - `max_iterations`: 25
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-4).unwrap(),
            max_iterations: 25,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// Values are not checked here; solvers reject a non-positive
    /// tolerance with `SolverError::BadTolerance` when they run.
    ///
    /// # Example
    ///
    /// ```
    /// use numeric_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Bisection defaults: tolerance 0.01, 25 iterations.
    pub fn bisection() -> Self {
        Self {
            tolerance: T::from(0.01).unwrap(),
            max_iterations: 25,
        }
    }

    /// Binary search defaults: tolerance 1.0, 25 iterations.
    pub fn binary_search() -> Self {
        Self {
            tolerance: T::one(),
            max_iterations: 25,
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses a tight tolerance (1e-12) and more iterations (100).
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-12).unwrap(),
            max_iterations: 100,
        }
    }

    /// Checks that the tolerance is strictly positive.
    ///
    /// # Errors
    /// `SolverError::BadTolerance` with `ToleranceIssue::NotPositive`.
    pub fn validate(&self) -> Result<(), SolverError> {
        check_tolerance(self.tolerance)
    }
}

/// Configuration for Newton-Raphson iteration.
///
/// # Example
///
/// ```
/// use numeric_core::math::solvers::NewtonRaphsonConfig;
///
/// let config: NewtonRaphsonConfig<f64> = NewtonRaphsonConfig::default();
/// assert_eq!(config.max_iterations, 25);
/// assert_eq!(config.step, 0.01);
/// assert_eq!(config.error_tolerance, 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NewtonRaphsonConfig<T: Float> {
    /// Maximum number of iterations, counting the initial evaluation.
    pub max_iterations: usize,

    /// Step for the five-point derivative when none is supplied.
    pub step: T,

    /// Stop once `|f(x)| <= error_tolerance`.
    pub error_tolerance: T,
}

impl<T: Float> Default for NewtonRaphsonConfig<T> {
    /// Default values:
    /// - `max_iterations`: 25
    /// - `step`: 0.01
    /// - `error_tolerance`: 0.001
    fn default() -> Self {
        Self {
            max_iterations: 25,
            step: T::from(0.01).unwrap(),
            error_tolerance: T::from(0.001).unwrap(),
        }
    }
}

impl<T: Float> NewtonRaphsonConfig<T> {
    /// Create a new configuration with specified values.
    pub fn new(max_iterations: usize, step: T, error_tolerance: T) -> Self {
        Self {
            max_iterations,
            step,
            error_tolerance,
        }
    }

    /// Checks that the error tolerance is strictly positive.
    ///
    /// # Errors
    /// `SolverError::BadTolerance` with `ToleranceIssue::NotPositive`.
    pub fn validate(&self) -> Result<(), SolverError> {
        check_tolerance(self.error_tolerance)
    }
}

/// Configuration for Brent's method with bracket widening.
///
/// On a retryable failure both bracket bounds are multiplied by
/// `retry_factor`. `solver.max_iterations` bounds both the inner Brent solve
/// and the number of attempts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RetryConfig<T: Float> {
    /// Multiplier applied to both bounds after each failed attempt.
    pub retry_factor: T,

    /// Settings for each Brent attempt.
    pub solver: SolverConfig<T>,
}

impl<T: Float> Default for RetryConfig<T> {
    /// Default values:
    /// - `retry_factor`: 2
    /// - `solver`: `SolverConfig::default()`
    fn default() -> Self {
        Self {
            retry_factor: T::from(2.0).unwrap(),
            solver: SolverConfig::default(),
        }
    }
}

impl<T: Float> RetryConfig<T> {
    /// Create a new configuration with specified values.
    pub fn new(retry_factor: T, solver: SolverConfig<T>) -> Self {
        Self {
            retry_factor,
            solver,
        }
    }
}

pub(crate) fn check_tolerance<T: Float>(tolerance: T) -> Result<(), SolverError> {
    if tolerance > T::zero() {
        Ok(())
    } else {
        Err(SolverError::BadTolerance {
            tolerance: tolerance.to_f64().unwrap_or(f64::NAN),
            issue: ToleranceIssue::NotPositive,
        })
    }
}
