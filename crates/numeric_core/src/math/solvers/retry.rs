//! Brent's method with geometric bracket widening.

use super::{BrentSolver, RetryConfig};
use crate::types::{IterationResult, SolverError};
use num_traits::Float;

/// Outcome of [`BrentRetrySolver::find_root`].
#[derive(Debug, Clone, PartialEq)]
pub struct RetryOutcome<T> {
    /// True only when some attempt converged.
    pub success: bool,
    /// Number of Brent attempts made.
    pub attempts: usize,
    /// Result of the last attempt, or the retry failure.
    pub result: IterationResult<T>,
}

/// Brent's method that widens a failing bracket and tries again.
///
/// When an attempt fails with `InvalidStartingBracket` or `UnableToConverge`
/// both bounds are multiplied by `retry_factor`. Any other failure ends the
/// search immediately. After `max_iterations` failed attempts the search
/// gives up with `SolverError::RetryUnableToConverge`.
///
/// # Example
///
/// ```
/// use numeric_core::math::solvers::BrentRetrySolver;
///
/// // [-1, 1] misses the root at 3; widening by 2 finds it on [-4, 4]
/// let solver = BrentRetrySolver::with_defaults();
/// let outcome = solver.find_root(|x: f64| x - 3.0, -1.0, 1.0);
///
/// assert!(outcome.success);
/// assert_eq!(outcome.attempts, 3);
/// assert_eq!(outcome.result.value(), Some(3.0));
/// ```
#[derive(Debug, Clone)]
pub struct BrentRetrySolver<T: Float> {
    /// Solver configuration
    config: RetryConfig<T>,
}

impl<T: Float> BrentRetrySolver<T> {
    /// Create a new retrying solver with the given configuration.
    pub fn new(config: RetryConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with retry factor 2, tolerance 1e-4 and 25 iterations.
    pub fn with_defaults() -> Self {
        Self {
            config: RetryConfig::default(),
        }
    }

    /// Find a root of `f`, starting from `[left, right]` and widening on failure.
    pub fn find_root<F>(&self, f: F, left: T, right: T) -> RetryOutcome<T>
    where
        F: Fn(T) -> T,
    {
        let brent = BrentSolver::new(self.config.solver);
        let max_attempts = self.config.solver.max_iterations;
        let mut left = left;
        let mut right = right;

        for attempt in 1..=max_attempts {
            let result = brent.find_root(&f, left, right);

            match result.failure() {
                None => {
                    return RetryOutcome {
                        success: true,
                        attempts: attempt,
                        result,
                    };
                }
                Some(err) if err.is_retryable() => {
                    left = left * self.config.retry_factor;
                    right = right * self.config.retry_factor;
                    tracing::debug!(
                        attempt,
                        reason = %err,
                        left = left.to_f64().unwrap_or(f64::NAN),
                        right = right.to_f64().unwrap_or(f64::NAN),
                        "widening bracket"
                    );
                }
                Some(_) => {
                    return RetryOutcome {
                        success: false,
                        attempts: attempt,
                        result,
                    };
                }
            }
        }

        tracing::warn!(
            attempts = max_attempts,
            "brent retry gave up without finding a root"
        );
        RetryOutcome {
            success: false,
            attempts: max_attempts,
            result: IterationResult::failed(SolverError::RetryUnableToConverge {
                iterations: max_attempts,
            }),
        }
    }

    /// Find a root of `f`, starting from the symmetric bracket `[-bound, bound]`.
    pub fn find_root_symmetric<F>(&self, f: F, bound: T) -> RetryOutcome<T>
    where
        F: Fn(T) -> T,
    {
        self.find_root(f, -bound, bound)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &RetryConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::solvers::SolverConfig;
    use crate::types::{SolverErrorKind, ToleranceIssue};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn cubic(x: f64) -> f64 {
        2.0 * x * x - x.powi(3) - 2.0
    }

    fn retry_solver(retry_factor: f64) -> BrentRetrySolver<f64> {
        BrentRetrySolver::new(RetryConfig::new(
            retry_factor,
            SolverConfig::new(1e-4, 10),
        ))
    }

    #[test]
    fn test_unit_factor_exhausts_attempts() {
        let outcome = retry_solver(1.0).find_root_symmetric(cubic, 50.0 * PI);

        assert!(!outcome.success);
        assert_eq!(outcome.attempts, 10);
        assert_eq!(
            outcome.result.failure(),
            Some(&SolverError::RetryUnableToConverge { iterations: 10 })
        );
        assert_eq!(
            outcome.result.failure().map(SolverError::kind),
            Some(SolverErrorKind::RetryUnableToConverge)
        );
    }

    #[test]
    fn test_shrinking_factor_finds_root() {
        let outcome = retry_solver(0.1).find_root_symmetric(cubic, 50.0 * PI);

        assert!(outcome.success);
        assert_eq!(outcome.attempts, 3);
        assert_abs_diff_eq!(outcome.result.value().unwrap(), -0.839289, epsilon = 1e-5);
    }

    #[test]
    fn test_first_attempt_success() {
        let outcome = BrentRetrySolver::with_defaults().find_root(
            |x: f64| (x - 1.0).sin(),
            -PI / 2.0,
            PI / 2.0,
        );

        assert!(outcome.success);
        assert_eq!(outcome.attempts, 1);
        assert!(outcome.result.converged());
    }

    #[test]
    fn test_no_root_anywhere() {
        let solver = BrentRetrySolver::new(RetryConfig::new(2.0, SolverConfig::new(1e-4, 6)));
        let outcome = solver.find_root(|x: f64| x * x + 1.0, -1.0, 1.0);

        assert!(!outcome.success);
        assert_eq!(outcome.attempts, 6);
    }

    #[test]
    fn test_bad_tolerance_is_not_retried() {
        let solver = BrentRetrySolver::new(RetryConfig::new(2.0, SolverConfig::new(-1.0, 10)));
        let outcome = solver.find_root(|x: f64| x, -1.0, 1.0);

        assert!(!outcome.success);
        assert_eq!(outcome.attempts, 1);
        assert!(matches!(
            outcome.result.failure(),
            Some(SolverError::BadTolerance {
                issue: ToleranceIssue::NotPositive,
                ..
            })
        ));
    }
}
