//! Tolerance-stepped binary search for increasing functions.

use super::config::check_tolerance;
use super::SolverConfig;
use crate::types::{IterationResult, SolverError, ToleranceIssue};
use num_traits::Float;

/// Binary search over a bracket on which `f` is strictly increasing.
///
/// Unlike bisection, the bracket is not halved structurally: after each
/// midpoint evaluation the relevant endpoint jumps to one tolerance step
/// past the midpoint, until the bracket collapses. The tolerance therefore
/// acts as the resolution of the search.
///
/// # Example
///
/// ```
/// use numeric_core::math::solvers::{BinarySearchSolver, SolverConfig};
///
/// let solver = BinarySearchSolver::new(SolverConfig::new(0.01, 25));
/// let result = solver.find_root(|x: f64| x - 0.3, 0.0, 1.0);
///
/// assert!(result.converged());
/// assert!((result.value().unwrap() - 0.3).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct BinarySearchSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BinarySearchSolver<T> {
    /// Create a new binary search solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with tolerance 1.0 and 25 iterations.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::binary_search(),
        }
    }

    /// Find a root of the increasing function `f` between `left` and `right`.
    ///
    /// Converged means the bracket collapsed (`right <= left`) or a midpoint
    /// evaluated to exactly zero. The returned value is the centre of the
    /// final bracket. A bracket given with `left == right` is already
    /// collapsed and converges at that point without any evaluation.
    ///
    /// # Failures
    ///
    /// * `SolverError::BadTolerance` - tolerance is not positive, or is not
    ///   smaller than `|right - left|` for a bracket of non-zero width
    /// * `SolverError::InvalidStartingBracket` - `f(left) * f(right) > 0`
    /// * `SolverError::NotMonotonic` - `f` does not increase from the lower
    ///   to the upper endpoint
    pub fn find_root<F>(&self, f: F, left: T, right: T) -> IterationResult<T>
    where
        F: Fn(T) -> T,
    {
        let tolerance = self.config.tolerance;
        if let Err(err) = check_tolerance(tolerance) {
            return IterationResult::failed(err);
        }

        // A collapsed bracket has nothing left to search
        if left == right {
            return self.finish(IterationResult::success(left, 0, 0));
        }

        let mut a = left;
        let mut b = right;
        let mut fa = f(a);
        let mut fb = f(b);
        let mut calls = 2;

        if fa == T::zero() {
            return self.finish(IterationResult::success(a, 0, calls));
        }
        if fb == T::zero() {
            return self.finish(IterationResult::success(b, 0, calls));
        }

        let width = (b - a).abs();
        if tolerance >= width {
            return IterationResult::failed_after(
                SolverError::BadTolerance {
                    tolerance: tolerance.to_f64().unwrap_or(f64::NAN),
                    issue: ToleranceIssue::WiderThanBracket {
                        width: width.to_f64().unwrap_or(f64::NAN),
                    },
                },
                0,
                calls,
            );
        }

        if fa * fb > T::zero() {
            return IterationResult::failed_after(
                SolverError::InvalidStartingBracket {
                    left: a.to_f64().unwrap_or(f64::NAN),
                    right: b.to_f64().unwrap_or(f64::NAN),
                },
                0,
                calls,
            );
        }

        if a > b {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }

        if fa >= fb {
            return IterationResult::failed_after(
                SolverError::NotMonotonic {
                    left: a.to_f64().unwrap_or(f64::NAN),
                    right: b.to_f64().unwrap_or(f64::NAN),
                },
                0,
                calls,
            );
        }

        let two = T::from(2.0).unwrap();
        let mut iterations = 0;

        while b - a > T::zero() && iterations < self.config.max_iterations {
            let mid = (a + b) / two;
            let f_mid = f(mid);
            calls += 1;
            iterations += 1;

            if f_mid == T::zero() {
                return self.finish(IterationResult::success(mid, iterations, calls));
            }

            if f_mid > T::zero() {
                b = mid - tolerance;
            } else {
                a = mid + tolerance;
            }
        }

        let estimate = (a + b) / two;
        let result = if b <= a {
            IterationResult::success(estimate, iterations, calls)
        } else {
            IterationResult::not_converged(estimate, iterations, calls)
        };
        self.finish(result)
    }

    fn finish(&self, result: IterationResult<T>) -> IterationResult<T> {
        tracing::debug!(
            method = "binary_search",
            iterations = result.iteration_count(),
            calls = result.function_call_count(),
            converged = result.converged(),
            "solver finished"
        );
        result
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::solvers::BisectionSolver;
    use crate::types::SolverErrorKind;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    // ========================================
    // Basic Functionality Tests
    // ========================================

    #[test]
    fn test_default_tolerance_is_coarse() {
        let solver = BinarySearchSolver::with_defaults();
        let result = solver.find_root(|x: f64| (x - 1.0).sin(), -FRAC_PI_2, FRAC_PI_2);

        assert!(result.converged());
        assert_eq!(result.iteration_count(), 2);
        assert_abs_diff_eq!(result.value().unwrap(), 0.6427, epsilon = 1e-4);
    }

    #[test]
    fn test_fine_tolerance() {
        let solver = BinarySearchSolver::new(SolverConfig::new(0.01, 25));
        let result = solver.find_root(|x: f64| (x - 1.0).sin(), -FRAC_PI_2, FRAC_PI_2);

        assert!(result.converged());
        assert_abs_diff_eq!(result.value().unwrap(), 1.0, epsilon = 0.01);
    }

    #[test]
    fn test_reversed_bracket() {
        let solver = BinarySearchSolver::new(SolverConfig::new(0.01, 25));
        let f = |x: f64| x - 0.3;
        let forward = solver.find_root(f, 0.0, 1.0);
        let reversed = solver.find_root(f, 1.0, 0.0);

        assert_eq!(forward.value(), reversed.value());
        assert_abs_diff_eq!(forward.value().unwrap(), 0.30078125, epsilon = 1e-9);
    }

    #[test]
    fn test_exact_midpoint_root() {
        let solver = BinarySearchSolver::new(SolverConfig::new(0.01, 25));
        let result = solver.find_root(|x: f64| x - 0.5, 0.0, 1.0);

        assert_eq!(result.value(), Some(0.5));
        assert_eq!(result.iteration_count(), 1);
    }

    #[test]
    fn test_rerun_on_converged_value_is_immediate() {
        let solver = BinarySearchSolver::new(SolverConfig::new(0.01, 25));
        let f = |x: f64| (x - 1.0).sin();
        let v = solver.find_root(f, -FRAC_PI_2, FRAC_PI_2).value().unwrap();
        assert_ne!(f(v), 0.0);

        let again = solver.find_root(f, v, v);
        assert!(again.converged());
        assert!(!again.is_failure());
        assert_eq!(again.iteration_count(), 0);
        assert_eq!(again.function_call_count(), 0);
        assert_eq!(again.value(), Some(v));
    }

    #[test]
    fn test_agrees_with_bisection() {
        let f = |x: f64| x.powi(3) - 2.0;
        let config = SolverConfig::new(1e-3, 50);
        let search = BinarySearchSolver::new(config).find_root(f, 0.0, 2.0);
        let bisect = BisectionSolver::new(config).find_root(f, 0.0, 2.0);

        assert_abs_diff_eq!(
            search.value().unwrap(),
            bisect.value().unwrap(),
            epsilon = 2e-3
        );
    }

    #[test]
    fn test_budget_exhausted_is_not_an_error() {
        let solver = BinarySearchSolver::new(SolverConfig::new(1e-9, 3));
        let result = solver.find_root(|x: f64| x - 0.3, 0.0, 1.0);

        assert!(!result.converged());
        assert!(!result.is_failure());
        assert_eq!(result.iteration_count(), 3);
    }

    // ========================================
    // Error Handling Tests
    // ========================================

    #[test]
    fn test_tolerance_not_positive() {
        let solver = BinarySearchSolver::new(SolverConfig::new(-0.5, 25));
        let result = solver.find_root(|x: f64| x, -1.0, 1.0);

        assert!(matches!(
            result.failure(),
            Some(SolverError::BadTolerance {
                issue: ToleranceIssue::NotPositive,
                ..
            })
        ));
    }

    #[test]
    fn test_tolerance_wider_than_bracket() {
        let solver = BinarySearchSolver::new(SolverConfig::new(2.0, 25));
        let result = solver.find_root(|x: f64| x - 0.1, -1.0, 1.0);

        assert_eq!(
            result.failure(),
            Some(&SolverError::BadTolerance {
                tolerance: 2.0,
                issue: ToleranceIssue::WiderThanBracket { width: 2.0 }
            })
        );
    }

    #[test]
    fn test_same_sign_bracket() {
        let solver = BinarySearchSolver::new(SolverConfig::new(0.01, 25));
        let result = solver.find_root(|x: f64| x + 5.0, 0.0, 1.0);

        assert_eq!(
            result.failure().map(SolverError::kind),
            Some(SolverErrorKind::InvalidStartingBracket)
        );
    }

    #[test]
    fn test_decreasing_function_rejected() {
        let solver = BinarySearchSolver::new(SolverConfig::new(0.01, 25));
        let result = solver.find_root(|x: f64| 0.3 - x, 0.0, 1.0);

        assert_eq!(
            result.failure(),
            Some(&SolverError::NotMonotonic {
                left: 0.0,
                right: 1.0
            })
        );
    }
}
