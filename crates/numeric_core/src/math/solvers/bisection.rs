//! Bisection root-finding solver.

use super::config::check_tolerance;
use super::SolverConfig;
use crate::types::{IterationResult, SolverError};
use num_traits::Float;

/// Interval-halving root finder.
///
/// Each iteration halves the bracket and keeps the half whose endpoints
/// still differ in sign. Running out of iterations is not an error: the
/// last midpoint is returned with `converged() == false`.
///
/// # Example
///
/// ```
/// use numeric_core::math::solvers::BisectionSolver;
///
/// let solver = BisectionSolver::with_defaults();
/// let f = |x: f64| x * x - 2.0;
///
/// let result = solver.find_root(f, 0.0, 2.0);
/// assert!(result.converged());
/// assert!((result.value().unwrap() - std::f64::consts::SQRT_2).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with tolerance 0.01 and 25 iterations.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::bisection(),
        }
    }

    /// Find a root of `f` between `left` and `right`.
    ///
    /// The endpoints may be given in either order. A bracket that is already
    /// no wider than the tolerance converges at its midpoint without any
    /// evaluation. Otherwise the search stops when the bracket width is within
    /// the tolerance, when a midpoint evaluates to exactly zero, or when the
    /// iteration budget runs out.
    ///
    /// # Failures
    ///
    /// * `SolverError::BadTolerance` - tolerance is not positive
    /// * `SolverError::InvalidStartingBracket` - `f(left) * f(right) >= 0`
    ///   on a bracket wider than the tolerance, and neither endpoint is an
    ///   exact root
    pub fn find_root<F>(&self, f: F, left: T, right: T) -> IterationResult<T>
    where
        F: Fn(T) -> T,
    {
        if let Err(err) = check_tolerance(self.config.tolerance) {
            return IterationResult::failed(err);
        }

        let half = T::from(0.5).unwrap();
        let tolerance = self.config.tolerance;

        // A bracket already within tolerance is its own answer
        if (right - left).abs() <= tolerance {
            return self.finish(IterationResult::success((left + right) * half, 0, 0));
        }

        let mut left = left;
        let mut right = right;
        let mut g_left = f(left);
        let mut g_right = f(right);
        let mut calls = 2;

        if g_left == T::zero() {
            return self.finish(IterationResult::success(left, 0, calls));
        }
        if g_right == T::zero() {
            return self.finish(IterationResult::success(right, 0, calls));
        }

        if !(g_left * g_right < T::zero()) {
            return IterationResult::failed_after(
                SolverError::InvalidStartingBracket {
                    left: left.to_f64().unwrap_or(f64::NAN),
                    right: right.to_f64().unwrap_or(f64::NAN),
                },
                0,
                calls,
            );
        }

        // Keep the negative value on the left
        if g_left > g_right {
            std::mem::swap(&mut left, &mut right);
            std::mem::swap(&mut g_left, &mut g_right);
        }

        let mut width = right - left;
        let mut mid = left;
        let mut iterations = 0;

        while iterations < self.config.max_iterations && width.abs() > tolerance {
            width = width * half;
            mid = left + width;
            let g_mid = f(mid);
            calls += 1;
            iterations += 1;

            if g_mid == T::zero() {
                return self.finish(IterationResult::success(mid, iterations, calls));
            }

            // The root stays within `width` of `left`
            if !(g_left * g_mid < T::zero()) {
                left = mid;
                g_left = g_mid;
            }
        }

        let result = if width.abs() <= tolerance {
            IterationResult::success(mid, iterations, calls)
        } else {
            IterationResult::not_converged(mid, iterations, calls)
        };
        self.finish(result)
    }

    fn finish(&self, result: IterationResult<T>) -> IterationResult<T> {
        tracing::debug!(
            method = "bisection",
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
    use crate::types::{SolverErrorKind, ToleranceIssue};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, SQRT_2};

    // ========================================
    // Basic Functionality Tests
    // ========================================

    #[test]
    fn test_sin_shifted_root() {
        let solver = BisectionSolver::with_defaults();
        let result = solver.find_root(|x: f64| (x - 1.0).sin(), -FRAC_PI_2, FRAC_PI_2);

        assert!(result.converged());
        assert_eq!(result.iteration_count(), 9);
        assert_eq!(result.function_call_count(), 11);
        assert_abs_diff_eq!(result.value().unwrap(), 1.0, epsilon = 0.01);
    }

    #[test]
    fn test_reversed_bracket_same_answer() {
        let solver = BisectionSolver::with_defaults();
        let f = |x: f64| (x - 1.0).sin();
        let forward = solver.find_root(f, -FRAC_PI_2, FRAC_PI_2);
        let reversed = solver.find_root(f, FRAC_PI_2, -FRAC_PI_2);

        assert_eq!(forward.value(), reversed.value());
        assert_eq!(forward.iteration_count(), reversed.iteration_count());
    }

    #[test]
    fn test_decreasing_function() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-8, 100));
        let result = solver.find_root(|x: f64| 2.0 - x * x, 0.0, 2.0);

        assert!(result.converged());
        assert_abs_diff_eq!(result.value().unwrap(), SQRT_2, epsilon = 1e-7);
    }

    #[test]
    fn test_exact_midpoint_root() {
        let solver = BisectionSolver::with_defaults();
        let result = solver.find_root(|x: f64| x - 0.5, 0.0, 1.0);

        assert!(result.converged());
        assert_eq!(result.value(), Some(0.5));
        assert_eq!(result.iteration_count(), 1);
    }

    #[test]
    fn test_rerun_on_converged_value_is_immediate() {
        let solver = BisectionSolver::with_defaults();
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
    fn test_narrow_bracket_returns_midpoint() {
        let solver = BisectionSolver::with_defaults();
        let result = solver.find_root(|x: f64| x - 0.3, 0.3, 0.31);

        assert!(result.converged());
        assert_eq!(result.iteration_count(), 0);
        assert_abs_diff_eq!(result.value().unwrap(), 0.305, epsilon = 1e-12);
    }

    #[test]
    fn test_endpoint_root_converges_immediately() {
        let solver = BisectionSolver::with_defaults();
        let result = solver.find_root(|x: f64| x - 0.5, 0.5, 0.5);

        assert!(result.converged());
        assert_eq!(result.value(), Some(0.5));
        assert_eq!(result.iteration_count(), 0);
    }

    // ========================================
    // Iteration Budget Tests
    // ========================================

    #[test]
    fn test_budget_exhausted_is_not_an_error() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-12, 3));
        let result = solver.find_root(|x: f64| (x - 1.0).sin(), -FRAC_PI_2, FRAC_PI_2);

        assert!(!result.converged());
        assert!(!result.is_failure());
        assert_eq!(result.iteration_count(), 3);
        assert!(result.value().is_some());
    }

    #[test]
    fn test_zero_budget_returns_left_endpoint() {
        let solver = BisectionSolver::new(SolverConfig::new(0.01, 0));
        let result = solver.find_root(|x: f64| x - 0.3, 0.0, 1.0);

        assert!(!result.converged());
        assert_eq!(result.value(), Some(0.0));
    }

    // ========================================
    // Error Handling Tests
    // ========================================

    #[test]
    fn test_bad_tolerance() {
        let solver = BisectionSolver::new(SolverConfig::new(0.0, 25));
        let result = solver.find_root(|x: f64| x, -1.0, 1.0);

        assert_eq!(
            result.failure(),
            Some(&SolverError::BadTolerance {
                tolerance: 0.0,
                issue: ToleranceIssue::NotPositive
            })
        );
        assert_eq!(result.function_call_count(), 0);
    }

    #[test]
    fn test_same_sign_bracket() {
        let solver = BisectionSolver::with_defaults();
        let result = solver.find_root(|x: f64| x * x + 1.0, -1.0, 1.0);

        assert_eq!(
            result.failure().map(SolverError::kind),
            Some(SolverErrorKind::InvalidStartingBracket)
        );
        assert_eq!(result.value(), None);
    }
}
