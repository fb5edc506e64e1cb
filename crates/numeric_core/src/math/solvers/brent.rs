//! Brent's method root-finding solver.

use super::config::check_tolerance;
use super::SolverConfig;
use crate::types::{IterationResult, SolverError};
use num_traits::Float;

/// Brent's method root finder (Brent–Dekker).
///
/// Combines bisection, secant, and inverse quadratic interpolation for
/// robust root finding without requiring derivatives. Guaranteed to
/// converge for continuous functions with a valid bracket, given enough
/// iterations.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Algorithm
///
/// Three points are tracked: `b` is the best estimate, `a` the previous
/// estimate and `c` the far end of the bracket, so that `f(b)` and `f(c)`
/// always differ in sign. Each step picks between:
/// - **Bisection**: Guaranteed progress, slower convergence
/// - **Secant method**: Used when only two distinct points are known (`a == c`)
/// - **Inverse quadratic interpolation**: Used when `a`, `b` and `c` are distinct
///
/// An interpolated step is accepted only when it stays well inside the
/// bracket and shrinks faster than the step before last; otherwise the
/// step falls back to bisection.
///
/// Convergence is declared when half the bracket is within
/// `2·tolerance·|b| + tolerance`, or `f(b)` is exactly zero. Unlike
/// bisection, exhausting the iteration budget is a failure.
///
/// # Example
///
/// ```
/// use numeric_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::new(1e-12, 100));
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).into_result().unwrap();
/// assert!((f(root)).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Solver configuration with tolerance and max iterations
    ///
    /// # Example
    ///
    /// ```
    /// use numeric_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let solver: BrentSolver<f64> = BrentSolver::new(SolverConfig::default());
    /// ```
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration (tolerance 1e-4, 25 iterations).
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket `[left, right]`.
    ///
    /// The endpoints may be given in either order.
    ///
    /// # Failures
    ///
    /// * `SolverError::BadTolerance` - tolerance is not positive
    /// * `SolverError::InvalidStartingBracket` - `f(left) * f(right) > 0`
    /// * `SolverError::UnableToConverge` - iteration budget spent; the
    ///   result keeps the iteration and evaluation counts
    ///
    /// # Example
    ///
    /// ```
    /// use numeric_core::math::solvers::BrentSolver;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let solver = BrentSolver::with_defaults();
    /// let result = solver.find_root(|x: f64| (x - 1.0).sin(), -FRAC_PI_2, FRAC_PI_2);
    ///
    /// assert!(result.converged());
    /// assert!((result.value().unwrap() - 1.0).abs() < 1e-4);
    /// ```
    pub fn find_root<F>(&self, f: F, left: T, right: T) -> IterationResult<T>
    where
        F: Fn(T) -> T,
    {
        let t = self.config.tolerance;
        if let Err(err) = check_tolerance(t) {
            return IterationResult::failed(err);
        }

        let mut a = left;
        let mut b = right;
        let mut fa = f(a);
        let mut fb = f(b);
        let mut calls = 2;

        // Check for valid bracket
        if fa * fb > T::zero() {
            return IterationResult::failed_after(
                SolverError::InvalidStartingBracket {
                    left: left.to_f64().unwrap_or(f64::NAN),
                    right: right.to_f64().unwrap_or(f64::NAN),
                },
                0,
                calls,
            );
        }

        let zero = T::zero();
        let one = T::one();
        let half = T::from(0.5).unwrap();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();

        let mut c = a;
        let mut fc = fa;
        let mut d = b - a;
        let mut e = d;
        let mut iterations = 0;

        loop {
            // Keep b as the best estimate: |f(c)| >= |f(b)|
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            iterations += 1;

            let tol = two * t * b.abs() + t;
            let m = half * (c - b);

            if !(m.abs() > tol && fb != zero) {
                break;
            }

            if e.abs() < tol || fa.abs() <= fb.abs() {
                // Bisection forced
                tracing::trace!(iteration = iterations, step = "bisection", "brent step");
                d = m;
                e = m;
            } else {
                let s = fb / fa;
                let (mut p, mut q, step) = if a == c {
                    (two * m * s, one - s, "secant")
                } else {
                    let q = fa / fc;
                    let r = fb / fc;
                    (
                        s * (two * m * q * (q - r) - (b - a) * (r - one)),
                        (q - one) * (r - one) * (s - one),
                        "inverse_quadratic",
                    )
                };

                if p > zero {
                    q = -q;
                } else {
                    p = -p;
                }

                let step_before_last = e;
                e = d;

                if two * p < three * m * q - (tol * q).abs() && p < (half * step_before_last * q).abs()
                {
                    tracing::trace!(iteration = iterations, step, "brent step");
                    d = p / q;
                } else {
                    tracing::trace!(
                        iteration = iterations,
                        step = "bisection",
                        rejected = step,
                        "brent step"
                    );
                    d = m;
                    e = m;
                }
            }

            a = b;
            fa = fb;

            if d.abs() > tol {
                b = b + d;
            } else if m > zero {
                b = b + tol;
            } else {
                b = b - tol;
            }

            if iterations >= self.config.max_iterations {
                tracing::debug!(
                    method = "brent",
                    iterations,
                    calls,
                    converged = false,
                    "solver finished"
                );
                return IterationResult::failed_after(
                    SolverError::UnableToConverge { iterations },
                    iterations,
                    calls,
                );
            }

            fb = f(b);
            calls += 1;

            // Re-bracket: c must sit on the opposite side of the root from b
            if (fb > zero && fc > zero) || (fb <= zero && fc <= zero) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }
        }

        tracing::debug!(
            method = "brent",
            iterations,
            calls,
            converged = true,
            "solver finished"
        );
        IterationResult::success(b, iterations, calls)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
