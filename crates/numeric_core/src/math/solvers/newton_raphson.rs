//! Newton-Raphson root-finding solver.

use super::NewtonRaphsonConfig;
use crate::math::differentiation::derivative_default;
use crate::types::IterationResult;
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Iteration stops once `|f(x)| <= error_tolerance` or the iteration budget
/// is spent. Neither outcome is an error; check
/// [`IterationResult::converged`]. The method may still wander off if:
/// - The derivative is near zero (a zero derivative yields a non-finite step)
/// - The initial guess is far from the root
/// - The function has discontinuities
///
/// # Example
///
/// ```
/// use numeric_core::math::solvers::{NewtonRaphsonConfig, NewtonRaphsonSolver};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(NewtonRaphsonConfig::new(25, 0.01, 1e-12));
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let result = solver.find_root(f, f_prime, 1.0);
/// assert!(result.converged());
/// assert!((result.value().unwrap() - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: NewtonRaphsonConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: NewtonRaphsonConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: NewtonRaphsonConfig::default(),
        }
    }

    /// Find a root of `f` starting from `guess`, using the derivative `f_prime`.
    ///
    /// The initial evaluation counts as the first iteration. Each iteration
    /// evaluates both `f` and `f_prime`, so `function_call_count` is twice
    /// the iteration count.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `f_prime` - Derivative of `f`
    /// * `guess` - Initial guess
    pub fn find_root<F, G>(&self, f: F, f_prime: G, guess: T) -> IterationResult<T>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let error = self.config.error_tolerance;
        let mut x = guess;
        let mut fx = f(x);
        let mut dfdx = f_prime(x);
        let mut iterations = 1;
        let mut calls = 2;

        while fx.abs() > error && iterations < self.config.max_iterations {
            x = x - fx / dfdx;
            fx = f(x);
            dfdx = f_prime(x);
            calls += 2;
            iterations += 1;
        }

        let result = if fx.abs() <= error {
            IterationResult::success(x, iterations, calls)
        } else {
            IterationResult::not_converged(x, iterations, calls)
        };

        tracing::debug!(
            method = "newton_raphson",
            iterations,
            calls,
            converged = result.converged(),
            "solver finished"
        );
        result
    }

    /// Find a root of `f` starting from `guess`, approximating the
    /// derivative with five-point centered differences at the configured step.
    ///
    /// # Example
    ///
    /// ```
    /// use numeric_core::math::solvers::NewtonRaphsonSolver;
    ///
    /// let solver = NewtonRaphsonSolver::with_defaults();
    /// let result = solver.find_root_numeric(|x: f64| (x - 1.0).sin(), 0.0);
    /// assert!((result.value().unwrap() - 1.0).abs() < 1e-3);
    /// ```
    pub fn find_root_numeric<F>(&self, f: F, guess: T) -> IterationResult<T>
    where
        F: Fn(T) -> T,
    {
        let step = self.config.step;
        self.find_root(&f, |x| derivative_default(&f, x, step), guess)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &NewtonRaphsonConfig<T> {
        &self.config
    }
}
