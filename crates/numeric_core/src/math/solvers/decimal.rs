//! Decimal entry points for the root finders.
//!
//! Each method converts its decimal inputs to `f64`, runs the floating-point
//! solver on a wrapped callback and converts the estimate back. Conversion
//! failures surface as `SolverError::OutOfRange` in the returned result.

use super::{
    BinarySearchSolver, BisectionSolver, BrentRetrySolver, BrentSolver, NewtonRaphsonSolver,
    RetryOutcome,
};
use crate::math::differentiation::derivative_default;
use crate::types::convert::{decimal_fn_as_f64, to_decimal, to_f64};
use crate::types::{ConversionError, IterationResult};
use rust_decimal::Decimal;

fn bracket_to_f64(left: Decimal, right: Decimal) -> Result<(f64, f64), ConversionError> {
    Ok((to_f64(left)?, to_f64(right)?))
}

fn into_decimal(result: IterationResult<f64>) -> IterationResult<Decimal> {
    result.try_map(to_decimal)
}

impl BisectionSolver<f64> {
    /// Decimal version of [`find_root`](Self::find_root).
    ///
    /// # Example
    ///
    /// ```
    /// use numeric_core::math::solvers::BisectionSolver;
    /// use rust_decimal::Decimal;
    ///
    /// let result = BisectionSolver::with_defaults().find_root_decimal(
    ///     |x| x - Decimal::new(5, 1),
    ///     Decimal::ZERO,
    ///     Decimal::ONE,
    /// );
    /// assert_eq!(result.value(), Some(Decimal::new(5, 1)));
    /// ```
    pub fn find_root_decimal<F>(&self, f: F, left: Decimal, right: Decimal) -> IterationResult<Decimal>
    where
        F: Fn(Decimal) -> Decimal,
    {
        match bracket_to_f64(left, right) {
            Ok((l, r)) => into_decimal(self.find_root(decimal_fn_as_f64(f), l, r)),
            Err(err) => IterationResult::failed(err.into()),
        }
    }
}

impl BinarySearchSolver<f64> {
    /// Decimal version of [`find_root`](Self::find_root).
    pub fn find_root_decimal<F>(&self, f: F, left: Decimal, right: Decimal) -> IterationResult<Decimal>
    where
        F: Fn(Decimal) -> Decimal,
    {
        match bracket_to_f64(left, right) {
            Ok((l, r)) => into_decimal(self.find_root(decimal_fn_as_f64(f), l, r)),
            Err(err) => IterationResult::failed(err.into()),
        }
    }
}

impl BrentSolver<f64> {
    /// Decimal version of [`find_root`](Self::find_root).
    pub fn find_root_decimal<F>(&self, f: F, left: Decimal, right: Decimal) -> IterationResult<Decimal>
    where
        F: Fn(Decimal) -> Decimal,
    {
        match bracket_to_f64(left, right) {
            Ok((l, r)) => into_decimal(self.find_root(decimal_fn_as_f64(f), l, r)),
            Err(err) => IterationResult::failed(err.into()),
        }
    }
}

impl BrentRetrySolver<f64> {
    /// Decimal version of [`find_root`](Self::find_root).
    ///
    /// A successful attempt whose estimate cannot be converted back is
    /// reported with `success == false`.
    pub fn find_root_decimal<F>(&self, f: F, left: Decimal, right: Decimal) -> RetryOutcome<Decimal>
    where
        F: Fn(Decimal) -> Decimal,
    {
        let (l, r) = match bracket_to_f64(left, right) {
            Ok(bracket) => bracket,
            Err(err) => {
                return RetryOutcome {
                    success: false,
                    attempts: 0,
                    result: IterationResult::failed(err.into()),
                };
            }
        };

        let outcome = self.find_root(decimal_fn_as_f64(f), l, r);
        let result = into_decimal(outcome.result);
        RetryOutcome {
            success: outcome.success && !result.is_failure(),
            attempts: outcome.attempts,
            result,
        }
    }
}

impl NewtonRaphsonSolver<f64> {
    /// Decimal version of [`find_root`](Self::find_root).
    pub fn find_root_decimal<F, G>(&self, f: F, f_prime: G, guess: Decimal) -> IterationResult<Decimal>
    where
        F: Fn(Decimal) -> Decimal,
        G: Fn(Decimal) -> Decimal,
    {
        match to_f64(guess) {
            Ok(x0) => into_decimal(self.find_root(
                decimal_fn_as_f64(f),
                decimal_fn_as_f64(f_prime),
                x0,
            )),
            Err(err) => IterationResult::failed(err.into()),
        }
    }

    /// Decimal version of [`find_root_numeric`](Self::find_root_numeric).
    pub fn find_root_numeric_decimal<F>(&self, f: F, guess: Decimal) -> IterationResult<Decimal>
    where
        F: Fn(Decimal) -> Decimal,
    {
        let x0 = match to_f64(guess) {
            Ok(x0) => x0,
            Err(err) => return IterationResult::failed(err.into()),
        };
        let g = decimal_fn_as_f64(f);
        let step = self.config().step;
        into_decimal(self.find_root(&g, |x| derivative_default(&g, x, step), x0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::solvers::{NewtonRaphsonConfig, RetryConfig, SolverConfig};
    use crate::types::convert::round_decimal;
    use crate::types::{SolverError, SolverErrorKind, ToleranceIssue};
    use rust_decimal::prelude::ToPrimitive;
    use std::f64::consts::FRAC_PI_2;

    fn sin_shifted(x: Decimal) -> Decimal {
        let y = (x.to_f64().unwrap() - 1.0).sin();
        to_decimal(y).unwrap()
    }

    fn half_pi() -> Decimal {
        to_decimal(FRAC_PI_2).unwrap()
    }

    #[test]
    fn test_brent_decimal() {
        let result = BrentSolver::with_defaults().find_root_decimal(sin_shifted, -half_pi(), half_pi());
        assert!(result.converged());
        assert_eq!(round_decimal(result.value().unwrap(), 2), Decimal::ONE);
    }

    #[test]
    fn test_brent_decimal_bad_tolerance() {
        let solver = BrentSolver::new(SolverConfig::new(0.0, 25));
        let result = solver.find_root_decimal(|_| Decimal::ONE, -half_pi(), half_pi());
        assert!(matches!(
            result.failure(),
            Some(SolverError::BadTolerance {
                issue: ToleranceIssue::NotPositive,
                ..
            })
        ));
    }

    #[test]
    fn test_bisection_decimal() {
        let result =
            BisectionSolver::with_defaults().find_root_decimal(sin_shifted, -half_pi(), half_pi());
        assert!(result.converged());
        assert_eq!(round_decimal(result.value().unwrap(), 2), Decimal::ONE);
    }

    #[test]
    fn test_binary_search_decimal() {
        let solver = BinarySearchSolver::new(SolverConfig::new(0.01, 25));
        let result = solver.find_root_decimal(sin_shifted, -half_pi(), half_pi());
        assert!(result.converged());
        assert_eq!(round_decimal(result.value().unwrap(), 1), Decimal::ONE);
    }

    #[test]
    fn test_binary_search_decimal_not_monotonic() {
        let solver = BinarySearchSolver::new(SolverConfig::new(0.01, 25));
        let result = solver.find_root_decimal(|x| Decimal::new(3, 1) - x, Decimal::ZERO, Decimal::ONE);
        assert_eq!(
            result.failure().map(SolverError::kind),
            Some(SolverErrorKind::NotMonotonic)
        );
    }

    #[test]
    fn test_newton_decimal_numeric() {
        let result = NewtonRaphsonSolver::with_defaults().find_root_numeric_decimal(sin_shifted, Decimal::ZERO);
        assert!(result.converged());
        assert_eq!(round_decimal(result.value().unwrap(), 2), Decimal::ONE);
    }

    #[test]
    fn test_newton_decimal_with_derivative() {
        let solver = NewtonRaphsonSolver::new(NewtonRaphsonConfig::new(25, 0.01, 1e-9));
        let two = Decimal::TWO;
        let result = solver.find_root_decimal(|x| x * x - two, |x| two * x, Decimal::ONE);
        assert!(result.converged());
        assert_eq!(
            round_decimal(result.value().unwrap(), 6),
            Decimal::new(1_414_214, 6)
        );
    }

    #[test]
    fn test_newton_decimal_non_finite_estimate_fails() {
        // Steps onto the stationary point, then off to infinity
        let solver = NewtonRaphsonSolver::new(NewtonRaphsonConfig::new(10, 0.01, 1e-6));
        let result = solver.find_root_decimal(|x| x * x + Decimal::ONE, |x| Decimal::TWO * x, Decimal::ONE);
        assert_eq!(
            result.failure().map(SolverError::kind),
            Some(SolverErrorKind::OutOfRange)
        );
    }

    #[test]
    fn test_retry_decimal() {
        let solver = BrentRetrySolver::new(RetryConfig::new(0.1, SolverConfig::new(1e-4, 10)));
        let bound = to_decimal(50.0 * std::f64::consts::PI).unwrap();
        let cubic = |x: Decimal| Decimal::TWO * x * x - x * x * x - Decimal::TWO;
        let outcome = solver.find_root_decimal(cubic, -bound, bound);

        assert!(outcome.success);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(round_decimal(outcome.result.value().unwrap(), 4), Decimal::new(-8393, 4));
    }
}
