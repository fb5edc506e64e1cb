//! Internal rate of return.

use super::npv::{dnpv_dr, npv};
use num_traits::Float;
use numeric_core::math::solvers::{NewtonRaphsonConfig, NewtonRaphsonSolver};

/// Newton-Raphson settings used by [`irr`]: 25 iterations, step 1e-4,
/// and an absolute NPV tolerance of 0.001.
fn irr_config<T: Float>() -> NewtonRaphsonConfig<T> {
    NewtonRaphsonConfig::new(25, T::from(1e-4).unwrap(), T::from(1e-3).unwrap())
}

/// Internal rate of return of `cash_flows`, searched from `guess`.
///
/// Returns `None` when Newton-Raphson does not bring `|NPV|` under 0.001
/// within 25 iterations. That is the expected outcome when the flows never
/// change sign, and is not an error.
///
/// # Examples
/// ```
/// use numeric_finance::cashflow::irr;
///
/// let rate = irr(&[-100.0_f64, 110.0], 0.0).unwrap();
/// assert!((rate - 0.1).abs() < 1e-6);
///
/// assert!(irr(&[100.0_f64, 110.0, 50.0], 0.0).is_none());
/// ```
pub fn irr<T: Float>(cash_flows: &[T], guess: T) -> Option<T> {
    irr_with_config(cash_flows, guess, &irr_config())
}

/// [`irr`] with caller-supplied Newton-Raphson settings.
///
/// An empty slice has no rate of return and yields `None`.
pub fn irr_with_config<T: Float>(
    cash_flows: &[T],
    guess: T,
    config: &NewtonRaphsonConfig<T>,
) -> Option<T> {
    if cash_flows.is_empty() {
        return None;
    }

    let solver = NewtonRaphsonSolver::new(*config);
    let result = solver.find_root(|r| npv(cash_flows, r), |r| dnpv_dr(cash_flows, r), guess);

    tracing::debug!(
        periods = cash_flows.len(),
        iterations = result.iteration_count(),
        converged = result.converged(),
        "irr search finished"
    );

    if result.converged() {
        result.value()
    } else {
        None
    }
}
