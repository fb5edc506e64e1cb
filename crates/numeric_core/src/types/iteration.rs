//! Outcome envelope shared by every iterative algorithm.

use super::error::SolverError;

/// Result of one top-level solver invocation.
///
/// Carries the final estimate, how much work was spent reaching it, and
/// whether the stopping criterion was met. A failed run keeps its counts but
/// has no value; a run that simply ran out of iterations keeps its last
/// estimate with `converged() == false`.
///
/// # Example
///
/// ```
/// use numeric_core::types::{IterationResult, SolverError};
///
/// let ok = IterationResult::success(1.5_f64, 4, 5);
/// assert_eq!(ok.value(), Some(1.5));
/// assert!(ok.converged());
///
/// let failed: IterationResult<f64> =
///     IterationResult::failed(SolverError::UnableToConverge { iterations: 25 });
/// assert!(failed.is_failure());
/// assert_eq!(failed.value(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IterationResult<T> {
    value: Option<T>,
    iteration_count: usize,
    function_call_count: usize,
    converged: bool,
    failure: Option<SolverError>,
}

impl<T> IterationResult<T> {
    /// A run that met its stopping criterion.
    pub fn success(value: T, iteration_count: usize, function_call_count: usize) -> Self {
        Self {
            value: Some(value),
            iteration_count,
            function_call_count,
            converged: true,
            failure: None,
        }
    }

    /// A run that stopped at its iteration cap; `value` is the last estimate.
    pub fn not_converged(value: T, iteration_count: usize, function_call_count: usize) -> Self {
        Self {
            value: Some(value),
            iteration_count,
            function_call_count,
            converged: false,
            failure: None,
        }
    }

    /// A run rejected before doing any work.
    pub fn failed(failure: SolverError) -> Self {
        Self::failed_after(failure, 0, 0)
    }

    /// A run that failed after spending the given iterations and evaluations.
    pub fn failed_after(
        failure: SolverError,
        iteration_count: usize,
        function_call_count: usize,
    ) -> Self {
        Self {
            value: None,
            iteration_count,
            function_call_count,
            converged: false,
            failure: Some(failure),
        }
    }

    /// Number of loop iterations performed.
    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }

    /// Number of times the target function (or its derivative) was evaluated.
    pub fn function_call_count(&self) -> usize {
        self.function_call_count
    }

    /// Whether the stopping criterion was met.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// The failure, if the run failed.
    pub fn failure(&self) -> Option<&SolverError> {
        self.failure.as_ref()
    }

    /// Whether the run failed.
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// Converts into a `Result`, discarding the counts.
    ///
    /// A non-converged run still yields `Ok` with its last estimate; check
    /// [`converged`](Self::converged) first when that matters.
    ///
    /// # Errors
    /// The recorded failure.
    pub fn into_result(self) -> Result<T, SolverError> {
        match (self.failure, self.value) {
            (Some(err), _) => Err(err),
            (None, Some(value)) => Ok(value),
            (None, None) => Err(SolverError::UnableToConverge {
                iterations: self.iteration_count,
            }),
        }
    }

    /// Maps the value through a fallible conversion, keeping the counts.
    ///
    /// A conversion error turns the result into a failure.
    pub fn try_map<U, E, F>(self, f: F) -> IterationResult<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<SolverError>,
    {
        let value = match self.value {
            Some(v) => match f(v) {
                Ok(u) => Some(u),
                Err(err) => {
                    return IterationResult::failed_after(
                        err.into(),
                        self.iteration_count,
                        self.function_call_count,
                    );
                }
            },
            None => None,
        };
        IterationResult {
            value,
            iteration_count: self.iteration_count,
            function_call_count: self.function_call_count,
            converged: self.converged,
            failure: self.failure,
        }
    }
}

impl<T: Copy> IterationResult<T> {
    /// The final estimate; `None` only for failed runs.
    pub fn value(&self) -> Option<T> {
        self.value
    }
}
