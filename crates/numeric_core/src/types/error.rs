//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from root-finding solvers
//! - `ConversionError`: Errors from conversions between numeric domains
//! - `DifferentiationError`: Errors from sampled (indexed) derivatives
//! - `ConfigError`: Errors from loading solver settings

use thiserror::Error;

/// Why a tolerance was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToleranceIssue {
    /// Tolerance was zero or negative.
    #[error("tolerance must be positive")]
    NotPositive,

    /// Tolerance was not smaller than the bracket it steps through.
    #[error("tolerance must be less than the bracket width {width}")]
    WiderThanBracket {
        /// Width of the supplied bracket
        width: f64,
    },
}

/// Root-finding solver errors.
///
/// Precondition violations (bad tolerance, bad bracket, non-monotonic
/// function) and hard convergence failures are reported through this type.
/// Solvers that merely run out of iterations without a hard-failure contract
/// report `converged == false` in their
/// [`IterationResult`](crate::types::IterationResult) instead.
///
/// # Examples
/// ```
/// use numeric_core::types::SolverError;
///
/// let err = SolverError::UnableToConverge { iterations: 25 };
/// assert_eq!(format!("{}", err), "Unable to converge within 25 iterations.");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Tolerance rejected before any iteration.
    #[error("Bad tolerance {tolerance}: {issue}")]
    BadTolerance {
        /// The tolerance that was supplied
        tolerance: f64,
        /// What was wrong with it
        issue: ToleranceIssue,
    },

    /// `f(left)` and `f(right)` do not straddle a sign change.
    #[error("Invalid starting bracket [{left}, {right}]: function must be above target on one end and below target on the other")]
    InvalidStartingBracket {
        /// Left bracket endpoint
        left: f64,
        /// Right bracket endpoint
        right: f64,
    },

    /// Binary search requires a function increasing over the bracket.
    #[error("The function must be increasing over the entire interval [{left}, {right}]")]
    NotMonotonic {
        /// Left bracket endpoint (after ordering)
        left: f64,
        /// Right bracket endpoint (after ordering)
        right: f64,
    },

    /// A single bounded solve exhausted its iteration budget.
    #[error("Unable to converge within {iterations} iterations.")]
    UnableToConverge {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// The retry wrapper exhausted its budget of widened attempts.
    #[error("Unable to converge within {iterations} iterations.")]
    RetryUnableToConverge {
        /// Number of attempts made
        iterations: usize,
    },

    /// A value could not cross between numeric domains.
    #[error(transparent)]
    OutOfRange(#[from] ConversionError),
}

/// Fieldless discriminant of [`SolverError`], convenient for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverErrorKind {
    /// See [`SolverError::BadTolerance`]
    BadTolerance,
    /// See [`SolverError::InvalidStartingBracket`]
    InvalidStartingBracket,
    /// See [`SolverError::NotMonotonic`]
    NotMonotonic,
    /// See [`SolverError::UnableToConverge`]
    UnableToConverge,
    /// See [`SolverError::RetryUnableToConverge`]
    RetryUnableToConverge,
    /// See [`SolverError::OutOfRange`]
    OutOfRange,
}

impl SolverError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> SolverErrorKind {
        match self {
            SolverError::BadTolerance { .. } => SolverErrorKind::BadTolerance,
            SolverError::InvalidStartingBracket { .. } => SolverErrorKind::InvalidStartingBracket,
            SolverError::NotMonotonic { .. } => SolverErrorKind::NotMonotonic,
            SolverError::UnableToConverge { .. } => SolverErrorKind::UnableToConverge,
            SolverError::RetryUnableToConverge { .. } => SolverErrorKind::RetryUnableToConverge,
            SolverError::OutOfRange(_) => SolverErrorKind::OutOfRange,
        }
    }

    /// Whether a widened bracket could plausibly turn this failure into a success.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SolverError::InvalidStartingBracket { .. } | SolverError::UnableToConverge { .. }
        )
    }
}

/// Conversion errors between the floating-point and decimal domains.
///
/// # Examples
/// ```
/// use numeric_core::types::ConversionError;
///
/// let err = ConversionError::out_of_range(40000.0, "i16");
/// assert_eq!(err.to_string(), "The value 40000 could not be converted to i16.");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConversionError {
    /// Value outside the target's representable bounds.
    #[error("The value {value} could not be converted to {target}.")]
    OutOfRange {
        /// The rejected value, rendered as text
        value: String,
        /// Name of the target type
        target: String,
    },
}

impl ConversionError {
    /// Creates an `OutOfRange` error for `value` and the named target type.
    pub fn out_of_range(value: impl std::fmt::Display, target: &str) -> Self {
        ConversionError::OutOfRange {
            value: value.to_string(),
            target: target.to_string(),
        }
    }
}

/// Errors from derivatives computed over sampled points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DifferentiationError {
    /// The stencil for `index` needs samples outside `0..len`.
    #[error("Index {index} lacks the neighbouring samples required by its stencil (len = {len})")]
    MissingNeighbour {
        /// Requested sample index
        index: usize,
        /// Number of samples supplied
        len: usize,
    },

    /// The x-values around `index` are not strictly increasing.
    #[error("Samples around index {index} are not strictly increasing in x")]
    NonIncreasingSamples {
        /// Requested sample index
        index: usize,
    },
}

/// Errors raised while loading solver settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Settings file could not be read.
    #[error("Configuration file error: {0}")]
    Io(String),

    /// Settings text was not valid TOML for the expected shape.
    #[error("Configuration parse error: {0}")]
    Parse(String),

    /// Settings parsed but hold unusable values.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
