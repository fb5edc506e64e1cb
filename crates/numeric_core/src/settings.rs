//! Solver settings loaded from TOML.
//!
//! Groups one configuration per solver so applications can tune them from a
//! file, with environment variable overrides for the commonly-tuned values.
//!
//! ```toml
//! [bisection]
//! tolerance = 0.001
//! max_iterations = 40
//!
//! [brent]
//! tolerance = 1e-8
//!
//! [retry]
//! retry_factor = 2.0
//!
//! [newton_raphson]
//! error_tolerance = 1e-6
//! ```
//!
//! Tables and fields left out keep their defaults.
//!
//! | variable | field |
//! |---|---|
//! | `NUMERIC_MAX_ITERATIONS` | `max_iterations` of every solver |
//! | `NUMERIC_BRENT_TOLERANCE` | `brent.tolerance` and `retry.solver.tolerance` |
//! | `NUMERIC_RETRY_FACTOR` | `retry.retry_factor` |
//! | `NUMERIC_NEWTON_STEP` | `newton_raphson.step` |
//! | `NUMERIC_NEWTON_ERROR_TOLERANCE` | `newton_raphson.error_tolerance` |

use crate::math::solvers::{
    BinarySearchSolver, BisectionSolver, BrentRetrySolver, BrentSolver, NewtonRaphsonConfig,
    NewtonRaphsonSolver, RetryConfig, SolverConfig,
};
use crate::types::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for every solver in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSettings {
    /// Bisection settings
    #[serde(default = "SolverConfig::bisection")]
    pub bisection: SolverConfig<f64>,

    /// Binary search settings
    #[serde(default = "SolverConfig::binary_search")]
    pub binary_search: SolverConfig<f64>,

    /// Brent's method settings
    #[serde(default)]
    pub brent: SolverConfig<f64>,

    /// Brent retry settings
    #[serde(default)]
    pub retry: RetryConfig<f64>,

    /// Newton-Raphson settings
    #[serde(default)]
    pub newton_raphson: NewtonRaphsonConfig<f64>,
}

impl Default for NumericSettings {
    fn default() -> Self {
        Self {
            bisection: SolverConfig::bisection(),
            binary_search: SolverConfig::binary_search(),
            brent: SolverConfig::default(),
            retry: RetryConfig::default(),
            newton_raphson: NewtonRaphsonConfig::default(),
        }
    }
}

impl NumericSettings {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    /// `ConfigError::Parse` if the text is not valid TOML for these settings.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse`
    /// if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Load settings from `path`, or fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "using default solver settings");
                Self::default()
            }
        }
    }

    /// Serialise the settings as TOML.
    ///
    /// # Errors
    /// `ConfigError::Parse` if serialisation fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `NUMERIC_*` environment variable overrides.
    ///
    /// Values that do not parse as numbers are ignored.
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup`, using the same keys as
    /// [`with_env_override`](Self::with_env_override).
    pub fn with_overrides_from<L>(mut self, lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let number = |key: &str| lookup(key).and_then(|v| v.trim().parse::<f64>().ok());

        if let Some(max) = lookup("NUMERIC_MAX_ITERATIONS").and_then(|v| v.trim().parse().ok()) {
            self.bisection.max_iterations = max;
            self.binary_search.max_iterations = max;
            self.brent.max_iterations = max;
            self.retry.solver.max_iterations = max;
            self.newton_raphson.max_iterations = max;
        }

        if let Some(tolerance) = number("NUMERIC_BRENT_TOLERANCE") {
            self.brent.tolerance = tolerance;
            self.retry.solver.tolerance = tolerance;
        }

        if let Some(factor) = number("NUMERIC_RETRY_FACTOR") {
            self.retry.retry_factor = factor;
        }

        if let Some(step) = number("NUMERIC_NEWTON_STEP") {
            self.newton_raphson.step = step;
        }

        if let Some(error) = number("NUMERIC_NEWTON_ERROR_TOLERANCE") {
            self.newton_raphson.error_tolerance = error;
        }

        self
    }

    /// Validate the settings.
    ///
    /// # Errors
    /// `ConfigError::Invalid` listing every problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let bracketing = [
            ("bisection", &self.bisection),
            ("binary_search", &self.binary_search),
            ("brent", &self.brent),
            ("retry.solver", &self.retry.solver),
        ];
        for (name, config) in bracketing {
            if let Err(err) = config.validate() {
                errors.push(format!("{}: {}", name, err));
            }
            if config.max_iterations == 0 {
                errors.push(format!("{}: max_iterations must be greater than 0", name));
            }
        }

        if !(self.retry.retry_factor.is_finite() && self.retry.retry_factor != 0.0) {
            errors.push(format!(
                "retry: retry_factor must be finite and non-zero, got {}",
                self.retry.retry_factor
            ));
        }

        if let Err(err) = self.newton_raphson.validate() {
            errors.push(format!("newton_raphson: {}", err));
        }
        if !(self.newton_raphson.step > 0.0) {
            errors.push(format!(
                "newton_raphson: step must be positive, got {}",
                self.newton_raphson.step
            ));
        }
        if self.newton_raphson.max_iterations == 0 {
            errors.push("newton_raphson: max_iterations must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors.join("; ")))
        }
    }

    /// Load settings from file, apply environment overrides and validate.
    ///
    /// # Errors
    /// Any load or validation error.
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let settings = Self::load(path)?.with_env_override();
        settings.validate()?;
        Ok(settings)
    }

    /// Bisection solver built from these settings.
    pub fn bisection_solver(&self) -> BisectionSolver<f64> {
        BisectionSolver::new(self.bisection)
    }

    /// Binary search solver built from these settings.
    pub fn binary_search_solver(&self) -> BinarySearchSolver<f64> {
        BinarySearchSolver::new(self.binary_search)
    }

    /// Brent solver built from these settings.
    pub fn brent_solver(&self) -> BrentSolver<f64> {
        BrentSolver::new(self.brent)
    }

    /// Retrying Brent solver built from these settings.
    pub fn retry_solver(&self) -> BrentRetrySolver<f64> {
        BrentRetrySolver::new(self.retry)
    }

    /// Newton-Raphson solver built from these settings.
    pub fn newton_raphson_solver(&self) -> NewtonRaphsonSolver<f64> {
        NewtonRaphsonSolver::new(self.newton_raphson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    // ========================================
    // Defaults and Parsing
    // ========================================

    #[test]
    fn test_defaults_match_solver_defaults() {
        let settings = NumericSettings::default();
        assert_eq!(settings.bisection.tolerance, 0.01);
        assert_eq!(settings.binary_search.tolerance, 1.0);
        assert_eq!(settings.brent, SolverConfig::default());
        assert_eq!(settings.retry.retry_factor, 2.0);
        assert_eq!(settings.newton_raphson, NewtonRaphsonConfig::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings = NumericSettings::from_toml_str("").unwrap();
        assert_eq!(settings, NumericSettings::default());
    }

    #[test]
    fn test_partial_toml() {
        let settings = NumericSettings::from_toml_str(
            r#"
            [brent]
            tolerance = 1e-8

            [newton_raphson]
            error_tolerance = 1e-6
            "#,
        )
        .unwrap();

        assert_eq!(settings.brent.tolerance, 1e-8);
        assert_eq!(settings.brent.max_iterations, 25);
        assert_eq!(settings.newton_raphson.error_tolerance, 1e-6);
        assert_eq!(settings.newton_raphson.step, 0.01);
        assert_eq!(settings.bisection, SolverConfig::bisection());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut settings = NumericSettings::default();
        settings.retry.retry_factor = 0.5;
        settings.bisection.max_iterations = 60;

        let text = settings.to_toml_string().unwrap();
        assert_eq!(NumericSettings::from_toml_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_invalid_toml() {
        let err = NumericSettings::from_toml_str("[brent]\ntolerance = \"tight\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("does/not/exist/numeric.toml");
        assert!(matches!(NumericSettings::load(path), Err(ConfigError::Io(_))));
        assert_eq!(NumericSettings::load_or_default(path), NumericSettings::default());
    }

    // ========================================
    // Overrides and Validation
    // ========================================

    #[test]
    fn test_overrides() {
        let settings = NumericSettings::default().with_overrides_from(lookup_from(&[
            ("NUMERIC_MAX_ITERATIONS", "50"),
            ("NUMERIC_BRENT_TOLERANCE", "1e-9"),
            ("NUMERIC_RETRY_FACTOR", " 3 "),
            ("NUMERIC_NEWTON_STEP", "not-a-number"),
        ]));

        assert_eq!(settings.bisection.max_iterations, 50);
        assert_eq!(settings.newton_raphson.max_iterations, 50);
        assert_eq!(settings.brent.tolerance, 1e-9);
        assert_eq!(settings.retry.solver.tolerance, 1e-9);
        assert_eq!(settings.retry.retry_factor, 3.0);
        assert_eq!(settings.newton_raphson.step, 0.01);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut settings = NumericSettings::default();
        settings.brent.tolerance = 0.0;
        settings.retry.retry_factor = 0.0;
        settings.newton_raphson.max_iterations = 0;

        match settings.validate() {
            Err(ConfigError::Invalid(msg)) => {
                assert!(msg.contains("brent"));
                assert!(msg.contains("retry_factor"));
                assert!(msg.contains("newton_raphson: max_iterations"));
            }
            other => panic!("Expected Invalid error, got {:?}", other),
        }
    }

    #[test]
    fn test_solvers_use_settings() {
        let mut settings = NumericSettings::default();
        settings.brent.max_iterations = 5;

        let step = |x: f64| if x < 0.0 { -1.0 } else { 1.0 };
        let result = settings.brent_solver().find_root(step, -1000.0, 1000.0);
        assert_eq!(result.iteration_count(), 5);
        assert_eq!(settings.bisection_solver().config(), &settings.bisection);
        assert_eq!(settings.newton_raphson_solver().config(), &settings.newton_raphson);
    }
}
