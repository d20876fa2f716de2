//! Solver and experiment configuration.
//!
//! Settings load from TOML so experiments can be tuned without code changes.
//! Every field has a default, and a missing file falls back to defaults.
//!
//! # Examples
//!
//! ```
//! use u_tsp::config::ExperimentConfig;
//! use u_tsp::local_search::TwoOptPolicy;
//!
//! let config = ExperimentConfig::from_toml_str(r#"
//!     sizes = [5, 7]
//!     trials = 3
//!
//!     [solver]
//!     two_opt_policy = "best_improvement"
//!     brute_force_limit = 8
//! "#).unwrap();
//!
//! assert_eq!(config.sizes, vec![5, 7]);
//! assert_eq!(config.base_seed, 123);
//! assert_eq!(config.solver.two_opt_policy, TwoOptPolicy::BestImprovement);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};
use crate::local_search::{TwoOptPolicy, DEFAULT_IMPROVEMENT_EPSILON};

/// Settings shared by every solver run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Move selection policy for 2-opt.
    pub two_opt_policy: TwoOptPolicy,

    /// Minimum gain a 2-opt move must achieve to be accepted.
    pub improvement_epsilon: f64,

    /// Largest instance the experiment runner solves exactly.
    pub brute_force_limit: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            two_opt_policy: TwoOptPolicy::default(),
            improvement_epsilon: DEFAULT_IMPROVEMENT_EPSILON,
            brute_force_limit: 10,
        }
    }
}

impl SolverConfig {
    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads a configuration file, or returns defaults if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_toml_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Sets the 2-opt policy.
    pub fn with_two_opt_policy(mut self, policy: TwoOptPolicy) -> Self {
        self.two_opt_policy = policy;
        self
    }

    /// Sets the minimum accepted 2-opt gain.
    pub fn with_improvement_epsilon(mut self, epsilon: f64) -> Self {
        self.improvement_epsilon = epsilon;
        self
    }

    /// Sets the largest instance solved by brute force.
    pub fn with_brute_force_limit(mut self, limit: usize) -> Self {
        self.brute_force_limit = limit;
        self
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<()> {
        if !self.improvement_epsilon.is_finite() || self.improvement_epsilon < 0.0 {
            return Err(TspError::Config(format!(
                "improvement_epsilon must be finite and non-negative, got {}",
                self.improvement_epsilon
            )));
        }
        Ok(())
    }
}

/// Settings for a batch of generated-instance experiments.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Instance sizes to run.
    pub sizes: Vec<usize>,

    /// Trials per size.
    pub trials: usize,

    /// Seed that per-trial seeds are derived from.
    pub base_seed: u64,

    /// Width of the area cities are drawn from.
    pub width: f64,

    /// Height of the area cities are drawn from.
    pub height: f64,

    /// Solver settings.
    pub solver: SolverConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: vec![6, 8, 10, 20, 50, 100, 200],
            trials: 10,
            base_seed: 123,
            width: 100.0,
            height: 100.0,
            solver: SolverConfig::default(),
        }
    }
}

impl ExperimentConfig {
    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads a configuration file, or returns defaults if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_toml_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.contains(&0) {
            return Err(TspError::Config("sizes must all be at least 1".to_string()));
        }
        let area_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !area_ok(self.width) || !area_ok(self.height) {
            return Err(TspError::Config(format!(
                "area must be finite and non-negative, got {}x{}",
                self.width, self.height
            )));
        }
        self.solver.validate()
    }
}
