//! Monte Carlo simulation configuration.

use serde::{Deserialize, Serialize};

use super::error::SimulationError;

/// Hard upper bound on the trial count.
pub const MAX_TRIALS: usize = 10_000_000;

/// Default number of trials.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Default per-trial sampling attempt budget.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Default exclusion-rate threshold above which a warning is emitted.
pub const DEFAULT_EXCLUSION_WARN_THRESHOLD: f64 = 0.10;

/// Configuration for a Monte Carlo valuation run.
///
/// Construct via [`SimulationConfig::builder`]; `build()` validates the
/// whole configuration and rejects out-of-domain values rather than
/// clamping them.
///
/// # Examples
/// ```
/// use valuer_risk::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .trial_count(50_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(config.trial_count(), 50_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    trial_count: usize,
    seed: Option<u64>,
    max_attempts: usize,
    exclusion_warn_threshold: f64,
    percentiles: Vec<f64>,
    confidence_levels: Vec<f64>,
}

impl SimulationConfig {
    /// Starts a builder with the defaults.
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of trials to run.
    #[inline]
    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    /// Explicit seed, if one was supplied.
    ///
    /// When absent, the simulator draws a seed from entropy and records
    /// it in the result so the run can be reproduced.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Per-trial sampling attempt budget before the trial is excluded.
    #[inline]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Exclusion-rate threshold above which the simulator warns.
    #[inline]
    pub fn exclusion_warn_threshold(&self) -> f64 {
        self.exclusion_warn_threshold
    }

    /// Percentiles (in percent) reported in the result.
    #[inline]
    pub fn percentiles(&self) -> &[f64] {
        &self.percentiles
    }

    /// Confidence levels for the value-at-risk estimates.
    #[inline]
    pub fn confidence_levels(&self) -> &[f64] {
        &self.confidence_levels
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trial_count: DEFAULT_TRIALS,
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            exclusion_warn_threshold: DEFAULT_EXCLUSION_WARN_THRESHOLD,
            percentiles: vec![5.0, 25.0, 50.0, 75.0, 95.0],
            confidence_levels: vec![0.95, 0.99],
        }
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Sets the trial count.
    pub fn trial_count(mut self, trial_count: usize) -> Self {
        self.config.trial_count = trial_count;
        self
    }

    /// Sets an explicit seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets the per-trial sampling attempt budget.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    /// Sets the exclusion-rate warning threshold.
    pub fn exclusion_warn_threshold(mut self, threshold: f64) -> Self {
        self.config.exclusion_warn_threshold = threshold;
        self
    }

    /// Sets the reported percentiles (in percent, e.g. `5.0` for P5).
    pub fn percentiles(mut self, percentiles: Vec<f64>) -> Self {
        self.config.percentiles = percentiles;
        self
    }

    /// Sets the VaR confidence levels (e.g. `0.95`).
    pub fn confidence_levels(mut self, levels: Vec<f64>) -> Self {
        self.config.confidence_levels = levels;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidTrialCount`] if the trial count is
    ///   zero or exceeds [`MAX_TRIALS`].
    /// - [`SimulationError::InvalidParameter`] if the attempt budget is
    ///   zero, the warning threshold is outside `[0, 1]`, a percentile is
    ///   outside `(0, 100)`, or a confidence level is outside `(0, 1)`.
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        let config = self.config;

        if config.trial_count < 1 || config.trial_count > MAX_TRIALS {
            return Err(SimulationError::InvalidTrialCount(config.trial_count));
        }
        if config.max_attempts < 1 {
            return Err(SimulationError::InvalidParameter {
                name: "max_attempts",
                value: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&config.exclusion_warn_threshold)
            || config.exclusion_warn_threshold.is_nan()
        {
            return Err(SimulationError::InvalidParameter {
                name: "exclusion_warn_threshold",
                value: format!("{} not in [0, 1]", config.exclusion_warn_threshold),
            });
        }
        for &p in &config.percentiles {
            if !(p > 0.0 && p < 100.0) {
                return Err(SimulationError::InvalidParameter {
                    name: "percentiles",
                    value: format!("{} not in (0, 100)", p),
                });
            }
        }
        for &c in &config.confidence_levels {
            if !(c > 0.0 && c < 1.0) {
                return Err(SimulationError::InvalidParameter {
                    name: "confidence_levels",
                    value: format!("{} not in (0, 1)", c),
                });
            }
        }

        Ok(config)
    }
}
