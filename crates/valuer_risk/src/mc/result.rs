//! Monte Carlo simulation results.

use serde::{Deserialize, Serialize};

/// One reported percentile of the simulated per-share distribution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PercentileBand {
    /// Percentile, in percent (e.g. `5.0` for P5).
    pub percentile: f64,
    /// Per-share value at that percentile.
    pub value: f64,
}

/// Value-at-risk estimate at one confidence level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VarEstimate {
    /// Confidence level (e.g. `0.95`).
    pub confidence: f64,
    /// Loss relative to the base-case value, floored at zero.
    pub value_at_risk: f64,
}

/// Full result of a Monte Carlo valuation run.
///
/// Carries the seed actually used, so any run (including one that drew
/// its seed from entropy) can be reproduced exactly by passing
/// [`seed`](Self::seed) back into the configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    /// Seed the run used (supplied or entropy-drawn).
    pub seed: u64,
    /// Trials requested in the configuration.
    pub trials_requested: usize,
    /// Trials that produced a valuation.
    pub trials_completed: usize,
    /// Trials excluded after exhausting their sampling attempt budget.
    pub trials_excluded: usize,
    /// Mean simulated per-share value.
    pub mean: f64,
    /// Population standard deviation of simulated values.
    pub std_dev: f64,
    /// Minimum simulated value.
    pub min: f64,
    /// Maximum simulated value.
    pub max: f64,
    /// Median simulated value.
    pub median: f64,
    /// Reported percentiles, ascending by percentile.
    pub percentiles: Vec<PercentileBand>,
    /// Deterministic valuation at the distribution means.
    pub base_value: f64,
    /// Value-at-risk estimates, one per configured confidence level.
    pub value_at_risk: Vec<VarEstimate>,
    /// Fraction of simulated values that are strictly positive.
    pub probability_positive: f64,
}

impl MonteCarloResult {
    /// Value at a reported percentile, if it was configured.
    pub fn percentile(&self, percentile: f64) -> Option<f64> {
        self.percentiles
            .iter()
            .find(|band| band.percentile == percentile)
            .map(|band| band.value)
    }

    /// VaR at a configured confidence level, if present.
    pub fn var_at(&self, confidence: f64) -> Option<f64> {
        self.value_at_risk
            .iter()
            .find(|est| est.confidence == confidence)
            .map(|est| est.value_at_risk)
    }

    /// Fraction of requested trials that were excluded.
    pub fn exclusion_rate(&self) -> f64 {
        if self.trials_requested == 0 {
            return 0.0;
        }
        self.trials_excluded as f64 / self.trials_requested as f64
    }
}
