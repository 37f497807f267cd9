//! Monte Carlo valuation simulator.
//!
//! Samples assumption sets from per-parameter distributions, values each
//! with the shared DCF engine, and summarises the resulting per-share
//! distribution. Trials run in parallel over rayon's thread pool; each
//! trial draws from its own seed-derived sub-stream, so a given seed
//! produces bit-identical results regardless of worker count.

use rand::Rng;
use rayon::prelude::*;
use valuer_core::dcf;
use valuer_core::types::{AssumptionSet, FinancialSnapshot, ValuationError};

use super::config::SimulationConfig;
use super::distribution::ParameterDistribution;
use super::error::SimulationError;
use super::result::{MonteCarloResult, PercentileBand, VarEstimate};
use super::rng::TrialRng;
use super::statistics;

/// Sampling distributions over the three rate parameters, plus the
/// fixed projection horizon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AssumptionDistributions {
    /// Explicit-period growth rate.
    pub growth: ParameterDistribution,
    /// Discount rate.
    pub discount_rate: ParameterDistribution,
    /// Terminal growth rate.
    pub terminal_growth: ParameterDistribution,
    /// Projection horizon, held fixed across trials.
    pub horizon_years: u32,
}

impl AssumptionDistributions {
    /// The deterministic assumption set at the distribution means.
    ///
    /// # Errors
    /// Propagates the usual assumption-set validation; in particular the
    /// means themselves must satisfy discount rate > terminal growth.
    pub fn mean_assumptions(&self) -> Result<AssumptionSet, ValuationError> {
        AssumptionSet::new(
            self.growth.mean(),
            self.discount_rate.mean(),
            self.terminal_growth.mean(),
            self.horizon_years,
        )
    }
}

/// Runs a Monte Carlo valuation.
///
/// Each trial samples (growth, discount rate, terminal growth) from the
/// given distributions and values the snapshot under the sampled set.
/// Draws that fall outside a distribution's truncation bounds, or that
/// violate discount rate > terminal growth, are rejected and redrawn;
/// a trial that exhausts its attempt budget is excluded and counted,
/// never silently patched with a substitute value. If the exclusion
/// rate exceeds the configured threshold a warning is emitted.
///
/// The base-case value (the deterministic valuation at the distribution
/// means) anchors the value-at-risk estimates. If the means themselves
/// form an invalid assumption set, the whole call fails.
///
/// # Errors
/// - [`SimulationError::Valuation`] if the mean-parameter valuation fails.
/// - [`SimulationError::AllTrialsExcluded`] if no trial completed.
///
/// # Examples
/// ```
/// use valuer_core::types::FinancialSnapshot;
/// use valuer_risk::mc::{
///     simulate, AssumptionDistributions, ParameterDistribution, SimulationConfig,
/// };
///
/// let snapshot = FinancialSnapshot::builder("ACME")
///     .base_fcf(100_000.0)
///     .shares_outstanding(1.0)
///     .build()
///     .unwrap();
/// let distributions = AssumptionDistributions {
///     growth: ParameterDistribution::growth(0.10, 0.02).unwrap(),
///     discount_rate: ParameterDistribution::discount_rate(0.12, 0.01).unwrap(),
///     terminal_growth: ParameterDistribution::terminal_growth(0.03, 0.005).unwrap(),
///     horizon_years: 5,
/// };
/// let config = SimulationConfig::builder()
///     .trial_count(1_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let result = simulate(&snapshot, &distributions, &config).unwrap();
/// assert_eq!(result.trials_completed + result.trials_excluded, 1_000);
/// assert_eq!(result.seed, 42);
/// ```
pub fn simulate(
    snapshot: &FinancialSnapshot,
    distributions: &AssumptionDistributions,
    config: &SimulationConfig,
) -> Result<MonteCarloResult, SimulationError> {
    let seed = config
        .seed()
        .unwrap_or_else(|| rand::thread_rng().gen::<u64>());

    let base = distributions.mean_assumptions()?;
    let base_value = dcf::value(snapshot, &base)?.value_per_share;

    let max_attempts = config.max_attempts();
    let outcomes: Vec<Option<f64>> = (0..config.trial_count())
        .into_par_iter()
        .map(|index| run_trial(snapshot, distributions, max_attempts, seed, index as u64))
        .collect();

    let mut values: Vec<f64> = Vec::with_capacity(outcomes.len());
    let mut excluded = 0usize;
    for outcome in outcomes {
        match outcome {
            Some(value) => values.push(value),
            None => excluded += 1,
        }
    }

    if values.is_empty() {
        return Err(SimulationError::AllTrialsExcluded { excluded });
    }

    let trials_requested = config.trial_count();
    let exclusion_rate = excluded as f64 / trials_requested as f64;
    if exclusion_rate > config.exclusion_warn_threshold() {
        tracing::warn!(
            excluded,
            trials_requested,
            exclusion_rate,
            "exclusion rate above threshold; distribution statistics may be biased"
        );
    }

    values.sort_by(|a, b| a.total_cmp(b));

    let mean = statistics::mean(&values);
    let std_dev = statistics::std_dev(&values, mean);
    let percentiles = config
        .percentiles()
        .iter()
        .map(|&p| PercentileBand {
            percentile: p,
            value: statistics::percentile_sorted(&values, p),
        })
        .collect();
    let value_at_risk = config
        .confidence_levels()
        .iter()
        .map(|&confidence| VarEstimate {
            confidence,
            value_at_risk: statistics::value_at_risk(&values, base_value, confidence),
        })
        .collect();

    let result = MonteCarloResult {
        seed,
        trials_requested,
        trials_completed: values.len(),
        trials_excluded: excluded,
        mean,
        std_dev,
        min: values[0],
        max: values[values.len() - 1],
        median: statistics::percentile_sorted(&values, 50.0),
        percentiles,
        base_value,
        value_at_risk,
        probability_positive: statistics::probability_positive(&values),
    };

    tracing::debug!(
        seed = result.seed,
        completed = result.trials_completed,
        excluded = result.trials_excluded,
        mean = result.mean,
        "Monte Carlo run complete"
    );

    Ok(result)
}

/// One trial: rejection-sample a valid assumption set and value it.
///
/// Returns `None` when the attempt budget is exhausted without a valid
/// sample (the trial is excluded).
fn run_trial(
    snapshot: &FinancialSnapshot,
    distributions: &AssumptionDistributions,
    max_attempts: usize,
    run_seed: u64,
    trial_index: u64,
) -> Option<f64> {
    let mut rng = TrialRng::for_trial(run_seed, trial_index);

    for _ in 0..max_attempts {
        let growth = distributions.growth.transform(rng.standard_normal());
        let discount = distributions.discount_rate.transform(rng.standard_normal());
        let terminal = distributions
            .terminal_growth
            .transform(rng.standard_normal());

        if !distributions.growth.contains(growth)
            || !distributions.discount_rate.contains(discount)
            || !distributions.terminal_growth.contains(terminal)
            || discount <= terminal
        {
            continue;
        }

        let assumptions =
            AssumptionSet::new(growth, discount, terminal, distributions.horizon_years).ok()?;
        return dcf::value(snapshot, &assumptions)
            .ok()
            .map(|result| result.value_per_share);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn snapshot() -> FinancialSnapshot {
        FinancialSnapshot::builder("TEST")
            .base_fcf(100_000.0)
            .shares_outstanding(1.0)
            .build()
            .unwrap()
    }

    fn distributions() -> AssumptionDistributions {
        AssumptionDistributions {
            growth: ParameterDistribution::growth(0.10, 0.02).unwrap(),
            discount_rate: ParameterDistribution::discount_rate(0.12, 0.01).unwrap(),
            terminal_growth: ParameterDistribution::terminal_growth(0.03, 0.005).unwrap(),
            horizon_years: 5,
        }
    }

    fn config(trials: usize, seed: u64) -> SimulationConfig {
        SimulationConfig::builder()
            .trial_count(trials)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_trials_accounted_for() {
        let result = simulate(&snapshot(), &distributions(), &config(2_000, 7)).unwrap();
        assert_eq!(result.trials_requested, 2_000);
        assert_eq!(
            result.trials_completed + result.trials_excluded,
            result.trials_requested
        );
        assert!(result.trials_completed > 0);
    }

    #[test]
    fn test_same_seed_reproduces_exactly() {
        let a = simulate(&snapshot(), &distributions(), &config(1_000, 42)).unwrap();
        let b = simulate(&snapshot(), &distributions(), &config(1_000, 42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = simulate(&snapshot(), &distributions(), &config(1_000, 1)).unwrap();
        let b = simulate(&snapshot(), &distributions(), &config(1_000, 2)).unwrap();
        assert_ne!(a.mean, b.mean);
    }

    #[test]
    fn test_entropy_seed_recorded_and_reproducible() {
        let no_seed = SimulationConfig::builder().trial_count(500).build().unwrap();
        let first = simulate(&snapshot(), &distributions(), &no_seed).unwrap();

        let replay = simulate(
            &snapshot(),
            &distributions(),
            &config(500, first.seed),
        )
        .unwrap();
        assert_eq!(first, replay);
    }

    #[test]
    fn test_degenerate_distributions_match_deterministic_value() {
        let dists = AssumptionDistributions {
            growth: ParameterDistribution::new(0.10, 0.0).unwrap(),
            discount_rate: ParameterDistribution::new(0.12, 0.0).unwrap(),
            terminal_growth: ParameterDistribution::new(0.03, 0.0).unwrap(),
            horizon_years: 5,
        };
        let result = simulate(&snapshot(), &dists, &config(100, 99)).unwrap();

        let deterministic = dcf::value(&snapshot(), &dists.mean_assumptions().unwrap())
            .unwrap()
            .value_per_share;

        assert_eq!(result.trials_excluded, 0);
        assert_eq!(result.min, deterministic);
        assert_eq!(result.max, deterministic);
        assert_eq!(result.mean, deterministic);
        assert_eq!(result.std_dev, 0.0);
        for band in &result.percentiles {
            assert_eq!(band.value, deterministic);
        }
    }

    #[test]
    fn test_divergent_means_fatal() {
        let dists = AssumptionDistributions {
            growth: ParameterDistribution::new(0.10, 0.02).unwrap(),
            discount_rate: ParameterDistribution::new(0.02, 0.01).unwrap(),
            terminal_growth: ParameterDistribution::new(0.03, 0.005).unwrap(),
            horizon_years: 5,
        };
        assert!(matches!(
            simulate(&snapshot(), &dists, &config(100, 1)),
            Err(SimulationError::Valuation(_))
        ));
    }

    #[test]
    fn test_all_trials_excluded() {
        // Point mass inside valid means but outside its truncation
        // bounds: every draw is rejected, every trial excluded.
        let dists = AssumptionDistributions {
            growth: ParameterDistribution::new(0.10, 0.0)
                .unwrap()
                .with_bounds(0.2, 0.3)
                .unwrap(),
            discount_rate: ParameterDistribution::new(0.12, 0.0).unwrap(),
            terminal_growth: ParameterDistribution::new(0.03, 0.0).unwrap(),
            horizon_years: 5,
        };
        assert_eq!(
            simulate(&snapshot(), &dists, &config(50, 1)),
            Err(SimulationError::AllTrialsExcluded { excluded: 50 })
        );
    }

    #[test]
    fn test_statistics_are_ordered() {
        let result = simulate(&snapshot(), &distributions(), &config(5_000, 3)).unwrap();
        assert!(result.min <= result.percentile(5.0).unwrap());
        assert!(result.percentile(5.0).unwrap() <= result.median);
        assert!(result.median <= result.percentile(95.0).unwrap());
        assert!(result.percentile(95.0).unwrap() <= result.max);
        assert!(result.std_dev > 0.0);
        // All simulated values are positive for this healthy snapshot.
        assert_eq!(result.probability_positive, 1.0);
    }

    #[test]
    fn test_mean_near_base_value() {
        // With modest spreads the simulated mean sits near the
        // deterministic base value (valuation convexity keeps them from
        // coinciding exactly).
        let result = simulate(&snapshot(), &distributions(), &config(20_000, 11)).unwrap();
        assert_relative_eq!(result.mean, result.base_value, max_relative = 0.10);
    }

    #[test]
    fn test_var_consistent_with_percentile_band() {
        // The 95% VaR and the reported P5 band must come from the same
        // interpolated tail value, bit for bit.
        let result = simulate(&snapshot(), &distributions(), &config(2_000, 5)).unwrap();
        let expected = (result.base_value - result.percentile(5.0).unwrap()).max(0.0);
        assert_eq!(result.var_at(0.95), Some(expected));
    }

    #[test]
    fn test_var_present_per_confidence_level() {
        let config = SimulationConfig::builder()
            .trial_count(2_000)
            .seed(5)
            .confidence_levels(vec![0.90, 0.95, 0.99])
            .build()
            .unwrap();
        let result = simulate(&snapshot(), &distributions(), &config).unwrap();
        assert_eq!(result.value_at_risk.len(), 3);
        for est in &result.value_at_risk {
            assert!(est.value_at_risk >= 0.0);
        }
    }
}
