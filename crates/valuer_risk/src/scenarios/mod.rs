//! Scenario analysis: named shocks applied to a base assumption set.
//!
//! Each scenario derives a shocked [`AssumptionSet`] and values it with
//! the shared DCF engine. Scenario failures are isolated: a shock that
//! produces a divergent set is recorded as that scenario's outcome and
//! the remaining scenarios still run.

pub mod presets;
pub mod shock;

pub use presets::{bear_base_bull, stress_scenarios};
pub use shock::{ParameterShock, ScenarioShock};

use serde::{Deserialize, Serialize};
use valuer_core::dcf::{self, DcfResult};
use valuer_core::types::{AssumptionSet, FinancialSnapshot, ValuationError};

/// A successful scenario valuation: the shocked assumptions and the DCF
/// result they produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioValuation {
    /// The derived assumption set after the shock.
    pub assumptions: AssumptionSet,
    /// Valuation under the derived assumptions.
    pub result: DcfResult,
}

/// Outcome of one named scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario name.
    pub name: String,
    /// Scenario description.
    pub description: String,
    /// Valuation, or the isolated error that prevented it.
    pub outcome: Result<ScenarioValuation, ValuationError>,
}

/// Min/max/spread of per-share values across successful scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lowest successful per-share value.
    pub min: f64,
    /// Highest successful per-share value.
    pub max: f64,
    /// `max − min`.
    pub spread: f64,
}

/// Named scenario outcomes, in the order the shocks were supplied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    /// Per-scenario outcomes.
    pub scenarios: Vec<ScenarioResult>,
}

impl ScenarioSet {
    /// Outcome for a scenario by name.
    pub fn get(&self, name: &str) -> Option<&ScenarioResult> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Per-share value range across successful scenarios, if any
    /// succeeded.
    pub fn value_range(&self) -> Option<ValueRange> {
        let values: Vec<f64> = self
            .scenarios
            .iter()
            .filter_map(|s| s.outcome.as_ref().ok().map(|v| v.result.value_per_share))
            .collect();
        let (first, rest) = values.split_first()?;
        let (mut min, mut max) = (*first, *first);
        for &v in rest {
            min = min.min(v);
            max = max.max(v);
        }
        Some(ValueRange {
            min,
            max,
            spread: max - min,
        })
    }

    /// Count of scenarios that failed.
    pub fn failure_count(&self) -> usize {
        self.scenarios.iter().filter(|s| s.outcome.is_err()).count()
    }
}

/// Runs every shock against the base assumption set.
///
/// # Examples
/// ```
/// use valuer_core::types::{AssumptionSet, FinancialSnapshot};
/// use valuer_risk::scenarios::{bear_base_bull, run_scenarios};
///
/// let snapshot = FinancialSnapshot::builder("ACME")
///     .base_fcf(100_000.0)
///     .shares_outstanding(1.0)
///     .build()
///     .unwrap();
/// let base = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();
///
/// let set = run_scenarios(&snapshot, &base, &bear_base_bull());
/// assert_eq!(set.scenarios.len(), 3);
/// assert!(set.get("bear").is_some());
/// ```
pub fn run_scenarios(
    snapshot: &FinancialSnapshot,
    base: &AssumptionSet,
    shocks: &[ScenarioShock],
) -> ScenarioSet {
    let scenarios = shocks
        .iter()
        .map(|shock| {
            let outcome = shock.apply(base).and_then(|assumptions| {
                dcf::value(snapshot, &assumptions).map(|result| ScenarioValuation {
                    assumptions,
                    result,
                })
            });
            ScenarioResult {
                name: shock.name.clone(),
                description: shock.description.clone(),
                outcome,
            }
        })
        .collect();

    ScenarioSet { scenarios }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> FinancialSnapshot {
        FinancialSnapshot::builder("TEST")
            .base_fcf(100_000.0)
            .shares_outstanding(1.0)
            .build()
            .unwrap()
    }

    fn base() -> AssumptionSet {
        AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap()
    }

    #[test]
    fn test_bear_base_bull_ordering() {
        let set = run_scenarios(&snapshot(), &base(), &bear_base_bull());

        let bear = set.get("bear").unwrap().outcome.as_ref().unwrap();
        let mid = set.get("base").unwrap().outcome.as_ref().unwrap();
        let bull = set.get("bull").unwrap().outcome.as_ref().unwrap();

        assert!(bear.result.value_per_share < mid.result.value_per_share);
        assert!(mid.result.value_per_share < bull.result.value_per_share);
    }

    #[test]
    fn test_base_scenario_matches_engine() {
        let set = run_scenarios(&snapshot(), &base(), &bear_base_bull());
        let mid = set.get("base").unwrap().outcome.as_ref().unwrap();
        let direct = dcf::value(&snapshot(), &base()).unwrap();
        assert_eq!(mid.result, direct);
        assert_eq!(mid.assumptions, base());
    }

    #[test]
    fn test_invalid_shock_isolated() {
        let mut shocks = bear_base_bull();
        shocks.push(ScenarioShock::new(
            "broken",
            "discount below terminal",
            ParameterShock::Hold,
            ParameterShock::Set(0.01),
            ParameterShock::Hold,
        ));

        let set = run_scenarios(&snapshot(), &base(), &shocks);
        assert_eq!(set.failure_count(), 1);
        assert!(set.get("broken").unwrap().outcome.is_err());
        // The other three still report.
        assert!(set.get("bull").unwrap().outcome.is_ok());
    }

    #[test]
    fn test_value_range() {
        let set = run_scenarios(&snapshot(), &base(), &bear_base_bull());
        let range = set.value_range().unwrap();

        let bear = set.get("bear").unwrap().outcome.as_ref().unwrap();
        let bull = set.get("bull").unwrap().outcome.as_ref().unwrap();
        assert_eq!(range.min, bear.result.value_per_share);
        assert_eq!(range.max, bull.result.value_per_share);
        assert!(range.spread > 0.0);
    }

    #[test]
    fn test_value_range_empty_when_all_fail() {
        let shocks = vec![ScenarioShock::new(
            "broken",
            "",
            ParameterShock::Hold,
            ParameterShock::Set(0.0),
            ParameterShock::Set(0.0),
        )];
        let set = run_scenarios(&snapshot(), &base(), &shocks);
        assert!(set.value_range().is_none());
    }

    #[test]
    fn test_stress_scenarios_run() {
        let set = run_scenarios(&snapshot(), &base(), &stress_scenarios());
        assert_eq!(set.scenarios.len(), 4);
        assert_eq!(set.failure_count(), 0);

        // Stress values sit below the undisturbed base valuation.
        let base_value = dcf::value(&snapshot(), &base()).unwrap().value_per_share;
        for scenario in &set.scenarios {
            let value = scenario.outcome.as_ref().unwrap().result.value_per_share;
            assert!(
                value < base_value,
                "stress scenario '{}' should value below base",
                scenario.name
            );
        }
    }
}
