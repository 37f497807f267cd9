//! Preset scenario shocks.
//!
//! Conventional bear/base/bull definitions plus stress scenarios
//! (recession, high inflation, market crash, industry disruption).
//! All magnitudes here are defaults; callers can pass their own
//! [`ScenarioShock`] lists to the runner.

use super::shock::{ParameterShock, ScenarioShock};

/// The conventional bear/base/bull trio.
///
/// - bear: growth −5pp, discount +2pp, terminal −1pp
/// - base: unchanged
/// - bull: growth +5pp, discount −1pp, terminal +1pp
pub fn bear_base_bull() -> Vec<ScenarioShock> {
    vec![
        ScenarioShock::new(
            "bear",
            "Conservative/pessimistic scenario",
            ParameterShock::Shift(-0.05),
            ParameterShock::Shift(0.02),
            ParameterShock::Shift(-0.01),
        ),
        ScenarioShock::new(
            "base",
            "Most likely scenario",
            ParameterShock::Hold,
            ParameterShock::Hold,
            ParameterShock::Hold,
        ),
        ScenarioShock::new(
            "bull",
            "Optimistic scenario",
            ParameterShock::Shift(0.05),
            ParameterShock::Shift(-0.01),
            ParameterShock::Shift(0.01),
        ),
    ]
}

/// Stress scenarios for extreme environments.
///
/// Growth is replaced outright where the stress narrative implies a
/// contraction independent of the base assumption.
pub fn stress_scenarios() -> Vec<ScenarioShock> {
    vec![
        ScenarioShock::new(
            "recession",
            "Economic recession scenario",
            ParameterShock::Set(-0.20),
            ParameterShock::Shift(0.05),
            ParameterShock::Set(0.01),
        ),
        ScenarioShock::new(
            "high_inflation",
            "High inflation environment",
            ParameterShock::Shift(-0.10),
            ParameterShock::Shift(0.08),
            ParameterShock::Shift(0.02),
        ),
        ScenarioShock::new(
            "market_crash",
            "Market crash scenario",
            ParameterShock::Set(-0.30),
            ParameterShock::Shift(0.10),
            ParameterShock::Set(-0.05),
        ),
        ScenarioShock::new(
            "industry_disruption",
            "Industry disruption scenario",
            ParameterShock::Set(-0.15),
            ParameterShock::Shift(0.03),
            ParameterShock::Set(0.005),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuer_core::types::AssumptionSet;

    #[test]
    fn test_bear_base_bull_names() {
        let shocks = bear_base_bull();
        let names: Vec<&str> = shocks.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["bear", "base", "bull"]);
    }

    #[test]
    fn test_base_preset_is_identity() {
        let base = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();
        let shocks = bear_base_bull();
        let applied = shocks[1].apply(&base).unwrap();
        assert_eq!(applied, base);
    }

    #[test]
    fn test_presets_apply_to_typical_base() {
        // Every preset should derive a valid set from a typical base.
        let base = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();
        for shock in bear_base_bull().iter().chain(stress_scenarios().iter()) {
            assert!(
                shock.apply(&base).is_ok(),
                "preset '{}' failed on typical base",
                shock.name
            );
        }
    }

    #[test]
    fn test_stress_scenario_names() {
        let names: Vec<String> = stress_scenarios().into_iter().map(|s| s.name).collect();
        assert!(names.contains(&"recession".to_string()));
        assert!(names.contains(&"market_crash".to_string()));
    }
}
