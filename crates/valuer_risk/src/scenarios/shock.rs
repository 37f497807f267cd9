//! Named parameter shocks applied to a base assumption set.

use serde::{Deserialize, Serialize};
use valuer_core::types::{AssumptionSet, ValuationError};

/// How one assumption parameter moves under a scenario.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParameterShock {
    /// Keep the base value.
    Hold,
    /// Add an absolute amount (in rate points) to the base value.
    Shift(f64),
    /// Replace the base value outright.
    Set(f64),
}

impl ParameterShock {
    /// Applies the shock to a base value.
    #[inline]
    pub fn apply(&self, base: f64) -> f64 {
        match self {
            Self::Hold => base,
            Self::Shift(delta) => base + delta,
            Self::Set(value) => *value,
        }
    }
}

/// A named, coordinated shock across the three rate parameters.
///
/// Shock magnitudes are configuration data, not hardcoded behaviour;
/// [`presets`](super::presets) provides the conventional bear/base/bull
/// and stress definitions, and callers may supply their own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioShock {
    /// Scenario name (e.g. "bear", "recession").
    pub name: String,
    /// Short description for reporting collaborators.
    pub description: String,
    /// Growth-rate shock.
    pub growth: ParameterShock,
    /// Discount-rate shock.
    pub discount_rate: ParameterShock,
    /// Terminal-growth shock.
    pub terminal_growth: ParameterShock,
}

impl ScenarioShock {
    /// Creates a shock with the given name and parameter moves.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        growth: ParameterShock,
        discount_rate: ParameterShock,
        terminal_growth: ParameterShock,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            growth,
            discount_rate,
            terminal_growth,
        }
    }

    /// Derives the shocked assumption set from a base.
    ///
    /// The horizon is held fixed. The derived set goes through full
    /// validation; a shock that pushes the discount rate at or below
    /// terminal growth fails with `InvalidAssumption` and the caller
    /// records that outcome for the scenario instead of substituting a
    /// nearby value.
    pub fn apply(&self, base: &AssumptionSet) -> Result<AssumptionSet, ValuationError> {
        base.with_parameters(
            self.growth.apply(base.growth()),
            self.discount_rate.apply(base.discount_rate()),
            self.terminal_growth.apply(base.terminal_growth()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parameter_shock_apply() {
        assert_eq!(ParameterShock::Hold.apply(0.10), 0.10);
        assert_relative_eq!(ParameterShock::Shift(-0.05).apply(0.10), 0.05, epsilon = 1e-12);
        assert_eq!(ParameterShock::Set(-0.20).apply(0.10), -0.20);
    }

    #[test]
    fn test_shock_derives_validated_set() {
        let base = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();
        let shock = ScenarioShock::new(
            "bear",
            "pessimistic",
            ParameterShock::Shift(-0.05),
            ParameterShock::Shift(0.02),
            ParameterShock::Shift(-0.01),
        );

        let shocked = shock.apply(&base).unwrap();
        assert_relative_eq!(shocked.growth(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(shocked.discount_rate(), 0.14, epsilon = 1e-12);
        assert_relative_eq!(shocked.terminal_growth(), 0.02, epsilon = 1e-12);
        assert_eq!(shocked.horizon_years(), 5);
    }

    #[test]
    fn test_divergent_shock_rejected() {
        let base = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();
        let shock = ScenarioShock::new(
            "broken",
            "discount pushed below terminal",
            ParameterShock::Hold,
            ParameterShock::Set(0.02),
            ParameterShock::Hold,
        );
        assert!(matches!(
            shock.apply(&base),
            Err(ValuationError::InvalidAssumption(_))
        ));
    }
}
