//! Explicit-horizon cash flow projection.

use crate::types::{AssumptionSet, FinancialSnapshot};
use serde::{Deserialize, Serialize};

/// Ordered per-year projected free cash flows.
///
/// Produced by [`project_cash_flows`]; length equals the assumption
/// horizon, year 1 first. Immutable after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CashFlowProjection {
    flows: Vec<f64>,
}

impl CashFlowProjection {
    /// Projected flow for year `t` (1-based).
    ///
    /// Returns `None` if `t` is 0 or beyond the horizon.
    #[inline]
    pub fn year(&self, t: usize) -> Option<f64> {
        if t == 0 {
            return None;
        }
        self.flows.get(t - 1).copied()
    }

    /// All projected flows, year 1 first.
    #[inline]
    pub fn flows(&self) -> &[f64] {
        &self.flows
    }

    /// Projection horizon in years.
    #[inline]
    pub fn horizon_years(&self) -> usize {
        self.flows.len()
    }

    /// Flow in the final explicit year.
    #[inline]
    pub fn final_year(&self) -> f64 {
        // Horizon ≥ 1 is enforced by AssumptionSet, so flows is non-empty.
        self.flows[self.flows.len() - 1]
    }
}

/// Projects free cash flow over the explicit horizon with compound growth.
///
/// Year `t` flow is `base_fcf × (1 + growth)^t` for `t = 1..=horizon`.
///
/// # Examples
/// ```
/// use valuer_core::dcf::project_cash_flows;
/// use valuer_core::types::{AssumptionSet, FinancialSnapshot};
///
/// let snapshot = FinancialSnapshot::builder("ACME")
///     .base_fcf(100.0)
///     .shares_outstanding(1.0)
///     .build()
///     .unwrap();
/// let assumptions = AssumptionSet::new(0.10, 0.12, 0.03, 3).unwrap();
///
/// let projection = project_cash_flows(&snapshot, &assumptions);
/// assert_eq!(projection.horizon_years(), 3);
/// assert!((projection.year(1).unwrap() - 110.0).abs() < 1e-9);
/// ```
pub fn project_cash_flows(
    snapshot: &FinancialSnapshot,
    assumptions: &AssumptionSet,
) -> CashFlowProjection {
    let horizon = assumptions.horizon_years() as usize;
    let mut flows = Vec::with_capacity(horizon);

    let mut fcf = snapshot.base_fcf();
    for _ in 0..horizon {
        fcf *= 1.0 + assumptions.growth();
        flows.push(fcf);
    }

    CashFlowProjection { flows }
}
