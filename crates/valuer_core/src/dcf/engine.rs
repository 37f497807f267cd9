//! Deterministic discounted-cash-flow valuation.
//!
//! [`value`] is the single valuation primitive of the workspace: the
//! suite, the sensitivity grid, the scenario runner and the Monte Carlo
//! engine all call it rather than re-implementing discounting. It is a
//! pure function of its inputs with no hidden state, so any number of
//! callers may run it concurrently.

use super::projection::{project_cash_flows, CashFlowProjection};
use crate::types::{AssumptionSet, FinancialSnapshot, ValuationError};
use serde::{Deserialize, Serialize};

/// Immutable DCF valuation result.
///
/// Negative `equity_value` (and hence `value_per_share`) is a legal
/// outcome when net debt exceeds enterprise value; it is surfaced, not
/// suppressed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DcfResult {
    /// Present value of each explicit-year flow, year 1 first.
    pub discounted_flows: Vec<f64>,
    /// Sum of the discounted explicit-year flows.
    pub pv_explicit_flows: f64,
    /// Undiscounted terminal value at the horizon.
    pub terminal_value: f64,
    /// Terminal value discounted back to today.
    pub discounted_terminal: f64,
    /// Enterprise value: PV of flows + discounted terminal value.
    pub enterprise_value: f64,
    /// Equity value: enterprise value − net debt.
    pub equity_value: f64,
    /// Equity value per share.
    pub value_per_share: f64,
}

/// Values a company with the discounted-cash-flow model.
///
/// # Algorithm
///
/// 1. Project year-`t` flow as `base_fcf × (1 + growth)^t`.
/// 2. Discount each flow by `(1 + discount_rate)^t` and sum.
/// 3. Terminal flow = final-year flow × `(1 + terminal_growth)`;
///    terminal value = terminal flow / `(discount_rate − terminal_growth)`,
///    discounted by `(1 + discount_rate)^horizon`.
/// 4. Enterprise value = PV of flows + discounted terminal value;
///    equity value subtracts net debt; per-share divides by shares.
///
/// # Errors
///
/// Returns `ValuationError::InvalidAssumption` for a divergent or
/// degenerate assumption set (impossible for a constructed
/// [`AssumptionSet`], but revalidated here so the contract holds even if
/// construction is bypassed in future refactors).
///
/// # Examples
/// ```
/// use valuer_core::dcf::value;
/// use valuer_core::types::{AssumptionSet, FinancialSnapshot};
///
/// let snapshot = FinancialSnapshot::builder("ACME")
///     .base_fcf(100_000.0)
///     .shares_outstanding(1.0)
///     .build()
///     .unwrap();
/// let assumptions = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();
///
/// let result = value(&snapshot, &assumptions).unwrap();
/// assert!(result.value_per_share > 0.0);
/// ```
pub fn value(
    snapshot: &FinancialSnapshot,
    assumptions: &AssumptionSet,
) -> Result<DcfResult, ValuationError> {
    let projection = project_cash_flows(snapshot, assumptions);
    value_projection(&projection, snapshot, assumptions)
}

/// Values a pre-computed projection.
///
/// Split out so callers that inspect the projection (reporting
/// collaborators) do not project twice.
pub fn value_projection(
    projection: &CashFlowProjection,
    snapshot: &FinancialSnapshot,
    assumptions: &AssumptionSet,
) -> Result<DcfResult, ValuationError> {
    let discount_rate = assumptions.discount_rate();
    let terminal_growth = assumptions.terminal_growth();

    // AssumptionSet enforces this at construction; kept as a guard so the
    // primitive is safe on its own.
    if discount_rate <= terminal_growth {
        return Err(ValuationError::assumption(format!(
            "discount rate ({:.4}) must exceed terminal growth ({:.4})",
            discount_rate, terminal_growth
        )));
    }
    if projection.horizon_years() == 0 {
        return Err(ValuationError::assumption(
            "projection horizon must be at least 1 year",
        ));
    }

    let mut discounted_flows = Vec::with_capacity(projection.horizon_years());
    let mut pv_explicit_flows = 0.0;
    for (i, &flow) in projection.flows().iter().enumerate() {
        let t = (i + 1) as i32;
        let pv = flow / (1.0 + discount_rate).powi(t);
        discounted_flows.push(pv);
        pv_explicit_flows += pv;
    }

    let terminal_flow = projection.final_year() * (1.0 + terminal_growth);
    let terminal_value = terminal_flow / (discount_rate - terminal_growth);
    let discounted_terminal =
        terminal_value / (1.0 + discount_rate).powi(projection.horizon_years() as i32);

    let enterprise_value = pv_explicit_flows + discounted_terminal;
    let equity_value = enterprise_value - snapshot.net_debt();
    let value_per_share = equity_value / snapshot.shares_outstanding();

    Ok(DcfResult {
        discounted_flows,
        pv_explicit_flows,
        terminal_value,
        discounted_terminal,
        enterprise_value,
        equity_value,
        value_per_share,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn snapshot() -> FinancialSnapshot {
        FinancialSnapshot::builder("TEST")
            .base_fcf(100_000.0)
            .shares_outstanding(1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_reference_valuation() {
        // base_fcf = 100_000, growth = 10%, WACC = 12%, terminal = 3%,
        // horizon = 5, net debt = 0, one share.
        let assumptions = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();
        let result = value(&snapshot(), &assumptions).unwrap();

        assert!((result.pv_explicit_flows - 473_800.0).abs() < 50.0);
        assert!((result.discounted_terminal - 1_045_900.0).abs() < 100.0);
        assert!((result.value_per_share - 1_519_700.0).abs() < 150.0);
        assert_relative_eq!(
            result.enterprise_value,
            result.pv_explicit_flows + result.discounted_terminal,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_net_debt_reduces_equity_value() {
        let with_debt = FinancialSnapshot::builder("TEST")
            .base_fcf(100_000.0)
            .shares_outstanding(1.0)
            .net_debt(500_000.0)
            .build()
            .unwrap();
        let assumptions = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();

        let base = value(&snapshot(), &assumptions).unwrap();
        let levered = value(&with_debt, &assumptions).unwrap();

        assert_relative_eq!(
            levered.equity_value,
            base.equity_value - 500_000.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(base.enterprise_value, levered.enterprise_value, epsilon = 1e-9);
    }

    #[test]
    fn test_per_share_divides_by_shares() {
        let many_shares = FinancialSnapshot::builder("TEST")
            .base_fcf(100_000.0)
            .shares_outstanding(1000.0)
            .build()
            .unwrap();
        let assumptions = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();

        let base = value(&snapshot(), &assumptions).unwrap();
        let split = value(&many_shares, &assumptions).unwrap();

        assert_relative_eq!(split.value_per_share, base.value_per_share / 1000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_equity_is_surfaced() {
        // Enterprise value well below net debt: alarming, but legal.
        let drowning = FinancialSnapshot::builder("TEST")
            .base_fcf(100.0)
            .shares_outstanding(1.0)
            .net_debt(1e9)
            .build()
            .unwrap();
        let assumptions = AssumptionSet::new(0.02, 0.12, 0.01, 5).unwrap();

        let result = value(&drowning, &assumptions).unwrap();
        assert!(result.equity_value < 0.0);
        assert!(result.value_per_share < 0.0);
    }

    #[test]
    fn test_single_year_horizon() {
        let assumptions = AssumptionSet::new(0.10, 0.12, 0.03, 1).unwrap();
        let result = value(&snapshot(), &assumptions).unwrap();

        let year1 = 110_000.0;
        let expected_pv = year1 / 1.12;
        assert_relative_eq!(result.pv_explicit_flows, expected_pv, epsilon = 1e-6);

        let terminal = year1 * 1.03 / (0.12 - 0.03) / 1.12;
        assert_relative_eq!(result.discounted_terminal, terminal, epsilon = 1e-6);
    }

    proptest! {
        /// Intrinsic value is strictly decreasing in the discount rate,
        /// holding every other parameter fixed.
        #[test]
        fn prop_value_decreasing_in_discount_rate(
            growth in -0.2f64..0.3,
            terminal in 0.0f64..0.04,
            d_lo in 0.05f64..0.20,
            bump in 0.005f64..0.10,
            horizon in 1u32..15,
        ) {
            let d_hi = d_lo + bump;
            prop_assume!(d_lo > terminal + 1e-6);

            let snapshot = snapshot();
            let lo = AssumptionSet::new(growth, d_lo, terminal, horizon).unwrap();
            let hi = AssumptionSet::new(growth, d_hi, terminal, horizon).unwrap();

            let v_lo = value(&snapshot, &lo).unwrap().value_per_share;
            let v_hi = value(&snapshot, &hi).unwrap().value_per_share;
            prop_assert!(v_hi < v_lo);
        }

        /// The divergence guard rejects every discount == terminal pair
        /// regardless of growth and horizon.
        #[test]
        fn prop_equal_rates_always_rejected(
            rate in -0.05f64..0.30,
            growth in -0.3f64..0.5,
            horizon in 1u32..20,
        ) {
            prop_assert!(AssumptionSet::new(growth, rate, rate, horizon).is_err());
        }
    }
}
