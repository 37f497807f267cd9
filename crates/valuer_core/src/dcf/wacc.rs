//! Weighted average cost of capital.
//!
//! Small helper for analysts who derive the discount rate from capital
//! structure rather than supplying it directly: CAPM cost of equity plus
//! after-tax cost of debt, weighted by the debt/equity ratio.

use crate::types::ValuationError;
use serde::{Deserialize, Serialize};

/// Inputs to the WACC calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaccInputs {
    /// Risk-free rate (e.g. government bond yield).
    pub risk_free_rate: f64,
    /// Market risk premium over the risk-free rate.
    pub market_risk_premium: f64,
    /// Equity beta.
    pub beta: f64,
    /// Corporate tax rate.
    pub tax_rate: f64,
    /// Debt-to-equity ratio (0 for an unlevered firm).
    pub debt_equity_ratio: f64,
    /// Pre-tax cost of debt.
    pub cost_of_debt: f64,
}

impl Default for WaccInputs {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.04,
            market_risk_premium: 0.06,
            beta: 1.0,
            tax_rate: 0.25,
            debt_equity_ratio: 0.0,
            cost_of_debt: 0.05,
        }
    }
}

/// Computes the weighted average cost of capital.
///
/// Cost of equity via CAPM (`rf + β × mrp`); cost of debt after tax;
/// weights derived from the debt/equity ratio.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameter` if the debt/equity ratio
/// is negative or any input is non-finite.
///
/// # Examples
/// ```
/// use valuer_core::dcf::{calculate_wacc, WaccInputs};
///
/// let wacc = calculate_wacc(&WaccInputs {
///     risk_free_rate: 0.04,
///     market_risk_premium: 0.06,
///     beta: 1.2,
///     ..WaccInputs::default()
/// })
/// .unwrap();
///
/// // Unlevered: WACC equals cost of equity = 4% + 1.2 × 6%
/// assert!((wacc - 0.112).abs() < 1e-12);
/// ```
pub fn calculate_wacc(inputs: &WaccInputs) -> Result<f64, ValuationError> {
    let finite = inputs.risk_free_rate.is_finite()
        && inputs.market_risk_premium.is_finite()
        && inputs.beta.is_finite()
        && inputs.tax_rate.is_finite()
        && inputs.debt_equity_ratio.is_finite()
        && inputs.cost_of_debt.is_finite();
    if !finite {
        return Err(ValuationError::parameter(
            "wacc_inputs",
            "all inputs must be finite",
        ));
    }
    if inputs.debt_equity_ratio < 0.0 {
        return Err(ValuationError::parameter(
            "debt_equity_ratio",
            format!("must be non-negative, got {}", inputs.debt_equity_ratio),
        ));
    }

    let cost_of_equity = inputs.risk_free_rate + inputs.beta * inputs.market_risk_premium;

    let weight_equity = 1.0 / (1.0 + inputs.debt_equity_ratio);
    let weight_debt = inputs.debt_equity_ratio / (1.0 + inputs.debt_equity_ratio);
    let after_tax_cost_of_debt = inputs.cost_of_debt * (1.0 - inputs.tax_rate);

    Ok(weight_equity * cost_of_equity + weight_debt * after_tax_cost_of_debt)
}
