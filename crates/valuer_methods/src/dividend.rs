//! Gordon growth dividend discount model.

use valuer_core::types::{AssumptionSet, FinancialSnapshot, ValuationError};

/// Dividend-discount value per share (Gordon growth model).
///
/// `dividend × (1 + growth) / (discount_rate − growth)`, where growth
/// and discount rate come from the assumption set. The same divergence
/// guard as the DCF terminal value applies: the discount rate must
/// exceed the growth rate or the perpetuity diverges.
///
/// # Errors
///
/// - `ValuationError::InvalidInput` if the snapshot carries no dividend
/// - `ValuationError::InvalidAssumption` if `discount_rate <= growth`
///
/// # Examples
/// ```
/// use valuer_core::types::{AssumptionSet, FinancialSnapshot};
/// use valuer_methods::dividend_discount_value;
///
/// let snapshot = FinancialSnapshot::builder("ACME")
///     .base_fcf(100_000.0)
///     .shares_outstanding(10_000.0)
///     .dividend_per_share(2.0)
///     .build()
///     .unwrap();
/// let assumptions = AssumptionSet::new(0.03, 0.10, 0.02, 5).unwrap();
///
/// let value = dividend_discount_value(&snapshot, &assumptions).unwrap();
/// // 2.0 × 1.03 / (0.10 − 0.03)
/// assert!((value - 29.428571428571427).abs() < 1e-9);
/// ```
pub fn dividend_discount_value(
    snapshot: &FinancialSnapshot,
    assumptions: &AssumptionSet,
) -> Result<f64, ValuationError> {
    let dividend = snapshot.dividend_per_share().ok_or_else(|| {
        ValuationError::input("dividend per share is required for the dividend discount model")
    })?;

    let growth = assumptions.growth();
    let discount = assumptions.discount_rate();
    if discount <= growth {
        return Err(ValuationError::assumption(format!(
            "discount rate ({:.4}) must exceed dividend growth ({:.4})",
            discount, growth
        )));
    }

    Ok(dividend * (1.0 + growth) / (discount - growth))
}
