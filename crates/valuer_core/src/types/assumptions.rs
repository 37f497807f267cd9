//! Validated valuation assumptions.
//!
//! An [`AssumptionSet`] carries the four parameters the DCF engine needs:
//! growth rate, discount rate (WACC), terminal growth rate and projection
//! horizon. The constructor enforces the convergence invariant
//! `discount_rate > terminal_growth`, so a constructed set is always safe
//! to discount with.

use super::error::ValuationError;
use serde::{Deserialize, Serialize};

/// Validated valuation parameters.
///
/// Immutable once constructed. Derived sets (scenario shocks, sensitivity
/// overrides) go through the same validation as direct construction, so
/// an `AssumptionSet` in hand never diverges the terminal-value formula.
///
/// # Examples
/// ```
/// use valuer_core::types::AssumptionSet;
///
/// let assumptions = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();
/// assert_eq!(assumptions.horizon_years(), 5);
///
/// // discount rate ≤ terminal growth diverges the perpetuity formula
/// assert!(AssumptionSet::new(0.10, 0.03, 0.03, 5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssumptionSet {
    growth: f64,
    discount_rate: f64,
    terminal_growth: f64,
    horizon_years: u32,
}

impl AssumptionSet {
    /// Creates a validated assumption set.
    ///
    /// # Arguments
    ///
    /// * `growth` - Annual free-cash-flow growth rate (decimal)
    /// * `discount_rate` - Discount rate / WACC (decimal)
    /// * `terminal_growth` - Perpetuity growth rate (decimal)
    /// * `horizon_years` - Explicit projection horizon in years (≥ 1)
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::InvalidAssumption` if:
    /// - any rate is non-finite
    /// - `discount_rate <= terminal_growth` (terminal value diverges)
    /// - `horizon_years < 1`
    pub fn new(
        growth: f64,
        discount_rate: f64,
        terminal_growth: f64,
        horizon_years: u32,
    ) -> Result<Self, ValuationError> {
        if !growth.is_finite() || !discount_rate.is_finite() || !terminal_growth.is_finite() {
            return Err(ValuationError::assumption(
                "growth, discount and terminal rates must be finite",
            ));
        }
        if discount_rate <= terminal_growth {
            return Err(ValuationError::assumption(format!(
                "discount rate ({:.4}) must exceed terminal growth ({:.4})",
                discount_rate, terminal_growth
            )));
        }
        if horizon_years < 1 {
            return Err(ValuationError::assumption(
                "projection horizon must be at least 1 year",
            ));
        }

        Ok(Self {
            growth,
            discount_rate,
            terminal_growth,
            horizon_years,
        })
    }

    /// Annual free-cash-flow growth rate.
    #[inline]
    pub fn growth(&self) -> f64 {
        self.growth
    }

    /// Discount rate (WACC).
    #[inline]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Terminal (perpetuity) growth rate.
    #[inline]
    pub fn terminal_growth(&self) -> f64 {
        self.terminal_growth
    }

    /// Explicit projection horizon in years.
    #[inline]
    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    /// Returns a copy with the discount rate and terminal growth replaced,
    /// holding growth and horizon fixed.
    ///
    /// Used by the sensitivity grid; the derived pair goes through full
    /// validation, so divergent combinations are rejected here and marked
    /// undefined by the caller.
    pub fn with_rates(
        &self,
        discount_rate: f64,
        terminal_growth: f64,
    ) -> Result<Self, ValuationError> {
        Self::new(self.growth, discount_rate, terminal_growth, self.horizon_years)
    }

    /// Returns a copy with all three rates replaced, holding the horizon
    /// fixed. Used by scenario shocks.
    pub fn with_parameters(
        &self,
        growth: f64,
        discount_rate: f64,
        terminal_growth: f64,
    ) -> Result<Self, ValuationError> {
        Self::new(growth, discount_rate, terminal_growth, self.horizon_years)
    }
}
