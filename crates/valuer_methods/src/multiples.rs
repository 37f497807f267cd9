//! Relative valuation via peer multiples.

use serde::{Deserialize, Serialize};
use valuer_core::types::{FinancialSnapshot, ValuationError};

/// Peer or sector multiples used by the relative methods.
///
/// Supplied by configuration; the defaults mirror broad-market
/// long-run averages and are only a starting point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectorMultiples {
    /// Peer price-to-earnings ratio.
    pub pe_ratio: f64,
    /// Peer enterprise-value-to-EBITDA ratio.
    pub ev_ebitda: f64,
}

impl Default for SectorMultiples {
    fn default() -> Self {
        Self {
            pe_ratio: 15.0,
            ev_ebitda: 10.0,
        }
    }
}

/// Earnings-multiple value per share: trailing EPS × peer P/E.
///
/// # Errors
///
/// Returns `ValuationError::InvalidInput` if the snapshot carries no
/// trailing EPS, or `InvalidParameter` if the P/E multiple is not
/// positive.
pub fn earnings_multiple_value(
    snapshot: &FinancialSnapshot,
    multiples: &SectorMultiples,
) -> Result<f64, ValuationError> {
    if !(multiples.pe_ratio > 0.0) {
        return Err(ValuationError::parameter(
            "pe_ratio",
            format!("must be positive, got {}", multiples.pe_ratio),
        ));
    }
    let eps = snapshot
        .eps()
        .ok_or_else(|| ValuationError::input("trailing EPS is required for the earnings multiple"))?;
    Ok(eps * multiples.pe_ratio)
}

/// EBITDA-multiple value per share.
///
/// Enterprise value = EBITDA × peer EV/EBITDA; equity value subtracts
/// net debt; per-share divides by shares outstanding.
///
/// # Errors
///
/// Returns `ValuationError::InvalidInput` if the snapshot carries no
/// trailing EBITDA, or `InvalidParameter` if the EV/EBITDA multiple is
/// not positive.
pub fn ebitda_multiple_value(
    snapshot: &FinancialSnapshot,
    multiples: &SectorMultiples,
) -> Result<f64, ValuationError> {
    if !(multiples.ev_ebitda > 0.0) {
        return Err(ValuationError::parameter(
            "ev_ebitda",
            format!("must be positive, got {}", multiples.ev_ebitda),
        ));
    }
    let ebitda = snapshot.ebitda().ok_or_else(|| {
        ValuationError::input("trailing EBITDA is required for the EBITDA multiple")
    })?;

    let enterprise_value = ebitda * multiples.ev_ebitda;
    let equity_value = enterprise_value - snapshot.net_debt();
    Ok(equity_value / snapshot.shares_outstanding())
}
