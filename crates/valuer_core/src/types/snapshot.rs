//! Point-in-time company financial snapshot.
//!
//! A [`FinancialSnapshot`] is supplied by an external data-collection
//! collaborator and treated as a fixed fact: the engine never re-fetches
//! or mutates it. Optional trailing metrics feed the relative-valuation
//! methods; the required fields feed the DCF engine.

use super::error::ValuationError;
use serde::{Deserialize, Serialize};

/// Immutable company financial snapshot.
///
/// Construct via [`FinancialSnapshot::builder`]. The builder validates
/// the fields the DCF engine depends on (`base_fcf` and
/// `shares_outstanding` must be positive); optional trailing metrics are
/// accepted as-is and validated by the method that consumes them.
///
/// # Examples
/// ```
/// use valuer_core::types::FinancialSnapshot;
///
/// let snapshot = FinancialSnapshot::builder("ACME")
///     .base_fcf(100_000.0)
///     .shares_outstanding(1.0)
///     .net_debt(0.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(snapshot.ticker(), "ACME");
/// assert!(snapshot.eps().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    ticker: String,
    base_fcf: f64,
    shares_outstanding: f64,
    net_debt: f64,
    eps: Option<f64>,
    ebitda: Option<f64>,
    dividend_per_share: Option<f64>,
    book_value_per_share: Option<f64>,
    beta: Option<f64>,
}

impl FinancialSnapshot {
    /// Creates a new snapshot builder for the given ticker.
    #[inline]
    pub fn builder(ticker: impl Into<String>) -> FinancialSnapshotBuilder {
        FinancialSnapshotBuilder {
            ticker: ticker.into(),
            ..Default::default()
        }
    }

    /// Company identifier.
    #[inline]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Base-year free cash flow (positive).
    #[inline]
    pub fn base_fcf(&self) -> f64 {
        self.base_fcf
    }

    /// Shares outstanding (positive).
    #[inline]
    pub fn shares_outstanding(&self) -> f64 {
        self.shares_outstanding
    }

    /// Net debt; may be zero or negative (net cash).
    #[inline]
    pub fn net_debt(&self) -> f64 {
        self.net_debt
    }

    /// Trailing earnings per share, if known.
    #[inline]
    pub fn eps(&self) -> Option<f64> {
        self.eps
    }

    /// Trailing EBITDA, if known.
    #[inline]
    pub fn ebitda(&self) -> Option<f64> {
        self.ebitda
    }

    /// Trailing dividend per share, if known.
    #[inline]
    pub fn dividend_per_share(&self) -> Option<f64> {
        self.dividend_per_share
    }

    /// Book value per share, if known.
    #[inline]
    pub fn book_value_per_share(&self) -> Option<f64> {
        self.book_value_per_share
    }

    /// Equity beta, if known. Feeds the CAPM leg of the WACC helper.
    #[inline]
    pub fn beta(&self) -> Option<f64> {
        self.beta
    }
}

/// Builder for [`FinancialSnapshot`].
///
/// Validation happens at `build()` so callers can assemble fields in any
/// order. Required: `base_fcf > 0` and `shares_outstanding > 0`.
#[derive(Clone, Debug, Default)]
pub struct FinancialSnapshotBuilder {
    ticker: String,
    base_fcf: Option<f64>,
    shares_outstanding: Option<f64>,
    net_debt: f64,
    eps: Option<f64>,
    ebitda: Option<f64>,
    dividend_per_share: Option<f64>,
    book_value_per_share: Option<f64>,
    beta: Option<f64>,
}

impl FinancialSnapshotBuilder {
    /// Sets the base-year free cash flow.
    #[inline]
    pub fn base_fcf(mut self, fcf: f64) -> Self {
        self.base_fcf = Some(fcf);
        self
    }

    /// Sets the shares outstanding.
    #[inline]
    pub fn shares_outstanding(mut self, shares: f64) -> Self {
        self.shares_outstanding = Some(shares);
        self
    }

    /// Sets net debt (defaults to 0).
    #[inline]
    pub fn net_debt(mut self, net_debt: f64) -> Self {
        self.net_debt = net_debt;
        self
    }

    /// Sets trailing earnings per share.
    #[inline]
    pub fn eps(mut self, eps: f64) -> Self {
        self.eps = Some(eps);
        self
    }

    /// Sets trailing EBITDA.
    #[inline]
    pub fn ebitda(mut self, ebitda: f64) -> Self {
        self.ebitda = Some(ebitda);
        self
    }

    /// Sets trailing dividend per share.
    #[inline]
    pub fn dividend_per_share(mut self, dividend: f64) -> Self {
        self.dividend_per_share = Some(dividend);
        self
    }

    /// Sets book value per share.
    #[inline]
    pub fn book_value_per_share(mut self, book_value: f64) -> Self {
        self.book_value_per_share = Some(book_value);
        self
    }

    /// Sets the equity beta.
    #[inline]
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Builds the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::InvalidInput` if:
    /// - `base_fcf` is unset, non-finite, or not positive
    /// - `shares_outstanding` is unset, non-finite, or not positive
    pub fn build(self) -> Result<FinancialSnapshot, ValuationError> {
        let base_fcf = self
            .base_fcf
            .ok_or_else(|| ValuationError::input("base free cash flow must be provided"))?;
        if !base_fcf.is_finite() || base_fcf <= 0.0 {
            return Err(ValuationError::input(format!(
                "base free cash flow must be positive, got {}",
                base_fcf
            )));
        }

        let shares_outstanding = self
            .shares_outstanding
            .ok_or_else(|| ValuationError::input("shares outstanding must be provided"))?;
        if !shares_outstanding.is_finite() || shares_outstanding <= 0.0 {
            return Err(ValuationError::input(format!(
                "shares outstanding must be positive, got {}",
                shares_outstanding
            )));
        }

        Ok(FinancialSnapshot {
            ticker: self.ticker,
            base_fcf,
            shares_outstanding,
            net_debt: self.net_debt,
            eps: self.eps,
            ebitda: self.ebitda,
            dividend_per_share: self.dividend_per_share,
            book_value_per_share: self.book_value_per_share,
            beta: self.beta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_minimal() {
        let snapshot = FinancialSnapshot::builder("ACME")
            .base_fcf(100_000.0)
            .shares_outstanding(50.0)
            .build()
            .unwrap();

        assert_eq!(snapshot.ticker(), "ACME");
        assert_eq!(snapshot.base_fcf(), 100_000.0);
        assert_eq!(snapshot.shares_outstanding(), 50.0);
        assert_eq!(snapshot.net_debt(), 0.0);
        assert!(snapshot.ebitda().is_none());
    }

    #[test]
    fn test_builder_full() {
        let snapshot = FinancialSnapshot::builder("ACME")
            .base_fcf(100_000.0)
            .shares_outstanding(50.0)
            .net_debt(25_000.0)
            .eps(4.2)
            .ebitda(180_000.0)
            .dividend_per_share(1.5)
            .book_value_per_share(32.0)
            .beta(1.1)
            .build()
            .unwrap();

        assert_eq!(snapshot.eps(), Some(4.2));
        assert_eq!(snapshot.ebitda(), Some(180_000.0));
        assert_eq!(snapshot.dividend_per_share(), Some(1.5));
        assert_eq!(snapshot.book_value_per_share(), Some(32.0));
        assert_eq!(snapshot.beta(), Some(1.1));
        assert_eq!(snapshot.net_debt(), 25_000.0);
    }

    #[test]
    fn test_missing_base_fcf_rejected() {
        let result = FinancialSnapshot::builder("ACME")
            .shares_outstanding(50.0)
            .build();
        assert!(matches!(result, Err(ValuationError::InvalidInput(_))));
    }

    #[test]
    fn test_non_positive_base_fcf_rejected() {
        let result = FinancialSnapshot::builder("ACME")
            .base_fcf(0.0)
            .shares_outstanding(50.0)
            .build();
        assert!(matches!(result, Err(ValuationError::InvalidInput(_))));
    }

    #[test]
    fn test_non_positive_shares_rejected() {
        let result = FinancialSnapshot::builder("ACME")
            .base_fcf(100_000.0)
            .shares_outstanding(-1.0)
            .build();
        assert!(matches!(result, Err(ValuationError::InvalidInput(_))));
    }

    #[test]
    fn test_negative_net_debt_is_net_cash() {
        let snapshot = FinancialSnapshot::builder("ACME")
            .base_fcf(100_000.0)
            .shares_outstanding(50.0)
            .net_debt(-10_000.0)
            .build()
            .unwrap();
        assert_eq!(snapshot.net_debt(), -10_000.0);
    }
}
