//! Asset-based valuation.

use valuer_core::types::{FinancialSnapshot, ValuationError};

/// Asset-based value per share.
///
/// Uses book value per share as a stand-in for a liquidation estimate;
/// a proper liquidation analysis needs balance-sheet detail the snapshot
/// does not carry.
///
/// # Errors
///
/// Returns `ValuationError::InvalidInput` if the snapshot carries no
/// book value per share.
pub fn asset_based_value(snapshot: &FinancialSnapshot) -> Result<f64, ValuationError> {
    snapshot.book_value_per_share().ok_or_else(|| {
        ValuationError::input("book value per share is required for asset-based valuation")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_value_passthrough() {
        let snapshot = FinancialSnapshot::builder("TEST")
            .base_fcf(100_000.0)
            .shares_outstanding(10_000.0)
            .book_value_per_share(32.5)
            .build()
            .unwrap();
        assert_eq!(asset_based_value(&snapshot).unwrap(), 32.5);
    }

    #[test]
    fn test_missing_book_value() {
        let snapshot = FinancialSnapshot::builder("TEST")
            .base_fcf(100_000.0)
            .shares_outstanding(10_000.0)
            .build()
            .unwrap();
        assert!(matches!(
            asset_based_value(&snapshot),
            Err(ValuationError::InvalidInput(_))
        ));
    }
}
