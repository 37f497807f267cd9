//! # valuer_methods: Multi-Method Valuation Suite (Layer 2)
//!
//! Composes the DCF primitive from `valuer_core` with relative-valuation
//! formulas into a multi-method consensus:
//! - DCF per-share value (`valuer_core::dcf`)
//! - Earnings multiple: trailing EPS × peer P/E (`multiples`)
//! - EBITDA multiple: EBITDA × peer EV/EBITDA, net-debt adjusted (`multiples`)
//! - Dividend discount (Gordon growth) (`dividend`)
//! - Asset based: book value per share (`asset`)
//!
//! ## Partial-Result Policy
//!
//! [`comprehensive_valuation`] never aborts on a single method failure:
//! each method's error is recorded next to the successes, the consensus
//! is the median of whatever succeeded, and a dispersion flag marks runs
//! where the methods disagree beyond a configurable relative spread.
//!
//! ## Usage Example
//!
//! ```rust
//! use valuer_core::types::{AssumptionSet, FinancialSnapshot};
//! use valuer_methods::{comprehensive_valuation, SuiteConfig};
//!
//! let snapshot = FinancialSnapshot::builder("ACME")
//!     .base_fcf(100_000.0)
//!     .shares_outstanding(10_000.0)
//!     .eps(4.0)
//!     .ebitda(120_000.0)
//!     .build()
//!     .unwrap();
//! let assumptions = AssumptionSet::new(0.08, 0.11, 0.025, 5).unwrap();
//!
//! let result = comprehensive_valuation(&snapshot, &assumptions, &SuiteConfig::default());
//! if let Some(consensus) = result.consensus {
//!     println!("consensus: {:.2} per share ({} failures)", consensus, result.failure_count());
//! }
//! ```

#![warn(missing_docs)]

pub mod asset;
pub mod dividend;
pub mod multiples;
pub mod suite;

pub use asset::asset_based_value;
pub use dividend::dividend_discount_value;
pub use multiples::{earnings_multiple_value, ebitda_multiple_value, SectorMultiples};
pub use suite::{
    comprehensive_valuation, MethodOutcome, MultiMethodResult, SuiteConfig, ValuationMethod,
};
