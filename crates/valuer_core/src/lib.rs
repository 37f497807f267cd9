//! # valuer_core: Foundation for the Equity Valuation Workspace
//!
//! ## Layer 1 Role
//!
//! valuer_core is the bottom layer of the 3-layer workspace, providing:
//! - Validated input types: `FinancialSnapshot`, `AssumptionSet` (`types`)
//! - The error taxonomy: `ValuationError` (`types::error`)
//! - The deterministic DCF primitive: `project_cash_flows`, `value` (`dcf`)
//! - The WACC helper: `calculate_wacc` (`dcf::wacc`)
//!
//! ## Single-Primitive Principle
//!
//! Every higher layer (the valuation suite, the sensitivity grid, the
//! scenario runner and the Monte Carlo engine) calls `dcf::value` rather
//! than re-implementing discounting, so the four analysis modes cannot
//! drift apart semantically.
//!
//! ## Purity
//!
//! Nothing in this crate performs I/O or holds mutable state. `value` is
//! a pure function of its inputs and safe to call concurrently from any
//! number of threads.
//!
//! ## Usage Example
//!
//! ```rust
//! use valuer_core::dcf;
//! use valuer_core::types::{AssumptionSet, FinancialSnapshot};
//!
//! let snapshot = FinancialSnapshot::builder("ACME")
//!     .base_fcf(100_000.0)
//!     .shares_outstanding(40_000.0)
//!     .net_debt(250_000.0)
//!     .build()
//!     .unwrap();
//!
//! let assumptions = AssumptionSet::new(0.08, 0.11, 0.025, 5).unwrap();
//! let result = dcf::value(&snapshot, &assumptions).unwrap();
//!
//! println!("{}: {:.2} per share", snapshot.ticker(), result.value_per_share);
//! ```

#![warn(missing_docs)]

pub mod dcf;
pub mod types;
