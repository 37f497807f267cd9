//! Risk and uncertainty analysis over the deterministic valuation core.
//!
//! Three complementary views of valuation risk, all built on the same
//! DCF engine from `valuer_core`:
//!
//! - [`sensitivity`]: deterministic grid sweeps over (discount rate,
//!   terminal growth) pairs, with divergent pairs marked rather than
//!   erroring.
//! - [`scenarios`]: named coordinated shocks (bear/base/bull, stress
//!   presets) applied to a base assumption set, with per-scenario
//!   failure isolation.
//! - [`mc`]: Monte Carlo simulation over parameter uncertainty, with
//!   rejection sampling, reproducible seeded runs, percentile and
//!   value-at-risk summaries.
//!
//! # Examples
//!
//! ```rust
//! use valuer_core::types::{AssumptionSet, FinancialSnapshot};
//! use valuer_risk::scenarios::{bear_base_bull, run_scenarios};
//!
//! let snapshot = FinancialSnapshot::builder("ACME")
//!     .base_fcf(100_000.0)
//!     .shares_outstanding(1.0)
//!     .build()
//!     .unwrap();
//! let base = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();
//!
//! let set = run_scenarios(&snapshot, &base, &bear_base_bull());
//! assert!(set.value_range().unwrap().spread > 0.0);
//! ```

#![warn(missing_docs)]

pub mod mc;
pub mod scenarios;
pub mod sensitivity;

pub use mc::{
    simulate, AssumptionDistributions, MonteCarloResult, ParameterDistribution, SimulationConfig,
    SimulationError,
};
pub use scenarios::{run_scenarios, ScenarioSet, ScenarioShock};
pub use sensitivity::{generate_grid, linear_range, SensitivityGrid};
