//! Deterministic DCF engine: projection, valuation and WACC helper.
//!
//! [`value`] is the single discounting primitive shared by every other
//! component of the workspace (suite, grid, scenarios, Monte Carlo).

pub mod engine;
pub mod projection;
pub mod wacc;

pub use engine::{value, value_projection, DcfResult};
pub use projection::{project_cash_flows, CashFlowProjection};
pub use wacc::{calculate_wacc, WaccInputs};
