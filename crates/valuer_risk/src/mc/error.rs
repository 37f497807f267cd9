//! Error types for the Monte Carlo simulation engine.

use thiserror::Error;
use valuer_core::types::ValuationError;

/// Errors from Monte Carlo configuration and simulation.
///
/// Per-trial sampling failures are not errors at this level: an
/// exhausted trial is excluded and counted in the result. These variants
/// cover the failures that abort the whole simulation call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Trial count outside `[1, MAX_TRIALS]`.
    #[error("Invalid trial count {0}: must be in range [1, 10_000_000]")]
    InvalidTrialCount(usize),

    /// A named configuration parameter is out of its valid domain.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Every trial was excluded; the distributions place essentially no
    /// mass in the valid region.
    #[error("All {excluded} trials were excluded; check the sampling distributions")]
    AllTrialsExcluded {
        /// Number of excluded trials.
        excluded: usize,
    },

    /// The base-case deterministic valuation failed (mean parameters are
    /// themselves invalid). Fatal to the whole simulation call.
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}
