//! Error types for structured error handling.
//!
//! This module provides [`ValuationError`], the error taxonomy shared by
//! every deterministic valuation call:
//! - `InvalidAssumption`: an assumption set violates a model precondition
//! - `InvalidInput`: a required snapshot field is missing or non-positive
//! - `InvalidParameter`: a named configuration parameter is out of range

use thiserror::Error;

/// Categorised valuation errors.
///
/// A single call either succeeds or fails with exactly one of these
/// variants; callers that run many valuations (the suite, the Monte Carlo
/// engine) isolate per-call failures and report them alongside successes.
///
/// # Examples
/// ```
/// use valuer_core::types::ValuationError;
///
/// let err = ValuationError::InvalidAssumption(
///     "discount rate must exceed terminal growth".to_string(),
/// );
/// assert!(format!("{}", err).starts_with("Invalid assumption"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum ValuationError {
    /// An assumption set violates a model precondition
    /// (e.g. discount rate ≤ terminal growth, horizon < 1).
    #[error("Invalid assumption: {0}")]
    InvalidAssumption(String),

    /// A required snapshot field is missing or non-positive
    /// (e.g. base free cash flow, shares outstanding).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A named configuration parameter is out of its valid domain
    /// (e.g. trial count < 1).
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Description of the invalid value.
        value: String,
    },
}

impl ValuationError {
    /// Shorthand for an `InvalidAssumption` error.
    pub fn assumption(msg: impl Into<String>) -> Self {
        Self::InvalidAssumption(msg.into())
    }

    /// Shorthand for an `InvalidInput` error.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Shorthand for an `InvalidParameter` error.
    pub fn parameter(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value: value.into(),
        }
    }
}
