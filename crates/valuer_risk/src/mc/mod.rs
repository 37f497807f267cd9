//! Monte Carlo valuation under parameter uncertainty.
//!
//! Models the three rate assumptions as (optionally truncated) normal
//! distributions, values a sampled assumption set per trial with the
//! shared DCF engine, and summarises the simulated per-share
//! distribution: moments, percentiles, value at risk against the
//! base-case deterministic value, and the probability of a positive
//! equity value.
//!
//! Invalid draws are handled by rejection with a bounded per-trial
//! attempt budget; exhausted trials are excluded and counted rather than
//! patched. Runs are reproducible: per-trial RNG sub-streams make
//! results for a given seed independent of thread scheduling, and an
//! entropy-drawn seed is recorded in the result for replay.

pub mod config;
pub mod distribution;
pub mod error;
pub mod result;
pub mod rng;
pub mod simulator;
pub mod statistics;

pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_TRIALS, MAX_TRIALS};
pub use distribution::ParameterDistribution;
pub use error::SimulationError;
pub use result::{MonteCarloResult, PercentileBand, VarEstimate};
pub use rng::TrialRng;
pub use simulator::{simulate, AssumptionDistributions};
