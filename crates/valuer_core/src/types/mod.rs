//! Shared data types: snapshot, assumptions and the error taxonomy.

pub mod assumptions;
pub mod error;
pub mod snapshot;

pub use assumptions::AssumptionSet;
pub use error::ValuationError;
pub use snapshot::{FinancialSnapshot, FinancialSnapshotBuilder};
