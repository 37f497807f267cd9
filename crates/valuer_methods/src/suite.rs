//! Multi-method valuation suite with consensus and dispersion.
//!
//! Runs every valuation method against one snapshot and assumption set,
//! collecting per-method outcomes under a partial-result policy: a
//! single method's failure never aborts the others.

use crate::asset::asset_based_value;
use crate::dividend::dividend_discount_value;
use crate::multiples::{earnings_multiple_value, ebitda_multiple_value, SectorMultiples};
use serde::{Deserialize, Serialize};
use valuer_core::dcf;
use valuer_core::types::{AssumptionSet, FinancialSnapshot, ValuationError};

/// Valuation methodologies the suite runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValuationMethod {
    /// Discounted cash flow (per-share intrinsic value).
    Dcf,
    /// Trailing EPS × peer P/E.
    EarningsMultiple,
    /// EBITDA × peer EV/EBITDA, net-debt adjusted.
    EbitdaMultiple,
    /// Gordon growth dividend discount.
    DividendDiscount,
    /// Book value per share.
    AssetBased,
}

impl ValuationMethod {
    /// Human-readable name for reporting collaborators.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dcf => "DCF",
            Self::EarningsMultiple => "Earnings Multiple",
            Self::EbitdaMultiple => "EBITDA Multiple",
            Self::DividendDiscount => "Dividend Discount",
            Self::AssetBased => "Asset Based",
        }
    }
}

/// Outcome of one valuation method: a per-share value or an isolated
/// failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodOutcome {
    /// Which method produced this outcome.
    pub method: ValuationMethod,
    /// Per-share value, or the error that prevented it.
    pub outcome: Result<f64, ValuationError>,
}

/// Suite configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Peer multiples for the relative methods.
    pub multiples: SectorMultiples,
    /// Relative spread above which the methods are flagged as dispersed:
    /// `(max − min) / |median| > threshold`.
    pub dispersion_threshold: f64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            multiples: SectorMultiples::default(),
            dispersion_threshold: 0.5,
        }
    }
}

/// Combined result of all valuation methods.
///
/// `consensus` is the median of the successful per-share values (absent
/// when every method failed). `dispersion` is the relative spread of the
/// successful values; `dispersed` flags it against the configured
/// threshold, signalling valuation uncertainty independent of Monte
/// Carlo parameter risk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultiMethodResult {
    /// Per-method outcomes, in the order the methods ran.
    pub methods: Vec<MethodOutcome>,
    /// Median of the successful values.
    pub consensus: Option<f64>,
    /// `(max − min) / |median|` over the successful values.
    pub dispersion: Option<f64>,
    /// True when `dispersion` exceeds the configured threshold.
    pub dispersed: bool,
}

impl MultiMethodResult {
    /// Successful per-share values, in method order.
    pub fn successful_values(&self) -> Vec<f64> {
        self.methods
            .iter()
            .filter_map(|m| m.outcome.as_ref().ok().copied())
            .collect()
    }

    /// Outcome for one method, if it ran.
    pub fn method(&self, method: ValuationMethod) -> Option<&MethodOutcome> {
        self.methods.iter().find(|m| m.method == method)
    }

    /// Count of methods that failed.
    pub fn failure_count(&self) -> usize {
        self.methods.iter().filter(|m| m.outcome.is_err()).count()
    }
}

/// Runs every valuation method and combines the outcomes.
///
/// Failures are collected per method and reported alongside successes;
/// the suite itself never fails, since the snapshot and assumption set
/// are already validated types.
///
/// # Examples
/// ```
/// use valuer_core::types::{AssumptionSet, FinancialSnapshot};
/// use valuer_methods::{comprehensive_valuation, SuiteConfig, ValuationMethod};
///
/// let snapshot = FinancialSnapshot::builder("ACME")
///     .base_fcf(100_000.0)
///     .shares_outstanding(10_000.0)
///     .eps(4.0)
///     .build()
///     .unwrap();
/// let assumptions = AssumptionSet::new(0.08, 0.11, 0.025, 5).unwrap();
///
/// let result = comprehensive_valuation(&snapshot, &assumptions, &SuiteConfig::default());
/// assert!(result.method(ValuationMethod::Dcf).unwrap().outcome.is_ok());
/// // No EBITDA, dividend or book value on the snapshot: those methods
/// // fail in isolation and the rest still report.
/// assert_eq!(result.failure_count(), 3);
/// assert!(result.consensus.is_some());
/// ```
pub fn comprehensive_valuation(
    snapshot: &FinancialSnapshot,
    assumptions: &AssumptionSet,
    config: &SuiteConfig,
) -> MultiMethodResult {
    let methods = vec![
        MethodOutcome {
            method: ValuationMethod::Dcf,
            outcome: dcf::value(snapshot, assumptions).map(|r| r.value_per_share),
        },
        MethodOutcome {
            method: ValuationMethod::EarningsMultiple,
            outcome: earnings_multiple_value(snapshot, &config.multiples),
        },
        MethodOutcome {
            method: ValuationMethod::EbitdaMultiple,
            outcome: ebitda_multiple_value(snapshot, &config.multiples),
        },
        MethodOutcome {
            method: ValuationMethod::DividendDiscount,
            outcome: dividend_discount_value(snapshot, assumptions),
        },
        MethodOutcome {
            method: ValuationMethod::AssetBased,
            outcome: asset_based_value(snapshot),
        },
    ];

    let mut values: Vec<f64> = methods
        .iter()
        .filter_map(|m| m.outcome.as_ref().ok().copied())
        .collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let consensus = median_sorted(&values);
    let dispersion = match (values.first(), values.last(), consensus) {
        (Some(&min), Some(&max), Some(median)) if median != 0.0 => {
            Some((max - min) / median.abs())
        }
        _ => None,
    };
    let dispersed = dispersion.is_some_and(|d| d > config.dispersion_threshold);

    MultiMethodResult {
        methods,
        consensus,
        dispersion,
        dispersed,
    }
}

/// Median of an already sorted slice.
fn median_sorted(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
