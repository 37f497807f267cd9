//! Parameter distributions for Monte Carlo sampling.

use serde::{Deserialize, Serialize};

use super::error::SimulationError;

/// A normal distribution over one valuation parameter, optionally
/// truncated to a plausibility interval.
///
/// Truncation is enforced by rejection at the sampling site: a draw
/// outside the bounds is discarded and redrawn, never clamped. A zero
/// standard deviation degenerates to a point mass at the mean, which is
/// returned exactly (no floating-point noise), so a run with all-zero
/// spreads reproduces the deterministic valuation bit for bit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterDistribution {
    mean: f64,
    std_dev: f64,
    bounds: Option<(f64, f64)>,
}

impl ParameterDistribution {
    /// Creates an unbounded normal distribution.
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`] if either argument is
    /// non-finite or the standard deviation is negative.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, SimulationError> {
        if !mean.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "mean",
                value: format!("{} is not finite", mean),
            });
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "std_dev",
                value: format!("{} must be finite and non-negative", std_dev),
            });
        }
        Ok(Self {
            mean,
            std_dev,
            bounds: None,
        })
    }

    /// Adds truncation bounds `[lower, upper]`.
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`] if the bounds are
    /// non-finite or inverted.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Result<Self, SimulationError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(SimulationError::InvalidParameter {
                name: "bounds",
                value: format!("[{}, {}] is not a valid interval", lower, upper),
            });
        }
        self.bounds = Some((lower, upper));
        Ok(self)
    }

    /// Growth-rate distribution with the conventional `[-0.5, 1.0]`
    /// plausibility bounds.
    pub fn growth(mean: f64, std_dev: f64) -> Result<Self, SimulationError> {
        Self::new(mean, std_dev)?.with_bounds(-0.5, 1.0)
    }

    /// Discount-rate distribution bounded to `[0.01, 0.5]`.
    pub fn discount_rate(mean: f64, std_dev: f64) -> Result<Self, SimulationError> {
        Self::new(mean, std_dev)?.with_bounds(0.01, 0.5)
    }

    /// Terminal-growth distribution bounded to `[-0.1, 0.15]`.
    pub fn terminal_growth(mean: f64, std_dev: f64) -> Result<Self, SimulationError> {
        Self::new(mean, std_dev)?.with_bounds(-0.1, 0.15)
    }

    /// Distribution mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Distribution standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Truncation bounds, if any.
    #[inline]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    /// Whether the distribution is a point mass at the mean.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }

    /// Whether a draw lies within the truncation bounds.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        match self.bounds {
            Some((lower, upper)) => value >= lower && value <= upper,
            None => value.is_finite(),
        }
    }

    /// Maps a standard-normal draw into this distribution.
    ///
    /// Truncation is NOT applied here; the simulator rejects
    /// out-of-bounds draws via [`contains`](Self::contains).
    #[inline]
    pub fn transform(&self, z: f64) -> f64 {
        if self.is_degenerate() {
            self.mean
        } else {
            self.mean + self.std_dev * z
        }
    }
}
