//! Deterministic sensitivity-grid sweeps.
//!
//! Sweeps the Cartesian product of a discount-rate range and a
//! terminal-growth range, calling the DCF engine once per pair. The grid
//! is total over its input ranges: divergent pairs become explicit
//! [`SensitivityCell::Undefined`] cells rather than errors.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use valuer_core::dcf::{self, DcfResult};
use valuer_core::types::{AssumptionSet, FinancialSnapshot};

/// One grid cell: a valuation, or an explicit marker for a divergent
/// (discount ≤ terminal growth) pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SensitivityCell {
    /// Valid pair; the DCF result for the derived assumption set.
    Value(DcfResult),
    /// Divergent pair; the terminal-value formula is undefined here.
    Undefined,
}

impl SensitivityCell {
    /// Per-share value, if the cell is defined.
    pub fn value_per_share(&self) -> Option<f64> {
        match self {
            Self::Value(result) => Some(result.value_per_share),
            Self::Undefined => None,
        }
    }
}

/// Two-dimensional sensitivity grid over (discount rate, terminal growth).
///
/// Rows follow the discount-rate axis, columns the terminal-growth axis,
/// both in the order the ranges were supplied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensitivityGrid {
    discount_rates: Vec<f64>,
    terminal_growths: Vec<f64>,
    cells: Vec<Vec<SensitivityCell>>,
}

impl SensitivityGrid {
    /// Discount-rate axis (rows).
    #[inline]
    pub fn discount_rates(&self) -> &[f64] {
        &self.discount_rates
    }

    /// Terminal-growth axis (columns).
    #[inline]
    pub fn terminal_growths(&self) -> &[f64] {
        &self.terminal_growths
    }

    /// Cell at (row, column), if in range.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<&SensitivityCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// All rows, discount-rate order.
    #[inline]
    pub fn rows(&self) -> &[Vec<SensitivityCell>] {
        &self.cells
    }

    /// Count of undefined (divergent) cells.
    pub fn undefined_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| matches!(c, SensitivityCell::Undefined))
            .count()
    }
}

/// Sweeps the full Cartesian product of the two ranges.
///
/// Each pair derives an assumption set from `base` with the discount
/// rate and terminal growth overridden (growth and horizon held fixed)
/// and values it with the shared DCF engine. Rows are computed in
/// parallel; the result is deterministic and order-independent.
///
/// # Examples
/// ```
/// use valuer_core::types::{AssumptionSet, FinancialSnapshot};
/// use valuer_risk::sensitivity::generate_grid;
///
/// let snapshot = FinancialSnapshot::builder("ACME")
///     .base_fcf(100_000.0)
///     .shares_outstanding(1.0)
///     .build()
///     .unwrap();
/// let base = AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap();
///
/// let grid = generate_grid(&snapshot, &base, &[0.10, 0.12], &[0.02, 0.03]);
/// assert_eq!(grid.discount_rates().len(), 2);
/// assert!(grid.cell(0, 0).unwrap().value_per_share().is_some());
/// ```
pub fn generate_grid(
    snapshot: &FinancialSnapshot,
    base: &AssumptionSet,
    discount_range: &[f64],
    terminal_range: &[f64],
) -> SensitivityGrid {
    let cells: Vec<Vec<SensitivityCell>> = discount_range
        .par_iter()
        .map(|&discount| {
            terminal_range
                .iter()
                .map(|&terminal| match base.with_rates(discount, terminal) {
                    Ok(derived) => match dcf::value(snapshot, &derived) {
                        Ok(result) => SensitivityCell::Value(result),
                        Err(_) => SensitivityCell::Undefined,
                    },
                    Err(_) => SensitivityCell::Undefined,
                })
                .collect()
        })
        .collect();

    SensitivityGrid {
        discount_rates: discount_range.to_vec(),
        terminal_growths: terminal_range.to_vec(),
        cells,
    }
}

/// Evenly spaced inclusive range with `steps` points.
///
/// Convenience for callers assembling grid axes; `steps` of 1 yields
/// just `start`.
pub fn linear_range(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return Vec::new();
    }
    if steps == 1 {
        return vec![start];
    }
    let step = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn snapshot() -> FinancialSnapshot {
        FinancialSnapshot::builder("TEST")
            .base_fcf(100_000.0)
            .shares_outstanding(1.0)
            .build()
            .unwrap()
    }

    fn base() -> AssumptionSet {
        AssumptionSet::new(0.10, 0.12, 0.03, 5).unwrap()
    }

    #[test]
    fn test_grid_dimensions() {
        let grid = generate_grid(
            &snapshot(),
            &base(),
            &[0.08, 0.10, 0.12],
            &[0.01, 0.02, 0.03, 0.04],
        );
        assert_eq!(grid.discount_rates().len(), 3);
        assert_eq!(grid.terminal_growths().len(), 4);
        assert_eq!(grid.rows().len(), 3);
        assert_eq!(grid.rows()[0].len(), 4);
    }

    #[test]
    fn test_divergent_cells_are_undefined() {
        // discount 0.02 ≤ every terminal in the range: a whole row of
        // undefined cells, no error.
        let grid = generate_grid(&snapshot(), &base(), &[0.02, 0.12], &[0.02, 0.03]);
        assert_eq!(grid.cell(0, 0), Some(&SensitivityCell::Undefined));
        assert_eq!(grid.cell(0, 1), Some(&SensitivityCell::Undefined));
        assert!(grid.cell(1, 0).unwrap().value_per_share().is_some());
        assert_eq!(grid.undefined_count(), 2);
    }

    #[test]
    fn test_equal_rates_cell_undefined() {
        let grid = generate_grid(&snapshot(), &base(), &[0.03], &[0.03]);
        assert_eq!(grid.cell(0, 0), Some(&SensitivityCell::Undefined));
    }

    #[test]
    fn test_cell_matches_direct_engine_call() {
        let grid = generate_grid(&snapshot(), &base(), &[0.11, 0.13], &[0.02, 0.035]);

        for (i, &d) in grid.discount_rates().iter().enumerate() {
            for (j, &g) in grid.terminal_growths().iter().enumerate() {
                let derived = base().with_rates(d, g).unwrap();
                let direct = dcf::value(&snapshot(), &derived).unwrap();
                match grid.cell(i, j).unwrap() {
                    SensitivityCell::Value(cell) => {
                        assert_relative_eq!(
                            cell.value_per_share,
                            direct.value_per_share,
                            epsilon = 1e-12
                        );
                    }
                    SensitivityCell::Undefined => panic!("cell ({}, {}) should be defined", i, j),
                }
            }
        }
    }

    #[test]
    fn test_linear_range() {
        let range = linear_range(0.08, 0.16, 5);
        assert_eq!(range.len(), 5);
        assert_relative_eq!(range[0], 0.08, epsilon = 1e-12);
        assert_relative_eq!(range[2], 0.12, epsilon = 1e-12);
        assert_relative_eq!(range[4], 0.16, epsilon = 1e-12);

        assert!(linear_range(0.0, 1.0, 0).is_empty());
        assert_eq!(linear_range(0.5, 1.0, 1), vec![0.5]);
    }

    proptest! {
        /// Every valid (non-divergent) pair produces the same value as a
        /// direct engine call; every divergent pair is undefined.
        #[test]
        fn prop_grid_agrees_with_engine(
            discount in 0.02f64..0.25,
            terminal in -0.02f64..0.06,
        ) {
            let grid = generate_grid(&snapshot(), &base(), &[discount], &[terminal]);
            let cell = grid.cell(0, 0).unwrap();

            match base().with_rates(discount, terminal) {
                Ok(derived) => {
                    let direct = dcf::value(&snapshot(), &derived).unwrap();
                    prop_assert_eq!(cell.value_per_share(), Some(direct.value_per_share));
                }
                Err(_) => prop_assert_eq!(cell, &SensitivityCell::Undefined),
            }
        }
    }
}
