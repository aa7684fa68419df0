//! density::matrix — per-draw log-densities evaluated on a shared grid.
//!
//! Purpose
//! -------
//! Hold the M × G matrix written by the sampler (row m = log-density of the
//! mixture drawn at iteration m, evaluated at each of the G grid points) and
//! enforce the shape guarantees the aggregator relies on.
//!
//! Invariants & assumptions
//! ------------------------
//! - M ≥ 1 and G ≥ 1.
//! - No entry is NaN. `-inf` is a valid log-density (zero density) and `+inf`
//!   is passed through untouched.
//! - Column g corresponds to the g-th grid point; [`DensityMatrix::check_grid`]
//!   verifies the lengths agree before any aggregation.
use ndarray::{Array2, ArrayView1};

use crate::density::{
    errors::{DensityError, DensityResult},
    grid::Grid,
};

/// DensityMatrix — validated M × G log-density matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityMatrix {
    log_densities: Array2<f64>,
}

impl DensityMatrix {
    /// Validate and wrap a log-density matrix.
    ///
    /// Errors
    /// ------
    /// - [`DensityError::EmptyMatrix`] if M = 0 or G = 0.
    /// - [`DensityError::NaNEntry`] at the first NaN in row-major order.
    pub fn new(log_densities: Array2<f64>) -> DensityResult<Self> {
        let (rows, cols) = log_densities.dim();
        if rows == 0 || cols == 0 {
            return Err(DensityError::EmptyMatrix { rows, cols });
        }
        for ((row, col), value) in log_densities.indexed_iter() {
            if value.is_nan() {
                return Err(DensityError::NaNEntry { row, col });
            }
        }
        Ok(DensityMatrix { log_densities })
    }

    /// Build from row vectors, rejecting ragged input.
    ///
    /// Errors
    /// ------
    /// - [`DensityError::RaggedRow`] if any row length differs from row 0.
    /// - Everything [`DensityMatrix::new`] reports.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> DensityResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(DensityError::RaggedRow { row, expected: n_cols, actual: r.len() });
        }
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let log_densities = Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|_| DensityError::EmptyMatrix { rows: n_rows, cols: n_cols })?;
        Self::new(log_densities)
    }

    /// Validate, then check that the column count equals `grid.len()`.
    pub fn for_grid(log_densities: Array2<f64>, grid: &Grid) -> DensityResult<Self> {
        let matrix = Self::new(log_densities)?;
        matrix.check_grid(grid)?;
        Ok(matrix)
    }

    /// Fail fast with [`DensityError::DimensionMismatch`] when the grid and
    /// the matrix disagree on G.
    pub fn check_grid(&self, grid: &Grid) -> DensityResult<()> {
        if grid.len() != self.n_grid() {
            return Err(DensityError::DimensionMismatch {
                grid_len: grid.len(),
                n_cols: self.n_grid(),
            });
        }
        Ok(())
    }

    /// Number of posterior draws M.
    pub fn n_draws(&self) -> usize {
        self.log_densities.nrows()
    }

    /// Number of grid points G.
    pub fn n_grid(&self) -> usize {
        self.log_densities.ncols()
    }

    pub fn log_densities(&self) -> &Array2<f64> {
        &self.log_densities
    }

    /// Log-densities of every draw at grid point `g`.
    pub fn column(&self, g: usize) -> ArrayView1<'_, f64> {
        self.log_densities.column(g)
    }
}
