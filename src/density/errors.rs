//! density::errors — shape and value guards for posterior-predictive aggregation.
//!
//! Purpose
//! -------
//! Define [`DensityError`] and [`DensityResult`] for the density aggregator.
//! The numerical reduction itself never fails; these errors come from the
//! constructors and shape checks that run before it.
//!
//! Conventions
//! -----------
//! - Indices are 0-based (row = posterior draw, column = grid point).
//! - `-inf` log-densities are valid input (zero density) and never produce an
//!   error; `NaN` does.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type DensityResult<T> = Result<T, DensityError>;

/// DensityError — invalid grids and log-density matrices.
///
/// Variants
/// --------
/// - `EmptyGrid`
///   The grid has no points.
/// - `NonFiniteGridPoint { index, value }`
///   A grid point is NaN or ±∞.
/// - `EmptyMatrix { rows, cols }`
///   The log-density matrix has no rows (M = 0) or no columns (G = 0).
/// - `RaggedRow { row, expected, actual }`
///   A row read from nested vectors has a different length than row 0.
/// - `NaNEntry { row, col }`
///   A log-density entry is NaN.
/// - `DimensionMismatch { grid_len, n_cols }`
///   The grid length and the matrix column count differ.
#[derive(Debug, Clone, PartialEq)]
pub enum DensityError {
    // ---- Grid ----
    EmptyGrid,
    NonFiniteGridPoint { index: usize, value: f64 },

    // ---- Matrix ----
    EmptyMatrix { rows: usize, cols: usize },
    RaggedRow { row: usize, expected: usize, actual: usize },
    NaNEntry { row: usize, col: usize },

    // ---- Cross-checks ----
    DimensionMismatch { grid_len: usize, n_cols: usize },
}

impl std::error::Error for DensityError {}

impl std::fmt::Display for DensityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DensityError::EmptyGrid => write!(f, "Grid must contain at least one point."),
            DensityError::NonFiniteGridPoint { index, value } => {
                write!(f, "Grid point at index {index} is non-finite: {value}")
            }
            DensityError::EmptyMatrix { rows, cols } => {
                write!(f, "Log-density matrix must be non-empty; got {rows} rows x {cols} columns.")
            }
            DensityError::RaggedRow { row, expected, actual } => {
                write!(f, "Row {row} has {actual} columns; expected {expected}.")
            }
            DensityError::NaNEntry { row, col } => {
                write!(f, "Log-density at row {row}, column {col} is NaN.")
            }
            DensityError::DimensionMismatch { grid_len, n_cols } => {
                write!(
                    f,
                    "Grid has {grid_len} points but the log-density matrix has {n_cols} columns."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<DensityError> for PyErr {
    fn from(err: DensityError) -> PyErr {
        PyValueError::new_err(format!("DensityError: {err}"))
    }
}
