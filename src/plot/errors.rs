//! plot::errors — failures while rendering the density figure.

use std::path::PathBuf;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type PlotResult<T> = Result<T, PlotError>;

/// PlotError — figure construction and rendering errors.
///
/// Variants
/// --------
/// - `EmptyData`
///   No observations to histogram.
/// - `NonFiniteData { index, value }`
///   An observation is NaN or ±∞.
/// - `ZeroBins`
///   The histogram was asked for zero bins.
/// - `LengthMismatch { grid_len, density_len }`
///   The density curve and the grid disagree on length.
/// - `CreateDir { path, message }`
///   The save directory could not be created.
/// - `Backend { message }`
///   The drawing backend failed (file encoding, font lookup).
#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    EmptyData,
    NonFiniteData { index: usize, value: f64 },
    ZeroBins,
    LengthMismatch { grid_len: usize, density_len: usize },
    CreateDir { path: PathBuf, message: String },
    Backend { message: String },
}

impl std::error::Error for PlotError {}

impl std::fmt::Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotError::EmptyData => write!(f, "No observations to plot."),
            PlotError::NonFiniteData { index, value } => {
                write!(f, "Observation at index {index} is non-finite: {value}")
            }
            PlotError::ZeroBins => write!(f, "Histogram needs at least one bin."),
            PlotError::LengthMismatch { grid_len, density_len } => {
                write!(f, "Grid has {grid_len} points but the density has {density_len} values.")
            }
            PlotError::CreateDir { path, message } => {
                write!(f, "Cannot create directory {}: {message}", path.display())
            }
            PlotError::Backend { message } => write!(f, "Drawing backend error: {message}"),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<PlotError> for PyErr {
    fn from(err: PlotError) -> PyErr {
        PyValueError::new_err(format!("PlotError: {err}"))
    }
}

/// Wrap any backend error.
pub(crate) fn backend<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Backend { message: err.to_string() }
}
