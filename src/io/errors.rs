//! io::errors — failures while loading the headerless CSV tables.
//!
//! Every variant carries the offending path so the CLI can report which of
//! the data, grid or density files is at fault.
use std::path::PathBuf;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::density::errors::DensityError;

pub type IoResult<T> = Result<T, IoError>;

/// IoError — table loading errors.
///
/// Variants
/// --------
/// - `Open { path, message }`
///   The file could not be opened.
/// - `Record { path, row, message }`
///   The CSV reader rejected a record (bad UTF-8, unterminated quote).
/// - `InvalidNumber { path, row, col, value }`
///   A cell is not a floating-point number. `row` and `col` are 0-based.
/// - `EmptyTable { path }`
///   The file has no records.
/// - `Shape { path, source }`
///   The parsed values do not form a valid grid or log-density matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum IoError {
    Open { path: PathBuf, message: String },
    Record { path: PathBuf, row: usize, message: String },
    InvalidNumber { path: PathBuf, row: usize, col: usize, value: String },
    EmptyTable { path: PathBuf },
    Shape { path: PathBuf, source: DensityError },
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::Shape { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::Open { path, message } => {
                write!(f, "Cannot open {}: {message}", path.display())
            }
            IoError::Record { path, row, message } => {
                write!(f, "Malformed record {row} in {}: {message}", path.display())
            }
            IoError::InvalidNumber { path, row, col, value } => {
                write!(
                    f,
                    "Invalid number {value:?} at row {row}, column {col} in {}",
                    path.display()
                )
            }
            IoError::EmptyTable { path } => write!(f, "Table {} has no records.", path.display()),
            IoError::Shape { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<IoError> for PyErr {
    fn from(err: IoError) -> PyErr {
        PyValueError::new_err(format!("IoError: {err}"))
    }
}
