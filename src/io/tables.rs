//! io::tables — headerless numeric CSV tables.
//!
//! Purpose
//! -------
//! Load the three sampler outputs the pipeline consumes: the observed data
//! (one column), the evaluation grid (one column, G rows) and the per-draw
//! log-density matrix (M rows × G columns).
//!
//! Key behaviors
//! -------------
//! - Files have no header row; every cell must parse as `f64` after trimming.
//! - Single-column loaders read the first cell of each record and ignore the
//!   rest, so a trailing comma is tolerated.
//! - Matrix rows may end in empty cells (trailing commas); an empty cell
//!   between values is an error.
//! - Shape validation is delegated to [`Grid`] and [`DensityMatrix`].
//!
//! Conventions
//! -----------
//! - Row and column indices in errors are 0-based.
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use ndarray::Array1;
use tracing::debug;

use crate::{
    density::{grid::Grid, matrix::DensityMatrix},
    io::errors::{IoError, IoResult},
};

fn read_records(path: &Path) -> IoResult<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| IoError::Open { path: path.to_path_buf(), message: e.to_string() })?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| IoError::Record {
            path: path.to_path_buf(),
            row,
            message: e.to_string(),
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        records.push(record);
    }
    if records.is_empty() {
        return Err(IoError::EmptyTable { path: path.to_path_buf() });
    }
    Ok(records)
}

fn parse_cell(path: &Path, row: usize, col: usize, cell: &str) -> IoResult<f64> {
    cell.parse::<f64>().map_err(|_| IoError::InvalidNumber {
        path: path.to_path_buf(),
        row,
        col,
        value: cell.to_string(),
    })
}

/// Parse every cell up to the last non-empty one; an interior empty cell is an
/// `InvalidNumber` so later values never shift into the wrong grid column.
fn parse_row(path: &Path, row: usize, record: &StringRecord) -> IoResult<Vec<f64>> {
    let width = record
        .iter()
        .enumerate()
        .filter(|(_, cell)| !cell.is_empty())
        .last()
        .map_or(0, |(last, _)| last + 1);
    record
        .iter()
        .take(width)
        .enumerate()
        .map(|(col, cell)| parse_cell(path, row, col, cell))
        .collect()
}

/// Load a single numeric column.
pub fn load_column(path: impl AsRef<Path>) -> IoResult<Array1<f64>> {
    let path = path.as_ref();
    let records = read_records(path)?;
    let values = records
        .iter()
        .enumerate()
        .map(|(row, record)| parse_cell(path, row, 0, record.get(0).unwrap_or_default()))
        .collect::<IoResult<Vec<f64>>>()?;
    debug!(path = %path.display(), n = values.len(), "loaded column");
    Ok(Array1::from(values))
}

/// Load the evaluation grid.
pub fn load_grid(path: impl AsRef<Path>) -> IoResult<Grid> {
    let path = path.as_ref();
    let points = load_column(path)?;
    Grid::new(points).map_err(|source| IoError::Shape { path: path.to_path_buf(), source })
}

/// Load the M × G log-density matrix.
///
/// Errors
/// ------
/// - [`IoError::InvalidNumber`] for a non-numeric cell.
/// - [`IoError::Shape`] wrapping `RaggedRow` or `NaNEntry` from
///   [`DensityMatrix::from_rows`].
pub fn load_density_matrix(path: impl AsRef<Path>) -> IoResult<DensityMatrix> {
    let path = path.as_ref();
    let rows = read_records(path)?
        .iter()
        .enumerate()
        .map(|(row, record)| parse_row(path, row, record))
        .collect::<IoResult<Vec<Vec<f64>>>>()?;
    let matrix = DensityMatrix::from_rows(rows)
        .map_err(|source| IoError::Shape { path: path.to_path_buf(), source })?;
    debug!(
        path = %path.display(),
        draws = matrix.n_draws(),
        grid = matrix.n_grid(),
        "loaded log-density matrix"
    );
    Ok(matrix)
}
