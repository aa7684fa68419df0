//! utils — Python-side argument extraction shared by the bindings.
//!
//! Accepts numpy arrays, pandas frames (through `to_numpy`) and nested Python
//! lists, and hands back validated Rust types.
#[cfg(feature = "python-bindings")]
use std::collections::BTreeMap;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray2;

#[cfg(feature = "python-bindings")]
use crate::{config::hyperparams::HyperparamMap, density::matrix::DensityMatrix};

/// Extract an M × G log-density matrix.
///
/// Tries a 2-D float64 array, then `to_numpy()` (pandas DataFrame), then a
/// list of equal-length rows. Shape and NaN checks raise `ValueError` through
/// [`DensityError`](crate::density::DensityError).
#[cfg(feature = "python-bindings")]
pub fn extract_density_matrix<'py>(raw_data: &Bound<'py, PyAny>) -> PyResult<DensityMatrix> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(DensityMatrix::new(arr_ro.as_array().to_owned())?);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(DensityMatrix::new(frame_ro.as_array().to_owned())?);
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or list of float64 rows",
        )
    })?;
    Ok(DensityMatrix::from_rows(rows)?)
}

#[cfg(feature = "python-bindings")]
pub fn hyperparams_to_dict(map: &HyperparamMap) -> BTreeMap<String, String> {
    map.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[cfg(feature = "python-bindings")]
pub fn hyperparams_from_dict(dict: BTreeMap<String, String>) -> HyperparamMap {
    dict.into_iter().collect()
}
