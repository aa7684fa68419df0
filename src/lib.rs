//! rust_mixture_density — posterior-predictive density post-processing for
//! Bayesian nonparametric mixture samplers, with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the config, density and kernel routines to Python via the
//! `_rust_mixture_density` extension module.
//!
//! Key behaviors
//! -------------
//! - [`config`]: extract the brace-delimited block of a structured-text config
//!   into a flat key → value map, merge maps, persist them as JSON.
//! - [`density`]: average `exp(log-density)` over MCMC draws on a grid, with a
//!   log-sum-exp variant that survives very negative log-densities.
//! - [`kernels`]: Gaussian and Laplace leaf likelihoods and the NIG Student-t
//!   marginal, for checking sampler output against closed forms.
//! - [`io`], [`plot`], [`labels`]: table loading, figure rendering and run
//!   labels used by the `plot_density` binary.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue and error mapping.
//! - The aggregator and kernels are pure functions; only [`config::convert`],
//!   [`io`] and [`plot`] touch the filesystem.
//!
//! Conventions
//! -----------
//! - Log-densities use the natural logarithm.
//! - Density matrices are M × G: rows are posterior draws, columns are grid
//!   points.
//! - Errors are per-module enums converted to `ValueError` at the PyO3
//!   boundary.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/` runs the file-based
//!   pipeline end to end.

pub mod config;
pub mod density;
pub mod io;
pub mod kernels;
pub mod labels;
pub mod plot;
pub mod utils;

#[cfg(feature = "python-bindings")]
use std::{collections::BTreeMap, path::PathBuf};

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    config::{block::extract_block, convert::convert_config_files, hyperparams::merge},
    density::aggregate::Aggregation,
    kernels::{
        gaussian::{GaussianState, gaussian_log_likelihood},
        laplace::{LaplaceState, laplace_log_likelihood},
        nig::{NigHypers, marginal_log_likelihood},
    },
    utils::{extract_density_matrix, hyperparams_from_dict, hyperparams_to_dict},
};

// ---- config ----

/// Extract the first `{ ... }` block of `text` as a `dict[str, str]`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "extract_block")]
#[pyo3(text_signature = "(text, /)")]
fn py_extract_block(text: &str) -> PyResult<BTreeMap<String, String>> {
    Ok(hyperparams_to_dict(&extract_block(text)?))
}

/// Merge dicts left to right; later dicts win on shared keys.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "merge")]
#[pyo3(text_signature = "(maps, /)")]
fn py_merge(maps: Vec<BTreeMap<String, String>>) -> BTreeMap<String, String> {
    let maps: Vec<_> = maps.into_iter().map(hyperparams_from_dict).collect();
    hyperparams_to_dict(&merge(&maps))
}

/// Extract each source file, merge in order, write the JSON record.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "convert_config_files")]
#[pyo3(text_signature = "(sources, json_out, /)")]
fn py_convert_config_files(
    sources: Vec<PathBuf>, json_out: PathBuf,
) -> PyResult<BTreeMap<String, String>> {
    Ok(hyperparams_to_dict(&convert_config_files(&sources, &json_out)?))
}

// ---- density ----

#[cfg(feature = "python-bindings")]
fn aggregate_py<'py>(
    py: Python<'py>, log_densities: &Bound<'py, PyAny>, aggregation: Aggregation,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let matrix = extract_density_matrix(log_densities)?;
    Ok(aggregation.apply(&matrix).to_vec().into_pyarray(py))
}

/// Mean of `exp` over rows of an M × G log-density matrix.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "compute_density")]
#[pyo3(text_signature = "(log_densities, /)")]
fn py_compute_density<'py>(
    py: Python<'py>, log_densities: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    aggregate_py(py, log_densities, Aggregation::Naive)
}

/// Same as `compute_density`, evaluated with log-sum-exp per column.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "compute_density_stable")]
#[pyo3(text_signature = "(log_densities, /)")]
fn py_compute_density_stable<'py>(
    py: Python<'py>, log_densities: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    aggregate_py(py, log_densities, Aggregation::LogSumExp)
}

// ---- kernels ----

#[cfg(feature = "python-bindings")]
#[pyfunction(name = "gaussian_log_likelihood")]
#[pyo3(text_signature = "(x, mean, std, /)")]
fn py_gaussian_log_likelihood(x: f64, mean: f64, std: f64) -> PyResult<f64> {
    Ok(gaussian_log_likelihood(x, &GaussianState::new(mean, std)?))
}

#[cfg(feature = "python-bindings")]
#[pyfunction(name = "laplace_log_likelihood")]
#[pyo3(text_signature = "(x, mean, scale, /)")]
fn py_laplace_log_likelihood(x: f64, mean: f64, scale: f64) -> PyResult<f64> {
    Ok(laplace_log_likelihood(x, &LaplaceState::new(mean, scale)?))
}

#[cfg(feature = "python-bindings")]
#[pyfunction(name = "marginal_log_likelihood")]
#[pyo3(text_signature = "(x, mean, var_scaling, shape, scale, /)")]
fn py_marginal_log_likelihood(
    x: f64, mean: f64, var_scaling: f64, shape: f64, scale: f64,
) -> PyResult<f64> {
    Ok(marginal_log_likelihood(x, &NigHypers::new(mean, var_scaling, shape, scale)?))
}

/// _rust_mixture_density — PyO3 module initializer for the Python extension.
///
/// Key behaviors
/// -------------
/// - Create `config`, `density` and `kernels` submodules and attach them to
///   the parent module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_mixture_density<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let config_mod = PyModule::new(_py, "config")?;
    let density_mod = PyModule::new(_py, "density")?;
    let kernels_mod = PyModule::new(_py, "kernels")?;
    config_functions(_py, m, &config_mod)?;
    density_functions(_py, m, &density_mod)?;
    kernel_functions(_py, m, &kernels_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    let modules = _py.import("sys")?.getattr("modules")?;
    modules.set_item("rust_mixture_density.config", config_mod)?;
    modules.set_item("rust_mixture_density.density", density_mod)?;
    modules.set_item("rust_mixture_density.kernels", kernels_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn config_functions<'py>(
    _py: Python, rust_mixture_density: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_extract_block, m)?)?;
    m.add_function(wrap_pyfunction!(py_merge, m)?)?;
    m.add_function(wrap_pyfunction!(py_convert_config_files, m)?)?;
    rust_mixture_density.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn density_functions<'py>(
    _py: Python, rust_mixture_density: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_compute_density, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_density_stable, m)?)?;
    rust_mixture_density.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn kernel_functions<'py>(
    _py: Python, rust_mixture_density: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_gaussian_log_likelihood, m)?)?;
    m.add_function(wrap_pyfunction!(py_laplace_log_likelihood, m)?)?;
    m.add_function(wrap_pyfunction!(py_marginal_log_likelihood, m)?)?;
    rust_mixture_density.add_submodule(m)?;
    Ok(())
}
