//! Integration tests for the file-based density pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path the `plot_density` binary takes: structured
//!   config files → persisted JSON record → headerless CSV tables → aggregated
//!   posterior-predictive density → annotation text.
//! - Use sampler-like inputs: log-densities of several Gaussian mixtures
//!   evaluated on a regular grid and written as CSV.
//!
//! Coverage
//! --------
//! - `config`: `convert_config_files`, `HyperparamMap::load_json`.
//! - `io`: `load_column`, `load_grid`, `load_density_matrix`.
//! - `density`: naive and log-sum-exp aggregation, `integrate`.
//! - `kernels`: grid evaluation used to synthesize the density file.
//! - `plot`: `annotation_text`, `plot_caption`.
//!
//! Exclusions
//! ----------
//! - PNG rendering depends on system fonts and is covered by an ignored
//!   unit test in `plot::render`.
use std::{fs, path::Path};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rust_mixture_density::{
    config::{ConfigError, HyperparamMap, convert_config_files},
    density::{Aggregation, DensityError},
    io::{IoError, load_column, load_density_matrix, load_grid},
    kernels::{GaussianState, LogDensity},
    labels::{Hierarchy, Mixing, Title},
    plot::{annotation_text, plot_caption},
};
use tempfile::TempDir;

const LAPNIG_CONFIG: &str = "\
fixed_values {
  mean: 0.0
  var: 10.0
  shape: 2.0
  scale: 2.0
  mh_mean_var: 0.2
  mh_log_scale_var: 0.2
}
";

const MFM_CONFIG: &str = "\
fixed_value {
  lambda: 2.0
  gamma: 1.0
}
";

// ---- Helpers ----

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn grid_points() -> Vec<f64> {
    (0..=200).map(|i| -10.0 + 0.1 * i as f64).collect()
}

/// One row per draw: the log-density of a single Gaussian component.
fn density_csv(points: &[f64], components: &[(f64, f64)], offset: f64) -> String {
    components
        .iter()
        .map(|&(mean, std)| {
            let state = GaussianState::new(mean, std).expect("valid state");
            state
                .ln_density_grid(points)
                .iter()
                .map(|v| format!("{}", v + offset))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn column_csv(values: &[f64]) -> String {
    values.iter().map(|v| format!("{v}\n")).collect()
}

struct RunFiles {
    dir: TempDir,
    data: std::path::PathBuf,
    grid: std::path::PathBuf,
    density: std::path::PathBuf,
    hypers: std::path::PathBuf,
    lapnig: std::path::PathBuf,
    mfm: std::path::PathBuf,
}

fn run_files(offset: f64) -> RunFiles {
    let dir = tempfile::tempdir().expect("temp dir");
    let points = grid_points();
    let components = [(0.0, 1.0), (1.0, 1.0), (-1.0, 1.5)];
    RunFiles {
        data: write(dir.path(), "data.csv", &column_csv(&[-1.2, -0.4, 0.0, 0.3, 0.9, 1.7])),
        grid: write(dir.path(), "grid.csv", &column_csv(&points)),
        density: write(dir.path(), "density_file.csv", &density_csv(&points, &components, offset)),
        hypers: dir.path().join("hypers_vals.local.json"),
        lapnig: write(dir.path(), "lapnig_fixed.asciipb", LAPNIG_CONFIG),
        mfm: write(dir.path(), "mfm_fixed.asciipb", MFM_CONFIG),
        dir,
    }
}

// ---- Tests ----

#[test]
// Purpose
// -------
// Run the full pipeline for a LapNIG + MFM run.
//
// Given
// -----
// - Two config files, a six-point data column, a 201-point grid on
//   [-10, 10], and three draws of single-Gaussian log-densities.
//
// Expect
// ------
// - The JSON record holds all eight keys and reloads identically.
// - The aggregated density has unit mass on the grid.
// - The annotation lists eight lines; the caption joins the labels.
fn pipeline_converts_loads_aggregates_and_annotates() {
    // Arrange
    let files = run_files(0.0);

    // Act
    let merged = convert_config_files(&[&files.lapnig, &files.mfm], &files.hypers)
        .expect("config conversion");
    let reloaded = HyperparamMap::load_json(&files.hypers).expect("json record");
    let data = load_column(&files.data).expect("data column");
    let grid = load_grid(&files.grid).expect("grid");
    let matrix = load_density_matrix(&files.density).expect("density matrix");
    matrix.check_grid(&grid).expect("matching shapes");
    let density = Aggregation::Naive.apply(&matrix);
    let annotation = annotation_text(Hierarchy::LapNig, Mixing::Mfm, &reloaded)
        .expect("annotation keys present");

    // Assert
    assert_eq!(merged, reloaded);
    assert_eq!(merged.len(), 8);
    assert_eq!(data.len(), 6);
    assert_eq!((matrix.n_draws(), matrix.n_grid()), (3, 201));
    assert_abs_diff_eq!(density.integrate(&grid).expect("same length"), 1.0, epsilon = 1e-4);
    assert_eq!(annotation.lines().count(), 8);
    assert!(annotation.starts_with("mean: 0.0\nvar: 10.0"), "Got: {annotation}");
    assert_eq!(plot_caption(Title::Tutorial, Hierarchy::LapNig, Mixing::Mfm), "Tutorial_LapNIG_MFM");
}

#[test]
// Purpose
// -------
// The log-sum-exp aggregation recovers the density when every log-density
// is shifted by -1000, where the naive average underflows to zero.
fn pipeline_stable_aggregation_survives_large_negative_offsets() {
    let reference_files = run_files(0.0);
    let shifted_files = run_files(-1000.0);
    let reference = Aggregation::Naive
        .apply(&load_density_matrix(&reference_files.density).expect("density matrix"));
    let shifted = load_density_matrix(&shifted_files.density).expect("density matrix");

    let naive = Aggregation::Naive.apply(&shifted);
    let log_density = rust_mixture_density::density::log_predictive_density(&shifted);

    assert!(naive.values().iter().all(|&v| v == 0.0));
    for (lse, expected) in log_density.iter().zip(reference.values().iter()) {
        assert_relative_eq!(lse + 1000.0, expected.ln(), max_relative = 1e-9);
    }
}

#[test]
// Purpose
// -------
// A density file whose width differs from the grid is rejected before
// aggregation.
fn pipeline_rejects_grid_density_mismatch() {
    let files = run_files(0.0);
    let short_grid = write(files.dir.path(), "short_grid.csv", &column_csv(&[0.0, 1.0]));

    let grid = load_grid(&short_grid).expect("grid");
    let matrix = load_density_matrix(&files.density).expect("density matrix");

    assert_eq!(
        matrix.check_grid(&grid),
        Err(DensityError::DimensionMismatch { grid_len: 2, n_cols: 201 })
    );
}

#[test]
// Purpose
// -------
// Config and table errors carry enough context to locate the bad input.
fn pipeline_reports_bad_inputs() {
    let files = run_files(0.0);
    let nested = write(files.dir.path(), "nested.asciipb", "outer {\n  a: 1\n  inner { b: 2 }\n}\n");
    let bad_data = write(files.dir.path(), "bad.csv", "1.0\n2.0\nnan?\n");

    let config_err = convert_config_files(&[&files.lapnig, &nested], &files.hypers).unwrap_err();
    let data_err = load_column(&bad_data).unwrap_err();

    assert_eq!(config_err, ConfigError::NestedBlock { line: 3 });
    assert!(!files.hypers.exists());
    assert!(matches!(data_err, IoError::InvalidNumber { row: 2, col: 0, .. }));
}
