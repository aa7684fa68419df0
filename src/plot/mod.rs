//! plot — the run figure: data histogram, predictive density, annotation.
//!
//! Purpose
//! -------
//! Turn an aggregated density and the run labels into the PNG the CLI saves.
//!
//! Key behaviors
//! -------------
//! - [`annotation_text`] selects hyperparameters by hierarchy and mixing.
//! - [`histogram_density`] and [`render_density_plot`] draw with `plotters`
//!   on a bitmap backend.
//! - [`save_density_plot`] names the file from labels and the local time.
//!
//! Downstream usage
//! ----------------
//! - The `plot_density` binary is the only caller that renders; library users
//!   can stop after aggregation.

pub mod annotation;
pub mod errors;
pub mod render;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::annotation::{annotation_keys, annotation_text, plot_caption};
pub use self::errors::{PlotError, PlotResult};
pub use self::render::{
    DEFAULT_BINS, DensityPlot, HistogramBin, histogram_density, output_path,
    render_density_plot, save_density_plot,
};
