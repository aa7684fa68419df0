//! plot::render — PNG figure of observed data against the predictive density.
//!
//! Purpose
//! -------
//! Draw a density-normalized histogram of the observations, overlay the
//! posterior-predictive density on its grid, add the run caption and an
//! optional hyperparameter box, and write the result as a PNG.
//!
//! Key behaviors
//! -------------
//! - [`histogram_density`] bins data into equal-width bins over
//!   `[min, max]`; bar heights integrate to one.
//! - [`output_path`] builds `<save>/<title>_<hierarchy>_<mixing>_<stamp>.local.png`
//!   with a `dd-mm-YYYY_HH:MM:SS` local timestamp.
//! - [`save_density_plot`] creates the save directory when missing.
//!
//! Testing notes
//! -------------
//! - Binning and paths are unit-tested. Rendering needs a system font for the
//!   caption and is covered by an ignored test.
use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};
use plotters::prelude::*;
use tracing::info;

use crate::{
    density::{aggregate::PosteriorPredictiveDensity, grid::Grid},
    labels::{Hierarchy, Mixing, Title},
    plot::{
        annotation::plot_caption,
        errors::{PlotError, PlotResult, backend},
    },
};

pub const DEFAULT_BINS: usize = 30;
pub const FIGURE_SIZE: (u32, u32) = (1000, 600);
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y_%H:%M:%S";

const ANNOTATION_LINE_HEIGHT: i32 = 20;
const ANNOTATION_FILL: RGBColor = RGBColor(245, 222, 179);

/// One histogram bar on `[start, end)`, the last bin closed on the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub density: f64,
}

/// Everything drawn on one figure.
#[derive(Debug, Clone, Copy)]
pub struct DensityPlot<'a> {
    pub data: &'a [f64],
    pub grid: &'a Grid,
    pub density: &'a PosteriorPredictiveDensity,
    pub caption: &'a str,
    pub annotation: &'a str,
    pub bins: usize,
}

/// Equal-width, density-normalized histogram.
///
/// When every observation is equal the single value is centered in a range
/// of width one.
///
/// Errors
/// ------
/// - [`PlotError::EmptyData`], [`PlotError::NonFiniteData`],
///   [`PlotError::ZeroBins`].
pub fn histogram_density(data: &[f64], bins: usize) -> PlotResult<Vec<HistogramBin>> {
    if data.is_empty() {
        return Err(PlotError::EmptyData);
    }
    if bins == 0 {
        return Err(PlotError::ZeroBins);
    }
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(PlotError::NonFiniteData { index, value });
    }

    let (mut lo, mut hi) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &x in data {
        let idx = (((x - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let norm = data.len() as f64 * width;
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + i as f64 * width,
            end: lo + (i + 1) as f64 * width,
            density: count as f64 / norm,
        })
        .collect())
}

/// Output file for a run rendered at `timestamp`.
pub fn output_path(
    save_dir: &Path, title: Title, hierarchy: Hierarchy, mixing: Mixing,
    timestamp: &NaiveDateTime,
) -> PathBuf {
    let stamp = timestamp.format(TIMESTAMP_FORMAT);
    save_dir.join(format!("{}_{stamp}.local.png", plot_caption(title, hierarchy, mixing)))
}

/// Render `plot` to `out_path`.
///
/// Errors
/// ------
/// - [`PlotError::LengthMismatch`] when the density and grid lengths differ.
/// - Binning errors from [`histogram_density`].
/// - [`PlotError::Backend`] for any drawing or encoding failure.
pub fn render_density_plot(out_path: &Path, plot: &DensityPlot<'_>) -> PlotResult<()> {
    if plot.grid.len() != plot.density.len() {
        return Err(PlotError::LengthMismatch {
            grid_len: plot.grid.len(),
            density_len: plot.density.len(),
        });
    }
    let histogram = histogram_density(plot.data, plot.bins)?;

    let (grid_lo, grid_hi) = plot.grid.range();
    let x_lo = histogram.first().map_or(grid_lo, |b| b.start).min(grid_lo);
    let x_hi = histogram.last().map_or(grid_hi, |b| b.end).max(grid_hi);
    let y_max = histogram
        .iter()
        .map(|b| b.density)
        .chain(plot.density.values().iter().copied())
        .filter(|y| y.is_finite())
        .fold(0.0f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let root = BitMapBackend::new(out_path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(plot.caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0.0f64..y_max)
        .map_err(backend)?;

    chart.configure_mesh().y_desc("density").draw().map_err(backend)?;

    chart
        .draw_series(histogram.iter().map(|b| {
            Rectangle::new([(b.start, 0.0), (b.end, b.density)], BLUE.mix(0.5).filled())
        }))
        .map_err(backend)?;

    chart
        .draw_series(LineSeries::new(
            plot.grid
                .points()
                .iter()
                .zip(plot.density.values().iter())
                .filter(|(_, y)| y.is_finite())
                .map(|(&x, &y)| (x, y)),
            RED.stroke_width(2),
        ))
        .map_err(backend)?;

    if !plot.annotation.is_empty() {
        let (width, _) = FIGURE_SIZE;
        let x0 = (width as f64 * 0.75) as i32;
        let y0 = 50;
        let n_lines = plot.annotation.lines().count() as i32;
        let x1 = width as i32 - 20;
        let y1 = y0 + n_lines * ANNOTATION_LINE_HEIGHT + 10;

        root.draw(&Rectangle::new([(x0, y0), (x1, y1)], ANNOTATION_FILL.mix(0.5).filled()))
            .map_err(backend)?;
        for (i, line) in plot.annotation.lines().enumerate() {
            let y = y0 + 5 + i as i32 * ANNOTATION_LINE_HEIGHT;
            root.draw(&Text::new(line, (x0 + 8, y), ("sans-serif", 16).into_font()))
                .map_err(backend)?;
        }
    }

    root.present().map_err(backend)?;
    Ok(())
}

/// Create `save_dir` if needed and render `plot` under a timestamped name.
///
/// Returns
/// -------
/// The path of the written PNG.
pub fn save_density_plot(
    save_dir: &Path, title: Title, hierarchy: Hierarchy, mixing: Mixing, plot: &DensityPlot<'_>,
) -> PlotResult<PathBuf> {
    fs::create_dir_all(save_dir).map_err(|e| PlotError::CreateDir {
        path: save_dir.to_path_buf(),
        message: e.to_string(),
    })?;
    let out_path = output_path(save_dir, title, hierarchy, mixing, &Local::now().naive_local());
    render_density_plot(&out_path, plot)?;
    info!(path = %out_path.display(), "saved density plot");
    Ok(out_path)
}
