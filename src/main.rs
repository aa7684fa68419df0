//! plot_density — posterior-predictive density figure for one sampler run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::FmtSubscriber;

use rust_mixture_density::{
    config::{HyperparamMap, convert_config_files},
    density::Aggregation,
    io::{load_column, load_density_matrix, load_grid},
    labels::{Hierarchy, Mixing, Title},
    plot::{DEFAULT_BINS, DensityPlot, annotation_text, plot_caption, save_density_plot},
};

#[derive(Parser)]
#[command(name = "plot_density")]
#[command(version)]
#[command(about = "Plot the posterior-predictive density of a BNP mixture run against its data")]
struct Cli {
    /// Observed data, one value per line
    #[arg(long, default_value = "resources/tutorial/data.csv")]
    data: PathBuf,

    /// Evaluation grid, one value per line
    #[arg(long, default_value = "resources/tutorial/grid.csv")]
    grid: PathBuf,

    /// Per-draw log-densities on the grid (rows = draws)
    #[arg(long, default_value = "resources/tutorial/out/density_file.csv")]
    density: PathBuf,

    /// Persisted hyperparameter record (JSON)
    #[arg(long, default_value = "resources/tutorial/hypers_vals.local.json")]
    hypers_vals: PathBuf,

    /// Directory the figure is saved into
    #[arg(long, default_value = "resources/tutorial/out/figs.local/tutorial")]
    save: PathBuf,

    /// Component hierarchy
    #[arg(long, value_enum)]
    hierarchy: Hierarchy,

    /// Mixing model
    #[arg(long, value_enum)]
    mixing: Mixing,

    /// Data set title
    #[arg(long, value_enum)]
    title: Title,

    /// Hierarchy config; with --mixing-config, rebuilds --hypers-vals first
    #[arg(long, requires = "mixing_config")]
    hierarchy_config: Option<PathBuf>,

    /// Mixing config; with --hierarchy-config, rebuilds --hypers-vals first
    #[arg(long, requires = "hierarchy_config")]
    mixing_config: Option<PathBuf>,

    /// Aggregation strategy: naive or log-sum-exp
    #[arg(long, default_value = "naive")]
    aggregation: Aggregation,

    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    bins: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    if let (Some(hierarchy_config), Some(mixing_config)) =
        (&cli.hierarchy_config, &cli.mixing_config)
    {
        convert_config_files(&[hierarchy_config, mixing_config], &cli.hypers_vals)
            .context("Failed to convert config files")?;
    }

    let data = load_column(&cli.data)
        .with_context(|| format!("Failed to load data from {}", cli.data.display()))?;
    let grid = load_grid(&cli.grid)
        .with_context(|| format!("Failed to load grid from {}", cli.grid.display()))?;
    let matrix = load_density_matrix(&cli.density)
        .with_context(|| format!("Failed to load densities from {}", cli.density.display()))?;
    matrix.check_grid(&grid).context("Density file does not match the grid")?;
    info!(
        draws = matrix.n_draws(),
        grid_points = matrix.n_grid(),
        observations = data.len(),
        "loaded run outputs"
    );

    let density = cli.aggregation.apply(&matrix);
    let mass = density.integrate(&grid).context("Failed to integrate density")?;
    debug!(aggregation = ?cli.aggregation, mass, "aggregated density");
    if (mass - 1.0).abs() > 0.05 {
        warn!(mass, "density mass on the grid differs from 1; the grid may not cover the support");
    }

    let hypers = HyperparamMap::load_json(&cli.hypers_vals).with_context(|| {
        format!("Failed to read hyperparameters from {}", cli.hypers_vals.display())
    })?;
    let annotation = annotation_text(cli.hierarchy, cli.mixing, &hypers)
        .context("Hyperparameter record is missing an annotation key")?;
    let caption = plot_caption(cli.title, cli.hierarchy, cli.mixing);

    let data = data.to_vec();
    let plot = DensityPlot {
        data: &data,
        grid: &grid,
        density: &density,
        caption: &caption,
        annotation: &annotation,
        bins: cli.bins,
    };
    let out_path = save_density_plot(&cli.save, cli.title, cli.hierarchy, cli.mixing, &plot)
        .context("Failed to render density plot")?;

    info!("Saved figure to {}", out_path.display());
    Ok(())
}
