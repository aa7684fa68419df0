//! density — posterior-predictive density from per-draw log-densities.
//!
//! Purpose
//! -------
//! Turn the sampler's grid evaluations (one log-density row per retained MCMC
//! iteration) into a single posterior-predictive density curve over the
//! grid, ready to be drawn on top of the data histogram.
//!
//! Key behaviors
//! -------------
//! - [`Grid`] and [`DensityMatrix`] validate their inputs at construction and
//!   cross-check G before aggregation ([`DensityMatrix::check_grid`]).
//! - [`compute_density`] is the plain mean of exponentials;
//!   [`compute_density_stable`] / [`log_predictive_density`] use log-sum-exp.
//! - [`PosteriorPredictiveDensity`] is the only output type and can report its
//!   trapezoidal mass over the grid.
//!
//! Invariants & assumptions
//! ------------------------
//! - Draws are equally weighted; the sampler is responsible for burn-in and
//!   thinning before writing the matrix.
//! - Output length is always G and every value is ≥ 0.
//!
//! Conventions
//! -----------
//! - Rows are draws, columns are grid points, both 0-based.
//! - The module performs no I/O; loading lives in `io`.
//!
//! Testing notes
//! -------------
//! - [`aggregate`] pins the closed-form scenarios, permutation invariance, and
//!   the naive/stable agreement; [`matrix`] and [`grid`] cover every guard.

pub mod aggregate;
pub mod errors;
pub mod grid;
pub mod matrix;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::aggregate::{
    Aggregation, PosteriorPredictiveDensity, compute_density, compute_density_stable,
    log_predictive_density, log_sum_exp,
};
pub use self::errors::{DensityError, DensityResult};
pub use self::grid::Grid;
pub use self::matrix::DensityMatrix;

pub mod prelude {
    pub use super::aggregate::{
        Aggregation, PosteriorPredictiveDensity, compute_density, compute_density_stable,
    };
    pub use super::errors::{DensityError, DensityResult};
    pub use super::grid::Grid;
    pub use super::matrix::DensityMatrix;
}
