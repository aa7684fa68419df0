//! kernels — closed-form likelihood and marginal-likelihood formulas.
//!
//! Purpose
//! -------
//! Give the reference log-densities that a sampler's grid output must agree
//! with for the two supported hierarchies: the Gaussian leaf likelihood
//! (NNIG), the Laplace leaf likelihood (LapNIG), and the NIG conjugate
//! marginal, which is a Student-t.
//!
//! Key behaviors
//! -------------
//! - [`gaussian_log_likelihood`], [`laplace_log_likelihood`] and
//!   [`marginal_log_likelihood`] are pure functions of a datum and a state.
//! - [`LogDensity`] is the shared interface; [`log_likelihood_grid`] evaluates
//!   any kernel on a grid, producing a row in the sampler's density format.
//! - [`NigHypers::posterior`] and [`SufficientStats`] give the conjugate
//!   update used by the conditional predictive.
//!
//! Invariants & assumptions
//! ------------------------
//! - Validated constructors guarantee finite locations and strictly positive
//!   scales; the formulas then return finite values for finite `x`.
//! - `GaussianState::new_unchecked` exists for callers that own the `std > 0`
//!   precondition; with `std == 0` the result is non-finite.
//!
//! Conventions
//! -----------
//! - Gaussian and Laplace flat states are `[location, scale]`; NIG flat
//!   hyperparameters are `[mean, var_scaling, shape, scale]`.
//! - Kernels are not called by the plotting pipeline; they serve tests,
//!   validation, and the Python bindings.
//!
//! Testing notes
//! -------------
//! - Each kernel is checked against the matching `statrs` distribution's
//!   `ln_pdf`, plus the exact properties at the mean and under reflection.

pub mod errors;
pub mod gaussian;
pub mod laplace;
pub mod nig;
pub mod state;
pub mod traits;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{KernelError, KernelResult};
pub use self::gaussian::{GaussianState, gaussian_log_likelihood};
pub use self::laplace::{LaplaceState, laplace_log_likelihood};
pub use self::nig::{
    NigHypers, SufficientStats, conditional_log_likelihood, marginal_log_likelihood,
    student_t_log_density,
};
pub use self::state::ComponentState;
pub use self::traits::{LogDensity, log_likelihood_grid};

pub mod prelude {
    pub use super::errors::{KernelError, KernelResult};
    pub use super::gaussian::{GaussianState, gaussian_log_likelihood};
    pub use super::laplace::{LaplaceState, laplace_log_likelihood};
    pub use super::nig::{NigHypers, SufficientStats, marginal_log_likelihood};
    pub use super::traits::LogDensity;
}
