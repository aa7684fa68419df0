//! kernels::nig — Normal-Inverse-Gamma conjugate prior: marginal and posterior.
//!
//! Purpose
//! -------
//! Provide the closed-form quantities of the NIG prior
//! μ | σ² ~ N(μ₀, σ²/λ), σ² ~ InvGamma(α, β) that a conjugate sampler relies
//! on, so sampler output can be checked against known formulas.
//!
//! Key behaviors
//! -------------
//! - [`marginal_log_likelihood`]: prior-predictive log-density of one datum, a
//!   location-scale Student-t with ν = 2α, location μ₀ and scale
//!   σₙ = √(β(λ + 1) / (αλ)).
//! - [`SufficientStats`]: running count, sum and sum of squares of the data
//!   allocated to one component, with add/remove/clear.
//! - [`NigHypers::posterior`]: conjugate update of (μ₀, λ, α, β) given those
//!   statistics; [`conditional_log_likelihood`] is the marginal under it.
//!
//! Invariants & assumptions
//! ------------------------
//! - λ, α, β > 0 and μ₀ finite for every [`NigHypers`] built through
//!   [`NigHypers::new`]; the marginal is then finite for every finite `x`.
//! - The posterior update with zero data returns the prior unchanged.
//!
//! Conventions
//! -----------
//! - Flat parameter vectors use the order `[mean, var_scaling, shape, scale]`.
use statrs::function::gamma::ln_gamma;

use crate::kernels::{
    errors::{KernelError, KernelResult},
    gaussian::GaussianState,
    traits::LogDensity,
    validation::{verify_finite, verify_len, verify_positive},
};

/// NigHypers — NIG hyperparameters `(mean, var_scaling, shape, scale)`.
///
/// Fields
/// ------
/// - `mean`: prior location μ₀.
/// - `var_scaling`: λ, the number of pseudo-observations behind μ₀.
/// - `shape`: α of the inverse-gamma prior on σ².
/// - `scale`: β of the inverse-gamma prior on σ².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NigHypers {
    pub mean: f64,
    pub var_scaling: f64,
    pub shape: f64,
    pub scale: f64,
}

impl NigHypers {
    /// Validated hyperparameters.
    ///
    /// Errors
    /// ------
    /// - `KernelError::NonFiniteParam` for a non-finite mean.
    /// - `KernelError::NonPositiveParam` for a var_scaling, shape or scale
    ///   that is ≤ 0 or not finite.
    pub fn new(mean: f64, var_scaling: f64, shape: f64, scale: f64) -> KernelResult<Self> {
        Ok(NigHypers {
            mean: verify_finite("mean", mean)?,
            var_scaling: verify_positive("var_scaling", var_scaling)?,
            shape: verify_positive("shape", shape)?,
            scale: verify_positive("scale", scale)?,
        })
    }

    /// From the flat `[mean, var_scaling, shape, scale]` vector.
    pub fn from_slice(params: &[f64]) -> KernelResult<Self> {
        verify_len(params, 4)?;
        Self::new(params[0], params[1], params[2], params[3])
    }

    /// Scale σₙ = √(β(λ + 1) / (αλ)) of the Student-t prior predictive.
    pub fn predictive_scale(&self) -> f64 {
        (self.scale * (self.var_scaling + 1.0) / (self.shape * self.var_scaling)).sqrt()
    }

    /// Degrees of freedom ν = 2α of the Student-t prior predictive.
    pub fn degrees_of_freedom(&self) -> f64 {
        2.0 * self.shape
    }

    /// Conjugate posterior hyperparameters given the data summarized in `stats`.
    ///
    /// With n = `stats.card`, ȳ the sample mean and ss = Σy² − n·ȳ²:
    /// - μₙ = (λμ₀ + Σy) / (λ + n)
    /// - λₙ = λ + n
    /// - αₙ = α + n/2
    /// - βₙ = β + ss/2 + λn(ȳ − μ₀)² / (2(λ + n))
    pub fn posterior(&self, stats: &SufficientStats) -> NigHypers {
        if stats.card == 0 {
            return *self;
        }
        let n = stats.card as f64;
        let y_bar = stats.sum / n;
        let ss = stats.sum_squares - n * y_bar * y_bar;
        let dev = y_bar - self.mean;
        NigHypers {
            mean: (self.var_scaling * self.mean + stats.sum) / (self.var_scaling + n),
            var_scaling: self.var_scaling + n,
            shape: self.shape + 0.5 * n,
            scale: self.scale
                + 0.5 * ss
                + 0.5 * self.var_scaling * n * dev * dev / (n + self.var_scaling),
        }
    }

    /// Starting component state: the prior mean, and the standard deviation
    /// at the inverse-gamma mode β / (α + 1).
    ///
    /// The sampler's Python hierarchy stores the variance β / (α + 1) itself in
    /// its std slot; here the second entry is always a standard deviation.
    pub fn initial_state(&self) -> GaussianState {
        GaussianState::new_unchecked(self.mean, (self.scale / (self.shape + 1.0)).sqrt())
    }
}

impl LogDensity for NigHypers {
    fn ln_density(&self, x: f64) -> f64 {
        marginal_log_likelihood(x, self)
    }
}

/// Log-density of a location-scale Student-t with `nu` degrees of freedom.
pub fn student_t_log_density(x: f64, nu: f64, location: f64, scale: f64) -> f64 {
    let z = (x - location) / scale;
    ln_gamma(0.5 * (nu + 1.0))
        - ln_gamma(0.5 * nu)
        - 0.5 * (nu * std::f64::consts::PI).ln()
        - scale.ln()
        - 0.5 * (nu + 1.0) * (z * z / nu).ln_1p()
}

/// NIG marginal (prior-predictive) log-density of one datum `x`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_mixture_density::kernels::{NigHypers, marginal_log_likelihood};
/// let hypers = NigHypers::new(5.0, 0.1, 2.0, 2.0).unwrap();
/// let value = marginal_log_likelihood(4.5, &hypers);
/// assert!(value.is_finite());
/// ```
pub fn marginal_log_likelihood(x: f64, hypers: &NigHypers) -> f64 {
    student_t_log_density(x, hypers.degrees_of_freedom(), hypers.mean, hypers.predictive_scale())
}

/// Posterior-predictive log-density of `x` given the data in `stats`.
pub fn conditional_log_likelihood(x: f64, hypers: &NigHypers, stats: &SufficientStats) -> f64 {
    marginal_log_likelihood(x, &hypers.posterior(stats))
}

/// SufficientStats — count, sum and sum of squares of one component's data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SufficientStats {
    pub card: usize,
    pub sum: f64,
    pub sum_squares: f64,
}

impl SufficientStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(data: &[f64]) -> Self {
        let mut stats = Self::new();
        for &x in data {
            stats.add(x);
        }
        stats
    }

    pub fn add(&mut self, x: f64) {
        self.card += 1;
        self.sum += x;
        self.sum_squares += x * x;
    }

    /// Remove a datum previously added.
    ///
    /// Errors
    /// ------
    /// - [`KernelError::EmptyStatistics`] if no datum is held.
    pub fn remove(&mut self, x: f64) -> KernelResult<()> {
        if self.card == 0 {
            return Err(KernelError::EmptyStatistics);
        }
        self.card -= 1;
        self.sum -= x;
        self.sum_squares -= x * x;
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Sample mean, `None` without data.
    pub fn mean(&self) -> Option<f64> {
        (self.card > 0).then(|| self.sum / self.card as f64)
    }
}
