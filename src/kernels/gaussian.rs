//! kernels::gaussian — univariate Normal leaf likelihood (NNIG hierarchy).
//!
//! log N(x | μ, σ) = ln(1 / √(2π·σ²)) − (x − μ)² / (2·σ²)
//!
//! The formula is evaluated literally so that at `x = μ` the result is exactly
//! `ln(1 / √(2π·σ²))`.
use crate::kernels::{
    errors::KernelResult,
    traits::LogDensity,
    validation::{verify_finite, verify_len, verify_positive},
};

/// GaussianState — `(mean, std)` of one Normal mixture component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianState {
    pub mean: f64,
    pub std: f64,
}

impl GaussianState {
    /// Validated state.
    ///
    /// Errors
    /// ------
    /// - `KernelError::NonFiniteParam` for a non-finite mean.
    /// - `KernelError::NonPositiveParam` for `std ≤ 0` or non-finite.
    pub fn new(mean: f64, std: f64) -> KernelResult<Self> {
        let mean = verify_finite("mean", mean)?;
        let std = verify_positive("std", std)?;
        Ok(GaussianState { mean, std })
    }

    /// State without validation. With `std == 0` the log-likelihood is not
    /// finite; the caller owns the `std > 0` precondition.
    pub const fn new_unchecked(mean: f64, std: f64) -> Self {
        GaussianState { mean, std }
    }

    /// From the flat `[mean, std]` vector a sampler stores per component.
    pub fn from_slice(state: &[f64]) -> KernelResult<Self> {
        verify_len(state, 2)?;
        Self::new(state[0], state[1])
    }

    /// From `[mean, var]`, the layout of the sampler's own Normal state.
    pub fn from_mean_var(mean: f64, var: f64) -> KernelResult<Self> {
        let var = verify_positive("var", var)?;
        Self::new(mean, var.sqrt())
    }

    pub fn var(&self) -> f64 {
        self.std * self.std
    }
}

impl LogDensity for GaussianState {
    fn ln_density(&self, x: f64) -> f64 {
        gaussian_log_likelihood(x, self)
    }
}

/// Closed-form Gaussian log-density of `x` under `state`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_mixture_density::kernels::{GaussianState, gaussian_log_likelihood};
/// let state = GaussianState::new(0.0, 1.0).unwrap();
/// let at_mean = gaussian_log_likelihood(0.0, &state);
/// assert!((at_mean + 0.5 * (2.0 * std::f64::consts::PI).ln()).abs() < 1e-15);
/// ```
pub fn gaussian_log_likelihood(x: f64, state: &GaussianState) -> f64 {
    let var = state.std * state.std;
    let diff = x - state.mean;
    (1.0 / (2.0 * std::f64::consts::PI * var).sqrt()).ln() - diff * diff / (2.0 * var)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statrs::distribution::{Continuous, Normal};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The exact value at the mean and symmetry about the mean.
    // - Agreement with `statrs::distribution::Normal::ln_pdf`.
    // - Constructor validation and the unchecked `std == 0` path.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // At x = mean the quadratic term vanishes exactly.
    //
    // Given
    // -----
    // - Several (mean, std) pairs.
    //
    // Expect
    // ------
    // - Bitwise equality with ln(1 / √(2π·std²)).
    fn gaussian_log_likelihood_at_mean_is_normalizing_constant() {
        for (mean, std) in [(0.0, 1.0), (-3.5, 0.2), (12.0, 7.0)] {
            // Arrange
            let state = GaussianState::new(mean, std).expect("valid state");
            let expected = (1.0 / (2.0 * std::f64::consts::PI * std * std).sqrt()).ln();

            // Act
            let value = gaussian_log_likelihood(mean, &state);

            // Assert
            assert_eq!(value, expected);
        }
    }

    #[test]
    // Purpose
    // -------
    // The log-density is symmetric about the mean: exactly for a zero mean,
    // up to the rounding of `mean ± d` otherwise.
    fn gaussian_log_likelihood_symmetric_about_mean() {
        let centered = GaussianState::new(0.0, 0.8).expect("valid state");
        let shifted = GaussianState::new(1.25, 0.8).expect("valid state");

        for d in [0.1, 0.5, 2.0, 10.0] {
            assert_eq!(
                gaussian_log_likelihood(d, &centered),
                gaussian_log_likelihood(-d, &centered),
                "asymmetric at d = {d}"
            );
            assert_relative_eq!(
                gaussian_log_likelihood(1.25 + d, &shifted),
                gaussian_log_likelihood(1.25 - d, &shifted),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // The literal formula agrees with statrs' Normal log-pdf.
    fn gaussian_log_likelihood_matches_statrs_normal() {
        // Arrange
        let state = GaussianState::new(2.0, 1.5).expect("valid state");
        let reference = Normal::new(2.0, 1.5).expect("valid normal");

        for x in [-4.0, 0.0, 2.0, 3.3, 9.0] {
            // Act / Assert
            assert_relative_eq!(
                gaussian_log_likelihood(x, &state),
                reference.ln_pdf(x),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Invalid std values are rejected; the unchecked path yields a
    // non-finite value at std = 0.
    fn gaussian_state_zero_std_rejected_or_non_finite() {
        assert!(GaussianState::new(0.0, 0.0).is_err());
        assert!(GaussianState::from_slice(&[0.0]).is_err());

        let degenerate = GaussianState::new_unchecked(0.0, 0.0);
        assert!(!gaussian_log_likelihood(0.5, &degenerate).is_finite());
    }

    #[test]
    // Purpose
    // -------
    // `from_mean_var` takes the square root of the variance.
    fn gaussian_state_from_mean_var_uses_sqrt() {
        let state = GaussianState::from_mean_var(1.0, 4.0).expect("valid");

        assert_eq!(state.std, 2.0);
        assert_eq!(state.var(), 4.0);
    }
}
