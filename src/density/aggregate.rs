//! density::aggregate — Monte Carlo posterior-predictive density on a grid.
//!
//! Purpose
//! -------
//! Reduce an M × G matrix of per-draw log-densities to the posterior-predictive
//! density p̂(x_g) = (1/M) ∑ₘ exp(ℓₘ(x_g)), i.e. a uniform-weight mixture of
//! the M sampled mixture densities, evaluated pointwise on the grid.
//!
//! Key behaviors
//! -------------
//! - [`compute_density`] exponentiates then averages. Very negative
//!   log-densities underflow to `0.0`; that is accepted, not an error.
//! - [`compute_density_stable`] computes the same quantity through a per-column
//!   log-sum-exp shifted by the column maximum, so the result only underflows
//!   when the *average* density itself is below `f64` range.
//! - [`log_predictive_density`] returns the stabilized log p̂ directly.
//! - [`Aggregation`] selects one of the two strategies at run time.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output length equals the matrix column count G.
//! - Every output value is ≥ 0 (a mean of exponentials).
//! - The result depends only on the matrix values and M; it is invariant under
//!   permutation of the rows up to floating-point summation order.
//! - A column made entirely of `-inf` yields exactly `0.0` under both
//!   strategies.
//!
//! Conventions
//! -----------
//! - Pure numeric code: no I/O, no logging.
use std::str::FromStr;

use ndarray::{Array1, ArrayView1, Axis};

use crate::density::{
    errors::{DensityError, DensityResult},
    grid::Grid,
    matrix::DensityMatrix,
};

/// PosteriorPredictiveDensity — grid-pointwise density estimate.
///
/// Only produced by the aggregation functions in this module, so its values
/// are always derived from a [`DensityMatrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct PosteriorPredictiveDensity {
    values: Array1<f64>,
}

impl PosteriorPredictiveDensity {
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }

    /// Largest density value on the grid.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Trapezoidal mass of the density over `grid`, in grid order.
    ///
    /// For a grid that covers the bulk of the support this should be close to
    /// one; it is a diagnostic and is not used to renormalize.
    ///
    /// Errors
    /// ------
    /// - [`DensityError::DimensionMismatch`] if `grid.len() != self.len()`.
    pub fn integrate(&self, grid: &Grid) -> DensityResult<f64> {
        if grid.len() != self.len() {
            return Err(DensityError::DimensionMismatch {
                grid_len: grid.len(),
                n_cols: self.len(),
            });
        }
        let x = grid.points();
        let mass = (1..x.len())
            .map(|i| 0.5 * (x[i] - x[i - 1]) * (self.values[i] + self.values[i - 1]))
            .sum::<f64>();
        Ok(mass.abs())
    }
}

/// Naive posterior-predictive density: `sum_m exp(L[m][g]) / M` per column.
///
/// Examples
/// --------
/// ```rust
/// # use rust_mixture_density::density::{DensityMatrix, compute_density};
/// let ln2 = 2f64.ln();
/// let matrix = DensityMatrix::from_rows(vec![vec![0.0, ln2], vec![ln2, 0.0]]).unwrap();
/// let density = compute_density(&matrix);
/// assert!((density.values()[0] - 1.5).abs() < 1e-12);
/// assert!((density.values()[1] - 1.5).abs() < 1e-12);
/// ```
pub fn compute_density(matrix: &DensityMatrix) -> PosteriorPredictiveDensity {
    let m = matrix.n_draws() as f64;
    let values = matrix.log_densities().mapv(f64::exp).sum_axis(Axis(0)) / m;
    PosteriorPredictiveDensity { values }
}

/// Log-sum-exp stabilized posterior-predictive density.
///
/// Equal to [`compute_density`] wherever the naive sum does not underflow or
/// overflow.
pub fn compute_density_stable(matrix: &DensityMatrix) -> PosteriorPredictiveDensity {
    let values = log_predictive_density(matrix).mapv(f64::exp);
    PosteriorPredictiveDensity { values }
}

/// Stabilized `ln p̂(x_g) = logsumexp_m(L[m][g]) − ln M` for every column.
pub fn log_predictive_density(matrix: &DensityMatrix) -> Array1<f64> {
    let ln_m = (matrix.n_draws() as f64).ln();
    matrix
        .log_densities()
        .axis_iter(Axis(1))
        .map(|column| log_sum_exp(column) - ln_m)
        .collect()
}

/// `ln ∑ exp(xᵢ)` with a max shift.
///
/// Returns `-inf` when every entry is `-inf` (and for an empty view), and
/// `+inf` when any entry is `+inf`.
pub fn log_sum_exp(values: ArrayView1<'_, f64>) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return max;
    }
    let shifted = values.iter().map(|&v| (v - max).exp()).sum::<f64>();
    max + shifted.ln()
}

/// Aggregation — strategy used to turn log-densities into a density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    /// Exponentiate, then average.
    #[default]
    Naive,
    /// Per-column log-sum-exp.
    LogSumExp,
}

impl Aggregation {
    pub fn apply(self, matrix: &DensityMatrix) -> PosteriorPredictiveDensity {
        match self {
            Aggregation::Naive => compute_density(matrix),
            Aggregation::LogSumExp => compute_density_stable(matrix),
        }
    }
}

impl FromStr for Aggregation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Aggregation::Naive),
            "log-sum-exp" | "logsumexp" | "lse" => Ok(Aggregation::LogSumExp),
            other => Err(format!(
                "invalid aggregation {other:?} (expected 'naive' or 'log-sum-exp')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The closed-form scenarios (zero matrix, the ln 2 swap matrix).
    // - Row-permutation invariance and non-negativity.
    // - Agreement of the naive and stabilized strategies, and the regime
    //   where only the stabilized one survives.
    // - `-inf` columns, `log_sum_exp` edge cases, and trapezoidal mass.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // A single draw of log-density 0 everywhere gives density 1 everywhere.
    //
    // Given
    // -----
    // - A 1 × 5 zero matrix.
    //
    // Expect
    // ------
    // - A length-5 vector of exactly 1.0.
    fn compute_density_single_zero_row_returns_ones() {
        // Arrange
        let matrix = DensityMatrix::new(Array2::zeros((1, 5))).expect("matrix");

        // Act
        let density = compute_density(&matrix);

        // Assert
        assert_eq!(density.len(), 5);
        assert!(density.values().iter().all(|&v| v == 1.0), "got {:?}", density.values());
    }

    #[test]
    // Purpose
    // -------
    // Pin the two-draw example: [[0, ln 2], [ln 2, 0]] averages to 1.5.
    fn compute_density_two_draws_matches_hand_computation() {
        // Arrange
        let ln2 = 2f64.ln();
        let matrix = DensityMatrix::new(array![[0.0, ln2], [ln2, 0.0]]).expect("matrix");

        // Act
        let density = compute_density(&matrix);

        // Assert
        assert_relative_eq!(density.values()[0], 1.5, epsilon = 1e-12);
        assert_relative_eq!(density.values()[1], 1.5, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Reordering the draws does not change the estimate.
    //
    // Given
    // -----
    // - A 3 × 4 matrix and the same rows in reverse order.
    //
    // Expect
    // ------
    // - Identical densities up to summation rounding.
    fn compute_density_row_permutation_invariant() {
        // Arrange
        let a = array![[-1.0, -2.0, -0.5, -3.0], [-0.2, -4.0, -1.5, -0.1], [-2.5, -0.3, -0.7, -1.0]];
        let reversed = array![[-2.5, -0.3, -0.7, -1.0], [-0.2, -4.0, -1.5, -0.1], [-1.0, -2.0, -0.5, -3.0]];

        // Act
        let d1 = compute_density(&DensityMatrix::new(a).expect("matrix"));
        let d2 = compute_density(&DensityMatrix::new(reversed).expect("matrix"));

        // Assert
        for (x, y) in d1.values().iter().zip(d2.values()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-14);
        }
        assert!(d1.values().iter().all(|&v| v >= 0.0));
    }

    #[test]
    // Purpose
    // -------
    // Naive and stabilized aggregation agree on moderate log-densities.
    fn compute_density_stable_agrees_with_naive() {
        // Arrange
        let matrix = DensityMatrix::new(array![
            [-0.9, -1.2, -3.0, -7.5],
            [-1.1, -0.8, -2.0, -9.0],
            [-2.0, -0.4, -2.5, -6.0]
        ])
        .expect("matrix");

        // Act
        let naive = compute_density(&matrix);
        let stable = Aggregation::LogSumExp.apply(&matrix);

        // Assert
        for (x, y) in naive.values().iter().zip(stable.values()) {
            assert_relative_eq!(*x, *y, max_relative = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Far in the tails the naive path underflows to 0 while the log-space
    // result keeps the correct value.
    //
    // Given
    // -----
    // - Two draws with log-densities −800 and −800 + ln 3 at one point.
    //
    // Expect
    // ------
    // - Naive density is 0.0; log_predictive_density is −800 + ln 2.
    fn log_predictive_density_survives_underflow() {
        // Arrange
        let matrix = DensityMatrix::new(array![[-800.0], [-800.0 + 3f64.ln()]]).expect("matrix");

        // Act
        let naive = compute_density(&matrix);
        let log_density = log_predictive_density(&matrix);

        // Assert
        assert_eq!(naive.values()[0], 0.0);
        assert_relative_eq!(log_density[0], -800.0 + 2f64.ln(), max_relative = 1e-14);
    }

    #[test]
    // Purpose
    // -------
    // Columns of -inf give zero density under both strategies.
    fn aggregation_neg_inf_column_is_zero() {
        let matrix =
            DensityMatrix::new(array![[f64::NEG_INFINITY, 0.0], [f64::NEG_INFINITY, 0.0]])
                .expect("matrix");

        for strategy in [Aggregation::Naive, Aggregation::LogSumExp] {
            let density = strategy.apply(&matrix);
            assert_eq!(density.values()[0], 0.0, "{strategy:?}");
            assert_abs_diff_eq!(density.values()[1], 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    // Purpose
    // -------
    // The standard normal log-density on a wide grid integrates to ≈ 1.
    //
    // Given
    // -----
    // - 801 points on [−8, 8] and two identical N(0, 1) draws.
    //
    // Expect
    // ------
    // - Trapezoidal mass within 1e-6 of 1; a shorter grid is rejected.
    fn posterior_predictive_integrate_normal_mass_close_to_one() {
        // Arrange
        let xs: Vec<f64> = (0..801).map(|i| -8.0 + 0.02 * i as f64).collect();
        let grid = Grid::from_vec(xs.clone()).expect("grid");
        let row: Vec<f64> =
            xs.iter().map(|x| -0.5 * x * x - 0.5 * (2.0 * std::f64::consts::PI).ln()).collect();
        let matrix = DensityMatrix::from_rows(vec![row.clone(), row]).expect("matrix");

        // Act
        let density = compute_density(&matrix);
        let mass = density.integrate(&grid).expect("same length");
        let short = Grid::from_vec(vec![0.0, 1.0]).expect("grid");

        // Assert
        assert_abs_diff_eq!(mass, 1.0, epsilon = 1e-6);
        assert!(density.integrate(&short).is_err());
    }

    #[test]
    // Purpose
    // -------
    // Strategy names parse case-insensitively; unknown names are rejected.
    fn aggregation_from_str_parses_known_names() {
        assert_eq!("naive".parse::<Aggregation>(), Ok(Aggregation::Naive));
        assert_eq!("Log-Sum-Exp".parse::<Aggregation>(), Ok(Aggregation::LogSumExp));
        assert!("mean".parse::<Aggregation>().is_err());
    }
}
