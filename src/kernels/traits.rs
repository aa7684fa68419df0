//! kernels::traits — the common interface of every closed-form kernel.
use ndarray::Array1;

/// A univariate log-density with fixed parameters.
///
/// Implemented by the leaf likelihood states (Gaussian, Laplace) and by the
/// NIG hyperparameters (whose log-density is the conjugate marginal).
pub trait LogDensity {
    /// Log-density at `x`.
    fn ln_density(&self, x: f64) -> f64;

    /// Log-density at every point of `points`, in order.
    fn ln_density_grid(&self, points: &[f64]) -> Array1<f64> {
        points.iter().map(|&x| self.ln_density(x)).collect()
    }
}

/// Evaluate `kernel` on a grid; one entry per grid point.
///
/// This is the row a sampler would write for a single-component mixture, so
/// it can be fed straight into the density aggregator in tests.
pub fn log_likelihood_grid<K: LogDensity + ?Sized>(kernel: &K, points: &[f64]) -> Array1<f64> {
    kernel.ln_density_grid(points)
}
