//! density::grid — the ordered support points the sampler evaluated on.
use ndarray::Array1;

use crate::density::errors::{DensityError, DensityResult};

/// Grid — ordered, non-empty sequence of finite evaluation points.
///
/// The order is the plotting x-axis order and must match the column order of
/// the log-density matrix. Points are not required to be sorted or evenly
/// spaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Array1<f64>,
}

impl Grid {
    /// Validate and wrap grid points.
    ///
    /// Errors
    /// ------
    /// - [`DensityError::EmptyGrid`] for zero points.
    /// - [`DensityError::NonFiniteGridPoint`] for NaN or ±∞ entries.
    pub fn new(points: Array1<f64>) -> DensityResult<Self> {
        if points.is_empty() {
            return Err(DensityError::EmptyGrid);
        }
        if let Some((index, &value)) = points.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(DensityError::NonFiniteGridPoint { index, value });
        }
        Ok(Grid { points })
    }

    pub fn from_vec(points: Vec<f64>) -> DensityResult<Self> {
        Self::new(Array1::from(points))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &Array1<f64> {
        &self.points
    }

    /// Smallest and largest grid point.
    pub fn range(&self) -> (f64, f64) {
        self.points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Empty and non-finite grids are rejected; a valid grid reports its range.
    fn grid_new_validates_points() {
        assert_eq!(Grid::from_vec(vec![]), Err(DensityError::EmptyGrid));
        match Grid::new(array![0.0, f64::NAN]) {
            Err(DensityError::NonFiniteGridPoint { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected NonFiniteGridPoint, got {other:?}"),
        }

        let grid = Grid::new(array![1.5, -2.0, 3.0]).expect("valid grid");
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.range(), (-2.0, 3.0));
    }
}
