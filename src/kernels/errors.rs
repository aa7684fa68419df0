//! kernels::errors — parameter errors for the closed-form likelihood kernels.
//!
//! The kernel formulas themselves are total over valid input; every variant
//! here comes from the validating constructors of the component states and
//! hyperparameters, or from misuse of the sufficient-statistics accumulator.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type KernelResult<T> = Result<T, KernelError>;

/// KernelError — invalid kernel parameters.
///
/// Variants
/// --------
/// - `NonFiniteParam { name, value }`
///   A location-type parameter (mean, datum) is NaN or ±∞.
/// - `NonPositiveParam { name, value }`
///   A scale-type parameter (std, scale, var_scaling, shape) is ≤ 0 or not
///   finite.
/// - `WrongStateLength { expected, actual }`
///   A flat parameter vector has the wrong number of entries.
/// - `EmptyStatistics`
///   A datum was removed from sufficient statistics holding no data.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    NonFiniteParam { name: &'static str, value: f64 },
    NonPositiveParam { name: &'static str, value: f64 },
    WrongStateLength { expected: usize, actual: usize },
    EmptyStatistics,
}

impl std::error::Error for KernelError {}

impl std::fmt::Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NonFiniteParam { name, value } => {
                write!(f, "Parameter '{name}' must be finite; got: {value}")
            }
            KernelError::NonPositiveParam { name, value } => {
                write!(f, "Parameter '{name}' must be finite and > 0; got: {value}")
            }
            KernelError::WrongStateLength { expected, actual } => {
                write!(f, "Expected a parameter vector of length {expected}; got {actual}.")
            }
            KernelError::EmptyStatistics => {
                write!(f, "Cannot remove a datum from empty sufficient statistics.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<KernelError> for PyErr {
    fn from(err: KernelError) -> PyErr {
        PyValueError::new_err(format!("KernelError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Parameter errors name the parameter and embed the offending value.
    fn kernel_error_non_positive_param_includes_name_and_value() {
        let msg = KernelError::NonPositiveParam { name: "std", value: -0.5 }.to_string();

        assert!(msg.contains("std") && msg.contains("-0.5"), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Length errors report both the expected and actual lengths.
    fn kernel_error_wrong_state_length_includes_lengths() {
        let msg = KernelError::WrongStateLength { expected: 4, actual: 3 }.to_string();

        assert!(msg.contains('4') && msg.contains('3'), "Got: {msg}");
    }
}
