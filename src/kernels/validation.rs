//! kernels::validation — shared guards for kernel parameters.
//!
//! Each helper returns the validated value so constructors can write
//! `let std = verify_positive("std", std)?;`.
use crate::kernels::errors::{KernelError, KernelResult};

/// Require `value` to be finite.
pub fn verify_finite(name: &'static str, value: f64) -> KernelResult<f64> {
    if !value.is_finite() {
        return Err(KernelError::NonFiniteParam { name, value });
    }
    Ok(value)
}

/// Require `value` to be finite and strictly positive.
pub fn verify_positive(name: &'static str, value: f64) -> KernelResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(KernelError::NonPositiveParam { name, value });
    }
    Ok(value)
}

/// Require a flat parameter vector to hold exactly `expected` entries.
pub fn verify_len(values: &[f64], expected: usize) -> KernelResult<()> {
    if values.len() != expected {
        return Err(KernelError::WrongStateLength { expected, actual: values.len() });
    }
    Ok(())
}
