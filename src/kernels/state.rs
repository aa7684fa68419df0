//! kernels::state — a component state tagged with its hierarchy.
use crate::{
    kernels::{
        errors::KernelResult, gaussian::GaussianState, laplace::LaplaceState, traits::LogDensity,
    },
    labels::Hierarchy,
};

/// ComponentState — the leaf likelihood of one mixture component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComponentState {
    Gaussian(GaussianState),
    Laplace(LaplaceState),
}

impl ComponentState {
    /// Interpret the flat `[location, scale]` vector for `hierarchy`.
    pub fn from_slice(hierarchy: Hierarchy, state: &[f64]) -> KernelResult<Self> {
        match hierarchy {
            Hierarchy::Nnig => GaussianState::from_slice(state).map(ComponentState::Gaussian),
            Hierarchy::LapNig => LaplaceState::from_slice(state).map(ComponentState::Laplace),
        }
    }

    pub fn hierarchy(&self) -> Hierarchy {
        match self {
            ComponentState::Gaussian(_) => Hierarchy::Nnig,
            ComponentState::Laplace(_) => Hierarchy::LapNig,
        }
    }
}

impl LogDensity for ComponentState {
    fn ln_density(&self, x: f64) -> f64 {
        match self {
            ComponentState::Gaussian(state) => state.ln_density(x),
            ComponentState::Laplace(state) => state.ln_density(x),
        }
    }
}
