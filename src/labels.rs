//! labels — categorical run labels: hierarchy, mixing model, and data set.
//!
//! These only select annotation text, captions and file names; the
//! aggregation math does not depend on them. `Display` yields the exact label
//! used in captions and output file names (`NNIG`, `LapNIG`, `DP`, `MFM`,
//! `Galaxy`, `Tutorial`).
use std::fmt;

use clap::ValueEnum;

/// Component hierarchy of the mixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Hierarchy {
    /// Normal likelihood, Normal-Inverse-Gamma prior.
    #[value(name = "NNIG")]
    Nnig,
    /// Laplace likelihood, Normal-Inverse-Gamma prior with MH tuning.
    #[value(name = "LapNIG")]
    LapNig,
}

/// Mixing model over components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mixing {
    /// Dirichlet Process.
    #[value(name = "DP")]
    Dp,
    /// Mixture of Finite Mixtures.
    #[value(name = "MFM")]
    Mfm,
}

/// Data set the run was fitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Title {
    #[value(name = "Galaxy")]
    Galaxy,
    #[value(name = "Tutorial")]
    Tutorial,
}

impl Hierarchy {
    pub const fn label(self) -> &'static str {
        match self {
            Hierarchy::Nnig => "NNIG",
            Hierarchy::LapNig => "LapNIG",
        }
    }
}

impl Mixing {
    pub const fn label(self) -> &'static str {
        match self {
            Mixing::Dp => "DP",
            Mixing::Mfm => "MFM",
        }
    }
}

impl Title {
    pub const fn label(self) -> &'static str {
        match self {
            Title::Galaxy => "Galaxy",
            Title::Tutorial => "Tutorial",
        }
    }
}

impl fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Mixing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
