//! io — loading the sampler's tabular outputs.
//!
//! - [`load_column`]: observed data, one value per line.
//! - [`load_grid`]: evaluation grid as a validated [`Grid`](crate::density::Grid).
//! - [`load_density_matrix`]: per-draw log-densities as a validated
//!   [`DensityMatrix`](crate::density::DensityMatrix).

pub mod errors;
pub mod tables;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{IoError, IoResult};
pub use self::tables::{load_column, load_density_matrix, load_grid};
