//! config — structured-text hyperparameter extraction, merging and persistence.
//!
//! Purpose
//! -------
//! Recover the hyperparameter values a sampler run was configured with from
//! its human-authored structured-text files (one brace block of
//! `key: value` lines per file), merge the hierarchy and mixing files into one
//! flat mapping, and persist that mapping as a JSON record for annotation.
//!
//! Key behaviors
//! -------------
//! - [`extract_block`] parses one file's text into a [`HyperparamMap`],
//!   leniently: missing braces give an empty mapping.
//! - [`merge`] folds mappings in order with last-writer-wins.
//! - [`convert_config_files`] is the explicit file → JSON initialization
//!   step; [`HyperparamMap::load_json`] reads the record back.
//!
//! Invariants & assumptions
//! ------------------------
//! - Blocks are single-level; nested `{` is reported as
//!   [`ConfigError::NestedBlock`].
//! - Values are raw strings; numeric interpretation happens only on demand
//!   via [`HyperparamMap::require_f64`].
//!
//! Conventions
//! -----------
//! - The hierarchy file is merged first and the mixing file second, so a
//!   mixing-level key overrides a hierarchy-level key of the same name.
//!
//! Downstream usage
//! ----------------
//! - The CLI converts files when config paths are given, then reloads the
//!   record and hands it to `plot::annotation`.
//!
//! Testing notes
//! -------------
//! - [`block`] pins the parsing rules and the nested-brace rejection;
//!   [`hyperparams`] covers merge order and JSON persistence; [`convert`]
//!   runs the file-level conversion against temp files.

pub mod block;
pub mod convert;
pub mod errors;
pub mod hyperparams;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::block::{KeyValueEntry, extract_block, parse_entry};
pub use self::convert::{convert_config_files, read_block_file};
pub use self::errors::{ConfigError, ConfigResult};
pub use self::hyperparams::{HyperparamMap, merge};

pub mod prelude {
    pub use super::block::extract_block;
    pub use super::convert::convert_config_files;
    pub use super::errors::{ConfigError, ConfigResult};
    pub use super::hyperparams::{HyperparamMap, merge};
}
