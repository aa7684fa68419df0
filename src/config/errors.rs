//! config::errors — error type for hyperparameter extraction and persistence.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the config extractor: block
//! parsing, hyperparameter lookups at annotation time, and the JSON record
//! that carries the merged mapping between runs.
//!
//! Key behaviors
//! -------------
//! - Define [`ConfigResult`] and [`ConfigError`] as the canonical result and
//!   error types for everything under `config`.
//! - Attach human-readable `Display` messages that name the offending key,
//!   line, or path.
//! - Implement `From<ConfigError> for PyErr` when `python-bindings` is on.
//!
//! Invariants & assumptions
//! ------------------------
//! - A missing `{` or `}` is *not* an error; [`extract_block`] degrades to
//!   an empty mapping. Only nesting beyond one level is rejected.
//! - I/O and JSON variants own the path they failed on so that callers can
//!   report it without extra context.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `Display` messages embed their payloads.
//!
//! [`extract_block`]: crate::config::block::extract_block
use std::path::PathBuf;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type ConfigResult<T> = Result<T, ConfigError>;

/// ConfigError — failures of the config extractor and its JSON record.
///
/// Variants
/// --------
/// - `NestedBlock { line }`
///   A `{` was found inside the significant `{ ... }` region; `line` is the
///   1-based line of the input text that holds it.
/// - `MissingKey { key }`
///   A hyperparameter required for annotation is absent from the record.
/// - `InvalidNumber { key, value }`
///   A hyperparameter value could not be parsed as `f64` after trimming.
/// - `Io { path, message }`
///   Reading a config file or reading/writing the JSON record failed.
/// - `Json { path, message }`
///   The JSON record is malformed or not a flat string-to-string object.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    // ---- Parsing ----
    NestedBlock { line: usize },

    // ---- Lookup ----
    MissingKey { key: String },
    InvalidNumber { key: String, value: String },

    // ---- Persistence ----
    Io { path: PathBuf, message: String },
    Json { path: PathBuf, message: String },
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NestedBlock { line } => {
                write!(
                    f,
                    "Nested '{{' at line {line}: only single-level configuration blocks are supported."
                )
            }
            ConfigError::MissingKey { key } => {
                write!(f, "Hyperparameter '{key}' is missing from the record.")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "Hyperparameter '{key}' is not a number: {value:?}")
            }
            ConfigError::Io { path, message } => {
                write!(f, "I/O error on {}: {message}", path.display())
            }
            ConfigError::Json { path, message } => {
                write!(f, "Malformed hyperparameter record {}: {message}", path.display())
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ConfigError> for PyErr {
    fn from(err: ConfigError) -> PyErr {
        PyValueError::new_err(format!("ConfigError: {err}"))
    }
}
