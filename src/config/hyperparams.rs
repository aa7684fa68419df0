//! config::hyperparams — the flat hyperparameter mapping and its JSON record.
//!
//! Purpose
//! -------
//! Hold the key → raw-value mapping produced by the block extractor, merge
//! several of them with a last-writer-wins rule, and persist the merged
//! mapping as a flat JSON object that later runs reload for plot annotation.
//!
//! Key behaviors
//! -------------
//! - [`HyperparamMap::insert`] overwrites an existing key.
//! - [`merge`] folds maps in call order; later maps win on collisions.
//! - [`HyperparamMap::save_json`] / [`HyperparamMap::load_json`] write and read
//!   the record with `serde_json`. Keys are sorted so the record is stable
//!   across runs.
//!
//! Invariants & assumptions
//! ------------------------
//! - Values are stored exactly as extracted (leading spaces included); only
//!   [`HyperparamMap::require_f64`] trims before parsing.
//! - After the merge step the mapping is treated as read-only by callers.
//!
//! Testing notes
//! -------------
//! - Unit tests cover overwrite semantics, merge order, typed lookups and a
//!   save/load cycle through a temporary directory.
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::config::errors::{ConfigError, ConfigResult};

/// HyperparamMap — flat key → raw string hyperparameter mapping.
///
/// Fields
/// ------
/// - `entries`: `BTreeMap<String, String>`
///   Raw values keyed by hyperparameter name. Serialized transparently as a
///   JSON object.
///
/// Invariants
/// ----------
/// - Keys are unique; inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HyperparamMap {
    entries: BTreeMap<String, String>,
}

impl HyperparamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Raw value for `key`, exactly as extracted.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Raw value for `key`, or [`ConfigError::MissingKey`].
    pub fn require(&self, key: &str) -> ConfigResult<&str> {
        self.get(key).ok_or_else(|| ConfigError::MissingKey { key: key.to_string() })
    }

    /// Value for `key` parsed as `f64` after trimming surrounding whitespace.
    ///
    /// Errors
    /// ------
    /// - [`ConfigError::MissingKey`] if the key is absent.
    /// - [`ConfigError::InvalidNumber`] if the trimmed text is not a float.
    pub fn require_f64(&self, key: &str) -> ConfigResult<f64> {
        let raw = self.require(key)?;
        raw.trim().parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: raw.to_string(),
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, raw value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overwrite this map with every entry of `other`.
    pub fn extend_from(&mut self, other: &HyperparamMap) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Write the mapping to `path` as a flat JSON object.
    ///
    /// The file handle is scoped to this call and flushed before returning.
    ///
    /// Errors
    /// ------
    /// - [`ConfigError::Io`] if the file cannot be created or flushed.
    /// - [`ConfigError::Json`] if serialization fails.
    pub fn save_json(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let io_err =
            |e: std::io::Error| ConfigError::Io { path: path.to_path_buf(), message: e.to_string() };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self).map_err(|e| ConfigError::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }

    /// Read a mapping previously written by [`HyperparamMap::save_json`].
    ///
    /// Errors
    /// ------
    /// - [`ConfigError::Io`] if the file cannot be opened.
    /// - [`ConfigError::Json`] if the content is not a flat string → string
    ///   object.
    pub fn load_json(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| ConfigError::Io { path: path.to_path_buf(), message: e.to_string() })?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ConfigError::Json { path: path.to_path_buf(), message: e.to_string() })
    }
}

impl FromIterator<(String, String)> for HyperparamMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = HyperparamMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Merge maps in call order; for a key present in several maps the value of
/// the last one wins. Key sets need not match.
///
/// Examples
/// --------
/// ```rust
/// # use rust_mixture_density::config::{HyperparamMap, merge};
/// let mut a = HyperparamMap::new();
/// a.insert("shape", " 2.0");
/// a.insert("mean", " 0.0");
/// let mut b = HyperparamMap::new();
/// b.insert("shape", " 3.0");
///
/// let merged = merge([&a, &b]);
/// assert_eq!(merged.get("shape"), Some(" 3.0"));
/// assert_eq!(merged.get("mean"), Some(" 0.0"));
/// ```
pub fn merge<'a, I>(maps: I) -> HyperparamMap
where
    I: IntoIterator<Item = &'a HyperparamMap>,
{
    maps.into_iter().fold(HyperparamMap::new(), |mut acc, map| {
        acc.extend_from(map);
        acc
    })
}
