//! config::convert — explicit conversion of config files into the JSON record.
//!
//! Reads each structured-text file, extracts its block, merges the results in
//! the order given, and writes the merged mapping as the persisted JSON
//! record. This is an initialization step the caller runs on purpose; nothing
//! in the crate performs it implicitly.
use std::{fs, path::Path};

use tracing::{debug, info};

use crate::config::{
    block::extract_block,
    errors::{ConfigError, ConfigResult},
    hyperparams::{HyperparamMap, merge},
};

/// Read one structured-text file and extract its block.
///
/// Errors
/// ------
/// - [`ConfigError::Io`] if the file cannot be read as UTF-8.
/// - [`ConfigError::NestedBlock`] from [`extract_block`].
pub fn read_block_file(path: impl AsRef<Path>) -> ConfigResult<HyperparamMap> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io { path: path.to_path_buf(), message: e.to_string() })?;
    let map = extract_block(&text)?;
    if map.is_empty() {
        debug!(path = %path.display(), "no key-value entries found in config block");
    }
    Ok(map)
}

/// Convert `sources` into a single JSON record at `json_out`.
///
/// Parameters
/// ----------
/// - `sources`: paths of the structured-text files, in merge order (later
///   files override earlier ones on shared keys).
/// - `json_out`: destination of the flat JSON record.
///
/// Returns
/// -------
/// The merged mapping that was written.
pub fn convert_config_files<P, Q>(sources: &[P], json_out: Q) -> ConfigResult<HyperparamMap>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let maps = sources.iter().map(read_block_file).collect::<ConfigResult<Vec<_>>>()?;
    let merged = merge(&maps);
    merged.save_json(json_out.as_ref())?;
    info!(
        sources = sources.len(),
        keys = merged.len(),
        out = %json_out.as_ref().display(),
        "wrote hyperparameter record"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The hierarchy + mixing conversion, its merge order and its JSON output.
    // - Propagation of read failures.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Converting a LapNIG file and an MFM file yields the union of their keys
    // in the JSON record, with the second file winning on shared keys.
    //
    // Given
    // -----
    // - lapnig_fixed.asciipb with mean/var/shape/scale.
    // - mfm_fixed.asciipb with lambda/gamma and a conflicting `shape`.
    //
    // Expect
    // ------
    // - The returned map and the reloaded record agree; shape comes from MFM.
    fn convert_config_files_merges_in_order_and_persists() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let lapnig = dir.path().join("lapnig_fixed.asciipb");
        let mfm = dir.path().join("mfm_fixed.asciipb");
        let out = dir.path().join("hypers_vals.local.json");
        fs::write(&lapnig, "fixed_values {\n  mean: 0.0\n  var: 10.0\n  shape: 2.0\n  scale: 2.0\n}\n")
            .expect("write lapnig");
        fs::write(&mfm, "fixed_value {\n  lambda: 3.0\n  gamma: 1.0\n  shape: 7.0\n}\n")
            .expect("write mfm");

        // Act
        let merged = convert_config_files(&[&lapnig, &mfm], &out).expect("convert");
        let reloaded = HyperparamMap::load_json(&out).expect("reload");

        // Assert
        assert_eq!(merged, reloaded);
        assert_eq!(merged.len(), 6);
        assert_eq!(merged.get("shape"), Some(" 7.0"));
        assert_eq!(merged.get("lambda"), Some(" 3.0"));
    }

    #[test]
    // Purpose
    // -------
    // A missing source aborts the conversion with an Io error and writes
    // nothing.
    fn convert_config_files_missing_source_returns_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing.asciipb");
        let out = dir.path().join("out.json");

        let result = convert_config_files(&[&missing], &out);

        assert!(matches!(result, Err(ConfigError::Io { .. })), "got {result:?}");
        assert!(!out.exists());
    }
}
