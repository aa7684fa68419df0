//! config::block — lenient extraction of `key: value` lines from a brace block.
//!
//! Purpose
//! -------
//! Turn one structured-text hyperparameter file (a single `{ ... }` block of
//! `<optional-prefix> <key>: <value>` lines) into a flat [`HyperparamMap`].
//!
//! Key behaviors
//! -------------
//! - Only the region strictly between the first `{` and the first `}` after
//!   it is read; text outside of it is ignored.
//! - A missing `{`, or a missing `}` after it, yields an empty mapping rather
//!   than an error.
//! - Within the region, each line holding a `:` becomes one entry; other
//!   lines (braces, comments, blanks) contribute nothing.
//!
//! Invariants & assumptions
//! ------------------------
//! - Blocks are single-level. A `{` inside the region means a nested block,
//!   which this format does not track; it is rejected with
//!   [`ConfigError::NestedBlock`] instead of being sliced into wrong keys.
//! - The key is the last whitespace-separated token before the first `:`,
//!   so prefixed lines such as `fixed_values mean: 0.0` yield `mean`.
//! - The value is everything after the first `:` with no trimming or type
//!   coercion; further colons stay in the value.
//! - Within one block the last duplicate line wins.
//!
//! Conventions
//! -----------
//! - `\r\n` line endings are accepted; the trailing `\r` is not part of the
//!   value.
//! - Line numbers in errors are 1-based and counted over the whole input.
use crate::config::{
    errors::{ConfigError, ConfigResult},
    hyperparams::HyperparamMap,
};

/// One `key: value` line of a block, borrowed from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValueEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Parse a single line into a [`KeyValueEntry`].
///
/// Returns `None` when the line holds no `:` or when nothing but whitespace
/// precedes the first `:` (there is no key token to take).
pub fn parse_entry(line: &str) -> Option<KeyValueEntry<'_>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (lhs, value) = line.split_once(':')?;
    let key = lhs.split_whitespace().last()?;
    Some(KeyValueEntry { key, value })
}

/// Return the significant `{ ... }` region of `text`, without the braces.
///
/// `Ok(None)` when either delimiter is absent.
///
/// Errors
/// ------
/// - [`ConfigError::NestedBlock`] if the region itself contains a `{`.
pub fn block_region(text: &str) -> ConfigResult<Option<&str>> {
    let Some(open) = text.find('{') else {
        return Ok(None);
    };
    let body_start = open + 1;
    let Some(close) = text[body_start..].find('}') else {
        return Ok(None);
    };
    let region = &text[body_start..body_start + close];

    if let Some(nested) = region.find('{') {
        let line = text[..body_start + nested].matches('\n').count() + 1;
        return Err(ConfigError::NestedBlock { line });
    }
    Ok(Some(region))
}

/// Extract the flat hyperparameter mapping of one structured-text block.
///
/// Parameters
/// ----------
/// - `text`: `&str`
///   Full content of one configuration file.
///
/// Returns
/// -------
/// `ConfigResult<HyperparamMap>`
///   - `Ok(map)` with one entry per distinct key found in the region (empty
///     if the braces are missing).
///   - `Err(ConfigError::NestedBlock)` for blocks nested beyond one level.
///
/// Examples
/// --------
/// ```rust
/// # use rust_mixture_density::config::extract_block;
/// let text = "fixed_values {\n  mean: 0.0\n  shape: 2.0\n}\n";
/// let map = extract_block(text).unwrap();
/// assert_eq!(map.get("mean"), Some(" 0.0"));
/// assert_eq!(map.get("shape"), Some(" 2.0"));
///
/// assert!(extract_block("no braces here: 1").unwrap().is_empty());
/// assert!(extract_block("{ a: 1 nested: { b: 2 } }").is_err());
/// ```
pub fn extract_block(text: &str) -> ConfigResult<HyperparamMap> {
    let mut map = HyperparamMap::new();
    let Some(region) = block_region(text)? else {
        return Ok(map);
    };

    for entry in region.split('\n').filter_map(parse_entry) {
        map.insert(entry.key, entry.value);
    }
    Ok(map)
}
