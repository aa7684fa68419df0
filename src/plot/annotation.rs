//! plot::annotation — caption and hyperparameter text box for a run.
//!
//! Key behaviors
//! -------------
//! - LapNIG runs list `mean, var, shape, scale, mh_mean_var,
//!   mh_log_scale_var`; MFM runs append `lambda, gamma`.
//! - One `"<key>: <value>"` line per key, values trimmed of the whitespace
//!   the config extractor keeps.
//! - NNIG + DP yields an empty string and no box is drawn.
use crate::{
    config::{errors::ConfigResult, hyperparams::HyperparamMap},
    labels::{Hierarchy, Mixing, Title},
};

pub const LAPNIG_KEYS: [&str; 6] =
    ["mean", "var", "shape", "scale", "mh_mean_var", "mh_log_scale_var"];

pub const MFM_KEYS: [&str; 2] = ["lambda", "gamma"];

/// Keys shown in the annotation box for this run, in display order.
pub fn annotation_keys(hierarchy: Hierarchy, mixing: Mixing) -> Vec<&'static str> {
    let mut keys = Vec::new();
    if hierarchy == Hierarchy::LapNig {
        keys.extend(LAPNIG_KEYS);
    }
    if mixing == Mixing::Mfm {
        keys.extend(MFM_KEYS);
    }
    keys
}

/// Build the annotation text from the persisted hyperparameter record.
///
/// Errors
/// ------
/// - [`ConfigError::MissingKey`](crate::config::ConfigError::MissingKey) for
///   the first required key absent from `hypers`.
pub fn annotation_text(
    hierarchy: Hierarchy, mixing: Mixing, hypers: &HyperparamMap,
) -> ConfigResult<String> {
    let lines = annotation_keys(hierarchy, mixing)
        .into_iter()
        .map(|key| hypers.require(key).map(|value| format!("{key}: {}", value.trim())))
        .collect::<ConfigResult<Vec<String>>>()?;
    Ok(lines.join("\n"))
}

/// Chart caption `"<title>_<hierarchy>_<mixing>"`.
pub fn plot_caption(title: Title, hierarchy: Hierarchy, mixing: Mixing) -> String {
    format!("{title}_{hierarchy}_{mixing}")
}
