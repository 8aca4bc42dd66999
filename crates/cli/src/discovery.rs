//! Ruff config discovery.
//!
//! The `config_path` input names either the config file itself or a
//! directory to probe for the conventional filenames.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Filenames probed inside a directory, in priority order.
const CONFIG_FILES: [&str; 2] = ["ruff.toml", "pyproject.toml"];

/// Locate a ruff config under `path`.
///
/// A path that is itself a file is returned as-is; otherwise the
/// conventional filenames are probed inside it.
pub fn find_ruff_config(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }

    CONFIG_FILES
        .iter()
        .map(|name| path.join(name))
        .find(|candidate| candidate.is_file())
}

/// Build the config-related arguments for the ruff invocation.
///
/// Isolated mode suppresses any located config and forces ruff's built-in
/// defaults.
pub fn config_args(config: Option<&Path>, isolated: bool) -> Vec<OsString> {
    if isolated {
        return vec![OsString::from("--isolated")];
    }

    match config {
        Some(path) => vec![OsString::from("--config"), path.into()],
        None => Vec::new(),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
