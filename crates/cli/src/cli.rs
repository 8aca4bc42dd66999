// SPDX-License-Identifier: MIT

//! Action input parsing with clap derive.
//!
//! Every input doubles as a flag and an environment binding, matching how
//! the GitHub Actions runner delivers `with:` inputs (`INPUT_*` variables).
//! Constructing the full configuration once at startup keeps the rest of
//! the crate free of process-environment reads.

use std::path::PathBuf;

use clap::Parser;

/// Install a pinned ruff release and run it against the repository
#[derive(Debug, Parser)]
#[command(name = "ruff-action")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Arguments forwarded to ruff, shell-style quoting honored
    #[arg(long, env = "INPUT_ARGS", default_value = "")]
    pub args: String,

    /// Files or directories to lint when no changed-files list is in play
    #[arg(long, env = "INPUT_SRC", default_value = "")]
    pub src: String,

    /// Ruff version to install: `0.4.9` pins, `>=0.4` is a raw specifier,
    /// empty installs the latest release
    #[arg(long, env = "INPUT_VERSION", default_value = "")]
    pub ruff_version: String,

    /// Resolve the version from the pyproject.toml in the working directory
    #[arg(
        long,
        env = "INPUT_USE_PYPROJECT",
        default_value = "false",
        value_parser = action_bool,
        action = clap::ArgAction::Set,
        num_args = 1,
    )]
    pub use_pyproject: bool,

    /// Precomputed changed-files list (whitespace separated)
    #[arg(long, env = "CHANGED_FILES", default_value = "")]
    pub changed_files: String,

    /// Restrict the run to the changed-files list
    #[arg(
        long,
        env = "CHANGED_FILES_ENABLED",
        default_value = "false",
        value_parser = action_bool,
        action = clap::ArgAction::Set,
        num_args = 1,
    )]
    pub changed_files_enabled: bool,

    /// Ruff config file, or a directory to probe for one
    #[arg(long, env = "CONFIG_PATH", default_value = "/")]
    pub config_path: PathBuf,

    /// Ignore any discovered config and run with ruff's built-in defaults
    #[arg(
        long,
        env = "USE_ISOLATED",
        default_value = "false",
        value_parser = action_bool,
        action = clap::ArgAction::Set,
        num_args = 1,
    )]
    pub isolated: bool,

    /// Working directory for the pip and ruff subprocesses
    #[arg(long, env = "GITHUB_ACTION_PATH")]
    pub action_path: Option<PathBuf>,
}

/// Parse a GitHub Actions boolean: the literal `true` is true, anything
/// else (including `false`, `1`, `yes`) is false. Never an error.
fn action_bool(value: &str) -> Result<bool, std::convert::Infallible> {
    Ok(value == "true")
}

impl Cli {
    /// Directory both subprocesses run in.
    pub fn working_dir(&self) -> PathBuf {
        match &self.action_path {
            Some(path) => path.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// The file selection forwarded to ruff: a non-empty changed-files
    /// list wins over `src`.
    pub fn file_selection(&self) -> &str {
        if self.changed_files.is_empty() {
            &self.src
        } else {
            &self.changed_files
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
