//! Shared helpers for ruff-action specs.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[cfg(unix)]
use std::path::{Path, PathBuf};

use assert_cmd::Command;
pub use predicates::prelude::PredicateBooleanExt;

/// Action input variables scrubbed from every spec invocation.
const INPUT_VARS: [&str; 9] = [
    "INPUT_ARGS",
    "INPUT_SRC",
    "INPUT_VERSION",
    "INPUT_USE_PYPROJECT",
    "CHANGED_FILES",
    "CHANGED_FILES_ENABLED",
    "CONFIG_PATH",
    "USE_ISOLATED",
    "GITHUB_ACTION_PATH",
];

/// A `ruff-action` command with a hermetic environment: no Action inputs
/// leak in from the invoking shell.
pub fn action_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ruff-action").unwrap();
    for var in INPUT_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUFF_ACTION_LOG");
    cmd
}

/// Write an executable stub command into `dir`.
///
/// Specs point PATH at a directory of these so `python` and `ruff` are
/// under test control.
#[cfg(unix)]
pub fn write_stub(dir: &Path, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
