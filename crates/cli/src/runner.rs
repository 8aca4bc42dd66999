// SPDX-License-Identifier: MIT

//! Subprocess orchestration: pip install, then the ruff run itself.
//!
//! Strictly sequential and blocking. The install step captures output and
//! only replays it on failure; the ruff step relays output verbatim and
//! its exit code becomes the action's own, so lint findings (exit 1) are
//! not distinguished from crashes.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::cli::Cli;
use crate::discovery;
use crate::error::{Error, Result};
use crate::shell;
use crate::version;

/// Exit code used when a child dies without one (killed by a signal).
const SIGNAL_EXIT: i32 = 1;

/// Run the whole action pipeline and return the process exit code.
pub fn run(cli: &Cli) -> Result<i32> {
    if cli.changed_files_enabled && cli.changed_files.is_empty() {
        return Err(Error::NoChangedFiles);
    }

    let config = discovery::find_ruff_config(&cli.config_path);
    let config_args = discovery::config_args(config.as_deref(), cli.isolated);

    // The manifest is read from the process working directory (the checked
    // out workspace); subprocesses run in the action path.
    let specifier = version::resolve(&cli.ruff_version, cli.use_pyproject, Path::new("."))?;

    let cwd = cli.working_dir();
    install(&specifier, &cwd)?;
    run_ruff(cli, &config_args, &cwd)
}

/// Install the requested ruff release via pip.
fn install(specifier: &str, cwd: &Path) -> Result<()> {
    let requirement = format!("ruff{specifier}");
    println!("Installing {requirement}...");
    tracing::debug!(%requirement, "installing ruff");

    let output = Command::new("python")
        .args(["-m", "pip", "install", &requirement])
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| Error::Spawn {
            command: "python -m pip install".to_string(),
            source,
        })?;

    if output.status.success() {
        return Ok(());
    }

    print!("{}", String::from_utf8_lossy(&output.stdout));
    eprint!("{}", String::from_utf8_lossy(&output.stderr));
    Err(Error::InstallFailed {
        code: output.status.code().unwrap_or(SIGNAL_EXIT),
    })
}

/// Invoke ruff and forward its exit code verbatim.
fn run_ruff(cli: &Cli, config_args: &[OsString], cwd: &Path) -> Result<i32> {
    println!("Running ruff with arguments: {}", cli.args);
    tracing::debug!(args = %cli.args, files = %cli.file_selection(), "running ruff");

    let output = Command::new("ruff")
        .args(shell::split(&cli.args))
        .args(shell::split(cli.file_selection()))
        .args(config_args)
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| Error::Spawn {
            command: "ruff".to_string(),
            source,
        })?;

    print!("{}", String::from_utf8_lossy(&output.stdout));
    eprint!("{}", String::from_utf8_lossy(&output.stderr));
    Ok(output.status.code().unwrap_or(SIGNAL_EXIT))
}
