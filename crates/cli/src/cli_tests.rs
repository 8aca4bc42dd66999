// SPDX-License-Identifier: MIT

//! Unit tests for action input parsing.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use clap::Parser;

use super::*;

fn parse(args: &[&str]) -> Cli {
    // try_parse_from avoids env fallback surprises aborting the test binary
    Cli::try_parse_from(std::iter::once("ruff-action").chain(args.iter().copied())).unwrap()
}

#[test]
fn defaults_are_empty_and_disabled() {
    let cli = parse(&[]);
    assert_eq!(cli.args, "");
    assert_eq!(cli.src, "");
    assert_eq!(cli.ruff_version, "");
    assert!(!cli.use_pyproject);
    assert_eq!(cli.changed_files, "");
    assert!(!cli.changed_files_enabled);
    assert_eq!(cli.config_path, PathBuf::from("/"));
    assert!(!cli.isolated);
    assert!(cli.action_path.is_none());
}

#[test]
fn action_bool_accepts_only_the_true_literal() {
    assert_eq!(action_bool("true"), Ok(true));
    assert_eq!(action_bool("false"), Ok(false));
    assert_eq!(action_bool("True"), Ok(false));
    assert_eq!(action_bool("1"), Ok(false));
    assert_eq!(action_bool("yes"), Ok(false));
    assert_eq!(action_bool(""), Ok(false));
}

#[test]
fn boolean_flags_take_a_value() {
    let cli = parse(&["--use-pyproject", "true", "--isolated", "false"]);
    assert!(cli.use_pyproject);
    assert!(!cli.isolated);
}

#[test]
fn file_selection_defaults_to_src() {
    let cli = parse(&["--src", "src/ tests/"]);
    assert_eq!(cli.file_selection(), "src/ tests/");
}

#[test]
fn changed_files_override_src() {
    let cli = parse(&["--src", "src/", "--changed-files", "a.py b.py"]);
    assert_eq!(cli.file_selection(), "a.py b.py");
}

#[test]
fn empty_changed_files_fall_back_to_src() {
    let cli = parse(&["--src", "src/", "--changed-files", ""]);
    assert_eq!(cli.file_selection(), "src/");
}

#[test]
fn explicit_action_path_is_the_working_dir() {
    let cli = parse(&["--action-path", "/opt/action"]);
    assert_eq!(cli.working_dir(), PathBuf::from("/opt/action"));
}

#[test]
fn working_dir_falls_back_to_current_dir() {
    let cli = parse(&[]);
    assert_eq!(cli.working_dir(), std::env::current_dir().unwrap());
}
