// SPDX-License-Identifier: MIT

//! ruff-action CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use ruff_action::cli::Cli;
use ruff_action::{annotate, runner};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("RUFF_ACTION_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            annotate::error(&e.to_string());
            match e.downcast_ref::<ruff_action::Error>() {
                Some(err) => err.exit_code(),
                None => 1,
            }
        }
    };

    std::process::exit(exit_code);
}

fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();
    Ok(runner::run(&cli)?)
}
