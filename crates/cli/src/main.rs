// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Venvlint CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use venvlint::Cli;
use venvlint::env::names;
use venvlint::error::ExitCode;

mod cmd_lint;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::VENVLINT_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let exit_code = match cmd_lint::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("venvlint: {}", e);
            match e.downcast_ref::<venvlint::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}
