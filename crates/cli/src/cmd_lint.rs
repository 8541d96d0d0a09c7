// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint command implementation.

use std::path::Path;

use venvlint::cli::Cli;
use venvlint::config::{self, Config};
use venvlint::discovery;
use venvlint::env;
use venvlint::error::ExitCode;
use venvlint::invoker::Invocation;
use venvlint::verbose::VerboseLogger;

/// Resolve config, activate the environment, run the tool.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut verbose = VerboseLogger::new(cli.verbose || env::debug_enabled());
    let cwd = std::env::current_dir()?;

    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let (config, base) = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            verbose.log(&format!("config: {}", path.display()));
            let base = path.parent().unwrap_or(Path::new(".")).to_path_buf();
            (config::load_with_warnings(path)?, base)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            verbose.log("config: none (using defaults)");
            (Config::default(), cwd.clone())
        }
    };

    let mut invocation = Invocation::from_config(&config, &base);
    cli.apply_overrides(&mut invocation, &cwd);

    let prepared = invocation.prepare()?;
    verbose.block(&prepared.to_string());

    if cli.dry_run {
        println!("{prepared}");
        return Ok(ExitCode::Success);
    }

    tracing::trace!("spawning {}", prepared.program().display());
    let outcome = prepared.run()?;
    verbose.log(&format!("{}: {outcome}", prepared.invocation().tool));

    Ok(outcome.exit_code())
}
