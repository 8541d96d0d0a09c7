// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::config::duration::parse_duration;
use crate::invoker::Invocation;

/// Run a linter inside a project's virtual environment and forward its verdict
#[derive(Parser, Debug)]
#[command(name = "venvlint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "VENVLINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project directory to lint
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Virtual environment directory (relative to the project directory)
    #[arg(long, value_name = "DIR")]
    pub venv: Option<PathBuf>,

    /// Lint tool to run
    #[arg(long, value_name = "NAME")]
    pub tool: Option<String>,

    /// Kill the tool after this long (e.g. 30s, 500ms, 5m)
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Print the resolved invocation and exit without running the tool
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Arguments for the lint tool, replacing the configured ones
    #[arg(last = true, value_name = "TOOL_ARGS")]
    pub tool_args: Vec<String>,
}

impl Cli {
    /// Apply command-line overrides on top of a config-derived invocation.
    ///
    /// `--root` is relative to `cwd`; `--venv` stays relative to the project
    /// directory, like the config value it replaces.
    pub fn apply_overrides(&self, invocation: &mut Invocation, cwd: &Path) {
        if let Some(root) = &self.root {
            invocation.root = cwd.join(root).components().collect();
        }
        if let Some(venv) = &self.venv {
            invocation.venv = venv.clone();
        }
        if let Some(tool) = &self.tool {
            invocation.tool = tool.clone();
        }
        if let Some(timeout) = self.timeout {
            invocation.timeout = Some(timeout);
        }
        if !self.tool_args.is_empty() {
            invocation.args = self.tool_args.clone();
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
