// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint tool invocation.
//!
//! Runs the configured tool from the project directory under the activated
//! environment and maps its exit status: zero passes, anything else
//! (including death by signal) fails. The tool's stdio is inherited, so its
//! output reaches the terminal untouched.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::{Error, ExitCode, Result};
use crate::venv::Activation;

/// Interval between exit checks while a timeout is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Everything needed to run the lint tool once.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Directory the tool runs in.
    pub root: PathBuf,
    /// Environment directory; relative paths resolve against `root`.
    pub venv: PathBuf,
    /// Fail when `venv` is missing instead of using the inherited PATH.
    pub require_venv: bool,
    pub tool: String,
    pub args: Vec<String>,
    pub timeout: Option<Duration>,
}

impl Invocation {
    /// Build an invocation from config, resolving the project root against `base`.
    pub fn from_config(config: &Config, base: &Path) -> Self {
        Self {
            // Collecting components drops interior `.` segments.
            root: base.join(&config.project.root).components().collect(),
            venv: config.environment.path.clone(),
            require_venv: config.environment.required,
            tool: config.lint.tool.clone(),
            args: config.lint.args.clone(),
            timeout: config.lint.timeout,
        }
    }

    /// Environment directory with `root` applied.
    pub fn venv_dir(&self) -> PathBuf {
        self.root.join(&self.venv)
    }

    /// Check the project directory, activate the environment and find the tool.
    pub fn prepare(&self) -> Result<PreparedLint> {
        if !self.root.is_dir() {
            return Err(Error::ProjectNotFound(self.root.clone()));
        }

        let activation = Activation::activate(&self.venv_dir(), self.require_venv)?;
        let program = activation
            .resolve_tool(&self.tool, &self.root)
            .ok_or_else(|| Error::ToolNotFound {
                tool: self.tool.clone(),
            })?;
        tracing::debug!("resolved {} to {}", self.tool, program.display());

        Ok(PreparedLint {
            invocation: self.clone(),
            activation,
            program,
        })
    }
}

/// An invocation whose project, environment and tool have been resolved.
#[derive(Debug)]
pub struct PreparedLint {
    invocation: Invocation,
    activation: Activation,
    program: PathBuf,
}

impl PreparedLint {
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// The command that `run` spawns.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.invocation.args)
            .current_dir(&self.invocation.root);
        self.activation.apply(&mut cmd);
        cmd
    }

    /// Run the tool to completion and classify its exit status.
    pub fn run(&self) -> Result<LintOutcome> {
        let tool = &self.invocation.tool;
        let start = Instant::now();

        let mut child = self.command().spawn().map_err(|source| Error::Spawn {
            tool: tool.clone(),
            source,
        })?;

        let status = match wait_with_timeout(&mut child, self.invocation.timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                return Err(Error::Timeout {
                    tool: tool.clone(),
                    timeout: self.invocation.timeout.unwrap_or_default(),
                });
            }
            Err(source) => {
                return Err(Error::Spawn {
                    tool: tool.clone(),
                    source,
                });
            }
        };

        let outcome = LintOutcome::from_status(status);
        tracing::debug!("{tool} finished in {:?}: {outcome}", start.elapsed());
        Ok(outcome)
    }
}

impl fmt::Display for PreparedLint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inv = &self.invocation;
        writeln!(f, "root: {}", inv.root.display())?;
        match self.activation.venv() {
            Some(venv) => writeln!(f, "environment: {}", venv.display())?,
            None => writeln!(f, "environment: {} (not found)", inv.venv_dir().display())?,
        }
        writeln!(f, "tool: {}", self.program.display())?;
        writeln!(f, "args: {}", inv.args.join(" "))?;
        match inv.timeout {
            Some(t) => write!(f, "timeout: {t:?}"),
            None => write!(f, "timeout: none"),
        }
    }
}

/// Verdict of one lint run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintOutcome {
    Passed,
    /// `code` is `None` when the tool was killed by a signal.
    Failed { code: Option<i32> },
}

impl LintOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            LintOutcome::Passed
        } else {
            LintOutcome::Failed {
                code: status.code(),
            }
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, LintOutcome::Passed)
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            LintOutcome::Passed => ExitCode::Success,
            LintOutcome::Failed { .. } => ExitCode::LintFailed,
        }
    }
}

impl fmt::Display for LintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintOutcome::Passed => write!(f, "passed"),
            LintOutcome::Failed { code: Some(code) } => write!(f, "failed (exit {code})"),
            LintOutcome::Failed { code: None } => write!(f, "failed (terminated by signal)"),
        }
    }
}

/// Run the lint described by `invocation` and return its verdict.
pub fn run_lint(invocation: &Invocation) -> Result<LintOutcome> {
    invocation.prepare()?.run()
}

/// Wait for a child process with an optional timeout.
///
/// Returns `Ok(None)` if the timeout expired; the child has then been
/// killed and reaped.
pub fn wait_with_timeout(child: &mut Child, timeout: Option<Duration>) -> io::Result<Option<ExitStatus>> {
    let Some(timeout) = timeout else {
        return child.wait().map(Some);
    };

    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(Some(status)),
            Ok(None) => {}
            Err(e) => {
                child.kill().ok();
                child.wait().ok();
                return Err(e);
            }
        }
        if start.elapsed() >= timeout {
            child.kill().ok();
            child.wait().ok();
            return Ok(None);
        }
        std::thread::sleep(POLL_INTERVAL.min(timeout));
    }
}

#[cfg(test)]
#[path = "invoker_tests.rs"]
mod tests;
