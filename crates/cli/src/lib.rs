// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run a linter inside a project's virtual environment and turn its result
//! into a process exit status.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod invoker;
pub mod venv;
pub mod verbose;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use invoker::{Invocation, LintOutcome, PreparedLint, run_lint};
pub use venv::Activation;
pub use verbose::VerboseLogger;
