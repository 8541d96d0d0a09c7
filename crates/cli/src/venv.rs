// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Virtual environment activation.
//!
//! Activation is applied to the lint tool's process rather than to our own:
//! `VIRTUAL_ENV` points at the environment, its executable directory is
//! prepended to `PATH`, and `PYTHONHOME` is cleared.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::env::names;
use crate::error::{Error, Result};

/// Executable directory inside an environment.
pub fn bin_dir(venv: &Path) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts")
    } else {
        venv.join("bin")
    }
}

/// Child-process environment for running a tool inside a virtual environment.
#[derive(Debug, Clone)]
pub struct Activation {
    /// Environment directory; `None` when it was missing and not required.
    venv: Option<PathBuf>,
    /// PATH handed to the child, activated or inherited.
    search_path: Option<OsString>,
}

impl Activation {
    /// Activate `venv` on top of this process's PATH.
    pub fn activate(venv: &Path, required: bool) -> Result<Self> {
        Self::with_inherited_path(venv, required, std::env::var_os(names::PATH))
    }

    /// Activate `venv` on top of an explicit inherited PATH.
    pub fn with_inherited_path(
        venv: &Path,
        required: bool,
        inherited: Option<OsString>,
    ) -> Result<Self> {
        if !venv.is_dir() {
            if required {
                return Err(Error::EnvironmentNotFound(venv.to_path_buf()));
            }
            tracing::warn!(
                "environment {} not found, using inherited PATH",
                venv.display()
            );
            return Ok(Self {
                venv: None,
                search_path: inherited,
            });
        }

        let mut dirs = vec![bin_dir(venv)];
        if let Some(inherited) = &inherited {
            dirs.extend(std::env::split_paths(inherited));
        }
        let search_path = std::env::join_paths(dirs).map_err(|e| {
            Error::Internal(format!("cannot build PATH for {}: {e}", venv.display()))
        })?;

        tracing::debug!("activated environment {}", venv.display());
        Ok(Self {
            venv: Some(venv.to_path_buf()),
            search_path: Some(search_path),
        })
    }

    /// The activated environment, if one was found.
    pub fn venv(&self) -> Option<&Path> {
        self.venv.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.venv.is_some()
    }

    /// PATH the child process will see.
    pub fn search_path(&self) -> Option<&OsStr> {
        self.search_path.as_deref()
    }

    /// Apply the activation to a command's environment.
    pub fn apply(&self, cmd: &mut Command) {
        if let Some(venv) = &self.venv {
            cmd.env(names::VIRTUAL_ENV, venv);
            cmd.env_remove(names::PYTHONHOME);
        }
        if let Some(path) = &self.search_path {
            cmd.env(names::PATH, path);
        }
    }

    /// Resolve `tool` to an executable file.
    ///
    /// Names containing a path separator are taken relative to `root`;
    /// bare names are searched for on the activated PATH.
    pub fn resolve_tool(&self, tool: &str, root: &Path) -> Option<PathBuf> {
        let as_path = Path::new(tool);
        if as_path.components().count() > 1 || as_path.is_absolute() {
            let candidate = root.join(as_path);
            return is_executable(&candidate).then_some(candidate);
        }

        let search_path = self.search_path.as_ref()?;
        std::env::split_paths(search_path).find_map(|dir| {
            executable_names(tool)
                .into_iter()
                .map(|name| dir.join(name))
                .find(|candidate| is_executable(candidate))
        })
    }
}

fn executable_names(tool: &str) -> Vec<String> {
    if cfg!(windows) && Path::new(tool).extension().is_none() {
        ["exe", "cmd", "bat"]
            .iter()
            .map(|ext| format!("{tool}.{ext}"))
            .collect()
    } else {
        vec![tool.to_string()]
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "venv_tests.rs"]
mod tests;
