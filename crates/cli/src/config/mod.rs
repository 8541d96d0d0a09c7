// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles venvlint.toml parsing with version validation and unknown key warnings.
//! Every field is optional: an absent file and an empty `version = 1` file
//! produce the same defaults.

pub mod duration;
mod parse;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use parse::{collect_unknown_keys, warn_unknown_key};

/// Config file name searched for by discovery.
pub const CONFIG_FILE_NAME: &str = "venvlint.toml";

/// The only config version this build understands.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    project: Option<toml::Value>,

    #[serde(default)]
    environment: Option<toml::Value>,

    #[serde(default)]
    lint: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Project directory settings.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Isolated environment settings.
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Lint tool settings.
    #[serde(default)]
    pub lint: LintConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            project: ProjectConfig::default(),
            environment: EnvironmentConfig::default(),
            lint: LintConfig::default(),
        }
    }
}

/// `[project]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Directory to lint, relative to the config file's directory.
    #[serde(default = "ProjectConfig::default_root")]
    pub root: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
        }
    }
}

impl ProjectConfig {
    pub(crate) fn default_root() -> PathBuf {
        PathBuf::from(".")
    }
}

/// `[environment]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    /// Environment directory, relative to the project root.
    #[serde(default = "EnvironmentConfig::default_path")]
    pub path: PathBuf,

    /// Fail instead of falling back to the inherited PATH when missing.
    #[serde(default)]
    pub required: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            required: false,
        }
    }
}

impl EnvironmentConfig {
    pub(crate) fn default_path() -> PathBuf {
        PathBuf::from(".venv")
    }
}

/// `[lint]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct LintConfig {
    /// Tool name looked up on the activated PATH, or a path to it.
    #[serde(default = "LintConfig::default_tool")]
    pub tool: String,

    /// Arguments passed to the tool.
    #[serde(default = "LintConfig::default_args")]
    pub args: Vec<String>,

    /// Kill the tool if it runs longer than this.
    #[serde(default, deserialize_with = "duration::deserialize_option")]
    pub timeout: Option<Duration>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            tool: Self::default_tool(),
            args: Self::default_args(),
            timeout: None,
        }
    }
}

impl LintConfig {
    pub(crate) fn default_tool() -> String {
        "flake8".to_string()
    }

    pub(crate) fn default_args() -> Vec<String> {
        vec![".".to_string()]
    }
}

/// Load config from file path.
#[cfg(test)]
pub(crate) fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("cannot read {}: {e}", path.display()),
        path: Some(path.to_path_buf()),
    })?;

    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("cannot read {}: {e}", path.display()),
        path: Some(path.to_path_buf()),
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content, ignoring unknown keys silently.
#[cfg(test)]
pub(crate) fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible = parse_flexible(content, path)?;
    check_version(flexible.version, path)?;

    toml::from_str(content).map_err(|e| config_error(e, path))
}

/// Parse config from string content, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible = parse_flexible(content, path)?;
    check_version(flexible.version, path)?;

    for key in collect_unknown_keys(
        &flexible.unknown,
        flexible.project.as_ref(),
        flexible.environment.as_ref(),
        flexible.lint.as_ref(),
    ) {
        warn_unknown_key(path, &key);
    }

    toml::from_str(content).map_err(|e| config_error(e, path))
}

fn parse_flexible(content: &str, path: &Path) -> Result<FlexibleConfig> {
    toml::from_str(content).map_err(|e| {
        // A missing version is the most common mistake; name it directly.
        if e.message().contains("missing field `version`") {
            Error::Config {
                message: "missing required field: version".to_string(),
                path: Some(path.to_path_buf()),
            }
        } else {
            config_error(e, path)
        }
    })
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version == SUPPORTED_VERSION {
        return Ok(());
    }
    Err(Error::Config {
        message: format!(
            "unsupported config version {} (supported: {})\n  Upgrade venvlint to use this config.",
            version, SUPPORTED_VERSION
        ),
        path: Some(path.to_path_buf()),
    })
}

fn config_error(e: toml::de::Error, path: &Path) -> Error {
    Error::Config {
        message: format!("{}: {}", path.display(), e.message()),
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
