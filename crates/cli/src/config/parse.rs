// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unknown-key detection for configuration.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

const KNOWN_PROJECT_KEYS: &[&str] = &["root"];
const KNOWN_ENVIRONMENT_KEYS: &[&str] = &["path", "required"];
const KNOWN_LINT_KEYS: &[&str] = &["tool", "args", "timeout"];

/// Collect dotted names of keys venvlint does not understand.
///
/// `unknown` holds the top-level keys left over after the known tables were
/// captured, so every entry in it is reported.
pub(super) fn collect_unknown_keys(
    unknown: &BTreeMap<String, toml::Value>,
    project: Option<&toml::Value>,
    environment: Option<&toml::Value>,
    lint: Option<&toml::Value>,
) -> BTreeSet<String> {
    let mut keys: BTreeSet<String> = unknown.keys().cloned().collect();

    for (table, value, known) in [
        ("project", project, KNOWN_PROJECT_KEYS),
        ("environment", environment, KNOWN_ENVIRONMENT_KEYS),
        ("lint", lint, KNOWN_LINT_KEYS),
    ] {
        let Some(toml::Value::Table(t)) = value else {
            continue;
        };
        for key in t.keys() {
            if !known.contains(&key.as_str()) {
                keys.insert(format!("{table}.{key}"));
            }
        }
    }

    keys
}

/// Print a warning for an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    tracing::debug!("ignoring unknown config key {key}");
    eprintln!(
        "venvlint: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}
