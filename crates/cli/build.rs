// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts should panic on failure — there is no meaningful recovery.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: config file location.
pub const VENVLINT_CONFIG: &str = "VENVLINT_CONFIG";
/// Environment variable: enables verbose output.
pub const VENVLINT_DEBUG: &str = "VENVLINT_DEBUG";
/// Environment variable: configures tracing log filter.
pub const VENVLINT_LOG: &str = "VENVLINT_LOG";
/// Environment variable: active virtual environment, set for the lint tool.
pub const VIRTUAL_ENV: &str = "VIRTUAL_ENV";
/// Environment variable: executable search path.
pub const PATH: &str = "PATH";
/// Environment variable: interpreter home, cleared on activation.
pub const PYTHONHOME: &str = "PYTHONHOME";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
