// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by venvlint or set for the lint tool.

/// Generated variable name constants.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Whether `VENVLINT_DEBUG` asks for verbose output.
pub fn debug_enabled() -> bool {
    std::env::var(names::VENVLINT_DEBUG).is_ok_and(|v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
