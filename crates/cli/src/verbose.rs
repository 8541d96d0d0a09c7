// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes `[verbose]` prefixed lines to stderr. Enabled with `--verbose`
//! or `VENVLINT_DEBUG=1`. Never writes to stdout, which belongs to the
//! lint tool.

use std::io::{self, Write};

/// Verbose output logger.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger<W: Write = io::Stderr> {
    enabled: bool,
    out: W,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self::with_writer(enabled, io::stderr())
    }
}

impl<W: Write> VerboseLogger<W> {
    pub fn with_writer(enabled: bool, out: W) -> Self {
        Self { enabled, out }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line.
    pub fn log(&mut self, msg: &str) {
        if self.enabled {
            // Diagnostics must never fail the run.
            let _ = writeln!(self.out, "[verbose] {}", msg);
        }
    }

    /// Print each line of a multi-line block.
    pub fn block(&mut self, text: &str) {
        for line in text.lines() {
            self.log(line);
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
