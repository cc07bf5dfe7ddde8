// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic side channel.
//!
//! Writes counts and per-dump headers to stderr so they never mix with the
//! matched threads on stdout. Silenced with `--quiet`.

/// Diagnostic writer. Writes to stderr unless quiet.
pub struct Diagnostics {
    quiet: bool,
}

impl Diagnostics {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print the match count for one dump.
    pub fn found(&self, count: usize) {
        if !self.quiet {
            eprintln!("{}", found_message(count));
        }
    }

    /// Print a header naming the dump that follows.
    pub fn section(&self, label: &str) {
        if !self.quiet {
            eprintln!("{}", section_header(label));
        }
    }
}

/// `Found N threads.`
pub fn found_message(count: usize) -> String {
    format!("Found {} threads.", count)
}

/// `==> label <==`
pub fn section_header(label: &str) -> String {
    format!("==> {} <==", label)
}

#[cfg(test)]
#[path = "diag_tests.rs"]
mod tests;
