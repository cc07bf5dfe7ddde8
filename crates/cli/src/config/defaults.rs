// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "stackgrep.toml";

/// Supported config file version.
pub const CONFIG_VERSION: i64 = 1;

/// Default external commands.
pub mod commands {
    /// Dump tool; the pid is appended as the last argument.
    pub fn dump() -> Vec<String> {
        vec!["jstack".to_string()]
    }

    /// Process lister; the process name is appended as the last argument.
    pub fn lister() -> Vec<String> {
        vec!["pgrep".to_string(), "-f".to_string()]
    }
}
