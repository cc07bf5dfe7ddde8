// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for stackgrep.toml.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Find stackgrep.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        current = current.parent()?;
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
