// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search configuration.
//!
//! [`SearchConfig`] is the immutable per-invocation input to the core. It is
//! assembled from command-line values merged over an optional
//! `stackgrep.toml` ([`FileConfig`]).

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Everything the parse/select/render pipeline needs to know.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Primary search term. Always part of the `or` set.
    pub primary: String,
    /// Required patterns; each must match name, state, or some stack line.
    pub and: Vec<String>,
    /// Optional patterns, not including the primary term.
    pub or: Vec<String>,
    /// Excluded patterns.
    pub not: Vec<String>,
    /// Line-highlight patterns. Empty means "use `or` and `and`".
    pub interest: Vec<String>,
    /// Print every stack line instead of collapsing uninteresting runs.
    pub full: bool,
    pub case_sensitive: bool,
}

impl SearchConfig {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            ..Default::default()
        }
    }

    /// The `or` set with the primary term injected first.
    pub fn or_patterns(&self) -> Vec<String> {
        let mut patterns = Vec::with_capacity(self.or.len() + 1);
        patterns.push(self.primary.clone());
        patterns.extend(self.or.iter().cloned());
        patterns
    }

    /// The interest set, seeded with the union of `or` and `and` when empty.
    pub fn interest_patterns(&self) -> Vec<String> {
        if !self.interest.is_empty() {
            return self.interest.clone();
        }
        let mut patterns = self.or_patterns();
        for pattern in &self.and {
            if !patterns.contains(pattern) {
                patterns.push(pattern.clone());
            }
        }
        patterns
    }

    /// Apply file-level settings. File patterns come before the ones
    /// already present, flags are OR'd.
    pub fn merge_file(mut self, file: &SearchSection) -> Self {
        self.and = prepend(&file.and, self.and);
        self.or = prepend(&file.or, self.or);
        self.not = prepend(&file.not, self.not);
        self.interest = prepend(&file.interest, self.interest);
        self.full |= file.full;
        self.case_sensitive |= file.case_sensitive;
        self
    }
}

fn prepend(file: &[String], cli: Vec<String>) -> Vec<String> {
    file.iter().cloned().chain(cli).collect()
}

/// Contents of `stackgrep.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Config format version (must be 1).
    pub version: i64,

    #[serde(default)]
    pub search: SearchSection,

    #[serde(default)]
    pub dump: DumpConfig,
}

/// `[search]` table: patterns and flags applied to every run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    pub and: Vec<String>,
    pub or: Vec<String>,
    pub not: Vec<String>,
    pub interest: Vec<String>,
    pub full: bool,
    pub case_sensitive: bool,
}

/// `[dump]` table: external commands used to acquire dumps.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DumpConfig {
    /// Dump tool command line; the pid is appended.
    #[serde(default = "defaults::commands::dump")]
    pub command: Vec<String>,

    /// Process lister command line; the process name is appended.
    #[serde(default = "defaults::commands::lister")]
    pub lister: Vec<String>,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            command: defaults::commands::dump(),
            lister: defaults::commands::lister(),
        }
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse(&content, path)
}

/// Parse config content. `path` is used for error messages only.
pub fn parse(content: &str, path: &Path) -> Result<FileConfig> {
    let config: FileConfig = toml::from_str(content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    if config.version != defaults::CONFIG_VERSION {
        return Err(Error::Config {
            path: path.to_path_buf(),
            message: format!(
                "unsupported version {} (expected {})",
                config.version,
                defaults::CONFIG_VERSION
            ),
        });
    }
    for (key, command) in [
        ("dump.command", &config.dump.command),
        ("dump.lister", &config.dump.lister),
    ] {
        if command.is_empty() {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: format!("{} must not be empty", key),
            });
        }
    }

    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
