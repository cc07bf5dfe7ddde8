// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dump acquisition.
//!
//! Dumps come from stdin, a file, or an external dump tool run against a
//! pid. Process names are resolved to pids with an external lister.

pub mod process;

use std::fmt;
use std::path::PathBuf;

use crate::config::DumpConfig;
use crate::error::Result;
use crate::file_reader::DumpContent;

pub use process::{parse_pids, resolve_pids, run_dump_tool};

/// Where a search reads its dump from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpSource {
    Stdin,
    File(PathBuf),
    Pid(u32),
    /// Resolved to one pid per matching process.
    ProcessName(String),
}

impl DumpSource {
    /// Pick the source from the mutually exclusive inputs, in priority
    /// order: file, process name, pid, stdin. A file named `-` is stdin.
    pub fn select(file: Option<PathBuf>, process: Option<String>, pid: Option<u32>) -> Self {
        if let Some(path) = file {
            if path.as_os_str() == "-" {
                return DumpSource::Stdin;
            }
            return DumpSource::File(path);
        }
        if let Some(name) = process {
            return DumpSource::ProcessName(name);
        }
        match pid {
            Some(pid) => DumpSource::Pid(pid),
            None => DumpSource::Stdin,
        }
    }

    /// Resolve to the dumps to read, in order. Only process names
    /// resolve to more than one target.
    pub fn resolve(self, dump: &DumpConfig) -> Result<Vec<Target>> {
        match self {
            DumpSource::Stdin => Ok(vec![Target::Stdin]),
            DumpSource::File(path) => Ok(vec![Target::File(path)]),
            DumpSource::Pid(pid) => Ok(vec![Target::Pid(pid)]),
            DumpSource::ProcessName(name) => {
                let pids = resolve_pids(&dump.lister, &name)?;
                Ok(pids.into_iter().map(Target::Pid).collect())
            }
        }
    }
}

/// A single dump to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdin,
    File(PathBuf),
    Pid(u32),
}

impl Target {
    /// Read the raw dump.
    pub fn read(&self, dump: &DumpConfig) -> Result<DumpContent> {
        match self {
            Target::Stdin => DumpContent::read_from(std::io::stdin().lock()),
            Target::File(path) => DumpContent::read(path),
            Target::Pid(pid) => run_dump_tool(&dump.command, *pid).map(DumpContent::Owned),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Stdin => write!(f, "stdin"),
            Target::File(path) => write!(f, "{}", path.display()),
            Target::Pid(pid) => write!(f, "pid {}", pid),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
