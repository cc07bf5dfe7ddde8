// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External commands: the dump tool and the process lister.

use std::process::{Command, Output};

use crate::error::{Error, Result};

/// Run `command` with `arg` appended and capture its output.
fn run(command: &[String], arg: &str) -> Result<(String, Output)> {
    let command_line = format!("{} {}", command.join(" "), arg);
    let Some((program, args)) = command.split_first() else {
        return Err(Error::Spawn {
            command: command_line,
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
        });
    };

    tracing::debug!("running `{}`", command_line);
    let output = Command::new(program)
        .args(args)
        .arg(arg)
        .output()
        .map_err(|source| Error::Spawn {
            command: command_line.clone(),
            source,
        })?;
    Ok((command_line, output))
}

/// Run the dump tool against `pid` and return its stdout.
pub fn run_dump_tool(command: &[String], pid: u32) -> Result<Vec<u8>> {
    let (command_line, output) = run(command, &pid.to_string())?;
    if !output.status.success() {
        return Err(Error::DumpFailed {
            command: command_line,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(output.stdout)
}

/// Resolve a process name to pids with the lister command.
///
/// Fails with [`Error::NoProcess`] when nothing but this process matches.
pub fn resolve_pids(lister: &[String], name: &str) -> Result<Vec<u32>> {
    let (command_line, output) = run(lister, name)?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    // pgrep exits 1 with empty output when nothing matched.
    if !output.status.success() && !stdout.trim().is_empty() {
        return Err(Error::DumpFailed {
            command: command_line,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let pids = parse_pids(&stdout, std::process::id());
    if pids.is_empty() {
        return Err(Error::NoProcess {
            name: name.to_string(),
        });
    }
    tracing::debug!("resolved {:?} to pids {:?}", name, pids);
    Ok(pids)
}

/// Extract pids from lister output.
///
/// Takes the first whitespace-separated token of each line, so both
/// `pgrep` (pid only) and `jps -l` (pid then name) output work. Skips
/// `own_pid` and duplicates, keeping first-seen order.
pub fn parse_pids(stdout: &str, own_pid: u32) -> Vec<u32> {
    let mut pids = Vec::new();
    for line in stdout.lines() {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        match token.parse::<u32>() {
            Ok(pid) if pid == own_pid || pids.contains(&pid) => {}
            Ok(pid) => pids.push(pid),
            Err(_) => tracing::warn!("ignoring non-numeric lister output: {:?}", line),
        }
    }
    pids
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
