//! Behavioral specs for stackgrep.toml.
//!
//! Tests that stackgrep correctly handles:
//! - Discovery from the working directory
//! - Patterns and flags merged from the file
//! - Invalid config (errors before any dump is read)

use crate::prelude::*;

/// Exclusions from the config file apply to every run
#[test]
fn config_not_patterns_apply() {
    let project = Project::empty();
    project.config("version = 1\n[search]\nnot = [\"frameB\"]\n");

    project
        .cmd()
        .arg("frame")
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with("T2\n"))
        .stderr("Found 1 threads.\n");
}

/// Config is discovered from a subdirectory up to the repository root
#[test]
fn config_discovered_from_subdirectory() {
    let project = Project::empty();
    project.config("version = 1\n[search]\nfull = true\n");
    project.file("sub/dir/.keep", "");

    project
        .cmd()
        .current_dir(project.path().join("sub/dir"))
        .arg("frameA")
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout("T1\n  state: RUNNABLE\n  > frameA\n    frameB\n");
}

/// Case sensitivity from the file is OR'd with the flag
#[test]
fn config_case_sensitive() {
    let project = Project::empty();
    project.config("version = 1\n[search]\ncase_sensitive = true\n");

    project
        .cmd()
        .arg("runnable")
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stderr("Found 0 threads.\n");
}

/// -C points at an explicit config file
#[test]
fn explicit_config_path() {
    let project = Project::empty();
    project.file("conf/custom.toml", "version = 1\n[search]\nnot = [\"T1\"]\n");

    project
        .cmd()
        .args(["-C", "conf/custom.toml", "frame"])
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stderr("Found 1 threads.\n");
}

/// STACKGREP_CONFIG is the environment form of -C
#[test]
fn config_from_environment() {
    let project = Project::empty();
    project.file("env.toml", "version = 1\n[search]\nnot = [\"T2\"]\n");

    project
        .cmd()
        .env("STACKGREP_CONFIG", project.path().join("env.toml"))
        .arg("frame")
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with("T1\n"))
        .stderr("Found 1 threads.\n");
}

/// Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let project = Project::empty();
    project.config("version = 1\nunknown_key = true\n");

    project
        .cmd()
        .arg("frame")
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("unknown field"));
}

/// Unsupported versions are errors
#[test]
fn wrong_version_fails() {
    let project = Project::empty();
    project.config("version = 7\n");

    project
        .cmd()
        .arg("frame")
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported version 7"));
}

/// A missing explicit config file is a configuration error
#[test]
fn missing_explicit_config_fails() {
    Project::empty()
        .cmd()
        .args(["-C", "nope.toml", "frame"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("nope.toml"));
}

/// Invalid patterns in the config file are configuration errors
#[test]
fn invalid_config_pattern_fails() {
    let project = Project::empty();
    project.config("version = 1\n[search]\nnot = [\"[\"]\n");

    project
        .cmd()
        .arg("frame")
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid pattern"));
}
