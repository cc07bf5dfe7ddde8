//! Behavioral specs for thread selection.

use crate::prelude::*;

// =============================================================================
// PRIMARY PATTERN
// =============================================================================

/// The primary pattern alone selects threads with a matching stack line
#[test]
fn primary_pattern_selects_matching_thread() {
    Project::empty()
        .cmd()
        .arg("frameA")
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout("T1\n  state: RUNNABLE\n    frameA\n    ...\n")
        .stderr("Found 1 threads.\n");
}

/// Matching is case-insensitive by default
#[test]
fn matching_ignores_case_by_default() {
    Project::empty()
        .cmd()
        .arg("waiting")
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with("T2\n"))
        .stderr("Found 1 threads.\n");
}

/// -s makes every pattern set case-sensitive
#[test]
fn case_sensitive_flag() {
    Project::empty()
        .cmd()
        .args(["-s", "waiting"])
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout("")
        .stderr("Found 0 threads.\n");
}

// =============================================================================
// NOT / AND / OR
// =============================================================================

/// A not-pattern matching every stack line excludes every thread
#[test]
fn not_pattern_excludes_everything() {
    Project::empty()
        .cmd()
        .args(["frame", "-x", "frame"])
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout("")
        .stderr("Found 0 threads.\n");
}

/// A thread must satisfy every --and pattern and then some --or pattern
#[test]
fn and_then_or() {
    Project::empty()
        .cmd()
        .args(["frame", "-a", "RUNNABLE", "-o", "frameC"])
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with("T1\n"))
        .stdout(predicates::str::contains("T2").not())
        .stderr("Found 1 threads.\n");
}

/// Threads sharing a frame are told apart by what they are doing
#[test]
fn jstack_lock_contention() {
    let dump = fixture_text("jstack.txt");

    Project::empty()
        .cmd()
        .arg("OrderService")
        .write_stdin(dump.clone())
        .assert()
        .success()
        .stdout(predicates::str::contains("http-nio-8080-exec-1"))
        .stdout(predicates::str::contains("http-nio-8080-exec-2"))
        .stderr("Found 2 threads.\n");

    Project::empty()
        .cmd()
        .args(["OrderService", "-x", "waiting to lock"])
        .write_stdin(dump.clone())
        .assert()
        .success()
        .stdout(predicates::str::contains("http-nio-8080-exec-2"))
        .stdout(predicates::str::contains("http-nio-8080-exec-1").not())
        .stderr("Found 1 threads.\n");

    Project::empty()
        .cmd()
        .args(["OrderService", "-a", "State: BLOCKED"])
        .write_stdin(dump)
        .assert()
        .success()
        .stdout(predicates::str::contains("http-nio-8080-exec-1"))
        .stdout(predicates::str::contains("http-nio-8080-exec-2").not())
        .stderr("Found 1 threads.\n");
}

/// Thread names are searchable, and the preamble never is
#[test]
fn preamble_is_never_a_thread() {
    Project::empty()
        .cmd()
        .arg("Full thread dump")
        .write_stdin(fixture_text("jstack.txt"))
        .assert()
        .success()
        .stdout("")
        .stderr("Found 0 threads.\n");

    Project::empty()
        .cmd()
        .arg("^\"GC Thread")
        .write_stdin(fixture_text("jstack.txt"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with("\"GC Thread#0\""))
        .stderr("Found 1 threads.\n");
}

// =============================================================================
// ERRORS
// =============================================================================

/// Invalid regex syntax is a configuration error
#[test]
fn invalid_pattern_exits_2() {
    Project::empty()
        .cmd()
        .args(["frame", "-a", "(unclosed"])
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("invalid pattern \"(unclosed\""));
}

/// Empty input is not an error
#[test]
fn empty_input_finds_nothing() {
    Project::empty()
        .cmd()
        .arg("anything")
        .write_stdin("")
        .assert()
        .success()
        .stdout("")
        .stderr("Found 0 threads.\n");
}
