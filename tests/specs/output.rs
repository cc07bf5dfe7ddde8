//! Behavioral specs for rendered output.

use crate::prelude::*;

/// Uninteresting runs collapse to one placeholder each
#[test]
fn collapses_uninteresting_runs() {
    Project::empty()
        .cmd()
        .arg("frame[AB]")
        .write_stdin("pre\n\nT1\nRUNNABLE\nframeA\nnoise1\nnoise2\nframeB\n")
        .assert()
        .success()
        .stdout("T1\n  state: RUNNABLE\n    frameA\n    ...\n    frameB\n");
}

/// --full prints every line and marks the interesting ones
#[test]
fn full_marks_interesting_lines() {
    Project::empty()
        .cmd()
        .args(["--full", "frame[AB]"])
        .write_stdin("pre\n\nT1\nRUNNABLE\nframeA\nnoise1\nnoise2\nframeB\n")
        .assert()
        .success()
        .stdout("T1\n  state: RUNNABLE\n  > frameA\n    noise1\n    noise2\n  > frameB\n");
}

/// --interest replaces the default highlight set
#[test]
fn explicit_interest_patterns() {
    Project::empty()
        .cmd()
        .args(["T1", "-i", "noise2"])
        .write_stdin("pre\n\nT1\nRUNNABLE\nframeA\nnoise1\nnoise2\nframeB\n")
        .assert()
        .success()
        .stdout("T1\n  state: RUNNABLE\n    ...\n    noise2\n    ...\n");
}

/// Threads are separated by one blank line
#[test]
fn threads_separated_by_blank_line() {
    Project::empty()
        .cmd()
        .arg("frame")
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout(
            "T1\n  state: RUNNABLE\n    frameA\n    frameB\n\nT2\n  state: WAITING\n    frameC\n",
        );
}

/// Piped output has no color unless forced
#[test]
fn color_only_when_forced() {
    Project::empty()
        .cmd()
        .arg("frameA")
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());

    Project::empty()
        .cmd()
        .args(["--color", "always", "frameA"])
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));

    Project::empty()
        .cmd()
        .args(["--color", "always", "--no-color", "frameA"])
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

/// --format json emits the selected records
#[test]
fn json_format() {
    let output = Project::empty()
        .cmd()
        .args(["--format", "json", "frameC"])
        .write_stdin(fixture_text("two_threads.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["source"], "stdin");
    assert_eq!(value["count"], 1);
    assert_eq!(value["threads"][0]["name"], "T2");
    assert_eq!(value["threads"][0]["stack"][0], "frameC");
}

/// --quiet drops the diagnostic but keeps the results
#[test]
fn quiet_suppresses_diagnostic() {
    Project::empty()
        .cmd()
        .args(["-q", "frameA"])
        .write_stdin(fixture_text("two_threads.txt"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with("T1\n"))
        .stderr("");
}
