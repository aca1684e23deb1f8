// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for report artifacts and `--format`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const ARTIFACTS: [&str; 4] = [
    "test_report.json",
    "test_report.html",
    "test_report.xml",
    "test_summary.txt",
];

#[test]
fn every_artifact_is_written() {
    let project = Project::with_suites(&[suite("Unit", "unit", "exit 0")]);
    project
        .cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("Reports:"));

    for name in ARTIFACTS {
        assert!(project.reports().join(name).is_file(), "missing {name}");
    }
}

#[test]
fn artifacts_are_written_even_when_suites_fail() {
    let project = Project::with_suites(&[suite("Unit", "unit", "exit 3")]);
    project.cmd().assert().code(1);

    for name in ARTIFACTS {
        assert!(project.reports().join(name).is_file(), "missing {name}");
    }
}

#[test]
fn output_flag_sets_directory() {
    let project = Project::with_suites(&[suite("Unit", "unit", "exit 0")]);
    project.cmd().args(["-o", "custom/dir"]).assert().success();
    assert!(project.path().join("custom/dir/test_summary.txt").is_file());
    assert!(!project.reports().exists());
}

#[test]
fn unwritable_output_exits_three() {
    let project = Project::with_suites(&[suite("Unit", "unit", "exit 0")]);
    project.file("blocked", "");

    project.cmd().args(["-o", "blocked"]).assert().code(3);
}

#[test]
fn json_format_prints_json() {
    let project = Project::with_suites(&[suite("Unit", "unit", "exit 0")]);
    let output = project.cmd().args(["-f", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(json["summary"]["passed"], 1);
}

#[test]
fn xml_format_prints_junit() {
    let project = Project::with_suites(&[suite("Unit", "unit", "exit 1")]);
    project
        .cmd()
        .args(["--format", "xml"])
        .assert()
        .code(1)
        .stdout(predicates::str::starts_with("<?xml"))
        .stdout(predicates::str::contains("<failure message=\"Unit failed with exit code 1\"/>"));
}

#[test]
fn html_format_prints_page() {
    let project = Project::with_suites(&[suite("Unit", "unit", "exit 0")]);
    project
        .cmd()
        .args(["-f", "html"])
        .assert()
        .success()
        .stdout(predicates::str::starts_with("<!DOCTYPE html>"));
}

#[test]
fn text_summary_artifact_matches_run() {
    let project = Project::with_suites(&[
        suite("A", "unit", "exit 0"),
        suite("B", "unit", "exit 0"),
    ]);
    project.cmd().assert().success();

    let summary = std::fs::read_to_string(project.reports().join("test_summary.txt")).unwrap();
    assert!(summary.starts_with("Tally Test Report\n"));
    assert!(summary.contains("- Total Tests: 2\n"));
    assert!(summary.contains("- Success Rate: 100.0%\n"));
}
