// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `tally.toml` handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn unsupported_version_exits_two() {
    let project = Project::with_config("version = 2\n");
    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

#[test]
fn missing_version_exits_two() {
    let project = Project::with_config("[run]\njobs = 2\n");
    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("missing required field: version"));
}

#[test]
fn invalid_suite_type_exits_two() {
    let project = Project::with_suites(&[suite("Fuzz", "fuzz", "exit 0")]);
    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config error"));
}

#[test]
fn duplicate_suite_names_exit_two() {
    let project = Project::with_suites(&[
        suite("Same", "unit", "exit 0"),
        suite("Same", "e2e", "exit 0"),
    ]);
    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("duplicate suite name: Same"));
}

#[test]
fn missing_explicit_config_exits_two() {
    let project = Project::empty();
    project
        .cmd()
        .args(["-C", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

#[test]
fn unknown_top_level_key_warns() {
    let project = Project::with_config(&format!(
        "version = 1\ndashboard = true\n{}",
        suite("Unit", "unit", "exit 0")
    ));
    project
        .cmd()
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `dashboard`"));
}

#[test]
fn valid_config_produces_no_warnings() {
    let project = Project::with_suites(&[suite("Unit", "unit", "exit 0")]);
    project
        .cmd()
        .assert()
        .success()
        .stderr(predicates::str::contains("warning").not());
}

#[test]
fn config_is_discovered_from_subdirectory() {
    let project = Project::with_suites(&[suite("Root Suite", "unit", "exit 0")]);
    project.file("nested/deeper/.keep", "");

    project
        .cmd()
        .current_dir(project.path().join("nested/deeper"))
        .arg("--list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Root Suite"));
}

#[test]
fn config_env_var_selects_file() {
    let project = Project::empty();
    project.file(
        "custom.toml",
        &format!("version = 1\n{}", suite("From Env", "unit", "exit 0")),
    );

    project
        .cmd()
        .env("TALLY_CONFIG", project.path().join("custom.toml"))
        .arg("--list")
        .assert()
        .success()
        .stdout(predicates::str::contains("From Env"));
}

#[test]
fn run_output_resolves_against_config_directory() {
    let project = Project::with_config(&format!(
        "version = 1\n[run]\noutput = \"out/reports\"\n{}",
        suite("Unit", "unit", "exit 0")
    ));
    project.file("sub/.keep", "");

    project
        .cmd()
        .current_dir(project.path().join("sub"))
        .assert()
        .success();
    assert!(project.path().join("out/reports/test_report.json").is_file());
}
