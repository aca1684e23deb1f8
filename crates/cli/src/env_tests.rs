// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn names_no_color_is_correct() {
    assert_eq!(names::NO_COLOR, "NO_COLOR");
}

#[test]
fn names_color_is_correct() {
    assert_eq!(names::COLOR, "COLOR");
}

#[test]
fn names_ci_is_correct() {
    assert_eq!(names::CI, "CI");
}

#[test]
fn names_tally_config_is_correct() {
    assert_eq!(names::TALLY_CONFIG, "TALLY_CONFIG");
}

#[test]
fn tally_log_var_returns_correct_name() {
    assert_eq!(tally_log_var(), "TALLY_LOG");
}
