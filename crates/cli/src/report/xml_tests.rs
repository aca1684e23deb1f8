// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::report::test_support::{
    assert_buffered_matches_streamed, create_empty_report, create_test_report,
};

#[test]
fn xml_root_carries_run_totals() {
    let output = XmlFormatter.format(&create_test_report()).unwrap();
    assert!(output.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(output.contains(
        r#"<testsuites name="Tally Test Report" tests="5" failures="1" errors="1" time="12.500" timestamp="2026-03-01T12:00:00Z">"#
    ));
    assert!(output.trim_end().ends_with("</testsuites>"));
}

#[test]
fn xml_has_one_testsuite_per_outcome() {
    let output = XmlFormatter.format(&create_test_report()).unwrap();
    assert_eq!(output.matches("<testsuite ").count(), 5);
    assert_eq!(output.matches("<testcase ").count(), 5);
}

#[test]
fn xml_failure_and_error_have_failure_element() {
    let output = XmlFormatter.format(&create_test_report()).unwrap();
    assert_eq!(output.matches("<failure ").count(), 2);
    assert!(output.contains(
        r#"<failure message="E2E Tests timed out after 5s">test execution timeout</failure>"#
    ));
}

#[test]
fn xml_skipped_outcome_is_marked() {
    let output = XmlFormatter.format(&create_test_report()).unwrap();
    assert_eq!(output.matches("<skipped/>").count(), 1);
}

#[test]
fn xml_escapes_names_and_details() {
    let output = XmlFormatter.format(&create_test_report()).unwrap();
    assert!(output.contains(r#"name="Frontend &lt;Unit&gt; Tests""#));
    assert!(output.contains("expected &quot;a&quot; &amp; got &apos;b&apos;"));
}

#[test]
fn escape_xml_drops_invalid_control_characters() {
    assert_eq!(escape_xml("a\u{1b}[31mb\tc\n"), "a[31mb\tc\n");
}

#[test]
fn xml_empty_run() {
    let output = XmlFormatter.format(&create_empty_report()).unwrap();
    assert!(output.contains(r#"tests="0" failures="0" errors="0""#));
    assert_eq!(output.matches("<testsuite ").count(), 0);
}

#[test]
fn xml_buffered_matches_streamed() {
    assert_buffered_matches_streamed(&XmlFormatter, &create_test_report());
}
