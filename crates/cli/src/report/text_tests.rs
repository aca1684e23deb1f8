// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::report::test_support::{
    assert_buffered_matches_streamed, create_empty_report, create_test_report,
};

#[test]
fn text_summary_layout() {
    let output = TextFormatter.format(&create_test_report()).unwrap();
    let expected = "\
Tally Test Report
=================

Generated: 2026-03-01T12:00:00Z
Duration: 12.50 seconds

Test Results:
- Total Tests: 5
- Passed: 2
- Failed: 1
- Errors: 1
- Skipped: 1
- Success Rate: 40.0%
- Average Coverage: 91.5%

Performance Analysis:
- Overall Performance: good

Recommendations:
- Fix 1 test error: E2E Tests
";
    similar_asserts::assert_eq!(output, expected);
}

#[test]
fn text_lists_bottlenecks() {
    let mut report = create_test_report();
    report.performance_analysis = crate::analysis::analyze_performance(
        &[crate::runner::SuiteOutcome::passed(
            &crate::registry::SuiteSpec::new(
                "DNS System Tests",
                crate::registry::SuiteType::Performance,
                crate::registry::SuiteCommand::parse("true").unwrap(),
            ),
            std::time::Duration::ZERO,
        )
        .with_performance(Some(crate::extract::PerformanceMetrics {
            latency_ms: Some(40.0),
            throughput_rps: None,
            memory_mb: None,
        }))],
        &crate::registry::Registry::builtin(),
    );

    let output = TextFormatter.format(&report).unwrap();
    assert!(output.contains("- Overall Performance: needs_improvement\n"));
    assert!(output.contains("- Bottlenecks: dns: High latency (40ms)\n"));
}

#[test]
fn text_empty_run() {
    let output = TextFormatter.format(&create_empty_report()).unwrap();
    assert!(output.contains("- Success Rate: 0.0%"));
    assert!(output.contains("- Average Coverage: n/a"));
    assert!(output.contains("- All tests are performing well!"));
}

#[test]
fn text_buffered_matches_streamed() {
    assert_buffered_matches_streamed(&TextFormatter, &create_test_report());
}
