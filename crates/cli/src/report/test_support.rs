// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for report formatter tests.

// Test helpers that use unwrap for clarity (tests should panic on unexpected failures).
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use chrono::{TimeZone, Utc};

use crate::analysis::{AggregateReport, RunInfo, aggregate};
use crate::extract::PerformanceMetrics;
use crate::registry::{Registry, SuiteCommand, SuiteSpec, SuiteType};
use crate::runner::SuiteOutcome;

use super::ReportFormatter;

/// Assert that buffered and streamed output match for a formatter.
pub fn assert_buffered_matches_streamed<F: ReportFormatter>(formatter: &F, report: &AggregateReport) {
    let buffered = formatter.format(report).unwrap();
    let mut streamed = Vec::new();
    formatter.format_to(&mut streamed, report).unwrap();
    let streamed_str = String::from_utf8(streamed).unwrap();
    similar_asserts::assert_eq!(buffered, streamed_str);
}

fn spec(name: &str, suite_type: SuiteType) -> SuiteSpec {
    SuiteSpec::new(name, suite_type, SuiteCommand::parse("true").unwrap())
}

fn run_info() -> RunInfo {
    RunInfo::new(
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        Duration::from_millis(12_500),
    )
}

/// A run with one outcome of every status, a covered suite and a bottleneck.
pub fn create_test_report() -> AggregateReport {
    let outcomes = vec![
        SuiteOutcome::passed(&spec("Backend Unit Tests", SuiteType::Unit), Duration::from_secs(3))
            .with_coverage(Some(91.5)),
        SuiteOutcome::failed(
            &spec("Frontend <Unit> Tests", SuiteType::Unit),
            Duration::from_secs(2),
            Some(1),
            "expected \"a\" & got 'b'",
        ),
        SuiteOutcome::timed_out(
            &spec("E2E Tests", SuiteType::E2e).with_timeout(Duration::from_secs(5)),
            Duration::from_secs(5),
        ),
        SuiteOutcome::skipped(
            &spec("Quora System Tests", SuiteType::System),
            "not started: run interrupted",
        ),
        SuiteOutcome::passed(
            &spec("DNS System Tests", SuiteType::Performance),
            Duration::from_millis(1500),
        )
        .with_performance(Some(PerformanceMetrics {
            latency_ms: Some(8.0),
            throughput_rps: Some(12000.0),
            memory_mb: None,
        })),
    ];
    aggregate(outcomes, &Registry::builtin(), run_info())
}

/// A run with no outcomes.
pub fn create_empty_report() -> AggregateReport {
    aggregate(Vec::new(), &Registry::builtin(), run_info())
}
