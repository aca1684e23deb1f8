// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run aggregation and analysis.
//!
//! [`aggregate`] folds the outcomes of one run into an [`AggregateReport`].
//! It is pure: the same outcomes, registry and run info always produce the
//! same report.

mod coverage;
mod performance;
mod recommendations;

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::registry::Registry;
use crate::runner::{SuiteOutcome, SuiteStatus};

pub use coverage::{CoverageAnalysis, CoverageStatus, LOW_COVERAGE, analyze_coverage};
pub use performance::{
    Bottleneck, BottleneckKind, PerformanceAnalysis, PerformanceVerdict, analyze_performance,
    system_name,
};
pub use recommendations::{ALL_GOOD, SLOW_SUITE, recommend};

/// Timing of the run being aggregated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunInfo {
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl RunInfo {
    pub fn new(started_at: DateTime<Utc>, elapsed: Duration) -> Self {
        Self {
            started_at,
            elapsed,
        }
    }
}

/// Counts and rates over every outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub skipped: usize,
    /// Percentage of outcomes that passed; 0 for an empty run.
    pub success_rate: f64,
    #[serde(serialize_with = "serialize_secs")]
    pub total_duration: Duration,
    pub average_coverage: Option<f64>,
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Everything known about one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub summary: Summary,
    pub test_results: Vec<SuiteOutcome>,
    pub performance_analysis: PerformanceAnalysis,
    pub coverage_analysis: CoverageAnalysis,
    pub recommendations: Vec<String>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl AggregateReport {
    /// Whether any suite failed or errored.
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0 || self.summary.errors > 0
    }

    /// Timestamp as written into every report.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Build the aggregate report for one run.
pub fn aggregate(outcomes: Vec<SuiteOutcome>, registry: &Registry, run: RunInfo) -> AggregateReport {
    let count = |status: SuiteStatus| outcomes.iter().filter(|o| o.status == status).count();

    let total_tests = outcomes.len();
    let passed = count(SuiteStatus::Passed);
    let success_rate = if total_tests == 0 {
        0.0
    } else {
        passed as f64 / total_tests as f64 * 100.0
    };

    let coverage_values: Vec<f64> = outcomes.iter().filter_map(|o| o.coverage).collect();
    let average_coverage = (!coverage_values.is_empty())
        .then(|| coverage_values.iter().sum::<f64>() / coverage_values.len() as f64);

    let summary = Summary {
        total_tests,
        passed,
        failed: count(SuiteStatus::Failed),
        errors: count(SuiteStatus::Error),
        skipped: count(SuiteStatus::Skipped),
        success_rate,
        total_duration: run.elapsed,
        average_coverage,
    };

    let performance_analysis = analyze_performance(&outcomes, registry);
    let coverage_analysis = analyze_coverage(&outcomes);
    let recommendations = recommend(&outcomes, &performance_analysis);

    tracing::info!(
        "aggregated {} suites: {} passed, {} failed, {} errors, {} skipped",
        summary.total_tests,
        summary.passed,
        summary.failed,
        summary.errors,
        summary.skipped
    );

    AggregateReport {
        summary,
        test_results: outcomes,
        performance_analysis,
        coverage_analysis,
        recommendations,
        timestamp: run.started_at,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
