// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use super::{LOW_COVERAGE, PerformanceAnalysis};
use crate::runner::{SuiteOutcome, SuiteStatus};

/// Suites running longer than this are called out as slow.
pub const SLOW_SUITE: Duration = Duration::from_secs(60);

/// The only recommendation when nothing needs attention.
pub const ALL_GOOD: &str = "All tests are performing well!";

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn names(outcomes: &[&SuiteOutcome]) -> String {
    outcomes
        .iter()
        .map(|o| o.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Actionable follow-ups for a run, in a fixed order: coverage, speed,
/// errors, then performance.
pub fn recommend(outcomes: &[SuiteOutcome], performance: &PerformanceAnalysis) -> Vec<String> {
    let mut recommendations = Vec::new();

    let low_coverage: Vec<&SuiteOutcome> = outcomes
        .iter()
        .filter(|o| o.coverage.is_some_and(|c| c < LOW_COVERAGE))
        .collect();
    if !low_coverage.is_empty() {
        recommendations.push(format!(
            "Improve test coverage for {}: {}",
            plural(low_coverage.len(), "test suite", "test suites"),
            names(&low_coverage)
        ));
    }

    let slow: Vec<&SuiteOutcome> = outcomes.iter().filter(|o| o.duration > SLOW_SUITE).collect();
    if !slow.is_empty() {
        recommendations.push(format!(
            "Optimize {}: {}",
            plural(slow.len(), "slow-running test suite", "slow-running test suites"),
            names(&slow)
        ));
    }

    let errors: Vec<&SuiteOutcome> = outcomes
        .iter()
        .filter(|o| o.status == SuiteStatus::Error)
        .collect();
    if !errors.is_empty() {
        recommendations.push(format!(
            "Fix {}: {}",
            plural(errors.len(), "test error", "test errors"),
            names(&errors)
        ));
    }

    recommendations.extend(performance.recommendations.iter().cloned());

    if recommendations.is_empty() {
        recommendations.push(ALL_GOOD.to_string());
    }
    recommendations
}
