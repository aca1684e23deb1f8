// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use crate::runner::SuiteOutcome;

/// Coverage below this percentage is reported as low.
pub const LOW_COVERAGE: f64 = 80.0;

/// Coverage rating of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Excellent,
    Good,
    NeedsImprovement,
}

impl CoverageStatus {
    /// Rate an average coverage percentage.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            CoverageStatus::Excellent
        } else if average >= 80.0 {
            CoverageStatus::Good
        } else {
            CoverageStatus::NeedsImprovement
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CoverageStatus::Excellent => "excellent",
            CoverageStatus::Good => "good",
            CoverageStatus::NeedsImprovement => "needs_improvement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoCoverage {
    NoCoverageData,
}

/// Coverage across every outcome that reported it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CoverageAnalysis {
    NoData {
        status: NoCoverage,
        recommendations: Vec<String>,
    },
    Measured {
        average_coverage: f64,
        min_coverage: f64,
        max_coverage: f64,
        coverage_status: CoverageStatus,
        low_coverage_tests: Vec<String>,
    },
}

impl CoverageAnalysis {
    fn no_data() -> Self {
        CoverageAnalysis::NoData {
            status: NoCoverage::NoCoverageData,
            recommendations: vec!["Enable coverage reporting".to_string()],
        }
    }
}

/// Summarize coverage over the outcomes that reported it.
pub fn analyze_coverage(outcomes: &[SuiteOutcome]) -> CoverageAnalysis {
    let covered: Vec<(&str, f64)> = outcomes
        .iter()
        .filter_map(|o| o.coverage.map(|c| (o.name.as_str(), c)))
        .collect();

    if covered.is_empty() {
        return CoverageAnalysis::no_data();
    }

    let average = covered.iter().map(|(_, c)| c).sum::<f64>() / covered.len() as f64;
    let min = covered.iter().map(|(_, c)| *c).fold(f64::INFINITY, f64::min);
    let max = covered.iter().map(|(_, c)| *c).fold(f64::NEG_INFINITY, f64::max);

    let low_coverage_tests = covered
        .iter()
        .filter(|(_, c)| *c < LOW_COVERAGE)
        .map(|(name, _)| name.to_string())
        .collect();

    CoverageAnalysis::Measured {
        average_coverage: average,
        min_coverage: min,
        max_coverage: max,
        coverage_status: CoverageStatus::from_average(average),
        low_coverage_tests,
    }
}
