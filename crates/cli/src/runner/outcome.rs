// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite outcome types.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::config::duration::format_secs;
use crate::extract::PerformanceMetrics;
use crate::registry::{SuiteSpec, SuiteType};

/// Name given to outcomes whose suite could not be identified.
pub const UNKNOWN_SUITE: &str = "Unknown";

/// Final status of one suite. Exactly one per outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteStatus {
    Passed,
    Failed,
    Error,
    Skipped,
}

impl SuiteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SuiteStatus::Passed => "passed",
            SuiteStatus::Failed => "failed",
            SuiteStatus::Error => "error",
            SuiteStatus::Skipped => "skipped",
        }
    }

    /// Whether this status should fail the run.
    pub fn is_failure(self) -> bool {
        matches!(self, SuiteStatus::Failed | SuiteStatus::Error)
    }
}

impl fmt::Display for SuiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recorded result of running one suite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteOutcome {
    pub name: String,
    #[serde(rename = "type")]
    pub suite_type: SuiteType,
    pub status: SuiteStatus,
    /// Wall-clock duration, serialized as fractional seconds.
    #[serde(serialize_with = "serialize_secs")]
    pub duration: Duration,
    pub message: String,
    pub coverage: Option<f64>,
    pub performance_metrics: Option<PerformanceMetrics>,
    pub error_details: Option<String>,
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

impl SuiteOutcome {
    fn new(
        name: impl Into<String>,
        suite_type: SuiteType,
        status: SuiteStatus,
        duration: Duration,
        message: String,
    ) -> Self {
        Self {
            name: name.into(),
            suite_type,
            status,
            duration,
            message,
            coverage: None,
            performance_metrics: None,
            error_details: None,
        }
    }

    /// Suite exited with status 0.
    pub fn passed(spec: &SuiteSpec, duration: Duration) -> Self {
        let message = format!("{} completed successfully", spec.name);
        Self::new(&spec.name, spec.suite_type, SuiteStatus::Passed, duration, message)
    }

    /// Suite exited nonzero. `code` is None when a signal ended the process.
    pub fn failed(spec: &SuiteSpec, duration: Duration, code: Option<i32>, stderr: &str) -> Self {
        let message = match code {
            Some(code) => format!("{} failed with exit code {}", spec.name, code),
            None => format!("{} terminated by signal", spec.name),
        };
        let mut outcome =
            Self::new(&spec.name, spec.suite_type, SuiteStatus::Failed, duration, message);
        outcome.error_details = stderr_tail(stderr);
        outcome
    }

    /// Suite was killed after exceeding its timeout.
    pub fn timed_out(spec: &SuiteSpec, duration: Duration) -> Self {
        let message = format!("{} timed out after {}", spec.name, format_secs(spec.timeout));
        let mut outcome =
            Self::new(&spec.name, spec.suite_type, SuiteStatus::Error, duration, message);
        outcome.error_details = Some("test execution timeout".to_string());
        outcome
    }

    /// Suite could not be started or waited on.
    pub fn launch_error(spec: &SuiteSpec, duration: Duration, detail: impl fmt::Display) -> Self {
        let detail = detail.to_string();
        let message = format!("{} could not be run: {}", spec.name, detail);
        let mut outcome =
            Self::new(&spec.name, spec.suite_type, SuiteStatus::Error, duration, message);
        outcome.error_details = Some(detail);
        outcome
    }

    /// Suite was never run or was abandoned.
    pub fn skipped(spec: &SuiteSpec, reason: &str) -> Self {
        let message = format!("{}: {}", spec.name, reason);
        Self::new(&spec.name, spec.suite_type, SuiteStatus::Skipped, Duration::ZERO, message)
    }

    /// Synthetic outcome for a suite whose execution panicked.
    ///
    /// The name is `Unknown`; the suite that was being run is kept in the
    /// error details.
    pub fn unknown(spec: &SuiteSpec, duration: Duration, panic_message: &str) -> Self {
        let message = format!("Internal error: {}", panic_message);
        let mut outcome =
            Self::new(UNKNOWN_SUITE, spec.suite_type, SuiteStatus::Error, duration, message);
        outcome.error_details = Some(format!("panicked while running {}", spec.name));
        outcome
    }

    pub fn with_coverage(mut self, coverage: Option<f64>) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_performance(mut self, metrics: Option<PerformanceMetrics>) -> Self {
        self.performance_metrics = metrics;
        self
    }
}

const STDERR_TAIL_LINES: usize = 50;

/// Last lines of stderr, or None when it is blank.
fn stderr_tail(stderr: &str) -> Option<String> {
    let trimmed = stderr.trim_end();
    if trimmed.trim().is_empty() {
        return None;
    }
    let lines: Vec<&str> = trimmed.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    Some(lines[start..].join("\n"))
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
