// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose progress logger.
//!
//! Writes `[verbose]` prefixed lines to stderr when `--verbose` is given.

use crate::registry::SuiteSpec;
use crate::runner::SuiteOutcome;

/// Verbose output logger. Writes to stderr with a `[verbose]` prefix.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("[verbose] === {} ===", title);
        }
    }

    /// Print a suite as it is queued.
    pub fn suite(&self, spec: &SuiteSpec) {
        if self.enabled {
            eprintln!("[verbose] {}", describe_suite(spec));
        }
    }

    /// Print a finished suite.
    pub fn outcome(&self, outcome: &SuiteOutcome) {
        if self.enabled {
            eprintln!("[verbose] {}", describe_outcome(outcome));
        }
    }
}

fn describe_suite(spec: &SuiteSpec) -> String {
    format!(
        "{} [{}] `{}` in {} (timeout {}s)",
        spec.name,
        spec.suite_type,
        spec.command,
        spec.working_dir.display(),
        spec.timeout.as_secs()
    )
}

fn describe_outcome(outcome: &SuiteOutcome) -> String {
    let mut line = format!(
        "{} {} in {:.2}s",
        outcome.name,
        outcome.status,
        outcome.duration.as_secs_f64()
    );
    if let Some(coverage) = outcome.coverage {
        line.push_str(&format!(", coverage {:.1}%", coverage));
    }
    if let Some(ref details) = outcome.error_details
        && let Some(last) = details.lines().last()
    {
        line.push_str(&format!(": {}", last));
    }
    line
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
