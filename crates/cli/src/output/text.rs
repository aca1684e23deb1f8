// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Colored console summary.
//!
//! ```text
//! PASS   Backend Unit Tests (3.02s, coverage 91.5%)
//! FAIL   Frontend Unit Tests (2.10s)
//!          Frontend Unit Tests failed with exit code 1
//!
//! 4 suites: 3 passed, 1 failed, 0 errors, 0 skipped (75.0% success) in 12.50s
//! ```

use std::io::Write;
use std::path::PathBuf;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::analysis::AggregateReport;
use crate::color::{scheme, status_label};
use crate::registry::SuiteSpec;
use crate::runner::{SuiteOutcome, SuiteStatus};

/// Writes the human-readable run summary.
pub struct ConsoleSummary<W: WriteColor> {
    out: W,
}

impl ConsoleSummary<StandardStream> {
    /// Summary on stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> ConsoleSummary<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write the suites a run would execute.
    pub fn write_suite_list(&mut self, suites: &[&SuiteSpec]) -> std::io::Result<()> {
        for spec in suites {
            self.out.set_color(&scheme::header())?;
            write!(self.out, "{}", spec.name)?;
            self.out.reset()?;
            writeln!(self.out, " [{}]: {}", spec.suite_type, spec.command)?;
        }
        writeln!(
            self.out,
            "{} suite{} selected",
            suites.len(),
            if suites.len() == 1 { "" } else { "s" }
        )
    }

    /// Write one line per outcome followed by the totals.
    pub fn write_report(&mut self, report: &AggregateReport) -> std::io::Result<()> {
        for outcome in &report.test_results {
            self.write_outcome(outcome)?;
        }
        if !report.test_results.is_empty() {
            writeln!(self.out)?;
        }
        self.write_totals(report)?;

        let bottlenecks = &report.performance_analysis.bottlenecks;
        if !bottlenecks.is_empty() {
            self.out.set_color(&scheme::header())?;
            writeln!(self.out, "Bottlenecks:")?;
            self.out.reset()?;
            for bottleneck in bottlenecks {
                writeln!(self.out, "  {}", bottleneck)?;
            }
        }

        self.out.set_color(&scheme::header())?;
        writeln!(self.out, "Recommendations:")?;
        self.out.reset()?;
        for rec in &report.recommendations {
            writeln!(self.out, "  {}", rec)?;
        }
        Ok(())
    }

    fn write_outcome(&mut self, outcome: &SuiteOutcome) -> std::io::Result<()> {
        self.out.set_color(&scheme::status(outcome.status))?;
        write!(self.out, "{:<6}", status_label(outcome.status))?;
        self.out.reset()?;

        write!(
            self.out,
            " {} ({:.2}s",
            outcome.name,
            outcome.duration.as_secs_f64()
        )?;
        if let Some(coverage) = outcome.coverage {
            write!(self.out, ", coverage {:.1}%", coverage)?;
        }
        writeln!(self.out, ")")?;

        if outcome.status != SuiteStatus::Passed {
            writeln!(self.out, "         {}", outcome.message)?;
        }
        Ok(())
    }

    fn write_totals(&mut self, report: &AggregateReport) -> std::io::Result<()> {
        let s = &report.summary;
        let spec = if report.has_failures() {
            scheme::fail()
        } else {
            scheme::pass()
        };
        self.out.set_color(&spec)?;
        write!(
            self.out,
            "{} suite{}",
            s.total_tests,
            if s.total_tests == 1 { "" } else { "s" }
        )?;
        self.out.reset()?;
        writeln!(
            self.out,
            ": {} passed, {} failed, {} errors, {} skipped ({:.1}% success) in {:.2}s",
            s.passed,
            s.failed,
            s.errors,
            s.skipped,
            s.success_rate,
            s.total_duration.as_secs_f64()
        )?;
        if let Some(average) = s.average_coverage {
            writeln!(self.out, "Average coverage: {:.1}%", average)?;
        }
        Ok(())
    }

    /// Write where the artifacts were saved.
    pub fn write_artifacts(&mut self, paths: &[PathBuf]) -> std::io::Result<()> {
        writeln!(self.out, "Reports:")?;
        for path in paths {
            write!(self.out, "  ")?;
            self.out.set_color(&scheme::path())?;
            write!(self.out, "{}", path.display())?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    /// Write an already-rendered report verbatim.
    pub fn write_raw(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
