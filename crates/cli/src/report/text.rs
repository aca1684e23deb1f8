// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::fmt::Write;

use crate::analysis::AggregateReport;

use super::{REPORT_TITLE, ReportFormatter, average_coverage, percent};

/// Plain text summary formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &AggregateReport) -> anyhow::Result<String> {
        let summary = &report.summary;
        let perf = &report.performance_analysis;
        let mut output = String::with_capacity(512);

        writeln!(output, "{}", REPORT_TITLE)?;
        writeln!(output, "{}", "=".repeat(REPORT_TITLE.len()))?;
        writeln!(output)?;
        writeln!(output, "Generated: {}", report.timestamp_rfc3339())?;
        writeln!(
            output,
            "Duration: {:.2} seconds",
            summary.total_duration.as_secs_f64()
        )?;
        writeln!(output)?;

        writeln!(output, "Test Results:")?;
        writeln!(output, "- Total Tests: {}", summary.total_tests)?;
        writeln!(output, "- Passed: {}", summary.passed)?;
        writeln!(output, "- Failed: {}", summary.failed)?;
        writeln!(output, "- Errors: {}", summary.errors)?;
        writeln!(output, "- Skipped: {}", summary.skipped)?;
        writeln!(output, "- Success Rate: {}", percent(summary.success_rate))?;
        writeln!(output, "- Average Coverage: {}", average_coverage(report))?;
        writeln!(output)?;

        writeln!(output, "Performance Analysis:")?;
        writeln!(
            output,
            "- Overall Performance: {}",
            perf.overall_performance.as_str()
        )?;
        if !perf.bottlenecks.is_empty() {
            let list: Vec<String> = perf.bottlenecks.iter().map(ToString::to_string).collect();
            writeln!(output, "- Bottlenecks: {}", list.join(", "))?;
        }
        writeln!(output)?;

        writeln!(output, "Recommendations:")?;
        for rec in &report.recommendations {
            writeln!(output, "- {}", rec)?;
        }

        Ok(output)
    }

    fn file_name(&self) -> &'static str {
        "test_summary.txt"
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
