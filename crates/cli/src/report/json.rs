// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use crate::analysis::AggregateReport;

use super::ReportFormatter;

/// JSON format report formatter.
pub struct JsonFormatter {
    compact: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    ///
    /// If `compact` is true, outputs single-line JSON without whitespace.
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AggregateReport) -> anyhow::Result<String> {
        let mut output = if self.compact {
            serde_json::to_string(report)?
        } else {
            serde_json::to_string_pretty(report)?
        };
        output.push('\n');
        Ok(output)
    }

    fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        report: &AggregateReport,
    ) -> anyhow::Result<()> {
        if self.compact {
            serde_json::to_writer(&mut *writer, report)?;
        } else {
            serde_json::to_writer_pretty(&mut *writer, report)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn file_name(&self) -> &'static str {
        "test_report.json"
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
