// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! Every run writes the same four artifacts (JSON, HTML, JUnit-style XML
//! and a plain text summary). Rendering is deterministic: the same report
//! always produces byte-identical output.

mod html;
mod json;
mod text;
mod xml;

use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::AggregateReport;
use crate::cli::OutputFormat;
use crate::error::{Error, Result};

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
pub use xml::XmlFormatter;

/// Report title used by every format.
pub const REPORT_TITLE: &str = "Tally Test Report";

/// Trait for formatting an aggregate report.
pub trait ReportFormatter {
    /// Format the report into the target format.
    fn format(&self, report: &AggregateReport) -> anyhow::Result<String>;

    /// Format the report directly to a writer.
    fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        report: &AggregateReport,
    ) -> anyhow::Result<()> {
        writer.write_all(self.format(report)?.as_bytes())?;
        Ok(())
    }

    /// Artifact name under the output directory.
    fn file_name(&self) -> &'static str;
}

/// Create formatter based on output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::default()),
        OutputFormat::Html => Box::new(HtmlFormatter),
        OutputFormat::Xml => Box::new(XmlFormatter),
    }
}

/// Formatters for every artifact, in write order.
pub fn all_formatters() -> Vec<Box<dyn ReportFormatter>> {
    [
        OutputFormat::Json,
        OutputFormat::Html,
        OutputFormat::Xml,
        OutputFormat::Text,
    ]
    .into_iter()
    .map(create_formatter)
    .collect()
}

/// Write all four artifacts into `dir`, creating it if needed.
///
/// Returns the paths written, in write order.
pub fn write_reports(report: &AggregateReport, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for formatter in all_formatters() {
        let path = dir.join(formatter.file_name());
        let content = formatter
            .format(report)
            .map_err(|e| Error::Internal(format!("rendering {}: {}", formatter.file_name(), e)))?;
        fs::write(&path, content).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Format a percentage the way every report shows it.
fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Average coverage for display, "n/a" when no suite reported coverage.
fn average_coverage(report: &AggregateReport) -> String {
    report
        .summary
        .average_coverage
        .map(percent)
        .unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

#[cfg(test)]
mod test_support;
