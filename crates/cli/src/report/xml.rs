// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JUnit-style XML report output.

use std::fmt::Write;

use crate::analysis::AggregateReport;
use crate::runner::{SuiteOutcome, SuiteStatus};

use super::{REPORT_TITLE, ReportFormatter};

/// JUnit-style XML formatter, one `<testsuite>` per outcome.
pub struct XmlFormatter;

/// Escape text for XML content and attribute values.
///
/// Control characters XML 1.0 cannot carry are dropped.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 => {}
            _ => out.push(c),
        }
    }
    out
}

fn secs(outcome: &SuiteOutcome) -> String {
    format!("{:.3}", outcome.duration.as_secs_f64())
}

impl XmlFormatter {
    fn write_suite(output: &mut String, outcome: &SuiteOutcome) -> std::fmt::Result {
        let name = escape_xml(&outcome.name);
        let time = secs(outcome);
        let failures = u8::from(outcome.status == SuiteStatus::Failed);
        let errors = u8::from(outcome.status == SuiteStatus::Error);
        let skipped = u8::from(outcome.status == SuiteStatus::Skipped);

        writeln!(
            output,
            r#"  <testsuite name="{name}" tests="1" failures="{failures}" errors="{errors}" skipped="{skipped}" time="{time}">"#
        )?;
        write!(
            output,
            r#"    <testcase name="{name}" classname="{}" time="{time}""#,
            outcome.suite_type
        )?;

        match outcome.status {
            SuiteStatus::Passed => writeln!(output, "/>")?,
            SuiteStatus::Skipped => {
                writeln!(output, ">")?;
                writeln!(output, "      <skipped/>")?;
                writeln!(output, "    </testcase>")?;
            }
            SuiteStatus::Failed | SuiteStatus::Error => {
                writeln!(output, ">")?;
                let message = escape_xml(&outcome.message);
                match outcome.error_details {
                    Some(ref details) => writeln!(
                        output,
                        r#"      <failure message="{message}">{}</failure>"#,
                        escape_xml(details)
                    )?,
                    None => writeln!(output, r#"      <failure message="{message}"/>"#)?,
                }
                writeln!(output, "    </testcase>")?;
            }
        }

        writeln!(output, "  </testsuite>")
    }
}

impl ReportFormatter for XmlFormatter {
    fn format(&self, report: &AggregateReport) -> anyhow::Result<String> {
        let summary = &report.summary;
        let mut output = String::with_capacity(256 + report.test_results.len() * 256);

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="{}" tests="{}" failures="{}" errors="{}" time="{:.3}" timestamp="{}">"#,
            REPORT_TITLE,
            summary.total_tests,
            summary.failed,
            summary.errors,
            summary.total_duration.as_secs_f64(),
            report.timestamp_rfc3339(),
        )?;
        for outcome in &report.test_results {
            Self::write_suite(&mut output, outcome)?;
        }
        writeln!(output, "</testsuites>")?;

        Ok(output)
    }

    fn file_name(&self) -> &'static str {
        "test_report.xml"
    }
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
