// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML format report output.

use std::fmt::Write;

use crate::analysis::AggregateReport;
use crate::runner::SuiteOutcome;

use super::{REPORT_TITLE, ReportFormatter, average_coverage, percent};

/// Self-contained HTML page formatter.
pub struct HtmlFormatter;

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl HtmlFormatter {
    /// Generate CSS styles for the report.
    fn css() -> &'static str {
        r#":root {
      --bg: #f7f8fa;
      --card-bg: #ffffff;
      --text: #1f2933;
      --muted: #616e7c;
      --accent: #1976d2;
      --passed: #28a745;
      --failed: #dc3545;
      --error: #ffc107;
      --skipped: #9aa5b1;
    }
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: var(--bg);
      color: var(--text);
      padding: 2rem;
      line-height: 1.6;
    }
    .container { max-width: 1200px; margin: 0 auto; }
    header { margin-bottom: 2rem; padding-bottom: 1rem; border-bottom: 1px solid #d9e2ec; }
    h1 { color: var(--accent); font-size: 1.5rem; }
    h2 { font-size: 1.125rem; margin: 2rem 0 0.75rem; }
    .meta { color: var(--muted); font-size: 0.875rem; margin-top: 0.5rem; }
    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
      gap: 1rem;
    }
    .card {
      background: var(--card-bg);
      padding: 1.25rem;
      border-radius: 8px;
      border-left: 4px solid var(--accent);
    }
    .card.passed { border-color: var(--passed); }
    .card.failed { border-color: var(--failed); }
    .card-title { color: var(--muted); font-size: 0.75rem; text-transform: uppercase; }
    .card-value { font-size: 2rem; font-weight: 600; margin-top: 0.5rem; }
    .suite {
      background: var(--card-bg);
      padding: 0.75rem 1rem;
      margin: 0.375rem 0;
      border-radius: 4px;
      border-left: 4px solid var(--skipped);
    }
    .suite.passed { border-color: var(--passed); }
    .suite.failed { border-color: var(--failed); }
    .suite.error { border-color: var(--error); }
    .suite .detail { color: var(--muted); font-size: 0.875rem; }
    .suite pre { font-size: 0.75rem; white-space: pre-wrap; margin-top: 0.5rem; }
    .panel { background: var(--card-bg); padding: 1rem 1.25rem; border-radius: 8px; }
    .panel ul { margin-left: 1.25rem; }"#
    }

    /// Render a summary card.
    fn render_card(title: &str, value: &str, category: &str) -> String {
        format!(
            r#"      <div class="card {category}">
        <div class="card-title">{title}</div>
        <div class="card-value">{value}</div>
      </div>"#
        )
    }

    /// Render one suite outcome.
    fn render_suite(outcome: &SuiteOutcome) -> String {
        let status = outcome.status.as_str();
        let mut detail = format!(
            "{} &middot; {:.2}s",
            status.to_uppercase(),
            outcome.duration.as_secs_f64()
        );
        if let Some(coverage) = outcome.coverage {
            let _ = write!(detail, " &middot; coverage {}", percent(coverage));
        }
        if let Some(metrics) = outcome.performance_metrics {
            if let Some(latency) = metrics.latency_ms {
                let _ = write!(detail, " &middot; latency {}ms", latency);
            }
            if let Some(throughput) = metrics.throughput_rps {
                let _ = write!(detail, " &middot; throughput {} rps", throughput);
            }
            if let Some(memory) = metrics.memory_mb {
                let _ = write!(detail, " &middot; memory {} MB", memory);
            }
        }

        let mut html = format!(
            r#"      <div class="suite {status}">
        <strong>{name}</strong>
        <div class="detail">{detail}</div>
        <div class="detail">{message}</div>"#,
            name = escape_html(&outcome.name),
            message = escape_html(&outcome.message),
        );
        if let Some(ref details) = outcome.error_details {
            let _ = write!(html, "\n        <pre>{}</pre>", escape_html(details));
        }
        html.push_str("\n      </div>");
        html
    }

    fn render_list(items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("          <li>{}</li>", escape_html(item)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &AggregateReport) -> anyhow::Result<String> {
        let summary = &report.summary;
        let perf = &report.performance_analysis;

        let cards = [
            Self::render_card("Total Suites", &summary.total_tests.to_string(), ""),
            Self::render_card("Passed", &summary.passed.to_string(), "passed"),
            Self::render_card("Failed", &summary.failed.to_string(), "failed"),
            Self::render_card("Errors", &summary.errors.to_string(), "failed"),
            Self::render_card("Success Rate", &percent(summary.success_rate), ""),
            Self::render_card("Avg Coverage", &average_coverage(report), ""),
            Self::render_card(
                "Duration",
                &format!("{:.1}s", summary.total_duration.as_secs_f64()),
                "",
            ),
        ]
        .join("\n");

        let suites = report
            .test_results
            .iter()
            .map(Self::render_suite)
            .collect::<Vec<_>>()
            .join("\n");

        let bottlenecks: Vec<String> = perf.bottlenecks.iter().map(ToString::to_string).collect();
        let bottleneck_html = if bottlenecks.is_empty() {
            String::new()
        } else {
            format!(
                "\n        <p><strong>Bottlenecks:</strong></p>\n        <ul>\n{}\n        </ul>",
                Self::render_list(&bottlenecks)
            )
        };

        let css = Self::css();
        let title = REPORT_TITLE;
        let timestamp = escape_html(&report.timestamp_rfc3339());
        let verdict = perf.overall_performance.as_str();
        let recommendations = Self::render_list(&report.recommendations);

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
    {css}
  </style>
</head>
<body>
  <div class="container">
    <header>
      <h1>{title}</h1>
      <div class="meta">Generated {timestamp}</div>
    </header>
    <section class="cards">
{cards}
    </section>
    <section>
      <h2>Suites</h2>
{suites}
    </section>
    <section>
      <h2>Performance Analysis</h2>
      <div class="panel">
        <p><strong>Overall Performance:</strong> {verdict}</p>{bottleneck_html}
      </div>
    </section>
    <section>
      <h2>Recommendations</h2>
      <div class="panel">
        <ul>
{recommendations}
        </ul>
      </div>
    </section>
  </div>
</body>
</html>
"#
        ))
    }

    fn file_name(&self) -> &'static str {
        "test_report.html"
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
