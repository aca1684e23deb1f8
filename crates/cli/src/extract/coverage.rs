// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage percentage extraction.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// A recognizable coverage summary line.
#[derive(Debug, Clone, Copy)]
pub struct CoverageSignature {
    /// Tool hints this signature belongs to. Empty means every tool.
    pub tools: &'static [&'static str],
    /// Substring a line must contain before the pattern is tried.
    pub marker: &'static str,
    /// Pattern whose first capture group is the percentage.
    pub pattern: &'static str,
}

/// Known coverage report signatures, in priority order.
pub const COVERAGE_SIGNATURES: &[CoverageSignature] = &[
    // jest / vitest text table: "All files |   87.5 |  ..."
    CoverageSignature {
        tools: &["jest", "vitest", "npm", "npx", "yarn", "pnpm", "bun"],
        marker: "All files",
        pattern: r"All files[^\d]*(\d+(?:\.\d+)?)",
    },
    // JaCoCo via maven/gradle: "Total ... 87.5% ..."
    CoverageSignature {
        tools: &["mvn", "mvnw", "maven", "gradle", "gradlew", "jacoco"],
        marker: "Total",
        pattern: r"Total.*?(\d+(?:\.\d+)?)\s*%",
    },
    // pytest-cov: "TOTAL    120    6    95%"
    CoverageSignature {
        tools: &["pytest", "python", "python3", "coverage"],
        marker: "TOTAL",
        pattern: r"TOTAL.*?(\d+(?:\.\d+)?)%",
    },
    // go test -cover: "ok  pkg  0.01s  coverage: 87.5% of statements"
    CoverageSignature {
        tools: &["go"],
        marker: "coverage:",
        pattern: r"coverage:\s*(\d+(?:\.\d+)?)%",
    },
    // cargo tarpaulin: "87.50% coverage, 35/40 lines covered"
    CoverageSignature {
        tools: &["cargo", "tarpaulin"],
        marker: "% coverage",
        pattern: r"(\d+(?:\.\d+)?)% coverage",
    },
    // Generic "Coverage: 85%" summary lines.
    CoverageSignature {
        tools: &[],
        marker: "Coverage:",
        pattern: r"Coverage:\s*(\d+(?:\.\d+)?)\s*%",
    },
];

#[allow(clippy::expect_used)]
static COMPILED: LazyLock<Vec<(CoverageSignature, Regex)>> = LazyLock::new(|| {
    COVERAGE_SIGNATURES
        .iter()
        .map(|sig| (*sig, Regex::new(sig.pattern).expect("valid regex")))
        .collect()
});

/// Reduce a hint such as "/usr/bin/mvn" or "go test" to a bare tool name.
fn normalize_hint(hint: &str) -> String {
    let first = hint.split_whitespace().next().unwrap_or_default();
    Path::new(first)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(first)
        .to_lowercase()
}

/// Extract an overall coverage percentage from test output.
///
/// `hint` names the tool or suite type (e.g. "mvn", "go", "unit"). When it
/// names a known tool only that tool's signatures (plus generic ones) are
/// tried; otherwise every signature is. Lines are scanned in order and the
/// first in-range percentage wins.
pub fn extract_coverage(output: &str, hint: &str) -> Option<f64> {
    let hint = normalize_hint(hint);
    let claimed = COVERAGE_SIGNATURES
        .iter()
        .any(|sig| sig.tools.contains(&hint.as_str()));

    let signatures: Vec<&(CoverageSignature, Regex)> = COMPILED
        .iter()
        .filter(|(sig, _)| !claimed || sig.tools.is_empty() || sig.tools.contains(&hint.as_str()))
        .collect();

    for line in output.lines() {
        for (sig, re) in &signatures {
            if !line.contains(sig.marker) {
                continue;
            }
            let Some(value) = re
                .captures(line)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<f64>().ok())
            else {
                continue;
            };
            if (0.0..=100.0).contains(&value) {
                return Some(value);
            }
            tracing::warn!("ignoring out-of-range coverage value {} in: {}", value, line);
        }
    }

    None
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod tests;
