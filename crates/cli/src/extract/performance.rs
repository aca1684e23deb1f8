// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Latency, throughput and memory extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Performance metrics reported by a suite. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput_rps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<f64>,
}

impl PerformanceMetrics {
    pub fn is_empty(&self) -> bool {
        self.latency_ms.is_none() && self.throughput_rps.is_none() && self.memory_mb.is_none()
    }

    fn set(&mut self, field: PerformanceField, value: f64) {
        match field {
            PerformanceField::LatencyMs => self.latency_ms = Some(value),
            PerformanceField::ThroughputRps => self.throughput_rps = Some(value),
            PerformanceField::MemoryMb => self.memory_mb = Some(value),
        }
    }
}

/// Field a marker populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceField {
    LatencyMs,
    ThroughputRps,
    MemoryMb,
}

/// (field, keyword that must precede the number, unit pattern)
pub const PERFORMANCE_MARKERS: &[(PerformanceField, &str, &str)] = &[
    (PerformanceField::LatencyMs, "latency", "ms"),
    (PerformanceField::ThroughputRps, "throughput", "(?:rps|req/s)"),
    (PerformanceField::MemoryMb, "memory", "mb"),
];

/// A number with optional thousands separators ("1,200.5").
const NUMBER: &str = r"(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?";

#[allow(clippy::expect_used)]
static COMPILED: LazyLock<Vec<(PerformanceField, Regex)>> = LazyLock::new(|| {
    PERFORMANCE_MARKERS
        .iter()
        .map(|&(field, keyword, unit)| {
            let pattern = format!(r"(?i)\b{keyword}.*?({NUMBER})\s*{unit}\b");
            (field, Regex::new(&pattern).expect("valid regex"))
        })
        .collect()
});

/// Extract performance metrics from test output.
///
/// Each line is tested against every marker independently. When several
/// lines report the same field the last one wins. Returns None when no
/// field was found.
pub fn extract_performance(output: &str) -> Option<PerformanceMetrics> {
    let mut metrics = PerformanceMetrics::default();

    for line in output.lines() {
        for (field, re) in COMPILED.iter() {
            if let Some(value) = re
                .captures(line)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
            {
                metrics.set(*field, value);
            }
        }
    }

    (!metrics.is_empty()).then_some(metrics)
}

#[cfg(test)]
#[path = "performance_tests.rs"]
mod tests;
