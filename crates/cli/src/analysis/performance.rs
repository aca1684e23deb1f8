// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

use serde::{Serialize, Serializer};

use crate::registry::{Benchmark, Registry, SuiteType, normalize_system_name};
use crate::runner::SuiteOutcome;

/// Suffixes stripped from a suite name to find its system, tried in order.
const SYSTEM_SUFFIXES: &[&str] = &["system tests", "performance tests", "tests"];

/// Recommendation added when any bottleneck is found.
pub const OPTIMIZE_BOTTLENECKS: &str = "Consider optimizing systems with performance bottlenecks";

/// Which benchmark limit was violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BottleneckKind {
    HighLatency { observed_ms: f64, limit_ms: f64 },
    LowThroughput { observed_rps: f64, limit_rps: f64 },
}

/// A performance outcome that violated its benchmark.
#[derive(Debug, Clone, PartialEq)]
pub struct Bottleneck {
    pub system: String,
    pub kind: BottleneckKind,
}

impl fmt::Display for Bottleneck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BottleneckKind::HighLatency { observed_ms, .. } => {
                write!(f, "{}: High latency ({}ms)", self.system, observed_ms)
            }
            BottleneckKind::LowThroughput { observed_rps, .. } => {
                write!(f, "{}: Low throughput ({} rps)", self.system, observed_rps)
            }
        }
    }
}

impl Serialize for Bottleneck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceVerdict {
    Good,
    NeedsImprovement,
}

impl PerformanceVerdict {
    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceVerdict::Good => "good",
            PerformanceVerdict::NeedsImprovement => "needs_improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceAnalysis {
    pub overall_performance: PerformanceVerdict,
    pub bottlenecks: Vec<Bottleneck>,
    pub recommendations: Vec<String>,
}

/// Logical system a suite belongs to: its name without a trailing
/// "System Tests", "Performance Tests" or "Tests", normalized.
pub fn system_name(suite_name: &str) -> String {
    let trimmed = suite_name.trim();
    let lower = trimmed.to_lowercase();
    let base = SYSTEM_SUFFIXES
        .iter()
        .find(|suffix| lower.ends_with(*suffix) && lower.len() > suffix.len())
        .map(|suffix| &lower[..lower.len() - suffix.len()])
        .unwrap_or(lower.as_str());
    normalize_system_name(base)
}

/// Compare one outcome's metrics with a benchmark.
fn bottlenecks_for(outcome: &SuiteOutcome, system: &str, bench: Benchmark) -> Vec<Bottleneck> {
    let Some(metrics) = &outcome.performance_metrics else {
        return Vec::new();
    };

    let mut found = Vec::new();
    if let Some(latency) = metrics.latency_ms
        && latency > bench.max_latency_ms
    {
        found.push(Bottleneck {
            system: system.to_string(),
            kind: BottleneckKind::HighLatency {
                observed_ms: latency,
                limit_ms: bench.max_latency_ms,
            },
        });
    }
    if let Some(throughput) = metrics.throughput_rps
        && throughput < bench.min_throughput_rps
    {
        found.push(Bottleneck {
            system: system.to_string(),
            kind: BottleneckKind::LowThroughput {
                observed_rps: throughput,
                limit_rps: bench.min_throughput_rps,
            },
        });
    }
    found
}

/// Flag performance outcomes that miss their benchmark.
///
/// A suite's own thresholds win over the registry benchmark for its system.
pub fn analyze_performance(outcomes: &[SuiteOutcome], registry: &Registry) -> PerformanceAnalysis {
    let mut bottlenecks = Vec::new();

    for outcome in outcomes {
        if outcome.suite_type != SuiteType::Performance {
            continue;
        }
        let system = system_name(&outcome.name);
        let bench = registry
            .suite(&outcome.name)
            .and_then(|spec| spec.thresholds)
            .or_else(|| registry.benchmark_for(&system));
        let Some(bench) = bench else {
            tracing::debug!("no benchmark for system {}", system);
            continue;
        };
        bottlenecks.extend(bottlenecks_for(outcome, &system, bench));
    }

    if bottlenecks.is_empty() {
        PerformanceAnalysis {
            overall_performance: PerformanceVerdict::Good,
            bottlenecks,
            recommendations: Vec::new(),
        }
    } else {
        PerformanceAnalysis {
            overall_performance: PerformanceVerdict::NeedsImprovement,
            bottlenecks,
            recommendations: vec![OPTIMIZE_BOTTLENECKS.to_string()],
        }
    }
}
