// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Metric extraction from raw suite output.
//!
//! Both extractors are best-effort: output they do not recognize yields
//! `None`, never an error. Recognized formats live in signature tables so a
//! new tool is a new table row.

mod coverage;
mod performance;

pub use coverage::{COVERAGE_SIGNATURES, CoverageSignature, extract_coverage};
pub use performance::{PERFORMANCE_MARKERS, PerformanceField, PerformanceMetrics, extract_performance};
