// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tally: run heterogeneous test suites and report on their health.

pub mod analysis;
pub mod cli;
pub mod color;
pub mod config;
pub mod env;
pub mod error;
pub mod extract;
pub mod output;
pub mod registry;
pub mod report;
pub mod runner;
pub mod scheduler;
pub mod verbose;

pub use analysis::{AggregateReport, RunInfo, aggregate};
pub use cli::{Cli, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use registry::{Registry, SuiteSelection, SuiteSpec, SuiteType};
pub use runner::{ProcessRunner, SuiteExecutor, SuiteOutcome, SuiteStatus};
pub use scheduler::{CancelToken, Scheduler};
