// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run command implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use chrono::Utc;

use tally::analysis::{RunInfo, aggregate};
use tally::cli::{Cli, DEFAULT_OUTPUT_DIR, OutputFormat};
use tally::color::color_choice;
use tally::config::{self, RunConfig};
use tally::error::ExitCode;
use tally::output::ConsoleSummary;
use tally::registry::{Registry, SuiteSpec};
use tally::report::{create_formatter, write_reports};
use tally::runner::ProcessRunner;
use tally::scheduler::{CancelToken, DEFAULT_JOBS, Scheduler};
use tally::verbose::VerboseLogger;

/// Registry and run settings, plus the directory relative config paths
/// resolve against.
fn load_registry(cli: &Cli, cwd: &Path) -> anyhow::Result<(Registry, RunConfig, PathBuf)> {
    match config::resolve_config(cli.config.as_deref(), cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let config = config::load(&path)?;
            let base = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            let registry = Registry::from_config(&config, &base)?;
            Ok((registry, config.run, base))
        }
        None => {
            tracing::debug!("no config file found, using built-in suites");
            Ok((Registry::builtin(), RunConfig::default(), cwd.to_path_buf()))
        }
    }
}

/// Run the selected suites, print the summary and write every report.
pub fn run(cli: &Cli, cancel: &CancelToken) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let (registry, run_config, base) = load_registry(cli, &cwd)?;

    let selected: Vec<&SuiteSpec> = registry.list_suites(&cli.selection());
    let mut console = ConsoleSummary::stdout(color_choice(cli.color, cli.no_color));

    if cli.list {
        console.write_suite_list(&selected)?;
        return Ok(ExitCode::Success);
    }

    let jobs = cli
        .jobs
        .map(usize::from)
        .or(run_config.jobs)
        .unwrap_or(DEFAULT_JOBS);
    let output_dir = match (&cli.output, run_config.output) {
        (Some(dir), _) => dir.clone(),
        (None, Some(dir)) => base.join(dir),
        (None, None) => PathBuf::from(DEFAULT_OUTPUT_DIR),
    };

    let verbose = VerboseLogger::new(cli.verbose);
    verbose.section(&format!("Running {} suites ({} jobs)", selected.len(), jobs));
    for spec in &selected {
        verbose.suite(spec);
    }

    let specs: Vec<SuiteSpec> = selected.into_iter().cloned().collect();
    let scheduler =
        Scheduler::new(Arc::new(ProcessRunner::new()), jobs).with_cancel(cancel.clone());

    let started_at = Utc::now();
    let start = Instant::now();
    let outcomes = scheduler.run_all_with(&specs, |outcome| verbose.outcome(outcome));
    let report = aggregate(outcomes, &registry, RunInfo::new(started_at, start.elapsed()));

    match cli.format {
        OutputFormat::Text => console.write_report(&report)?,
        format => console.write_raw(&create_formatter(format).format(&report)?)?,
    }

    let written = write_reports(&report, &output_dir)?;
    if cli.format == OutputFormat::Text {
        console.write_artifacts(&written)?;
    }

    if cancel.is_cancelled() {
        eprintln!("tally: interrupted");
        return Ok(ExitCode::Interrupted);
    }
    Ok(if report.has_failures() {
        ExitCode::SuiteFailed
    } else {
        ExitCode::Success
    })
}
