// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::registry::{SuiteSelection, SuiteType};

/// Default directory reports are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "test-reports";

/// Run heterogeneous test suites and report on their health
#[derive(Parser)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Also run integration suites
    #[arg(short, long)]
    pub integration: bool,

    /// Also run performance suites
    #[arg(short, long)]
    pub performance: bool,

    /// Also run UI suites
    #[arg(short, long)]
    pub ui: bool,

    /// Run every suite type
    #[arg(short, long)]
    pub all: bool,

    /// Directory for report artifacts [default: test-reports]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Report echoed to stdout after the run (all formats are always written)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Number of suites to run at once [default: 4]
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "TALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print per-suite progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// List the selected suites and exit
    #[arg(long)]
    pub list: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

impl Cli {
    /// Suite types selected by the flags.
    pub fn selection(&self) -> SuiteSelection {
        if self.all {
            return SuiteSelection::all();
        }
        let mut selection = SuiteSelection::defaults();
        if self.integration {
            selection = selection.with(SuiteType::Integration);
        }
        if self.performance {
            selection = selection.with(SuiteType::Performance);
        }
        if self.ui {
            selection = selection.with(SuiteType::Ui);
        }
        selection
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
    Xml,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
