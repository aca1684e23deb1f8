// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite registry.
//!
//! Catalogue of the suites tally knows how to run, plus the performance
//! benchmark each logical system is held to. The catalogue is built once at
//! startup, either from the built-in defaults or from `tally.toml`.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{CommandConfig, Config, SuiteConfig};
use crate::error::{Error, Result};

/// Default time a suite may run before it is killed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Default expected coverage percentage.
pub const DEFAULT_COVERAGE_THRESHOLD: f64 = 80.0;

/// Category of a test suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteType {
    Unit,
    Integration,
    E2e,
    Performance,
    Ui,
    System,
}

impl SuiteType {
    /// Every suite type, in display order.
    pub const ALL: [SuiteType; 6] = [
        SuiteType::Unit,
        SuiteType::Integration,
        SuiteType::E2e,
        SuiteType::Performance,
        SuiteType::Ui,
        SuiteType::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SuiteType::Unit => "unit",
            SuiteType::Integration => "integration",
            SuiteType::E2e => "e2e",
            SuiteType::Performance => "performance",
            SuiteType::Ui => "ui",
            SuiteType::System => "system",
        }
    }
}

impl fmt::Display for SuiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An executable plus its arguments. Never run through a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl SuiteCommand {
    /// Split a command line on whitespace. Returns None for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        Self::from_argv(line.split_whitespace().map(String::from).collect())
    }

    /// Build from an argument vector whose first element is the program.
    pub fn from_argv(argv: Vec<String>) -> Option<Self> {
        let mut iter = argv.into_iter();
        let program = iter.next().filter(|p| !p.trim().is_empty())?;
        Some(Self {
            program,
            args: iter.collect(),
        })
    }
}

impl fmt::Display for SuiteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Performance limits for one logical system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Benchmark {
    pub max_latency_ms: f64,
    pub min_throughput_rps: f64,
}

impl Benchmark {
    pub const fn new(max_latency_ms: f64, min_throughput_rps: f64) -> Self {
        Self {
            max_latency_ms,
            min_throughput_rps,
        }
    }
}

/// Immutable description of one suite.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteSpec {
    pub name: String,
    pub suite_type: SuiteType,
    pub command: SuiteCommand,
    pub working_dir: PathBuf,
    pub timeout: Duration,
    /// Informational only; analysis flags anything under 80%.
    pub coverage_threshold: f64,
    /// Suite-specific limits; take precedence over the registry benchmark.
    pub thresholds: Option<Benchmark>,
}

impl SuiteSpec {
    /// Create a spec with default directory, timeout and coverage threshold.
    pub fn new(name: impl Into<String>, suite_type: SuiteType, command: SuiteCommand) -> Self {
        Self {
            name: name.into(),
            suite_type,
            command,
            working_dir: PathBuf::from("."),
            timeout: DEFAULT_TIMEOUT,
            coverage_threshold: DEFAULT_COVERAGE_THRESHOLD,
            thresholds: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_coverage_threshold(mut self, threshold: f64) -> Self {
        self.coverage_threshold = threshold;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Benchmark) -> Self {
        self.thresholds = Some(thresholds);
        self
    }
}

/// Set of suite types selected for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteSelection {
    types: BTreeSet<SuiteType>,
}

impl SuiteSelection {
    /// Unit, e2e and system suites always run.
    pub fn defaults() -> Self {
        Self::only(&[SuiteType::Unit, SuiteType::E2e, SuiteType::System])
    }

    pub fn all() -> Self {
        Self::only(&SuiteType::ALL)
    }

    pub fn only(types: &[SuiteType]) -> Self {
        Self {
            types: types.iter().copied().collect(),
        }
    }

    pub fn with(mut self, suite_type: SuiteType) -> Self {
        self.types.insert(suite_type);
        self
    }

    pub fn contains(&self, suite_type: SuiteType) -> bool {
        self.types.contains(&suite_type)
    }

    pub fn types(&self) -> impl Iterator<Item = SuiteType> + '_ {
        self.types.iter().copied()
    }
}

impl Default for SuiteSelection {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Normalize a system name for benchmark lookup.
///
/// Lowercases and joins words with `_`, so "Load Balancer", "load-balancer"
/// and " LOAD_balancer " all become "load_balancer".
pub fn normalize_system_name(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Catalogue of suites and benchmarks.
#[derive(Debug, Clone)]
pub struct Registry {
    suites: Vec<SuiteSpec>,
    benchmarks: BTreeMap<String, Benchmark>,
}

impl Registry {
    /// Build a registry, rejecting duplicate suite names.
    pub fn new(suites: Vec<SuiteSpec>, benchmarks: BTreeMap<String, Benchmark>) -> Result<Self> {
        let mut seen = HashSet::new();
        for suite in &suites {
            if !seen.insert(suite.name.as_str()) {
                return Err(Error::Config {
                    message: format!("duplicate suite name: {}", suite.name),
                    path: None,
                });
            }
        }

        let benchmarks = benchmarks
            .into_iter()
            .map(|(name, bench)| (normalize_system_name(&name), bench))
            .collect();

        Ok(Self { suites, benchmarks })
    }

    /// The built-in catalogue.
    pub fn builtin() -> Self {
        Self {
            suites: builtin_suites(),
            benchmarks: builtin_benchmarks(),
        }
    }

    /// Build from a config file.
    ///
    /// Configured suites replace the built-in catalogue; configured
    /// benchmarks are merged over the built-in table. Relative suite
    /// directories resolve against `base_dir`.
    pub fn from_config(config: &Config, base_dir: &Path) -> Result<Self> {
        let suites = if config.suite.is_empty() {
            builtin_suites()
        } else {
            config
                .suite
                .iter()
                .map(|suite| suite_from_config(suite, base_dir))
                .collect::<Result<Vec<_>>>()?
        };

        let mut benchmarks = builtin_benchmarks();
        for (name, bench) in &config.benchmark {
            benchmarks.insert(normalize_system_name(name), *bench);
        }

        Self::new(suites, benchmarks)
    }

    /// Every suite, in declaration order.
    pub fn suites(&self) -> &[SuiteSpec] {
        &self.suites
    }

    /// Suites whose type is selected, in declaration order.
    pub fn list_suites(&self, selection: &SuiteSelection) -> Vec<&SuiteSpec> {
        self.suites
            .iter()
            .filter(|s| selection.contains(s.suite_type))
            .collect()
    }

    /// Look up a suite by exact name.
    pub fn suite(&self, name: &str) -> Option<&SuiteSpec> {
        self.suites.iter().find(|s| s.name == name)
    }

    /// Benchmark for a logical system name (case and whitespace insensitive).
    pub fn benchmark_for(&self, system: &str) -> Option<Benchmark> {
        self.benchmarks.get(&normalize_system_name(system)).copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn suite_from_config(suite: &SuiteConfig, base_dir: &Path) -> Result<SuiteSpec> {
    let command = match &suite.command {
        CommandConfig::Line(line) => SuiteCommand::parse(line),
        CommandConfig::Argv(argv) => SuiteCommand::from_argv(argv.clone()),
    }
    .ok_or_else(|| Error::Config {
        message: format!("suite `{}` has an empty command", suite.name),
        path: None,
    })?;

    if let Some(threshold) = suite.coverage_threshold
        && !(0.0..=100.0).contains(&threshold)
    {
        return Err(Error::Config {
            message: format!(
                "suite `{}`: coverage_threshold must be between 0 and 100",
                suite.name
            ),
            path: None,
        });
    }

    let working_dir = match &suite.dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => base_dir.join(dir),
        None => base_dir.to_path_buf(),
    };

    let mut spec = SuiteSpec::new(suite.name.clone(), suite.suite_type, command)
        .with_working_dir(working_dir)
        .with_timeout(suite.timeout.unwrap_or(DEFAULT_TIMEOUT))
        .with_coverage_threshold(suite.coverage_threshold.unwrap_or(DEFAULT_COVERAGE_THRESHOLD));

    if let (Some(max_latency_ms), Some(min_throughput_rps)) =
        (suite.max_latency_ms, suite.min_throughput_rps)
    {
        spec = spec.with_thresholds(Benchmark::new(max_latency_ms, min_throughput_rps));
    } else if suite.max_latency_ms.is_some() || suite.min_throughput_rps.is_some() {
        return Err(Error::Config {
            message: format!(
                "suite `{}`: max_latency_ms and min_throughput_rps must be set together",
                suite.name
            ),
            path: None,
        });
    }

    Ok(spec)
}

/// (name, type, command, coverage threshold)
const BUILTIN_SUITES: &[(&str, SuiteType, &str, f64)] = &[
    ("Backend Unit Tests", SuiteType::Unit, "npm run test:backend", 90.0),
    ("Frontend Unit Tests", SuiteType::Unit, "npm run test:frontend", 85.0),
    ("E2E Tests", SuiteType::E2e, "npm run test:e2e", 80.0),
    ("Integration Tests", SuiteType::Integration, "npm run test:integration", 85.0),
    ("Performance Tests", SuiteType::Performance, "npm run test:performance", 0.0),
    ("Java Unit Tests", SuiteType::Unit, "mvn test -Pcoverage", 90.0),
    ("Java Integration Tests", SuiteType::Integration, "mvn verify -Pcoverage", 85.0),
    ("Go Unit Tests", SuiteType::Unit, "go test ./operator/... -v -cover", 90.0),
    (
        "Go Integration Tests",
        SuiteType::Integration,
        "go test ./operator/... -tags=integration -v",
        85.0,
    ),
    ("TinyURL System Tests", SuiteType::System, "npm test systems/tinyurl-system/", 95.0),
    ("Newsfeed System Tests", SuiteType::System, "npm test systems/newsfeed-system/", 95.0),
    (
        "Google Docs System Tests",
        SuiteType::System,
        "npm test systems/google-docs-system/",
        95.0,
    ),
    ("Quora System Tests", SuiteType::System, "npm test systems/quora-system/", 95.0),
    (
        "Load Balancer System Tests",
        SuiteType::System,
        "npm test systems/load-balancer-system/",
        95.0,
    ),
    (
        "Monitoring System Tests",
        SuiteType::System,
        "npm test systems/monitoring-system/",
        95.0,
    ),
    (
        "Typeahead System Tests",
        SuiteType::System,
        "npm test systems/typeahead-system/",
        95.0,
    ),
    (
        "Messaging System Tests",
        SuiteType::System,
        "npm test systems/messaging-system/",
        95.0,
    ),
    (
        "Web Crawler System Tests",
        SuiteType::System,
        "npm test systems/web-crawler-system/",
        95.0,
    ),
    ("DNS System Tests", SuiteType::System, "npm test systems/dns-system/", 95.0),
];

/// (system, max latency ms, min throughput rps)
const BUILTIN_BENCHMARKS: &[(&str, f64, f64)] = &[
    ("tinyurl", 100.0, 1000.0),
    ("newsfeed", 200.0, 500.0),
    ("google_docs", 300.0, 200.0),
    ("quora", 150.0, 800.0),
    ("load_balancer", 50.0, 2000.0),
    ("monitoring", 100.0, 1000.0),
    ("typeahead", 50.0, 5000.0),
    ("messaging", 100.0, 1000.0),
    ("web_crawler", 500.0, 100.0),
    ("dns", 10.0, 10000.0),
];

fn builtin_suites() -> Vec<SuiteSpec> {
    BUILTIN_SUITES
        .iter()
        .filter_map(|&(name, suite_type, line, threshold)| {
            SuiteCommand::parse(line).map(|command| {
                SuiteSpec::new(name, suite_type, command).with_coverage_threshold(threshold)
            })
        })
        .collect()
}

fn builtin_benchmarks() -> BTreeMap<String, Benchmark> {
    BUILTIN_BENCHMARKS
        .iter()
        .map(|&(name, latency, throughput)| (name.to_string(), Benchmark::new(latency, throughput)))
        .collect()
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
