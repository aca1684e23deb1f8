// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles tally.toml parsing with version validation and unknown key warnings.

pub mod duration;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::registry::{Benchmark, SuiteType};

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// File name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "tally.toml";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "run", "suite", "benchmark"];

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Run-wide settings.
    #[serde(default)]
    pub run: RunConfig,

    /// Suites to run. When non-empty, replaces the built-in catalogue.
    #[serde(default)]
    pub suite: Vec<SuiteConfig>,

    /// Per-system performance benchmarks, merged over the built-in table.
    #[serde(default)]
    pub benchmark: BTreeMap<String, Benchmark>,
}

/// Run-wide settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Worker pool width.
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Report output directory.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Configuration for a single suite.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Unique suite name.
    pub name: String,

    /// Suite category.
    #[serde(rename = "type")]
    pub suite_type: SuiteType,

    /// Command line, either as one string or as an argument array.
    pub command: CommandConfig,

    /// Working directory, relative to the config file's directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Kill the suite if it runs longer than this.
    #[serde(default, deserialize_with = "duration::deserialize_option")]
    pub timeout: Option<Duration>,

    /// Expected coverage percentage (informational).
    #[serde(default)]
    pub coverage_threshold: Option<f64>,

    /// Maximum acceptable latency for performance suites.
    #[serde(default)]
    pub max_latency_ms: Option<f64>,

    /// Minimum acceptable throughput for performance suites.
    #[serde(default)]
    pub min_throughput_rps: Option<f64>,
}

/// Suite command as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CommandConfig {
    /// Whitespace-separated command line (no shell quoting).
    Line(String),
    /// Explicit argument vector.
    Argv(Vec<String>),
}

/// Load config with warnings for unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content.
///
/// Unknown top-level keys are reported on stderr and ignored.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let mut table: toml::Table =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = match table.get("version") {
        Some(toml::Value::Integer(v)) => *v,
        Some(_) => return Err(config_error("version must be an integer".to_string())),
        None => return Err(config_error("missing required field: version".to_string())),
    };

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade tally to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let unknown: Vec<String> = table
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();
    for key in &unknown {
        warn_unknown_key(path, key);
        table.remove(key);
    }

    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| config_error(e.to_string()))
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!("unrecognized config key `{}` in {}", key, path.display());
    eprintln!(
        "tally: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Find tally.toml starting from `start_dir` and walking up to the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "TALLY_CONFIG")
/// 2. Discovery from current directory up to git root
/// 3. None (use the built-in catalogue)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
