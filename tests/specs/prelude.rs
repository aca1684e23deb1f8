// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the tally binary
pub fn tally_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tally"));
    cmd.env_remove("TALLY_CONFIG")
        .env_remove("TALLY_LOG")
        .env_remove("COLOR");
    cmd
}

/// A `[[suite]]` table running `script` through `sh -c`.
///
/// The script is written as a TOML literal string, so it must not contain
/// single quotes.
pub fn suite(name: &str, suite_type: &str, script: &str) -> String {
    format!(
        "\n[[suite]]\nname = \"{name}\"\ntype = \"{suite_type}\"\ncommand = [\"sh\", \"-c\", '{script}']\n"
    )
}

/// Temporary project directory holding a `tally.toml`.
///
/// A `.git` directory stops config discovery from walking above it.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.file("tally.toml", config);
        project
    }

    /// Config with `version = 1` followed by `suites`.
    pub fn with_suites(suites: &[String]) -> Self {
        Self::with_config(&format!("version = 1\n{}", suites.concat()))
    }

    pub fn file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn reports(&self) -> PathBuf {
        self.path().join("test-reports")
    }

    /// tally invoked inside the project, without color.
    pub fn cmd(&self) -> Command {
        let mut cmd = tally_cmd();
        cmd.current_dir(self.path()).env("NO_COLOR", "1");
        cmd
    }

    /// Parsed `test_report.json` from the default output directory.
    pub fn json_report(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.reports().join("test_report.json")).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}
