// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default: color only when stdout is a TTY outside CI

use std::io::IsTerminal;

use termcolor::ColorChoice;

use crate::env::names;
use crate::runner::SuiteStatus;

/// Resolve color choice from environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color. `COLOR` forces it.
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os(names::NO_COLOR).is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os(names::COLOR).is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || std::env::var_os(names::CI).is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Combine the CLI color flags with environment detection.
pub fn color_choice(force: bool, disable: bool) -> ColorChoice {
    if disable {
        ColorChoice::Never
    } else if force {
        ColorChoice::Always
    } else {
        resolve_color()
    }
}

/// Color specifications for the console summary.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    use crate::runner::SuiteStatus;

    /// Bold section header.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Green "PASS" indicator.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Red "FAIL" indicator.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Magenta "ERROR" indicator.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Magenta)).set_bold(true);
        spec
    }

    /// Yellow "SKIP" indicator.
    pub fn skip() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Cyan report path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    pub fn status(status: SuiteStatus) -> ColorSpec {
        match status {
            SuiteStatus::Passed => pass(),
            SuiteStatus::Failed => fail(),
            SuiteStatus::Error => error(),
            SuiteStatus::Skipped => skip(),
        }
    }
}

/// Fixed-width label for a status.
pub fn status_label(status: SuiteStatus) -> &'static str {
    match status {
        SuiteStatus::Passed => "PASS",
        SuiteStatus::Failed => "FAIL",
        SuiteStatus::Error => "ERROR",
        SuiteStatus::Skipped => "SKIP",
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
