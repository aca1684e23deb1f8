// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite execution.
//!
//! A [`SuiteExecutor`] turns one [`SuiteSpec`] into exactly one
//! [`SuiteOutcome`]. Expected failures (nonzero exit, timeout, missing
//! command or directory) are outcomes, not errors.

mod outcome;
mod process;

pub use outcome::{SuiteOutcome, SuiteStatus, UNKNOWN_SUITE};
pub use process::{ProcessRunner, run_with_timeout};

use crate::registry::SuiteSpec;

/// Runs a single suite to completion.
pub trait SuiteExecutor: Send + Sync {
    fn run(&self, spec: &SuiteSpec) -> SuiteOutcome;
}

impl<F> SuiteExecutor for F
where
    F: Fn(&SuiteSpec) -> SuiteOutcome + Send + Sync,
{
    fn run(&self, spec: &SuiteSpec) -> SuiteOutcome {
        self(spec)
    }
}
