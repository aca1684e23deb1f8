// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names read by tally.

/// Generated by `build.rs`.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Name of the env var holding the tracing filter.
pub fn tally_log_var() -> &'static str {
    names::TALLY_LOG
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
