// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console output for a run.

pub mod text;

pub use text::ConsoleSummary;
