// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration strings for suite timeouts.
//!
//! Supports formats:
//! - `"300s"` → 300 seconds
//! - `"500ms"` → 500 milliseconds
//! - `"5m"` → 5 minutes
//! - `"1.5s"` → 1.5 seconds
//! - `120` (bare integer) → 120 seconds

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Parse a duration string into a Duration.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    // Milliseconds first: "ms" also ends in 's'
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        return Ok(Duration::from_millis(n));
    }

    if let Some(secs) = s.strip_suffix('s') {
        let n: f64 = secs
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        if !n.is_finite() || n < 0.0 {
            return Err(format!("negative duration: {s}"));
        }
        return Ok(Duration::from_secs_f64(n));
    }

    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        return Ok(Duration::from_secs(n * 60));
    }

    Err(format!(
        "invalid duration format: {s} (use 300s, 500ms, or 5m)"
    ))
}

/// Render a timeout the way suite messages report it: seconds with up to
/// millisecond precision and no trailing zeros ("300s", "1.5s", "0.04s").
pub fn format_secs(duration: Duration) -> String {
    if duration.subsec_nanos() == 0 {
        return format!("{}s", duration.as_secs());
    }
    let fixed = format!("{:.3}", duration.as_secs_f64());
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "0" {
        // Below one millisecond
        return format!("{:?}", duration);
    }
    format!("{trimmed}s")
}

/// Either a duration string or a bare number of seconds.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Text(String),
    Seconds(u64),
}

/// Deserialize an optional timeout.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<RawDuration> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(None),
        Some(RawDuration::Seconds(n)) => Ok(Some(Duration::from_secs(n))),
        Some(RawDuration::Text(s)) => parse_duration(&s).map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
