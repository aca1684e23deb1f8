// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External process execution.

use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{RecvTimeoutError, Sender};

use super::{SuiteExecutor, SuiteOutcome};
use crate::config::duration::format_secs;
use crate::extract::{extract_coverage, extract_performance};
use crate::registry::{SuiteSpec, SuiteType};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs each suite as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl SuiteExecutor for ProcessRunner {
    fn run(&self, spec: &SuiteSpec) -> SuiteOutcome {
        tracing::debug!("starting {}: {}", spec.name, spec.command);

        if !spec.working_dir.is_dir() {
            return SuiteOutcome::launch_error(
                spec,
                Duration::ZERO,
                format!("working directory not found: {}", spec.working_dir.display()),
            );
        }

        let start = Instant::now();
        let child = Command::new(&spec.command.program)
            .args(&spec.command.args)
            .current_dir(&spec.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => {
                return SuiteOutcome::launch_error(
                    spec,
                    start.elapsed(),
                    format!("failed to start `{}`: {}", spec.command.program, e),
                );
            }
        };

        let result = run_with_timeout(child, spec.timeout);
        let duration = start.elapsed();

        let outcome = match result {
            Ok(output) => classify(spec, &output, duration),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => SuiteOutcome::timed_out(spec, duration),
            Err(e) => SuiteOutcome::launch_error(spec, duration, e),
        };

        tracing::debug!(
            "finished {} ({}) in {:.2}s",
            outcome.name,
            outcome.status,
            duration.as_secs_f64()
        );
        outcome
    }
}

fn classify(spec: &SuiteSpec, output: &Output, duration: Duration) -> SuiteOutcome {
    let stdout = String::from_utf8_lossy(&output.stdout);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return SuiteOutcome::failed(spec, duration, output.status.code(), &stderr);
    }

    let coverage = extract_coverage(&stdout, tool_hint(&spec.command.program));
    let performance = if spec.suite_type == SuiteType::Performance {
        extract_performance(&stdout)
    } else {
        None
    };

    SuiteOutcome::passed(spec, duration)
        .with_coverage(coverage)
        .with_performance(performance)
}

/// File name of the program, used to narrow coverage signatures.
fn tool_hint(program: &str) -> &str {
    Path::new(program)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(program)
}

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Wait for a child process, killing it once `timeout` elapses.
///
/// Stdout and stderr are drained on background threads while the child is
/// polled, so a child that fills a pipe buffer cannot stall. The timeout
/// covers both the child and its pipes: a background grandchild that keeps
/// them open past the deadline also yields `ErrorKind::TimedOut`. Readers
/// still blocked at that point are left detached.
pub fn run_with_timeout(mut child: Child, timeout: Duration) -> io::Result<Output> {
    let deadline = Instant::now() + timeout;
    let (tx, rx) = crossbeam_channel::bounded(2);
    let mut pending = 0;
    if let Some(pipe) = child.stdout.take() {
        drain(Stream::Stdout, pipe, tx.clone());
        pending += 1;
    }
    if let Some(pipe) = child.stderr.take() {
        drain(Stream::Stderr, pipe, tx.clone());
        pending += 1;
    }
    drop(tx);

    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                child.kill().ok();
                child.wait().ok();
                return Err(timed_out(timeout));
            }
            None => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                thread::sleep(POLL_INTERVAL.min(remaining));
            }
        }
    };

    let mut output = Output {
        status,
        stdout: Vec::new(),
        stderr: Vec::new(),
    };
    for _ in 0..pending {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, buf)) => output.stdout = buf,
            Ok((Stream::Stderr, buf)) => output.stderr = buf,
            Err(RecvTimeoutError::Timeout) => {
                tracing::debug!("child exited but its pipes are still held open");
                return Err(timed_out(timeout));
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    Ok(output)
}

fn timed_out(timeout: Duration) -> io::Error {
    io::Error::new(
        io::ErrorKind::TimedOut,
        format!("command timed out after {}", format_secs(timeout)),
    )
}

fn drain<R: Read + Send + 'static>(stream: Stream, mut pipe: R, tx: Sender<(Stream, Vec<u8>)>) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf).ok();
        // The receiver is gone once the deadline has passed.
        tx.send((stream, buf)).ok();
    });
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
