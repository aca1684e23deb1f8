// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded parallel suite scheduling.
//!
//! Every spec handed to [`Scheduler::run_all`] yields exactly one outcome,
//! whether it passes, panics, or is abandoned by cancellation.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::registry::SuiteSpec;
use crate::runner::{SuiteExecutor, SuiteOutcome};

/// Default number of suites run at once.
pub const DEFAULT_JOBS: usize = 4;

const NOT_STARTED: &str = "not started: run interrupted";
const INTERRUPTED: &str = "interrupted before completion";
const COLLECT_POLL: Duration = Duration::from_millis(50);

/// Shared flag that stops a run. Cheap to clone; all clones observe the
/// same state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

enum Event {
    Started(usize),
    Finished(usize, SuiteOutcome),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Pending,
    Running,
    Done,
}

/// Runs suites on a fixed-size worker pool.
pub struct Scheduler {
    executor: Arc<dyn SuiteExecutor>,
    jobs: usize,
    cancel: CancelToken,
}

impl Scheduler {
    pub fn new(executor: Arc<dyn SuiteExecutor>, jobs: usize) -> Self {
        Self {
            executor,
            jobs: jobs.max(1),
            cancel: CancelToken::new(),
        }
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Run every spec and return outcomes in completion order.
    pub fn run_all(&self, specs: &[SuiteSpec]) -> Vec<SuiteOutcome> {
        self.run_all_with(specs, |_| {})
    }

    /// Like [`run_all`](Self::run_all), calling `on_complete` on the caller
    /// thread as each outcome is recorded.
    pub fn run_all_with<F>(&self, specs: &[SuiteSpec], mut on_complete: F) -> Vec<SuiteOutcome>
    where
        F: FnMut(&SuiteOutcome),
    {
        if specs.is_empty() {
            return Vec::new();
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .thread_name(|i| format!("tally-worker-{i}"))
            .build();

        match pool {
            Ok(pool) => self.run_pooled(&pool, specs, &mut on_complete),
            Err(e) => {
                tracing::warn!("cannot build worker pool ({}), running suites sequentially", e);
                self.run_sequential(specs, &mut on_complete)
            }
        }
    }

    fn run_pooled(
        &self,
        pool: &rayon::ThreadPool,
        specs: &[SuiteSpec],
        on_complete: &mut dyn FnMut(&SuiteOutcome),
    ) -> Vec<SuiteOutcome> {
        let (tx, rx) = crossbeam_channel::unbounded();

        for (index, spec) in specs.iter().enumerate() {
            let tx = tx.clone();
            let spec = spec.clone();
            let executor = Arc::clone(&self.executor);
            let cancel = self.cancel.clone();
            pool.spawn(move || {
                // Send failures mean the collector already gave up on this run.
                if cancel.is_cancelled() {
                    let outcome = SuiteOutcome::skipped(&spec, NOT_STARTED);
                    tx.send(Event::Finished(index, outcome)).ok();
                    return;
                }
                tx.send(Event::Started(index)).ok();
                let outcome = run_isolated(executor.as_ref(), &spec);
                tx.send(Event::Finished(index, outcome)).ok();
            });
        }
        drop(tx);

        self.collect(specs, &rx, on_complete)
    }

    fn collect(
        &self,
        specs: &[SuiteSpec],
        rx: &Receiver<Event>,
        on_complete: &mut dyn FnMut(&SuiteOutcome),
    ) -> Vec<SuiteOutcome> {
        let mut slots = vec![Slot::Pending; specs.len()];
        let mut outcomes = Vec::with_capacity(specs.len());

        let mut record = |event: Event, slots: &mut [Slot], outcomes: &mut Vec<SuiteOutcome>| {
            match event {
                Event::Started(index) => {
                    if slots[index] == Slot::Pending {
                        slots[index] = Slot::Running;
                    }
                }
                Event::Finished(index, outcome) => {
                    if slots[index] != Slot::Done {
                        slots[index] = Slot::Done;
                        on_complete(&outcome);
                        outcomes.push(outcome);
                    }
                }
            }
        };

        while outcomes.len() < specs.len() && !self.cancel.is_cancelled() {
            match rx.recv_timeout(COLLECT_POLL) {
                Ok(event) => record(event, &mut slots, &mut outcomes),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        for event in rx.try_iter() {
            record(event, &mut slots, &mut outcomes);
        }

        let cancelled = self.cancel.is_cancelled();
        for (spec, slot) in specs.iter().zip(&slots) {
            let outcome = match (*slot, cancelled) {
                (Slot::Done, _) => continue,
                (Slot::Pending, true) => SuiteOutcome::skipped(spec, NOT_STARTED),
                (Slot::Running, true) => SuiteOutcome::skipped(spec, INTERRUPTED),
                (_, false) => SuiteOutcome::launch_error(
                    spec,
                    Duration::ZERO,
                    "worker exited without reporting an outcome",
                ),
            };
            on_complete(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    fn run_sequential(
        &self,
        specs: &[SuiteSpec],
        on_complete: &mut dyn FnMut(&SuiteOutcome),
    ) -> Vec<SuiteOutcome> {
        specs
            .iter()
            .map(|spec| {
                let outcome = if self.cancel.is_cancelled() {
                    SuiteOutcome::skipped(spec, NOT_STARTED)
                } else {
                    run_isolated(self.executor.as_ref(), spec)
                };
                on_complete(&outcome);
                outcome
            })
            .collect()
    }
}

/// Run one suite, converting a panic into an error outcome.
fn run_isolated(executor: &dyn SuiteExecutor, spec: &SuiteSpec) -> SuiteOutcome {
    let start = Instant::now();
    match catch_unwind(AssertUnwindSafe(|| executor.run(spec))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!("suite {} panicked: {}", spec.name, message);
            SuiteOutcome::unknown(spec, start.elapsed(), &message)
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "suite runner panicked".to_string()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
