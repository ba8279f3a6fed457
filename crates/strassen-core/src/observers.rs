//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::observer::{RecursionEvent, RecursionObserver};

/// Null object: discards every event.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl RecursionObserver for NoOpObserver {
    fn on_event(&self, _event: &RecursionEvent) {}
}

/// Snapshot of the work performed by one or more multiplications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecursionStats {
    /// Calls that fell back to naive multiplication.
    pub base_cases: u64,
    /// Calls that split their operands.
    pub splits: u64,
    /// Levels whose subproblems ran concurrently.
    pub parallel_dispatches: u64,
    /// Levels whose subproblems ran one after another.
    pub sequential_dispatches: u64,
    /// Levels that completed the combine step.
    pub combines: u64,
    /// Deepest level reached (0 = top-level call).
    pub max_depth: usize,
}

impl RecursionStats {
    /// Total number of engine calls (each call is a base case or a split).
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.base_cases + self.splits
    }
}

/// Lock-free event counter.
#[derive(Default)]
pub struct CountingObserver {
    base_cases: AtomicU64,
    splits: AtomicU64,
    parallel_dispatches: AtomicU64,
    sequential_dispatches: AtomicU64,
    combines: AtomicU64,
    max_depth: AtomicUsize,
}

impl CountingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counter values.
    #[must_use]
    pub fn stats(&self) -> RecursionStats {
        RecursionStats {
            base_cases: self.base_cases.load(Ordering::Relaxed),
            splits: self.splits.load(Ordering::Relaxed),
            parallel_dispatches: self.parallel_dispatches.load(Ordering::Relaxed),
            sequential_dispatches: self.sequential_dispatches.load(Ordering::Relaxed),
            combines: self.combines.load(Ordering::Relaxed),
            max_depth: self.max_depth.load(Ordering::Relaxed),
        }
    }
}

impl RecursionObserver for CountingObserver {
    fn on_event(&self, event: &RecursionEvent) {
        self.max_depth.fetch_max(event.depth(), Ordering::Relaxed);
        let counter = match event {
            RecursionEvent::BaseCase { .. } => &self.base_cases,
            RecursionEvent::Split { .. } => &self.splits,
            RecursionEvent::Dispatch { parallel: true, .. } => &self.parallel_dispatches,
            RecursionEvent::Dispatch { parallel: false, .. } => &self.sequential_dispatches,
            RecursionEvent::Combine { .. } => &self.combines,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Forwards events to `tracing` at TRACE level.
pub struct LoggingObserver {
    max_depth: usize,
}

impl LoggingObserver {
    /// Log events from the top level down to `max_depth`; deeper events are dropped.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl RecursionObserver for LoggingObserver {
    fn on_event(&self, event: &RecursionEvent) {
        let (depth, size) = (event.depth(), event.size());
        if depth > self.max_depth {
            return;
        }
        match *event {
            RecursionEvent::BaseCase { .. } => trace!(depth, size, "base case"),
            RecursionEvent::Split { .. } => trace!(depth, size, "split"),
            RecursionEvent::Dispatch { parallel, .. } => {
                trace!(depth, size, parallel, "dispatch");
            }
            RecursionEvent::Combine { .. } => trace!(depth, size, "combine"),
        }
    }
}
