//! Observer pattern for recursion events.
//!
//! The engine reports each state it passes through (base case, split,
//! dispatch, combine) so callers can count work, log it, or assert on the
//! shape of a recursion without touching the engine itself.

use std::sync::Arc;

use parking_lot::RwLock;

/// One step of the recursive engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionEvent {
    /// A call fell back to naive multiplication.
    BaseCase { depth: usize, size: usize },
    /// Both operands were split into quadrants.
    Split { depth: usize, size: usize },
    /// The seven subproblems were handed to the dispatcher.
    Dispatch {
        depth: usize,
        size: usize,
        parallel: bool,
    },
    /// The seven products were combined and joined.
    Combine { depth: usize, size: usize },
}

impl RecursionEvent {
    /// Recursion depth at which the event occurred (0 = top-level call).
    #[must_use]
    pub fn depth(&self) -> usize {
        match *self {
            Self::BaseCase { depth, .. }
            | Self::Split { depth, .. }
            | Self::Dispatch { depth, .. }
            | Self::Combine { depth, .. } => depth,
        }
    }

    /// Side length of the operands at that level.
    #[must_use]
    pub fn size(&self) -> usize {
        match *self {
            Self::BaseCase { size, .. }
            | Self::Split { size, .. }
            | Self::Dispatch { size, .. }
            | Self::Combine { size, .. } => size,
        }
    }
}

/// Receives recursion events. Called concurrently from worker threads.
pub trait RecursionObserver: Send + Sync {
    fn on_event(&self, event: &RecursionEvent);
}

/// Fans events out to a dynamic set of observers.
pub struct ObserverSet {
    observers: RwLock<Vec<Arc<dyn RecursionObserver>>>,
}

impl ObserverSet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn RecursionObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for ObserverSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RecursionObserver for ObserverSet {
    fn on_event(&self, event: &RecursionEvent) {
        for observer in self.observers.read().iter() {
            observer.on_event(event);
        }
    }
}
