//! Cooperative cancellation for recursive multiplications.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::multiplier::StrassenError;

/// Cooperative cancellation token with an optional deadline.
///
/// Tokens form a tree: a token created with [`CancellationToken::child`]
/// observes its own flag and every ancestor's flag, so cancelling a parent
/// cancels all of its descendants while cancelling a child leaves the parent
/// untouched.
///
/// # Example
/// ```
/// use strassen_core::progress::CancellationToken;
///
/// let parent = CancellationToken::new();
/// let child = parent.child();
/// assert!(!child.is_cancelled());
///
/// parent.cancel();
/// assert!(child.is_cancelled());
/// assert!(child.check_cancelled().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    parent: Option<Arc<CancellationToken>>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    /// Create a new root token with no deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            parent: None,
            deadline: None,
        }
    }

    /// Create a new root token that expires after `timeout`.
    ///
    /// A timeout too large to represent as an instant never expires.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
            ..Self::new()
        }
    }

    /// Derive a child token. The child inherits the deadline.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            parent: Some(Arc::new(self.clone())),
            deadline: self.deadline,
        }
    }

    /// Request cancellation of this token and its descendants.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether this token or any ancestor was cancelled (deadline excluded).
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
            || self.parent.as_ref().is_some_and(|p| p.is_cancelled())
    }

    /// Whether the deadline, if any, has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Time left before the deadline; `None` without a deadline.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Checkpoint: `Cancelled` if cancelled, `Timeout` if the deadline passed.
    pub fn check_cancelled(&self) -> Result<(), StrassenError> {
        if self.is_cancelled() {
            return Err(StrassenError::Cancelled);
        }
        if self.is_expired() {
            return Err(StrassenError::Timeout("deadline reached".to_string()));
        }
        Ok(())
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
