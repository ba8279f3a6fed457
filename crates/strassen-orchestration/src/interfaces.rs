//! Orchestration interfaces.

use std::time::Duration;

use strassen_core::multiplier::StrassenError;
use strassen_core::observers::RecursionStats;
use strassen_core::Matrix;

/// Result of running one multiplier.
#[derive(Debug)]
pub struct MultiplicationResult<T> {
    /// Multiplier name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<Matrix<T>, StrassenError>,
    /// Wall-clock duration.
    pub duration: Duration,
    /// Recursion work recorded while this multiplier ran.
    pub stats: RecursionStats,
}

impl<T> MultiplicationResult<T> {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Trait for presenting results to the user.
pub trait ResultPresenter<T>: Send + Sync {
    /// Present one multiplier's result.
    fn present_result(&self, result: &MultiplicationResult<T>, details: bool);

    /// Present a side-by-side comparison of several results.
    fn present_comparison(&self, results: &[MultiplicationResult<T>]);

    /// Present an error.
    fn present_error(&self, error: &str);
}
