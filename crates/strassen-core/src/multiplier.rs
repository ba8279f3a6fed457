//! Multiplier trait, error type, and the Strassen multiplier.
//!
//! `MatrixMultiplier` is the interface consumed by orchestration.
//! `StrassenMultiplier` wraps the recursive engine behind it; the naive
//! multiplier lives in `naive`.

use crate::engine::StrassenEngine;
use crate::matrix::Matrix;
use crate::observer::RecursionObserver;
use crate::options::StrassenConfig;
use crate::progress::CancellationToken;
use crate::scalar::Scalar;

/// Error type for matrix multiplication.
#[derive(Debug, thiserror::Error)]
pub enum StrassenError {
    /// Operand shapes are incompatible for the requested operation.
    #[error(
        "dimension mismatch in {op}: {}x{} vs {}x{}",
        .left.0, .left.1, .right.0, .right.1
    )]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// An exact quadrant split was required on an odd size.
    #[error("invalid size {size}: quadrant split requires an even size")]
    InvalidSize { size: usize },

    /// Configuration error.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// One of the seven subproblems of a recursion level failed.
    #[error("subproblem M{product} at depth {depth} failed: {source}")]
    SubtaskFailure {
        product: usize,
        depth: usize,
        #[source]
        source: Box<StrassenError>,
    },

    /// Multiplication was cancelled.
    #[error("multiplication cancelled")]
    Cancelled,

    /// Multiplication ran past its deadline.
    #[error("multiplication timed out: {0}")]
    Timeout(String),

    /// Results from different multipliers don't match.
    #[error("result mismatch between multipliers")]
    Mismatch,

    /// Every multiplier failed, so there is nothing to compare.
    #[error("no valid results")]
    NoValidResults,

    /// The dedicated worker pool could not be created.
    #[error("worker pool error: {0}")]
    Pool(String),
}

impl StrassenError {
    /// Attribute `err` to subproblem `product` of the level at `depth`.
    ///
    /// Cancellation and timeouts pass through unwrapped: they come from the
    /// caller, not from the subproblem.
    #[must_use]
    pub fn subtask(product: usize, depth: usize, err: StrassenError) -> Self {
        if err.is_cancellation() {
            return err;
        }
        Self::SubtaskFailure {
            product,
            depth,
            source: Box::new(err),
        }
    }

    /// `true` for `Cancelled` and `Timeout`.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Timeout(_))
    }

    /// The innermost error beneath any chain of `SubtaskFailure`s.
    #[must_use]
    pub fn root_cause(&self) -> &StrassenError {
        let mut err = self;
        while let Self::SubtaskFailure { source, .. } = err {
            err = &**source;
        }
        err
    }

    /// Product indices from the top level down to the failing subproblem.
    #[must_use]
    pub fn subtask_path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut err = self;
        while let Self::SubtaskFailure {
            product, source, ..
        } = err
        {
            path.push(*product);
            err = &**source;
        }
        path
    }
}

/// Interface for matrix multipliers, consumed by orchestration.
pub trait MatrixMultiplier<T: Scalar>: Send + Sync {
    /// Compute `a * b`.
    fn multiply(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        cancel: &CancellationToken,
        observer: &dyn RecursionObserver,
    ) -> Result<Matrix<T>, StrassenError>;

    /// Name of this multiplier.
    fn name(&self) -> &str;
}

/// Strassen multiplier with a fixed configuration.
pub struct StrassenMultiplier {
    config: StrassenConfig,
}

impl StrassenMultiplier {
    #[must_use]
    pub fn new(config: StrassenConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &StrassenConfig {
        &self.config
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new(StrassenConfig::default())
    }
}

impl<T: Scalar> MatrixMultiplier<T> for StrassenMultiplier {
    fn multiply(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        cancel: &CancellationToken,
        observer: &dyn RecursionObserver,
    ) -> Result<Matrix<T>, StrassenError> {
        StrassenEngine::new(&self.config, cancel, observer).multiply(a, b)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}
