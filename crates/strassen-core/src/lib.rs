//! # strassen-core
//!
//! Core library for Strassen-rs: dense matrices, naive and Strassen
//! multiplication, and a depth-bounded parallel dispatcher for the seven
//! recursive subproblems.

pub mod combine;
pub mod constants;
pub mod dispatcher;
pub mod engine;
pub mod generator;
pub mod matrix;
pub mod matrix_ops;
pub mod multiplier;
pub mod naive;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;
pub mod registry;
pub mod scalar;

// Re-exports
pub use constants::{exit_codes, DEFAULT_MAX_PARALLEL_DEPTH, DEFAULT_THRESHOLD};
pub use engine::StrassenEngine;
pub use matrix::Matrix;
pub use multiplier::{MatrixMultiplier, StrassenError, StrassenMultiplier};
pub use naive::{naive_multiply, NaiveMultiplier};
pub use observer::{RecursionEvent, RecursionObserver};
pub use observers::{CountingObserver, NoOpObserver, RecursionStats};
pub use options::{PaddingPolicy, StrassenConfig};
pub use progress::CancellationToken;
pub use registry::{DefaultFactory, MultiplierFactory};
pub use scalar::Scalar;

/// Multiply two square matrices of equal size with Strassen's algorithm.
///
/// Operands of side length `<= threshold` are multiplied naively; recursion
/// levels shallower than `max_parallel_depth` evaluate their seven
/// subproblems concurrently. Non-power-of-two sizes are accepted as long as
/// every split the recursion needs is exact. For padding, cancellation or
/// observation, use [`StrassenEngine`] directly.
///
/// # Example
/// ```
/// use strassen_core::{strassen_multiply, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = strassen_multiply(&a, &b, 1, 1).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn strassen_multiply<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    threshold: usize,
    max_parallel_depth: usize,
) -> Result<Matrix<T>, StrassenError> {
    let config = StrassenConfig::new(threshold, max_parallel_depth);
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    StrassenEngine::new(&config, &cancel, &observer).multiply(a, b)
}
