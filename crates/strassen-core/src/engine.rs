//! Recursive Strassen engine.
//!
//! Each call walks BASE_CASE, or SPLIT → DISPATCH → COMBINE. The
//! configuration is threaded through every level unchanged; only the depth
//! and the cancellation token change as the recursion descends.

use rayon::ThreadPoolBuilder;
use tracing::{debug, trace};

use crate::combine::combine;
use crate::dispatcher::{ParallelDispatcher, RecursionTask};
use crate::matrix::Matrix;
use crate::matrix_ops::{add, join, split, sub, Quadrants};
use crate::multiplier::StrassenError;
use crate::naive::naive_multiply;
use crate::observer::{RecursionEvent, RecursionObserver};
use crate::options::{PaddingPolicy, StrassenConfig};
use crate::progress::CancellationToken;
use crate::scalar::Scalar;

/// Strassen multiplication bound to a configuration, a cancellation token
/// and an observer.
pub struct StrassenEngine<'a> {
    config: &'a StrassenConfig,
    cancel: &'a CancellationToken,
    observer: &'a dyn RecursionObserver,
    dispatcher: ParallelDispatcher,
}

impl<'a> StrassenEngine<'a> {
    #[must_use]
    pub fn new(
        config: &'a StrassenConfig,
        cancel: &'a CancellationToken,
        observer: &'a dyn RecursionObserver,
    ) -> Self {
        Self {
            config,
            cancel,
            observer,
            dispatcher: ParallelDispatcher::new(config.max_parallel_depth),
        }
    }

    /// Compute `a * b` for square operands of equal size.
    ///
    /// Configuration and shapes are validated before any submatrix work.
    pub fn multiply<T: Scalar>(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
    ) -> Result<Matrix<T>, StrassenError> {
        self.config.validate()?;
        let n = check_operands(a, b)?;
        debug!(
            size = n,
            threshold = self.config.threshold,
            max_parallel_depth = self.config.max_parallel_depth,
            padding = ?self.config.padding,
            "strassen multiply"
        );

        match self.config.workers {
            Some(workers) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .build()
                    .map_err(|e| StrassenError::Pool(e.to_string()))?;
                pool.install(|| self.multiply_padded(a, b, n))
            }
            None => self.multiply_padded(a, b, n),
        }
    }

    fn multiply_padded<T: Scalar>(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        n: usize,
    ) -> Result<Matrix<T>, StrassenError> {
        let needs_padding = self.config.padding == PaddingPolicy::ZeroPad
            && n > self.config.threshold
            && !n.is_power_of_two();
        if !needs_padding {
            return self.recurse(a, b, 0, self.cancel);
        }

        let padded = n.next_power_of_two();
        debug!(from = n, to = padded, "zero-padding operands");
        let product = self.recurse(&a.pad_to(padded), &b.pad_to(padded), 0, self.cancel)?;
        Ok(product.truncate(n, n))
    }

    fn recurse<T: Scalar>(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        depth: usize,
        cancel: &CancellationToken,
    ) -> Result<Matrix<T>, StrassenError> {
        cancel.check_cancelled()?;
        let n = a.rows();

        if n <= self.config.threshold {
            let product = naive_multiply(a, b)?;
            self.observer
                .on_event(&RecursionEvent::BaseCase { depth, size: n });
            return Ok(product);
        }

        let qa = split(a)?;
        let qb = split(b)?;
        self.observer
            .on_event(&RecursionEvent::Split { depth, size: n });

        let tasks = subproblems(qa, qb, depth + 1)?;
        let parallel = self.dispatcher.is_parallel(depth);
        trace!(depth, size = n, parallel, "dispatching subproblems");
        self.observer.on_event(&RecursionEvent::Dispatch {
            depth,
            size: n,
            parallel,
        });
        let products = self.dispatcher.dispatch(tasks, depth, cancel, |task, token| {
            self.recurse(&task.a, &task.b, task.depth, token)
        })?;

        let product = join(&combine(&products)?)?;
        self.observer
            .on_event(&RecursionEvent::Combine { depth, size: n });
        Ok(product)
    }
}

/// Both operands square and of equal size; returns that size.
fn check_operands<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<usize, StrassenError> {
    match (a.size(), b.size()) {
        (Some(n), Some(m)) if n == m => Ok(n),
        _ => Err(StrassenError::DimensionMismatch {
            op: "strassen",
            left: a.dims(),
            right: b.dims(),
        }),
    }
}

/// The ten sums and differences, and the seven subproblems they feed:
///
/// ```text
/// S1 = A11 + A22   T1 = B11 + B22   M1 = S1  * T1
/// S2 = A21 + A22                    M2 = S2  * B11
///                  T4 = B12 - B22   M3 = A11 * T4
///                  T5 = B21 - B11   M4 = A22 * T5
/// S3 = A11 + A12                    M5 = S3  * B22
/// S4 = A21 - A11   T2 = B11 + B12   M6 = S4  * T2
/// S5 = A12 - A22   T3 = B21 + B22   M7 = S5  * T3
/// ```
fn subproblems<T: Scalar>(
    a: Quadrants<T>,
    b: Quadrants<T>,
    depth: usize,
) -> Result<[RecursionTask<T>; 7], StrassenError> {
    let s1 = add(&a.q11, &a.q22)?;
    let t1 = add(&b.q11, &b.q22)?;
    let s2 = add(&a.q21, &a.q22)?;
    let s3 = add(&a.q11, &a.q12)?;
    let s4 = sub(&a.q21, &a.q11)?;
    let t2 = add(&b.q11, &b.q12)?;
    let s5 = sub(&a.q12, &a.q22)?;
    let t3 = add(&b.q21, &b.q22)?;
    let t4 = sub(&b.q12, &b.q22)?;
    let t5 = sub(&b.q21, &b.q11)?;

    let Quadrants { q11: a11, q22: a22, .. } = a;
    let Quadrants { q11: b11, q22: b22, .. } = b;

    Ok([
        RecursionTask::new(1, s1, t1, depth),
        RecursionTask::new(2, s2, b11, depth),
        RecursionTask::new(3, a11, t4, depth),
        RecursionTask::new(4, a22, t5, depth),
        RecursionTask::new(5, s3, b22, depth),
        RecursionTask::new(6, s4, t2, depth),
        RecursionTask::new(7, s5, t3, depth),
    ])
}
