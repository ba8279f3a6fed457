//! Fan-out/join of the seven Strassen subproblems.
//!
//! Levels shallower than `max_parallel_depth` evaluate their subproblems on
//! rayon's work-stealing pool; deeper levels run them in order on the calling
//! thread. Either way the caller blocks until all seven results are in and
//! receives them in the fixed order `M1..M7`.

use tracing::debug;

use crate::combine::Products;
use crate::matrix::Matrix;
use crate::multiplier::StrassenError;
use crate::progress::CancellationToken;
use crate::scalar::Scalar;

/// One of the seven independent subproblems of a recursion level.
#[derive(Debug, Clone)]
pub struct RecursionTask<T> {
    /// Index of the product this task computes (`1..=7`).
    pub product: usize,
    pub a: Matrix<T>,
    pub b: Matrix<T>,
    /// Depth at which the subproblem will run.
    pub depth: usize,
}

impl<T> RecursionTask<T> {
    #[must_use]
    pub fn new(product: usize, a: Matrix<T>, b: Matrix<T>, depth: usize) -> Self {
        Self {
            product,
            a,
            b,
            depth,
        }
    }
}

/// Depth-gated dispatcher for recursion tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelDispatcher {
    max_parallel_depth: usize,
}

impl ParallelDispatcher {
    #[must_use]
    pub fn new(max_parallel_depth: usize) -> Self {
        Self { max_parallel_depth }
    }

    /// Whether the level at `depth` fans out concurrently.
    #[must_use]
    pub fn is_parallel(&self, depth: usize) -> bool {
        depth < self.max_parallel_depth
    }

    /// Evaluate `tasks` with `run` and return their results as `M1..M7`.
    ///
    /// A failing task is reported as [`StrassenError::SubtaskFailure`] for
    /// the level at `depth`; no partial products are returned.
    pub fn dispatch<T, F>(
        &self,
        tasks: [RecursionTask<T>; 7],
        depth: usize,
        cancel: &CancellationToken,
        run: F,
    ) -> Result<Products<T>, StrassenError>
    where
        T: Scalar,
        F: Fn(RecursionTask<T>, &CancellationToken) -> Result<Matrix<T>, StrassenError> + Sync,
    {
        let products = if self.is_parallel(depth) {
            run_parallel(tasks, depth, cancel, &run)
        } else {
            run_sequential(tasks, depth, cancel, &run)
        }?;
        Ok(Products(products))
    }
}

/// In-order evaluation; stops at the first failure.
fn run_sequential<T, F>(
    tasks: [RecursionTask<T>; 7],
    depth: usize,
    cancel: &CancellationToken,
    run: &F,
) -> Result<[Matrix<T>; 7], StrassenError>
where
    T: Scalar,
    F: Fn(RecursionTask<T>, &CancellationToken) -> Result<Matrix<T>, StrassenError>,
{
    let eval = |task: RecursionTask<T>| {
        let product = task.product;
        run(task, cancel).map_err(|e| StrassenError::subtask(product, depth, e))
    };
    let [t1, t2, t3, t4, t5, t6, t7] = tasks;
    Ok([
        eval(t1)?,
        eval(t2)?,
        eval(t3)?,
        eval(t4)?,
        eval(t5)?,
        eval(t6)?,
        eval(t7)?,
    ])
}

/// First-error-wins parallel evaluation.
///
/// All tasks share a child token of `cancel`; the first failure cancels it so
/// siblings still in flight bail out at their next checkpoint. The seven
/// tasks are spread over nested `rayon::join`s.
fn run_parallel<T, F>(
    tasks: [RecursionTask<T>; 7],
    depth: usize,
    cancel: &CancellationToken,
    run: &F,
) -> Result<[Matrix<T>; 7], StrassenError>
where
    T: Scalar,
    F: Fn(RecursionTask<T>, &CancellationToken) -> Result<Matrix<T>, StrassenError> + Sync,
{
    let level = cancel.child();
    let eval = |task: RecursionTask<T>| -> Result<Matrix<T>, StrassenError> {
        let product = task.product;
        level.check_cancelled()?;
        let result = run(task, &level);
        if result.is_err() {
            level.cancel();
        }
        result.map_err(|e| StrassenError::subtask(product, depth, e))
    };
    let eval = &eval;

    let [t1, t2, t3, t4, t5, t6, t7] = tasks;
    let (left, right) = rayon::join(
        || {
            both(rayon::join(
                || both(rayon::join(|| eval(t1), || eval(t2))),
                || both(rayon::join(|| eval(t3), || eval(t4))),
            ))
        },
        || {
            both(rayon::join(
                || both(rayon::join(|| eval(t5), || eval(t6))),
                || eval(t7),
            ))
        },
    );

    match both((left, right)) {
        Ok((((m1, m2), (m3, m4)), ((m5, m6), m7))) => Ok([m1, m2, m3, m4, m5, m6, m7]),
        Err(err) => {
            debug!(depth, error = %err, "parallel dispatch failed");
            Err(err)
        }
    }
}

/// Pair two results, keeping the more severe error; ties go to the left,
/// i.e. to the lower product index.
fn both<A, B>(
    (left, right): (Result<A, StrassenError>, Result<B, StrassenError>),
) -> Result<(A, B), StrassenError> {
    match (left, right) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        (Err(l), Err(r)) => Err(if severity(&r) > severity(&l) { r } else { l }),
    }
}

/// Rank used to keep the original failure over the cancellations it caused.
fn severity(err: &StrassenError) -> u8 {
    match err {
        StrassenError::Cancelled => 0,
        StrassenError::Timeout(_) => 1,
        _ => 2,
    }
}
