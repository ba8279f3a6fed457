//! Naive O(n³) multiplication: the base case and the correctness reference.

use crate::matrix::Matrix;
use crate::multiplier::{MatrixMultiplier, StrassenError};
use crate::observer::{RecursionEvent, RecursionObserver};
use crate::progress::CancellationToken;
use crate::scalar::Scalar;

/// Multiply `a * b` with the standard triple loop.
///
/// Requires `a.cols() == b.rows()`; shapes need not be square.
pub fn naive_multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, StrassenError> {
    if a.cols() != b.rows() {
        return Err(StrassenError::DimensionMismatch {
            op: "multiply",
            left: a.dims(),
            right: b.dims(),
        });
    }

    let (rows, inner, cols) = (a.rows(), a.cols(), b.cols());
    let lhs = a.as_slice();
    let rhs = b.as_slice();
    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        let row = &lhs[i * inner..(i + 1) * inner];
        for j in 0..cols {
            let mut sum = T::zero();
            for (k, x) in row.iter().enumerate() {
                sum = sum + x.clone() * rhs[k * cols + j].clone();
            }
            data.push(sum);
        }
    }
    Ok(Matrix::from_parts(rows, cols, data))
}

/// Naive multiplier exposed through the [`MatrixMultiplier`] interface.
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> MatrixMultiplier<T> for NaiveMultiplier {
    fn multiply(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        cancel: &CancellationToken,
        observer: &dyn RecursionObserver,
    ) -> Result<Matrix<T>, StrassenError> {
        cancel.check_cancelled()?;
        let result = naive_multiply(a, b)?;
        observer.on_event(&RecursionEvent::BaseCase {
            depth: 0,
            size: a.rows(),
        });
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::{CountingObserver, NoOpObserver};

    #[test]
    fn two_by_two_matches_closed_form() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let c = naive_multiply(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn rectangular_shapes_are_supported() {
        let a = Matrix::from_rows(vec![vec![1, 2, 3]]).unwrap();
        let b = Matrix::from_rows(vec![vec![4], vec![5], vec![6]]).unwrap();
        let c = naive_multiply(&a, &b).unwrap();
        assert_eq!(c.dims(), (1, 1));
        assert_eq!(c.get(0, 0), Some(&32));
    }

    #[test]
    fn inner_dimension_mismatch_is_rejected() {
        let a: Matrix<i64> = Matrix::zeros(2, 3);
        let b: Matrix<i64> = Matrix::zeros(2, 3);
        assert!(matches!(
            naive_multiply(&a, &b),
            Err(StrassenError::DimensionMismatch { op: "multiply", .. })
        ));
    }

    #[test]
    fn identity_is_neutral() {
        let a = Matrix::from_fn(4, 4, |i, j| (i * 7 + j * 3) as i64 - 5);
        let id = Matrix::identity(4);
        assert_eq!(naive_multiply(&a, &id).unwrap(), a);
        assert_eq!(naive_multiply(&id, &a).unwrap(), a);
    }

    #[test]
    fn floats_use_native_arithmetic() {
        let a = Matrix::from_rows(vec![vec![0.5, 1.5], vec![2.0, -1.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 2.0]]).unwrap();
        let c = naive_multiply(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![1.0, 3.0], vec![4.0, -2.0]]);
    }

    #[test]
    fn multiplier_reports_one_base_case() {
        let a: Matrix<i64> = Matrix::identity(8);
        let observer = CountingObserver::new();
        let result = NaiveMultiplier::new()
            .multiply(&a, &a, &CancellationToken::new(), &observer)
            .unwrap();
        assert_eq!(result, a);
        let stats = observer.stats();
        assert_eq!(stats.base_cases, 1);
        assert_eq!(stats.splits, 0);
    }

    #[test]
    fn multiplier_honours_cancellation() {
        let a: Matrix<i64> = Matrix::identity(2);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = NaiveMultiplier::new().multiply(&a, &a, &cancel, &NoOpObserver::new());
        assert!(matches!(result, Err(StrassenError::Cancelled)));
    }
}
