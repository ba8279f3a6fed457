//! Elementwise arithmetic and quadrant split/join.

use crate::matrix::Matrix;
use crate::multiplier::StrassenError;
use crate::scalar::Scalar;

/// The four equal quadrants of an even-sized matrix, each owned independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrants<T> {
    pub q11: Matrix<T>,
    pub q12: Matrix<T>,
    pub q21: Matrix<T>,
    pub q22: Matrix<T>,
}

fn check_same_dims<T: Scalar>(
    op: &'static str,
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<(), StrassenError> {
    if a.dims() != b.dims() {
        return Err(StrassenError::DimensionMismatch {
            op,
            left: a.dims(),
            right: b.dims(),
        });
    }
    Ok(())
}

fn zip_with<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, f: impl Fn(T, T) -> T) -> Matrix<T> {
    let (rows, cols) = a.dims();
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| f(x.clone(), y.clone()))
        .collect();
    Matrix::from_parts(rows, cols, data)
}

/// Elementwise `a + b`.
pub fn add<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, StrassenError> {
    check_same_dims("add", a, b)?;
    Ok(zip_with(a, b, |x, y| x + y))
}

/// Elementwise `a - b`.
pub fn sub<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, StrassenError> {
    check_same_dims("sub", a, b)?;
    Ok(zip_with(a, b, |x, y| x - y))
}

/// Split into quadrants at the midpoint of both dimensions.
///
/// Fails with [`StrassenError::InvalidSize`] when either dimension is odd.
pub fn split<T: Scalar>(a: &Matrix<T>) -> Result<Quadrants<T>, StrassenError> {
    let (rows, cols) = a.dims();
    if rows % 2 != 0 {
        return Err(StrassenError::InvalidSize { size: rows });
    }
    if cols % 2 != 0 {
        return Err(StrassenError::InvalidSize { size: cols });
    }
    let (h, w) = (rows / 2, cols / 2);
    Ok(Quadrants {
        q11: a.block(0, 0, h, w),
        q12: a.block(0, w, h, w),
        q21: a.block(h, 0, h, w),
        q22: a.block(h, w, h, w),
    })
}

/// Reassemble `(c11 | c12)` over `(c21 | c22)`.
pub fn join<T: Scalar>(quadrants: &Quadrants<T>) -> Result<Matrix<T>, StrassenError> {
    let Quadrants { q11, q12, q21, q22 } = quadrants;
    check_same_dims("join", q11, q12)?;
    check_same_dims("join", q11, q21)?;
    check_same_dims("join", q11, q22)?;

    let (h, w) = q11.dims();
    let mut data = Vec::with_capacity(4 * h * w);
    for i in 0..h {
        data.extend_from_slice(q11.row(i));
        data.extend_from_slice(q12.row(i));
    }
    for i in 0..h {
        data.extend_from_slice(q21.row(i));
        data.extend_from_slice(q22.row(i));
    }
    Ok(Matrix::from_parts(2 * h, 2 * w, data))
}
