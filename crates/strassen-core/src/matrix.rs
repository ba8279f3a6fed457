//! Dense row-major matrix type.

use std::fmt;

use num_traits::One;

use crate::multiplier::StrassenError;
use crate::scalar::Scalar;

/// Dense `rows x cols` matrix stored in a single row-major buffer.
///
/// Every operation in this crate returns a fresh matrix; inputs are never
/// mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a `rows x cols` matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create a square `n x n` matrix of zeros.
    #[must_use]
    pub fn square_zeros(n: usize) -> Self {
        Self::zeros(n, n)
    }

    /// Create a matrix from a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, StrassenError> {
        if data.len() != rows * cols {
            return Err(StrassenError::DimensionMismatch {
                op: "from_vec",
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Buffer length must equal `rows * cols`; callers inside the crate guarantee it.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Create a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, StrassenError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(row_count * cols);
        for row in rows {
            if row.len() != cols {
                return Err(StrassenError::DimensionMismatch {
                    op: "from_rows",
                    left: (row_count, cols),
                    right: (1, row.len()),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Build a `rows x cols` matrix by evaluating `f(i, j)` for each cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Side length of a square matrix, `None` otherwise.
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        self.is_square().then_some(self.rows)
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    /// Row `i` as a slice.
    #[must_use]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Row-major element buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy out nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.row_iter().map(<[T]>::to_vec).collect()
    }

    /// Copy the `rows x cols` block starting at `(row0, col0)`.
    pub(crate) fn block(&self, row0: usize, col0: usize, rows: usize, cols: usize) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in row0..row0 + rows {
            let start = i * self.cols + col0;
            data.extend_from_slice(&self.data[start..start + cols]);
        }
        Self { rows, cols, data }
    }

    /// Embed into the top-left corner of a `size x size` zero matrix.
    #[must_use]
    pub fn pad_to(&self, size: usize) -> Self {
        debug_assert!(size >= self.rows && size >= self.cols);
        let mut data = vec![T::zero(); size * size];
        for (i, row) in self.row_iter().enumerate() {
            data[i * size..i * size + self.cols].clone_from_slice(row);
        }
        Self {
            rows: size,
            cols: size,
            data,
        }
    }

    /// Keep only the top-left `rows x cols` block.
    #[must_use]
    pub fn truncate(&self, rows: usize, cols: usize) -> Self {
        debug_assert!(rows <= self.rows && cols <= self.cols);
        self.block(0, 0, rows, cols)
    }

    /// Sum of the main diagonal.
    #[must_use]
    pub fn trace(&self) -> T {
        let n = self.rows.min(self.cols);
        (0..n).fold(T::zero(), |acc, i| acc + self.data[i * self.cols + i].clone())
    }

    /// Sum of all elements.
    #[must_use]
    pub fn element_sum(&self) -> T {
        self.data.iter().cloned().fold(T::zero(), |acc, x| acc + x)
    }
}

impl<T: Scalar + One> Matrix<T> {
    /// The `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
