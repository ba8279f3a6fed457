//! Input generators: seeded random matrices and the literal demo pair.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::Matrix;

/// `size x size` matrix with elements drawn uniformly from
/// `[-max_abs, max_abs]`. The same seed always yields the same matrix.
#[must_use]
pub fn random_matrix(size: usize, max_abs: i64, seed: u64) -> Matrix<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bound = max_abs.saturating_abs();
    Matrix::from_fn(size, size, |_, _| rng.gen_range(-bound..=bound))
}

/// Two independent random operands derived from one seed.
#[must_use]
pub fn random_pair(size: usize, max_abs: i64, seed: u64) -> (Matrix<i64>, Matrix<i64>) {
    (
        random_matrix(size, max_abs, seed),
        random_matrix(size, max_abs, seed.wrapping_add(1)),
    )
}

/// The 4x4 example pair `A = 1..=16` (row-major) and `B = 16..=1`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn demo_pair() -> (Matrix<i64>, Matrix<i64>) {
    let a = Matrix::from_fn(4, 4, |i, j| (i * 4 + j + 1) as i64);
    let b = Matrix::from_fn(4, 4, |i, j| (16 - (i * 4 + j)) as i64);
    (a, b)
}
