//! Element type contract for dense matrices.

use std::fmt::Debug;
use std::ops::{Mul, Sub};

use num_traits::Zero;

/// Numeric element usable by every multiplier in this crate.
///
/// Implemented for all primitive integers and floats, and for any other type
/// with ring-like `+ - *` (for example `num_bigint::BigInt`). Arithmetic
/// follows the type's native semantics: no overflow or rounding handling is
/// added on top.
pub trait Scalar:
    Clone + Debug + PartialEq + Send + Sync + Zero + Sub<Output = Self> + Mul<Output = Self> + 'static
{
}

impl<T> Scalar for T where
    T: Clone
        + Debug
        + PartialEq
        + Send
        + Sync
        + Zero
        + Sub<Output = T>
        + Mul<Output = T>
        + 'static
{
}
