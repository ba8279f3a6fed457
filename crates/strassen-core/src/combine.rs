//! Strassen's fixed combination of the seven products into four quadrants.

use crate::matrix::Matrix;
use crate::matrix_ops::{add, sub, Quadrants};
use crate::multiplier::StrassenError;
use crate::scalar::Scalar;

/// The intermediate products `M1..M7` of one recursion level, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Products<T>(pub [Matrix<T>; 7]);

/// Combine `M1..M7` into the output quadrants:
///
/// ```text
/// C11 = M1 + M4 - M5 + M7
/// C12 = M3 + M5
/// C21 = M2 + M4
/// C22 = M1 - M2 + M3 + M6
/// ```
pub fn combine<T: Scalar>(products: &Products<T>) -> Result<Quadrants<T>, StrassenError> {
    let [m1, m2, m3, m4, m5, m6, m7] = &products.0;
    Ok(Quadrants {
        q11: add(&sub(&add(m1, m4)?, m5)?, m7)?,
        q12: add(m3, m5)?,
        q21: add(m2, m4)?,
        q22: add(&add(&sub(m1, m2)?, m3)?, m6)?,
    })
}
