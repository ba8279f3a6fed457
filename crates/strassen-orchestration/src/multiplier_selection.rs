//! Multiplier selection logic.

use std::sync::Arc;

use strassen_core::multiplier::{MatrixMultiplier, StrassenError};
use strassen_core::registry::MultiplierFactory;
use strassen_core::Scalar;

/// Get multipliers to run based on algorithm selection (`all` or a name).
pub fn get_multipliers_to_run<T: Scalar>(
    algo: &str,
    factory: &dyn MultiplierFactory<T>,
) -> Result<Vec<Arc<dyn MatrixMultiplier<T>>>, StrassenError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
