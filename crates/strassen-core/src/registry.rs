//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::multiplier::{MatrixMultiplier, StrassenError, StrassenMultiplier};
use crate::naive::NaiveMultiplier;
use crate::options::StrassenConfig;
use crate::scalar::Scalar;

/// Factory trait for creating multipliers.
pub trait MultiplierFactory<T: Scalar>: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn MatrixMultiplier<T>>, StrassenError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
///
/// Every Strassen multiplier it creates shares the factory's configuration.
pub struct DefaultFactory<T: Scalar> {
    config: StrassenConfig,
    cache: RwLock<HashMap<String, Arc<dyn MatrixMultiplier<T>>>>,
}

impl<T: Scalar> DefaultFactory<T> {
    #[must_use]
    pub fn new(config: StrassenConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<Arc<dyn MatrixMultiplier<T>>, StrassenError> {
        match name {
            "strassen" => Ok(Arc::new(StrassenMultiplier::new(self.config.clone()))),
            "naive" => Ok(Arc::new(NaiveMultiplier::new())),
            _ => Err(StrassenError::InvalidConfiguration(format!(
                "unknown multiplier: {name}"
            ))),
        }
    }
}

impl<T: Scalar> Default for DefaultFactory<T> {
    fn default() -> Self {
        Self::new(StrassenConfig::default())
    }
}

impl<T: Scalar> MultiplierFactory<T> for DefaultFactory<T> {
    fn get(&self, name: &str) -> Result<Arc<dyn MatrixMultiplier<T>>, StrassenError> {
        if let Some(multiplier) = self.cache.read().get(name) {
            return Ok(Arc::clone(multiplier));
        }

        let multiplier = self.create_multiplier(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&multiplier));
        Ok(multiplier)
    }

    fn available(&self) -> Vec<&str> {
        vec!["strassen", "naive"]
    }
}
