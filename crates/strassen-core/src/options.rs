//! Multiplication configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_PARALLEL_DEPTH, DEFAULT_THRESHOLD};
use crate::multiplier::StrassenError;

/// What to do with square inputs whose size is not a power of two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingPolicy {
    /// Recurse as long as every split is exact; fail with
    /// [`StrassenError::InvalidSize`] at the first odd split.
    #[default]
    Reject,
    /// Pad both operands with zero rows and columns up to the next power of
    /// two, then strip the padding from the product.
    ZeroPad,
}

/// Configuration threaded unchanged through every recursive call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrassenConfig {
    /// Operands with side length `<= threshold` are multiplied naively.
    pub threshold: usize,
    /// Recursion levels `< max_parallel_depth` dispatch their seven
    /// subproblems concurrently; deeper levels run them sequentially.
    pub max_parallel_depth: usize,
    /// Handling of non-power-of-two sizes.
    pub padding: PaddingPolicy,
    /// Size of a dedicated worker pool; `None` uses rayon's global pool.
    pub workers: Option<usize>,
}

impl Default for StrassenConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_parallel_depth: DEFAULT_MAX_PARALLEL_DEPTH,
            padding: PaddingPolicy::Reject,
            workers: None,
        }
    }
}

impl StrassenConfig {
    #[must_use]
    pub fn new(threshold: usize, max_parallel_depth: usize) -> Self {
        Self {
            threshold,
            max_parallel_depth,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PaddingPolicy) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), StrassenError> {
        if self.threshold < 1 {
            return Err(StrassenError::InvalidConfiguration(format!(
                "threshold must be at least 1, got {}",
                self.threshold
            )));
        }
        if self.workers == Some(0) {
            return Err(StrassenError::InvalidConfiguration(
                "worker count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = StrassenConfig::default();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.max_parallel_depth, DEFAULT_MAX_PARALLEL_DEPTH);
        assert_eq!(config.padding, PaddingPolicy::Reject);
        assert!(config.workers.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_threshold_is_invalid() {
        let err = StrassenConfig::new(0, 1).validate().unwrap_err();
        assert!(matches!(err, StrassenError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn zero_workers_is_invalid() {
        let config = StrassenConfig::new(1, 1).with_workers(0);
        assert!(matches!(
            config.validate(),
            Err(StrassenError::InvalidConfiguration(_))
        ));
        assert!(StrassenConfig::new(1, 1).with_workers(2).validate().is_ok());
    }

    #[test]
    fn config_serialization() {
        let config = StrassenConfig::new(8, 3)
            .with_padding(PaddingPolicy::ZeroPad)
            .with_workers(4);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"zero_pad\""));
        let back: StrassenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: StrassenConfig = serde_json::from_str(r#"{"threshold": 16}"#).unwrap();
        assert_eq!(config.threshold, 16);
        assert_eq!(config.max_parallel_depth, DEFAULT_MAX_PARALLEL_DEPTH);
        assert_eq!(config.padding, PaddingPolicy::Reject);
    }
}
