//! Session and predictor configuration.
//!
//! - `PredictorConfig`: Maximum context order and feed window
//! - `SessionConfig`: Where records live, RNG seed, predictor settings
//!
//! Both follow the builder style: start from `Default`, adjust with `with_*`,
//! then call `validate()` before use.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Predictor model parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Longest context (in rounds) recorded by `feed` (default: 2).
    pub max_order: usize,

    /// Number of most recent rounds handed to `feed` after each round (default: 3).
    /// Must exceed 1 for any context to be learned.
    pub window: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            max_order: 2,
            window: 3,
        }
    }
}

impl PredictorConfig {
    /// Set the maximum context order.
    #[must_use]
    pub fn with_max_order(mut self, max_order: usize) -> Self {
        self.max_order = max_order;
        self
    }

    /// Set the feed window size.
    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Check that the model can learn order-1 contexts, which `predict` relies on.
    pub fn validate(&self) -> Result<()> {
        if self.max_order < 1 {
            return Err(Error::InvalidConfiguration {
                message: format!("max_order must be at least 1, got {}", self.max_order),
            });
        }
        if self.window < 2 {
            return Err(Error::InvalidConfiguration {
                message: format!("window must be at least 2, got {}", self.window),
            });
        }
        Ok(())
    }
}

/// Top-level settings for one interactive session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory holding one record per player.
    pub data_dir: PathBuf,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Predictor parameters.
    pub predictor: PredictorConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("rps_markov_samples"),
            seed: None,
            predictor: PredictorConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Set the record directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set predictor parameters.
    #[must_use]
    pub fn with_predictor(mut self, predictor: PredictorConfig) -> Self {
        self.predictor = predictor;
        self
    }

    /// Validate nested configuration.
    pub fn validate(&self) -> Result<()> {
        self.predictor.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_predictor_config() {
        let config = PredictorConfig::default();
        assert_eq!(config.max_order, 2);
        assert_eq!(config.window, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_predictor_builder() {
        let config = PredictorConfig::default().with_max_order(4).with_window(6);
        assert_eq!(config.max_order, 4);
        assert_eq!(config.window, 6);
    }

    #[test]
    fn test_predictor_validation() {
        assert!(PredictorConfig::default().with_max_order(0).validate().is_err());
        assert!(PredictorConfig::default().with_window(1).validate().is_err());
        assert!(PredictorConfig::default().with_window(2).validate().is_ok());
    }

    #[test]
    fn test_session_builder() {
        let config = SessionConfig::default()
            .with_data_dir("/tmp/records")
            .with_seed(123)
            .with_predictor(PredictorConfig::default().with_window(5));

        assert_eq!(config.data_dir, PathBuf::from("/tmp/records"));
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.predictor.window, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_session_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("rps_markov_samples"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
