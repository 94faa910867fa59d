//! Core configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roster::DEFAULT_PAGE_SIZE;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for the admission module. Missing keys take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CoreConfig {
    /// Rows per roster page
    pub page_size: usize,
    /// Simulated submission round trip
    pub submit_delay_ms: u64,
    /// Also check doctor/room selections against the reference data
    pub strict_reference: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            submit_delay_ms: 1000,
            strict_reference: false,
        }
    }
}

impl CoreConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: CoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CoreConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.submit_delay(), Duration::from_secs(1));
        assert!(!config.strict_reference);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CoreConfig::from_json(r#"{"submit_delay_ms": 0}"#).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.submit_delay_ms, 0);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = CoreConfig::from_json(r#"{"page_size": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = CoreConfig::from_json("{page_size:").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"page_size": 25, "strict_reference": true}}"#).unwrap();

        let config = CoreConfig::load(file.path()).unwrap();
        assert_eq!(config.page_size, 25);
        assert!(config.strict_reference);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CoreConfig::load("/nonexistent/rawat-inap.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
