//! Configuration for the folding engine
//!
//! Values can be built in code with the `with_*` builders or loaded from a
//! TOML file. Keys missing from the file keep their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default number of viewport results kept by the range cache
pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Default width, in characters, of a fallback function summary
pub const DEFAULT_SUMMARY_WIDTH: usize = 50;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// How collapsed range ids are turned back into line spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdDecoding {
    /// Only bare `start-end` ids hide lines; `comment-*` and `function-*`
    /// ids are accepted by fold state but have no visible effect
    #[default]
    Compatible,
    /// Prefixed ids are decoded too, so every detected range can hide lines
    Structured,
}

/// Configuration for a [`FoldingEngine`](crate::engine::FoldingEngine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum cached viewport results before the oldest is evicted
    pub cache_capacity: usize,

    /// Characters kept from a signature line when no summary pattern matches
    pub summary_width: usize,

    /// Decoding applied to collapsed ids during projection
    pub id_decoding: IdDecoding,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            summary_width: DEFAULT_SUMMARY_WIDTH,
            id_decoding: IdDecoding::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Set cache capacity (builder pattern)
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set summary width (builder pattern)
    pub fn with_summary_width(mut self, width: usize) -> Self {
        self.summary_width = width;
        self
    }

    /// Set id decoding (builder pattern)
    pub fn with_id_decoding(mut self, decoding: IdDecoding) -> Self {
        self.id_decoding = decoding;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::InvalidConfig(
                "cache_capacity must be at least 1".to_string(),
            ));
        }
        if self.summary_width == 0 {
            return Err(ConfigError::InvalidConfig(
                "summary_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.cache_capacity, 10);
        assert_eq!(config.summary_width, 50);
        assert_eq!(config.id_decoding, IdDecoding::Compatible);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str("id_decoding = \"structured\"\n").unwrap();
        assert_eq!(config.id_decoding, IdDecoding::Structured);
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = EngineConfig::from_toml_str("cache_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = EngineConfig::from_toml_str("cache_capacity = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cache_capacity = 3").unwrap();
        writeln!(file, "summary_width = 20").unwrap();

        let config = EngineConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config, EngineConfig::new().with_cache_capacity(3).with_summary_width(20));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_toml_file(Path::new("/nonexistent/linefold.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
