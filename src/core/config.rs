// src/core/config.rs

use crate::core::common::EmbedixError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Embedding dimensionality of the reference deployment.
pub const DEFAULT_DIMENSION: usize = 128;

/// Usable person-label budget in encoded bytes. The on-disk reference format
/// reserved a 100-byte buffer including a terminator, leaving 99 usable bytes.
pub const DEFAULT_MAX_LABEL_BYTES: usize = 99;

/// Configuration for a face-embedding index.
///
/// Both values are fixed for the lifetime of an index instance; they are not
/// runtime-negotiated per request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IndexConfig {
    pub dimension: usize,
    pub max_label_bytes: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { dimension: DEFAULT_DIMENSION, max_label_bytes: DEFAULT_MAX_LABEL_BYTES }
    }
}

/// Builder for `IndexConfig`.
#[derive(Debug, Clone, Default)]
pub struct IndexConfigBuilder {
    dimension: Option<usize>,
    max_label_bytes: Option<usize>,
}

impl IndexConfigBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the embedding dimensionality
    #[must_use]
    pub const fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Sets the maximum person-label length in encoded bytes
    #[must_use]
    pub const fn max_label_bytes(mut self, max: usize) -> Self {
        self.max_label_bytes = Some(max);
        self
    }

    /// Builds the `IndexConfig` instance with validation
    ///
    /// # Errors
    /// Returns `EmbedixError::Configuration` if any value is out of range.
    pub fn build(self) -> Result<IndexConfig, EmbedixError> {
        let config = IndexConfig {
            dimension: self.dimension.unwrap_or(DEFAULT_DIMENSION),
            max_label_bytes: self.max_label_bytes.unwrap_or(DEFAULT_MAX_LABEL_BYTES),
        };
        config.validate()?;
        Ok(config)
    }
}

impl IndexConfig {
    /// Creates a new `IndexConfigBuilder` for fluent configuration
    pub fn builder() -> IndexConfigBuilder {
        IndexConfigBuilder::new()
    }

    /// Validates the configuration
    ///
    /// # Errors
    /// Returns `EmbedixError::Configuration` if any value is out of range.
    pub fn validate(&self) -> Result<(), EmbedixError> {
        if self.dimension == 0 {
            return Err(EmbedixError::Configuration(
                "dimension must be greater than 0".to_string(),
            ));
        }

        if self.max_label_bytes == 0 {
            return Err(EmbedixError::Configuration(
                "max_label_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `EmbedixError::Configuration` if the file cannot be parsed,
    /// `EmbedixError::Io` if it exists but cannot be read.
    pub fn load_from_file(path: &Path) -> Result<Self, EmbedixError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = toml::from_str(&contents).map_err(|e| {
                    EmbedixError::Configuration(format!(
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;

                config.validate()?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(EmbedixError::Io(e)),
        }
    }

    /// Loads configuration from an optional TOML file path.
    ///
    /// If `optional_path` is `None`, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `EmbedixError::Configuration` if the file exists but cannot be parsed.
    pub fn load_or_default(optional_path: Option<&Path>) -> Result<Self, EmbedixError> {
        match optional_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}
