//! Error types for the validation pipeline.
//!
//! This module provides the error hierarchy used throughout the crate,
//! built on `thiserror` so failures carry context about which file or
//! stage produced them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for validation operations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration or schema file was not found.
    #[error("Configuration file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    /// Configuration or schema file exists but has no content.
    #[error("Configuration file is empty: {0}")]
    EmptyFile(PathBuf),

    /// Dataset file does not exist at the configured path.
    #[error("Dataset not found: {0}")]
    DatasetMissing(PathBuf),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// YAML parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ValidationError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable code identifying the error class.
    ///
    /// Context wrappers are transparent: the code of the innermost error
    /// is reported so callers can branch on the root cause.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::ConfigFileNotFound(_) => "CONFIG_NOT_FOUND",
            Self::EmptyFile(_) => "EMPTY_FILE",
            Self::DatasetMissing(_) => "DATASET_MISSING",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Yaml(_) => "YAML_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error comes from the declarative config or schema
    /// files, as opposed to dataset or status-file IO.
    pub fn is_config_error(&self) -> bool {
        match self {
            Self::InvalidConfig(_) | Self::ConfigFileNotFound(_) | Self::EmptyFile(_)
            | Self::Yaml(_) => true,
            Self::WithContext { source, .. } => source.is_config_error(),
            _ => false,
        }
    }
}

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ValidationError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}
