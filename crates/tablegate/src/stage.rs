//! Data validation pipeline stage.
//!
//! Wraps the loader and validator behind a zero-argument entry point an
//! orchestrator can call, with uniform start/completion logging. Errors
//! are logged at the stage boundary and propagated unchanged.

use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::{ConfigLoader, DEFAULT_CONFIG_PATH, DEFAULT_SCHEMA_PATH};
use crate::error::Result;
use crate::validator::ColumnValidator;

/// Display name used in stage banners.
pub const STAGE_NAME: &str = "Data Validation";

/// The data validation stage.
#[derive(Debug, Clone)]
pub struct DataValidationStage {
    config_path: PathBuf,
    schema_path: PathBuf,
}

impl Default for DataValidationStage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataValidationStage {
    /// Create a stage reading from the default config locations.
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
        }
    }

    /// Create a stage reading from explicit config locations.
    pub fn with_paths(config_path: impl Into<PathBuf>, schema_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            schema_path: schema_path.into(),
        }
    }

    /// Run the stage.
    ///
    /// Returns the validation outcome; `Ok(false)` is a completed run
    /// whose check failed, not an error.
    pub fn run(&self) -> Result<bool> {
        info!(">>>>>> Stage {} started <<<<<<", STAGE_NAME);
        match self.execute() {
            Ok(passed) => {
                info!(">>>>>> Stage {} completed <<<<<<", STAGE_NAME);
                Ok(passed)
            }
            Err(e) => {
                error!("Stage {} failed: {}", STAGE_NAME, e);
                Err(e)
            }
        }
    }

    fn execute(&self) -> Result<bool> {
        let loader = ConfigLoader::from_paths(&self.config_path, &self.schema_path)?;
        let config = loader.data_validation_config()?;
        ColumnValidator::new(config).validate_all_columns()
    }

    /// Path of the project configuration this stage reads.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Path of the schema declaration this stage reads.
    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }
}

static_assertions::assert_impl_all!(DataValidationStage: Send, Sync);
