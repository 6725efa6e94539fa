//! Configuration for the validation pipeline.
//!
//! Two declarative files drive a run: the project configuration
//! (`config/config.yaml`), which locates the dataset and the artifacts this
//! stage writes, and the schema declaration (`schema.yaml`). Both are read
//! once, up front, into plain typed structs; the resolved product handed to
//! the validator is a frozen [`ValidationConfig`].
//!
//! # Example
//!
//! ```rust,ignore
//! use tablegate::ConfigLoader;
//!
//! let loader = ConfigLoader::load()?;
//! let config = loader.data_validation_config()?;
//! println!("validating {}", config.dataset_path.display());
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, ResultExt, ValidationError};
use crate::schema::DatasetSchema;
use crate::utils;

/// Default location of the project configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Default location of the schema declaration.
pub const DEFAULT_SCHEMA_PATH: &str = "schema.yaml";

/// Top-level project configuration, as written in `config/config.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Root directory under which every pipeline stage writes its artifacts.
    pub artifacts_root: PathBuf,

    /// Settings for the data validation stage.
    pub data_validation: DataValidationSection,
}

/// The `data_validation` section of the project configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataValidationSection {
    /// Directory for this stage's artifacts.
    pub root_dir: PathBuf,

    /// Dataset the stage validates.
    pub dataset_path: PathBuf,

    /// Where the stage writes its pass/fail record.
    pub status_file: PathBuf,
}

impl ProjectConfig {
    /// Validate the configuration and reject unusable values.
    ///
    /// Deserialization already guarantees the fields are present; this
    /// catches paths that are present but blank.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("artifacts_root", &self.artifacts_root),
            ("data_validation.root_dir", &self.data_validation.root_dir),
            (
                "data_validation.dataset_path",
                &self.data_validation.dataset_path,
            ),
            (
                "data_validation.status_file",
                &self.data_validation.status_file,
            ),
        ];
        for (name, path) in fields {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::InvalidConfig(format!(
                    "'{name}' must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Resolved configuration for one validation run.
///
/// Paths are taken verbatim from the project configuration and the schema
/// is already loaded, so the validator performs no further file discovery.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Directory for this stage's artifacts (created by the loader).
    pub root_dir: PathBuf,

    /// Dataset to validate.
    pub dataset_path: PathBuf,

    /// Destination of the status record.
    pub status_file: PathBuf,

    /// Declared schema the dataset is checked against.
    pub schema: DatasetSchema,
}

/// Reads the declarative files and hands out per-stage configurations.
///
/// Both files are read and validated at construction, so a missing or
/// malformed file fails the run before any stage starts.
#[derive(Debug)]
pub struct ConfigLoader {
    config: ProjectConfig,
    schema: DatasetSchema,
}

impl ConfigLoader {
    /// Read the configuration and schema from their default locations.
    pub fn load() -> Result<Self> {
        Self::from_paths(
            Path::new(DEFAULT_CONFIG_PATH),
            Path::new(DEFAULT_SCHEMA_PATH),
        )
    }

    /// Read the configuration and schema from explicit locations.
    pub fn from_paths(config_path: &Path, schema_path: &Path) -> Result<Self> {
        let config: ProjectConfig = utils::read_yaml(config_path).context(format!(
            "Failed to load project config from '{}'",
            config_path.display()
        ))?;
        config.validate()?;

        let schema = DatasetSchema::from_yaml_file(schema_path)?;
        info!(
            "Configuration loaded: {} declared columns, dataset at {}",
            schema.len(),
            config.data_validation.dataset_path.display()
        );

        Ok(Self { config, schema })
    }

    /// The parsed project configuration.
    pub fn project(&self) -> &ProjectConfig {
        &self.config
    }

    /// The parsed schema declaration.
    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    /// Resolve the configuration for the data validation stage.
    ///
    /// Creates the artifacts root and the stage directory if they do not
    /// exist yet; repeated calls are no-ops on the filesystem.
    pub fn data_validation_config(&self) -> Result<ValidationConfig> {
        let section = &self.config.data_validation;
        utils::ensure_directories([&self.config.artifacts_root, &section.root_dir])?;

        Ok(ValidationConfig {
            root_dir: section.root_dir.clone(),
            dataset_path: section.dataset_path.clone(),
            status_file: section.status_file.clone(),
            schema: self.schema.clone(),
        })
    }
}
