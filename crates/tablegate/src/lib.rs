//! Schema-Gated Data Validation
//!
//! A small, deterministic validation stage for tabular ML pipelines, built
//! with Rust and Polars.
//!
//! # Overview
//!
//! A run reads two declarative files, loads a CSV dataset, checks that
//! every observed column is declared in the schema, and persists a
//! pass/fail record downstream stages gate on:
//!
//! - **Configuration**: `config/config.yaml` locates the dataset and the
//!   stage's artifacts; `schema.yaml` declares the allowed columns.
//! - **Validation**: one-directional containment of dataset columns in the
//!   schema key set. Declared-but-absent columns are fine; declared types
//!   are recorded but not enforced.
//! - **Status**: a JSON record, rewritten wholesale on every run, so the
//!   file always reflects the most recent outcome.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tablegate::DataValidationStage;
//!
//! let passed = DataValidationStage::new().run()?;
//! if !passed {
//!     eprintln!("dataset does not conform to schema.yaml");
//! }
//! ```
//!
//! The pieces are usable on their own as well:
//!
//! ```rust,ignore
//! use tablegate::{ColumnValidator, ConfigLoader, ValidationStatus};
//!
//! let loader = ConfigLoader::load()?;
//! let config = loader.data_validation_config()?;
//! let status_file = config.status_file.clone();
//! let passed = ColumnValidator::new(config).validate_all_columns()?;
//!
//! // Later, e.g. from another stage deciding whether to proceed:
//! let status = ValidationStatus::read(&status_file)?;
//! assert_eq!(status.passed(), passed);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod scaffold;
pub mod schema;
pub mod stage;
pub mod status;
pub mod utils;
pub mod validator;

// Re-exports for convenient access
pub use config::{
    ConfigLoader, DEFAULT_CONFIG_PATH, DEFAULT_SCHEMA_PATH, DataValidationSection, ProjectConfig,
    ValidationConfig,
};
pub use dataset::load_dataset;
pub use error::{Result as ValidationResult, ResultExt, ValidationError};
pub use scaffold::{ProjectScaffold, ScaffoldReport};
pub use schema::DatasetSchema;
pub use stage::{DataValidationStage, STAGE_NAME};
pub use status::ValidationStatus;
pub use validator::{ColumnCheck, ColumnValidator, column_check};
