//! Column validation against a declared schema.
//!
//! The check is one-directional containment: every column observed in the
//! dataset must be declared in the schema. Declared columns the dataset
//! does not carry are allowed (a dataset may ship a subset), and declared
//! types are not enforced here.
//!
//! # Example
//!
//! ```rust,ignore
//! use tablegate::{ColumnValidator, ConfigLoader};
//!
//! let config = ConfigLoader::load()?.data_validation_config()?;
//! let passed = ColumnValidator::new(config).validate_all_columns()?;
//! ```

use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{info, warn};

use crate::config::ValidationConfig;
use crate::dataset;
use crate::error::Result;
use crate::schema::DatasetSchema;
use crate::status::ValidationStatus;

/// Outcome of comparing dataset columns against a schema.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnCheck {
    /// Distinct column names observed in the dataset.
    pub columns_checked: usize,

    /// Dataset columns the schema does not declare, in dataset order.
    pub undeclared: Vec<String>,

    /// Declared columns the dataset does not carry. Informational only.
    pub unused_declared: Vec<String>,
}

impl ColumnCheck {
    /// Whether every dataset column is declared.
    pub fn passed(&self) -> bool {
        self.undeclared.is_empty()
    }

    /// Convert into the status record persisted for downstream stages.
    pub fn to_status(&self) -> ValidationStatus {
        if self.passed() {
            ValidationStatus::pass()
        } else {
            ValidationStatus::fail(format!(
                "undeclared columns: {}",
                self.undeclared.join(", ")
            ))
        }
    }
}

/// Compare observed column names against a schema declaration.
///
/// Duplicate names collapse to a single occurrence; order of first
/// appearance is preserved in [`ColumnCheck::undeclared`] so failure
/// messages are deterministic.
pub fn column_check<I, S>(names: I, schema: &DatasetSchema) -> ColumnCheck
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = BTreeSet::new();
    let mut undeclared = Vec::new();

    for name in names {
        let name = name.as_ref();
        if !seen.insert(name.to_string()) {
            continue;
        }
        if !schema.declares(name) {
            undeclared.push(name.to_string());
        }
    }

    let unused_declared = schema
        .column_names()
        .filter(|name| !seen.contains(*name))
        .map(str::to_string)
        .collect();

    ColumnCheck {
        columns_checked: seen.len(),
        undeclared,
        unused_declared,
    }
}

/// Validates a dataset's columns against the declared schema.
pub struct ColumnValidator {
    config: ValidationConfig,
}

impl ColumnValidator {
    /// Create a validator for a resolved configuration.
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// The configuration this validator runs with.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run the column check and persist the outcome.
    ///
    /// Returns `Ok(true)` when every dataset column is declared in the
    /// schema and `Ok(false)` otherwise; both outcomes overwrite the
    /// status file. Load and write failures propagate without touching it.
    pub fn validate_all_columns(&self) -> Result<bool> {
        let df = dataset::load_dataset(&self.config.dataset_path)?;
        let check = self.check(&df);

        if check.passed() {
            info!(
                "All {} dataset columns are declared in the schema",
                check.columns_checked
            );
        } else {
            warn!(
                "{} of {} dataset columns are not declared in the schema: {}",
                check.undeclared.len(),
                check.columns_checked,
                check.undeclared.join(", ")
            );
        }
        if !check.unused_declared.is_empty() {
            info!(
                "Schema declares {} columns the dataset does not carry: {}",
                check.unused_declared.len(),
                check.unused_declared.join(", ")
            );
        }

        let status = check.to_status();
        status.write(&self.config.status_file)?;
        Ok(status.passed())
    }

    /// Compare a loaded dataset against the configured schema.
    pub fn check(&self, df: &DataFrame) -> ColumnCheck {
        column_check(
            df.get_column_names().into_iter().map(|name| name.as_str()),
            &self.config.schema,
        )
    }
}

static_assertions::assert_impl_all!(ColumnValidator: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schema(pairs: &[(&str, &str)]) -> DatasetSchema {
        DatasetSchema {
            columns: pairs
                .iter()
                .map(|(name, dtype)| (name.to_string(), dtype.to_string()))
                .collect(),
            target_column: None,
        }
    }

    #[test]
    fn test_exact_match_passes() {
        let schema = schema(&[("age", "int64"), ("income", "float64")]);
        let check = column_check(["age", "income"], &schema);
        assert!(check.passed());
        assert_eq!(check.columns_checked, 2);
        assert!(check.unused_declared.is_empty());
    }

    #[test]
    fn test_subset_of_schema_passes() {
        let schema = schema(&[("age", "int64"), ("income", "float64")]);
        let check = column_check(["age"], &schema);
        assert!(check.passed());
        assert_eq!(check.unused_declared, vec!["income"]);
    }

    #[test]
    fn test_undeclared_column_fails() {
        let schema = schema(&[("age", "int64"), ("income", "float64")]);
        let check = column_check(["age", "income", "zipcode"], &schema);
        assert!(!check.passed());
        assert_eq!(check.undeclared, vec!["zipcode"]);
    }

    #[test]
    fn test_empty_dataset_passes() {
        let schema = schema(&[("age", "int64")]);
        let check = column_check(Vec::<&str>::new(), &schema);
        assert!(check.passed());
        assert_eq!(check.columns_checked, 0);
    }

    #[test]
    fn test_empty_dataset_against_empty_schema_passes() {
        let check = column_check(Vec::<&str>::new(), &DatasetSchema::default());
        assert!(check.passed());
    }

    #[test]
    fn test_duplicate_columns_collapse() {
        let schema = schema(&[("age", "int64")]);
        let check = column_check(["age", "age", "age"], &schema);
        assert!(check.passed());
        assert_eq!(check.columns_checked, 1);
    }

    #[test]
    fn test_undeclared_order_is_dataset_order() {
        let schema = schema(&[("age", "int64")]);
        let check = column_check(["zipcode", "age", "city"], &schema);
        assert_eq!(check.undeclared, vec!["zipcode", "city"]);
    }

    #[test]
    fn test_failure_message_is_deterministic() {
        let schema = schema(&[("age", "int64")]);
        let check = column_check(["zipcode", "city"], &schema);
        let status = check.to_status();
        assert_eq!(
            status.message.as_deref(),
            Some("undeclared columns: zipcode, city")
        );
    }

    #[test]
    fn test_check_on_dataframe() {
        let df = df!("age" => &[34i64, 41], "income" => &[58000.0, 61500.5]).unwrap();
        let config = ValidationConfig {
            root_dir: "artifacts/data_validation".into(),
            dataset_path: "data/raw/people.csv".into(),
            status_file: "artifacts/data_validation/status.json".into(),
            schema: schema(&[("age", "int64"), ("income", "float64")]),
        };
        let validator = ColumnValidator::new(config);
        assert!(validator.check(&df).passed());
        assert_eq!(validator.config().schema.len(), 2);
    }
}
