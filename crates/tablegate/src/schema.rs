//! Declared dataset schema.
//!
//! The schema file lists every column a dataset is allowed to carry, keyed
//! by name with a declared type string (`int64`, `float64`, `object`, ...).
//! Validation only consults the key set; the declared types are carried for
//! reporting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, ResultExt};
use crate::utils;

/// Schema declaration for a dataset.
///
/// # Example
///
/// ```yaml
/// columns:
///   age: int64
///   income: float64
/// target_column: income
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSchema {
    /// Declared columns, keyed by name. The map is ordered so reports and
    /// log lines list columns deterministically.
    pub columns: BTreeMap<String, String>,

    /// Column a downstream training stage would predict. Recorded here but
    /// never consulted by validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_column: Option<String>,
}

impl DatasetSchema {
    /// Load a schema declaration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        utils::read_yaml(path).context(format!("Failed to load schema from '{}'", path.display()))
    }

    /// Whether the schema declares a column with this exact name.
    pub fn declares(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Declared type for a column, if the schema lists it.
    pub fn declared_type(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    /// Iterate over the declared column names in sorted order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no columns are declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
