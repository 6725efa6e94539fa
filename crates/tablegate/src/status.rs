//! Persisted validation status.
//!
//! The status record is the contract between this stage and whatever runs
//! next: downstream stages read it to decide whether to proceed. Each run
//! replaces the file wholesale, so it always reflects the latest outcome
//! and reruns over unchanged inputs produce identical bytes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::utils;

/// Outcome of a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStatus {
    /// Whether every dataset column was declared in the schema.
    pub validation_status: bool,

    /// Human-readable detail, present only on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationStatus {
    /// A passing status.
    pub fn pass() -> Self {
        Self {
            validation_status: true,
            message: None,
        }
    }

    /// A failing status with a message describing why.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            validation_status: false,
            message: Some(message.into()),
        }
    }

    /// Whether the run passed.
    pub fn passed(&self) -> bool {
        self.validation_status
    }

    /// Write the record to `path`, replacing any previous content.
    pub fn write(&self, path: &Path) -> Result<()> {
        utils::save_json(path, self)?;
        info!("Validation status written: {}", self.validation_status);
        Ok(())
    }

    /// Read a previously written record, e.g. to gate a downstream stage.
    pub fn read(path: &Path) -> Result<Self> {
        utils::load_json(path)
    }
}
