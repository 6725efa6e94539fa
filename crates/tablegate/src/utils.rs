//! Shared file helpers for the validation pipeline.
//!
//! Small wrappers around YAML/JSON reading and writing plus directory
//! creation, each logging its side effect so pipeline runs leave a usable
//! trail.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, ResultExt, ValidationError};

/// Read a declarative YAML file into a typed structure.
///
/// Fails with [`ValidationError::ConfigFileNotFound`] when the file is
/// missing, with [`ValidationError::EmptyFile`] when it exists but holds no
/// content (a comments-only file counts as empty), and with a
/// contextualized YAML error when it does not parse.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ValidationError::ConfigFileNotFound(path.to_path_buf()));
    }

    let content =
        fs::read_to_string(path).context(format!("Failed to read '{}'", path.display()))?;
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyFile(path.to_path_buf()));
    }

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).context(format!("Failed to parse '{}'", path.display()))?;
    if value.is_null() {
        return Err(ValidationError::EmptyFile(path.to_path_buf()));
    }

    let typed =
        serde_yaml::from_value(value).context(format!("Failed to parse '{}'", path.display()))?;
    info!("Loaded YAML file: {}", path.display());
    Ok(typed)
}

/// Create every directory in the list, ignoring those that already exist.
pub fn ensure_directories<I, P>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path)
            .context(format!("Failed to create directory '{}'", path.display()))?;
        debug!("Ensured directory: {}", path.display());
    }
    Ok(())
}

/// Write a value as pretty-printed JSON, replacing any existing file.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).context(format!("Failed to write '{}'", path.display()))?;
    info!("JSON file saved at: {}", path.display());
    Ok(())
}

/// Load a JSON file into a typed structure.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).context(format!("Failed to read '{}'", path.display()))?;
    let value =
        serde_json::from_str(&content).context(format!("Failed to parse '{}'", path.display()))?;
    info!("JSON file loaded from: {}", path.display());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: usize,
    }

    #[test]
    fn test_read_yaml_typed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.yaml");
        fs::write(&path, "name: wine\ncount: 3\n").unwrap();

        let sample: Sample = read_yaml(&path).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "wine".to_string(),
                count: 3
            }
        );
    }

    #[test]
    fn test_read_yaml_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.yaml");
        fs::write(&path, "").unwrap();

        let err = read_yaml::<Sample>(&path).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_FILE");
    }

    #[test]
    fn test_read_yaml_comments_only_counts_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("comments.yaml");
        fs::write(&path, "# nothing declared yet\n").unwrap();

        let err = read_yaml::<Sample>(&path).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_FILE");
    }

    #[test]
    fn test_read_yaml_missing_file() {
        let err = read_yaml::<Sample>(Path::new("does/not/exist.yaml")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_NOT_FOUND");
    }

    #[test]
    fn test_read_yaml_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "name: [unclosed\n").unwrap();

        let err = read_yaml::<Sample>(&path).unwrap_err();
        assert_eq!(err.error_code(), "YAML_ERROR");
    }

    #[test]
    fn test_ensure_directories_idempotent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("artifacts/data_validation");

        ensure_directories([&nested]).unwrap();
        assert!(nested.is_dir());
        ensure_directories([&nested]).unwrap();
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("record.json");

        let mut record = BTreeMap::new();
        record.insert("validation_status".to_string(), true);
        save_json(&path, &record).unwrap();

        let loaded: BTreeMap<String, bool> = load_json(&path).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_save_json_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("record.json");

        save_json(&path, &vec![1, 2, 3]).unwrap();
        save_json(&path, &vec![9]).unwrap();

        let loaded: Vec<i32> = load_json(&path).unwrap();
        assert_eq!(loaded, vec![9]);
    }
}
