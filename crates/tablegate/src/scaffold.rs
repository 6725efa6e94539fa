//! Project layout scaffolding.
//!
//! `tablegate init` lays down the directory structure and starter files a
//! new pipeline project expects. Existing non-empty files are never
//! touched, so running it inside a live project is safe.

use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{DEFAULT_CONFIG_PATH, DEFAULT_SCHEMA_PATH};
use crate::error::{Result, ResultExt};

/// Starter content for `config/config.yaml`.
const STARTER_CONFIG: &str = "\
artifacts_root: artifacts

data_validation:
  root_dir: artifacts/data_validation
  dataset_path: data/raw/dataset.csv
  status_file: artifacts/data_validation/status.json
";

/// Starter content for `schema.yaml`.
const STARTER_SCHEMA: &str = "\
columns:
  age: int64
  income: float64
target_column: income
";

/// Directories every project starts with.
const PROJECT_DIRS: [&str; 4] = ["config", "data/raw", "artifacts", "logs"];

/// What a scaffolding run did.
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    /// Files written by this run.
    pub created: Vec<PathBuf>,

    /// Files left alone because they already had content.
    pub skipped: Vec<PathBuf>,
}

/// Creates the standard project layout under a root directory.
pub struct ProjectScaffold {
    root: PathBuf,
}

impl ProjectScaffold {
    /// Scaffold under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create directories and starter files.
    ///
    /// A starter file is only written when it is missing or empty.
    pub fn create(&self) -> Result<ScaffoldReport> {
        for dir in PROJECT_DIRS {
            let path = self.root.join(dir);
            fs::create_dir_all(&path)
                .context(format!("Failed to create directory '{}'", path.display()))?;
            debug!("Ensured directory: {}", path.display());
        }

        let mut report = ScaffoldReport::default();
        self.write_starter(DEFAULT_CONFIG_PATH, STARTER_CONFIG, &mut report)?;
        self.write_starter(DEFAULT_SCHEMA_PATH, STARTER_SCHEMA, &mut report)?;

        info!(
            "Project layout ready at '{}': {} files created, {} skipped",
            self.root.display(),
            report.created.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    fn write_starter(
        &self,
        relative: &str,
        content: &str,
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        let path = self.root.join(relative);
        let has_content = fs::metadata(&path).map(|m| m.len() > 0).unwrap_or(false);

        if has_content {
            info!("{} already exists", path.display());
            report.skipped.push(path);
        } else {
            fs::write(&path, content)
                .context(format!("Failed to write '{}'", path.display()))?;
            info!("Created starter file: {}", path.display());
            report.created.push(path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_create_lays_out_project() {
        let dir = TempDir::new().unwrap();
        let report = ProjectScaffold::new(dir.path()).create().unwrap();

        assert_eq!(report.created.len(), 2);
        assert!(report.skipped.is_empty());
        assert!(dir.path().join("config/config.yaml").is_file());
        assert!(dir.path().join("schema.yaml").is_file());
        assert!(dir.path().join("data/raw").is_dir());
        assert!(dir.path().join("artifacts").is_dir());
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_create_skips_existing_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::write(
            dir.path().join("config/config.yaml"),
            "artifacts_root: custom\n",
        )
        .unwrap();

        let report = ProjectScaffold::new(dir.path()).create().unwrap();

        assert_eq!(report.created, vec![dir.path().join("schema.yaml")]);
        assert_eq!(report.skipped, vec![dir.path().join("config/config.yaml")]);

        let kept = fs::read_to_string(dir.path().join("config/config.yaml")).unwrap();
        assert_eq!(kept, "artifacts_root: custom\n");
    }

    #[test]
    fn test_create_rewrites_empty_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::write(dir.path().join("config/config.yaml"), "").unwrap();

        let report = ProjectScaffold::new(dir.path()).create().unwrap();
        assert!(
            report
                .created
                .contains(&dir.path().join("config/config.yaml"))
        );
    }

    #[test]
    fn test_starter_files_parse() {
        let config: crate::config::ProjectConfig = serde_yaml::from_str(STARTER_CONFIG).unwrap();
        config.validate().unwrap();

        let schema: crate::schema::DatasetSchema = serde_yaml::from_str(STARTER_SCHEMA).unwrap();
        assert!(schema.declares("age"));
        assert!(schema.declares("income"));
    }
}
