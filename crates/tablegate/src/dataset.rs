//! Dataset loading.
//!
//! Datasets arrive as CSV files of varying quality. Loading tries a strict
//! parse first and falls back to progressively more forgiving strategies,
//! because real exports often carry stray quotes or blank lines.

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, ResultExt, ValidationError};

/// Load a dataset from a CSV file.
///
/// Tries three strategies in order: a standard parse with quote handling,
/// a parse without quote handling, and a parse of pre-cleaned content. The
/// error of the final strategy is returned if all of them fail.
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(ValidationError::DatasetMissing(path.to_path_buf()));
    }

    // Strategy 1: standard parse with quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .context(format!("Failed to open dataset '{}'", path.display()))?
        .finish()
    {
        Ok(df) => {
            info!("Dataset loaded successfully: {:?}", df.shape());
            return Ok(df);
        }
        Err(e) => {
            debug!("Standard parse failed: {}", e);
        }
    }

    // Strategy 2: without quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .context(format!("Failed to open dataset '{}'", path.display()))?
        .finish()
    {
        Ok(df) => {
            info!("Dataset loaded without quote handling: {:?}", df.shape());
            return Ok(df);
        }
        Err(e) => {
            debug!("Parse without quotes failed: {}", e);
        }
    }

    // Strategy 3: pre-clean the content and parse from memory
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read dataset '{}'", path.display()))?;
    let cleaned = clean_csv_content(&content);

    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(cleaned))
        .finish()
        .context(format!("Failed to parse dataset '{}'", path.display()))?;

    info!("Dataset loaded after cleaning: {:?}", df.shape());
    Ok(df)
}

/// Collapse doubled quotes and drop blank lines so a permissive parse can
/// succeed.
pub fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_dataset_standard_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        fs::write(&path, "age,income\n34,58000.0\n41,61500.5\n").unwrap();

        let df = load_dataset(&path).unwrap();
        assert_eq!(df.shape(), (2, 2));
        let names: Vec<&str> = df
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, vec!["age", "income"]);
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let err = load_dataset(Path::new("no/such/file.csv")).unwrap_err();
        assert_eq!(err.error_code(), "DATASET_MISSING");
    }

    #[test]
    fn test_load_dataset_tolerates_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gappy.csv");
        fs::write(&path, "age,income\n34,58000.0\n\n41,61500.5\n").unwrap();

        let df = load_dataset(&path).unwrap();
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_clean_csv_content() {
        let cleaned = clean_csv_content("a,b\n\"\"x\"\",1\n\n2,3\n");
        assert_eq!(cleaned, "a,b\n\"x\",1\n2,3");
    }
}
