//! CSV output for extracted homepage data.
//!
//! Each source site gets its own destination file, truncated on every run
//! (no append mode). The layout is a fixed three-column header followed by
//! one row per article:
//!
//! ```text
//! Link,Title,Description
//! /weather,Storm Hits City,storm hit city hard
//! ```
//!
//! The Link cell is the article's own link and the Title cell its heading;
//! either is written as an empty value when absent. The Description cell is
//! the normalized summary. Values containing the delimiter get standard CSV
//! quoting.

use crate::error::WriteError;
use crate::models::ExtractionResult;
use std::fs::File;
use std::path::Path;
use tracing::{info, instrument};

/// Write an extraction result to `path` as CSV.
///
/// Truncates any existing file at `path`, writes the header and one row per
/// article, and flushes before returning.
///
/// # Errors
///
/// Returns [`WriteError`] when the destination cannot be created or a
/// record fails to serialize/flush.
#[instrument(level = "info", skip(result), fields(path = %path.display()))]
pub fn write_csv(result: &ExtractionResult, path: &Path) -> Result<(), WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);

    let csv_err = |source: csv::Error| WriteError::Csv {
        path: path.to_path_buf(),
        source,
    };

    writer
        .write_record(["Link", "Title", "Description"])
        .map_err(csv_err)?;
    for article in &result.articles {
        writer
            .write_record([
                article.link.as_deref().unwrap_or(""),
                article.title.as_deref().unwrap_or(""),
                article.summary.as_str(),
            ])
            .map_err(csv_err)?;
    }
    writer
        .flush()
        .map_err(|e| csv_err(csv::Error::from(e)))?;

    info!(rows = result.articles.len(), "Wrote CSV output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;
    use std::fs;

    fn storm_result() -> ExtractionResult {
        ExtractionResult {
            source_url: "https://example.com/".to_string(),
            links: vec!["/weather".to_string()],
            articles: vec![Article {
                title: Some("Storm Hits City".to_string()),
                summary: "storm hit city hard".to_string(),
                link: Some("/weather".to_string()),
            }],
        }
    }

    #[test]
    fn test_write_storm_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storm.csv");
        write_csv(&storm_result(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Link,Title,Description\n/weather,Storm Hits City,storm hit city hard\n"
        );
    }

    #[test]
    fn test_write_empty_cells_for_missing_title_and_link() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.csv");
        let result = ExtractionResult {
            source_url: "https://example.com/".to_string(),
            links: Vec::new(),
            articles: vec![Article {
                title: None,
                summary: "orphan summary".to_string(),
                link: None,
            }],
        };
        write_csv(&result, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Link,Title,Description\n,,orphan summary\n");
    }

    #[test]
    fn test_write_quotes_values_containing_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quoted.csv");
        let result = ExtractionResult {
            source_url: "https://example.com/".to_string(),
            links: Vec::new(),
            articles: vec![Article {
                title: Some("Storms, Floods".to_string()),
                summary: "rain wind".to_string(),
                link: Some("/a,b".to_string()),
            }],
        };
        write_csv(&result, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Link,Title,Description\n\"/a,b\",\"Storms, Floods\",rain wind\n"
        );
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewrite.csv");
        fs::write(&path, "stale content that should disappear").unwrap();
        write_csv(&storm_result(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Link,Title,Description\n"));
        assert!(!contents.contains("stale"));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.csv");
        let err = write_csv(&storm_result(), &path).unwrap_err();
        assert!(matches!(err, WriteError::Create { .. }));
    }
}
