//! Annotation storage behind a repository trait.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::row::AnnotationRow;
use crate::error::AnnotationError;

/// One-time-initialized, externally editable store keyed by file name.
///
/// Decouples the bootstrap guard from any front end so the
/// create-on-absence logic is testable on its own.
pub trait AnnotationRepository {
    /// Whether the store has already been created.
    fn exists(&self) -> bool;

    /// Create the store with the given rows. Only called when absent.
    fn create(&self, rows: &[AnnotationRow]) -> Result<(), AnnotationError>;

    /// Load all rows in stored order.
    fn load(&self) -> Result<Vec<AnnotationRow>, AnnotationError>;
}

/// CSV-backed repository.
///
/// Header `file_name,cream,fruits,sprinkle_toppings`, one data row per
/// image. The file is the sole persisted state and the surface a human
/// edits between runs.
#[derive(Debug, Clone)]
pub struct CsvAnnotationRepository {
    path: PathBuf,
}

impl CsvAnnotationRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnnotationRepository for CsvAnnotationRepository {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn create(&self, rows: &[AnnotationRow]) -> Result<(), AnnotationError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        // the header is written explicitly so an empty table still gets
        // one, and has_headers(false) keeps serialize from re-emitting it
        writer.write_record(["file_name", "cream", "fruits", "sprinkle_toppings"])?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        debug!(
            "wrote {} annotation row(s) to {}",
            rows.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Vec<AnnotationRow>, AnnotationError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }

        debug!(
            "loaded {} annotation row(s) from {}",
            rows.len(),
            self.path.display()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::row::Label;

    fn temp_repo(dir: &tempfile::TempDir) -> CsvAnnotationRepository {
        CsvAnnotationRepository::new(dir.path().join("cake_annotated.csv"))
    }

    #[test]
    fn test_exists_false_before_create() {
        let dir = tempfile::tempdir().unwrap();
        let repo = temp_repo(&dir);

        assert!(!repo.exists());
    }

    #[test]
    fn test_create_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = temp_repo(&dir);

        let rows = vec![
            AnnotationRow::with_defaults("a.jpg"),
            AnnotationRow {
                file_name: "b.png".to_string(),
                cream: Label::No,
                fruits: Label::Yes,
                sprinkle_toppings: Label::Yes,
            },
        ];

        repo.create(&rows).unwrap();
        assert!(repo.exists());

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_csv_header_and_values_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let repo = temp_repo(&dir);

        repo.create(&[AnnotationRow::with_defaults("a.jpg")]).unwrap();

        let contents = std::fs::read_to_string(repo.path()).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("file_name,cream,fruits,sprinkle_toppings")
        );
        assert_eq!(lines.next(), Some("a.jpg,yes,no,no"));
    }

    #[test]
    fn test_create_empty_table_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let repo = temp_repo(&dir);

        repo.create(&[]).unwrap();

        let contents = std::fs::read_to_string(repo.path()).unwrap();
        assert_eq!(
            contents.lines().next(),
            Some("file_name,cream,fruits,sprinkle_toppings")
        );
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_rejects_unknown_label() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cake_annotated.csv");
        std::fs::write(
            &path,
            "file_name,cream,fruits,sprinkle_toppings\na.jpg,maybe,no,no\n",
        )
        .unwrap();

        let repo = CsvAnnotationRepository::new(&path);
        let err = repo.load().unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("maybe"), "error should name the bad value: {msg}");
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = temp_repo(&dir);

        assert!(repo.load().is_err());
    }
}
