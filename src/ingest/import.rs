//! ingest::import
//!
//! Batch import: walk a document tree, normalize, persist.
//!
//! # Behavior
//!
//! The importer is a destructive full refresh, not an upsert: it clears
//! every puzzle and clue record before the walk. Documents are visited
//! in a stable order (each directory's entries sorted by name, so
//! year/month/filename trees import chronologically) and each document
//! is one transaction: puzzle first, then its clues against the
//! generated id, then commit.
//!
//! The importer is the single recovery boundary for the pipeline. Any
//! failure inside one document (unreadable file, malformed document,
//! storage error) rolls back and is recorded in the report; the batch
//! always continues. The only fatal errors are a missing source
//! directory and a failed initial refresh, both of which abort before
//! any document is processed.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::core::document::{DocumentError, RawPuzzle};
use crate::store::{PuzzleStore, StoreError};

use super::normalize::{normalize, NormalizedPuzzle};

/// Fatal batch-level errors.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("puzzle directory not found: {0}")]
    SourceMissing(PathBuf),

    #[error("failed to enumerate puzzle directory: {0}")]
    Enumerate(#[from] walkdir::Error),

    #[error("failed to clear existing records: {0}")]
    Refresh(#[from] StoreError),
}

/// Why one document failed. Never fatal to the batch.
#[derive(Debug, Error)]
enum DocumentFailure {
    #[error("{0}")]
    Read(#[from] std::io::Error),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Store(#[from] StoreError),
}

/// One failed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a batch import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Documents committed.
    pub processed: usize,
    /// Documents rolled back.
    pub failed: usize,
    /// Clues dropped across all committed documents (unresolved numbers).
    pub dropped_clues: usize,
    /// Per-document failure detail, in walk order.
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    /// Total documents visited.
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }
}

/// Import every `.json` document under `root` into `store`.
///
/// Clears all existing puzzle and clue records first; see the module
/// docs for the full behavior.
///
/// # Errors
///
/// Returns [`ImportError`] only when the batch cannot run at all:
/// missing source directory, enumeration failure, or a failed refresh.
/// Individual document failures land in the report instead.
pub fn import_all(root: &Path, store: &mut dyn PuzzleStore) -> Result<ImportReport, ImportError> {
    if !root.is_dir() {
        return Err(ImportError::SourceMissing(root.to_path_buf()));
    }

    store.refresh()?;

    let mut report = ImportReport::default();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        match import_one(path, store) {
            Ok(dropped) => {
                report.processed += 1;
                report.dropped_clues += dropped;
            }
            Err(failure) => {
                report.failed += 1;
                report.failures.push(ImportFailure {
                    path: path.to_path_buf(),
                    reason: failure.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Normalize and persist one document. Returns its dropped-clue count.
fn import_one(path: &Path, store: &mut dyn PuzzleStore) -> Result<usize, DocumentFailure> {
    let raw = fs::read_to_string(path)?;
    let doc = RawPuzzle::from_json(&raw)?;
    let normalized = normalize(&doc)?;

    store.begin()?;
    if let Err(e) = persist(store, &normalized) {
        // Rollback failure is unreportable here; the begin/commit pair
        // is what guards atomicity.
        let _ = store.rollback();
        return Err(e.into());
    }
    Ok(normalized.dropped)
}

/// Insert puzzle then clues, commit.
fn persist(store: &mut dyn PuzzleStore, normalized: &NormalizedPuzzle) -> Result<(), StoreError> {
    let puzzle_id = store.insert_puzzle(&normalized.puzzle)?;
    store.insert_clues(puzzle_id, &normalized.clues)?;
    store.commit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::{FailOn, MockStore};

    fn write_doc(dir: &Path, rel: &str, date: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        let mut cells = vec![".".to_string(); 225];
        let mut gridnums = vec![0u32; 225];
        for col in 0..3 {
            cells[col] = "A".to_string();
        }
        gridnums[0] = 1;

        let doc = serde_json::json!({
            "date": date,
            "author": "Test Author",
            "grid": cells,
            "gridnums": gridnums,
            "clues": { "across": ["1. Start"], "down": [] },
            "answers": { "across": ["AAA"], "down": [] }
        });
        fs::write(path, doc.to_string()).unwrap();
    }

    #[test]
    fn missing_directory_is_fatal() {
        let mut store = MockStore::new();
        let err = import_all(Path::new("/nonexistent/crosswords"), &mut store).unwrap_err();
        assert!(matches!(err, ImportError::SourceMissing(_)));
        assert_eq!(store.refresh_count(), 0);
    }

    #[test]
    fn imports_in_year_month_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "2005/01/2005-01-01.json", "1/1/2005");
        write_doc(dir.path(), "2004/12/2004-12-31.json", "12/31/2004");
        write_doc(dir.path(), "2004/02/2004-02-01.json", "2/1/2004");

        let mut store = MockStore::new();
        let report = import_all(dir.path(), &mut store).unwrap();

        assert_eq!(report.processed, 3);
        let dates: Vec<&str> = store
            .committed()
            .iter()
            .map(|doc| doc.puzzle.date_published.as_str())
            .collect();
        assert_eq!(dates, vec!["2/1/2004", "12/31/2004", "1/1/2005"]);
    }

    #[test]
    fn non_json_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "2004/01/a.json", "1/1/2004");
        fs::write(dir.path().join("2004/01/README.txt"), "not a puzzle").unwrap();

        let mut store = MockStore::new();
        let report = import_all(dir.path(), &mut store).unwrap();
        assert_eq!(report.total(), 1);
    }

    #[test]
    fn malformed_document_fails_alone() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "2004/01/a.json", "1/1/2004");
        fs::write(dir.path().join("2004/01/b.json"), "{\"date\": \"oops\"}").unwrap();
        write_doc(dir.path(), "2004/01/c.json", "1/3/2004");

        let mut store = MockStore::new();
        let report = import_all(dir.path(), &mut store).unwrap();

        assert_eq!(report.processed, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("b.json"));
        assert_eq!(store.committed().len(), 2);
    }

    #[test]
    fn storage_failure_rolls_back_one_document() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "2004/01/a.json", "1/1/2004");
        write_doc(dir.path(), "2004/01/b.json", "1/2/2004");
        write_doc(dir.path(), "2004/01/c.json", "1/3/2004");

        let mut store = MockStore::new();
        store.fail_on(FailOn::Puzzle("1/2/2004".to_string()));
        let report = import_all(dir.path(), &mut store).unwrap();

        assert_eq!(report.processed, 2);
        assert_eq!(report.failed, 1);
        let dates: Vec<&str> = store
            .committed()
            .iter()
            .map(|doc| doc.puzzle.date_published.as_str())
            .collect();
        assert_eq!(dates, vec!["1/1/2004", "1/3/2004"]);
    }

    #[test]
    fn refresh_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "2004/01/a.json", "1/1/2004");

        let mut store = MockStore::new();
        store.fail_on(FailOn::Refresh);
        assert!(matches!(
            import_all(dir.path(), &mut store),
            Err(ImportError::Refresh(_))
        ));
        assert!(store.committed().is_empty());
    }

    #[test]
    fn reimport_does_not_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "2004/01/a.json", "1/1/2004");

        let mut store = MockStore::new();
        import_all(dir.path(), &mut store).unwrap();
        import_all(dir.path(), &mut store).unwrap();

        assert_eq!(store.committed().len(), 1);
        assert_eq!(store.refresh_count(), 2);
    }
}
