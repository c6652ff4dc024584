//! store::mock
//!
//! In-memory [`PuzzleStore`] for deterministic testing.
//!
//! # Design
//!
//! The mock honors the same transaction protocol as the SQLite store:
//! inserts stage into the open transaction and become visible only on
//! commit. Failure injection targets a specific operation (or a specific
//! document, for mid-batch failures), and every call is recorded for
//! verification.
//!
//! # Example
//!
//! ```
//! use gridwit::core::records::NewPuzzle;
//! use gridwit::store::mock::MockStore;
//! use gridwit::store::PuzzleStore;
//!
//! let mut store = MockStore::new();
//! store.begin().unwrap();
//! let id = store.insert_puzzle(&NewPuzzle {
//!     date_published: "11/6/2004".to_string(),
//!     author: "Kyle Mahowald".to_string(),
//!     grid: "[]".to_string(),
//! }).unwrap();
//! store.insert_clues(id, &[]).unwrap();
//! store.commit().unwrap();
//!
//! assert_eq!(store.committed().len(), 1);
//! assert_eq!(store.committed()[0].id, id);
//! ```

use crate::core::records::{NewClue, NewPuzzle};

use super::traits::{PuzzleStore, StoreError};

/// Which operation should fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailOn {
    /// Fail `refresh`.
    Refresh,
    /// Fail `begin`.
    Begin,
    /// Fail `commit`.
    Commit,
    /// Fail `insert_puzzle` for the puzzle with this publication date.
    Puzzle(String),
    /// Fail `insert_clues` for the puzzle with this id.
    Clues(i64),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    Refresh,
    Begin,
    Commit,
    Rollback,
    InsertPuzzle { date_published: String },
    InsertClues { puzzle_id: i64, count: usize },
}

/// One committed document: a puzzle with its clues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDocument {
    pub id: i64,
    pub puzzle: NewPuzzle,
    pub clues: Vec<NewClue>,
}

/// In-memory puzzle store for tests.
#[derive(Debug, Default)]
pub struct MockStore {
    committed: Vec<MockDocument>,
    staged: Option<Vec<MockDocument>>,
    next_id: i64,
    fail_on: Option<FailOn>,
    operations: Vec<MockOperation>,
    refresh_count: usize,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Configure an operation to fail with `StoreError::Backend`.
    pub fn fail_on(&mut self, fail: FailOn) {
        self.fail_on = Some(fail);
    }

    /// Clear any configured failure.
    pub fn clear_failure(&mut self) {
        self.fail_on = None;
    }

    /// Documents visible after commit, in commit order.
    pub fn committed(&self) -> &[MockDocument] {
        &self.committed
    }

    /// Every operation invoked on this store, in order.
    pub fn operations(&self) -> &[MockOperation] {
        &self.operations
    }

    /// How many times `refresh` ran.
    pub fn refresh_count(&self) -> usize {
        self.refresh_count
    }

    fn injected(&self, matches: impl FnOnce(&FailOn) -> bool) -> Result<(), StoreError> {
        match &self.fail_on {
            Some(fail) if matches(fail) => {
                Err(StoreError::Backend("injected failure".to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl PuzzleStore for MockStore {
    fn refresh(&mut self) -> Result<(), StoreError> {
        self.operations.push(MockOperation::Refresh);
        self.injected(|f| *f == FailOn::Refresh)?;
        self.committed.clear();
        self.refresh_count += 1;
        Ok(())
    }

    fn begin(&mut self) -> Result<(), StoreError> {
        self.operations.push(MockOperation::Begin);
        self.injected(|f| *f == FailOn::Begin)?;
        if self.staged.is_some() {
            return Err(StoreError::Transaction(
                "transaction already in progress".to_string(),
            ));
        }
        self.staged = Some(Vec::new());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.operations.push(MockOperation::Commit);
        self.injected(|f| *f == FailOn::Commit)?;
        let staged = self.staged.take().ok_or_else(|| {
            StoreError::Transaction("commit with no transaction in progress".to_string())
        })?;
        self.committed.extend(staged);
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), StoreError> {
        self.operations.push(MockOperation::Rollback);
        if self.staged.take().is_none() {
            return Err(StoreError::Transaction(
                "rollback with no transaction in progress".to_string(),
            ));
        }
        Ok(())
    }

    fn insert_puzzle(&mut self, puzzle: &NewPuzzle) -> Result<i64, StoreError> {
        self.operations.push(MockOperation::InsertPuzzle {
            date_published: puzzle.date_published.clone(),
        });
        self.injected(|f| matches!(f, FailOn::Puzzle(date) if *date == puzzle.date_published))?;

        let id = self.next_id;
        self.next_id += 1;
        let doc = MockDocument {
            id,
            puzzle: puzzle.clone(),
            clues: Vec::new(),
        };
        // Outside a transaction, inserts autocommit like SQLite.
        match &mut self.staged {
            Some(staged) => staged.push(doc),
            None => self.committed.push(doc),
        }
        Ok(id)
    }

    fn insert_clues(&mut self, puzzle_id: i64, clues: &[NewClue]) -> Result<(), StoreError> {
        self.operations.push(MockOperation::InsertClues {
            puzzle_id,
            count: clues.len(),
        });
        self.injected(|f| matches!(f, FailOn::Clues(id) if *id == puzzle_id))?;

        let doc = self
            .staged
            .iter_mut()
            .flatten()
            .chain(self.committed.iter_mut())
            .find(|doc| doc.id == puzzle_id)
            .ok_or_else(|| StoreError::NotFound(format!("puzzle {puzzle_id}")))?;
        doc.clues.extend_from_slice(clues);
        Ok(())
    }
}
