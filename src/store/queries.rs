//! store::queries
//!
//! Read/write passthrough operations over the normalized records: the
//! listing, search, daily-puzzle, status, and user-progress surface.
//!
//! All methods live on [`SqliteStore`] directly; the importer-facing
//! [`crate::store::PuzzleStore`] trait stays narrow.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::core::config::MAX_PER_PAGE;
use crate::core::records::{
    Clue, Puzzle, PuzzlePage, PuzzleSummary, PuzzleWithClues, SavedProgress, StatusReport, User,
    UserPuzzle,
};
use crate::core::types::Direction;

use super::sqlite::SqliteStore;
use super::traits::StoreError;

/// Search filters. Empty filters match everything.
///
/// Substring filters (`author`, `word`, `clue`) are case-insensitive for
/// ASCII, via SQLite `LIKE`. `date` is an exact match against the stored
/// `M/D/YYYY` string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub author: Option<String>,
    pub date: Option<String>,
    pub word: Option<String>,
    pub clue: Option<String>,
}

impl SearchFilters {
    /// Whether any filter is set.
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.date.is_none() && self.word.is_none() && self.clue.is_none()
    }
}

/// Per-direction clue counts for one puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClueCounts {
    pub across: u64,
    pub down: u64,
}

impl ClueCounts {
    pub fn total(&self) -> u64 {
        self.across + self.down
    }
}

impl SqliteStore {
    /// Archive health summary: record counts plus a timestamp.
    pub fn status(&self) -> Result<StatusReport, StoreError> {
        let conn = self.connection();
        let puzzle_count: i64 = conn.query_row("SELECT COUNT(*) FROM puzzles", [], |r| r.get(0))?;
        let clue_count: i64 = conn.query_row("SELECT COUNT(*) FROM clues", [], |r| r.get(0))?;
        Ok(StatusReport {
            puzzle_count: puzzle_count as u64,
            clue_count: clue_count as u64,
            timestamp: Utc::now().to_rfc3339(),
        })
    }

    /// Fetch one puzzle with its clues, ordered by clue number.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no puzzle has `id`.
    pub fn get_puzzle(&self, id: i64) -> Result<PuzzleWithClues, StoreError> {
        let conn = self.connection();
        let puzzle = conn
            .query_row(
                "SELECT id, date_published, author, grid, created_at
                 FROM puzzles WHERE id = ?",
                params![id],
                puzzle_from_row,
            )
            .optional()?
            .ok_or_else(|| StoreError::NotFound(format!("puzzle {id}")))?;

        let clues = clues_for(conn, id)?;
        Ok(PuzzleWithClues { puzzle, clues })
    }

    /// One page of puzzles, oldest insertion first, each with clues.
    pub fn list_puzzles(&self, page: u64, per_page: u64) -> Result<PuzzlePage, StoreError> {
        self.search(&SearchFilters::default(), page, per_page)
    }

    /// A random puzzle with clues, recorded in the daily history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the archive is empty.
    pub fn daily_puzzle(&self) -> Result<PuzzleWithClues, StoreError> {
        let conn = self.connection();
        let puzzle = conn
            .query_row(
                "SELECT id, date_published, author, grid, created_at
                 FROM puzzles ORDER BY RANDOM() LIMIT 1",
                [],
                puzzle_from_row,
            )
            .optional()?
            .ok_or_else(|| StoreError::NotFound("no puzzles in archive".to_string()))?;

        conn.execute(
            "INSERT INTO daily_puzzle_history (puzzle_id) VALUES (?)",
            params![puzzle.id],
        )?;

        let clues = clues_for(conn, puzzle.id)?;
        Ok(PuzzleWithClues { puzzle, clues })
    }

    /// Search puzzles by author/date/answer-word/clue-text filters.
    ///
    /// `page` is 1-based; `per_page` is clamped to [1, 50].
    pub fn search(
        &self,
        filters: &SearchFilters,
        page: u64,
        per_page: u64,
    ) -> Result<PuzzlePage, StoreError> {
        let conn = self.connection();
        let page = page.max(1);
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        let needs_join = filters.word.is_some() || filters.clue.is_some();
        let mut conditions: Vec<&str> = Vec::new();
        let mut args: Vec<String> = Vec::new();

        if let Some(author) = &filters.author {
            conditions.push("p.author LIKE ?");
            args.push(format!("%{author}%"));
        }
        if let Some(date) = &filters.date {
            conditions.push("p.date_published = ?");
            args.push(date.clone());
        }
        if let Some(word) = &filters.word {
            conditions.push("c.answer LIKE ?");
            args.push(format!("%{word}%"));
        }
        if let Some(clue) = &filters.clue {
            conditions.push("c.text LIKE ?");
            args.push(format!("%{clue}%"));
        }

        let mut from = String::from(" FROM puzzles p");
        if needs_join {
            from.push_str(" JOIN clues c ON c.puzzle_id = p.id");
        }
        let mut where_clause = String::new();
        if !conditions.is_empty() {
            where_clause = format!(" WHERE {}", conditions.join(" AND "));
        }

        let count_sql = format!("SELECT COUNT(DISTINCT p.id){from}{where_clause}");
        let total: i64 = conn.query_row(
            &count_sql,
            rusqlite::params_from_iter(args.iter()),
            |r| r.get(0),
        )?;
        let total = total as u64;

        let offset = (page - 1) * per_page;
        let page_sql = format!(
            "SELECT DISTINCT p.id, p.date_published, p.author, p.grid, p.created_at\
             {from}{where_clause} ORDER BY p.id LIMIT {per_page} OFFSET {offset}"
        );
        let mut stmt = conn.prepare(&page_sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(args.iter()), puzzle_from_row)?;

        let mut puzzles = Vec::new();
        for row in rows {
            let puzzle = row?;
            let clues = clues_for(conn, puzzle.id)?;
            puzzles.push(PuzzleWithClues { puzzle, clues });
        }

        Ok(PuzzlePage {
            puzzles,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    /// How many daily puzzles have been served.
    pub fn daily_history_count(&self) -> Result<u64, StoreError> {
        let count: i64 = self.connection().query_row(
            "SELECT COUNT(*) FROM daily_puzzle_history",
            [],
            |r| r.get(0),
        )?;
        Ok(count as u64)
    }

    /// Per-direction clue counts for one puzzle.
    pub fn clue_counts(&self, puzzle_id: i64) -> Result<ClueCounts, StoreError> {
        let conn = self.connection();
        let count = |direction: Direction| -> Result<i64, rusqlite::Error> {
            conn.query_row(
                "SELECT COUNT(*) FROM clues WHERE puzzle_id = ? AND direction = ?",
                params![puzzle_id, direction.as_str()],
                |r| r.get(0),
            )
        };
        Ok(ClueCounts {
            across: count(Direction::Across)? as u64,
            down: count(Direction::Down)? as u64,
        })
    }

    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` on constraint violation (duplicate
    /// username or email).
    pub fn create_user(&self, username: &str, email: &str) -> Result<User, StoreError> {
        let conn = self.connection();
        conn.execute(
            "INSERT INTO users (username, email) VALUES (?, ?)",
            params![username, email],
        )?;
        let id = conn.last_insert_rowid();
        let created_at: Option<String> = conn.query_row(
            "SELECT created_at FROM users WHERE id = ?",
            params![id],
            |r| r.get(0),
        )?;
        Ok(User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            created_at,
        })
    }

    /// All progress entries for a user, joined with puzzle identification.
    pub fn user_puzzles(&self, user_id: i64) -> Result<Vec<UserPuzzle>, StoreError> {
        let conn = self.connection();
        let mut stmt = conn.prepare(
            "SELECT sp.puzzle_id, sp.progress, sp.completed, sp.last_played,
                    p.date_published, p.author
             FROM saved_puzzles sp
             JOIN puzzles p ON p.id = sp.puzzle_id
             WHERE sp.user_id = ?
             ORDER BY sp.id",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, bool>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (puzzle_id, progress, completed, last_played, date_published, author) = row?;
            entries.push(UserPuzzle {
                progress: SavedProgress {
                    puzzle_id,
                    progress: parse_progress(progress)?,
                    completed,
                    last_played,
                },
                puzzle: PuzzleSummary {
                    date_published,
                    author,
                },
            });
        }
        Ok(entries)
    }

    /// Record a user's progress on a puzzle (create).
    pub fn save_progress(
        &self,
        user_id: i64,
        puzzle_id: i64,
        progress: &serde_json::Value,
        completed: bool,
    ) -> Result<SavedProgress, StoreError> {
        let conn = self.connection();
        conn.execute(
            "INSERT INTO saved_puzzles (user_id, puzzle_id, progress, completed)
             VALUES (?, ?, ?, ?)",
            params![user_id, puzzle_id, progress.to_string(), completed],
        )?;
        self.get_progress(user_id, puzzle_id)
    }

    /// Update existing progress.
    ///
    /// `completed` of `None` leaves the stored flag unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no progress entry exists for
    /// this (user, puzzle) pair.
    pub fn update_progress(
        &self,
        user_id: i64,
        puzzle_id: i64,
        progress: &serde_json::Value,
        completed: Option<bool>,
    ) -> Result<SavedProgress, StoreError> {
        let conn = self.connection();
        let updated = match completed {
            Some(flag) => conn.execute(
                "UPDATE saved_puzzles
                 SET progress = ?, completed = ?, last_played = CURRENT_TIMESTAMP
                 WHERE user_id = ? AND puzzle_id = ?",
                params![progress.to_string(), flag, user_id, puzzle_id],
            )?,
            None => conn.execute(
                "UPDATE saved_puzzles
                 SET progress = ?, last_played = CURRENT_TIMESTAMP
                 WHERE user_id = ? AND puzzle_id = ?",
                params![progress.to_string(), user_id, puzzle_id],
            )?,
        };
        if updated == 0 {
            return Err(StoreError::NotFound(format!(
                "saved puzzle for user {user_id}, puzzle {puzzle_id}"
            )));
        }
        self.get_progress(user_id, puzzle_id)
    }

    /// Fetch one progress entry.
    pub fn get_progress(&self, user_id: i64, puzzle_id: i64) -> Result<SavedProgress, StoreError> {
        let conn = self.connection();
        let row = conn
            .query_row(
                "SELECT puzzle_id, progress, completed, last_played
                 FROM saved_puzzles WHERE user_id = ? AND puzzle_id = ?",
                params![user_id, puzzle_id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, bool>(2)?,
                        row.get::<_, Option<String>>(3)?,
                    ))
                },
            )
            .optional()?
            .ok_or_else(|| {
                StoreError::NotFound(format!("saved puzzle for user {user_id}, puzzle {puzzle_id}"))
            })?;

        let (puzzle_id, progress, completed, last_played) = row;
        Ok(SavedProgress {
            puzzle_id,
            progress: parse_progress(progress)?,
            completed,
            last_played,
        })
    }
}

/// Map a `puzzles` row (id, date_published, author, grid, created_at).
fn puzzle_from_row(row: &Row<'_>) -> Result<Puzzle, rusqlite::Error> {
    Ok(Puzzle {
        id: row.get(0)?,
        date_published: row.get(1)?,
        author: row.get(2)?,
        grid: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Fetch a puzzle's clues ordered by number.
fn clues_for(conn: &Connection, puzzle_id: i64) -> Result<Vec<Clue>, StoreError> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, puzzle_id, number, direction, text, answer, \"row\", \"column\"
         FROM clues WHERE puzzle_id = ? ORDER BY number",
    )?;
    let rows = stmt.query_map(params![puzzle_id], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, i64>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, i64>(6)?,
            row.get::<_, i64>(7)?,
        ))
    })?;

    let mut clues = Vec::new();
    for row in rows {
        let (id, puzzle_id, number, direction, text, answer, row_idx, col_idx) = row?;
        let direction: Direction = direction
            .parse()
            .map_err(|_| StoreError::InvalidRecord(format!("clue {id}: direction {direction:?}")))?;
        clues.push(Clue {
            id,
            puzzle_id,
            number: number as u32,
            direction,
            text,
            answer,
            row: row_idx as usize,
            col: col_idx as usize,
        });
    }
    Ok(clues)
}

/// Parse the stored progress JSON blob; NULL becomes `null`.
fn parse_progress(raw: Option<String>) -> Result<serde_json::Value, StoreError> {
    match raw {
        None => Ok(serde_json::Value::Null),
        Some(text) => serde_json::from_str(&text)
            .map_err(|e| StoreError::InvalidRecord(format!("progress blob: {e}"))),
    }
}
