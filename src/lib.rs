//! Gridwit - a crossword puzzle archive over SQLite
//!
//! Gridwit ingests raw crossword JSON documents (flat cell grid,
//! per-cell numbering, flattened across/down clue and answer lists)
//! into normalized puzzle and clue records with explicit start
//! positions, and exposes CRUD-style queries and per-user solving
//! progress over the resulting archive.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`ingest`] - Grid scanning, document normalization, batch import
//! - [`core`] - Domain types, document schema, records, configuration
//! - [`store`] - Storage: the importer's collaborator trait, the SQLite
//!   backend, the query surface, and a mock for tests
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. Malformed documents are rejected with a single typed error at the
//!    boundary, before any processing
//! 2. A puzzle and its clues commit together or not at all; no document
//!    is ever partially persisted
//! 3. One bad document never halts a batch import; the importer is the
//!    pipeline's single recovery boundary
//! 4. The importer's refresh is destructive and documented as such -
//!    re-importing never duplicates records

pub mod cli;
pub mod core;
pub mod ingest;
pub mod store;
pub mod ui;
