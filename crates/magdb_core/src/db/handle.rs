//! File-backed database handle with connection-per-call semantics.
//!
//! # Invariants
//! - The schema is bootstrapped once by [`Database::open`].
//! - Each [`Database::connect`] call returns an independent connection; the
//!   caller drops it when the unit of work is done.

use super::open::open_db;
use super::DbResult;
use log::info;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Location of a catalog database file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Creates the database file if needed and applies all migrations.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref().to_path_buf();
        drop(open_db(&path)?);
        Ok(Self { path })
    }

    /// Path of the backing SQLite file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh, migrated connection for one unit of work.
    pub fn connect(&self) -> DbResult<Connection> {
        open_db(&self.path)
    }
}

/// Deletes every catalog row, children first so foreign keys stay satisfied.
pub fn clear_all(conn: &Connection) -> DbResult<()> {
    let tx = conn.unchecked_transaction()?;
    let articles = tx.execute("DELETE FROM articles;", [])?;
    let authors = tx.execute("DELETE FROM authors;", [])?;
    let magazines = tx.execute("DELETE FROM magazines;", [])?;
    tx.commit()?;

    info!(
        "event=db_clear module=db status=ok articles={} authors={} magazines={}",
        articles, authors, magazines
    );
    Ok(())
}
