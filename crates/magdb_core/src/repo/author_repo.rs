//! Author repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist authors and assign ids on first save.
//! - Answer author-centric relationship queries (articles, magazines).
//!
//! # Invariants
//! - `save_author` inserts when `id` is `None` and updates otherwise.
//! - `magazines_for_author` returns each magazine once, ordered by id.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::Magazine;
use crate::repo::rows::{
    collect_rows, parse_article_row, parse_author_row, parse_magazine_row, ARTICLE_COLUMNS,
    AUTHOR_COLUMNS, MAGAZINE_COLUMNS,
};
use crate::repo::{EntityRef, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface for author persistence and author-side queries.
pub trait AuthorRepository {
    /// Inserts or updates `author`; assigns the id on insert.
    fn save_author(&self, author: &mut Author) -> RepoResult<AuthorId>;
    fn find_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    fn list_authors(&self) -> RepoResult<Vec<Author>>;
    /// Fails with a foreign-key error while the author still has articles.
    fn delete_author(&self, id: AuthorId) -> RepoResult<()>;
    fn articles_by_author(&self, id: AuthorId) -> RepoResult<Vec<Article>>;
    fn magazines_for_author(&self, id: AuthorId) -> RepoResult<Vec<Magazine>>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn save_author(&self, author: &mut Author) -> RepoResult<AuthorId> {
        match author.id() {
            None => {
                self.conn.execute(
                    "INSERT INTO authors (name) VALUES (?1);",
                    params![author.name()],
                )?;
                let id = self.conn.last_insert_rowid();
                author.assign_id(id);
                Ok(id)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE authors SET name = ?1 WHERE id = ?2;",
                    params![author.name(), id],
                )?;
                if changed == 0 {
                    return Err(RepoError::NotFound(EntityRef::Author(id)));
                }
                Ok(id)
            }
        }
    }

    fn find_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let author = self
            .conn
            .query_row(
                &format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE authors.id = ?1;"),
                [id],
                |row| Ok(parse_author_row(row)),
            )
            .optional()?;
        author.transpose()
    }

    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors ORDER BY authors.id ASC;"
        ))?;
        collect_rows(&mut stmt, [], parse_author_row)
    }

    fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM authors WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(EntityRef::Author(id)));
        }
        Ok(())
    }

    fn articles_by_author(&self, id: AuthorId) -> RepoResult<Vec<Article>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ARTICLE_COLUMNS}
             FROM articles
             WHERE articles.author_id = ?1
             ORDER BY articles.id ASC;"
        ))?;
        collect_rows(&mut stmt, [id], parse_article_row)
    }

    fn magazines_for_author(&self, id: AuthorId) -> RepoResult<Vec<Magazine>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT DISTINCT {MAGAZINE_COLUMNS}
             FROM magazines
             INNER JOIN articles ON articles.magazine_id = magazines.id
             WHERE articles.author_id = ?1
             ORDER BY magazines.id ASC;"
        ))?;
        collect_rows(&mut stmt, [id], parse_magazine_row)
    }
}
