//! Magazine repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist magazines, including name/category edits.
//! - Own the magazine-side aggregate queries (contributors, top publisher).
//!
//! # Invariants
//! - `contributors` returns each author once, ordered by id.
//! - `top_publisher` breaks article-count ties by the lowest magazine id and
//!   returns `None` when no article exists at all.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::rows::{
    collect_rows, parse_article_row, parse_author_row, parse_magazine_row, ARTICLE_COLUMNS,
    AUTHOR_COLUMNS, MAGAZINE_COLUMNS,
};
use crate::repo::{EntityRef, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface for magazine persistence and magazine-side queries.
pub trait MagazineRepository {
    /// Inserts or updates `magazine`; assigns the id on insert.
    fn save_magazine(&self, magazine: &mut Magazine) -> RepoResult<MagazineId>;
    fn find_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>>;
    fn list_magazines(&self) -> RepoResult<Vec<Magazine>>;
    /// Fails with a foreign-key error while the magazine still has articles.
    fn delete_magazine(&self, id: MagazineId) -> RepoResult<()>;
    fn articles_in_magazine(&self, id: MagazineId) -> RepoResult<Vec<Article>>;
    /// Distinct authors with at least one article in the magazine.
    fn contributors(&self, id: MagazineId) -> RepoResult<Vec<Author>>;
    fn article_titles(&self, id: MagazineId) -> RepoResult<Vec<String>>;
    /// Authors whose article count in the magazine is strictly above `threshold`.
    fn authors_with_more_articles_than(
        &self,
        id: MagazineId,
        threshold: u32,
    ) -> RepoResult<Vec<Author>>;
    /// Magazine with the highest article count.
    fn top_publisher(&self) -> RepoResult<Option<Magazine>>;
}

/// SQLite-backed magazine repository.
pub struct SqliteMagazineRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMagazineRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MagazineRepository for SqliteMagazineRepository<'_> {
    fn save_magazine(&self, magazine: &mut Magazine) -> RepoResult<MagazineId> {
        match magazine.id() {
            None => {
                self.conn.execute(
                    "INSERT INTO magazines (name, category) VALUES (?1, ?2);",
                    params![magazine.name(), magazine.category()],
                )?;
                let id = self.conn.last_insert_rowid();
                magazine.assign_id(id);
                Ok(id)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE magazines SET name = ?1, category = ?2 WHERE id = ?3;",
                    params![magazine.name(), magazine.category(), id],
                )?;
                if changed == 0 {
                    return Err(RepoError::NotFound(EntityRef::Magazine(id)));
                }
                Ok(id)
            }
        }
    }

    fn find_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        let magazine = self
            .conn
            .query_row(
                &format!("SELECT {MAGAZINE_COLUMNS} FROM magazines WHERE magazines.id = ?1;"),
                [id],
                |row| Ok(parse_magazine_row(row)),
            )
            .optional()?;
        magazine.transpose()
    }

    fn list_magazines(&self) -> RepoResult<Vec<Magazine>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {MAGAZINE_COLUMNS} FROM magazines ORDER BY magazines.id ASC;"
        ))?;
        collect_rows(&mut stmt, [], parse_magazine_row)
    }

    fn delete_magazine(&self, id: MagazineId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM magazines WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(EntityRef::Magazine(id)));
        }
        Ok(())
    }

    fn articles_in_magazine(&self, id: MagazineId) -> RepoResult<Vec<Article>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ARTICLE_COLUMNS}
             FROM articles
             WHERE articles.magazine_id = ?1
             ORDER BY articles.id ASC;"
        ))?;
        collect_rows(&mut stmt, [id], parse_article_row)
    }

    fn contributors(&self, id: MagazineId) -> RepoResult<Vec<Author>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT DISTINCT {AUTHOR_COLUMNS}
             FROM authors
             INNER JOIN articles ON articles.author_id = authors.id
             WHERE articles.magazine_id = ?1
             ORDER BY authors.id ASC;"
        ))?;
        collect_rows(&mut stmt, [id], parse_author_row)
    }

    fn article_titles(&self, id: MagazineId) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT title
             FROM articles
             WHERE magazine_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([id])?;
        let mut titles = Vec::new();
        while let Some(row) = rows.next()? {
            titles.push(row.get("title")?);
        }
        Ok(titles)
    }

    fn authors_with_more_articles_than(
        &self,
        id: MagazineId,
        threshold: u32,
    ) -> RepoResult<Vec<Author>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {AUTHOR_COLUMNS}
             FROM authors
             INNER JOIN articles ON articles.author_id = authors.id
             WHERE articles.magazine_id = ?1
             GROUP BY authors.id
             HAVING COUNT(articles.id) > ?2
             ORDER BY authors.id ASC;"
        ))?;
        collect_rows(
            &mut stmt,
            params![id, i64::from(threshold)],
            parse_author_row,
        )
    }

    fn top_publisher(&self) -> RepoResult<Option<Magazine>> {
        let magazine = self
            .conn
            .query_row(
                &format!(
                    "SELECT {MAGAZINE_COLUMNS}
                     FROM magazines
                     INNER JOIN articles ON articles.magazine_id = magazines.id
                     GROUP BY magazines.id
                     ORDER BY COUNT(articles.id) DESC, magazines.id ASC
                     LIMIT 1;"
                ),
                [],
                |row| Ok(parse_magazine_row(row)),
            )
            .optional()?;
        magazine.transpose()
    }
}
