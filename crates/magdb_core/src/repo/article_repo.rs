//! Article repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Author/magazine references are checked by SQLite foreign keys; a
//!   dangling id surfaces as `RepoError::Db`.

use crate::model::article::{Article, ArticleId};
use crate::repo::rows::{collect_rows, parse_article_row, ARTICLE_COLUMNS};
use crate::repo::{EntityRef, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface for article persistence.
pub trait ArticleRepository {
    /// Inserts or updates `article`; assigns the id on insert.
    fn save_article(&self, article: &mut Article) -> RepoResult<ArticleId>;
    fn find_article(&self, id: ArticleId) -> RepoResult<Option<Article>>;
    fn list_articles(&self) -> RepoResult<Vec<Article>>;
    fn delete_article(&self, id: ArticleId) -> RepoResult<()>;
}

/// SQLite-backed article repository.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn save_article(&self, article: &mut Article) -> RepoResult<ArticleId> {
        match article.id() {
            None => {
                self.conn.execute(
                    "INSERT INTO articles (title, content, author_id, magazine_id)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        article.title(),
                        article.content.as_str(),
                        article.author_id(),
                        article.magazine_id(),
                    ],
                )?;
                let id = self.conn.last_insert_rowid();
                article.assign_id(id);
                Ok(id)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE articles
                     SET
                        title = ?1,
                        content = ?2,
                        author_id = ?3,
                        magazine_id = ?4
                     WHERE id = ?5;",
                    params![
                        article.title(),
                        article.content.as_str(),
                        article.author_id(),
                        article.magazine_id(),
                        id,
                    ],
                )?;
                if changed == 0 {
                    return Err(RepoError::NotFound(EntityRef::Article(id)));
                }
                Ok(id)
            }
        }
    }

    fn find_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let article = self
            .conn
            .query_row(
                &format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE articles.id = ?1;"),
                [id],
                |row| Ok(parse_article_row(row)),
            )
            .optional()?;
        article.transpose()
    }

    fn list_articles(&self) -> RepoResult<Vec<Article>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY articles.id ASC;"
        ))?;
        collect_rows(&mut stmt, [], parse_article_row)
    }

    fn delete_article(&self, id: ArticleId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM articles WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(EntityRef::Article(id)));
        }
        Ok(())
    }
}
