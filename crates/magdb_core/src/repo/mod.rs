//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per catalog record.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Records are valid by construction; read paths re-validate stored rows
//!   and report bad data as `InvalidData` instead of masking it.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Every list query has a deterministic `ORDER BY`.

use crate::db::DbError;
use crate::model::article::ArticleId;
use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article_repo;
pub mod author_repo;
pub mod magazine_repo;
mod rows;

pub type RepoResult<T> = Result<T, RepoError>;

/// Identity of a catalog row, used in not-found reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Author(AuthorId),
    Magazine(MagazineId),
    Article(ArticleId),
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Author(id) => write!(f, "author {id}"),
            Self::Magazine(id) => write!(f, "magazine {id}"),
            Self::Article(id) => write!(f, "article {id}"),
        }
    }
}

/// Error for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(EntityRef),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(entity) => write!(f, "not found: {entity}"),
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
