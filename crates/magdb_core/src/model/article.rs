//! Article record.
//!
//! # Invariants
//! - `title` is non-empty and read-only once constructed.
//! - `author_id` and `magazine_id` come from persisted records; the storage
//!   layer additionally enforces them through foreign keys.

use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{require_non_empty, ValidationError};
use serde::Serialize;

/// Row id assigned by SQLite on first save.
pub type ArticleId = i64;

/// A piece of writing by one author, published in one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: Option<ArticleId>,
    title: String,
    /// Free text body. May be empty.
    pub content: String,
    author_id: AuthorId,
    magazine_id: MagazineId,
}

impl Article {
    /// Creates an unsaved article linking `author` and `magazine`.
    ///
    /// # Errors
    /// - `EmptyTitle` for a zero-length title.
    /// - `UnsavedReference` when either reference has no id yet.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: &Author,
        magazine: &Magazine,
    ) -> Result<Self, ValidationError> {
        let title = require_non_empty(title.into(), ValidationError::EmptyTitle)?;
        let author_id = author
            .id()
            .ok_or(ValidationError::UnsavedReference("author"))?;
        let magazine_id = magazine
            .id()
            .ok_or(ValidationError::UnsavedReference("magazine"))?;

        Ok(Self {
            id: None,
            title,
            content: content.into(),
            author_id,
            magazine_id,
        })
    }

    /// Rebuilds an article from stored column values.
    pub fn with_id(
        id: ArticleId,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: AuthorId,
        magazine_id: MagazineId,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: Some(id),
            title: require_non_empty(title.into(), ValidationError::EmptyTitle)?,
            content: content.into(),
            author_id,
            magazine_id,
        })
    }

    pub fn id(&self) -> Option<ArticleId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Moves the article to another saved author. Persisted on the next save.
    pub fn set_author(&mut self, author: &Author) -> Result<(), ValidationError> {
        self.author_id = author
            .id()
            .ok_or(ValidationError::UnsavedReference("author"))?;
        Ok(())
    }

    /// Moves the article to another saved magazine. Persisted on the next save.
    pub fn set_magazine(&mut self, magazine: &Magazine) -> Result<(), ValidationError> {
        self.magazine_id = magazine
            .id()
            .ok_or(ValidationError::UnsavedReference("magazine"))?;
        Ok(())
    }

    pub(crate) fn assign_id(&mut self, id: ArticleId) {
        self.id = Some(id);
    }
}
