//! Author record.
//!
//! # Invariants
//! - `name` is non-empty and immutable once constructed.

use crate::model::validation::{require_non_empty, ValidationError};
use serde::Serialize;

/// Row id assigned by SQLite on first save.
pub type AuthorId = i64;

/// A person who writes articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: Option<AuthorId>,
    name: String,
}

impl Author {
    /// Creates an unsaved author.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: require_non_empty(name.into(), ValidationError::EmptyName)?,
        })
    }

    /// Rebuilds an author whose identity already exists in storage.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let mut author = Self::new(name)?;
        author.id = Some(id);
        Ok(author)
    }

    pub fn id(&self) -> Option<AuthorId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn assign_id(&mut self, id: AuthorId) {
        self.id = Some(id);
    }
}
