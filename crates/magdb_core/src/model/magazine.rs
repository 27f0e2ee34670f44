//! Magazine record.
//!
//! # Invariants
//! - `name` and `category` are non-empty, including after mutation.
//! - A rejected setter call leaves the previous value in place.

use crate::model::validation::{require_non_empty, ValidationError};
use serde::Serialize;

/// Row id assigned by SQLite on first save.
pub type MagazineId = i64;

/// A publication that groups articles under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: Option<MagazineId>,
    name: String,
    category: String,
}

impl Magazine {
    /// Creates an unsaved magazine.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: require_non_empty(name.into(), ValidationError::EmptyName)?,
            category: require_non_empty(category.into(), ValidationError::EmptyCategory)?,
        })
    }

    /// Rebuilds a magazine whose identity already exists in storage.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut magazine = Self::new(name, category)?;
        magazine.id = Some(id);
        Ok(magazine)
    }

    pub fn id(&self) -> Option<MagazineId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Replaces the name. Changes stay in memory until the next save.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = require_non_empty(name.into(), ValidationError::EmptyName)?;
        Ok(())
    }

    /// Replaces the category. Changes stay in memory until the next save.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        self.category = require_non_empty(category.into(), ValidationError::EmptyCategory)?;
        Ok(())
    }

    pub(crate) fn assign_id(&mut self, id: MagazineId) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::Magazine;
    use crate::model::validation::ValidationError;

    #[test]
    fn rejected_setter_keeps_previous_value() {
        let mut magazine = Magazine::new("Tech Today", "Technology").unwrap();

        assert_eq!(magazine.set_name(""), Err(ValidationError::EmptyName));
        assert_eq!(
            magazine.set_category(""),
            Err(ValidationError::EmptyCategory)
        );
        assert_eq!(magazine.name(), "Tech Today");
        assert_eq!(magazine.category(), "Technology");
    }
}
