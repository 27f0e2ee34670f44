//! Magazine use-case service.
//!
//! # Responsibility
//! - Create and edit magazines with validated name/category changes.
//! - Expose contributor and publishing aggregates.
//!
//! # Invariants
//! - A contributing author has strictly more than
//!   [`CONTRIBUTING_AUTHOR_THRESHOLD`] articles in the magazine.
//! - Edits are validated before anything is written.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::magazine_repo::MagazineRepository;
use crate::repo::EntityRef;
use crate::service::{require_saved, ServiceError, ServiceResult};
use log::info;

/// Article count an author must exceed to count as a contributing author.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: u32 = 2;

/// Use-case service for magazine-side operations.
pub struct MagazineService<M: MagazineRepository> {
    repo: M,
}

impl<M: MagazineRepository> MagazineService<M> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: M) -> Self {
        Self { repo }
    }

    /// Validates and persists a new magazine.
    pub fn create_magazine(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> ServiceResult<Magazine> {
        let mut magazine = Magazine::new(name, category)?;
        let id = self.repo.save_magazine(&mut magazine)?;
        info!("event=magazine_create module=service status=ok magazine_id={id}");
        Ok(magazine)
    }

    pub fn get_magazine(&self, id: MagazineId) -> ServiceResult<Option<Magazine>> {
        Ok(self.repo.find_magazine(id)?)
    }

    pub fn list_magazines(&self) -> ServiceResult<Vec<Magazine>> {
        Ok(self.repo.list_magazines()?)
    }

    /// Renames a saved magazine and persists the change.
    ///
    /// `magazine` is only updated once the write succeeded.
    pub fn rename(&self, magazine: &mut Magazine, name: impl Into<String>) -> ServiceResult<()> {
        let id = require_saved(magazine.id(), "magazine")?;
        let mut updated = magazine.clone();
        updated.set_name(name)?;
        self.repo.save_magazine(&mut updated)?;
        *magazine = updated;
        info!("event=magazine_rename module=service status=ok magazine_id={id}");
        Ok(())
    }

    /// Moves a saved magazine to another category and persists the change.
    ///
    /// `magazine` is only updated once the write succeeded.
    pub fn recategorize(
        &self,
        magazine: &mut Magazine,
        category: impl Into<String>,
    ) -> ServiceResult<()> {
        let id = require_saved(magazine.id(), "magazine")?;
        let mut updated = magazine.clone();
        updated.set_category(category)?;
        self.repo.save_magazine(&mut updated)?;
        *magazine = updated;
        info!("event=magazine_recategorize module=service status=ok magazine_id={id}");
        Ok(())
    }

    pub fn articles(&self, magazine: &Magazine) -> ServiceResult<Vec<Article>> {
        let id = require_saved(magazine.id(), "magazine")?;
        Ok(self.repo.articles_in_magazine(id)?)
    }

    /// Distinct authors who wrote at least one article in `magazine`.
    pub fn contributors(&self, magazine: &Magazine) -> ServiceResult<Vec<Author>> {
        let id = require_saved(magazine.id(), "magazine")?;
        Ok(self.repo.contributors(id)?)
    }

    pub fn article_titles(&self, magazine: &Magazine) -> ServiceResult<Vec<String>> {
        let id = require_saved(magazine.id(), "magazine")?;
        Ok(self.repo.article_titles(id)?)
    }

    /// Authors with more than [`CONTRIBUTING_AUTHOR_THRESHOLD`] articles in `magazine`.
    pub fn contributing_authors(&self, magazine: &Magazine) -> ServiceResult<Vec<Author>> {
        let id = require_saved(magazine.id(), "magazine")?;
        Ok(self
            .repo
            .authors_with_more_articles_than(id, CONTRIBUTING_AUTHOR_THRESHOLD)?)
    }

    /// Magazine that published `article`.
    pub fn magazine_of(&self, article: &Article) -> ServiceResult<Magazine> {
        let id = article.magazine_id();
        self.repo
            .find_magazine(id)?
            .ok_or(ServiceError::NotFound(EntityRef::Magazine(id)))
    }

    /// Magazine with the most articles, or `None` when nothing is published.
    pub fn top_publisher(&self) -> ServiceResult<Option<Magazine>> {
        Ok(self.repo.top_publisher()?)
    }
}
