//! Author use-case service.
//!
//! # Responsibility
//! - Create authors and publish their articles.
//! - Derive author-level views such as topic areas.
//!
//! # Invariants
//! - `add_article` persists the article before returning it.
//! - `topic_areas` is sorted and free of duplicates.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::Magazine;
use crate::repo::article_repo::ArticleRepository;
use crate::repo::author_repo::AuthorRepository;
use crate::repo::EntityRef;
use crate::service::{require_saved, ServiceError, ServiceResult};
use log::info;
use std::collections::BTreeSet;

/// Use-case service for author-side operations.
pub struct AuthorService<A: AuthorRepository, R: ArticleRepository> {
    authors: A,
    articles: R,
}

impl<A: AuthorRepository, R: ArticleRepository> AuthorService<A, R> {
    /// Creates a service using the provided repository implementations.
    pub fn new(authors: A, articles: R) -> Self {
        Self { authors, articles }
    }

    /// Validates and persists a new author.
    pub fn create_author(&self, name: impl Into<String>) -> ServiceResult<Author> {
        let mut author = Author::new(name)?;
        let id = self.authors.save_author(&mut author)?;
        info!("event=author_create module=service status=ok author_id={id}");
        Ok(author)
    }

    pub fn get_author(&self, id: AuthorId) -> ServiceResult<Option<Author>> {
        Ok(self.authors.find_author(id)?)
    }

    pub fn list_authors(&self) -> ServiceResult<Vec<Author>> {
        Ok(self.authors.list_authors()?)
    }

    /// Articles written by `author`, oldest first.
    pub fn articles(&self, author: &Author) -> ServiceResult<Vec<Article>> {
        let id = require_saved(author.id(), "author")?;
        Ok(self.authors.articles_by_author(id)?)
    }

    /// Distinct magazines `author` has written for.
    pub fn magazines(&self, author: &Author) -> ServiceResult<Vec<Magazine>> {
        let id = require_saved(author.id(), "author")?;
        Ok(self.authors.magazines_for_author(id)?)
    }

    /// Creates and saves an article with empty content.
    ///
    /// # Contract
    /// - Both `author` and `magazine` must already be saved.
    /// - Returns the persisted article with its id set.
    pub fn add_article(
        &self,
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> ServiceResult<Article> {
        let author_id = require_saved(author.id(), "author")?;
        let magazine_id = require_saved(magazine.id(), "magazine")?;

        let mut article = Article::new(title, "", author, magazine)?;
        let article_id = self.articles.save_article(&mut article)?;
        info!(
            "event=article_create module=service status=ok article_id={} author_id={} magazine_id={}",
            article_id, author_id, magazine_id
        );
        Ok(article)
    }

    /// Author who wrote `article`.
    pub fn author_of(&self, article: &Article) -> ServiceResult<Author> {
        let id = article.author_id();
        self.authors
            .find_author(id)?
            .ok_or(ServiceError::NotFound(EntityRef::Author(id)))
    }

    /// Unique categories of the magazines `author` has written for.
    pub fn topic_areas(&self, author: &Author) -> ServiceResult<Vec<String>> {
        let categories = self
            .magazines(author)?
            .into_iter()
            .map(|magazine| magazine.category().to_string())
            .collect::<BTreeSet<_>>();
        Ok(categories.into_iter().collect())
    }
}
