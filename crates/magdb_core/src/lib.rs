//! Core data-access layer for the magazine catalog.
//! Authors write articles; magazines publish them. This crate owns the
//! schema, the record invariants and every catalog query.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig, DEFAULT_DB_FILE};
pub use db::{clear_all, open_db, open_db_in_memory, Database, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::ValidationError;
pub use repo::article_repo::{ArticleRepository, SqliteArticleRepository};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::magazine_repo::{MagazineRepository, SqliteMagazineRepository};
pub use repo::{EntityRef, RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::magazine_service::{MagazineService, CONTRIBUTING_AUTHOR_THRESHOLD};
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
