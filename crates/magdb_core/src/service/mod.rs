//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers decoupled from storage details.
//!
//! # Invariants
//! - Relationship queries require persisted records; unsaved input is
//!   rejected with `ServiceError::Unsaved` before any SQL runs.

use crate::model::validation::ValidationError;
use crate::repo::{EntityRef, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author_service;
pub mod magazine_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input failed record validation.
    Validation(ValidationError),
    /// A record passed by the caller has never been saved.
    Unsaved(&'static str),
    /// Target row does not exist.
    NotFound(EntityRef),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Unsaved(kind) => write!(f, "{kind} has not been saved yet"),
            Self::NotFound(entity) => write!(f, "not found: {entity}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(entity) => Self::NotFound(entity),
            other => Self::Repo(other),
        }
    }
}

pub(crate) fn require_saved(id: Option<i64>, kind: &'static str) -> ServiceResult<i64> {
    id.ok_or(ServiceError::Unsaved(kind))
}
