//! Catalog domain model: authors, magazines and the articles linking them.
//!
//! # Responsibility
//! - Define the in-memory records persisted by the repository layer.
//! - Enforce field-level invariants at construction time.
//!
//! # Invariants
//! - `id` is `None` until a repository persists the record.
//! - Name, category and title fields are never empty.
//! - An article only ever references persisted authors and magazines.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
