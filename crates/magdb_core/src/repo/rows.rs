//! Row decoding shared by the catalog repositories.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{Params, Row, Statement};

pub(crate) const AUTHOR_COLUMNS: &str = "authors.id AS id, authors.name AS name";
pub(crate) const MAGAZINE_COLUMNS: &str =
    "magazines.id AS id, magazines.name AS name, magazines.category AS category";
pub(crate) const ARTICLE_COLUMNS: &str = "articles.id AS id,
    articles.title AS title,
    articles.content AS content,
    articles.author_id AS author_id,
    articles.magazine_id AS magazine_id";

pub(crate) fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    let id = row.get("id")?;
    let name: String = row.get("name")?;
    Author::with_id(id, name)
        .map_err(|err| RepoError::InvalidData(format!("authors row {id}: {err}")))
}

pub(crate) fn parse_magazine_row(row: &Row<'_>) -> RepoResult<Magazine> {
    let id = row.get("id")?;
    let name: String = row.get("name")?;
    let category: String = row.get("category")?;
    Magazine::with_id(id, name, category)
        .map_err(|err| RepoError::InvalidData(format!("magazines row {id}: {err}")))
}

pub(crate) fn parse_article_row(row: &Row<'_>) -> RepoResult<Article> {
    let id = row.get("id")?;
    let title: String = row.get("title")?;
    let content: String = row.get("content")?;
    Article::with_id(
        id,
        title,
        content,
        row.get("author_id")?,
        row.get("magazine_id")?,
    )
    .map_err(|err| RepoError::InvalidData(format!("articles row {id}: {err}")))
}

/// Runs a prepared query and decodes every row with `parse`.
pub(crate) fn collect_rows<T, P: Params>(
    stmt: &mut Statement<'_>,
    params: P,
    parse: fn(&Row<'_>) -> RepoResult<T>,
) -> RepoResult<Vec<T>> {
    let mut rows = stmt.query(params)?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse(row)?);
    }
    Ok(items)
}
