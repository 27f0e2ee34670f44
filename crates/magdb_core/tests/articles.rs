use magdb_core::db::open_db_in_memory;
use magdb_core::{
    Article, ArticleRepository, Author, AuthorRepository, AuthorService, EntityRef, Magazine,
    MagazineRepository, MagazineService, RepoError, ServiceError, SqliteArticleRepository,
    SqliteAuthorRepository, SqliteMagazineRepository, ValidationError,
};
use rusqlite::Connection;

#[test]
fn save_and_find_article_keeps_references() {
    let conn = open_db_in_memory().unwrap();
    let (author, magazine) = seed(&conn);
    let repo = SqliteArticleRepository::new(&conn);

    let mut article = Article::new("AI Trends", "Long read", &author, &magazine).unwrap();
    let id = repo.save_article(&mut article).unwrap();

    let loaded = repo.find_article(id).unwrap().unwrap();
    assert_eq!(loaded, article);
    assert_eq!(loaded.author_id(), author.id().unwrap());
    assert_eq!(loaded.magazine_id(), magazine.id().unwrap());
}

#[test]
fn content_update_is_persisted() {
    let conn = open_db_in_memory().unwrap();
    let (author, magazine) = seed(&conn);
    let repo = SqliteArticleRepository::new(&conn);

    let mut article = Article::new("Draft", "", &author, &magazine).unwrap();
    repo.save_article(&mut article).unwrap();
    article.content = "final text".to_string();
    repo.save_article(&mut article).unwrap();

    let loaded = repo.find_article(article.id().unwrap()).unwrap().unwrap();
    assert_eq!(loaded.content, "final text");
    assert_eq!(repo.list_articles().unwrap().len(), 1);
}

#[test]
fn reassigned_article_is_persisted_with_new_references() {
    let conn = open_db_in_memory().unwrap();
    let (author, magazine) = seed(&conn);
    let repo = SqliteArticleRepository::new(&conn);
    let mut article = Article::new("AI Trends", "", &author, &magazine).unwrap();
    assert!(!article.is_persisted());
    let id = repo.save_article(&mut article).unwrap();
    assert!(article.is_persisted());

    let mut jane = Author::new("Jane Smith").unwrap();
    SqliteAuthorRepository::new(&conn)
        .save_author(&mut jane)
        .unwrap();
    let mut science = Magazine::new("Science Daily", "Science").unwrap();
    SqliteMagazineRepository::new(&conn)
        .save_magazine(&mut science)
        .unwrap();

    article.set_author(&jane).unwrap();
    article.set_magazine(&science).unwrap();
    assert_eq!(repo.save_article(&mut article).unwrap(), id);

    let loaded = repo.find_article(id).unwrap().unwrap();
    assert_eq!(loaded.author_id(), jane.id().unwrap());
    assert_eq!(loaded.magazine_id(), science.id().unwrap());
    assert_eq!(repo.list_articles().unwrap().len(), 1);
}

#[test]
fn author_and_magazine_are_resolved_from_article() {
    let conn = open_db_in_memory().unwrap();
    let (author, magazine) = seed(&conn);
    let authors = AuthorService::new(
        SqliteAuthorRepository::new(&conn),
        SqliteArticleRepository::new(&conn),
    );
    let magazines = MagazineService::new(SqliteMagazineRepository::new(&conn));

    let article = authors.add_article(&author, &magazine, "AI Trends").unwrap();
    assert_eq!(authors.author_of(&article).unwrap(), author);
    assert_eq!(magazines.magazine_of(&article).unwrap(), magazine);

    let stale = Article::with_id(99, "Orphan", "", 404, 405).unwrap();
    assert!(matches!(
        authors.author_of(&stale).unwrap_err(),
        ServiceError::NotFound(EntityRef::Author(404))
    ));
    assert!(matches!(
        magazines.magazine_of(&stale).unwrap_err(),
        ServiceError::NotFound(EntityRef::Magazine(405))
    ));
}

#[test]
fn article_cannot_reference_unsaved_records() {
    let conn = open_db_in_memory().unwrap();
    let (author, magazine) = seed(&conn);

    let draft_author = Author::new("Draft").unwrap();
    let draft_magazine = Magazine::new("Draft", "Misc").unwrap();

    assert_eq!(
        Article::new("t", "", &draft_author, &magazine).unwrap_err(),
        ValidationError::UnsavedReference("author")
    );
    assert_eq!(
        Article::new("t", "", &author, &draft_magazine).unwrap_err(),
        ValidationError::UnsavedReference("magazine")
    );
}

#[test]
fn dangling_reference_is_rejected_by_storage() {
    let conn = open_db_in_memory().unwrap();
    let (author, magazine) = seed(&conn);
    let repo = SqliteArticleRepository::new(&conn);

    let stale_author = Author::with_id(author.id().unwrap() + 100, "Gone").unwrap();
    let mut article = Article::new("Orphan", "", &stale_author, &magazine).unwrap();

    let err = repo.save_article(&mut article).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert_eq!(article.id(), None);
}

#[test]
fn delete_article_then_report_missing() {
    let conn = open_db_in_memory().unwrap();
    let (author, magazine) = seed(&conn);
    let repo = SqliteArticleRepository::new(&conn);
    let mut article = Article::new("Gone soon", "", &author, &magazine).unwrap();
    let id = repo.save_article(&mut article).unwrap();

    repo.delete_article(id).unwrap();
    assert!(repo.find_article(id).unwrap().is_none());
    assert!(matches!(
        repo.delete_article(id).unwrap_err(),
        RepoError::NotFound(EntityRef::Article(_))
    ));
}

#[test]
fn article_serializes_with_reference_ids() {
    let article = Article::with_id(3, "AI Trends", "body", 1, 2).unwrap();

    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["title"], "AI Trends");
    assert_eq!(json["author_id"], 1);
    assert_eq!(json["magazine_id"], 2);
}

fn seed(conn: &Connection) -> (Author, Magazine) {
    let mut author = Author::new("John Doe").unwrap();
    SqliteAuthorRepository::new(conn)
        .save_author(&mut author)
        .unwrap();
    let mut magazine = Magazine::new("Tech Today", "Technology").unwrap();
    SqliteMagazineRepository::new(conn)
        .save_magazine(&mut magazine)
        .unwrap();
    (author, magazine)
}
