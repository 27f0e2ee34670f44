use magdb_core::{
    clear_all, ArticleRepository, AuthorRepository, Database, MagazineRepository,
    SqliteAuthorRepository, SqliteMagazineRepository,
};
use magdb_core::{Author, AuthorService, Magazine, SqliteArticleRepository};

#[test]
fn each_connection_sees_rows_committed_by_previous_ones() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("magazine.db")).unwrap();
    assert!(db.path().exists());

    let author_id = {
        let conn = db.connect().unwrap();
        let mut author = Author::new("John Doe").unwrap();
        SqliteAuthorRepository::new(&conn)
            .save_author(&mut author)
            .unwrap()
    };

    let conn = db.connect().unwrap();
    let loaded = SqliteAuthorRepository::new(&conn)
        .find_author(author_id)
        .unwrap()
        .unwrap();
    assert_eq!(loaded.name(), "John Doe");
}

#[test]
fn clear_all_removes_every_row() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("magazine.db")).unwrap();
    let conn = db.connect().unwrap();

    let mut magazine = Magazine::new("Tech Today", "Technology").unwrap();
    SqliteMagazineRepository::new(&conn)
        .save_magazine(&mut magazine)
        .unwrap();
    let service = AuthorService::new(
        SqliteAuthorRepository::new(&conn),
        SqliteArticleRepository::new(&conn),
    );
    let author = service.create_author("Jane Smith").unwrap();
    service.add_article(&author, &magazine, "AI Trends").unwrap();

    clear_all(&conn).unwrap();

    assert!(SqliteAuthorRepository::new(&conn)
        .list_authors()
        .unwrap()
        .is_empty());
    assert!(SqliteMagazineRepository::new(&conn)
        .list_magazines()
        .unwrap()
        .is_empty());
    assert!(SqliteArticleRepository::new(&conn)
        .list_articles()
        .unwrap()
        .is_empty());
}
