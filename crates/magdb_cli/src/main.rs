//! `magdb` command line entry point.
//!
//! # Responsibility
//! - Seed a sample catalog and print every relationship/aggregate query.
//! - Reset a catalog file to an empty state.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use magdb_core::{
    clear_all, init_logging, Article, Author, AuthorService, CoreConfig, Database, Magazine,
    MagazineService, SqliteArticleRepository, SqliteAuthorRepository, SqliteMagazineRepository,
    ValidationError,
};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// configuration file path (TOML)
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// database file; overrides `db_path` from config and environment
    #[clap(long)]
    db: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the catalog with sample data and print every query result
    Demo,
    /// Delete every author, magazine and article
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CoreConfig::load(cli.config.as_deref())?;
    if let Some(db_path) = cli.db {
        config.db_path = db_path;
    }
    init_logging(&config.log_level, config.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let db = config
        .open_database()
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;
    info!(
        "event=cli_start module=cli status=ok db_path={}",
        db.path().display()
    );

    match cli.command {
        Commands::Demo => run_demo(&db),
        Commands::Reset => {
            let conn = db.connect()?;
            clear_all(&conn)?;
            println!("catalog at {} is now empty", db.path().display());
            Ok(())
        }
    }
}

fn run_demo(db: &Database) -> Result<()> {
    let (john, tech) = seed(db)?;

    // Fresh connection: everything below reads what `seed` committed.
    let conn = db.connect()?;
    let authors = AuthorService::new(
        SqliteAuthorRepository::new(&conn),
        SqliteArticleRepository::new(&conn),
    );
    let magazines = MagazineService::new(SqliteMagazineRepository::new(&conn));

    println!("Author articles: {:?}", titles(&authors.articles(&john)?));
    println!("Author magazines: {:?}", names(&authors.magazines(&john)?));
    println!("Author topic areas: {:?}", authors.topic_areas(&john)?);

    println!("Magazine articles: {:?}", titles(&magazines.articles(&tech)?));
    println!(
        "Magazine contributors: {:?}",
        author_names(&magazines.contributors(&tech)?)
    );
    println!("Magazine article titles: {:?}", magazines.article_titles(&tech)?);
    println!(
        "Magazine contributing authors: {:?}",
        author_names(&magazines.contributing_authors(&tech)?)
    );
    println!(
        "Top publisher: {}",
        magazines
            .top_publisher()?
            .map_or_else(|| "none".to_string(), |magazine| magazine.name().to_string())
    );

    report_validation("author name", Author::new("").err());
    report_validation("magazine name", Magazine::new("", "Category").err());
    report_validation("magazine category", Magazine::new("Name", "").err());
    report_validation(
        "article title",
        Article::new("", "Content", &john, &tech).err(),
    );
    Ok(())
}

/// Clears the catalog and writes the sample authors, magazines and articles.
fn seed(db: &Database) -> Result<(Author, Magazine)> {
    let conn = db.connect()?;
    clear_all(&conn)?;

    let authors = AuthorService::new(
        SqliteAuthorRepository::new(&conn),
        SqliteArticleRepository::new(&conn),
    );
    let magazines = MagazineService::new(SqliteMagazineRepository::new(&conn));

    let john = authors.create_author("John Doe")?;
    let jane = authors.create_author("Jane Smith")?;
    let tech = magazines.create_magazine("Tech Today", "Technology")?;
    let health = magazines.create_magazine("Health Weekly", "Health")?;

    authors.add_article(&john, &tech, "AI Trends")?;
    authors.add_article(&john, &health, "Healthy Living")?;
    authors.add_article(&jane, &tech, "Blockchain Basics")?;
    authors.add_article(&jane, &tech, "Cybersecurity Tips")?;
    authors.add_article(&jane, &tech, "Machine Learning")?;

    Ok((john, tech))
}

fn report_validation(field: &str, err: Option<ValidationError>) {
    match err {
        Some(err) => println!("Validation error for {field}: {err}"),
        None => println!("Validation for {field} unexpectedly passed"),
    }
}

fn titles(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(Article::title).collect()
}

fn names(magazines: &[Magazine]) -> Vec<&str> {
    magazines.iter().map(Magazine::name).collect()
}

fn author_names(authors: &[Author]) -> Vec<&str> {
    authors.iter().map(Author::name).collect()
}
