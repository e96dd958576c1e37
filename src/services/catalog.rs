//! Catalog management service

use validator::Validate;

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::book::{AuthorName, Book, CreateBook},
    repository::Repository,
};

/// Books inserted into an empty catalog at startup:
/// (title, author, publication year, cover)
const SAMPLE_BOOKS: &[(&str, &str, i32, &str)] = &[
    ("Clean Code", "Robert C. Martin", 2008, "https://m.media-amazon.com/images/I/41xShlnTZTL._SX376_BO1,204,203,200_.jpg"),
    ("The Pragmatic Programmer", "Andrew Hunt", 1999, "https://m.media-amazon.com/images/I/51W1sBPO7tL._SX380_BO1,204,203,200_.jpg"),
    ("Design Patterns", "Erich Gamma", 1994, "https://m.media-amazon.com/images/I/51szD9HC9pL._SX395_BO1,204,203,200_.jpg"),
    ("You Don't Know JS", "Kyle Simpson", 2014, "https://m.media-amazon.com/images/I/41T5H8u7fUL._SX331_BO1,204,203,200_.jpg"),
    ("The Clean Coder", "Robert C. Martin", 2011, "https://m.media-amazon.com/images/I/51ZWsJc-p5L._SX384_BO1,204,203,200_.jpg"),
    ("Code Complete", "Steve McConnell", 2004, "https://m.media-amazon.com/images/I/515iO+E+8CL._SX408_BO1,204,203,200_.jpg"),
    ("Refactoring", "Martin Fowler", 1999, "https://m.media-amazon.com/images/I/41LBzpPXCOL._SX376_BO1,204,203,200_.jpg"),
    ("Introduction to Algorithms", "Thomas H. Cormen", 2009, "https://m.media-amazon.com/images/I/51fgDX37U7L._SX440_BO1,204,203,200_.jpg"),
    ("Cracking the Coding Interview", "Gayle Laakmann McDowell", 2015, "https://m.media-amazon.com/images/I/41oYsXjLvZL._SX348_BO1,204,203,200_.jpg"),
    ("The Mythical Man-Month", "Frederick P. Brooks Jr.", 1975, "https://m.media-amazon.com/images/I/51XnDL5KC+L._SX334_BO1,204,203,200_.jpg"),
    ("Eloquent JavaScript", "Marijn Haverbeke", 2018, "https://m.media-amazon.com/images/I/51InjRPaF7L._SX377_BO1,204,203,200_.jpg"),
    ("Head First Design Patterns", "Eric Freeman", 2004, "https://m.media-amazon.com/images/I/51S8VRFN0CL._SX430_BO1,204,203,200_.jpg"),
];

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Case-insensitive substring search over title and author.
    /// An empty query is rejected before reaching the store.
    pub async fn search_books(&self, query: &str) -> AppResult<Vec<Book>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::BadRequest("No search query provided".to_string()));
        }
        self.repository.books.search(query).await
    }

    pub async fn get_book(&self, book_id: i64) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Add a book and return its id
    pub async fn add_book(&self, data: &CreateBook) -> AppResult<i64> {
        data.validate()?;

        let book_id = self
            .repository
            .books
            .create(
                data.title.trim(),
                data.author_or_default(),
                data.publication_year,
                data.image_url_or(&self.config.placeholder_image_url),
            )
            .await?;

        tracing::info!("Added book id={} title={:?}", book_id, data.title.trim());
        Ok(book_id)
    }

    pub async fn list_authors(&self) -> AppResult<Vec<AuthorName>> {
        self.repository.books.authors().await
    }

    /// Fill an empty catalog with the sample books. Returns the number inserted.
    pub async fn seed_sample_books(&self) -> AppResult<usize> {
        let existing = self.repository.books.count().await?;
        if existing > 0 {
            tracing::info!("Catalog already initialized with {} books", existing);
            return Ok(0);
        }

        for (title, author, year, image_url) in SAMPLE_BOOKS {
            self.repository
                .books
                .create(title, author, Some(*year), image_url)
                .await?;
        }

        tracing::info!("Inserted {} sample books", SAMPLE_BOOKS.len());
        Ok(SAMPLE_BOOKS.len())
    }
}
