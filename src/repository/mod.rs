//! Repository layer for database operations

pub mod books;
pub mod logs;
pub mod reviews;

use sqlx::SqlitePool;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: SqlitePool,
    pub books: books::BooksRepository,
    pub reviews: reviews::ReviewsRepository,
    pub logs: logs::LogsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            reviews: reviews::ReviewsRepository::new(pool.clone()),
            logs: logs::LogsRepository::new(pool.clone()),
            pool,
        }
    }
}
