//! SQLite connection pool setup

use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions},
    ConnectOptions,
};

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};

/// Open (creating if needed) the database file and create the tables.
pub async fn connect(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    let connect_opts = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(30))
        .disable_statement_logging();

    if let Some(dir) = connect_opts.clone().get_filename().parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|e| {
                AppError::Internal(format!(
                    "Cannot create database directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(connect_opts)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

/// In-memory database for tests. A single connection that never expires
/// keeps the data alive for the pool's lifetime.
pub async fn connect_in_memory() -> AppResult<SqlitePool> {
    let connect_opts = SqliteConnectOptions::from_str("sqlite::memory:")?.disable_statement_logging();

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect_opts)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

/// Create the `books`, `reviews` and `logs` tables
pub async fn migrate(pool: &SqlitePool) -> AppResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_creates_missing_directory_and_tables() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("books.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            max_connections: 2,
        };

        let pool = connect(&config).await.unwrap();
        assert!(path.exists());

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('books', 'reviews', 'logs') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(tables, ["books", "logs", "reviews"]);
        pool.close().await;

        // Reopening an existing file keeps the schema
        let pool = connect(&config).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
