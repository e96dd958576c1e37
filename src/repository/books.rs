//! Books repository

use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::book::{AuthorName, Book},
};

/// Escape LIKE wildcards so the query matches as a literal substring
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: SqlitePool,
}

impl BooksRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all books in insertion order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY book_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Books whose title or author contains `query`, ignoring case.
    /// Matches against the lowercased copies stored at insert.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT * FROM books
            WHERE title_folded LIKE ?1 ESCAPE '\' OR author_folded LIKE ?1 ESCAPE '\'
            ORDER BY title_folded, book_id
            "#,
        )
        .bind(like_pattern(&query.to_lowercase()))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, book_id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE book_id = ?")
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert a book and return its id
    pub async fn create(
        &self,
        title: &str,
        author: &str,
        publication_year: Option<i32>,
        image_url: &str,
    ) -> AppResult<i64> {
        let book_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, author, publication_year, image_url, title_folded, author_folded)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING book_id
            "#,
        )
        .bind(title)
        .bind(author)
        .bind(publication_year)
        .bind(image_url)
        .bind(title.to_lowercase())
        .bind(author.to_lowercase())
        .fetch_one(&self.pool)
        .await?;
        Ok(book_id)
    }

    /// Distinct author names, sorted
    pub async fn authors(&self) -> AppResult<Vec<AuthorName>> {
        let rows = sqlx::query_as::<_, AuthorName>(
            "SELECT DISTINCT author AS name FROM books ORDER BY author COLLATE NOCASE",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("dune"), "%dune%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let pool = crate::db::connect_in_memory().await.unwrap();
        let repo = BooksRepository::new(pool);
        repo.create("Dune", "Frank Herbert", Some(1965), "x").await.unwrap();
        repo.create("Emma", "Jane Austen", Some(1815), "x").await.unwrap();

        let hits = repo.search("DUNE").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Dune");

        let hits = repo.search("austen").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].author, "Jane Austen");

        assert!(repo.search("%").await.unwrap().is_empty());

        let book = &repo.search("dune").await.unwrap()[0];
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
    }
}
