//! Reviews repository

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{error::AppResult, models::review::Review};

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: SqlitePool,
}

impl ReviewsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY review_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_for_book(&self, book_id: i64) -> AppResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE book_id = ? ORDER BY review_id",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a review dated now and return its id
    pub async fn create(
        &self,
        book_id: i64,
        user: &str,
        rating: i64,
        comment: &str,
    ) -> AppResult<i64> {
        let review_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO reviews (book_id, user, rating, comment, review_date)
            VALUES (?, ?, ?, ?, ?)
            RETURNING review_id
            "#,
        )
        .bind(book_id)
        .bind(user)
        .bind(rating)
        .bind(comment)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(review_id)
    }
}
