//! Reviews service

use validator::Validate;

use crate::{
    error::AppResult,
    models::review::{CreateReview, Review},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_reviews(&self) -> AppResult<Vec<Review>> {
        self.repository.reviews.list().await
    }

    pub async fn list_reviews_for_book(&self, book_id: i64) -> AppResult<Vec<Review>> {
        self.repository.reviews.list_for_book(book_id).await
    }

    /// Add a review and return its id. The book id is stored as given.
    pub async fn add_review(&self, data: &CreateReview) -> AppResult<i64> {
        data.validate()?;

        let review_id = self
            .repository
            .reviews
            .create(
                data.book_id,
                data.user_name.trim(),
                data.rating,
                data.review_text.trim(),
            )
            .await?;

        tracing::info!("Added review id={} for book id={}", review_id, data.book_id);
        Ok(review_id)
    }
}
