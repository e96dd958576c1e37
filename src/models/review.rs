//! Review model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::book::not_blank;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Review record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Review {
    pub review_id: i64,
    pub book_id: i64,
    /// Reviewer name
    pub user: String,
    /// 1 to 5
    pub rating: i64,
    pub comment: String,
    pub review_date: DateTime<Utc>,
}

/// Add review request. The book id is not checked against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReview {
    pub book_id: i64,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "User name is required"))]
    pub user_name: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Review text is required"))]
    pub review_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: i64) -> CreateReview {
        CreateReview {
            book_id: 1,
            user_name: "ana".to_string(),
            rating,
            review_text: "Great read".to_string(),
        }
    }

    #[test]
    fn test_rating_bounds() {
        for rating in MIN_RATING..=MAX_RATING {
            assert!(review(rating).validate().is_ok());
        }
        assert!(review(0).validate().is_err());
        assert!(review(6).validate().is_err());
    }

    #[test]
    fn test_required_text_fields() {
        let mut data = review(3);
        data.user_name = String::new();
        assert!(data.validate().is_err());

        let mut data = review(3);
        data.review_text = " ".to_string();
        assert!(data.validate().is_err());
    }
}
