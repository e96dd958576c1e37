//! Add-book and add-review forms with client-side validation

use validator::Validate;

use crate::{
    error::AppError,
    models::{
        book::{max_publication_year, CreateBook, MIN_PUBLICATION_YEAR},
        review::{CreateReview, MAX_RATING, MIN_RATING},
    },
};

use super::ClientError;

/// Raw text of the add-book form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub publication_year: String,
    pub image_url: String,
}

impl BookForm {
    /// Check the fields and build the request payload
    pub fn to_request(&self) -> Result<CreateBook, ClientError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ClientError::Validation("Please enter a book title".to_string()));
        }

        let publication_year = match self.publication_year.trim() {
            "" => None,
            raw => {
                let max = max_publication_year();
                match raw.parse::<i32>() {
                    Ok(year) if (MIN_PUBLICATION_YEAR..=max).contains(&year) => Some(year),
                    _ => {
                        return Err(ClientError::Validation(format!(
                            "Please enter a valid year between {} and {}",
                            MIN_PUBLICATION_YEAR, max
                        )))
                    }
                }
            }
        };

        let request = CreateBook {
            title: title.to_string(),
            author: optional(&self.author),
            publication_year,
            image_url: optional(&self.image_url),
        };
        request
            .validate()
            .map_err(|e| ClientError::Validation(AppError::from(e).public_message()))?;
        Ok(request)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Raw text of the add-review form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub book_id: String,
    pub user_name: String,
    pub rating: String,
    pub review_text: String,
}

impl ReviewForm {
    /// Check the fields and build the request payload
    pub fn to_request(&self) -> Result<CreateReview, ClientError> {
        let book_id = self
            .book_id
            .trim()
            .parse::<i64>()
            .map_err(|_| ClientError::Validation("Please select a book".to_string()))?;

        let user_name = self.user_name.trim();
        if user_name.is_empty() {
            return Err(ClientError::Validation("Please enter your name".to_string()));
        }

        let rating = match self.rating.trim().parse::<i64>() {
            Ok(rating) if (MIN_RATING..=MAX_RATING).contains(&rating) => rating,
            _ => {
                return Err(ClientError::Validation(
                    "Rating must be between 1 and 5".to_string(),
                ))
            }
        };

        let review_text = self.review_text.trim();
        if review_text.is_empty() {
            return Err(ClientError::Validation("Please write a review".to_string()));
        }

        Ok(CreateReview {
            book_id,
            user_name: user_name.to_string(),
            rating,
            review_text: review_text.to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
