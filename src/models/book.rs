//! Book model and related types

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Author recorded when a book is submitted without one
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Earliest accepted publication year
pub const MIN_PUBLICATION_YEAR: i32 = 1000;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: Option<i32>,
    /// Cover image (placeholder when none was given)
    pub image_url: String,
}

/// Add book request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_publication_year"))]
pub struct CreateBook {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    /// Defaults to "Unknown"
    pub author: Option<String>,
    /// Between 1000 and the current year + 10
    pub publication_year: Option<i32>,
    /// Defaults to the configured placeholder cover
    pub image_url: Option<String>,
}

impl CreateBook {
    /// Author to store, falling back to [`UNKNOWN_AUTHOR`]
    pub fn author_or_default(&self) -> &str {
        non_blank(self.author.as_deref()).unwrap_or(UNKNOWN_AUTHOR)
    }

    pub fn image_url_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        non_blank(self.image_url.as_deref()).unwrap_or(placeholder)
    }
}

/// Latest accepted publication year
pub fn max_publication_year() -> i32 {
    Utc::now().year() + 10
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_publication_year(book: &CreateBook) -> Result<(), ValidationError> {
    let Some(year) = book.publication_year else {
        return Ok(());
    };
    let max = max_publication_year();
    if (MIN_PUBLICATION_YEAR..=max).contains(&year) {
        return Ok(());
    }
    let mut err = ValidationError::new("publication_year");
    err.message = Some(
        format!(
            "Publication year must be between {} and {}",
            MIN_PUBLICATION_YEAR, max
        )
        .into(),
    );
    Err(err)
}

/// Search query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the title or author
    pub q: Option<String>,
}

/// Distinct author entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AuthorName {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, year: Option<i32>) -> CreateBook {
        CreateBook {
            title: title.to_string(),
            publication_year: year,
            ..Default::default()
        }
    }

    #[test]
    fn test_title_required() {
        assert!(book("Dune", None).validate().is_ok());
        assert!(book("", None).validate().is_err());
        assert!(book("   ", None).validate().is_err());
    }

    #[test]
    fn test_publication_year_range() {
        assert!(book("Dune", Some(1965)).validate().is_ok());
        assert!(book("Dune", Some(MIN_PUBLICATION_YEAR)).validate().is_ok());
        assert!(book("Dune", Some(max_publication_year())).validate().is_ok());
        assert!(book("Dune", Some(999)).validate().is_err());
        assert!(book("Dune", Some(max_publication_year() + 1)).validate().is_err());
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let mut data = book("Dune", None);
        assert_eq!(data.author_or_default(), UNKNOWN_AUTHOR);
        assert_eq!(data.image_url_or("placeholder.png"), "placeholder.png");

        data.author = Some("  ".to_string());
        data.image_url = Some("https://example.com/dune.jpg".to_string());
        assert_eq!(data.author_or_default(), UNKNOWN_AUTHOR);
        assert_eq!(data.image_url_or("placeholder.png"), "https://example.com/dune.jpg");
    }
}
