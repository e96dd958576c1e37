//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, reviews};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "Personal library catalog, search and reviews",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "Bookshelf API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::get_all_books,
        books::search_books,
        books::add_book,
        books::get_book,
        books::get_all_authors,
        // Reviews
        reviews::get_all_reviews,
        reviews::add_review,
        reviews::get_reviews_by_book,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::AuthorName,
            books::BooksResponse,
            books::SearchResponse,
            books::BookCreatedResponse,
            books::BookResponse,
            books::AuthorsResponse,
            // Reviews
            crate::models::review::Review,
            crate::models::review::CreateReview,
            reviews::ReviewsResponse,
            reviews::ReviewCreatedResponse,
            reviews::BookReviewsResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog and search"),
        (name = "reviews", description = "Ratings and comments")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_is_documented() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/book/{id}"));

        let json = doc.to_json().unwrap();
        assert!(json.contains("#/components/schemas/ErrorResponse"));

        let components = doc.components.unwrap();
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}
