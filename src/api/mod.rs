//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod call_log;
pub mod health;
pub mod index;
pub mod openapi;
pub mod reviews;

use axum::{
    extract::{FromRequest, FromRequestParts},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

use call_log::CallLogger;

/// JSON body extractor whose rejections use the `{ "error": ... }` envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections use the `{ "error": ... }` envelope
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Parse a numeric id taken from the path
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID format", what)))
}

/// Create the application router with all routes. Every `/api` route is
/// wrapped in its own [`CallLogger`] at registration.
pub fn router(state: AppState) -> Router {
    let logs = state.services.repository.logs.clone();
    let logged = |function_name: &'static str| {
        middleware::from_fn_with_state(
            CallLogger::new(function_name, logs.clone()),
            call_log::record_call,
        )
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Books
        .route("/books", get(books::get_all_books).layer(logged("get_all_books")))
        .route("/search", get(books::search_books).layer(logged("search_books")))
        .route("/add_book", post(books::add_book).layer(logged("add_book")))
        .route("/book/:id", get(books::get_book).layer(logged("get_book")))
        .route("/authors", get(books::get_all_authors).layer(logged("get_all_authors")))
        // Reviews
        .route("/reviews", get(reviews::get_all_reviews).layer(logged("get_all_reviews")))
        .route("/add_review", post(reviews::add_review).layer(logged("add_review")))
        .route(
            "/reviews/book/:id",
            get(reviews::get_reviews_by_book).layer(logged("get_reviews_by_book")),
        );

    Router::new()
        .route("/", get(index::index_page))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api", api)
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
