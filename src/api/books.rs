//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::book::{AuthorName, Book, CreateBook, SearchQuery},
    AppState,
};

use super::{parse_id, ApiJson, ApiQuery};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub results: Vec<Book>,
    /// Number of results
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookCreatedResponse {
    pub message: String,
    pub book_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    pub book: Book,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorsResponse {
    pub authors: Vec<AuthorName>,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = BooksResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_all_books(State(state): State<AppState>) -> AppResult<Json<BooksResponse>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(BooksResponse { books }))
}

/// Search books by title or author
#[utoipa::path(
    get,
    path = "/search",
    tag = "books",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching books", body = SearchResponse),
        (status = 400, description = "Missing query", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(AppError::BadRequest("No search query provided".to_string()));
    }

    let results = state.services.catalog.search_books(query).await?;
    Ok(Json(SearchResponse {
        count: results.len(),
        results,
    }))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/add_book",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book added", body = BookCreatedResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateBook>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    let book_id = state.services.catalog.add_book(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            message: "Book added successfully".to_string(),
            book_id,
        }),
    ))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 400, description = "Malformed ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book_id = parse_id(&id, "book")?;
    let book = state.services.catalog.get_book(book_id).await?;
    Ok(Json(BookResponse { book }))
}

/// List distinct authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "books",
    responses(
        (status = 200, description = "Authors", body = AuthorsResponse)
    )
)]
pub async fn get_all_authors(State(state): State<AppState>) -> AppResult<Json<AuthorsResponse>> {
    let authors = state.services.catalog.list_authors().await?;
    Ok(Json(AuthorsResponse { authors }))
}
