//! Review endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::review::{CreateReview, Review},
    AppState,
};

use super::{parse_id, ApiJson};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewCreatedResponse {
    pub message: String,
    pub review_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookReviewsResponse {
    pub reviews: Vec<Review>,
    pub count: usize,
}

/// List all reviews
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "reviews",
    responses(
        (status = 200, description = "All reviews", body = ReviewsResponse)
    )
)]
pub async fn get_all_reviews(State(state): State<AppState>) -> AppResult<Json<ReviewsResponse>> {
    let reviews = state.services.reviews.list_reviews().await?;
    Ok(Json(ReviewsResponse { reviews }))
}

/// Add a review
#[utoipa::path(
    post,
    path = "/add_review",
    tag = "reviews",
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review added", body = ReviewCreatedResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_review(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateReview>,
) -> AppResult<(StatusCode, Json<ReviewCreatedResponse>)> {
    let review_id = state.services.reviews.add_review(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ReviewCreatedResponse {
            message: "Review added successfully".to_string(),
            review_id,
        }),
    ))
}

/// List the reviews of one book
#[utoipa::path(
    get,
    path = "/reviews/book/{id}",
    tag = "reviews",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Reviews of the book", body = BookReviewsResponse),
        (status = 400, description = "Malformed ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_reviews_by_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookReviewsResponse>> {
    let book_id = parse_id(&id, "book")?;
    let reviews = state.services.reviews.list_reviews_for_book(book_id).await?;
    Ok(Json(BookReviewsResponse {
        count: reviews.len(),
        reviews,
    }))
}
