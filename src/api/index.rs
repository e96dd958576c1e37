//! Server-rendered landing page

use axum::{extract::State, response::Html};

use crate::{client::render, error::AppResult, AppState};

/// Book shelf and latest reviews as a static HTML page
pub async fn index_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.catalog.list_books().await?;
    let reviews = state.services.reviews.list_reviews().await?;
    Ok(Html(render::index_page(&books, &reviews)))
}
