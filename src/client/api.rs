//! HTTP client for the Bookshelf REST API

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::{
    api::{
        books::{BookCreatedResponse, BooksResponse, SearchResponse},
        reviews::{ReviewCreatedResponse, ReviewsResponse},
    },
    error::ErrorResponse,
    models::{
        book::{Book, CreateBook},
        review::{CreateReview, Review},
    },
};

use super::ClientError;

#[derive(Clone)]
pub struct BookshelfClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookshelfClient {
    /// `base_url` is the server root, e.g. `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, ClientError> {
        let response = self.http.get(self.url("/books")).send().await?;
        let body: BooksResponse = read_json(response).await?;
        Ok(body.books)
    }

    /// Search by title or author. Blank queries are rejected locally.
    pub async fn search_books(&self, query: &str) -> Result<Vec<Book>, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ClientError::Validation("Please enter a search term".to_string()));
        }

        let response = self
            .http
            .get(self.url("/search"))
            .query(&[("q", query)])
            .send()
            .await?;
        let body: SearchResponse = read_json(response).await?;
        Ok(body.results)
    }

    pub async fn add_book(&self, book: &CreateBook) -> Result<i64, ClientError> {
        let response = self.http.post(self.url("/add_book")).json(book).send().await?;
        let body: BookCreatedResponse = read_json(response).await?;
        Ok(body.book_id)
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>, ClientError> {
        let response = self.http.get(self.url("/reviews")).send().await?;
        let body: ReviewsResponse = read_json(response).await?;
        Ok(body.reviews)
    }

    pub async fn add_review(&self, review: &CreateReview) -> Result<i64, ClientError> {
        let response = self.http.post(self.url("/add_review")).json(review).send().await?;
        let body: ReviewCreatedResponse = read_json(response).await?;
        Ok(body.review_id)
    }
}

/// Decode a success body, or turn an error envelope into [`ClientError::Api`]
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };
    Err(ClientError::Api { status, message })
}
