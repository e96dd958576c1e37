//! View state machines driven by the HTTP client.
//!
//! Lists and search move through `Idle -> Loading -> Success | Error`.
//! Forms disable their submit button for exactly one in-flight request; the
//! [`Submitting`] guard restores it on every exit path.

use crate::models::{book::Book, review::Review};

use super::{forms::BookForm, forms::ReviewForm, render, BookshelfClient, ClientError};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => ViewState::Success(value),
            Err(e) => {
                tracing::warn!("Request failed: {}", e);
                ViewState::Error(e.user_message())
            }
        }
    }
}

/// Outcome reported to the user after a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Submit control of a form
#[derive(Debug, Clone)]
pub struct SubmitButton {
    idle_label: &'static str,
    busy_label: &'static str,
    disabled: bool,
}

impl SubmitButton {
    pub fn new(idle_label: &'static str, busy_label: &'static str) -> Self {
        Self {
            idle_label,
            busy_label,
            disabled: false,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.disabled {
            self.busy_label
        } else {
            self.idle_label
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disable the control until the returned guard is dropped
    pub fn begin(&mut self) -> Submitting<'_> {
        self.disabled = true;
        Submitting { button: self }
    }
}

/// Keeps a [`SubmitButton`] disabled while alive
pub struct Submitting<'a> {
    button: &'a mut SubmitButton,
}

impl Submitting<'_> {
    pub fn button(&self) -> &SubmitButton {
        self.button
    }
}

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        self.button.disabled = false;
    }
}

/// The single-page bookshelf UI
pub struct BookshelfPage {
    client: BookshelfClient,
    pub books: ViewState<Vec<Book>>,
    pub search: ViewState<Vec<Book>>,
    pub reviews: ViewState<Vec<Review>>,
    pub book_form: BookForm,
    pub review_form: ReviewForm,
    pub add_book_button: SubmitButton,
    pub add_review_button: SubmitButton,
}

impl BookshelfPage {
    pub fn new(client: BookshelfClient) -> Self {
        Self {
            client,
            books: ViewState::Idle,
            search: ViewState::Idle,
            reviews: ViewState::Idle,
            book_form: BookForm::default(),
            review_form: ReviewForm::default(),
            add_book_button: SubmitButton::new("Add Book", "Adding..."),
            add_review_button: SubmitButton::new("Add Review", "Adding..."),
        }
    }

    /// Initial page load
    pub async fn load(&mut self) {
        self.load_books().await;
        self.load_reviews().await;
    }

    pub async fn load_books(&mut self) {
        self.books = ViewState::Loading;
        self.books = ViewState::from_result(self.client.list_books().await);
    }

    pub async fn load_reviews(&mut self) {
        self.reviews = ViewState::Loading;
        self.reviews = ViewState::from_result(self.client.list_reviews().await);
    }

    /// Run a search. A blank query leaves the view idle without a request.
    pub async fn search(&mut self, query: &str) {
        if query.trim().is_empty() {
            self.search = ViewState::Idle;
            return;
        }
        self.search = ViewState::Loading;
        self.search = ViewState::from_result(self.client.search_books(query).await);
    }

    /// Submit the add-book form; on success clear it and reload the books
    pub async fn submit_book(&mut self) -> Notice {
        let request = match self.book_form.to_request() {
            Ok(request) => request,
            Err(e) => return Notice::Error(e.user_message()),
        };

        let result = {
            let _submitting = self.add_book_button.begin();
            self.client.add_book(&request).await
        };

        match result {
            Ok(book_id) => {
                tracing::debug!("Book {} added", book_id);
                self.book_form.clear();
                self.load_books().await;
                Notice::Success("Book added successfully!".to_string())
            }
            Err(e) => Notice::Error(format!("Error adding book: {}", e.user_message())),
        }
    }

    /// Submit the add-review form; on success clear it and reload the reviews
    pub async fn submit_review(&mut self) -> Notice {
        let request = match self.review_form.to_request() {
            Ok(request) => request,
            Err(e) => return Notice::Error(e.user_message()),
        };

        let result = {
            let _submitting = self.add_review_button.begin();
            self.client.add_review(&request).await
        };

        match result {
            Ok(review_id) => {
                tracing::debug!("Review {} added", review_id);
                self.review_form.clear();
                self.load_reviews().await;
                Notice::Success("Review added successfully!".to_string())
            }
            Err(e) => Notice::Error(format!("Error adding review: {}", e.user_message())),
        }
    }

    pub fn render_books(&self) -> String {
        render::book_list(&self.books)
    }

    pub fn render_search(&self) -> String {
        render::search_results(&self.search)
    }

    pub fn render_reviews(&self) -> String {
        render::review_list(&self.reviews)
    }
}
